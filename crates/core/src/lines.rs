//! Line model shared by the parser, the inserter and the preview window.
//!
//! Documents are split on `\n`. A final newline does not produce an extra
//! empty line, and CRLF documents are joined back with CRLF.

/// Line terminator used when joining a document back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A document split into lines, remembering how to join it back.
#[derive(Debug, Clone)]
pub struct DocumentLines<'a> {
    lines: Vec<&'a str>,
    ending: LineEnding,
    trailing_newline: bool,
}

impl<'a> DocumentLines<'a> {
    pub fn split(text: &'a str) -> Self {
        let ending =
            if text.contains("\r\n") { LineEnding::CrLf } else { LineEnding::Lf };

        // An empty document gains a final newline once something is added to it
        let trailing_newline = text.is_empty() || text.ends_with('\n');

        let lines = if text.is_empty() {
            Vec::new()
        } else {
            let body = text.strip_suffix('\n').unwrap_or(text);
            body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
        };

        Self { lines, ending, trailing_newline }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Join `lines` using this document's line ending and final-newline convention.
    pub fn join<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let sep = self.ending.as_str();
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(line.as_ref());
        }
        if self.trailing_newline && !lines.is_empty() {
            out.push_str(sep);
        }
        out
    }
}
