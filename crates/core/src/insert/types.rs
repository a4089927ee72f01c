use crate::insert::window::PreviewWindow;

/// List-item marker recognised at the start of a bullet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletMarker {
    #[default]
    Dash,
    Star,
    Plus,
}

impl BulletMarker {
    pub fn as_char(self) -> char {
        match self {
            BulletMarker::Dash => '-',
            BulletMarker::Star => '*',
            BulletMarker::Plus => '+',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(BulletMarker::Dash),
            '*' => Some(BulletMarker::Star),
            '+' => Some(BulletMarker::Plus),
            _ => None,
        }
    }

    /// Marker of `line` if it is a bullet line.
    ///
    /// After trimming, a bullet line is a marker followed by whitespace or by
    /// nothing at all, so `---` rules and `*emphasis*` stay ordinary content.
    pub fn detect(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let mut chars = trimmed.chars();
        let marker = Self::from_char(chars.next()?)?;
        match chars.next() {
            None => Some(marker),
            Some(c) if c.is_whitespace() => Some(marker),
            Some(_) => None,
        }
    }

    /// Build the bullet line for `note`.
    pub fn line_for(self, note: &str) -> String {
        format!("{} {note}", self.as_char())
    }

    /// Strip this line's marker and the whitespace after it, if it is a bullet line.
    pub fn strip(line: &str) -> Option<&str> {
        Self::detect(line)?;
        Some(line.trim_start()[1..].trim_start())
    }
}

/// Outcome of a note insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertResult {
    /// The new document text, or the input verbatim when nothing was inserted
    pub content: String,
    /// Zero-based line index of the note line in `content`.
    ///
    /// `None` is the not-found sentinel: the placement path matched no
    /// section and `content` is unchanged. Check it before using the index.
    pub inserted_line: Option<usize>,
    /// Marker used for the note line
    pub marker: BulletMarker,
}

impl InsertResult {
    pub(crate) fn not_found(input: &str) -> Self {
        Self {
            content: input.to_string(),
            inserted_line: None,
            marker: BulletMarker::default(),
        }
    }

    pub fn is_inserted(&self) -> bool {
        self.inserted_line.is_some()
    }

    /// Lines surrounding the inserted note, or `None` if nothing was inserted.
    pub fn preview_window(&self) -> Option<PreviewWindow> {
        let line = self.inserted_line?;
        PreviewWindow::around(&self.content, line, self.marker)
    }
}
