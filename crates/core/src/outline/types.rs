use std::fmt;

/// Title carried by the synthetic document root. Never part of a placement path.
pub const ROOT_TITLE: &str = "<document>";

/// Character repeated at the start of a heading line.
const HEADING_MARKER: char = '#';

/// A single heading line recognised in the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// Number of leading `#` characters (1 or more)
    pub level: usize,
    /// Text after the marker run and its separating space, trimmed
    pub title: String,
}

impl HeadingLine {
    /// Recognise `line` as a heading.
    ///
    /// A heading is a run of one or more `#` at the very start of the line
    /// followed by a space. `#title` and indented `#` lines are content.
    pub fn parse(line: &str) -> Option<Self> {
        let level = line.chars().take_while(|&c| c == HEADING_MARKER).count();
        if level == 0 {
            return None;
        }

        // '#' is one byte, so the marker run length is also its byte length
        let rest = line[level..].strip_prefix(' ')?;

        Some(Self { level, title: rest.trim().to_string() })
    }
}

pub fn is_heading_line(line: &str) -> bool {
    HeadingLine::parse(line).is_some()
}

/// One node of the heading hierarchy.
///
/// The root is synthetic (level 0, titled [`ROOT_TITLE`]); every other node
/// stands for a heading line. Children are kept in document order and always
/// have a strictly greater level than their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    pub level: usize,
    pub title: String,
    pub children: Vec<HeadingNode>,
}

impl HeadingNode {
    pub fn root() -> Self {
        Self { level: 0, title: ROOT_TITLE.to_string(), children: Vec::new() }
    }

    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self { level, title: title.into(), children: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_titles(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.title.as_str()).collect()
    }

    /// Number of heading nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }

    /// Every placement path reachable in this tree, in document order.
    ///
    /// The root itself is reported as the empty path.
    pub fn placement_paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        let mut trail = Vec::new();
        self.collect_paths(&mut trail, &mut out);
        out
    }

    fn collect_paths(&self, trail: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if !self.is_root() {
            trail.push(self.title.clone());
        }
        out.push(trail.clone());
        for child in &self.children {
            child.collect_paths(trail, out);
        }
        if !self.is_root() {
            trail.pop();
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if !self.is_root() {
            let indent = "  ".repeat(depth.saturating_sub(1));
            let marker = HEADING_MARKER.to_string().repeat(self.level);
            writeln!(f, "{indent}{marker} {}", self.title)?;
        }
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for HeadingNode {
    fn default() -> Self {
        Self::root()
    }
}

/// Indented outline of the headings below this node, one per line.
impl fmt::Display for HeadingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, if self.is_root() { 0 } else { 1 })
    }
}
