use crate::insert::types::BulletMarker;
use crate::lines::DocumentLines;

/// Number of context lines shown on each side of the inserted line.
pub const CONTEXT_LINES: usize = 2;

/// Lines shown around a freshly inserted note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewWindow {
    /// Up to [`CONTEXT_LINES`] lines immediately before the note
    pub above: Vec<String>,
    /// Up to [`CONTEXT_LINES`] lines immediately after the note
    pub below: Vec<String>,
    /// Zero-based index of the note line in the document
    pub line: usize,
    /// Marker the note line was written with
    pub marker: BulletMarker,
}

impl PreviewWindow {
    /// Window around `line` in `text`, clamped to the document bounds.
    ///
    /// Returns `None` when `line` is past the end of the document.
    pub fn around(text: &str, line: usize, marker: BulletMarker) -> Option<Self> {
        let doc = DocumentLines::split(text);
        let lines = doc.lines();
        if line >= lines.len() {
            return None;
        }

        let start = line.saturating_sub(CONTEXT_LINES);
        let end = (line + CONTEXT_LINES).min(lines.len() - 1);

        let to_owned = |slice: &[&str]| slice.iter().map(ToString::to_string).collect();

        Some(Self {
            above: to_owned(&lines[start..line]),
            below: to_owned(&lines[line + 1..=end]),
            line,
            marker,
        })
    }
}
