//! String-level note insertion.
//!
//! The document is never re-rendered: lines are copied verbatim and exactly
//! one note line (plus at most one blank separator) is spliced in.

use std::ops::Range;

use tracing::debug;

use crate::insert::note::normalize_note;
use crate::insert::types::{BulletMarker, InsertResult};
use crate::lines::DocumentLines;
use crate::outline::{is_heading_line, scan_headings};
use crate::preview::PreviewOutcome;

/// The span of lines a placement path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Line index of the matched heading; `None` for the document root
    pub heading: Option<usize>,
    /// Lines belonging to the section, excluding the heading itself
    pub body: Range<usize>,
}

/// Where the note line goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertPoint {
    /// Index the note line will occupy in the original line numbering
    /// (before any separator is added)
    pub index: usize,
    /// Whether a blank separator line is added in front of the note
    pub separator: bool,
    pub marker: BulletMarker,
}

/// Find the section addressed by `placement`.
///
/// The empty path addresses the root, whose section is the whole document.
/// Otherwise the first heading (in document order) whose ancestor path equals
/// `placement` wins, and its section runs until the next heading line of any
/// level or the end of the document.
pub fn locate_section(lines: &[&str], placement: &[String]) -> Option<Section> {
    if placement.is_empty() {
        return Some(Section { heading: None, body: 0..lines.len() });
    }

    let heading =
        scan_headings(lines.iter().copied()).find(|h| h.path.as_slice() == placement)?;

    let start = heading.line + 1;
    let end = lines[start..]
        .iter()
        .position(|line| is_heading_line(line))
        .map_or(lines.len(), |offset| start + offset);

    Some(Section { heading: Some(heading.line), body: start..end })
}

/// Decide where the note goes inside `section`.
///
/// After the last bullet line of the section if there is one, so the note
/// extends an existing list even when plain text follows it. Otherwise at the
/// end of the section, behind a blank separator unless the preceding line is
/// already blank or is a heading.
pub fn plan_insertion(lines: &[&str], section: &Section) -> InsertPoint {
    let last_bullet = lines[section.body.clone()]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(offset, line)| {
            BulletMarker::detect(line).map(|marker| (section.body.start + offset, marker))
        });

    if let Some((line, marker)) = last_bullet {
        return InsertPoint { index: line + 1, separator: false, marker };
    }

    let index = section.body.end;
    let separator = index
        .checked_sub(1)
        .and_then(|prev| lines.get(prev))
        .is_some_and(|prev| !prev.trim().is_empty() && !is_heading_line(prev));

    InsertPoint { index, separator, marker: BulletMarker::default() }
}

/// Insert `note` as a bullet line into the section addressed by `placement`.
///
/// `note` must not carry its own list marker (see [`normalize_note`]).
/// When no section matches, the input comes back unchanged with
/// `inserted_line == None`.
///
/// [`normalize_note`]: crate::insert::normalize_note
pub fn insert_note(text: &str, placement: &[String], note: &str) -> InsertResult {
    let doc = DocumentLines::split(text);
    let lines = doc.lines();

    let Some(section) = locate_section(lines, placement) else {
        debug!(?placement, "placement path matches no section");
        return InsertResult::not_found(text);
    };

    let point = plan_insertion(lines, &section);
    let note_line = point.marker.line_for(note);

    let mut output: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    output.extend_from_slice(&lines[..point.index]);
    if point.separator {
        output.push("");
    }
    let inserted_line = output.len();
    output.push(note_line.as_str());
    output.extend_from_slice(&lines[point.index..]);

    debug!(
        heading = ?section.heading,
        line = inserted_line,
        separator = point.separator,
        "inserted note"
    );

    InsertResult {
        content: doc.join(&output),
        inserted_line: Some(inserted_line),
        marker: point.marker,
    }
}

/// Apply a finished preview session to the original `text`.
///
/// Only a confirmed, non-empty note whose placement still matches produces a
/// result; `None` means nothing is to be written.
pub fn commit(
    text: &str,
    placement: &[String],
    outcome: &PreviewOutcome,
) -> Option<InsertResult> {
    let PreviewOutcome::Confirmed(edited) = outcome else {
        debug!("preview cancelled; nothing to commit");
        return None;
    };

    let note = normalize_note(edited);
    if note.is_empty() {
        debug!("edited note is empty; nothing to commit");
        return None;
    }

    let result = insert_note(text, placement, &note);
    result.is_inserted().then_some(result)
}
