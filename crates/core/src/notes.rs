//! Document-level helpers around the notes file.

use std::path::Path;
use std::{env, io};

use crate::outline::is_heading_line;

/// File name used when no notes file is given.
pub const NOTES_FILE: &str = "NOTES.md";

/// Title used when no directory name can be derived.
const FALLBACK_TITLE: &str = "Notes";

/// Content of a freshly created notes file.
pub fn fresh_document(title: &str) -> String {
    format!("# {title}\n")
}

/// Prepend `# {title}` when `content` has no heading line at all.
///
/// Returns `None` if the document already has a heading.
pub fn ensure_top_level_heading(content: &str, title: &str) -> Option<String> {
    if content.lines().any(is_heading_line) {
        return None;
    }
    Some(format!("# {title}\n{content}"))
}

/// Title for the notes file at `path`: the name of the directory holding it.
///
/// A bare file name refers to the current directory.
pub fn document_title(path: &Path) -> io::Result<String> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.to_path_buf(),
        None => env::current_dir()?,
    };
    let dir = dir.canonicalize().unwrap_or(dir);

    Ok(dir
        .file_name()
        .map_or_else(|| FALLBACK_TITLE.to_string(), |n| n.to_string_lossy().into_owned()))
}
