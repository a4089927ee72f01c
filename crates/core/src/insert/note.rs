use crate::insert::types::BulletMarker;

/// Turn free-form note text into a single bullet-less line.
///
/// Lines are trimmed and joined with single spaces, blank lines dropped, and
/// one leading list marker removed.
pub fn normalize_note(raw: &str) -> String {
    let joined = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match BulletMarker::strip(&joined) {
        Some(rest) => rest.to_string(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_lines() {
        assert_eq!(normalize_note("  fix the\n\n  build  \n"), "fix the build");
    }

    #[test]
    fn strips_one_leading_marker() {
        assert_eq!(normalize_note("- run it"), "run it");
        assert_eq!(normalize_note("* - nested"), "- nested");
    }

    #[test]
    fn leaves_plain_dashes_alone() {
        assert_eq!(normalize_note("-v flag is verbose"), "-v flag is verbose");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_note(" \n "), "");
        assert_eq!(normalize_note("-"), "");
    }
}
