use writeme_core::insert::{BulletMarker, commit, insert_note};
use writeme_core::outline::parse;
use writeme_core::preview::{PreviewKey, PreviewOutcome, PreviewSession};

fn path(titles: &[&str]) -> Vec<String> {
    titles.iter().map(ToString::to_string).collect()
}

fn line_at(text: &str, index: usize) -> &str {
    text.lines().nth(index).unwrap()
}

// === Worked examples ===

#[test]
fn inserts_into_empty_trailing_section() {
    let text = "# Proj\n## Setup\n- step one\n## Usage\n";
    let result = insert_note(text, &path(&["Proj", "Usage"]), "run it");

    assert_eq!(result.content, "# Proj\n## Setup\n- step one\n## Usage\n- run it\n");
    assert_eq!(result.inserted_line, Some(4));
}

#[test]
fn empty_path_targets_whole_document() {
    let result = insert_note("# Proj\ncontent\n", &[], "x");

    assert_eq!(result.content, "# Proj\ncontent\n\n- x\n");
    assert_eq!(result.inserted_line, Some(3));
}

#[test]
fn unmatched_path_returns_input_unchanged() {
    let text = "# Proj\n## Setup\n- step one\n";
    let result = insert_note(text, &path(&["Proj", "Renamed"]), "lost");

    assert_eq!(result.inserted_line, None);
    assert!(!result.is_inserted());
    assert_eq!(result.content, text);
    assert!(result.preview_window().is_none());
}

// === Bullet handling ===

#[test]
fn appends_after_last_bullet_not_after_trailing_text() {
    let text = "# Proj\n## Setup\n- one\n- two\nSee the wiki for more.\n## Usage\n";
    let result = insert_note(text, &path(&["Proj", "Setup"]), "three");

    assert_eq!(
        result.content,
        "# Proj\n## Setup\n- one\n- two\n- three\nSee the wiki for more.\n## Usage\n"
    );
    assert_eq!(result.inserted_line, Some(4));
}

#[test]
fn bullet_list_followed_by_blank_line_keeps_separation() {
    let text = "## Todo\n- a\n\n## Done\n";
    let result = insert_note(text, &path(&["Todo"]), "b");

    assert_eq!(result.content, "## Todo\n- a\n- b\n\n## Done\n");
}

#[test]
fn reuses_the_section_bullet_marker() {
    let text = "## Ideas\n* first\n+ second\n";
    let result = insert_note(text, &path(&["Ideas"]), "third");

    assert_eq!(result.marker, BulletMarker::Plus);
    assert_eq!(line_at(&result.content, result.inserted_line.unwrap()), "+ third");
}

#[test]
fn indented_bullets_count_as_bullets() {
    let text = "## Tasks\n- parent\n  - child\ntrailing\n";
    let result = insert_note(text, &path(&["Tasks"]), "next");

    assert_eq!(result.content, "## Tasks\n- parent\n  - child\n- next\ntrailing\n");
}

#[test]
fn horizontal_rules_are_not_bullets() {
    let text = "## Log\nentry\n---\n";
    let result = insert_note(text, &path(&["Log"]), "new");

    assert_eq!(result.content, "## Log\nentry\n---\n\n- new\n");
}

// === Blank-line separator ===

#[test]
fn plain_trailing_text_gets_exactly_one_blank_line() {
    let text = "# Proj\n## Setup\nInstall the toolchain.\n## Usage\n";
    let result = insert_note(text, &path(&["Proj", "Setup"]), "pin the version");

    assert_eq!(
        result.content,
        "# Proj\n## Setup\nInstall the toolchain.\n\n- pin the version\n## Usage\n"
    );
    assert_eq!(result.inserted_line, Some(4));
}

#[test]
fn existing_blank_line_is_reused() {
    let text = "## Setup\nInstall it.\n\n## Usage\n";
    let result = insert_note(text, &path(&["Setup"]), "note");

    assert_eq!(result.content, "## Setup\nInstall it.\n\n- note\n## Usage\n");
    assert_eq!(result.inserted_line, Some(3));
}

// === Section boundaries ===

#[test]
fn last_heading_without_trailing_content() {
    let text = "# Proj\n## Setup\ntext\n## Last";
    let result = insert_note(text, &path(&["Proj", "Last"]), "end");

    assert_eq!(result.content, "# Proj\n## Setup\ntext\n## Last\n- end");
    assert_eq!(result.inserted_line, Some(4));
}

#[test]
fn parent_section_stops_at_first_subheading() {
    let text = "# Proj\nintro\n## Sub\n- sub item\n";
    let result = insert_note(text, &path(&["Proj"]), "top level");

    assert_eq!(result.content, "# Proj\nintro\n\n- top level\n## Sub\n- sub item\n");
}

#[test]
fn duplicate_paths_resolve_to_first_match() {
    // Two sections share the full path Proj > Notes; the first one wins.
    let text = "# Proj\n## Notes\n- first\n## Notes\n- second\n";
    let result = insert_note(text, &path(&["Proj", "Notes"]), "added");

    assert_eq!(result.content, "# Proj\n## Notes\n- first\n- added\n## Notes\n- second\n");
}

#[test]
fn same_title_under_different_parents_is_distinguished() {
    let text = "# A\n## Notes\n- a\n# B\n## Notes\n- b\n";
    let result = insert_note(text, &path(&["B", "Notes"]), "for b");

    assert_eq!(result.inserted_line, Some(6));
    assert_eq!(result.content, "# A\n## Notes\n- a\n# B\n## Notes\n- b\n- for b\n");
}

#[test]
fn path_must_match_exactly() {
    let text = "# Proj\n## Setup\n";
    assert!(!insert_note(text, &path(&["Setup"]), "x").is_inserted());
    assert!(!insert_note(text, &path(&["Proj", "Setup", "Extra"]), "x").is_inserted());
}

// === Formatting preservation ===

#[test]
fn crlf_documents_stay_crlf() {
    let text = "# Proj\r\n## Usage\r\n- a\r\n";
    let result = insert_note(text, &path(&["Proj", "Usage"]), "b");

    assert_eq!(result.content, "# Proj\r\n## Usage\r\n- a\r\n- b\r\n");
}

#[test]
fn untouched_lines_are_copied_verbatim() {
    let text = "# Proj\n\n#hashtag\n  odd   spacing  \n\t- tabbed\nlast";
    let result = insert_note(text, &[], "n");

    for line in text.lines() {
        assert!(result.content.lines().any(|l| l == line), "missing line {line:?}");
    }
}

// === Properties over every reachable placement ===

#[test]
fn every_selectable_path_inserts_the_note() {
    let text = "intro\n# Proj\n## Setup\n- one\nprose\n### Linux\n\n## Usage\nrun\n# Appendix\n";
    let tree = parse(text);

    for placement in tree.placement_paths() {
        let result = insert_note(text, &placement, "fresh note");
        let index = result.inserted_line.expect("selectable path must match");

        let line = line_at(&result.content, index);
        assert_eq!(BulletMarker::strip(line), Some("fresh note"), "path {placement:?}");

        // No heading line was touched, so the heading structure is unchanged
        assert_eq!(parse(&result.content), tree, "path {placement:?}");
    }
}

#[test]
fn preview_window_surrounds_inserted_line() {
    let text = "# Proj\n## Setup\n- one\n- two\n## Usage\nrun\n";
    let result = insert_note(text, &path(&["Proj", "Setup"]), "three");
    let window = result.preview_window().unwrap();

    assert_eq!(window.line, 4);
    assert_eq!(window.above, vec!["- one", "- two"]);
    assert_eq!(window.below, vec!["## Usage", "run"]);
    assert_eq!(window.marker, BulletMarker::Dash);
}

// === Committing a finished preview ===

const COMMIT_DOC: &str = "# Proj\n## Setup\n- step one\n## Usage\n";

fn preview_then(keys: impl IntoIterator<Item = PreviewKey>) -> PreviewOutcome {
    let placement = path(&["Proj", "Setup"]);
    let window = insert_note(COMMIT_DOC, &placement, "step two").preview_window().unwrap();
    PreviewSession::new(window, "step two").run_keys(keys).unwrap()
}

#[test]
fn cancelled_preview_commits_nothing_whatever_was_typed() {
    let keys = "and three".chars().map(PreviewKey::Char).chain([PreviewKey::Cancel]);
    let outcome = preview_then(keys);

    assert_eq!(outcome, PreviewOutcome::Cancelled);
    assert_eq!(commit(COMMIT_DOC, &path(&["Proj", "Setup"]), &outcome), None);
}

#[test]
fn edited_note_lands_at_previewed_line() {
    let placement = path(&["Proj", "Setup"]);
    let previewed = insert_note(COMMIT_DOC, &placement, "step two");

    let keys = "!".chars().map(PreviewKey::Char).chain([PreviewKey::Confirm]);
    let outcome = preview_then(keys);
    let committed = commit(COMMIT_DOC, &placement, &outcome).unwrap();

    assert_eq!(committed.inserted_line, previewed.inserted_line);
    assert_eq!(
        committed.content,
        "# Proj\n## Setup\n- step one\n- step two!\n## Usage\n"
    );
}

#[test]
fn emptied_note_commits_nothing() {
    let keys = std::iter::repeat_n(PreviewKey::Backspace, 20).chain([PreviewKey::Confirm]);
    let outcome = preview_then(keys);

    assert_eq!(outcome, PreviewOutcome::Confirmed(String::new()));
    assert_eq!(commit(COMMIT_DOC, &path(&["Proj", "Setup"]), &outcome), None);
}

#[test]
fn confirmed_note_is_normalised_before_commit() {
    let outcome = PreviewOutcome::Confirmed("  - tidy   up ".to_string());
    let committed = commit(COMMIT_DOC, &path(&["Proj", "Usage"]), &outcome).unwrap();

    assert_eq!(line_at(&committed.content, 4), "- tidy   up");
}

#[test]
fn commit_against_vanished_section_commits_nothing() {
    let outcome = PreviewOutcome::Confirmed("late".to_string());
    assert_eq!(commit(COMMIT_DOC, &path(&["Proj", "Gone"]), &outcome), None);
}
