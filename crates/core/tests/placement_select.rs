use std::collections::VecDeque;

use writeme_core::outline::{HeadingNode, parse};
use writeme_core::placement::{ChoicePrompt, INSERT_HERE, PlacementError, select_placement};

/// Answers menus from a fixed script and records what it was shown.
#[derive(Default)]
struct ScriptedPrompt {
    answers: VecDeque<Result<usize, PlacementError>>,
    shown: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompt {
    fn answering(answers: &[usize]) -> Self {
        Self { answers: answers.iter().map(|&i| Ok(i)).collect(), ..Self::default() }
    }

    fn then_abort(mut self) -> Self {
        self.answers.push_back(Err(PlacementError::Aborted));
        self
    }
}

impl ChoicePrompt for ScriptedPrompt {
    fn choose(&mut self, label: &str, options: &[String]) -> Result<usize, PlacementError> {
        self.shown.push((label.to_string(), options.to_vec()));
        self.answers.pop_front().expect("prompt asked more often than scripted")
    }
}

const DOC: &str = "# Proj\n## Setup\n### Linux\n### macOS\n## Usage\n# Appendix\n";

#[test]
fn descends_to_a_leaf() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[0, 0, 1]);

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert_eq!(path, vec!["Proj", "Setup", "macOS"]);
    assert_eq!(prompt.shown.len(), 3);
}

#[test]
fn root_menu_has_no_insert_here_entry() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[1]);

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert_eq!(path, vec!["Appendix"]);
    let (label, options) = &prompt.shown[0];
    assert_eq!(label, "Choose a section");
    assert_eq!(options, &vec!["Proj".to_string(), "Appendix".to_string()]);
}

#[test]
fn nested_menus_offer_insert_here_last() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[0, 2]);

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert_eq!(path, vec!["Proj"]);
    let (label, options) = &prompt.shown[1];
    assert_eq!(label, "Choose section under 'Proj'");
    assert_eq!(
        options,
        &vec!["Setup".to_string(), "Usage".to_string(), INSERT_HERE.to_string()]
    );
}

#[test]
fn insert_here_at_a_deeper_level() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[0, 0, 2]);

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert_eq!(path, vec!["Proj", "Setup"]);
}

#[test]
fn leaf_does_not_prompt() {
    let tree = parse(DOC);
    // Proj > Usage is a leaf; the third answer is never consumed
    let mut prompt = ScriptedPrompt::answering(&[0, 1, 99]);

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert_eq!(path, vec!["Proj", "Usage"]);
    assert_eq!(prompt.shown.len(), 2);
}

#[test]
fn headingless_document_selects_root_without_prompting() {
    let tree = parse("just text\nno headings\n");
    let mut prompt = ScriptedPrompt::default();

    let path = select_placement(&tree, &mut prompt).unwrap();

    assert!(path.is_empty());
    assert!(prompt.shown.is_empty());
}

#[test]
fn abort_propagates() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[0]).then_abort();

    let err = select_placement(&tree, &mut prompt).unwrap_err();

    assert!(matches!(err, PlacementError::Aborted));
}

#[test]
fn out_of_range_choice_is_rejected() {
    let tree = parse(DOC);
    let mut prompt = ScriptedPrompt::answering(&[5]);

    let err = select_placement(&tree, &mut prompt).unwrap_err();

    assert!(matches!(err, PlacementError::InvalidChoice { index: 5, count: 2 }));
}

#[test]
fn every_placement_path_is_reachable() {
    let tree = parse(DOC);

    // Drive the selector along each path by answering with child indices
    for target in tree.placement_paths().into_iter().skip(1) {
        let mut answers = Vec::new();
        let mut node: &HeadingNode = &tree;
        for title in &target {
            let index = node.children.iter().position(|c| &c.title == title).unwrap();
            answers.push(index);
            node = &node.children[index];
        }
        if !node.is_leaf() {
            answers.push(node.children.len());
        }

        let mut prompt = ScriptedPrompt::answering(&answers);
        assert_eq!(select_placement(&tree, &mut prompt).unwrap(), target);
    }
}

#[test]
fn works_through_a_trait_object() {
    let tree = parse(DOC);
    let mut scripted = ScriptedPrompt::answering(&[1]);
    let prompt: &mut dyn ChoicePrompt = &mut scripted;

    assert_eq!(select_placement(&tree, prompt).unwrap(), vec!["Appendix"]);
}
