use tracing::debug;

use crate::lines::DocumentLines;
use crate::outline::scan::scan_headings;
use crate::outline::types::HeadingNode;

/// Parse document text into its heading tree.
///
/// Only heading lines become nodes; every other line is invisible here.
/// Never fails: empty or heading-less text yields a root without children.
pub fn parse(text: &str) -> HeadingNode {
    let doc = DocumentLines::split(text);
    let mut root = HeadingNode::root();

    // Child indices from the root down to the most recent heading
    let mut trail: Vec<usize> = Vec::new();

    for heading in scan_headings(doc.lines().iter().copied()) {
        trail.truncate(heading.depth() - 1);

        let parent = node_at_mut(&mut root, &trail);
        parent.children.push(HeadingNode::new(heading.level, heading.title()));
        trail.push(parent.children.len() - 1);
    }

    debug!(headings = root.descendant_count(), "parsed heading tree");
    root
}

fn node_at_mut<'a>(root: &'a mut HeadingNode, trail: &[usize]) -> &'a mut HeadingNode {
    trail.iter().fold(root, |node, &i| &mut node.children[i])
}
