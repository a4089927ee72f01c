//! Interactive choice of where a note goes.
//!
//! The selector walks the heading tree top-down and asks a [`ChoicePrompt`]
//! at every level. The prompt is a seam: the binary plugs in a terminal
//! menu, tests plug in a scripted one.

use thiserror::Error;
use tracing::debug;

use crate::outline::HeadingNode;

/// Synthetic menu entry that stops the descent at the current heading.
pub const INSERT_HERE: &str = "INSERT AT THIS LEVEL";

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("selection aborted by user")]
    Aborted,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("choice {index} is out of range ({count} options)")]
    InvalidChoice { index: usize, count: usize },
}

/// Something that can present a single-choice menu.
pub trait ChoicePrompt {
    /// Show `options` under `label` and return the index of the chosen one.
    ///
    /// Returns [`PlacementError::Aborted`] when the user backs out.
    fn choose(&mut self, label: &str, options: &[String]) -> Result<usize, PlacementError>;
}

/// Walk `root` with `prompt` and return the chosen placement path.
///
/// Leaves end the walk on their own. Non-root headings with children offer
/// [`INSERT_HERE`] after their children so a section can be picked without
/// descending further. The empty path means the document root.
pub fn select_placement<P>(
    root: &HeadingNode,
    prompt: &mut P,
) -> Result<Vec<String>, PlacementError>
where
    P: ChoicePrompt + ?Sized,
{
    let mut path = Vec::new();
    let mut current = root;

    loop {
        if current.is_leaf() {
            if !current.is_root() {
                path.push(current.title.clone());
            }
            return Ok(path);
        }

        let mut options: Vec<String> =
            current.children.iter().map(|c| c.title.clone()).collect();
        if !current.is_root() {
            options.push(INSERT_HERE.to_string());
        }

        let index = prompt.choose(&menu_label(current), &options)?;
        if index >= options.len() {
            return Err(PlacementError::InvalidChoice { index, count: options.len() });
        }

        if !current.is_root() {
            path.push(current.title.clone());
        }

        match current.children.get(index) {
            Some(child) => {
                debug!(title = %child.title, "descending");
                current = child;
            }
            // The only option past the children is INSERT_HERE
            None => return Ok(path),
        }
    }
}

fn menu_label(node: &HeadingNode) -> String {
    if node.is_root() {
        "Choose a section".to_string()
    } else {
        format!("Choose section under '{}'", node.title)
    }
}
