//! Terminal prompts backed by dialoguer.

use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use writeme_core::placement::{ChoicePrompt, PlacementError};

/// Whether both ends of the terminal are attached to a user.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Arrow-key menu; Esc or `q` backs out.
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl ChoicePrompt for DialoguerPrompt {
    fn choose(&mut self, label: &str, options: &[String]) -> Result<usize, PlacementError> {
        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| PlacementError::Prompt(e.to_string()))?
            .ok_or(PlacementError::Aborted)
    }
}

/// Yes/no question defaulting to "no". Esc counts as "no".
pub fn confirm(question: &str) -> io::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(false)
        .interact_opt()
        .map(|answer| answer.unwrap_or(false))
        .map_err(io::Error::other)
}
