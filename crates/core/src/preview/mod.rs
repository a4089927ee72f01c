//! Preview/edit session shown before a note is committed.
//!
//! The session is a small finite-state machine: `Editing` until the user
//! confirms or cancels. Key handling is a pure reducer; drawing and reading
//! keys belong to a [`PreviewSurface`] supplied by the caller.

pub mod buffer;
pub mod session;

use thiserror::Error;

pub use buffer::{EditBuffer, MAX_NOTE_CHARS};
pub use session::{PreviewKey, PreviewOutcome, PreviewSession, PreviewState, reduce};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("an interactive terminal is required to preview the note")]
    NotInteractive,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// An interactive surface able to run a session to a terminal state.
pub trait PreviewSurface {
    fn run(&mut self, session: PreviewSession) -> Result<PreviewOutcome, PreviewError>;
}
