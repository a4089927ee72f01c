use tracing::debug;

use crate::insert::PreviewWindow;
use crate::preview::buffer::EditBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Editing,
    Confirmed,
    Cancelled,
}

impl PreviewState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PreviewState::Editing)
    }
}

/// Keys the session understands, already decoded from the host's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKey {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Confirm,
    Cancel,
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The user confirmed; carries the edited note text
    Confirmed(String),
    Cancelled,
}

/// Advance the state machine by one key.
///
/// Terminal states absorb every key. While editing, `Confirm` and `Cancel`
/// end the session and every other key edits the buffer.
pub fn reduce(
    state: PreviewState,
    mut buffer: EditBuffer,
    key: PreviewKey,
) -> (PreviewState, EditBuffer) {
    if state.is_terminal() {
        return (state, buffer);
    }

    match key {
        PreviewKey::Confirm => return (PreviewState::Confirmed, buffer),
        PreviewKey::Cancel => return (PreviewState::Cancelled, buffer),
        PreviewKey::Char(c) => buffer.insert(c),
        PreviewKey::Backspace => buffer.backspace(),
        PreviewKey::Delete => buffer.delete(),
        PreviewKey::Left => buffer.move_left(),
        PreviewKey::Right => buffer.move_right(),
        PreviewKey::Home => buffer.move_home(),
        PreviewKey::End => buffer.move_end(),
    }

    (PreviewState::Editing, buffer)
}

/// One preview/edit interaction around an inserted note.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    window: PreviewWindow,
    state: PreviewState,
    buffer: EditBuffer,
}

impl PreviewSession {
    pub fn new(window: PreviewWindow, initial: &str) -> Self {
        Self { window, state: PreviewState::Editing, buffer: EditBuffer::new(initial) }
    }

    pub fn window(&self) -> &PreviewWindow {
        &self.window
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn update(&mut self, key: PreviewKey) {
        let (state, buffer) = reduce(self.state, std::mem::take(&mut self.buffer), key);
        if state != self.state {
            debug!(?state, "preview session finished");
        }
        self.state = state;
        self.buffer = buffer;
    }

    /// Terminal outcome, or `None` while still editing.
    pub fn outcome(&self) -> Option<PreviewOutcome> {
        match self.state {
            PreviewState::Editing => None,
            PreviewState::Confirmed => {
                Some(PreviewOutcome::Confirmed(self.buffer.text().to_string()))
            }
            PreviewState::Cancelled => Some(PreviewOutcome::Cancelled),
        }
    }

    /// Feed `keys` until the session ends; `None` if they run out first.
    pub fn run_keys<I>(mut self, keys: I) -> Option<PreviewOutcome>
    where
        I: IntoIterator<Item = PreviewKey>,
    {
        for key in keys {
            self.update(key);
            if let Some(outcome) = self.outcome() {
                return Some(outcome);
            }
        }
        None
    }
}
