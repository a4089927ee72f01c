//! Full-screen preview of the inserted note, editable in place.

mod event;
mod ui;

use std::io;

use crossterm::{
    event::{Event, KeyEventKind, read},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use writeme_core::preview::{PreviewError, PreviewOutcome, PreviewSession, PreviewSurface};

use event::map_key_event;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Preview surface drawing on the alternate screen of the controlling terminal.
pub struct TerminalPreview;

impl PreviewSurface for TerminalPreview {
    fn run(&mut self, session: PreviewSession) -> Result<PreviewOutcome, PreviewError> {
        if !crate::prompt::is_interactive() {
            return Err(PreviewError::NotInteractive);
        }

        let mut terminal = setup_terminal()?;

        // Run with cleanup on panic
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            run_session(&mut terminal, session)
        }));

        // Always restore terminal
        restore_terminal(&mut terminal)?;

        match result {
            Ok(outcome) => outcome,
            Err(_) => Err(PreviewError::Terminal(io::Error::other("preview panicked"))),
        }
    }
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run_session(
    terminal: &mut Term,
    mut session: PreviewSession,
) -> Result<PreviewOutcome, PreviewError> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        // Block until a key arrives; the screen only changes on input
        if let Event::Key(key) = read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(k) = map_key_event(key) {
                session.update(k);
            }
        }

        if let Some(outcome) = session.outcome() {
            return Ok(outcome);
        }
    }
}
