//! Preview layout: the inserted line between its neighbours, plus a key hint.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use writeme_core::preview::PreviewSession;

const HINT: &str = " [Enter] save  [Esc] cancel  [←/→] move  [Ctrl+A/E] start/end";

pub fn draw(frame: &mut Frame, session: &PreviewSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(frame.area());

    draw_preview(frame, chunks[0], session);
    draw_hint(frame, chunks[1]);
}

fn draw_preview(frame: &mut Frame, area: Rect, session: &PreviewSession) {
    let window = session.window();
    let context = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = Vec::new();
    for text in &window.above {
        lines.push(Line::from(Span::styled(format!("  {text}"), context)));
    }

    let (before, after) = session.buffer().split_at_cursor();
    let prefix = format!("+ {} ", window.marker.as_char());
    let added = Style::default().fg(Color::Green);
    let cursor_offset = Span::raw(prefix.as_str()).width() + Span::raw(before).width();
    lines.push(Line::from(vec![
        Span::styled(prefix.clone(), added.bold()),
        Span::styled(before.to_string(), added),
        Span::styled(after.to_string(), added),
    ]));
    let cursor_row = lines.len() - 1;

    for text in &window.below {
        lines.push(Line::from(Span::styled(format!("  {text}"), context)));
    }

    let block = Block::default()
        .title(format!(" Preview (line {}) ", window.line + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(lines).block(block), area);

    let x = inner.x.saturating_add(u16::try_from(cursor_offset).unwrap_or(u16::MAX));
    let y = inner.y.saturating_add(u16::try_from(cursor_row).unwrap_or(u16::MAX));
    if x < inner.right() && y < inner.bottom() {
        frame.set_cursor_position((x, y));
    }
}

fn draw_hint(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(HINT, Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
