use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = "Esc:AC  n:±  t:tape  q:quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Pending operation
    parts.push(Span::styled(
        format!(" [{}] ", state.status_line()),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Entry mode
    let mode = if state.engine.is_flushing() {
        "new entry"
    } else {
        "typing"
    };
    parts.push(Span::styled(format!(" {} ", mode), Theme::status_bar()));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HINTS.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", HINTS),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
