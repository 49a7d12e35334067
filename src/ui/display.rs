use crate::app::state::AppState;
use crate::engine::Display;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown while nothing has been entered, so the panel keeps its height.
pub const BLANK_PLACEHOLDER: &str = "\u{a0}";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    if engine.operator().is_some() {
        block = block
            .title(format!(" {} ", state.status_line()))
            .title_style(Theme::pending_op());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = match engine.display() {
        Display::Blank => BLANK_PLACEHOLDER.to_string(),
        _ => truncate_left(&engine.display_text(), inner.width as usize),
    };
    let style = if engine.is_error() {
        Theme::display_error()
    } else {
        Theme::display_text()
    };

    let paragraph = Paragraph::new(Span::styled(shown, style)).alignment(Alignment::Right);
    frame.render_widget(paragraph, inner);
}

/// Keep the rightmost characters of `text` that fit in `width` columns,
/// marking the cut with an ellipsis.
pub fn truncate_left(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut used = 1; // ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    let mut out = String::from("…");
    out.extend(kept.into_iter().rev());
    out
}
