use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Tape ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;

    let mut items: Vec<ListItem> = Vec::new();
    if state.tape.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No calculations yet",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Newest at the bottom; only what fits
        let skip = state.tape.len().saturating_sub(visible);
        for entry in state.tape.iter().skip(skip) {
            let result_style = if entry.error {
                Theme::display_error()
            } else {
                Theme::tape_result()
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", entry.timestamp), Theme::timestamp()),
                Span::styled(entry.expression.clone(), Theme::tape_expression()),
                Span::styled(" = ", Theme::tape_expression()),
                Span::styled(entry.result.clone(), result_style),
            ])));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
