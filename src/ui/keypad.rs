use crate::app::keypad;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    for (button, rect) in keypad::button_rects(area) {
        let style = Theme::button(button, state.is_flashing(button));

        // Vertically center the label inside the button face
        let top = rect.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..top).map(|_| Line::raw("")).collect();
        lines.push(Line::raw(button.label()));

        let face = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(face, rect);
    }
}
