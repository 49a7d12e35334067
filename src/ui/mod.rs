mod display;
mod keypad;
pub mod layout;
mod status_bar;
mod tape;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.show_tape);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    if let Some(tape_area) = app_layout.tape {
        tape::render(frame, tape_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::engine::Operator;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_keypad_and_empty_tape() {
        let state = AppState::new(AppConfig::default());
        let screen = draw(&state);
        for label in ["AC", "±", "÷", "×", "−", "+", "="] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("No calculations yet"));
        assert!(screen.contains("[ready]"));
        assert!(screen.contains('\u{a0}'));
    }

    #[test]
    fn test_status_bar_hints_reach_right_edge() {
        let state = AppState::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.cell((78, 23)).unwrap().symbol(), "t");
        assert_eq!(buffer.cell((79, 23)).unwrap().bg, Color::DarkGray);
    }

    #[test]
    fn test_renders_display_and_pending_operation() {
        let mut state = AppState::new(AppConfig::default());
        state.engine.append('4');
        state.engine.append('2');
        state.engine.add_op(Operator::Multiply);
        let screen = draw(&state);
        assert!(screen.contains("42 ×"));
    }

    #[test]
    fn test_renders_tape_entries() {
        let mut state = AppState::new(AppConfig::default());
        state.engine.append('5');
        state.engine.add_op(Operator::Divide);
        state.engine.append('0');
        if let Some(step) = state.engine.evaluate() {
            state.record_evaluation(step);
        }
        let screen = draw(&state);
        assert!(screen.contains("5 ÷ 0 = Infinity"));
    }

    #[test]
    fn test_hidden_tape_is_not_drawn() {
        let mut state = AppState::new(AppConfig::default());
        state.toggle_tape();
        let screen = draw(&state);
        assert!(!screen.contains("Tape"));
    }
}
