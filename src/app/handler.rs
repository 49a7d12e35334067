use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::keypad::{self, Button};
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);

    if let Some(flash) = state.flash.as_mut() {
        flash.ticks_left = flash.ticks_left.saturating_sub(1);
        if flash.ticks_left == 0 {
            state.flash = None;
        }
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('t') => {
            state.toggle_tape();
            vec![]
        }
        _ => match Button::from_key(&key) {
            Some(button) => press(state, button),
            None => vec![],
        },
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport, state.show_tape);
    match keypad::hit_test(app_layout.keypad, mouse.column, mouse.row) {
        Some(button) => press(state, button),
        None => vec![],
    }
}

/// Run the engine operation behind `button`.
pub fn press(state: &mut AppState, button: Button) -> Vec<Action> {
    tracing::trace!(?button, "button pressed");

    let engine = &mut state.engine;
    let step = match button {
        Button::Digit(d) => {
            engine.append(d);
            None
        }
        Button::Dot => {
            engine.append('.');
            None
        }
        Button::Op(op) => engine.add_op(op),
        Button::AllClear => {
            engine.all_clear();
            None
        }
        Button::Invert => {
            engine.invert();
            None
        }
        Button::Percent => {
            engine.percent();
            None
        }
        Button::Equals => engine.evaluate(),
    };

    // An operator press only produces a new result when it resolves a step
    let computed = step.is_some()
        || matches!(button, Button::Invert | Button::Percent | Button::Equals);
    if let Some(step) = step {
        state.record_evaluation(step);
    }
    state.flash_button(button);
    state.dirty = true;

    let mut actions = Vec::new();
    if computed && state.engine.is_error() {
        tracing::info!(display = %state.engine.display_text(), "non-finite result");
        if state.config.behavior.bell_on_error {
            actions.push(Action::Bell);
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::engine::Operator;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(80, 24);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_keys(state: &mut AppState, keys: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        for c in keys.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            actions.extend(handle_event(state, key(code)));
        }
        actions
    }

    fn click(state: &mut AppState, button: Button) -> Vec<Action> {
        let app_layout = layout::compute_layout(state.viewport, state.show_tape);
        let (_, rect) = keypad::button_rects(app_layout.keypad)
            .into_iter()
            .find(|(b, _)| *b == button)
            .unwrap();
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(state, AppEvent::Terminal(CEvent::Mouse(mouse)))
    }

    #[test]
    fn test_keyboard_addition() {
        let mut state = state();
        type_keys(&mut state, "5+3\n");
        assert_eq!(state.engine.display_text(), "8");
        assert_eq!(state.tape.len(), 1);
        assert_eq!(state.tape[0].expression, "5 + 3");
    }

    #[test]
    fn test_keyboard_chained_sequence() {
        let mut state = state();
        type_keys(&mut state, "8+2+5=");
        assert_eq!(state.engine.display_text(), "15");
        let results: Vec<_> = state.tape.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, ["10", "15"]);
    }

    #[test]
    fn test_mouse_clicks_drive_engine() {
        let mut state = state();
        click(&mut state, Button::Digit('9'));
        click(&mut state, Button::Invert);
        assert_eq!(state.engine.display_text(), "-9");
        click(&mut state, Button::Op(Operator::Multiply));
        click(&mut state, Button::Digit('2'));
        click(&mut state, Button::Equals);
        assert_eq!(state.engine.display_text(), "-18");
        click(&mut state, Button::AllClear);
        assert_eq!(state.engine.display_text(), "");
    }

    #[test]
    fn test_mouse_clicks_with_tape_hidden() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Char('t')));
        assert!(!state.show_tape);
        click(&mut state, Button::Digit('0'));
        click(&mut state, Button::Dot);
        click(&mut state, Button::Digit('5'));
        assert_eq!(state.engine.display_text(), "0.5");
    }

    #[test]
    fn test_right_click_is_ignored() {
        let mut state = state();
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 2,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(&mut state, AppEvent::Terminal(CEvent::Mouse(mouse)));
        assert_eq!(state.engine.display_text(), "");
        assert!(state.flash.is_none());
    }

    #[test]
    fn test_percent_key() {
        let mut state = state();
        type_keys(&mut state, "200+10%");
        assert_eq!(state.engine.display_text(), "20");
        type_keys(&mut state, "=");
        assert_eq!(state.engine.display_text(), "220");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert_eq!(type_keys(&mut state, "q"), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_bell_on_error_when_enabled() {
        let mut state = state();
        assert!(type_keys(&mut state, "5/0=").is_empty());
        assert_eq!(state.engine.display_text(), "Infinity");

        let mut config = AppConfig::default();
        config.behavior.bell_on_error = true;
        let mut state = AppState::new(config);
        assert_eq!(type_keys(&mut state, "5/0="), vec![Action::Bell]);
        assert!(state.tape[0].error);
    }

    #[test]
    fn test_no_bell_for_operator_on_existing_error() {
        let mut config = AppConfig::default();
        config.behavior.bell_on_error = true;
        let mut state = AppState::new(config);
        assert_eq!(type_keys(&mut state, "5/0="), vec![Action::Bell]);
        assert!(type_keys(&mut state, "+").is_empty());
        assert!(type_keys(&mut state, "-").is_empty());
        assert_eq!(state.engine.display_text(), "Infinity");
        assert_eq!(type_keys(&mut state, "1="), vec![Action::Bell]);
    }

    #[test]
    fn test_flash_expires_after_ticks() {
        let mut state = state();
        type_keys(&mut state, "7");
        assert!(state.is_flashing(Button::Digit('7')));
        for _ in 0..state.config.ui.flash_ticks {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(state.flash.is_none());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 40)));
        assert_eq!(state.viewport.width, 100);
        assert_eq!(state.viewport.height, 40);
    }
}
