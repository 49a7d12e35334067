use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub tape: Option<Rect>,
    pub status_bar: Rect,
}

/// Width of the calculator column when the tape is shown beside it.
const CALCULATOR_WIDTH: u16 = 36;

pub fn compute_layout(area: Rect, show_tape: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: calculator | gap | tape
    let (calculator, tape) = if show_tape {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([
                Constraint::Length(CALCULATOR_WIDTH),
                Constraint::Min(16),
            ])
            .split(content);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (content, None)
    };

    // Calculator column: display | keypad
    let calc_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(5),    // Keypad
        ])
        .split(calculator);

    AppLayout {
        display: calc_chunks[0],
        keypad: calc_chunks[1],
        tape,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_tape() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.display.height, 3);
        assert_eq!(layout.display.width, CALCULATOR_WIDTH);
        assert_eq!(layout.keypad.y, 3);
        assert_eq!(layout.status_bar.y, 23);
        let tape = layout.tape.unwrap();
        assert!(tape.x > layout.keypad.right());
    }

    #[test]
    fn test_layout_without_tape() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.tape.is_none());
        assert_eq!(layout.keypad.width, 80);
        assert_eq!(layout.keypad.height, 20);
    }
}
