//! The keypad: which buttons exist, where they sit and which keys press them.

use crate::engine::Operator;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(char),
    Dot,
    Op(Operator),
    AllClear,
    Invert,
    Percent,
    Equals,
}

pub const COLUMNS: u32 = 4;

/// Button rows, top to bottom, with the number of columns each one spans.
pub const ROWS: [&[(Button, u32)]; 5] = [
    &[
        (Button::AllClear, 1),
        (Button::Invert, 1),
        (Button::Percent, 1),
        (Button::Op(Operator::Divide), 1),
    ],
    &[
        (Button::Digit('7'), 1),
        (Button::Digit('8'), 1),
        (Button::Digit('9'), 1),
        (Button::Op(Operator::Multiply), 1),
    ],
    &[
        (Button::Digit('4'), 1),
        (Button::Digit('5'), 1),
        (Button::Digit('6'), 1),
        (Button::Op(Operator::Subtract), 1),
    ],
    &[
        (Button::Digit('1'), 1),
        (Button::Digit('2'), 1),
        (Button::Digit('3'), 1),
        (Button::Op(Operator::Add), 1),
    ],
    &[(Button::Digit('0'), 2), (Button::Dot, 1), (Button::Equals, 1)],
];

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => digit_label(d),
            Button::Dot => ".",
            Button::Op(op) => op.symbol(),
            Button::AllClear => "AC",
            Button::Invert => "±",
            Button::Percent => "%",
            Button::Equals => "=",
        }
    }

    /// Map a key press to the button it stands for.
    pub fn from_key(key: &KeyEvent) -> Option<Button> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        let button = match key.code {
            KeyCode::Char(c @ '0'..='9') => Button::Digit(c),
            KeyCode::Char('.') | KeyCode::Char(',') => Button::Dot,
            KeyCode::Char('=') | KeyCode::Enter => Button::Equals,
            KeyCode::Esc | KeyCode::Delete | KeyCode::Char('c') => Button::AllClear,
            KeyCode::Char('n') | KeyCode::Char('_') | KeyCode::F(9) => Button::Invert,
            // Operator symbols and their ASCII aliases; `%` is its own button
            KeyCode::Char(c) => match c.to_string().parse::<Operator>() {
                Ok(Operator::Percent) => Button::Percent,
                Ok(op) => Button::Op(op),
                Err(_) => return None,
            },
            _ => return None,
        };
        Some(button)
    }
}

fn digit_label(d: char) -> &'static str {
    match d {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        _ => "?",
    }
}

/// Screen rectangle of every button when the keypad fills `area`.
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let rows =
        Layout::vertical(ROWS.iter().map(|_| Constraint::Ratio(1, ROWS.len() as u32))).split(area);
    let mut rects = Vec::new();
    for (row, buttons) in rows.iter().zip(ROWS) {
        let cells = Layout::horizontal(
            buttons
                .iter()
                .map(|(_, span)| Constraint::Ratio(*span, COLUMNS)),
        )
        .spacing(1)
        .split(*row);
        for ((button, _), cell) in buttons.iter().zip(cells.iter()) {
            rects.push((*button, *cell));
        }
    }
    rects
}

/// The button under the cell at (`column`, `row`), if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Button> {
    let position = Position::new(column, row);
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(button, _)| button)
}
