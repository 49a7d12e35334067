use crate::app::keypad::Button;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn display_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn pending_op() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn tape_expression() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tape_result() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    /// Keypad button face; operators orange, functions gray, digits dark.
    pub fn button(button: Button, pressed: bool) -> Style {
        let bg = match button {
            Button::Op(_) | Button::Equals => Color::Rgb(255, 149, 0),
            Button::AllClear | Button::Invert | Button::Percent => Color::Gray,
            Button::Digit(_) | Button::Dot => Color::Rgb(60, 60, 60),
        };
        let fg = match button {
            Button::AllClear | Button::Invert | Button::Percent => Color::Black,
            _ => Color::White,
        };
        let style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
        if pressed {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}
