use crate::app::keypad::Button;
use crate::config::AppConfig;
use crate::engine::{format, CalculatorEngine, Evaluation};
use chrono::Local;
use ratatui::layout::Rect;
use std::collections::VecDeque;

/// One line of the tape: a resolved `lhs op rhs` step.
#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub timestamp: String,
    pub expression: String,
    pub result: String,
    /// The result was infinite or NaN.
    pub error: bool,
}

/// A keypad button drawn highlighted for a few more ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub button: Button,
    pub ticks_left: u8,
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub engine: CalculatorEngine,
    pub tape: VecDeque<TapeEntry>,
    /// Entries added since the event loop last drained them for logging.
    pub new_entries: Vec<TapeEntry>,
    pub flash: Option<Flash>,
    pub show_tape: bool,
    /// Whole terminal area, used to map mouse clicks onto the keypad.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.checked_timestamp_format();
        let engine = CalculatorEngine::with_exponent_threshold(config.display.exponent_threshold);
        let show_tape = config.ui.show_tape;
        Self {
            config,
            engine,
            tape: VecDeque::new(),
            new_entries: Vec::new(),
            flash: None,
            show_tape,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
            timestamp_format,
        }
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }

    /// Add a resolved step to the tape, dropping the oldest entry past
    /// `ui.max_tape`.
    pub fn record_evaluation(&mut self, step: Evaluation) {
        let threshold = self.engine.exponent_threshold();
        let entry = TapeEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            expression: format!(
                "{} {} {}",
                format::display_string(step.lhs, threshold),
                step.op,
                format::display_string(step.rhs, threshold)
            ),
            result: format::display_string(step.value, threshold),
            error: !step.value.is_finite(),
        };
        self.tape.push_back(entry.clone());
        while self.tape.len() > self.config.ui.max_tape {
            self.tape.pop_front();
        }
        self.new_entries.push(entry);
        self.dirty = true;
    }

    pub fn flash_button(&mut self, button: Button) {
        if self.config.ui.flash_ticks == 0 {
            return;
        }
        self.flash = Some(Flash {
            button,
            ticks_left: self.config.ui.flash_ticks,
        });
        self.dirty = true;
    }

    pub fn is_flashing(&self, button: Button) -> bool {
        self.flash.is_some_and(|f| f.button == button)
    }

    pub fn toggle_tape(&mut self) {
        self.show_tape = !self.show_tape;
        self.dirty = true;
    }

    /// Human-readable summary of the pending operation.
    pub fn status_line(&self) -> String {
        match self.engine.operator() {
            Some(op) => format!(
                "{} {}",
                format::display_string(self.engine.buffer(), self.engine.exponent_threshold()),
                op
            ),
            None => "ready".to_string(),
        }
    }
}
