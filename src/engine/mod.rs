//! The calculator state machine.
//!
//! Arithmetic is sequential, like a pocket calculator: pressing an operator
//! resolves whatever operation is already pending before recording the new
//! one, so `8 + 2 × 5 =` is `(8 + 2) × 5`. The engine holds no I/O and never
//! fails; division by zero and malformed entries flow through as
//! infinity/NaN.

pub mod format;
pub mod operator;

pub use operator::Operator;

/// Character count past which a result is shown in exponential form.
pub const DEFAULT_EXPONENT_THRESHOLD: usize = 8;

/// What the display currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Nothing entered; renders as a blank placeholder and reads as 0.
    Blank,
    /// Characters typed since the display was last cleared.
    Entry(String),
    /// A computed value.
    Result(f64),
}

/// One resolved `lhs op rhs` step, reported so callers can keep a tape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: Display,
    op: Option<Operator>,
    buffer: f64,
    flush: bool,
    exponent_threshold: usize,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::with_exponent_threshold(DEFAULT_EXPONENT_THRESHOLD)
    }

    pub fn with_exponent_threshold(exponent_threshold: usize) -> Self {
        Self {
            display: Display::Blank,
            op: None,
            buffer: 0.0,
            flush: false,
            exponent_threshold,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Display contents as text; empty for the blank placeholder.
    pub fn display_text(&self) -> String {
        match &self.display {
            Display::Blank => String::new(),
            Display::Entry(text) => text.clone(),
            Display::Result(value) => format::display_string(*value, self.exponent_threshold),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        self.op
    }

    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    pub fn is_flushing(&self) -> bool {
        self.flush
    }

    pub fn exponent_threshold(&self) -> usize {
        self.exponent_threshold
    }

    /// The display read as a number. Blank reads as 0, an entry that does not
    /// parse (a lone `.`) reads as NaN.
    pub fn operand(&self) -> f64 {
        match &self.display {
            Display::Blank => 0.0,
            Display::Entry(text) => text.parse().unwrap_or(f64::NAN),
            Display::Result(value) => *value,
        }
    }

    /// True when the display holds infinity or NaN.
    pub fn is_error(&self) -> bool {
        matches!(self.display, Display::Result(value) if !value.is_finite())
    }

    /// Type one character into the display.
    pub fn append(&mut self, ch: char) {
        if self.flush {
            self.reset();
            self.flush = false;
        }
        if ch == '.' && self.display_text().contains('.') {
            return;
        }
        if let Display::Entry(text) = &mut self.display {
            text.push(ch);
            return;
        }
        let mut text = self.display_text();
        text.push(ch);
        self.display = Display::Entry(text);
    }

    /// Record `new_op` as the pending operation, resolving the previous one
    /// first. Pressing operators back to back only swaps the pending one.
    pub fn add_op(&mut self, new_op: Operator) -> Option<Evaluation> {
        if self.flush && self.op.is_some() {
            tracing::debug!(op = %new_op, "replacing pending operator");
            self.op = Some(new_op);
            return None;
        }

        self.flush = true;

        let step = if self.op.is_some() {
            self.evaluate()
        } else {
            None
        };

        self.buffer = self.operand();
        self.op = Some(new_op);
        step
    }

    /// Resolve `buffer op display` and show the value. With nothing pending
    /// the display value is shown as-is.
    pub fn evaluate(&mut self) -> Option<Evaluation> {
        let rhs = self.operand();
        let value = match self.op {
            Some(op) => op.apply(self.buffer, rhs),
            None => rhs,
        };
        let step = self.op.map(|op| Evaluation {
            lhs: self.buffer,
            op,
            rhs,
            value,
        });
        if let Some(step) = &step {
            tracing::debug!(lhs = step.lhs, op = %step.op, rhs = step.rhs, value = step.value, "evaluated");
        }

        self.result(value);
        self.buffer = 0.0;
        self.op = None;
        step
    }

    /// Show `buffer * display / 100`.
    pub fn percent(&mut self) {
        self.result(self.buffer * self.operand() / 100.0);
    }

    /// Flip the sign of the display.
    pub fn invert(&mut self) {
        self.result(self.operand() * -1.0);
    }

    /// Show `value`; the next typed digit starts a new number.
    pub fn result(&mut self, value: f64) {
        self.display = Display::Result(value);
        self.flush = true;
    }

    pub fn reset(&mut self) {
        self.display = Display::Blank;
    }

    pub fn all_clear(&mut self) {
        self.reset();
        self.buffer = 0.0;
        self.op = None;
    }
}
