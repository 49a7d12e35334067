use std::fmt;
use std::str::FromStr;

/// A binary operation waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Placeholder kept for symmetry with the keypad. Evaluating it yields 0;
    /// the `%` button goes through `CalculatorEngine::percent` instead.
    Percent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// The label printed on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Percent => "%",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Percent => 0.0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "−" | "-" => Ok(Operator::Subtract),
            "×" | "*" | "x" => Ok(Operator::Multiply),
            "÷" | "/" => Ok(Operator::Divide),
            "%" => Ok(Operator::Percent),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}
