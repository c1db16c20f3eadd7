use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Multiply => '\u{00d7}',
            Operator::Divide => '\u{00f7}',
        }
    }
}

/// Which generation rule is active for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Multiplication,
    Division,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Multiplication => "multiplication",
            Mode::Division => "division",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Multiplication => "Multiplication",
            Mode::Division => "Division",
        }
    }

    pub fn operator(self) -> Operator {
        match self {
            Mode::Multiplication => Operator::Multiply,
            Mode::Division => Operator::Divide,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "multiplication" | "multiply" | "mul" | "x" => Some(Mode::Multiplication),
            "division" | "divide" | "div" => Some(Mode::Division),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single drill question. Operands are the numbers as shown to the
/// learner: for division `operand_a` is the dividend and `operand_b` the
/// divisor, and the quotient always comes out exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub operator: Operator,
    pub operand_a: u32,
    pub operand_b: u32,
    pub display_text: String,
    pub answer: u32,
}

impl Problem {
    pub fn multiply(a: u32, b: u32) -> Self {
        Self {
            operator: Operator::Multiply,
            operand_a: a,
            operand_b: b,
            display_text: format!("{a} {} {b} = ?", Operator::Multiply.symbol()),
            answer: a * b,
        }
    }

    /// `None` unless `divisor` divides `dividend` exactly.
    pub fn divide(dividend: u32, divisor: u32) -> Option<Self> {
        match dividend.checked_rem(divisor) {
            Some(0) => Some(Self::division_fact(divisor, dividend / divisor)),
            _ => None,
        }
    }

    /// `divisor * quotient ÷ divisor`, exact by construction.
    pub(crate) fn division_fact(divisor: u32, quotient: u32) -> Self {
        let dividend = divisor * quotient;
        Self {
            operator: Operator::Divide,
            operand_a: dividend,
            operand_b: divisor,
            display_text: format!("{dividend} {} {divisor} = ?", Operator::Divide.symbol()),
            answer: quotient,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.operator {
            Operator::Multiply => Mode::Multiplication,
            Operator::Divide => Mode::Division,
        }
    }

    /// The question without the trailing `= ?`.
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.operand_a, self.operator.symbol(), self.operand_b)
    }
}
