//! A single conversion question and the player's answer in progress.

use std::fmt;

use crate::decimal::Decimal;
use crate::unit::Unit;

/// One quiz instance: convert `quantity` from one unit to another.
///
/// The solution is computed once at construction and never recomputed.
#[derive(Debug, Clone)]
pub struct Equation {
    measure: String,
    from: Unit,
    to: Unit,
    quantity: Decimal,
    solution: Decimal,
    input: String,
    attempts: u32,
}

impl Equation {
    pub fn new(measure: impl Into<String>, from: Unit, to: Unit, quantity: Decimal) -> Self {
        let standard = from.to_standard(&quantity);
        let solution = to.from_standard(&standard);

        Self {
            measure: measure.into(),
            from,
            to,
            quantity,
            solution,
            input: String::new(),
            attempts: 0,
        }
    }

    /// Append one character to the answer. Filtering is the caller's job.
    pub fn append_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn delete_last_input_char(&mut self) {
        self.input.pop();
    }

    pub fn reset_input(&mut self) {
        self.input.clear();
        self.attempts = 0;
    }

    /// Count one submission, right or wrong.
    pub fn increment_attempts(&mut self) {
        self.attempts += 1;
    }

    /// Grade the current input. Empty or malformed input is simply wrong.
    pub fn is_input_correct(&self) -> bool {
        match self.input.parse::<Decimal>() {
            Ok(answer) => answer == self.solution,
            Err(e) => {
                tracing::debug!("graded as wrong: {e}");
                false
            }
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn measure(&self) -> &str {
        &self.measure
    }

    pub fn quantity(&self) -> &Decimal {
        &self.quantity
    }

    pub fn solution(&self) -> &Decimal {
        &self.solution
    }

    pub fn from_unit(&self) -> &Unit {
        &self.from
    }

    pub fn to_unit(&self) -> &Unit {
        &self.to
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} → {}",
            self.quantity,
            self.from.symbol(&self.measure),
            self.to.symbol(&self.measure)
        )
    }
}
