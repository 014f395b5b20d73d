//! Error types for the unitdrill core.
//!
//! Quiz input that fails to parse is never surfaced through these types to
//! the player; it is graded as a wrong answer. These errors exist for the
//! library boundary (parsing literals, building catalogs from config).

use thiserror::Error;

/// Errors produced by [`Decimal`](crate::decimal::Decimal) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The text is not a plain signed decimal literal.
    #[error("invalid decimal literal: {0:?}")]
    InvalidLiteral(String),

    /// Division by a zero-valued divisor.
    #[error("division by zero")]
    DivideByZero,
}

/// Errors produced while building units, catalogs and word lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A unit scale must be strictly positive.
    #[error("unit {unit:?} has invalid scale {scale}; scale must be positive")]
    InvalidScale { unit: String, scale: String },

    /// Equations need two distinct units to convert between.
    #[error("catalog needs at least 2 units, found {0}")]
    TooFewUnits(usize),

    /// Two catalog entries share a name.
    #[error("duplicate unit name: {0:?}")]
    DuplicateUnit(String),

    /// No measure labels were configured.
    #[error("catalog needs at least one measure label")]
    NoMeasures,

    /// The quantity range is empty or includes zero.
    #[error("invalid quantity range {min}..={max}; need 1 <= min <= max")]
    InvalidQuantityRange { min: u32, max: u32 },

    /// The word game has nothing to pick from.
    #[error("word list is empty")]
    EmptyWordList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = CatalogError::InvalidScale {
            unit: "k".into(),
            scale: "-1".into(),
        };
        assert_eq!(
            err.to_string(),
            "unit \"k\" has invalid scale -1; scale must be positive"
        );
        assert_eq!(
            DecimalError::InvalidLiteral("1e6".into()).to_string(),
            "invalid decimal literal: \"1e6\""
        );
    }
}
