//! unitdrill-core — Exact decimals, unit catalog, and game logic.
//!
//! This crate holds everything the games need that does not touch the
//! terminal: the [`decimal::Decimal`] number type, units and catalogs,
//! equation generation, the quiz state machine, the word-guessing game, and
//! the configuration model.

pub mod config;
pub mod decimal;
pub mod equation;
pub mod error;
pub mod hangman;
pub mod quiz;
pub mod session;
pub mod unit;

pub use decimal::Decimal;
pub use equation::Equation;
pub use error::{CatalogError, DecimalError};
pub use quiz::{MenuOption, Quiz, QuizInput, QuizState, Transition};
pub use session::{Session, SessionSummary};
pub use unit::{Catalog, Unit};
