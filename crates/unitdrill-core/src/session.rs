//! Quiz session: equation generation and running statistics.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::equation::Equation;
use crate::unit::Catalog;

/// Owns the catalog and random source for one quiz run and counts how it
/// went. Counters only ever grow.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    catalog: Catalog,
    rng: R,
    equations_count: u32,
    correct_answers: u32,
    started_at: DateTime<Utc>,
}

impl Session<StdRng> {
    /// A session seeded from OS entropy.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// A reproducible session.
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        tracing::info!(
            units = catalog.units().len(),
            measures = catalog.measures().len(),
            "quiz session started"
        );
        Self {
            catalog,
            rng,
            equations_count: 0,
            correct_answers: 0,
            started_at: Utc::now(),
        }
    }

    /// Draw a new random equation.
    ///
    /// Source and target units are always different catalog entries: the
    /// target index is redrawn until it differs from the source index.
    pub fn prepare_new_equation(&mut self) -> Equation {
        let units = self.catalog.units();
        let measures = self.catalog.measures();

        let measure = &measures[self.rng.gen_range(0..measures.len())];

        let from_index = self.rng.gen_range(0..units.len());
        let mut to_index = from_index;
        while to_index == from_index {
            to_index = self.rng.gen_range(0..units.len());
        }

        let quantity = self.rng.gen_range(self.catalog.quantity_range());

        let equation = Equation::new(
            measure.clone(),
            units[from_index].clone(),
            units[to_index].clone(),
            Decimal::from(quantity),
        );

        self.equations_count += 1;
        tracing::debug!(
            number = self.equations_count,
            "new equation: {equation} = {}",
            equation.solution()
        );

        equation
    }

    /// Record one correct answer. Call exactly once per correct validation.
    pub fn register_correct_answer(&mut self) {
        self.correct_answers += 1;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Equations generated so far, including the one in progress.
    pub fn equations_count(&self) -> u32 {
        self.equations_count
    }

    /// Equations generated before the one currently on screen.
    pub fn completed_equations(&self) -> u32 {
        self.equations_count.saturating_sub(1)
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Correct answers as a truncated percentage of completed equations.
    pub fn accuracy_percent(&self) -> Option<u32> {
        let completed = self.completed_equations();
        if completed == 0 {
            return None;
        }
        let percent = u64::from(self.correct_answers) * 100 / u64::from(completed);
        Some(percent.min(100) as u32)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Snapshot of the session, stamped with the current time.
    pub fn summary(&self) -> SessionSummary {
        let finished_at = Utc::now();
        SessionSummary {
            equations: self.completed_equations(),
            correct_answers: self.correct_answers,
            accuracy_percent: self.accuracy_percent(),
            started_at: self.started_at,
            finished_at,
            duration_secs: (finished_at - self.started_at).num_seconds().max(0) as u64,
        }
    }
}

/// What one quiz session amounted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Equations finished (the last, unanswered one is not counted).
    pub equations: u32,
    pub correct_answers: u32,
    pub accuracy_percent: Option<u32>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equations_come_from_catalog() {
        let mut session = Session::seeded(Catalog::metric(), 7);
        for _ in 0..200 {
            let eq = session.prepare_new_equation();
            assert_ne!(eq.from_unit(), eq.to_unit());
            assert!(session
                .catalog()
                .measures()
                .iter()
                .any(|m| m == eq.measure()));
            assert!(eq.quantity() >= &Decimal::one());
            assert!(eq.quantity() <= &Decimal::from(1000u32));
        }
        assert_eq!(session.equations_count(), 200);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut a = Session::seeded(Catalog::metric(), 42);
        let mut b = Session::seeded(Catalog::metric(), 42);
        for _ in 0..20 {
            assert_eq!(
                a.prepare_new_equation().to_string(),
                b.prepare_new_equation().to_string()
            );
        }
    }

    #[test]
    fn counters_and_accuracy() {
        let mut session = Session::seeded(Catalog::metric(), 1);
        assert_eq!(session.accuracy_percent(), None);

        session.prepare_new_equation();
        assert_eq!(session.completed_equations(), 0);
        session.register_correct_answer();
        session.prepare_new_equation();
        session.prepare_new_equation();
        session.register_correct_answer();
        session.prepare_new_equation();

        assert_eq!(session.equations_count(), 4);
        assert_eq!(session.completed_equations(), 3);
        assert_eq!(session.correct_answers(), 2);
        assert_eq!(session.accuracy_percent(), Some(66));

        let summary = session.summary();
        assert_eq!(summary.equations, 3);
        assert_eq!(summary.correct_answers, 2);
        assert!(summary.finished_at >= summary.started_at);
    }

    #[test]
    fn single_quantity_range() {
        let catalog = Catalog::new(
            Catalog::metric().units()[..2].to_vec(),
            vec!["g".into()],
            5,
            5,
        )
        .unwrap();
        let mut session = Session::seeded(catalog, 3);
        let eq = session.prepare_new_equation();
        assert_eq!(eq.quantity(), &Decimal::from(5u32));
    }
}
