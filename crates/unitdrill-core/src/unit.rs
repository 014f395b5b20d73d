//! Units and the catalog they are drawn from.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::error::CatalogError;

/// A named multiplicative scale relative to the standard (base) unit.
///
/// An empty name denotes the standard unit itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnit")]
pub struct Unit {
    name: String,
    scale: Decimal,
}

#[derive(Deserialize)]
struct RawUnit {
    name: String,
    scale: Decimal,
}

impl TryFrom<RawUnit> for Unit {
    type Error = CatalogError;

    fn try_from(raw: RawUnit) -> Result<Self, Self::Error> {
        Unit::new(raw.name, raw.scale)
    }
}

impl Unit {
    /// Create a unit; the scale must be strictly positive.
    pub fn new(name: impl Into<String>, scale: Decimal) -> Result<Self, CatalogError> {
        let name = name.into();
        if !scale.is_positive() {
            return Err(CatalogError::InvalidScale {
                unit: name,
                scale: scale.to_string(),
            });
        }
        Ok(Self { name, scale })
    }

    /// Convert `value` expressed in this unit to the standard unit.
    pub fn to_standard(&self, value: &Decimal) -> Decimal {
        value * &self.scale
    }

    /// Convert a standard value into this unit.
    pub fn from_standard(&self, standard: &Decimal) -> Decimal {
        match standard.checked_div(&self.scale) {
            Ok(value) => value,
            Err(_) => unreachable!("unit scale is validated positive on construction"),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.name.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> &Decimal {
        &self.scale
    }

    /// Prefix joined with a measure label, e.g. `k` + `g` = `kg`.
    pub fn symbol(&self, measure: &str) -> String {
        format!("{}{}", self.name, measure)
    }
}

/// The fixed set of units, measure labels and quantity bounds a session
/// draws equations from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    units: Vec<Unit>,
    measures: Vec<String>,
    min_quantity: u32,
    max_quantity: u32,
}

pub const DEFAULT_MIN_QUANTITY: u32 = 1;
pub const DEFAULT_MAX_QUANTITY: u32 = 1000;

/// Prefix name and scale of the built-in metric catalog, largest first.
const METRIC_PREFIXES: [(&str, &str); 9] = [
    ("M", "1000000"),
    ("k", "1000"),
    ("h", "100"),
    ("da", "10"),
    ("", "1"),
    ("d", "0.1"),
    ("c", "0.01"),
    ("m", "0.001"),
    ("µ", "0.000001"),
];

const METRIC_MEASURES: [&str; 3] = ["m", "l", "g"];

impl Catalog {
    /// Build a validated catalog.
    pub fn new(
        units: Vec<Unit>,
        measures: Vec<String>,
        min_quantity: u32,
        max_quantity: u32,
    ) -> Result<Self, CatalogError> {
        if units.len() < 2 {
            return Err(CatalogError::TooFewUnits(units.len()));
        }

        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.name()) {
                return Err(CatalogError::DuplicateUnit(unit.name().to_string()));
            }
        }

        if measures.is_empty() {
            return Err(CatalogError::NoMeasures);
        }

        if min_quantity == 0 || min_quantity > max_quantity {
            return Err(CatalogError::InvalidQuantityRange {
                min: min_quantity,
                max: max_quantity,
            });
        }

        Ok(Self {
            units,
            measures,
            min_quantity,
            max_quantity,
        })
    }

    /// Metric prefixes from micro to mega around the standard unit, with
    /// length, volume and mass labels and quantities 1..=1000.
    pub fn metric() -> Self {
        let units = METRIC_PREFIXES
            .iter()
            .map(|(name, scale)| Unit {
                name: (*name).to_string(),
                scale: scale
                    .parse()
                    .unwrap_or_else(|_| unreachable!("built-in scales are valid literals")),
            })
            .collect();

        Self {
            units,
            measures: METRIC_MEASURES.iter().map(|m| m.to_string()).collect(),
            min_quantity: DEFAULT_MIN_QUANTITY,
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Units shown in the on-screen legend: everything but the standard unit.
    pub fn legend(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| !u.is_standard())
    }

    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    pub fn quantity_range(&self) -> RangeInclusive<u32> {
        self.min_quantity..=self.max_quantity
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::metric()
    }
}
