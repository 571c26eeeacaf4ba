//! # Lap Splice Lengths
//!
//! Tension lap splices (Table 25.5.2.1, Class B) and compression lap splices
//! (25.5.5). ACI 318 does not permit lap splices of No. 14 and No. 18
//! (No. 43 / No. 57) bars, so both functions return
//! [`SpliceLength::NotApplicable`] above the large-bar cutoff.

use serde::{Deserialize, Serialize};

use crate::aci_factors::{BarPosition, CoverCondition, TENSION_SPLICE_MULTIPLIER};
use crate::config::EvaluationConfig;

use super::development::development_length;

/// A splice length, or the absence of one where the code forbids lap splices.
///
/// Serializes as a plain number, or `null` when not applicable:
///
/// ```rust
/// use rebar_core::calculations::SpliceLength;
///
/// assert_eq!(serde_json::to_string(&SpliceLength::Applicable(32.0)).unwrap(), "32.0");
/// assert_eq!(serde_json::to_string(&SpliceLength::NotApplicable).unwrap(), "null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum SpliceLength {
    /// Required lap length
    Applicable(f64),
    /// Lap splices are not permitted for this bar size
    NotApplicable,
}

impl SpliceLength {
    /// The length, if applicable
    pub fn value(&self) -> Option<f64> {
        match self {
            SpliceLength::Applicable(length) => Some(*length),
            SpliceLength::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, SpliceLength::Applicable(_))
    }

    /// Transform an applicable length; `NotApplicable` passes through.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            SpliceLength::Applicable(length) => SpliceLength::Applicable(f(length)),
            SpliceLength::NotApplicable => SpliceLength::NotApplicable,
        }
    }
}

impl From<Option<f64>> for SpliceLength {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(length) => SpliceLength::Applicable(length),
            None => SpliceLength::NotApplicable,
        }
    }
}

impl From<SpliceLength> for Option<f64> {
    fn from(splice: SpliceLength) -> Self {
        splice.value()
    }
}

impl std::fmt::Display for SpliceLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpliceLength::Applicable(length) => write!(f, "{}", length),
            SpliceLength::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Whether the code permits a lap splice for this bar diameter
pub fn is_splice_permitted(config: &EvaluationConfig, db: f64) -> bool {
    db <= config.constants().splice_cutoff
}

/// Tension lap splice length, 1.3·Ld (Class B).
pub fn splice_length(
    config: &EvaluationConfig,
    db: f64,
    position: BarPosition,
    cover: CoverCondition,
) -> SpliceLength {
    if !is_splice_permitted(config, db) {
        return SpliceLength::NotApplicable;
    }
    SpliceLength::Applicable(TENSION_SPLICE_MULTIPLIER * development_length(config, db, position, cover))
}

/// fy-dependent coefficient on db for compression lap splices (25.5.5.1).
///
/// ```text
/// fy ≤ 60000 psi:  0.0005·fy          fy ≤ 420 MPa:  0.071·fy
/// fy > 60000 psi:  0.0009·fy - 24     fy > 420 MPa:  0.13·fy - 24
/// ```
pub fn compression_splice_coefficient(config: &EvaluationConfig) -> f64 {
    let c = config.constants();
    let fy = config.fy();
    if fy <= c.compression_splice_fy_break {
        c.compression_splice_low_slope * fy
    } else {
        c.compression_splice_high_slope * fy - c.compression_splice_high_offset
    }
}

/// Compression lap splice length.
///
/// Not less than 12 in (300 mm), increased by one third when f'c is below
/// 3000 psi (21 MPa).
pub fn compression_splice_length(config: &EvaluationConfig, db: f64) -> SpliceLength {
    if !is_splice_permitted(config, db) {
        return SpliceLength::NotApplicable;
    }
    let c = config.constants();
    let lbc = (compression_splice_coefficient(config) * db).max(c.compression_splice_min_length);
    SpliceLength::Applicable(lbc * config.low_strength_increase())
}
