//! # Development Lengths
//!
//! Straight-bar tension development (Table 25.4.2.2), hooked-bar tension
//! development (25.4.3.1) and compression development (25.4.9.2).
//!
//! Diameters and lengths are in inches or millimeters, matching the unit
//! system of the configuration.

use crate::aci_factors::{BarPosition, CoverCondition};
use crate::config::EvaluationConfig;

/// Table 25.4.2.2 denominator for the bar size and cover condition.
///
/// Small bars (No. 6 / No. 19 and smaller) use the larger coefficient; the
/// ψs factor is built into these values.
pub fn development_coefficient(config: &EvaluationConfig, db: f64, cover: CoverCondition) -> f64 {
    let c = config.constants();
    let small_bar = db <= c.development_size_trigger;
    let coefficients = &c.development_coefficients;

    match (cover, small_bar) {
        (CoverCondition::Satisfied, true) => coefficients.cover_small,
        (CoverCondition::Satisfied, false) => coefficients.cover_large,
        (CoverCondition::NotSatisfied, true) => coefficients.no_cover_small,
        (CoverCondition::NotSatisfied, false) => coefficients.no_cover_large,
    }
}

/// Tension development length of a straight bar, Ld.
///
/// ```text
/// Ld = db × fy × min(1.7, ψt·ψe) / (C × λ × √f'c)
/// ```
///
/// Multiplied by the seismic increase factor when it is enabled.
pub fn development_length(
    config: &EvaluationConfig,
    db: f64,
    position: BarPosition,
    cover: CoverCondition,
) -> f64 {
    let coefficient = development_coefficient(config, db, cover);
    let psi_t_e = config.epoxy_position_factor(position);

    let ld = db * config.fy() * psi_t_e / (coefficient * config.lambda() * config.sqrt_fc());
    ld * config.seismic_multiplier()
}

/// Tension development length of a bar terminating in a standard hook, Ldh.
///
/// ```text
/// Ldh = fy × db × ψe × ψc × ψr / (C × λ × √f'c)  ≥ max(8·db, 6 in | 150 mm)
/// ```
pub fn hooked_development_length(config: &EvaluationConfig, db: f64) -> f64 {
    let c = config.constants();
    let psi_e = config.hooked_epoxy_factor();
    let psi_c = config.hooked_cover_factor(db);
    let psi_r = config.hooked_confinement_factor(db);
    let min_length = c.hooked_min_length.max(8.0 * db);

    let ldh = config.fy() * db * psi_e * psi_c * psi_r
        / (c.hooked_denominator * config.hooked_lambda() * config.sqrt_fc());
    let ldh = ldh * config.seismic_multiplier();

    ldh.max(min_length)
}

/// Compression development length, Ldc.
///
/// The larger of the two 25.4.9.2 expressions governs, and the result is not
/// less than 8 in (200 mm).
pub fn compression_development_length(config: &EvaluationConfig, db: f64) -> f64 {
    let c = config.constants();
    let psi_r = config.compression_confinement_factor();
    let fy = config.fy();

    let bond = fy * psi_r * db / (c.compression_denominator * config.compression_lambda() * config.sqrt_fc());
    let yield_limit = c.compression_fy_coefficient * fy * psi_r * db;

    bond.max(yield_limit).max(c.compression_min_length)
}
