//! # Unit Systems
//!
//! The engine works in one of two fixed unit systems. There is no general
//! unit conversion: a table is computed entirely in inches/psi or entirely
//! in millimeters/MPa, and every unit-dependent threshold of the code lives
//! in a single [`CodeConstants`] record per system.
//!
//! | Quantity | Imperial | Metric |
//! |----------|----------|--------|
//! | Length   | in       | mm     |
//! | Area     | in²      | mm²    |
//! | Stress   | psi      | MPa    |
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::UnitSystem;
//!
//! let units = UnitSystem::from_is_metric(true);
//! assert_eq!(units.length_unit(), "mm");
//! assert_eq!(units.constants().sqrt_fc_cap, 8.3);
//! ```

use serde::{Deserialize, Serialize};

/// Unit system selector, driven by the `isMetric` configuration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// inches, psi (ACI 318-14)
    #[default]
    Imperial,
    /// millimeters, MPa (ACI 318M-14)
    Metric,
}

impl UnitSystem {
    /// All unit systems
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Imperial, UnitSystem::Metric];

    /// Map the boolean `isMetric` flag onto a unit system
    pub fn from_is_metric(is_metric: bool) -> Self {
        if is_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    /// Length unit label
    pub fn length_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "mm",
        }
    }

    /// Area unit label
    pub fn area_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in²",
            UnitSystem::Metric => "mm²",
        }
    }

    /// Stress unit label
    pub fn stress_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "psi",
            UnitSystem::Metric => "MPa",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial (in, psi)",
            UnitSystem::Metric => "Metric (mm, MPa)",
        }
    }

    /// Code constants for this unit system
    pub fn constants(&self) -> &'static CodeConstants {
        match self {
            UnitSystem::Imperial => &CodeConstants::IMPERIAL,
            UnitSystem::Metric => &CodeConstants::METRIC,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Table 25.4.2.2 denominators, indexed by cover condition and bar size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentCoefficients {
    /// Cover and spacing satisfied, small bars
    pub cover_small: f64,
    /// Cover and spacing satisfied, large bars
    pub cover_large: f64,
    /// Cover or spacing not satisfied, small bars
    pub no_cover_small: f64,
    /// Cover or spacing not satisfied, large bars
    pub no_cover_large: f64,
}

/// Unit-dependent constants used by the length formulas.
///
/// Diameters and lengths are in inches (imperial) or millimeters (metric),
/// stresses in psi or MPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeConstants {
    /// Upper limit on sqrt(f'c) (25.4.1.4)
    pub sqrt_fc_cap: f64,
    /// Diameter at and above which ψs = 1.0
    pub size_factor_threshold: f64,
    /// Diameter at and below which the "small bar" Ld coefficients apply
    pub development_size_trigger: f64,
    /// Ld coefficients
    pub development_coefficients: DevelopmentCoefficients,
    /// Lap splices are not permitted for diameters above this value
    pub splice_cutoff: f64,
    /// ψc / ψr reductions for hooks apply only at or below this diameter
    pub hooked_factor_cutoff: f64,
    /// Ldh denominator coefficient
    pub hooked_denominator: f64,
    /// Absolute minimum Ldh
    pub hooked_min_length: f64,
    /// Ldc denominator coefficient for the sqrt(f'c) expression
    pub compression_denominator: f64,
    /// Ldc coefficient for the fy-only expression
    pub compression_fy_coefficient: f64,
    /// Absolute minimum Ldc
    pub compression_min_length: f64,
    /// fy at which the Lbc coefficient changes slope
    pub compression_splice_fy_break: f64,
    /// Lbc coefficient slope for fy at or below the break
    pub compression_splice_low_slope: f64,
    /// Lbc coefficient slope for fy above the break
    pub compression_splice_high_slope: f64,
    /// Lbc coefficient offset for fy above the break
    pub compression_splice_high_offset: f64,
    /// Absolute minimum Lbc
    pub compression_splice_min_length: f64,
    /// f'c below which Lbc is increased
    pub low_strength_fc: f64,
}

impl CodeConstants {
    /// ACI 318-14 (inch-pound)
    pub const IMPERIAL: CodeConstants = CodeConstants {
        sqrt_fc_cap: 100.0,
        size_factor_threshold: 0.875,
        development_size_trigger: 0.75,
        development_coefficients: DevelopmentCoefficients {
            cover_small: 25.0,
            cover_large: 20.0,
            no_cover_small: 50.0 / 3.0,
            no_cover_large: 40.0 / 3.0,
        },
        splice_cutoff: 1.41,
        hooked_factor_cutoff: 1.41,
        hooked_denominator: 50.0,
        hooked_min_length: 6.0,
        compression_denominator: 50.0,
        compression_fy_coefficient: 0.0003,
        compression_min_length: 8.0,
        compression_splice_fy_break: 60000.0,
        compression_splice_low_slope: 0.0005,
        compression_splice_high_slope: 0.0009,
        compression_splice_high_offset: 24.0,
        compression_splice_min_length: 12.0,
        low_strength_fc: 3000.0,
    };

    /// ACI 318M-14 (SI)
    pub const METRIC: CodeConstants = CodeConstants {
        sqrt_fc_cap: 8.3,
        size_factor_threshold: 22.0,
        development_size_trigger: 19.05,
        development_coefficients: DevelopmentCoefficients {
            cover_small: 2.1,
            cover_large: 1.7,
            no_cover_small: 1.4,
            no_cover_large: 1.1,
        },
        splice_cutoff: 36.0,
        hooked_factor_cutoff: 35.81,
        hooked_denominator: 1.0 / 0.24,
        hooked_min_length: 150.0,
        compression_denominator: 1.0 / 0.24,
        compression_fy_coefficient: 0.043,
        compression_min_length: 200.0,
        compression_splice_fy_break: 420.0,
        compression_splice_low_slope: 0.071,
        compression_splice_high_slope: 0.13,
        compression_splice_high_offset: 24.0,
        compression_splice_min_length: 300.0,
        low_strength_fc: 21.0,
    };
}
