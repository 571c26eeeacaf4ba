//! # ACI 318 Modification Factors
//!
//! Modification factors for development and splice lengths per ACI 318-14
//! Chapter 25.
//!
//! ## Overview
//!
//! ```text
//! Ld  = db × fy × ψt·ψe / (C × λ × √f'c)            Table 25.4.2.2
//! Ldh = fy × db × ψe·ψc·ψr / (C × λ × √f'c)         25.4.3.1
//! Ldc = max(fy·ψr·db / (C·λ·√f'c), C'·fy·ψr·db)     25.4.9.2
//! ```
//!
//! ## Factor Summary
//!
//! | Factor  | Description                  | Values          |
//! |---------|------------------------------|-----------------|
//! | λ       | Lightweight concrete         | 0.75 or 1.0     |
//! | ψe      | Epoxy coating (straight)     | 1.0, 1.2, 1.5   |
//! | ψs      | Bar size                     | 0.8 or 1.0      |
//! | ψt      | Casting position             | 1.0 or 1.3      |
//! | ψt·ψe   | Combined, capped             | ≤ 1.7           |
//! | ψe      | Epoxy coating (hooked)       | 1.0 or 1.2      |
//! | ψc      | Hook side cover              | 0.7 or 1.0      |
//! | ψr      | Hook confinement             | 0.8 or 1.0      |
//! | ψr      | Compression confinement      | 0.75 or 1.0     |
//!
//! Factors are methods on [`EvaluationConfig`] so they always reflect the
//! configuration they are evaluated against.

use serde::{Deserialize, Serialize};

use crate::config::EvaluationConfig;

// ============================================================================
// ACI Code Section References
// ============================================================================

/// ACI 318-14 section references for the length clauses and factors.
pub mod aci_ref {
    /// Limit on √f'c
    pub const SQRT_FC_LIMIT: &str = "ACI 318-14 25.4.1.4";

    // Lengths
    /// Straight bar tension development length Ld
    pub const TENSION_DEVELOPMENT: &str = "ACI 318-14 Table 25.4.2.2";
    /// Tension lap splice length
    pub const TENSION_SPLICE: &str = "ACI 318-14 Table 25.5.2.1";
    /// Hooked bar development length Ldh
    pub const HOOKED_DEVELOPMENT: &str = "ACI 318-14 25.4.3.1";
    /// Compression development length Ldc
    pub const COMPRESSION_DEVELOPMENT: &str = "ACI 318-14 25.4.9.2";
    /// Compression lap splice length
    pub const COMPRESSION_SPLICE: &str = "ACI 318-14 25.5.5";

    // Factors
    /// λ, ψe, ψs, ψt for straight bars in tension
    pub const TENSION_FACTORS: &str = "ACI 318-14 Table 25.4.2.3";
    /// λ, ψe, ψc, ψr for hooked bars
    pub const HOOKED_FACTORS: &str = "ACI 318-14 Table 25.4.3.2";
    /// λ, ψr for bars in compression
    pub const COMPRESSION_FACTORS: &str = "ACI 318-14 Table 25.4.9.3";
}

/// Upper limit on the product ψt × ψe
pub const MAX_EPOXY_POSITION_PRODUCT: f64 = 1.7;

/// Lap splice length as a multiple of Ld (Class B splice)
pub const TENSION_SPLICE_MULTIPLIER: f64 = 1.3;

/// Increase on compression splices when f'c is below the low-strength limit
pub const LOW_STRENGTH_SPLICE_INCREASE: f64 = 1.33;

/// Bar casting position for the ψt factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarPosition {
    /// Horizontal bar with more than 12 in. of fresh concrete cast below it: ψt = 1.3
    Top,
    /// Any other bar: ψt = 1.0
    #[default]
    Other,
}

impl BarPosition {
    pub const ALL: [BarPosition; 2] = [BarPosition::Top, BarPosition::Other];

    /// Get the ψt factor
    pub fn factor(&self) -> f64 {
        match self {
            BarPosition::Top => 1.3,
            BarPosition::Other => 1.0,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BarPosition::Top => "Top bars",
            BarPosition::Other => "Other bars",
        }
    }
}

impl std::fmt::Display for BarPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Whether clear spacing, clear cover and confinement meet the
/// "cover satisfied" row of Table 25.4.2.2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CoverCondition {
    /// Spacing and cover satisfied
    Satisfied,
    /// Other cases
    #[default]
    NotSatisfied,
}

impl CoverCondition {
    pub const ALL: [CoverCondition; 2] = [CoverCondition::Satisfied, CoverCondition::NotSatisfied];

    pub fn is_satisfied(&self) -> bool {
        matches!(self, CoverCondition::Satisfied)
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CoverCondition::Satisfied => "Meets cover",
            CoverCondition::NotSatisfied => "Does not meet cover",
        }
    }
}

impl From<bool> for CoverCondition {
    fn from(meets_cover: bool) -> Self {
        if meets_cover {
            CoverCondition::Satisfied
        } else {
            CoverCondition::NotSatisfied
        }
    }
}

impl std::fmt::Display for CoverCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl EvaluationConfig {
    /// √f'c limited per 25.4.1.4 (100 psi / 8.3 MPa)
    pub fn sqrt_fc(&self) -> f64 {
        self.fc.sqrt().min(self.constants().sqrt_fc_cap)
    }

    /// Lightweight concrete factor λ (Table 25.4.2.3)
    pub fn lambda(&self) -> f64 {
        if self.lightweight_concrete {
            0.75
        } else {
            1.0
        }
    }

    /// Epoxy factor ψe for straight bars (Table 25.4.2.3)
    pub fn epoxy_factor(&self) -> f64 {
        match (self.epoxy_coated_rebar, self.epoxy_cover_satisfied) {
            (false, _) => 1.0,
            (true, true) => 1.2,
            (true, false) => 1.5,
        }
    }

    /// Size factor ψs (Table 25.4.2.3)
    ///
    /// Already folded into the Table 25.4.2.2 coefficients; reported for
    /// reference only.
    pub fn size_factor(&self, db: f64) -> f64 {
        if db >= self.constants().size_factor_threshold {
            1.0
        } else {
            0.8
        }
    }

    /// Combined ψt × ψe, not to exceed 1.7
    pub fn epoxy_position_factor(&self, position: BarPosition) -> f64 {
        (self.epoxy_factor() * position.factor()).min(MAX_EPOXY_POSITION_PRODUCT)
    }

    /// λ for hooked bars (Table 25.4.3.2)
    pub fn hooked_lambda(&self) -> f64 {
        self.lambda()
    }

    /// ψe for hooked bars (Table 25.4.3.2)
    pub fn hooked_epoxy_factor(&self) -> f64 {
        if self.epoxy_coated_rebar {
            1.2
        } else {
            1.0
        }
    }

    /// Side cover factor ψc for hooked bars (Table 25.4.3.2)
    pub fn hooked_cover_factor(&self, db: f64) -> f64 {
        if self.hooked_cover_satisfied && db <= self.constants().hooked_factor_cutoff {
            0.7
        } else {
            1.0
        }
    }

    /// Confining reinforcement factor ψr for hooked bars (Table 25.4.3.2)
    pub fn hooked_confinement_factor(&self, db: f64) -> f64 {
        if self.hooked_confinement_satisfied && db <= self.constants().hooked_factor_cutoff {
            0.8
        } else {
            1.0
        }
    }

    /// λ for bars in compression (Table 25.4.9.3)
    pub fn compression_lambda(&self) -> f64 {
        self.lambda()
    }

    /// Confining reinforcement factor ψr for bars in compression (Table 25.4.9.3)
    pub fn compression_confinement_factor(&self) -> f64 {
        if self.compression_confinement_satisfied {
            0.75
        } else {
            1.0
        }
    }

    /// Multiplier on tension lengths for the optional seismic increase
    pub fn seismic_multiplier(&self) -> f64 {
        if self.include_seismic_increase {
            self.seismic_increase_factor
        } else {
            1.0
        }
    }

    /// Compression splice increase for low-strength concrete (25.5.5)
    pub fn low_strength_increase(&self) -> f64 {
        if self.fc < self.constants().low_strength_fc {
            LOW_STRENGTH_SPLICE_INCREASE
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigInput;

    fn config(input: ConfigInput) -> EvaluationConfig {
        EvaluationConfig::resolve(input).unwrap()
    }

    #[test]
    fn test_sqrt_fc() {
        assert!((config(ConfigInput::new().with_fc(4000.0)).sqrt_fc() - 63.2).abs() < 0.05);
        assert!((config(ConfigInput::new().with_fc(6000.0)).sqrt_fc() - 77.5).abs() < 0.05);
        assert_eq!(config(ConfigInput::new().with_fc(12000.0)).sqrt_fc(), 100.0);

        let metric = |fc| config(ConfigInput::new().with_fc(fc).with_metric(true)).sqrt_fc();
        assert!((metric(30.0) - 5.5).abs() < 0.05);
        assert!((metric(50.0) - 7.1).abs() < 0.05);
        assert_eq!(metric(82.0), 8.3);
    }

    #[test]
    fn test_sqrt_fc_monotonic_until_cap() {
        let mut previous = 0.0;
        for fc in (1000..=15000).step_by(500) {
            let value = config(ConfigInput::new().with_fc(fc as f64)).sqrt_fc();
            assert!(value >= previous);
            assert!(value <= 100.0);
            previous = value;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn test_lambda_factors() {
        let normal = config(ConfigInput::new().with_lightweight_concrete(false));
        assert_eq!(normal.lambda(), 1.0);
        assert_eq!(normal.hooked_lambda(), 1.0);
        assert_eq!(normal.compression_lambda(), 1.0);

        let lightweight = config(ConfigInput::new().with_lightweight_concrete(true));
        assert_eq!(lightweight.lambda(), 0.75);
        assert_eq!(lightweight.hooked_lambda(), 0.75);
        assert_eq!(lightweight.compression_lambda(), 0.75);
    }

    #[test]
    fn test_epoxy_factors() {
        assert_eq!(config(ConfigInput::new().with_epoxy(false, false)).epoxy_factor(), 1.0);
        assert_eq!(config(ConfigInput::new().with_epoxy(true, false)).epoxy_factor(), 1.5);
        assert_eq!(config(ConfigInput::new().with_epoxy(true, true)).epoxy_factor(), 1.2);
        assert_eq!(config(ConfigInput::new().with_epoxy(false, true)).epoxy_factor(), 1.0);

        assert_eq!(config(ConfigInput::new().with_epoxy(false, false)).hooked_epoxy_factor(), 1.0);
        assert_eq!(config(ConfigInput::new().with_epoxy(true, false)).hooked_epoxy_factor(), 1.2);
    }

    #[test]
    fn test_size_factor() {
        let imperial = EvaluationConfig::default();
        assert_eq!(imperial.size_factor(0.5), 0.8);
        assert_eq!(imperial.size_factor(0.75), 0.8);
        assert_eq!(imperial.size_factor(0.875), 1.0);

        let metric = config(ConfigInput::new().with_metric(true));
        assert_eq!(metric.size_factor(10.0), 0.8);
        assert_eq!(metric.size_factor(16.0), 0.8);
        assert_eq!(metric.size_factor(22.0), 1.0);
    }

    #[test]
    fn test_position_factor() {
        assert_eq!(BarPosition::Top.factor(), 1.3);
        assert_eq!(BarPosition::Other.factor(), 1.0);
    }

    #[test]
    fn test_combined_epoxy_position_factor() {
        let plain = config(ConfigInput::new().with_epoxy(false, false));
        assert_eq!(plain.epoxy_position_factor(BarPosition::Other), 1.0);
        assert_eq!(plain.epoxy_position_factor(BarPosition::Top), 1.3);

        let uncovered = config(ConfigInput::new().with_epoxy(true, false));
        assert_eq!(uncovered.epoxy_position_factor(BarPosition::Other), 1.5);
        // 1.3 × 1.5 = 1.95 > 1.7
        assert_eq!(uncovered.epoxy_position_factor(BarPosition::Top), 1.7);

        let covered = config(ConfigInput::new().with_epoxy(true, true));
        assert_eq!(covered.epoxy_position_factor(BarPosition::Other), 1.2);
        assert!((covered.epoxy_position_factor(BarPosition::Top) - 1.56).abs() < 1e-12);
    }

    #[test]
    fn test_hooked_cover_and_confinement() {
        let off = EvaluationConfig::default();
        assert_eq!(off.hooked_cover_factor(0.5), 1.0);
        assert_eq!(off.hooked_confinement_factor(0.5), 1.0);

        let on = config(
            ConfigInput::new()
                .with_hooked_cover_satisfied(true)
                .with_hooked_confinement_satisfied(true),
        );
        assert_eq!(on.hooked_cover_factor(1.41), 0.7);
        assert_eq!(on.hooked_cover_factor(1.693), 1.0);
        assert_eq!(on.hooked_confinement_factor(1.41), 0.8);
        assert_eq!(on.hooked_confinement_factor(2.257), 1.0);

        let metric = config(
            ConfigInput::new()
                .with_preset("softMetric")
                .with_hooked_cover_satisfied(true),
        );
        assert_eq!(metric.hooked_cover_factor(35.81), 0.7);
        assert_eq!(metric.hooked_cover_factor(43.0), 1.0);
    }

    #[test]
    fn test_compression_confinement_factor() {
        assert_eq!(
            config(ConfigInput::new().with_compression_confinement_satisfied(true))
                .compression_confinement_factor(),
            0.75
        );
        assert_eq!(EvaluationConfig::default().compression_confinement_factor(), 1.0);
    }

    #[test]
    fn test_low_strength_increase() {
        assert_eq!(config(ConfigInput::new().with_fc(2500.0)).low_strength_increase(), 1.33);
        assert_eq!(config(ConfigInput::new().with_fc(3000.0)).low_strength_increase(), 1.0);
        assert_eq!(
            config(ConfigInput::new().with_preset("hardMetric").with_fc(20.0)).low_strength_increase(),
            1.33
        );
    }

    #[test]
    fn test_cover_condition_from_bool() {
        assert_eq!(CoverCondition::from(true), CoverCondition::Satisfied);
        assert!(!CoverCondition::from(false).is_satisfied());
    }
}
