//! # Reinforcement Catalogs
//!
//! Bar size definitions and the built-in material presets that seed an
//! evaluation.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::materials::{PresetName, RebarSize};
//!
//! let preset = PresetName::SoftMetric.preset();
//! assert_eq!(preset.rebar_list[0].label, "No.10");
//!
//! let custom = RebarSize::new("#4", 0.5);
//! assert!((custom.nominal_area() - 0.196).abs() < 0.001);
//! ```

pub mod presets;

pub use presets::{Preset, PresetName};

use serde::{Deserialize, Serialize};

/// One catalog entry: a bar designation and its nominal diameter.
///
/// Deserializes from either an object or a `[label, diameter]` pair:
///
/// ```json
/// { "label": "#4", "diameter": 0.5 }
/// ["#4", 0.5]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebarSize {
    /// Bar designation (e.g., "#4", "No.13", "16")
    pub label: String,
    /// Nominal diameter in inches or millimeters
    pub diameter: f64,
}

impl RebarSize {
    pub fn new(label: impl Into<String>, diameter: f64) -> Self {
        Self {
            label: label.into(),
            diameter,
        }
    }

    /// Unrounded nominal area π·db²/4
    pub fn nominal_area(&self) -> f64 {
        std::f64::consts::PI * self.diameter * self.diameter / 4.0
    }
}

impl std::fmt::Display for RebarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<(&str, f64)> for RebarSize {
    fn from((label, diameter): (&str, f64)) -> Self {
        RebarSize::new(label, diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pair() {
        let bar: RebarSize = serde_json::from_str("[\"#5\", 0.625]").unwrap();
        assert_eq!(bar, RebarSize::new("#5", 0.625));
    }

    #[test]
    fn test_deserialize_object() {
        let bar: RebarSize = serde_json::from_str(r#"{"label":"No.16","diameter":15.8}"#).unwrap();
        assert_eq!(bar.label, "No.16");
        assert_eq!(bar.diameter, 15.8);
    }

    #[test]
    fn test_nominal_area() {
        let bar = RebarSize::from(("#8", 1.0));
        assert!((bar.nominal_area() - 0.7854).abs() < 0.0001);
    }
}
