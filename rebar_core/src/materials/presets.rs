//! Built-in Material Presets
//!
//! Three named bundles of bar catalog and material strengths:
//!
//! | Preset       | Catalog            | fy        | f'c      |
//! |--------------|--------------------|-----------|----------|
//! | `imperial`   | #3 - #18           | 60000 psi | 4000 psi |
//! | `softMetric` | No.10 - No.57      | 420 MPa   | 30 MPa   |
//! | `hardMetric` | 8 - 50 mm          | 420 MPa   | 30 MPa   |
//!
//! Presets are built once on first access and shared read-only for the life
//! of the process.

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::RebarSize;
use crate::errors::{CalcError, CalcResult};

/// Name of a built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PresetName {
    /// US customary bar sizes, Grade 60
    #[default]
    Imperial,
    /// US bar sizes with metric designations (ASTM A615M)
    SoftMetric,
    /// True metric bar diameters
    HardMetric,
}

impl PresetName {
    /// All presets, in catalog order
    pub const ALL: [PresetName; 3] = [
        PresetName::Imperial,
        PresetName::SoftMetric,
        PresetName::HardMetric,
    ];

    /// Name as accepted in the configuration bundle
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Imperial => "imperial",
            PresetName::SoftMetric => "softMetric",
            PresetName::HardMetric => "hardMetric",
        }
    }

    /// The preset's data
    pub fn preset(&self) -> &'static Preset {
        match self {
            PresetName::Imperial => &PRESETS[0],
            PresetName::SoftMetric => &PRESETS[1],
            PresetName::HardMetric => &PRESETS[2],
        }
    }
}

impl FromStr for PresetName {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        PresetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CalcError::unknown_preset(s))
    }
}

impl std::fmt::Display for PresetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preset data seeding an evaluation before caller overrides
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: PresetName,
    /// Bar catalog, in table row order
    pub rebar_list: Vec<RebarSize>,
    /// Steel yield strength (psi or MPa)
    pub fy: f64,
    /// Concrete compressive strength (psi or MPa)
    pub fc: f64,
    pub is_metric: bool,
    /// Decimal places kept on reported bar areas
    pub area_precision: u32,
}

fn catalog(entries: &[(&str, f64)]) -> Vec<RebarSize> {
    entries.iter().map(|&entry| RebarSize::from(entry)).collect()
}

static PRESETS: Lazy<[Preset; 3]> = Lazy::new(|| {
    [
        Preset {
            name: PresetName::Imperial,
            rebar_list: catalog(&[
                ("#3", 0.375),
                ("#4", 0.500),
                ("#5", 0.625),
                ("#6", 0.750),
                ("#7", 0.875),
                ("#8", 1.000),
                ("#9", 1.128),
                ("#10", 1.270),
                ("#11", 1.410),
                ("#14", 1.693),
                ("#18", 2.257),
            ]),
            fy: 60000.0,
            fc: 4000.0,
            is_metric: false,
            area_precision: 2,
        },
        Preset {
            name: PresetName::SoftMetric,
            rebar_list: catalog(&[
                ("No.10", 9.52),
                ("No.13", 12.7),
                ("No.16", 15.8),
                ("No.19", 19.05),
                ("No.22", 22.225),
                ("No.25", 25.4),
                ("No.29", 28.65),
                ("No.32", 32.25),
                ("No.36", 35.81),
                ("No.43", 43.0),
                ("No.57", 57.33),
            ]),
            fy: 420.0,
            fc: 30.0,
            is_metric: true,
            area_precision: 0,
        },
        Preset {
            name: PresetName::HardMetric,
            rebar_list: catalog(&[
                ("8", 8.0),
                ("10", 10.0),
                ("12", 12.0),
                ("14", 14.0),
                ("16", 16.0),
                ("20", 20.0),
                ("25", 25.0),
                ("28", 28.0),
                ("32", 32.0),
                ("40", 40.0),
                ("50", 50.0),
            ]),
            fy: 420.0,
            fc: 30.0,
            is_metric: true,
            area_precision: 0,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!("softMetric".parse::<PresetName>().unwrap(), PresetName::SoftMetric);
        assert_eq!(PresetName::SoftMetric.preset().rebar_list[0].label, "No.10");
        assert_eq!(PresetName::HardMetric.preset().rebar_list[0].label, "8");
        assert_eq!(PresetName::Imperial.preset().rebar_list[0].label, "#3");
    }

    #[test]
    fn test_unknown_preset() {
        let err = "Australia".parse::<PresetName>().unwrap_err();
        assert_eq!(err, CalcError::unknown_preset("Australia"));
        // Names are case-sensitive
        assert!("Imperial".parse::<PresetName>().is_err());
    }

    #[test]
    fn test_preset_data_consistent() {
        for name in PresetName::ALL {
            let preset = name.preset();
            assert_eq!(preset.name, name);
            assert_eq!(preset.rebar_list.len(), 11);
            assert!(preset
                .rebar_list
                .windows(2)
                .all(|pair| pair[0].diameter < pair[1].diameter));
        }
        assert!(!PresetName::Imperial.preset().is_metric);
        assert_eq!(PresetName::HardMetric.preset().area_precision, 0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PresetName::SoftMetric).unwrap();
        assert_eq!(json, "\"softMetric\"");
        let parsed: PresetName = serde_json::from_str("\"hardMetric\"").unwrap();
        assert_eq!(parsed, PresetName::HardMetric);
    }
}
