//! # Length Tables
//!
//! Builds the development and splice length table for every bar in the
//! configured catalog, in catalog order.
//!
//! ## Row Layout
//!
//! ```text
//! LengthTableRow
//! ├── bar_size, diameter, area
//! ├── tension_top:   development (Ld)  / splice (Lb), each meets / does not meet cover
//! ├── tension_other: development (Ld)  / splice (Lb), each meets / does not meet cover
//! ├── compression:   development (Ldc) / splice (Lbc)
//! └── tension_hook:  development (Ldh)
//! ```
//!
//! Every length is rounded up to the configured `roundBy` increment.
//! Splice lengths that the code does not permit stay
//! [`SpliceLength::NotApplicable`].
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::config::{ConfigInput, EvaluationConfig};
//!
//! let config = EvaluationConfig::resolve(ConfigInput::new().with_fc(4000.0)).unwrap();
//! let table = config.generate_table();
//!
//! let no4 = &table.rows[1];
//! assert_eq!(no4.bar_size, "#4");
//! assert_eq!(no4.area, 0.2);
//! assert_eq!(no4.tension_other.development.meets_cover, 19.0);
//! assert_eq!(no4.tension_top.development.meets_cover, 25.0);
//! assert_eq!(no4.tension_hook.development, 10.0);
//!
//! println!("{}", table.format_report());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::aci_factors::{aci_ref, BarPosition, CoverCondition};
use crate::calculations::{
    compression_development_length, compression_splice_length, development_length,
    hooked_development_length, splice_length, SpliceLength,
};
use crate::config::EvaluationConfig;
use crate::materials::RebarSize;

/// Round `value` up to the next multiple of `increment`.
///
/// Never rounds down: `round_up_to(20.0, 1.0) == 20.0`,
/// `round_up_to(20.4, 1.0) == 21.0`, `round_up_to(22.0, 5.0) == 25.0`.
pub fn round_up_to(value: f64, increment: f64) -> f64 {
    (value / increment).ceil() * increment
}

/// Nominal bar area π·db²/4, rounded to `precision` decimal places.
pub fn bar_area(diameter: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (std::f64::consts::PI * diameter * diameter / 4.0 * scale).round() / scale
}

/// A value for each cover condition of Table 25.4.2.2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverPair<T> {
    pub meets_cover: T,
    pub does_not_meet_cover: T,
}

impl<T> CoverPair<T> {
    fn from_fn(mut f: impl FnMut(CoverCondition) -> T) -> Self {
        Self {
            meets_cover: f(CoverCondition::Satisfied),
            does_not_meet_cover: f(CoverCondition::NotSatisfied),
        }
    }

    /// Value for a given cover condition
    pub fn get(&self, cover: CoverCondition) -> &T {
        match cover {
            CoverCondition::Satisfied => &self.meets_cover,
            CoverCondition::NotSatisfied => &self.does_not_meet_cover,
        }
    }
}

/// Straight bar tension lengths for one casting position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TensionLengths {
    /// Ld
    pub development: CoverPair<f64>,
    /// Lb (Class B lap splice)
    pub splice: CoverPair<SpliceLength>,
}

/// Compression lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionLengths {
    /// Ldc
    pub development: f64,
    /// Lbc
    pub splice: SpliceLength,
}

/// Hooked bar tension lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookLengths {
    /// Ldh
    pub development: f64,
}

/// One row of the length table.
///
/// ## JSON Example
///
/// ```json
/// {
///   "barSize": "#4",
///   "diameter": 0.5,
///   "area": 0.2,
///   "tensionTop": {
///     "development": { "meetsCover": 25.0, "doesNotMeetCover": 37.0 },
///     "splice": { "meetsCover": 33.0, "doesNotMeetCover": 49.0 }
///   },
///   "tensionOther": {
///     "development": { "meetsCover": 19.0, "doesNotMeetCover": 29.0 },
///     "splice": { "meetsCover": 25.0, "doesNotMeetCover": 37.0 }
///   },
///   "compression": { "development": 10.0, "splice": 15.0 },
///   "tensionHook": { "development": 10.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthTableRow {
    pub bar_size: String,
    pub diameter: f64,
    /// Nominal area, rounded to `areaPrecision` places
    pub area: f64,
    pub tension_top: TensionLengths,
    pub tension_other: TensionLengths,
    pub compression: CompressionLengths,
    pub tension_hook: HookLengths,
}

impl LengthTableRow {
    /// Compute the row for one bar
    pub fn compute(config: &EvaluationConfig, bar: &RebarSize) -> Self {
        let db = bar.diameter;
        let round = |value: f64| round_up_to(value, config.round_by());

        let tension = |position: BarPosition| TensionLengths {
            development: CoverPair::from_fn(|cover| round(development_length(config, db, position, cover))),
            splice: CoverPair::from_fn(|cover| splice_length(config, db, position, cover).map(round)),
        };

        Self {
            bar_size: bar.label.clone(),
            diameter: db,
            area: bar_area(db, config.area_precision()),
            tension_top: tension(BarPosition::Top),
            tension_other: tension(BarPosition::Other),
            compression: CompressionLengths {
                development: round(compression_development_length(config, db)),
                splice: compression_splice_length(config, db).map(round),
            },
            tension_hook: HookLengths {
                development: round(hooked_development_length(config, db)),
            },
        }
    }

    /// Tension lengths for a casting position
    pub fn tension(&self, position: BarPosition) -> &TensionLengths {
        match position {
            BarPosition::Top => &self.tension_top,
            BarPosition::Other => &self.tension_other,
        }
    }
}

/// A complete length table together with the configuration it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthTable {
    pub config: EvaluationConfig,
    pub length_unit: &'static str,
    pub area_unit: &'static str,
    pub rows: Vec<LengthTableRow>,
}

impl EvaluationConfig {
    /// Build the length table for every bar in the catalog.
    pub fn generate_table(&self) -> LengthTable {
        debug!(
            preset = %self.preset(),
            bars = self.rebar_list().len(),
            round_by = self.round_by(),
            "building length table"
        );

        let rows = self
            .rebar_list()
            .iter()
            .map(|bar| {
                let row = LengthTableRow::compute(self, bar);
                trace!(
                    bar = %bar.label,
                    ld = row.tension_other.development.meets_cover,
                    ldh = row.tension_hook.development,
                    "computed row"
                );
                row
            })
            .collect();

        let units = self.unit_system();
        LengthTable {
            config: self.clone(),
            length_unit: units.length_unit(),
            area_unit: units.area_unit(),
            rows,
        }
    }

    /// Round a length up to this configuration's `roundBy` increment
    pub fn round_up(&self, value: f64) -> f64 {
        round_up_to(value, self.round_by())
    }
}

impl LengthTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by bar designation
    pub fn row(&self, bar_size: &str) -> Option<&LengthTableRow> {
        self.rows.iter().find(|row| row.bar_size == bar_size)
    }

    /// Format as a fixed-width text table for reports
    pub fn format_report(&self) -> String {
        let config = &self.config;
        let units = config.unit_system();
        let modifiers = config.active_modifiers();

        let mut out = format!(
            "{} Development and Splice Lengths ({})\n\
             ================================================================================================\n\
             f'c = {} {}, fy = {} {}, preset = {}, rounded up to {} {}\n\
             Modifiers: {}\n\
             Ld {} | Lb {} | Ldh {} | Ldc {} | Lbc {}\n\
             ------------------------------------------------------------------------------------------------\n",
            config.code_edition(),
            units,
            config.fc(),
            units.stress_unit(),
            config.fy(),
            units.stress_unit(),
            config.preset(),
            config.round_by(),
            self.length_unit,
            if modifiers.is_empty() {
                "none".to_string()
            } else {
                modifiers.join(", ")
            },
            aci_ref::TENSION_DEVELOPMENT,
            aci_ref::TENSION_SPLICE,
            aci_ref::HOOKED_DEVELOPMENT,
            aci_ref::COMPRESSION_DEVELOPMENT,
            aci_ref::COMPRESSION_SPLICE,
        );

        out.push_str(&format!(
            "{:<7}{:>8}{:>8} |{:>6}{:>6}{:>6}{:>6} |{:>6}{:>6}{:>6}{:>6} |{:>6}{:>6} |{:>6}\n",
            "Bar", "db", "Area", "Ldt", "Ldt*", "Lbt", "Lbt*", "Ld", "Ld*", "Lb", "Lb*", "Ldc", "Lbc", "Ldh",
        ));
        for row in &self.rows {
            out.push_str(&format!(
                "{:<7}{:>8}{:>8} |{:>6}{:>6}{:>6}{:>6} |{:>6}{:>6}{:>6}{:>6} |{:>6}{:>6} |{:>6}\n",
                row.bar_size,
                row.diameter,
                row.area,
                row.tension_top.development.meets_cover,
                row.tension_top.development.does_not_meet_cover,
                row.tension_top.splice.meets_cover.to_string(),
                row.tension_top.splice.does_not_meet_cover.to_string(),
                row.tension_other.development.meets_cover,
                row.tension_other.development.does_not_meet_cover,
                row.tension_other.splice.meets_cover.to_string(),
                row.tension_other.splice.does_not_meet_cover.to_string(),
                row.compression.development,
                row.compression.splice.to_string(),
                row.tension_hook.development,
            ));
        }
        out.push_str(&format!(
            "------------------------------------------------------------------------------------------------\n\
             Lengths in {}, areas in {}. * = cover/spacing not satisfied. N/A = lap splice not permitted.",
            self.length_unit, self.area_unit,
        ));
        out
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
    fn test_round_up_to() {
        assert_eq!(round_up_to(20.4, 1.0), 21.0);
        assert_eq!(round_up_to(20.0, 1.0), 20.0);
        assert_eq!(round_up_to(22.0, 5.0), 25.0);
        assert_eq!(round_up_to(21.7, 10.0), 30.0);
    }

    #[test]
    fn test_round_up_to_bounds() {
        for increment in [0.5, 1.0, 2.0, 5.0, 25.0] {
            for i in 1..200 {
                let x = i as f64 * 0.37;
                let rounded = round_up_to(x, increment);
                assert!(rounded >= x, "{} rounded to {} by {}", x, rounded, increment);
                assert!(rounded < x + increment, "{} rounded to {} by {}", x, rounded, increment);
            }
        }
    }

    #[test]
    fn test_config_round_up_uses_round_by() {
        let c = config(ConfigInput::new().with_round_by(5.0));
        assert_eq!(c.round_up(22.0), 25.0);
        assert_eq!(EvaluationConfig::default().round_up(20.4), 21.0);
    }

    #[test]
    fn test_bar_area() {
        assert_eq!(bar_area(0.5, 2), 0.2);
        assert_eq!(bar_area(1.0, 2), 0.79);
        assert_eq!(bar_area(1.41, 2), 1.56);
        assert_eq!(bar_area(9.52, 0), 71.0);
        assert_eq!(bar_area(25.0, 0), 491.0);
    }

    #[test]
    fn test_table_preserves_catalog_order() {
        let table = EvaluationConfig::default().generate_table();
        let labels: Vec<_> = table.rows.iter().map(|row| row.bar_size.as_str()).collect();
        assert_eq!(
            labels,
            ["#3", "#4", "#5", "#6", "#7", "#8", "#9", "#10", "#11", "#14", "#18"]
        );
        assert_eq!(table.len(), 11);
        assert_eq!(table.length_unit, "in");
    }

    #[test]
    fn test_imperial_row_values() {
        let table = EvaluationConfig::default().generate_table();
        let row = table.row("#4").unwrap();
        assert_eq!(row.area, 0.2);
        assert_eq!(row.tension_other.development.meets_cover, 19.0);
        assert_eq!(row.tension_other.development.does_not_meet_cover, 29.0);
        assert_eq!(row.tension_top.development.meets_cover, 25.0);
        assert_eq!(row.tension_other.splice.meets_cover, SpliceLength::Applicable(25.0));
        assert_eq!(row.compression.development, 10.0);
        assert_eq!(row.compression.splice, SpliceLength::Applicable(15.0));
        assert_eq!(row.tension_hook.development, 10.0);
        assert_eq!(
            row.tension(BarPosition::Top).development.get(CoverCondition::Satisfied),
            &25.0
        );
    }

    #[test]
    fn test_large_bars_have_no_splices() {
        let table = EvaluationConfig::default().generate_table();
        for label in ["#14", "#18"] {
            let row = table.row(label).unwrap();
            for position in BarPosition::ALL {
                for cover in CoverCondition::ALL {
                    assert_eq!(row.tension(position).splice.get(cover), &SpliceLength::NotApplicable);
                }
            }
            assert_eq!(row.compression.splice, SpliceLength::NotApplicable);
            assert!(row.tension_top.development.meets_cover > 0.0);
        }
        assert!(table.row("#11").unwrap().tension_top.splice.meets_cover.is_applicable());
    }

    #[test]
    fn test_lengths_are_multiples_of_round_by() {
        let table = config(ConfigInput::new().with_preset("hardMetric").with_round_by(25.0)).generate_table();
        for row in &table.rows {
            for value in [
                row.tension_top.development.meets_cover,
                row.tension_other.development.does_not_meet_cover,
                row.compression.development,
                row.tension_hook.development,
            ] {
                assert_eq!(value % 25.0, 0.0);
            }
        }
        assert_eq!(table.length_unit, "mm");
    }

    #[test]
    fn test_soft_metric_table() {
        let table = config(ConfigInput::new().with_preset("softMetric")).generate_table();
        assert_eq!(table.rows[0].bar_size, "No.10");
        let no13 = table.row("No.13").unwrap();
        assert_eq!(no13.area, 127.0);
        assert_eq!(no13.tension_other.development.meets_cover, 464.0);
        assert_eq!(no13.tension_other.splice.meets_cover, SpliceLength::Applicable(603.0));
        assert_eq!(no13.compression.splice, SpliceLength::Applicable(379.0));
        // 0.24·fy·db/√f'c governs both, above the 150 mm / 200 mm floors
        assert_eq!(no13.tension_hook.development, 234.0);
        assert_eq!(no13.compression.development, 234.0);
        // No.36 is spliceable, No.43 is not
        assert!(table.row("No.36").unwrap().compression.splice.is_applicable());
        assert!(!table.row("No.43").unwrap().compression.splice.is_applicable());
    }

    #[test]
    fn test_seismic_increase_in_table() {
        let base = EvaluationConfig::default().generate_table();
        let seismic = config(ConfigInput::new().with_seismic_increase(Some(1.25))).generate_table();
        let (b, s) = (base.row("#4").unwrap(), seismic.row("#4").unwrap());
        assert_eq!(s.tension_other.development.meets_cover, 24.0);
        assert_eq!(s.tension_hook.development, 12.0);
        // Splices pick up the increase through Ld: ⌈1.3 × 23.72⌉
        assert_eq!(s.tension_other.splice.meets_cover, SpliceLength::Applicable(31.0));
        assert_eq!(b.tension_other.splice.meets_cover, SpliceLength::Applicable(25.0));
        // Compression lengths are unaffected
        assert_eq!(s.compression, b.compression);
    }

    #[test]
    fn test_table_serialization() {
        let table = config(ConfigInput::new().with_rebar_list(vec![
            RebarSize::new("#4", 0.5),
            RebarSize::new("#14", 1.693),
        ]))
        .generate_table();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["rows"][0]["barSize"], "#4");
        assert_eq!(json["rows"][0]["tensionOther"]["development"]["meetsCover"], 19.0);
        assert!(json["rows"][1]["tensionTop"]["splice"]["meetsCover"].is_null());
        assert_eq!(json["config"]["preset"], "imperial");
        assert_eq!(json["lengthUnit"], "in");

        let row: LengthTableRow = serde_json::from_value(json["rows"][1].clone()).unwrap();
        assert_eq!(row, table.rows[1]);
    }

    #[test]
    fn test_format_report() {
        let table = config(ConfigInput::new().with_lightweight_concrete(true)).generate_table();
        let report = table.format_report();
        assert!(report.starts_with("ACI 318-14 Development and Splice Lengths"));
        assert!(report.contains("f'c = 4000 psi, fy = 60000 psi"));
        assert!(report.contains("Modifiers: lightweight concrete"));
        assert!(report.contains(aci_ref::TENSION_SPLICE));
        assert!(report.lines().any(|line| line.starts_with("#18") && line.contains("N/A")));
        // header block + column header + 11 rows + footer
        assert_eq!(report.lines().count(), 6 + 1 + 11 + 2);
    }
}
