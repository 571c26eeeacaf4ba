//! # Evaluation Configuration
//!
//! Resolves the caller's configuration bundle into one immutable
//! [`EvaluationConfig`]. Fields are merged shallowly, later sources winning:
//!
//! ```text
//! global defaults  →  preset (imperial unless named)  →  caller fields
//! ```
//!
//! Supplying `rebarList` replaces the preset catalog wholesale. Unrecognized
//! keys in a JSON bundle are kept in [`EvaluationConfig::extra`] and otherwise
//! ignored.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::config::{CodeEdition, ConfigInput, EvaluationConfig};
//!
//! let config = EvaluationConfig::resolve(
//!     ConfigInput::new()
//!         .with_preset("softMetric")
//!         .with_fc(35.0)
//!         .with_lightweight_concrete(true),
//! )
//! .unwrap();
//!
//! assert!(config.is_metric());
//! assert_eq!(config.fy(), 420.0);
//! assert_eq!(config.fc(), 35.0);
//! assert_eq!(config.code_edition(), CodeEdition::Aci318_14);
//! ```
//!
//! ## JSON Bundle
//!
//! ```json
//! {
//!   "preset": "imperial",
//!   "codeEdition": "318-14",
//!   "fc": 5000,
//!   "epoxyCoatedRebar": true,
//!   "rebarList": [["#4", 0.5], ["#5", 0.625]],
//!   "roundBy": 1
//! }
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{PresetName, RebarSize};
use crate::units::{CodeConstants, UnitSystem};

/// Default multiplier applied to tension lengths when the seismic increase is on
pub const DEFAULT_SEISMIC_INCREASE_FACTOR: f64 = 1.25;

/// Default rounding increment for reported lengths
pub const DEFAULT_ROUND_BY: f64 = 1.0;

/// Largest accepted `areaPrecision`
pub const MAX_AREA_PRECISION: u32 = 10;

/// Supported ACI 318 editions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodeEdition {
    /// ACI 318-14 / 318M-14
    #[default]
    #[serde(rename = "318-14")]
    Aci318_14,
    /// ACI 318-11 / 318M-11 (accepted; evaluated with the 318-14 provisions)
    #[serde(rename = "318-11")]
    Aci318_11,
}

impl CodeEdition {
    /// All supported editions
    pub const ALL: [CodeEdition; 2] = [CodeEdition::Aci318_14, CodeEdition::Aci318_11];

    /// Edition string as accepted in the configuration bundle
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeEdition::Aci318_14 => "318-14",
            CodeEdition::Aci318_11 => "318-11",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeEdition::Aci318_14 => "ACI 318-14",
            CodeEdition::Aci318_11 => "ACI 318-11",
        }
    }

    /// Whether the engine carries edition-specific provisions for this edition.
    ///
    /// Only 318-14 does; 318-11 tables are computed with the 318-14 formulas.
    pub fn has_dedicated_provisions(&self) -> bool {
        matches!(self, CodeEdition::Aci318_14)
    }
}

impl FromStr for CodeEdition {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        CodeEdition::ALL
            .into_iter()
            .find(|edition| edition.as_str() == s)
            .ok_or_else(|| CalcError::unsupported_code_edition(s))
    }
}

impl std::fmt::Display for CodeEdition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Caller-supplied configuration bundle.
///
/// Every field is optional; `None` means "inherit from the preset or the
/// global defaults". `preset` and `codeEdition` stay as raw strings so that
/// unknown names surface as [`CalcError::UnknownPreset`] and
/// [`CalcError::UnsupportedCodeEdition`] at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInput {
    pub preset: Option<String>,
    pub code_edition: Option<String>,
    pub fc: Option<f64>,
    pub fy: Option<f64>,
    pub is_metric: Option<bool>,
    pub rebar_list: Option<Vec<RebarSize>>,
    pub lightweight_concrete: Option<bool>,
    pub epoxy_coated_rebar: Option<bool>,
    pub epoxy_cover_satisfied: Option<bool>,
    pub hooked_cover_satisfied: Option<bool>,
    pub hooked_confinement_satisfied: Option<bool>,
    pub compression_confinement_satisfied: Option<bool>,
    pub include_seismic_increase: Option<bool>,
    pub seismic_increase_factor: Option<f64>,
    pub round_by: Option<f64>,
    pub area_precision: Option<u32>,

    /// Unrecognized fields, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ConfigInput {
    /// Empty bundle (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration bundle
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Shallow override: every field set in `overrides` replaces the one in
    /// `self`. Passthrough maps are merged key by key.
    pub fn merge(self, overrides: ConfigInput) -> Self {
        let mut extra = self.extra;
        extra.extend(overrides.extra);
        Self {
            preset: overrides.preset.or(self.preset),
            code_edition: overrides.code_edition.or(self.code_edition),
            fc: overrides.fc.or(self.fc),
            fy: overrides.fy.or(self.fy),
            is_metric: overrides.is_metric.or(self.is_metric),
            rebar_list: overrides.rebar_list.or(self.rebar_list),
            lightweight_concrete: overrides.lightweight_concrete.or(self.lightweight_concrete),
            epoxy_coated_rebar: overrides.epoxy_coated_rebar.or(self.epoxy_coated_rebar),
            epoxy_cover_satisfied: overrides.epoxy_cover_satisfied.or(self.epoxy_cover_satisfied),
            hooked_cover_satisfied: overrides.hooked_cover_satisfied.or(self.hooked_cover_satisfied),
            hooked_confinement_satisfied: overrides
                .hooked_confinement_satisfied
                .or(self.hooked_confinement_satisfied),
            compression_confinement_satisfied: overrides
                .compression_confinement_satisfied
                .or(self.compression_confinement_satisfied),
            include_seismic_increase: overrides
                .include_seismic_increase
                .or(self.include_seismic_increase),
            seismic_increase_factor: overrides
                .seismic_increase_factor
                .or(self.seismic_increase_factor),
            round_by: overrides.round_by.or(self.round_by),
            area_precision: overrides.area_precision.or(self.area_precision),
            extra,
        }
    }

    /// Select a preset by name
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Select a code edition by name ("318-14" or "318-11")
    pub fn with_code_edition(mut self, edition: impl Into<String>) -> Self {
        self.code_edition = Some(edition.into());
        self
    }

    /// Set concrete compressive strength f'c
    pub fn with_fc(mut self, fc: f64) -> Self {
        self.fc = Some(fc);
        self
    }

    /// Set steel yield strength fy
    pub fn with_fy(mut self, fy: f64) -> Self {
        self.fy = Some(fy);
        self
    }

    /// Select metric (318M) constants
    pub fn with_metric(mut self, is_metric: bool) -> Self {
        self.is_metric = Some(is_metric);
        self
    }

    /// Replace the bar catalog
    pub fn with_rebar_list(mut self, rebar_list: Vec<RebarSize>) -> Self {
        self.rebar_list = Some(rebar_list);
        self
    }

    pub fn with_lightweight_concrete(mut self, value: bool) -> Self {
        self.lightweight_concrete = Some(value);
        self
    }

    /// Set epoxy coating, and whether the additional epoxy cover/spacing
    /// requirements are met
    pub fn with_epoxy(mut self, coated: bool, cover_satisfied: bool) -> Self {
        self.epoxy_coated_rebar = Some(coated);
        self.epoxy_cover_satisfied = Some(cover_satisfied);
        self
    }

    pub fn with_hooked_cover_satisfied(mut self, value: bool) -> Self {
        self.hooked_cover_satisfied = Some(value);
        self
    }

    pub fn with_hooked_confinement_satisfied(mut self, value: bool) -> Self {
        self.hooked_confinement_satisfied = Some(value);
        self
    }

    pub fn with_compression_confinement_satisfied(mut self, value: bool) -> Self {
        self.compression_confinement_satisfied = Some(value);
        self
    }

    /// Enable the seismic increase with an optional custom multiplier
    pub fn with_seismic_increase(mut self, factor: Option<f64>) -> Self {
        self.include_seismic_increase = Some(true);
        self.seismic_increase_factor = factor.or(self.seismic_increase_factor);
        self
    }

    /// Set the rounding increment for reported lengths
    pub fn with_round_by(mut self, round_by: f64) -> Self {
        self.round_by = Some(round_by);
        self
    }

    /// Set decimal places kept on reported bar areas
    pub fn with_area_precision(mut self, precision: u32) -> Self {
        self.area_precision = Some(precision);
        self
    }
}

/// Fully resolved, immutable evaluation configuration.
///
/// Obtain one through [`EvaluationConfig::resolve`] (or `Default` for the
/// plain imperial preset). Fields are read through accessors; all derived
/// quantities (factors, lengths, tables) are recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationConfig {
    pub(crate) preset: PresetName,
    pub(crate) code_edition: CodeEdition,
    pub(crate) is_metric: bool,
    pub(crate) fc: f64,
    pub(crate) fy: f64,
    pub(crate) rebar_list: Vec<RebarSize>,
    pub(crate) lightweight_concrete: bool,
    pub(crate) epoxy_coated_rebar: bool,
    pub(crate) epoxy_cover_satisfied: bool,
    pub(crate) hooked_cover_satisfied: bool,
    pub(crate) hooked_confinement_satisfied: bool,
    pub(crate) compression_confinement_satisfied: bool,
    pub(crate) include_seismic_increase: bool,
    pub(crate) seismic_increase_factor: f64,
    pub(crate) round_by: f64,
    pub(crate) area_precision: u32,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) extra: BTreeMap<String, serde_json::Value>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::merge(PresetName::default(), CodeEdition::default(), ConfigInput::default())
    }
}

impl EvaluationConfig {
    /// Resolve a configuration bundle.
    ///
    /// # Errors
    ///
    /// * [`CalcError::UnknownPreset`] - `preset` is not a built-in preset
    /// * [`CalcError::UnsupportedCodeEdition`] - `codeEdition` is not supported
    /// * [`CalcError::InvalidInput`] - a merged value is out of range
    pub fn resolve(input: ConfigInput) -> CalcResult<Self> {
        let preset = match input.preset.as_deref() {
            Some(name) => name.parse()?,
            None => PresetName::default(),
        };
        let code_edition = match input.code_edition.as_deref() {
            Some(edition) => edition.parse()?,
            None => CodeEdition::default(),
        };

        let config = Self::merge(preset, code_edition, input);
        config.validate()?;

        if !code_edition.has_dedicated_provisions() {
            warn!(
                edition = code_edition.as_str(),
                "no edition-specific provisions; using ACI 318-14 formulas"
            );
        }
        if !config.extra.is_empty() {
            debug!(
                fields = ?config.extra.keys().collect::<Vec<_>>(),
                "unrecognized configuration fields passed through"
            );
        }
        debug!(
            preset = %config.preset,
            edition = code_edition.as_str(),
            fc = config.fc,
            fy = config.fy,
            bars = config.rebar_list.len(),
            "resolved evaluation config"
        );

        Ok(config)
    }

    /// Parse and resolve a JSON configuration bundle
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Self::resolve(ConfigInput::from_json(json)?)
    }

    fn merge(preset: PresetName, code_edition: CodeEdition, input: ConfigInput) -> Self {
        let seed = preset.preset();
        Self {
            preset,
            code_edition,
            is_metric: input.is_metric.unwrap_or(seed.is_metric),
            fc: input.fc.unwrap_or(seed.fc),
            fy: input.fy.unwrap_or(seed.fy),
            rebar_list: input.rebar_list.unwrap_or_else(|| seed.rebar_list.clone()),
            lightweight_concrete: input.lightweight_concrete.unwrap_or(false),
            epoxy_coated_rebar: input.epoxy_coated_rebar.unwrap_or(false),
            epoxy_cover_satisfied: input.epoxy_cover_satisfied.unwrap_or(false),
            hooked_cover_satisfied: input.hooked_cover_satisfied.unwrap_or(false),
            hooked_confinement_satisfied: input.hooked_confinement_satisfied.unwrap_or(false),
            compression_confinement_satisfied: input
                .compression_confinement_satisfied
                .unwrap_or(false),
            include_seismic_increase: input.include_seismic_increase.unwrap_or(false),
            seismic_increase_factor: input
                .seismic_increase_factor
                .unwrap_or(DEFAULT_SEISMIC_INCREASE_FACTOR),
            round_by: input.round_by.unwrap_or(DEFAULT_ROUND_BY),
            area_precision: input.area_precision.unwrap_or(seed.area_precision),
            extra: input.extra,
        }
    }

    /// Reject values that would produce meaningless lengths.
    fn validate(&self) -> CalcResult<()> {
        check_positive("fc", self.fc, "Concrete strength must be positive")?;
        check_positive("fy", self.fy, "Yield strength must be positive")?;
        check_positive("roundBy", self.round_by, "Rounding increment must be positive")?;
        check_positive(
            "seismicIncreaseFactor",
            self.seismic_increase_factor,
            "Seismic increase factor must be positive",
        )?;
        if self.area_precision > MAX_AREA_PRECISION {
            return Err(CalcError::invalid_input(
                "areaPrecision",
                self.area_precision.to_string(),
                format!("Area precision cannot exceed {} decimal places", MAX_AREA_PRECISION),
            ));
        }
        if self.rebar_list.is_empty() {
            return Err(CalcError::invalid_input(
                "rebarList",
                "[]",
                "Bar catalog must contain at least one bar",
            ));
        }
        for (i, bar) in self.rebar_list.iter().enumerate() {
            check_positive(
                &format!("rebarList[{}]", i),
                bar.diameter,
                "Bar diameter must be positive",
            )?;
        }
        Ok(())
    }

    pub fn preset(&self) -> PresetName {
        self.preset
    }

    pub fn code_edition(&self) -> CodeEdition {
        self.code_edition
    }

    pub fn is_metric(&self) -> bool {
        self.is_metric
    }

    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_is_metric(self.is_metric)
    }

    /// Unit-dependent code constants in force
    pub fn constants(&self) -> &'static CodeConstants {
        self.unit_system().constants()
    }

    /// Concrete compressive strength f'c (psi or MPa)
    pub fn fc(&self) -> f64 {
        self.fc
    }

    /// Steel yield strength fy (psi or MPa)
    pub fn fy(&self) -> f64 {
        self.fy
    }

    /// Bar catalog in table row order
    pub fn rebar_list(&self) -> &[RebarSize] {
        &self.rebar_list
    }

    pub fn lightweight_concrete(&self) -> bool {
        self.lightweight_concrete
    }

    pub fn epoxy_coated_rebar(&self) -> bool {
        self.epoxy_coated_rebar
    }

    pub fn epoxy_cover_satisfied(&self) -> bool {
        self.epoxy_cover_satisfied
    }

    pub fn hooked_cover_satisfied(&self) -> bool {
        self.hooked_cover_satisfied
    }

    pub fn hooked_confinement_satisfied(&self) -> bool {
        self.hooked_confinement_satisfied
    }

    pub fn compression_confinement_satisfied(&self) -> bool {
        self.compression_confinement_satisfied
    }

    pub fn include_seismic_increase(&self) -> bool {
        self.include_seismic_increase
    }

    pub fn seismic_increase_factor(&self) -> f64 {
        self.seismic_increase_factor
    }

    /// Rounding increment for reported lengths
    pub fn round_by(&self) -> f64 {
        self.round_by
    }

    /// Decimal places kept on reported bar areas
    pub fn area_precision(&self) -> u32 {
        self.area_precision
    }

    /// Unrecognized input fields
    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    /// Names of the detailing conditions that are switched on, for reports
    pub fn active_modifiers(&self) -> Vec<&'static str> {
        let flags = [
            (self.lightweight_concrete, "lightweight concrete"),
            (self.epoxy_coated_rebar, "epoxy-coated"),
            (
                self.epoxy_coated_rebar && self.epoxy_cover_satisfied,
                "epoxy cover satisfied",
            ),
            (self.hooked_cover_satisfied, "hook side cover satisfied"),
            (self.hooked_confinement_satisfied, "hook confinement satisfied"),
            (
                self.compression_confinement_satisfied,
                "compression confinement satisfied",
            ),
            (self.include_seismic_increase, "seismic increase"),
        ];
        flags
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect()
    }
}

fn check_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}
