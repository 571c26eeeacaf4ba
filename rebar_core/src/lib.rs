//! # rebar_core - Reinforcing Bar Development and Splice Length Engine
//!
//! `rebar_core` computes ACI 318-14 development and lap splice lengths for a
//! catalog of reinforcing bars under one set of material properties and
//! modification factors. Inputs and outputs are JSON-serializable, so tables
//! can be produced from a stored configuration bundle and handed to other
//! tools unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: A resolved configuration plus a bar diameter fully determines every length
//! - **JSON-First**: Configuration and table types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rebar_core::config::{ConfigInput, EvaluationConfig};
//!
//! let input = ConfigInput::from_json(r#"{ "preset": "imperial", "fc": 5000 }"#).unwrap();
//! let config = EvaluationConfig::resolve(input).unwrap();
//!
//! let table = config.generate_table();
//! assert_eq!(table.rows.len(), 11);
//!
//! let json = serde_json::to_string_pretty(&table).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration bundle, presets merge and validation
//! - [`materials`] - Bar catalogs and named presets
//! - [`aci_factors`] - Modification factors (λ, ψt, ψe, ψc, ψr) and code references
//! - [`calculations`] - Ld, Lb, Ldh, Ldc and Lbc formulas
//! - [`table`] - Rounded length tables and text reports
//! - [`units`] - Unit systems and unit-dependent code constants
//! - [`errors`] - Structured error types

pub mod aci_factors;
pub mod calculations;
pub mod config;
pub mod errors;
pub mod materials;
pub mod table;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::SpliceLength;
pub use config::{CodeEdition, ConfigInput, EvaluationConfig};
pub use errors::{CalcError, CalcResult};
pub use materials::{PresetName, RebarSize};
pub use table::{LengthTable, LengthTableRow};
