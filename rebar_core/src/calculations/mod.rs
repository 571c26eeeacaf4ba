//! # Length Calculations
//!
//! Each function implements one length clause of ACI 318-14 Chapter 25 and is
//! a pure function of an [`EvaluationConfig`](crate::config::EvaluationConfig)
//! and the bar diameter (plus placement conditions where the clause needs
//! them). Results are unrounded; rounding is applied by the
//! [`table`](crate::table) builder.
//!
//! ## Available Calculations
//!
//! - [`development`] - Ld (straight tension), Ldh (hooked), Ldc (compression)
//! - [`splice`] - tension and compression lap splice lengths
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::aci_factors::{BarPosition, CoverCondition};
//! use rebar_core::calculations::{development_length, splice_length, SpliceLength};
//! use rebar_core::config::EvaluationConfig;
//!
//! let config = EvaluationConfig::default(); // imperial, f'c = 4000 psi, fy = 60000 psi
//!
//! let ld = development_length(&config, 0.5, BarPosition::Other, CoverCondition::Satisfied);
//! assert_eq!(ld.ceil(), 19.0);
//!
//! // No lap splices for #14 bars
//! let lb = splice_length(&config, 1.693, BarPosition::Other, CoverCondition::Satisfied);
//! assert_eq!(lb, SpliceLength::NotApplicable);
//! ```

pub mod development;
pub mod splice;

pub use development::{
    compression_development_length, development_coefficient, development_length,
    hooked_development_length,
};
pub use splice::{
    compression_splice_coefficient, compression_splice_length, is_splice_permitted,
    splice_length, SpliceLength,
};
