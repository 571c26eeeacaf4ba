//! # rebar-table
//!
//! Prints an ACI 318 development and splice length table for a bar catalog.
//!
//! ```text
//! rebar-table --fc 5000 --lightweight
//! rebar-table --preset softMetric --round-by 25 --json
//! rebar-table --config project.json --seismic -v
//! rebar-table --config project.json --lightweight=false --seismic-factor 1.5
//! ```
//!
//! Values given as flags override those read from `--config`, which in turn
//! override the selected preset.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rebar_core::{CalcError, ConfigInput, EvaluationConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about = "ACI 318 rebar development and splice length tables", long_about = None)]
struct Args {
    /// Bar catalog preset (imperial, softMetric, hardMetric)
    #[clap(long)]
    preset: Option<String>,

    /// Code edition (318-14, 318-11)
    #[clap(long)]
    code_edition: Option<String>,

    /// Concrete compressive strength f'c (psi or MPa)
    #[clap(long)]
    fc: Option<f64>,

    /// Steel yield strength fy (psi or MPa)
    #[clap(long)]
    fy: Option<f64>,

    /// Use metric (318M) constants
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    metric: Option<bool>,

    /// Lightweight concrete
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    lightweight: Option<bool>,

    /// Epoxy-coated bars
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    epoxy: Option<bool>,

    /// Epoxy cover and spacing requirements are satisfied
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    epoxy_cover: Option<bool>,

    /// Side and end cover requirements for hooks are satisfied
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hooked_cover: Option<bool>,

    /// Ties or stirrups enclose hooks
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    hooked_confinement: Option<bool>,

    /// Spirals or ties enclose compression bars
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    compression_confinement: Option<bool>,

    /// Apply the seismic increase to tension lengths
    #[clap(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    seismic: Option<bool>,

    /// Seismic increase multiplier (applied when the increase is enabled)
    #[clap(long)]
    seismic_factor: Option<f64>,

    /// Round lengths up to this increment
    #[clap(long)]
    round_by: Option<f64>,

    /// Decimal places kept on bar areas
    #[clap(long)]
    area_precision: Option<u32>,

    /// JSON configuration bundle
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the table as JSON
    #[clap(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Configuration fields set on the command line.
    ///
    /// Switches only override the bundle when given; `--lightweight=false`
    /// clears a modifier the bundle enables.
    fn overrides(&self) -> ConfigInput {
        ConfigInput {
            preset: self.preset.clone(),
            code_edition: self.code_edition.clone(),
            fc: self.fc,
            fy: self.fy,
            is_metric: self.metric,
            lightweight_concrete: self.lightweight,
            epoxy_coated_rebar: self.epoxy,
            epoxy_cover_satisfied: self.epoxy_cover,
            hooked_cover_satisfied: self.hooked_cover,
            hooked_confinement_satisfied: self.hooked_confinement,
            compression_confinement_satisfied: self.compression_confinement,
            include_seismic_increase: self.seismic,
            seismic_increase_factor: self.seismic_factor,
            round_by: self.round_by,
            area_precision: self.area_precision,
            ..ConfigInput::default()
        }
    }

    /// Read the `--config` bundle (if any) and overlay the flags on it
    fn config_input(&self) -> Result<ConfigInput> {
        let base = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                debug!(path = %path.display(), "loaded config bundle");
                ConfigInput::from_json(&json)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            None => ConfigInput::new(),
        };
        Ok(base.merge(self.overrides()))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<String> {
    let config = EvaluationConfig::resolve(args.config_input()?)?;
    let table = config.generate_table();
    info!(rows = table.len(), preset = %config.preset(), "generated length table");

    if args.json {
        Ok(serde_json::to_string_pretty(&table)?)
    } else {
        Ok(table.format_report())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string(calc_err) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
