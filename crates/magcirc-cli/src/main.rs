// ─────────────────────────────────────────────────────────────────────
// MagCirc — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `magcirc`: batch and text-form front end for the reluctance calculator.
//!
//! The report goes to stdout; logs go to stderr (`RUST_LOG`, or `-v`).

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use magcirc_core::form::{visible_fields, FormInput};
use magcirc_core::report::{format_rounded, format_sci};
use magcirc_core::sweep::{closest_inductance, sweep_gap_range};
use magcirc_core::{calculate, CircuitResult};
use magcirc_types::config::CoreConfig;
use magcirc_types::params::Topology;

#[derive(Parser, Debug)]
#[command(name = "magcirc")]
#[command(about = "Reluctance, flux and inductance of gapped magnetic cores")]
#[command(version)]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Batch run from a JSON config (built-in defaults when omitted)
    Run {
        /// Path to a JSON core config
        #[arg(short, long)]
        config: Option<String>,

        /// Print full-precision JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Read `key=value` form fields from stdin and run
    Form {
        /// Print full-precision JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List the form fields shown for a topology (1, 2, single_loop, branched)
    Fields { topology: String },

    /// Evaluate the core over a range of gap lengths
    Sweep {
        /// Path to a JSON core config
        #[arg(short, long)]
        config: Option<String>,

        /// First gap [mm]
        #[arg(long, default_value_t = 0.0)]
        from: f64,

        /// Last gap [mm]
        #[arg(long, default_value_t = 1.0)]
        to: f64,

        /// Number of gaps, endpoints included
        #[arg(long, default_value_t = 11)]
        steps: usize,

        /// Report the gap whose inductance is closest to this value [H]
        #[arg(long)]
        target_inductance: Option<f64>,

        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<CoreConfig> {
    match path {
        Some(path) => {
            CoreConfig::from_file(path).with_context(|| format!("loading config {path}"))
        }
        None => {
            debug!("no config given, using built-in defaults");
            Ok(CoreConfig::default())
        }
    }
}

fn evaluate(config: &CoreConfig) -> CircuitResult {
    let params = config.to_parameters();
    debug!(?params, "SI inputs");
    if params.gap_exceeds_limb() {
        warn!(
            gap_m = params.gap_length,
            limb_m = params.geometry.gapped_limb_length(),
            "gap is longer than the limb it is cut from"
        );
    }
    let result = calculate(&params);
    if !result.is_finite() {
        warn!("result contains non-finite values");
    }
    info!(
        topology = %result.topology(),
        reluctance = result.reluctance(),
        inductance = result.inductance(),
        "calculated"
    );
    result
}

fn print_result(result: &CircuitResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn run_sweep(
    config: &CoreConfig,
    from: f64,
    to: f64,
    steps: usize,
    target_inductance: Option<f64>,
    json: bool,
) -> Result<()> {
    let points = sweep_gap_range(config, from, to, steps);
    info!(points = points.len(), from, to, "gap sweep");

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        println!("{:>10}  {:>10}  {:>10}  {:>10}", "g [mm]", "R [1/H]", "L [H]", "mu_e");
        for p in &points {
            println!(
                "{:>10}  {:>10}  {:>10}  {:>10}",
                format_rounded(p.gap_mm),
                format_sci(p.result.reluctance()),
                format_sci(p.result.inductance()),
                format_rounded(p.result.effective_permeability())
            );
        }
    }

    if let Some(target) = target_inductance {
        match closest_inductance(&points, target) {
            Some(best) => println!(
                "Closest to L = {}: g = {} mm (L = {} H)",
                format_sci(target),
                format_rounded(best.gap_mm),
                format_sci(best.result.inductance())
            ),
            None => warn!("no finite sweep point to match the target inductance"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { config, json } => {
            let config = load_config(config.as_deref())?;
            let result = evaluate(&config);
            print_result(&result, json)?;
        }
        Commands::Form { json } => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading form from stdin")?;
            let config = FormInput::from_key_values(&text)?
                .parse()
                .context("invalid form input, nothing calculated")?;
            let result = evaluate(&config);
            print_result(&result, json)?;
        }
        Commands::Fields { topology } => {
            let topology: Topology = topology.parse()?;
            for field in visible_fields(topology) {
                println!("{:<8}{}", field.key(), field.label());
            }
        }
        Commands::Sweep {
            config,
            from,
            to,
            steps,
            target_inductance,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            run_sweep(&config, from, to, steps, target_inductance, json)?;
        }
    }

    Ok(())
}
