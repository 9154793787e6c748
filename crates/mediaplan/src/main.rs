// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! mediaplan - find the maximum spendable budget for one campaign line item.
//!
//! This is the binary entry point. It resolves configuration, applies
//! command-line overrides, and hands validated inputs to the solver.

mod evaluate;
mod output;
mod solve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use figment::Figment;
use mediaplan_core::PlanError;

/// mediaplan - goal seek for the unknown line item of a campaign budget.
#[derive(Parser, Debug)]
#[command(name = "mediaplan", version, about, long_about = None)]
struct Cli {
    /// Config file merged over ./mediaplan.toml and the XDG lookup.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the budget of the unknown line item that hits the target total.
    Solve(SolveArgs),
    /// Compute the total campaign cost of a complete plan.
    Evaluate(EvaluateArgs),
    /// Print the resolved configuration as TOML.
    Config,
}

/// Fee overrides shared by `solve` and `evaluate`.
#[derive(Args, Debug, Default)]
struct FeeArgs {
    /// Agency fee as a fraction of total spend (Y1).
    #[arg(long, allow_negative_numbers = true)]
    agency_fee_rate: Option<f64>,

    /// Third-party tool fee as a fraction of the fee-subset spend (Y2).
    #[arg(long, allow_negative_numbers = true)]
    tool_fee_rate: Option<f64>,

    /// Fixed agency-hours cost.
    #[arg(long, allow_negative_numbers = true)]
    fixed_cost: Option<f64>,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Target total campaign cost (Z).
    #[arg(long, allow_negative_numbers = true)]
    target: Option<f64>,

    /// Known line-item budgets in layout order, comma separated.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    known: Option<Vec<f64>>,

    #[command(flatten)]
    fees: FeeArgs,

    /// Accepted distance between computed and target total.
    #[arg(long, allow_negative_numbers = true)]
    tolerance: Option<f64>,

    /// First adjustment applied to the unknown item.
    #[arg(long, allow_negative_numbers = true)]
    initial_step: Option<f64>,

    /// Maximum number of candidates to evaluate.
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Every line-item budget, comma separated.
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    items: Vec<f64>,

    #[command(flatten)]
    fees: FeeArgs,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

/// Layer command-line values over the file/env figment.
fn apply_overrides(mut figment: Figment, command: &Commands) -> Figment {
    fn set<T: serde::Serialize>(figment: Figment, key: &str, value: Option<T>) -> Figment {
        match value {
            Some(value) => figment.merge((key, value)),
            None => figment,
        }
    }

    let fees = match command {
        Commands::Solve(args) => {
            figment = set(figment, "campaign.target_total", args.target);
            figment = set(figment, "campaign.known_items", args.known.clone());
            figment = set(figment, "search.tolerance", args.tolerance);
            figment = set(figment, "search.initial_step", args.initial_step);
            figment = set(figment, "search.max_iterations", args.max_iterations);
            &args.fees
        }
        Commands::Evaluate(args) => &args.fees,
        Commands::Config => return figment,
    };

    figment = set(figment, "campaign.agency_fee_rate", fees.agency_fee_rate);
    figment = set(figment, "campaign.tool_fee_rate", fees.tool_fee_rate);
    set(figment, "campaign.fixed_cost", fees.fixed_cost)
}

fn main() {
    let cli = Cli::parse();

    let figment = apply_overrides(
        mediaplan_config::build_figment(cli.config.as_deref()),
        &cli.command,
    );
    let config = match mediaplan_config::extract_and_validate(&figment, cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            mediaplan_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let result: Result<(), PlanError> = match cli.command {
        Commands::Solve(args) => solve::run_solve(&config, args.json),
        Commands::Evaluate(args) => evaluate::run_evaluate(&config, args.items, args.json),
        Commands::Config => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                print!("{rendered}");
                Ok(())
            }
            Err(e) => {
                eprintln!("error: failed to render configuration: {e}");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `log.level`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("mediaplan={},warn", log_level.to_ascii_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
