use anyhow::{Context, Result};
use clap::Parser;
use investopt::{
    load_catalog, render_report, AppConfig, CoverageSolver, SolverBackend, SolverFactory,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const EXIT_OPTIMAL: u8 = 0;
const EXIT_NO_OPTIMAL: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "investopt",
    about = "Select the investment options that maximize payback under risk-tiered limits"
)]
struct Cli {
    /// CSV catalog: id, description, cost, payback, risk (header row first)
    catalog: PathBuf,

    /// TOML file with selection thresholds, solver and logging settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Solver backend: auto, highs, highs-lp or coin-cbc
    #[arg(short, long)]
    solver: Option<SolverBackend>,

    /// Override the total budget
    #[arg(long)]
    budget: Option<u64>,

    /// Override the selection threshold for decision values
    #[arg(long)]
    threshold: Option<f64>,

    /// Print every catalog option before solving
    #[arg(long)]
    show_catalog: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is configured from the file, so config errors are reported plainly
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    config.logging.init();

    match run(&cli, config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "run aborted");
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Config file plus command-line overrides, validated
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(budget) = cli.budget {
        config.selection.total_budget = budget;
    }
    if let Some(threshold) = cli.threshold {
        config.selection.selection_threshold = threshold;
    }
    if let Some(backend) = cli.solver {
        config.solver.backend = backend;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(cli: &Cli, config: AppConfig) -> Result<u8> {
    info!("investopt starting");

    let catalog = load_catalog(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    if cli.show_catalog {
        for option in &catalog {
            println!("{option}\n");
        }
    }

    let solver = SolverFactory::create(config.solver.backend)?;
    let result = CoverageSolver::new(config.selection).solve(&catalog, solver.as_ref())?;

    print!("{}", render_report(&result));

    Ok(if result.is_optimal() {
        EXIT_OPTIMAL
    } else {
        EXIT_NO_OPTIMAL
    })
}
