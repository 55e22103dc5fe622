//! Investment Simulator CLI
//!
//! Command-line interface for projections, goal solving and product comparison

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use investment_simulator::{
    catalog, rates, report, validation, ComparisonScenario, EngineConfig, GoalParams,
    RateSnapshot, ScenarioRunner, SimError, SimulationParams, StaticRateSource,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "invest-sim", version, about = "Compound-interest projections and product comparison")]
struct Cli {
    /// CSV file with `benchmark,savings,inflation` percentages
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// JSON file overriding fallback rates and tax policy
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a balance with monthly contributions
    Simulate {
        #[arg(long, default_value_t = 0.0, value_parser = amount_arg)]
        initial: f64,
        #[arg(long, default_value_t = 0.0, value_parser = amount_arg)]
        monthly: f64,
        #[arg(long, value_parser = years_arg)]
        years: u32,
        /// Annual rate in percent (defaults to the benchmark rate)
        #[arg(long, allow_hyphen_values = true, value_parser = rate_arg)]
        rate: Option<f64>,
        /// Report values in today's money
        #[arg(long)]
        real: bool,
        /// Write the projection to a CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Monthly contribution needed to reach a target
    Solve {
        #[arg(long, value_parser = amount_arg)]
        target: f64,
        #[arg(long, value_parser = years_arg)]
        years: u32,
        /// Annual rate in percent (defaults to the benchmark rate)
        #[arg(long, allow_hyphen_values = true, value_parser = rate_arg)]
        rate: Option<f64>,
    },
    /// Compare catalog products over a fixed horizon
    Compare {
        #[arg(long, default_value_t = 1000.0, value_parser = amount_arg)]
        initial: f64,
        #[arg(long, default_value_t = 5, value_parser = years_arg)]
        years: u32,
        /// CSV catalog (`id,name,kind,rate,tax_exempt`); defaults to the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Write the comparison to a CSV file instead of stdout
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

// Typed text goes through the library's strict parsers, so decimal commas
// are accepted and NaN or garbled input fails before any calculation.
fn amount_arg(input: &str) -> std::result::Result<f64, SimError> {
    validation::parse_amount("amount", input)
}

fn rate_arg(input: &str) -> std::result::Result<f64, SimError> {
    validation::parse_rate("rate", input)
}

fn years_arg(input: &str) -> std::result::Result<u32, SimError> {
    validation::parse_years("years", input)
}

fn build_runner(cli: &Cli) -> Result<ScenarioRunner> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let source = match &cli.rates {
        Some(path) => {
            let snapshot = rates::load_snapshot(path)
                .with_context(|| format!("loading rates from {}", path.display()))?;
            StaticRateSource::new(snapshot)
        }
        None => StaticRateSource::unavailable(),
    };

    Ok(ScenarioRunner::from_source(&source, config)?)
}

fn rates_banner(rates: &RateSnapshot) -> String {
    format!(
        "Rates: benchmark {:.2}%  savings {:.2}%  inflation {:.2}%\n",
        rates.benchmark_annual_rate_percent,
        rates.savings_annual_rate_percent,
        rates.inflation_annual_rate_percent
    )
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = build_runner(&cli)?;
    let benchmark = runner.rates().benchmark_annual_rate_percent;

    match cli.command {
        Command::Simulate { initial, monthly, years, rate, real, csv } => {
            let params = SimulationParams {
                initial_amount: initial,
                monthly_contribution: monthly,
                years,
                annual_rate_percent: rate.unwrap_or(benchmark),
                deflate_by_inflation: real,
            };
            let result = runner.simulate(&params)?;

            if let Some(path) = csv {
                let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                report::write_projection_csv(file, &result.points)?;
                println!("Projection written to: {}", path.display());
                return Ok(());
            }

            println!("{}", rates_banner(runner.rates()));
            println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Total", "Invested", "Savings");
            println!("{}", "-".repeat(55));
            for p in &result.points {
                println!(
                    "{:>4} {:>16.2} {:>16.2} {:>16.2}",
                    p.year_index, p.nominal_total, p.nominal_invested_principal, p.benchmark_total
                );
            }

            let summary = result.summary();
            println!("\nSummary{}:", if result.deflated { " (today's money)" } else { "" });
            println!("  Final total:    {:.2}", summary.final_total);
            println!("  Total earnings: {:.2}", summary.total_earnings);
            println!("  vs savings:     {:+.2}", summary.advantage_over_benchmark);
        }
        Command::Solve { target, years, rate } => {
            let params = GoalParams {
                target_amount: target,
                years,
                annual_rate_percent: rate.unwrap_or(benchmark),
            };
            let result = runner.solve(&params)?;

            println!("Monthly contribution: {:.2}", result.monthly_amount);
            println!("Total contributed:    {:.2}", result.total_contributed);
            println!("Interest earned:      {:.2}", result.interest_earned);
            if let Some(d) = result.degeneracy {
                println!("Note: {}", d);
            }
        }
        Command::Compare { initial, years, catalog: catalog_path, csv } => {
            let runner = match catalog_path {
                Some(path) => {
                    let products = catalog::load_catalog(&path)
                        .with_context(|| format!("loading catalog from {}", path.display()))?;
                    runner.with_catalog(products)
                }
                None => runner,
            };
            let results = runner.compare(&ComparisonScenario { initial_amount: initial, years })?;

            match csv {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                    report::write_comparison_csv(file, runner.catalog(), &results)?;
                    println!("Comparison written to: {}", path.display());
                }
                None => {
                    // Banner on stderr keeps stdout a clean CSV stream
                    eprintln!("{}", rates_banner(runner.rates()));
                    report::write_comparison_csv(io::stdout().lock(), runner.catalog(), &results)?;
                }
            }
        }
    }

    Ok(())
}
