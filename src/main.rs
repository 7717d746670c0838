//! Rent or Buy CLI
//!
//! Command-line interface for finding the best month to buy a house

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rent_or_buy::report::{
    write_assumptions, write_csv, write_json, write_schedule_table, write_summary, write_sweep,
};
use rent_or_buy::{BalanceFormula, ScenarioConfig, ScenarioRunner, ScenarioSimulator};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliBalanceFormula {
    Amortizing,
    LinearTerm,
}

impl From<CliBalanceFormula> for BalanceFormula {
    fn from(value: CliBalanceFormula) -> Self {
        match value {
            CliBalanceFormula::Amortizing => BalanceFormula::Amortizing,
            CliBalanceFormula::LinearTerm => BalanceFormula::LinearTerm,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "rent_or_buy",
    about = "Compare renting and saving against buying with a mortgage, month by month",
    allow_negative_numbers = true
)]
struct Cli {
    #[arg(long, default_value_t = 800.0, help = "House price today")]
    house_price: f64,
    #[arg(long, default_value_t = 0.0, help = "Annual house appreciation, e.g. 0.03")]
    house_growth_rate: f64,
    #[arg(long, default_value_t = 60, help = "Months over which purchase timing is compared")]
    horizon_months: u32,
    #[arg(long, default_value_t = 8.0, help = "Monthly housing budget")]
    monthly_allowance: f64,
    #[arg(long, default_value_t = 2.8)]
    initial_rent: f64,
    #[arg(long, default_value_t = 0.04, help = "Annual rent increase, applied once a year")]
    rent_growth_rate: f64,
    #[arg(long, default_value_t = 70.0)]
    initial_savings: f64,
    #[arg(long, default_value_t = 0.02, help = "Annual savings interest, compounded monthly")]
    savings_rate: f64,
    #[arg(long, default_value_t = 0.05)]
    mortgage_rate: f64,
    #[arg(long, default_value_t = 360)]
    mortgage_term_months: u32,
    #[arg(long, default_value_t = 0.01, help = "Closing cost as a fraction of today's house price")]
    closing_cost_fraction: f64,
    #[arg(long, default_value_t = 0.3, help = "Monthly maintenance cost")]
    maintenance_cost: f64,
    #[arg(long, default_value_t = 0.1, help = "Monthly insurance cost")]
    insurance_cost: f64,
    #[arg(long, default_value_t = 0.01, help = "Annual property tax as a fraction of the purchase price")]
    property_tax_rate: f64,
    #[arg(
        long,
        default_value_t = 0.15,
        help = "Selling cost as a fraction of the house value at the horizon"
    )]
    transaction_cost_fraction: f64,
    #[arg(long, value_enum, default_value_t = CliBalanceFormula::Amortizing)]
    balance_formula: CliBalanceFormula,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, help = "Print the per-month table (text format only)")]
    schedule: bool,
    #[arg(long, help = "Limit the number of rows printed with --schedule")]
    rows: Option<usize>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Also compare these annual house appreciation rates, e.g. 0,0.02,0.04"
    )]
    compare_house_growth: Vec<f64>,
}

impl Cli {
    fn scenario_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            house_price: self.house_price,
            house_growth_rate: self.house_growth_rate,
            horizon_months: self.horizon_months,
            monthly_allowance: self.monthly_allowance,
            initial_rent: self.initial_rent,
            rent_growth_rate: self.rent_growth_rate,
            initial_savings: self.initial_savings,
            savings_rate: self.savings_rate,
            mortgage_rate: self.mortgage_rate,
            mortgage_term_months: self.mortgage_term_months,
            closing_cost_fraction: self.closing_cost_fraction,
            maintenance_cost: self.maintenance_cost,
            insurance_cost: self.insurance_cost,
            property_tax_rate: self.property_tax_rate,
            transaction_cost_fraction: self.transaction_cost_fraction,
            balance_formula: self.balance_formula.into(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.scenario_config();

    let simulator = ScenarioSimulator::new(config.clone()).context("invalid scenario")?;
    let result = simulator.simulate().context("simulation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Csv => write_csv(&mut out, &result)?,
        OutputFormat::Json => {
            write_json(&mut out, &config, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_assumptions(&mut out, &config)?;
            writeln!(out)?;

            if cli.schedule {
                write_schedule_table(&mut out, &result, cli.rows)?;
                writeln!(out)?;
            }

            if let Some(summary) = result.summary() {
                write_summary(&mut out, &summary)?;
            }

            if !cli.compare_house_growth.is_empty() {
                let runner = ScenarioRunner::new(config);
                let points = runner
                    .sweep_house_growth(&cli.compare_house_growth)
                    .context("house growth comparison failed")?;
                writeln!(out)?;
                write_sweep(&mut out, "HouseGrowth", &points)?;
            }
        }
    }

    Ok(())
}
