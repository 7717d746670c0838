//! Console reporting: assumptions, best/worst purchase month, and the
//! per-month schedule as a table, CSV or JSON

use std::io::{self, Write};

use serde::Serialize;

use crate::scenario::SweepPoint;
use crate::simulation::{
    Financing, ScenarioConfig, ScenarioResult, SimulationResult, SimulationSummary,
};

/// Machine-readable report
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub config: &'a ScenarioConfig,
    pub summary: Option<SimulationSummary>,
    pub house_value_at_horizon: f64,
    pub scenarios: &'a [ScenarioResult],
}

impl<'a> Report<'a> {
    pub fn new(config: &'a ScenarioConfig, result: &'a SimulationResult) -> Self {
        Self {
            config,
            summary: result.summary(),
            house_value_at_horizon: result.house_value_at_horizon,
            scenarios: &result.scenarios,
        }
    }
}

/// Describe the configured assumptions in plain sentences
pub fn write_assumptions<W: Write>(out: &mut W, config: &ScenarioConfig) -> io::Result<()> {
    writeln!(
        out,
        "House price: {} growing {:.2}% a year, evaluated after {} months.",
        config.house_price,
        config.house_growth_rate * 100.0,
        config.horizon_months
    )?;
    writeln!(
        out,
        "Monthly housing budget: {}. Current rent {} rising {:.2}% a year. \
         Savings {} earning {:.2}% a year.",
        config.monthly_allowance,
        config.initial_rent,
        config.rent_growth_rate * 100.0,
        config.initial_savings,
        config.savings_rate * 100.0
    )?;
    writeln!(
        out,
        "Mortgage: {} years at {:.2}%, closing cost {:.2}% of today's price.",
        config.mortgage_term_months / 12,
        config.mortgage_rate * 100.0,
        config.closing_cost_fraction * 100.0
    )?;
    writeln!(
        out,
        "Monthly maintenance {} and insurance {}; property tax {:.2}% a year; \
         selling cost {:.2}% of the final house value.",
        config.maintenance_cost,
        config.insurance_cost,
        config.property_tax_rate * 100.0,
        config.transaction_cost_fraction * 100.0
    )?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &SimulationSummary) -> io::Result<()> {
    writeln!(
        out,
        "Best purchase month: {} (net worth {:.2}). Worst purchase month: {} (net worth {:.2}).",
        summary.best_month, summary.best_net_worth, summary.worst_month, summary.worst_net_worth
    )?;
    if summary.no_mortgage_months > 0 {
        writeln!(
            out,
            "In {} of {} months savings already cover the purchase; no mortgage is needed.",
            summary.no_mortgage_months, summary.horizon_months
        )?;
    }
    Ok(())
}

/// Aligned per-month table; `limit` caps the number of rows printed
pub fn write_schedule_table<W: Write>(
    out: &mut W,
    result: &SimulationResult,
    limit: Option<usize>,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>5} {:>10} {:>10} {:>10} {:>10} {:>8} {:>10} {:>10} {:>10} {:>9}",
        "Month", "Rent", "Savings", "Price", "Principal", "Payment", "Balance", "PostSave", "NetWorth", "Loan"
    )?;
    writeln!(out, "{}", "-".repeat(102))?;

    let shown = limit.unwrap_or(result.len()).min(result.len());
    for row in result.scenarios.iter().take(shown) {
        let loan = match row.financing {
            Financing::Loan => "yes",
            Financing::NoMortgageNeeded => "none",
        };
        writeln!(
            out,
            "{:>5} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>8.4} {:>10.2} {:>10.2} {:>10.2} {:>9}",
            row.purchase_month,
            row.total_rent_paid,
            row.total_savings_at_purchase,
            row.house_price_at_purchase,
            row.principal_financed,
            row.monthly_mortgage_payment,
            row.remaining_principal_at_horizon,
            row.post_purchase_savings_at_horizon,
            row.net_worth_at_horizon,
            loan,
        )?;
    }

    if result.len() > shown {
        writeln!(out, "... ({} more months)", result.len() - shown)?;
    }
    Ok(())
}

/// One CSV record per purchase month, with a header row
pub fn write_csv<W: Write>(out: W, result: &SimulationResult) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &result.scenarios {
        writer.serialize(row)?;
    }
    writer.flush()
}

pub fn write_json<W: Write>(out: W, config: &ScenarioConfig, result: &SimulationResult) -> io::Result<()> {
    serde_json::to_writer_pretty(out, &Report::new(config, result))?;
    Ok(())
}

/// Best and worst month for each value of a swept parameter
pub fn write_sweep<W: Write>(out: &mut W, label: &str, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(out, "{:>12} {:>10} {:>12} {:>10} {:>12}", label, "BestMonth", "BestNW", "WorstMonth", "WorstNW")?;
    for point in points {
        writeln!(
            out,
            "{:>12.4} {:>10} {:>12.2} {:>10} {:>12.2}",
            point.value,
            point.summary.best_month,
            point.summary.best_net_worth,
            point.summary.worst_month,
            point.summary.worst_net_worth,
        )?;
    }
    Ok(())
}
