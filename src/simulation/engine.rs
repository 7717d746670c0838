//! Purchase-month simulation
//!
//! For every candidate month `t` in `[0, horizon)` the renter saves until `t`,
//! buys at the price of month `t` plus a closing cost fixed from today's price,
//! and then pays the mortgage and upkeep out of
//! the same monthly allowance until the horizon. Net worth at the horizon is
//! the house value net of selling costs, minus the loan balance, plus whatever
//! was saved after buying.

use log::{debug, info};

use crate::error::{Result, ScenarioError};
use crate::models::{
    accumulated_savings, GrowthParameters, Mortgage, MortgageParameters, RentSavingsParameters,
};
use super::config::ScenarioConfig;
use super::results::{Financing, ScenarioResult, SimulationResult};

/// Evaluates every purchase month of a scenario
#[derive(Debug, Clone)]
pub struct ScenarioSimulator {
    config: ScenarioConfig,
    house: GrowthParameters,
    renter: RentSavingsParameters,
    /// Charged at purchase whatever the month
    closing_cost: f64,
}

impl ScenarioSimulator {
    /// Validate the configuration and build the simulator
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let house = config.house()?;
        let renter = config.renter()?;
        let closing_cost = config.closing_cost_fraction * house.at_month(0);
        Ok(Self { config, house, renter, closing_cost })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Run every purchase month in order
    pub fn simulate(&self) -> Result<SimulationResult> {
        let horizon = self.config.horizon_months;
        info!("Simulating {} candidate purchase months", horizon);

        let mut result = SimulationResult::new(horizon, self.house.at_month(horizon));
        for t in 0..horizon {
            result.add_scenario(self.evaluate_month(t)?);
        }

        if let Some(summary) = result.summary() {
            info!(
                "Best purchase month {} ({:.2}), worst {} ({:.2})",
                summary.best_month, summary.best_net_worth, summary.worst_month, summary.worst_net_worth
            );
        }
        Ok(result)
    }

    /// Closing cost paid on purchase, a fraction of today's price
    pub fn closing_cost(&self) -> f64 {
        self.closing_cost
    }

    /// Outcome of buying after `t` months of renting; `t` must fall before the horizon
    pub fn evaluate_month(&self, t: u32) -> Result<ScenarioResult> {
        let config = &self.config;
        let horizon = config.horizon_months;
        if t >= horizon {
            return Err(ScenarioError::MonthOutOfRange { month: t, horizon });
        }
        let months_owned = horizon - t;

        // Renting until purchase
        let renting = self.renter.totals_at(t);

        // At purchase
        let price = self.house.at_month(t);
        let closing_cost = self.closing_cost;
        let principal = price - renting.total_savings + closing_cost;
        let financing = Financing::from_principal(principal);
        if financing == Financing::NoMortgageNeeded {
            info!("Month {}: savings exceed price plus closing cost, no mortgage needed", t);
        }

        let mortgage = Mortgage::new(
            MortgageParameters {
                principal,
                annual_rate: config.mortgage_rate,
                total_payments: config.mortgage_term_months,
            },
            config.balance_formula,
        );
        let payment = mortgage.monthly_payment();

        // Owning until the horizon
        let monthly_property_tax = config.monthly_property_tax(price);
        let monthly_surplus = config.monthly_allowance
            - payment
            - config.maintenance_cost
            - config.insurance_cost
            - monthly_property_tax;
        let post_purchase_savings =
            accumulated_savings(0.0, monthly_surplus, config.savings_rate, months_owned);

        let remaining_principal = mortgage.remaining_principal(months_owned);
        let house_value = self.house.at_month(horizon);
        let net_worth = house_value * (1.0 - config.transaction_cost_fraction) - remaining_principal
            + post_purchase_savings;

        let scenario = ScenarioResult {
            purchase_month: t,
            total_rent_paid: renting.total_rent,
            total_savings_at_purchase: renting.total_savings,
            house_price_at_purchase: price,
            closing_cost,
            principal_financed: principal,
            financing,
            monthly_mortgage_payment: payment,
            total_mortgage_paid: mortgage.total_paid(months_owned),
            monthly_property_tax,
            monthly_surplus,
            remaining_principal_at_horizon: remaining_principal,
            post_purchase_savings_at_horizon: post_purchase_savings,
            net_worth_at_horizon: net_worth,
        };

        debug!(
            "Month {}: principal {:.4}, payment {:.4}, net worth {:.4}",
            t, principal, payment, net_worth
        );

        ensure_finite(&scenario)?;
        Ok(scenario)
    }
}

/// Fail on the first NaN or infinite field instead of carrying it forward
fn ensure_finite(scenario: &ScenarioResult) -> Result<()> {
    match scenario.numeric_fields().iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(ScenarioError::NumericDegeneracy {
            month: scenario.purchase_month,
            field: *field,
        }),
        None => Ok(()),
    }
}
