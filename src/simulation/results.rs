//! Per-month scenario records and the ordered simulation output

use serde::{Deserialize, Serialize};

/// Whether buying in a given month actually needs a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Financing {
    Loan,
    /// Savings already cover the price and closing cost; the negative
    /// "principal" behaves like a surplus annuity
    NoMortgageNeeded,
}

impl Financing {
    pub fn from_principal(principal: f64) -> Self {
        if principal < 0.0 {
            Financing::NoMortgageNeeded
        } else {
            Financing::Loan
        }
    }
}

/// Outcome of buying the house after `purchase_month` months of renting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub purchase_month: u32,

    // Renting phase
    pub total_rent_paid: f64,
    pub total_savings_at_purchase: f64,

    // At purchase
    pub house_price_at_purchase: f64,
    pub closing_cost: f64,
    pub principal_financed: f64,
    pub financing: Financing,

    // Owning phase
    pub monthly_mortgage_payment: f64,
    pub total_mortgage_paid: f64,
    pub monthly_property_tax: f64,
    pub monthly_surplus: f64,

    // At the horizon
    pub remaining_principal_at_horizon: f64,
    pub post_purchase_savings_at_horizon: f64,
    pub net_worth_at_horizon: f64,
}

impl ScenarioResult {
    /// Name and value of every numeric field, in declaration order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("total_rent_paid", self.total_rent_paid),
            ("total_savings_at_purchase", self.total_savings_at_purchase),
            ("house_price_at_purchase", self.house_price_at_purchase),
            ("closing_cost", self.closing_cost),
            ("principal_financed", self.principal_financed),
            ("monthly_mortgage_payment", self.monthly_mortgage_payment),
            ("total_mortgage_paid", self.total_mortgage_paid),
            ("monthly_property_tax", self.monthly_property_tax),
            ("monthly_surplus", self.monthly_surplus),
            ("remaining_principal_at_horizon", self.remaining_principal_at_horizon),
            ("post_purchase_savings_at_horizon", self.post_purchase_savings_at_horizon),
            ("net_worth_at_horizon", self.net_worth_at_horizon),
        ]
    }
}

/// Every candidate purchase month, ordered by month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub horizon_months: u32,

    /// House value at the horizon, before selling costs
    pub house_value_at_horizon: f64,

    /// One entry per purchase month; index equals `purchase_month`
    pub scenarios: Vec<ScenarioResult>,
}

impl SimulationResult {
    pub fn new(horizon_months: u32, house_value_at_horizon: f64) -> Self {
        Self {
            horizon_months,
            house_value_at_horizon,
            scenarios: Vec::with_capacity(horizon_months as usize),
        }
    }

    pub fn add_scenario(&mut self, scenario: ScenarioResult) {
        self.scenarios.push(scenario);
    }

    pub fn get(&self, purchase_month: u32) -> Option<&ScenarioResult> {
        self.scenarios.get(purchase_month as usize)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Highest net worth; ties go to the earliest month
    pub fn best(&self) -> Option<&ScenarioResult> {
        self.scenarios.iter().fold(None, |best, s| match best {
            Some(b) if b.net_worth_at_horizon >= s.net_worth_at_horizon => Some(b),
            _ => Some(s),
        })
    }

    /// Lowest net worth; ties go to the earliest month
    pub fn worst(&self) -> Option<&ScenarioResult> {
        self.scenarios.iter().fold(None, |worst, s| match worst {
            Some(w) if w.net_worth_at_horizon <= s.net_worth_at_horizon => Some(w),
            _ => Some(s),
        })
    }

    pub fn summary(&self) -> Option<SimulationSummary> {
        let best = self.best()?;
        let worst = self.worst()?;
        let no_mortgage_months = self
            .scenarios
            .iter()
            .filter(|s| s.financing == Financing::NoMortgageNeeded)
            .count() as u32;

        Some(SimulationSummary {
            horizon_months: self.horizon_months,
            best_month: best.purchase_month,
            best_net_worth: best.net_worth_at_horizon,
            worst_month: worst.purchase_month,
            worst_net_worth: worst.net_worth_at_horizon,
            no_mortgage_months,
        })
    }
}

/// Best and worst purchase timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub horizon_months: u32,
    pub best_month: u32,
    pub best_net_worth: f64,
    pub worst_month: u32,
    pub worst_net_worth: f64,
    /// Months in which savings already covered the purchase
    pub no_mortgage_months: u32,
}
