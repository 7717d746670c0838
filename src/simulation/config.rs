//! Scenario configuration

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_rate, Result, ScenarioError};
use crate::models::{BalanceFormula, GrowthParameters, RentSavingsParameters};

/// Everything the simulator needs to compare purchase months.
///
/// Amounts share one unit (the reference scenario uses thousands of dollars).
/// Rates and fractions are decimals, e.g. 0.05 for 5%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// House price today
    pub house_price: f64,
    /// Annual house price appreciation
    pub house_growth_rate: f64,
    /// Months over which every purchase month is compared
    pub horizon_months: u32,

    /// Monthly housing budget: rent before purchase, mortgage and upkeep after
    pub monthly_allowance: f64,
    pub initial_rent: f64,
    /// Annual rent increase, applied once a year
    pub rent_growth_rate: f64,
    pub initial_savings: f64,
    /// Annual savings interest, compounded monthly
    pub savings_rate: f64,

    pub mortgage_rate: f64,
    pub mortgage_term_months: u32,
    /// Closing cost as a fraction of today's price, charged whichever month the purchase happens
    pub closing_cost_fraction: f64,

    pub maintenance_cost: f64,
    pub insurance_cost: f64,
    /// Annual property tax as a fraction of the price at purchase
    pub property_tax_rate: f64,
    /// Selling cost as a fraction of the house value at the horizon
    pub transaction_cost_fraction: f64,

    pub balance_formula: BalanceFormula,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            house_price: 800.0,
            house_growth_rate: 0.0,
            horizon_months: 60, // 5 years
            monthly_allowance: 8.0,
            initial_rent: 2.8,
            rent_growth_rate: 0.04,
            initial_savings: 70.0,
            savings_rate: 0.02,
            mortgage_rate: 0.05,
            mortgage_term_months: 360, // 30 years
            closing_cost_fraction: 0.01,
            maintenance_cost: 0.3,
            insurance_cost: 0.1,
            property_tax_rate: 0.01,
            transaction_cost_fraction: 0.15,
            balance_formula: BalanceFormula::Amortizing,
        }
    }
}

impl ScenarioConfig {
    /// Check every parameter, failing on the first one out of range
    pub fn validate(&self) -> Result<()> {
        check_finite("house_price", self.house_price)?;
        check_rate("house_growth_rate", self.house_growth_rate)?;
        check_finite("monthly_allowance", self.monthly_allowance)?;
        check_finite("initial_rent", self.initial_rent)?;
        check_rate("rent_growth_rate", self.rent_growth_rate)?;
        check_finite("initial_savings", self.initial_savings)?;
        check_rate("savings_rate", self.savings_rate)?;
        check_finite("mortgage_rate", self.mortgage_rate)?;
        check_finite("closing_cost_fraction", self.closing_cost_fraction)?;
        check_finite("maintenance_cost", self.maintenance_cost)?;
        check_finite("insurance_cost", self.insurance_cost)?;
        check_finite("property_tax_rate", self.property_tax_rate)?;
        check_finite("transaction_cost_fraction", self.transaction_cost_fraction)?;

        if self.mortgage_rate < 0.0 {
            return Err(ScenarioError::NegativeMortgageRate(self.mortgage_rate));
        }
        if self.horizon_months == 0 {
            return Err(ScenarioError::InvalidHorizon);
        }
        if self.mortgage_term_months == 0 {
            return Err(ScenarioError::InvalidTerm);
        }
        Ok(())
    }

    pub fn house(&self) -> Result<GrowthParameters> {
        GrowthParameters::new(self.house_price, self.house_growth_rate)
    }

    pub fn renter(&self) -> Result<RentSavingsParameters> {
        RentSavingsParameters::new(
            self.initial_rent,
            self.rent_growth_rate,
            self.monthly_allowance,
            self.initial_savings,
            self.savings_rate,
        )
    }

    /// Monthly property tax on a house bought at `price`
    pub fn monthly_property_tax(&self, price: f64) -> f64 {
        self.property_tax_rate * price / 12.0
    }
}
