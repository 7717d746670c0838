//! Annuity formulas: rent that steps up once a year, and level monthly deposits
//!
//! Savings compound monthly at `annual_rate / 12`. Rent increases are applied
//! once per elapsed year rather than compounded monthly.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_rate, Result};

/// Monthly rates closer to zero than this use the straight-line limit
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Renting while banking whatever the housing budget leaves over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentSavingsParameters {
    pub initial_rent: f64,
    pub rent_annual_increase: f64,
    pub monthly_allowance: f64,
    pub initial_savings: f64,
    pub savings_annual_rate: f64,
}

/// Cumulative rent paid and savings value after a number of months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentSavingsTotals {
    pub total_rent: f64,
    pub total_savings: f64,
}

impl RentSavingsParameters {
    pub fn new(
        initial_rent: f64,
        rent_annual_increase: f64,
        monthly_allowance: f64,
        initial_savings: f64,
        savings_annual_rate: f64,
    ) -> Result<Self> {
        check_finite("initial_rent", initial_rent)?;
        check_rate("rent_annual_increase", rent_annual_increase)?;
        check_finite("monthly_allowance", monthly_allowance)?;
        check_finite("initial_savings", initial_savings)?;
        check_rate("savings_annual_rate", savings_annual_rate)?;

        let params = Self {
            initial_rent,
            rent_annual_increase,
            monthly_allowance,
            initial_savings,
            savings_annual_rate,
        };
        if params.is_degenerate() {
            warn!(
                "monthly allowance {} does not cover the initial rent {}; savings will shrink",
                monthly_allowance, initial_rent
            );
        }
        Ok(params)
    }

    /// True when the allowance cannot pay the first month's rent
    pub fn is_degenerate(&self) -> bool {
        self.monthly_allowance < self.initial_rent
    }

    /// Rent due in month `i` (0-indexed)
    pub fn rent_in_month(&self, i: u32) -> f64 {
        self.initial_rent * (1.0 + self.rent_annual_increase).powi((i / 12) as i32)
    }

    pub fn totals_at(&self, months: u32) -> RentSavingsTotals {
        rent_and_savings_totals(self, months)
    }
}

/// Rent paid and savings accumulated after `months` of renting.
///
/// Each month's leftover allowance compounds to the horizon for the months
/// remaining after it is deposited; initial savings compound for the whole span.
pub fn rent_and_savings_totals(params: &RentSavingsParameters, months: u32) -> RentSavingsTotals {
    let c = 1.0 + params.savings_annual_rate / 12.0;

    let (total_rent, deposits) = (0..months).fold((0.0, 0.0), |(rent_paid, saved), i| {
        let rent = params.rent_in_month(i);
        let deposit = params.monthly_allowance - rent;
        (rent_paid + rent, saved + deposit * c.powi((months - i) as i32))
    });

    RentSavingsTotals {
        total_rent,
        total_savings: deposits + params.initial_savings * c.powi(months as i32),
    }
}

/// Closed-form total of a monthly payment that rises by `annual_rate` once a year.
///
/// Agrees with the month-by-month rent total of [`rent_and_savings_totals`].
pub fn total_cost_with_annual_increase(initial_payment: f64, annual_rate: f64, months: u32) -> f64 {
    if annual_rate.abs() < ZERO_RATE_TOLERANCE {
        return initial_payment * months as f64;
    }

    let years = months / 12;
    let months_left = months % 12;
    let growth = (1.0 + annual_rate).powi(years as i32);

    let whole_years = initial_payment * 12.0 * (growth - 1.0) / annual_rate;
    let partial_year = initial_payment * growth * months_left as f64;
    whole_years + partial_year
}

/// Savings after `months` of level deposits on top of an opening balance.
///
/// `monthly_deposit` may be negative when costs exceed the allowance.
pub fn accumulated_savings(initial_savings: f64, monthly_deposit: f64, annual_rate: f64, months: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let c = 1.0 + monthly_rate;
    let growth = c.powi(months as i32);

    let from_initial = initial_savings * growth;
    let from_deposits = if monthly_rate.abs() < ZERO_RATE_TOLERANCE {
        monthly_deposit * months as f64
    } else {
        monthly_deposit * (1.0 - growth) / (1.0 - c)
    };
    from_initial + from_deposits
}
