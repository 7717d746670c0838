//! Compound growth of a lump sum over whole years plus leftover months
//!
//! Whole years compound at the annual rate. Leftover months compound at the
//! equivalent monthly rate `(1 + r)^(1/12) - 1`, so twelve leftover months
//! would land exactly on one year of annual compounding.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, check_rate, Result};

/// Value of `initial` after `months`, compounded annually then monthly.
///
/// The rate is not validated here; callers hold rates above -100%.
pub fn value_after_months(initial: f64, annual_rate: f64, months: u32) -> f64 {
    let years = months / 12;
    let months_left = months % 12;

    let monthly_rate = (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0;
    let after_years = initial * (1.0 + annual_rate).powi(years as i32);
    after_years * (1.0 + monthly_rate).powi(months_left as i32)
}

/// A lump sum growing at a fixed annual rate (house price, savings)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    pub initial_amount: f64,
    pub annual_rate: f64,
}

impl GrowthParameters {
    pub fn new(initial_amount: f64, annual_rate: f64) -> Result<Self> {
        check_finite("initial_amount", initial_amount)?;
        check_rate("annual_rate", annual_rate)?;
        Ok(Self { initial_amount, annual_rate })
    }

    /// Value at month `t` from the start
    pub fn at_month(&self, t: u32) -> f64 {
        value_after_months(self.initial_amount, self.annual_rate, t)
    }
}
