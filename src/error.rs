//! Error types for scenario construction and simulation

use thiserror::Error;

/// Errors raised while validating a scenario or evaluating a purchase month
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    /// A rate at or below -100% breaks the compounding formulas
    #[error("{parameter} must be greater than -100% (got {value})")]
    DomainViolation { parameter: &'static str, value: f64 },

    /// Inputs must be finite numbers
    #[error("{parameter} must be a finite number (got {value})")]
    NonFinite { parameter: &'static str, value: f64 },

    /// Mortgage rate below zero
    #[error("mortgage rate must not be negative (got {0})")]
    NegativeMortgageRate(f64),

    #[error("horizon must be at least one month")]
    InvalidHorizon,

    #[error("mortgage term must be at least one payment")]
    InvalidTerm,

    /// Purchase months run from 0 to one before the horizon
    #[error("purchase month {month} is outside the {horizon}-month horizon")]
    MonthOutOfRange { month: u32, horizon: u32 },

    /// A formula produced NaN or infinity for the given purchase month
    #[error("{field} is not finite for purchase month {month}")]
    NumericDegeneracy { month: u32, field: &'static str },
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Reject rates that would zero out or flip the compounding base.
pub(crate) fn check_rate(parameter: &'static str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value <= -1.0 {
        return Err(ScenarioError::DomainViolation { parameter, value });
    }
    Ok(())
}

pub(crate) fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ScenarioError::NonFinite { parameter, value });
    }
    Ok(())
}
