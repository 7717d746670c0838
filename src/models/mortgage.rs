//! Fixed-rate, fully amortizing mortgage
//!
//! Monthly payment: `P = L * c(1 + c)^n / ((1 + c)^n - 1)` with `c = rate / 12`.
//!
//! The remaining balance after `k` payments has two forms. The amortizing form
//! `L * ((1 + c)^n - (1 + c)^k) / ((1 + c)^n - 1)` reaches zero after the last
//! payment. The linear-term form is the documented balance formula taken
//! literally, with `(1 + c) * k` in place of `(1 + c)^k`. It keeps the standard
//! payment and denominator, agrees with the amortizing form at `k = 1`, and does
//! not reach zero at `k = n`.

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, Result, ScenarioError};

/// Monthly rates closer to zero than this use the interest-free limit
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Remaining-balance formula used by [`Mortgage::remaining_principal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceFormula {
    /// Standard amortization, `(1 + c)^k` in the numerator
    #[default]
    Amortizing,
    /// Literal form with `(1 + c) * k` in the numerator
    LinearTerm,
}

/// Loan terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageParameters {
    /// Amount financed; negative when savings exceed the price plus costs
    pub principal: f64,
    pub annual_rate: f64,
    pub total_payments: u32,
}

impl MortgageParameters {
    pub fn new(principal: f64, annual_rate: f64, total_payments: u32) -> Result<Self> {
        check_finite("principal", principal)?;
        check_finite("mortgage_rate", annual_rate)?;
        if annual_rate < 0.0 {
            return Err(ScenarioError::NegativeMortgageRate(annual_rate));
        }
        if total_payments == 0 {
            return Err(ScenarioError::InvalidTerm);
        }
        Ok(Self { principal, annual_rate, total_payments })
    }
}

/// A mortgage with its level payment computed up front
#[derive(Debug, Clone)]
pub struct Mortgage {
    params: MortgageParameters,
    balance_formula: BalanceFormula,
    payment: f64,
}

impl Mortgage {
    pub fn new(params: MortgageParameters, balance_formula: BalanceFormula) -> Self {
        let c = params.annual_rate / 12.0;
        let n = params.total_payments;

        let payment = if c.abs() < ZERO_RATE_TOLERANCE {
            params.principal / n as f64
        } else {
            let growth = (1.0 + c).powi(n as i32);
            params.principal * c * growth / (growth - 1.0)
        };

        Self { params, balance_formula, payment }
    }

    pub fn params(&self) -> &MortgageParameters {
        &self.params
    }

    /// Amount financed; negative when no loan is actually needed
    pub fn principal(&self) -> f64 {
        self.params.principal
    }

    pub fn monthly_payment(&self) -> f64 {
        self.payment
    }

    /// Total paid after `k` payments (undiscounted)
    pub fn total_paid(&self, k: u32) -> f64 {
        self.payment * k as f64
    }

    /// Balance outstanding after `k` payments
    pub fn remaining_principal(&self, k: u32) -> f64 {
        let principal = self.params.principal;
        let c = self.params.annual_rate / 12.0;
        let n = self.params.total_payments;

        if c.abs() < ZERO_RATE_TOLERANCE {
            return principal * (1.0 - k as f64 / n as f64);
        }

        let growth_n = (1.0 + c).powi(n as i32);
        let paid_term = match self.balance_formula {
            BalanceFormula::Amortizing => (1.0 + c).powi(k as i32),
            BalanceFormula::LinearTerm => (1.0 + c) * k as f64,
        };
        principal * (growth_n - paid_term) / (growth_n - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn thirty_year(principal: f64, formula: BalanceFormula) -> Mortgage {
        Mortgage::new(MortgageParameters::new(principal, 0.05, 360).unwrap(), formula)
    }

    #[test]
    fn test_standard_payment() {
        // 738k at 5% over 30 years
        let mortgage = thirty_year(738.0, BalanceFormula::Amortizing);
        assert_relative_eq!(mortgage.monthly_payment(), 3.961743577829592, epsilon = 1e-9);

        // $200,000 at 6% over 30 years ≈ $1,199.10
        let mortgage = Mortgage::new(MortgageParameters::new(200_000.0, 0.06, 360).unwrap(), BalanceFormula::Amortizing);
        assert_abs_diff_eq!(mortgage.monthly_payment(), 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_total_paid_is_linear() {
        let mortgage = thirty_year(500.0, BalanceFormula::Amortizing);
        assert_eq!(mortgage.total_paid(0), 0.0);
        assert_eq!(mortgage.total_paid(360), mortgage.monthly_payment() * 360.0);
        assert_eq!(mortgage.total_paid(60), mortgage.monthly_payment() * 60.0);
    }

    #[test]
    fn test_balance_endpoints() {
        let mortgage = thirty_year(738.0, BalanceFormula::Amortizing);
        assert_relative_eq!(mortgage.remaining_principal(0), 738.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mortgage.remaining_principal(360), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_balance_matches_payment_schedule() {
        let mortgage = thirty_year(738.0, BalanceFormula::Amortizing);
        let c = 0.05 / 12.0;
        let balance = (0..60).fold(738.0, |b, _| b * (1.0 + c) - mortgage.monthly_payment());
        assert_relative_eq!(mortgage.remaining_principal(60), balance, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_term_formula_does_not_amortize() {
        let mortgage = thirty_year(738.0, BalanceFormula::LinearTerm);
        assert_relative_eq!(mortgage.remaining_principal(0), 738.0 * 4.467744314006109 / 3.467744314006109, epsilon = 1e-6);
        assert!(mortgage.remaining_principal(360).abs() > 1.0);

        // Both forms agree after a single payment
        let standard = thirty_year(738.0, BalanceFormula::Amortizing);
        assert_relative_eq!(mortgage.remaining_principal(1), standard.remaining_principal(1), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let mortgage = Mortgage::new(MortgageParameters::new(360.0, 0.0, 360).unwrap(), BalanceFormula::Amortizing);
        assert_eq!(mortgage.monthly_payment(), 1.0);
        assert_eq!(mortgage.remaining_principal(0), 360.0);
        assert_eq!(mortgage.remaining_principal(180), 180.0);
        assert_eq!(mortgage.remaining_principal(360), 0.0);
    }

    #[test]
    fn test_negative_principal_mirrors_loan() {
        let loan = thirty_year(100.0, BalanceFormula::Amortizing);
        let surplus = thirty_year(-100.0, BalanceFormula::Amortizing);
        assert_eq!(surplus.monthly_payment(), -loan.monthly_payment());
        assert_eq!(surplus.remaining_principal(12), -loan.remaining_principal(12));
    }

    #[test]
    fn test_invalid_terms() {
        assert_eq!(MortgageParameters::new(100.0, 0.05, 0), Err(ScenarioError::InvalidTerm));
        assert_eq!(
            MortgageParameters::new(100.0, -0.01, 360),
            Err(ScenarioError::NegativeMortgageRate(-0.01))
        );
    }
}
