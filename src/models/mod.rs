//! Stateless financial formulas: compound growth, annuities and mortgages

mod growth;
mod annuity;
mod mortgage;

pub use growth::{value_after_months, GrowthParameters};
pub use annuity::{
    accumulated_savings, rent_and_savings_totals, total_cost_with_annual_increase,
    RentSavingsParameters, RentSavingsTotals,
};
pub use mortgage::{BalanceFormula, Mortgage, MortgageParameters};
