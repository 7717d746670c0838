//! Regression tests pinned to the reference household: 800 house, 60-month
//! horizon, 8/month budget, 2.8 rent rising 4%, 70 saved at 2%, 30-year
//! mortgage at 5%.

use approx::assert_relative_eq;
use proptest::prelude::{prop_assert, proptest};

use rent_or_buy::models::{accumulated_savings, value_after_months, MortgageParameters};
use rent_or_buy::simulation::Financing;
use rent_or_buy::{BalanceFormula, Mortgage, ScenarioConfig, ScenarioError, ScenarioSimulator};

fn reference_config() -> ScenarioConfig {
    ScenarioConfig {
        house_price: 800.0,
        house_growth_rate: 0.0,
        horizon_months: 60,
        monthly_allowance: 8.0,
        initial_rent: 2.8,
        rent_growth_rate: 0.04,
        initial_savings: 70.0,
        savings_rate: 0.02,
        mortgage_rate: 0.05,
        mortgage_term_months: 360,
        closing_cost_fraction: 0.01,
        maintenance_cost: 0.3,
        insurance_cost: 0.1,
        property_tax_rate: 0.01,
        transaction_cost_fraction: 0.15,
        balance_formula: BalanceFormula::Amortizing,
    }
}

#[test]
fn reference_scenario_best_and_worst_month() {
    assert_eq!(reference_config(), ScenarioConfig::default());

    let result = ScenarioSimulator::new(reference_config()).unwrap().simulate().unwrap();
    assert_eq!(result.len(), 60);
    assert_eq!(result.house_value_at_horizon, 800.0);

    let summary = result.summary().unwrap();
    assert_eq!(summary.best_month, 59);
    assert_relative_eq!(summary.best_net_worth, 263.1239821675199, epsilon = 1e-8);
    assert_eq!(summary.worst_month, 0);
    assert_relative_eq!(summary.worst_net_worth, 189.65483417145288, epsilon = 1e-8);
    assert_eq!(summary.no_mortgage_months, 0);
}

#[test]
fn reference_scenario_last_month_details() {
    let result = ScenarioSimulator::new(reference_config()).unwrap().simulate().unwrap();
    let last = result.get(59).unwrap();

    assert_relative_eq!(last.total_rent_paid, 178.71283404800013, epsilon = 1e-8);
    assert_relative_eq!(last.total_savings_at_purchase, 385.9491938597709, epsilon = 1e-8);
    assert_relative_eq!(last.principal_financed, 422.0508061402291, epsilon = 1e-8);
    assert_relative_eq!(last.monthly_mortgage_payment, 2.2656599874577976, epsilon = 1e-9);
    assert_relative_eq!(last.remaining_principal_at_horizon, 421.54369117835563, epsilon = 1e-8);
    assert_relative_eq!(last.post_purchase_savings_at_horizon, 4.667673345875536, epsilon = 1e-9);
    assert_eq!(last.financing, Financing::Loan);
}

#[test]
fn results_are_ordered_by_purchase_month() {
    let result = ScenarioSimulator::new(reference_config()).unwrap().simulate().unwrap();
    for (i, scenario) in result.scenarios.iter().enumerate() {
        assert_eq!(scenario.purchase_month as usize, i);
    }
}

#[test]
fn linear_term_balance_formula_outcome() {
    let config = ScenarioConfig { balance_formula: BalanceFormula::LinearTerm, ..reference_config() };
    let result = ScenarioSimulator::new(config).unwrap().simulate().unwrap();
    let summary = result.summary().unwrap();

    assert_eq!(summary.best_month, 0);
    assert_relative_eq!(summary.best_net_worth, 12738.84455369578, epsilon = 1e-6);
    assert_eq!(summary.worst_month, 59);
    assert_relative_eq!(summary.worst_net_worth, 263.1239821675199, epsilon = 1e-8);
}

#[test]
fn simulation_is_deterministic() {
    let first = ScenarioSimulator::new(reference_config()).unwrap().simulate().unwrap();
    let second = ScenarioSimulator::new(reference_config()).unwrap().simulate().unwrap();
    assert_eq!(first.scenarios, second.scenarios);
}

#[test]
fn total_loss_rate_fails_fast() {
    let config = ScenarioConfig { savings_rate: -1.0, ..reference_config() };
    let err = ScenarioSimulator::new(config).unwrap_err();
    assert_eq!(err, ScenarioError::DomainViolation { parameter: "savings_rate", value: -1.0 });
}

#[test]
fn amortizing_balance_reaches_zero() {
    let mortgage = Mortgage::new(MortgageParameters::new(738.0, 0.05, 360).unwrap(), BalanceFormula::Amortizing);
    assert_relative_eq!(mortgage.remaining_principal(0), 738.0, epsilon = 1e-9);
    assert!(mortgage.remaining_principal(360).abs() < 1e-9);

    let literal = Mortgage::new(MortgageParameters::new(738.0, 0.05, 360).unwrap(), BalanceFormula::LinearTerm);
    assert!(literal.remaining_principal(360).abs() > 1.0);
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(48))]

    #[test]
    fn prop_zero_growth_keeps_value(initial in -1.0e6f64..1.0e6, months in 0u32..600) {
        prop_assert!(value_after_months(initial, 0.0, months) == initial);
    }

    #[test]
    fn prop_whole_year_is_annual_compounding(initial in 0.0f64..1.0e6, rate_bp in -5000i32..5000) {
        let rate = rate_bp as f64 / 10_000.0;
        prop_assert!(value_after_months(initial, rate, 12) == initial * (1.0 + rate));
    }

    #[test]
    fn prop_no_deposits_no_savings(rate_bp in 0u32..2000, months in 0u32..600) {
        prop_assert!(accumulated_savings(0.0, 0.0, rate_bp as f64 / 10_000.0, months) == 0.0);
    }

    #[test]
    fn prop_total_paid_scales_with_payments(
        principal in -1.0e6f64..1.0e6,
        rate_bp in 0u32..1500,
        payments in 1u32..480
    ) {
        let params = MortgageParameters::new(principal, rate_bp as f64 / 10_000.0, payments).unwrap();
        let mortgage = Mortgage::new(params, BalanceFormula::Amortizing);
        prop_assert!(mortgage.total_paid(payments) == mortgage.monthly_payment() * payments as f64);
    }

    #[test]
    fn prop_every_month_is_finite(
        growth_bp in -500i32..1000,
        savings_bp in 0u32..800,
        mortgage_bp in 0u32..1200,
        horizon in 1u32..120
    ) {
        let config = ScenarioConfig {
            house_growth_rate: growth_bp as f64 / 10_000.0,
            savings_rate: savings_bp as f64 / 10_000.0,
            mortgage_rate: mortgage_bp as f64 / 10_000.0,
            horizon_months: horizon,
            ..reference_config()
        };
        let result = ScenarioSimulator::new(config).unwrap().simulate().unwrap();
        prop_assert!(result.len() == horizon as usize);
        prop_assert!(result.scenarios.iter().all(|s| s.net_worth_at_horizon.is_finite()));
    }
}
