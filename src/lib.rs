//! Rent or Buy - month-by-month projection of when to buy a house
//!
//! This library provides:
//! - Compound growth, annuity and mortgage amortization formulas
//! - A simulator that evaluates every candidate purchase month over a horizon
//! - Best/worst purchase month selection by net worth at the horizon
//! - Sensitivity sweeps over a base scenario
//! - Text, CSV and JSON reporting

pub mod error;
pub mod models;
pub mod simulation;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{Result, ScenarioError};
pub use models::{BalanceFormula, Mortgage, MortgageParameters};
pub use simulation::{ScenarioConfig, ScenarioResult, ScenarioSimulator, SimulationResult, SimulationSummary};
pub use scenario::ScenarioRunner;
