//! Month-by-month rent-versus-buy simulation

mod config;
mod engine;
mod results;

pub use config::ScenarioConfig;
pub use engine::ScenarioSimulator;
pub use results::{Financing, ScenarioResult, SimulationResult, SimulationSummary};
