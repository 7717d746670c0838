//! Scenario runner for sensitivity comparisons
//!
//! Holds a base configuration and runs variations of it, e.g. the same
//! household under several house appreciation assumptions.

use crate::error::Result;
use crate::simulation::{ScenarioConfig, ScenarioSimulator, SimulationResult, SimulationSummary};

/// Outcome of one variation in a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Value of the varied parameter
    pub value: f64,
    pub summary: SimulationSummary,
}

/// Runs the simulator for a base configuration and variations of it
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ScenarioConfig::default());
///
/// // Best purchase month under different appreciation rates
/// for point in runner.sweep_house_growth(&[0.0, 0.02, 0.04])? {
///     println!("{}: month {}", point.value, point.summary.best_month);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_config: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(base_config: ScenarioConfig) -> Self {
        Self { base_config }
    }

    /// Run the base configuration
    pub fn run(&self) -> Result<SimulationResult> {
        ScenarioSimulator::new(self.base_config.clone())?.simulate()
    }

    /// Run several complete configurations, stopping at the first error
    pub fn run_scenarios(&self, configs: &[ScenarioConfig]) -> Result<Vec<SimulationResult>> {
        configs
            .iter()
            .map(|config| ScenarioSimulator::new(config.clone())?.simulate())
            .collect()
    }

    /// Run the base configuration once per value, applying each with `apply`
    pub fn sweep<F>(&self, values: &[f64], apply: F) -> Result<Vec<SweepPoint>>
    where
        F: Fn(&mut ScenarioConfig, f64),
    {
        values
            .iter()
            .map(|&value| {
                let mut config = self.base_config.clone();
                apply(&mut config, value);
                let result = ScenarioSimulator::new(config)?.simulate()?;
                Ok(result.summary().map(|summary| SweepPoint { value, summary }))
            })
            .filter_map(|point| point.transpose())
            .collect()
    }

    /// Sweep the annual house appreciation rate
    pub fn sweep_house_growth(&self, rates: &[f64]) -> Result<Vec<SweepPoint>> {
        self.sweep(rates, |config, rate| config.house_growth_rate = rate)
    }

    /// Get reference to base config for inspection
    pub fn config(&self) -> &ScenarioConfig {
        &self.base_config
    }

    /// Get mutable reference to base config for customization
    pub fn config_mut(&mut self) -> &mut ScenarioConfig {
        &mut self.base_config
    }
}
