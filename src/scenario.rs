//! Scenario runner shared by every presentation surface
//!
//! Holds one configuration and catalog, resolves rates once, then runs the
//! three calculators against them. Because the calculators are pure, many
//! scenarios can be run in parallel without coordination.

use crate::catalog::{default_catalog, FinancialProduct};
use crate::comparison::{ComparisonResult, ComparisonScenario, ProductComparator};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::goal::{self, GoalParams, RequiredContribution};
use crate::projection::{ProjectionEngine, ProjectionResult, SimulationParams};
use crate::rates::{resolve_rates, RateSnapshot, RateSource};
use rayon::prelude::*;

/// Pre-configured runner for projections, goal solving and comparisons
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_source(&source, EngineConfig::default())?;
///
/// for rate in [8.0, 10.0, 12.0] {
///     let params = SimulationParams { annual_rate_percent: rate, ..base };
///     let result = runner.simulate(&params)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    rates: RateSnapshot,
    config: EngineConfig,
    catalog: Vec<FinancialProduct>,
}

impl ScenarioRunner {
    /// Runner using the configured fallback rates and the default catalog
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            rates: config.fallback_rates,
            config,
            catalog: default_catalog(),
        }
    }

    /// Resolve rates from `source`, falling back to `config.fallback_rates`
    pub fn from_source<S: RateSource + ?Sized>(source: &S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rates = resolve_rates(source, config.fallback_rates)?;
        Ok(Self {
            rates,
            config,
            catalog: default_catalog(),
        })
    }

    /// Runner with explicit rates
    pub fn with_rates(rates: RateSnapshot, config: EngineConfig) -> Result<Self> {
        rates.validate()?;
        config.validate()?;
        Ok(Self {
            rates,
            config,
            catalog: default_catalog(),
        })
    }

    /// Replace the product catalog
    pub fn with_catalog(mut self, catalog: Vec<FinancialProduct>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn rates(&self) -> &RateSnapshot {
        &self.rates
    }

    pub fn catalog(&self) -> &[FinancialProduct] {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a single projection
    pub fn simulate(&self, params: &SimulationParams) -> Result<ProjectionResult> {
        ProjectionEngine::new(self.rates).project(params)
    }

    /// Run many projections in parallel; output order matches input order
    pub fn simulate_batch(&self, params: &[SimulationParams]) -> Vec<Result<ProjectionResult>> {
        let engine = ProjectionEngine::new(self.rates);
        params.par_iter().map(|p| engine.project(p)).collect()
    }

    /// Solve for the monthly contribution reaching a goal
    pub fn solve(&self, params: &GoalParams) -> Result<RequiredContribution> {
        goal::solve(params, &self.rates)
    }

    /// Compare the runner's catalog under one scenario
    pub fn compare(&self, scenario: &ComparisonScenario) -> Result<Vec<ComparisonResult>> {
        ProductComparator::new(self.config.tax).compare(&self.catalog, scenario, &self.rates)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::StaticRateSource;

    fn base_params() -> SimulationParams {
        SimulationParams {
            initial_amount: 10_000.0,
            monthly_contribution: 500.0,
            years: 20,
            annual_rate_percent: 10.0,
            deflate_by_inflation: false,
        }
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();

        let params: Vec<_> = [6.0, 9.0, 12.0]
            .iter()
            .map(|&rate| SimulationParams { annual_rate_percent: rate, ..base_params() })
            .collect();

        let results = runner
            .simulate_batch(&params)
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(results.len(), 3);

        // Higher rate should result in higher final total
        let finals: Vec<_> = results.iter().map(|r| r.summary().final_total).collect();
        assert!(finals[2] > finals[1] && finals[1] > finals[0]);
    }

    #[test]
    fn test_batch_keeps_failures_in_place() {
        let runner = ScenarioRunner::new();
        let params = vec![
            base_params(),
            SimulationParams { initial_amount: -1.0, ..base_params() },
        ];
        let results = runner.simulate_batch(&params);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_from_source_falls_back() {
        let config = EngineConfig::default();
        let runner = ScenarioRunner::from_source(&StaticRateSource::unavailable(), config).unwrap();
        assert_eq!(*runner.rates(), config.fallback_rates);
    }

    #[test]
    fn test_compare_uses_configured_tax() {
        let mut config = EngineConfig::default();
        config.tax.flat_withholding_rate = 0.0;
        let runner = ScenarioRunner::with_rates(RateSnapshot::new(10.0, 6.0, 4.5), config).unwrap();

        let results = runner
            .compare(&ComparisonScenario { initial_amount: 1000.0, years: 3 })
            .unwrap();
        assert!(results.iter().all(|r| r.tax == 0.0));
        assert_eq!(results.len(), runner.catalog().len());
    }

    #[test]
    fn test_solve_through_runner() {
        let runner = ScenarioRunner::new();
        let result = runner
            .solve(&GoalParams { target_amount: 50_000.0, years: 5, annual_rate_percent: 9.0 })
            .unwrap();
        assert!(result.monthly_amount > 0.0 && result.monthly_amount < 50_000.0 / 60.0);
    }
}
