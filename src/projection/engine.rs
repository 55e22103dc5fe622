//! Year-by-year projection of a balance with monthly contributions

use super::points::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;
use crate::error::{Result, SimError};
use crate::rates::RateSnapshot;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Longest horizon accepted by the engine, in years
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Inputs for one projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    /// Nominal annual rate in percent; may be negative
    pub annual_rate_percent: f64,
    /// Report values in today's purchasing power
    #[serde(default)]
    pub deflate_by_inflation: bool,
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        validation::non_negative("initial_amount", self.initial_amount)?;
        validation::non_negative("monthly_contribution", self.monthly_contribution)?;
        validation::finite("annual_rate_percent", self.annual_rate_percent)?;
        if self.years > MAX_PROJECTION_YEARS {
            return Err(SimError::InvalidParameter {
                field: "years",
                value: self.years as f64,
                reason: "exceeds the maximum projection horizon",
            });
        }
        Ok(())
    }
}

/// Annual percentages divided evenly across twelve months.
///
/// Simple division of the nominal rate, not a geometric conversion.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyRates {
    pub simulated: f64,
    pub savings: f64,
    pub inflation: f64,
}

impl MonthlyRates {
    pub fn new(annual_rate_percent: f64, rates: &RateSnapshot) -> Self {
        Self {
            simulated: monthly_rate(annual_rate_percent),
            savings: monthly_rate(rates.savings_annual_rate_percent),
            inflation: monthly_rate(rates.inflation_annual_rate_percent),
        }
    }

    /// Divisor that converts a year-`year_index` value into today's money
    pub fn deflator(&self, year_index: u32) -> f64 {
        (1.0 + self.inflation).powi(12 * year_index as i32)
    }
}

/// Convert an annual percentage into a simple monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Projection engine bound to one rate snapshot
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    rates: RateSnapshot,
}

impl ProjectionEngine {
    pub fn new(rates: RateSnapshot) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateSnapshot {
        &self.rates
    }

    /// Run a projection, returning `years + 1` chronological points
    pub fn project(&self, params: &SimulationParams) -> Result<ProjectionResult> {
        params.validate()?;
        self.rates.validate()?;

        let monthly = MonthlyRates::new(params.annual_rate_percent, &self.rates);
        log::debug!(
            "projecting {} years: monthly rate {:.6}, savings {:.6}, inflation {:.6}",
            params.years,
            monthly.simulated,
            monthly.savings,
            monthly.inflation
        );

        let mut result = ProjectionResult::new(params.deflate_by_inflation);
        let mut state = ProjectionState::initial(params.initial_amount);

        for year in 0..=params.years {
            // Emit before advancing so year 0 reports the initial amount
            let point = self.point_for(&state, &monthly, params.deflate_by_inflation);
            if !point_is_finite(&point) {
                return Err(SimError::InvalidParameter {
                    field: "annual_rate_percent",
                    value: params.annual_rate_percent,
                    reason: "projection overflowed to a non-finite value",
                });
            }
            result.add_point(point);

            if year < params.years {
                state.advance_year(params.monthly_contribution, &monthly);
            }
        }

        Ok(result)
    }

    fn point_for(&self, state: &ProjectionState, monthly: &MonthlyRates, deflate: bool) -> ProjectionPoint {
        let divisor = if deflate {
            monthly.deflator(state.year_index)
        } else {
            1.0
        };

        ProjectionPoint {
            year_index: state.year_index,
            nominal_total: state.total / divisor,
            nominal_invested_principal: state.invested_principal / divisor,
            benchmark_total: state.benchmark_total / divisor,
        }
    }
}

fn point_is_finite(point: &ProjectionPoint) -> bool {
    point.nominal_total.is_finite()
        && point.nominal_invested_principal.is_finite()
        && point.benchmark_total.is_finite()
}

/// Simulate a projection and return its yearly points
pub fn simulate(params: &SimulationParams, rates: &RateSnapshot) -> Result<Vec<ProjectionPoint>> {
    ProjectionEngine::new(*rates).project(params).map(|r| r.points)
}
