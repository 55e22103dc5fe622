//! Goal seeking: the monthly contribution needed to reach a target
//!
//! Inverts the future value of an annuity with the same simple monthly
//! rate the projection engine uses:
//!
//! `pmt = target * r / ((1 + r)^n - 1)`, with `r = rate / 100 / 12` and `n = years * 12`.

use crate::error::{Degeneracy, Result, SimError};
use crate::projection::{monthly_rate, MAX_PROJECTION_YEARS};
use crate::rates::RateSnapshot;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Monthly decimal rates (`annual_percent / 100 / 12`) closer to zero than
/// this use the linear fallback
const ZERO_RATE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalParams {
    pub target_amount: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
}

impl GoalParams {
    pub fn validate(&self) -> Result<()> {
        validation::positive("target_amount", self.target_amount)?;
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

/// Solver output. `degeneracy` is set whenever a fallback replaced the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredContribution {
    pub monthly_amount: f64,
    /// Sum of all monthly contributions over the horizon
    pub total_contributed: f64,
    /// Portion of the target supplied by interest rather than deposits
    pub interest_earned: f64,
    pub degeneracy: Option<Degeneracy>,
}

impl RequiredContribution {
    fn new(target: f64, periods: u32, monthly_amount: f64, degeneracy: Option<Degeneracy>) -> Self {
        let total_contributed = monthly_amount * periods as f64;
        let interest_earned = if degeneracy == Some(Degeneracy::UndefinedResult) {
            0.0
        } else {
            target - total_contributed
        };

        Self {
            monthly_amount,
            total_contributed,
            interest_earned,
            degeneracy,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.degeneracy.is_some()
    }
}

/// Solve for the fixed monthly contribution that reaches `target_amount`
pub fn solve(params: &GoalParams, rates: &RateSnapshot) -> Result<RequiredContribution> {
    params.validate()?;
    rates.validate()?;

    let r = monthly_rate(params.annual_rate_percent);
    let n = params.years.saturating_mul(12);

    let (raw, degeneracy) = if r.abs() < ZERO_RATE_TOLERANCE {
        log::warn!("zero rate in goal solver, falling back to linear savings");
        (params.target_amount / n as f64, Some(Degeneracy::ZeroRate))
    } else {
        let growth = (1.0 + r).powi(n as i32) - 1.0;
        (params.target_amount * r / growth, None)
    };

    log::debug!("goal solve: r={:.6} n={} raw={}", r, n, raw);

    if !raw.is_finite() || raw < 0.0 {
        log::warn!(
            "goal solver produced an undefined amount for years={} rate={}%, returning zero",
            params.years,
            params.annual_rate_percent
        );
        return Ok(RequiredContribution::new(
            params.target_amount,
            n,
            0.0,
            Some(Degeneracy::UndefinedResult),
        ));
    }

    Ok(RequiredContribution::new(params.target_amount, n, raw, degeneracy))
}
