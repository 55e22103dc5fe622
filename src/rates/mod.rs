//! Reference rates consumed by every calculator
//!
//! The engine never fetches rates itself. Callers hand in an already
//! resolved [`RateSnapshot`]; when their source has nothing to offer they
//! substitute the configured fallback through [`resolve_rates`].

pub mod loader;

pub use loader::{load_snapshot, load_snapshot_from_reader};

use crate::error::Result;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Fallback benchmark (policy/reference) rate, annual percent
pub const DEFAULT_BENCHMARK_ANNUAL_RATE_PERCENT: f64 = 10.65;

/// Fallback savings-account rate, annual percent
pub const DEFAULT_SAVINGS_ANNUAL_RATE_PERCENT: f64 = 6.17;

/// Fallback inflation assumption, annual percent
pub const DEFAULT_INFLATION_ANNUAL_RATE_PERCENT: f64 = 4.5;

/// Market rates in effect for one calculation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub benchmark_annual_rate_percent: f64,
    pub savings_annual_rate_percent: f64,
    pub inflation_annual_rate_percent: f64,
}

impl RateSnapshot {
    pub fn new(benchmark: f64, savings: f64, inflation: f64) -> Self {
        Self {
            benchmark_annual_rate_percent: benchmark,
            savings_annual_rate_percent: savings,
            inflation_annual_rate_percent: inflation,
        }
    }

    /// Check that all three rates are finite, non-negative percentages
    pub fn validate(&self) -> Result<()> {
        validation::non_negative("benchmark_annual_rate_percent", self.benchmark_annual_rate_percent)?;
        validation::non_negative("savings_annual_rate_percent", self.savings_annual_rate_percent)?;
        validation::non_negative("inflation_annual_rate_percent", self.inflation_annual_rate_percent)?;
        Ok(())
    }

    /// Benchmark rate as a decimal (10.65% -> 0.1065)
    pub fn benchmark_decimal(&self) -> f64 {
        self.benchmark_annual_rate_percent / 100.0
    }
}

impl Default for RateSnapshot {
    fn default() -> Self {
        Self::new(
            DEFAULT_BENCHMARK_ANNUAL_RATE_PERCENT,
            DEFAULT_SAVINGS_ANNUAL_RATE_PERCENT,
            DEFAULT_INFLATION_ANNUAL_RATE_PERCENT,
        )
    }
}

/// Something that can supply the latest known rates.
///
/// Freshness and caching are the implementor's business. Returning `None`
/// means no usable snapshot exists.
pub trait RateSource {
    fn snapshot(&self) -> Option<RateSnapshot>;
}

/// A source that always answers with the same snapshot (or nothing)
#[derive(Debug, Clone, Default)]
pub struct StaticRateSource {
    snapshot: Option<RateSnapshot>,
}

impl StaticRateSource {
    pub fn new(snapshot: RateSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn unavailable() -> Self {
        Self { snapshot: None }
    }
}

impl RateSource for StaticRateSource {
    fn snapshot(&self) -> Option<RateSnapshot> {
        self.snapshot
    }
}

/// Ask the source for rates, substituting `fallback` when it has none
pub fn resolve_rates<S: RateSource + ?Sized>(source: &S, fallback: RateSnapshot) -> Result<RateSnapshot> {
    let snapshot = match source.snapshot() {
        Some(snapshot) => snapshot,
        None => {
            log::warn!(
                "rate source returned no snapshot, using fallback benchmark={}% savings={}% inflation={}%",
                fallback.benchmark_annual_rate_percent,
                fallback.savings_annual_rate_percent,
                fallback.inflation_annual_rate_percent
            );
            fallback
        }
    };
    snapshot.validate()?;
    Ok(snapshot)
}
