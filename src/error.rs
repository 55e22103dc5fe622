//! Error taxonomy for the simulation engine
//!
//! Only recoverable, local conditions live here. Mathematically singular
//! inputs are not errors: they are reported through [`Degeneracy`] markers
//! carried next to a finite fallback value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the public calculators and loaders
#[derive(Error, Debug)]
pub enum SimError {
    /// A negative amount, non-finite number or out-of-range count was supplied
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Raw text input could not be parsed into a finite number
    #[error("cannot parse `{field}` from {input:?}")]
    Parse { field: &'static str, input: String },

    /// No rate snapshot was available and no fallback was supplied
    #[error("rate data unavailable: {0}")]
    MissingRateData(String),

    /// Catalog or snapshot data is structurally wrong
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// A singular case where the formula has no meaningful value and a
/// documented fallback was returned instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// Zero periodic rate: the annuity formula divides by zero
    ZeroRate,
    /// The formula produced NaN, infinity or a negative amount (e.g. zero periods)
    UndefinedResult,
    /// The benchmark earns nothing over the horizon, so no ratio exists
    ZeroBenchmarkReturn,
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Degeneracy::ZeroRate => "zero rate, linear savings used",
            Degeneracy::UndefinedResult => "undefined result replaced by zero",
            Degeneracy::ZeroBenchmarkReturn => "benchmark return is zero, not comparable",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = SimError::InvalidParameter {
            field: "initial_amount",
            value: -5.0,
            reason: "must be non-negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `initial_amount` = -5: must be non-negative"
        );
    }

    #[test]
    fn test_degeneracy_serializes_snake_case() {
        let json = serde_json::to_string(&Degeneracy::ZeroBenchmarkReturn).unwrap();
        assert_eq!(json, "\"zero_benchmark_return\"");
    }
}
