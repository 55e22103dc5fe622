//! Financial product definitions and rate resolution

use crate::rates::RateSnapshot;
use serde::{Deserialize, Serialize};

/// How a product's annual rate is determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateRule {
    /// Rate stands alone (pre-fixed bond)
    FixedRate { annual_rate_percent: f64 },
    /// Rate is a percentage of the benchmark (e.g. 110% of the reference rate)
    BenchmarkMultiple { percent_of_benchmark: f64 },
    /// Computed like a fixed rate, but not guaranteed
    VariableRate { annual_rate_percent: f64 },
}

impl RateRule {
    /// Effective annual rate as a decimal, resolved against the benchmark
    pub fn effective_annual_rate(&self, rates: &RateSnapshot) -> f64 {
        match *self {
            RateRule::FixedRate { annual_rate_percent } => annual_rate_percent / 100.0,
            RateRule::BenchmarkMultiple { percent_of_benchmark } => {
                percent_of_benchmark / 100.0 * rates.benchmark_decimal()
            }
            RateRule::VariableRate { annual_rate_percent } => annual_rate_percent / 100.0,
        }
    }

    /// Whether the quoted rate is contractually guaranteed
    pub fn is_guaranteed(&self) -> bool {
        !matches!(self, RateRule::VariableRate { .. })
    }

    /// Short human-readable description of the rate, e.g. `110% of benchmark`
    pub fn rate_label(&self) -> String {
        match *self {
            RateRule::FixedRate { annual_rate_percent } => format!("{annual_rate_percent}% p.a."),
            RateRule::BenchmarkMultiple { percent_of_benchmark } => {
                format!("{percent_of_benchmark}% of benchmark")
            }
            RateRule::VariableRate { annual_rate_percent } => {
                format!("~{annual_rate_percent}% p.a. (variable)")
            }
        }
    }
}

/// One entry of a product catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProduct {
    /// Opaque identity used by callers to correlate results
    pub id: String,
    pub name: String,
    pub rule: RateRule,
    pub is_tax_exempt: bool,
}

impl FinancialProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rule: RateRule, is_tax_exempt: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rule,
            is_tax_exempt,
        }
    }

    pub fn effective_annual_rate(&self, rates: &RateSnapshot) -> f64 {
        self.rule.effective_annual_rate(rates)
    }
}
