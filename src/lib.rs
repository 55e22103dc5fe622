//! Investment Simulator - compounding projections and product comparison
//!
//! This library provides:
//! - Month-by-month growth projections with optional inflation deflation
//! - Goal seeking for the monthly contribution that reaches a target
//! - Tax-adjusted comparison of fixed-income products against a benchmark
//! - CSV export of every result for reporting
//!
//! All calculators are pure functions of their parameters and a
//! [`RateSnapshot`]; they hold no state between calls.

pub mod error;
pub mod validation;
pub mod rates;
pub mod catalog;
pub mod projection;
pub mod goal;
pub mod comparison;
pub mod config;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Degeneracy, Result, SimError};
pub use rates::{RateSnapshot, RateSource, StaticRateSource};
pub use catalog::{FinancialProduct, RateRule};
pub use projection::{simulate, ProjectionEngine, ProjectionPoint, ProjectionResult, SimulationParams};
pub use goal::{solve, GoalParams, RequiredContribution};
pub use comparison::{compare, ComparisonResult, ComparisonScenario, ProductComparator, TaxPolicy};
pub use config::EngineConfig;
pub use scenario::ScenarioRunner;
