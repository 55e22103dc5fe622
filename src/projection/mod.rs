//! Projection engine for monthly-compounded growth reported yearly

mod state;
mod engine;
mod points;

pub use state::ProjectionState;
pub use engine::{monthly_rate, simulate, MonthlyRates, ProjectionEngine, SimulationParams, MAX_PROJECTION_YEARS};
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary};
