//! Output structures for projections

use serde::{Deserialize, Serialize};

/// One simulated year of output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year_index: u32,
    pub nominal_total: f64,
    pub nominal_invested_principal: f64,
    pub benchmark_total: f64,
}

/// Complete projection result, one point per year including year 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub points: Vec<ProjectionPoint>,

    /// Whether reported values are in today's purchasing power
    pub deflated: bool,
}

impl ProjectionResult {
    pub fn new(deflated: bool) -> Self {
        Self {
            points: Vec::new(),
            deflated,
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Get summary statistics for the final point
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();

        let final_total = last.map(|p| p.nominal_total).unwrap_or(0.0);
        let final_invested = last.map(|p| p.nominal_invested_principal).unwrap_or(0.0);
        let final_benchmark = last.map(|p| p.benchmark_total).unwrap_or(0.0);

        ProjectionSummary {
            years: last.map(|p| p.year_index).unwrap_or(0),
            final_total,
            final_invested,
            total_earnings: final_total - final_invested,
            final_benchmark,
            advantage_over_benchmark: final_total - final_benchmark,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_total: f64,
    pub final_invested: f64,
    pub total_earnings: f64,
    pub final_benchmark: f64,
    pub advantage_over_benchmark: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_result() {
        let summary = ProjectionResult::new(false).summary();
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_total, 0.0);
    }

    #[test]
    fn test_summary_uses_last_point() {
        let mut result = ProjectionResult::new(false);
        result.add_point(ProjectionPoint {
            year_index: 0,
            nominal_total: 100.0,
            nominal_invested_principal: 100.0,
            benchmark_total: 100.0,
        });
        result.add_point(ProjectionPoint {
            year_index: 1,
            nominal_total: 250.0,
            nominal_invested_principal: 220.0,
            benchmark_total: 230.0,
        });

        let summary = result.summary();
        assert_eq!(summary.years, 1);
        assert_eq!(summary.total_earnings, 30.0);
        assert_eq!(summary.advantage_over_benchmark, 20.0);
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let point = ProjectionPoint {
            year_index: 2,
            nominal_total: 1.0,
            nominal_invested_principal: 1.0,
            benchmark_total: 1.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"yearIndex\":2"));
        assert!(json.contains("\"nominalInvestedPrincipal\""));
    }
}
