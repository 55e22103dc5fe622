//! Running totals carried between simulated years

use super::engine::MonthlyRates;

/// Balances at the start of a simulated year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Completed years (0 = initial state)
    pub year_index: u32,

    /// Balance compounding at the simulated rate
    pub total: f64,

    /// Balance compounding at the savings-account rate
    pub benchmark_total: f64,

    /// Initial amount plus contributions made in completed years
    pub invested_principal: f64,
}

impl ProjectionState {
    pub fn initial(initial_amount: f64) -> Self {
        Self {
            year_index: 0,
            total: initial_amount,
            benchmark_total: initial_amount,
            invested_principal: initial_amount,
        }
    }

    /// Apply twelve monthly deposit-then-compound updates to both balances
    pub fn advance_year(&mut self, monthly_contribution: f64, rates: &MonthlyRates) {
        for _month in 0..12 {
            self.total = (self.total + monthly_contribution) * (1.0 + rates.simulated);
            self.benchmark_total = (self.benchmark_total + monthly_contribution) * (1.0 + rates.savings);
        }

        self.invested_principal += monthly_contribution * 12.0;
        self.year_index += 1;
    }
}
