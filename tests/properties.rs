//! Property tests for the calculators' numeric contract

use investment_simulator::{
    compare, simulate, solve, ComparisonScenario, Degeneracy, FinancialProduct, GoalParams,
    RateRule, RateSnapshot, SimulationParams,
};
use proptest::prelude::*;

fn rates() -> RateSnapshot {
    RateSnapshot::new(10.65, 6.17, 4.5)
}

proptest! {
    #[test]
    fn prop_positive_rate_growth_is_monotonic(
        initial in 0.0f64..1_000_000.0,
        monthly in 0.0f64..10_000.0,
        years in 0u32..40,
        rate in 0.01f64..30.0,
    ) {
        let params = SimulationParams {
            initial_amount: initial,
            monthly_contribution: monthly,
            years,
            annual_rate_percent: rate,
            deflate_by_inflation: false,
        };
        let points = simulate(&params, &rates()).unwrap();

        prop_assert_eq!(points.len(), years as usize + 1);
        for pair in points.windows(2) {
            prop_assert!(pair[1].nominal_total >= pair[0].nominal_total);
        }
    }

    #[test]
    fn prop_zero_horizon_identity(initial in 0.0f64..1_000_000.0, rate in -20.0f64..30.0) {
        let params = SimulationParams {
            initial_amount: initial,
            monthly_contribution: 250.0,
            years: 0,
            annual_rate_percent: rate,
            deflate_by_inflation: true,
        };
        let points = simulate(&params, &rates()).unwrap();

        prop_assert_eq!(points.len(), 1);
        prop_assert_eq!(points[0].nominal_total, initial);
    }

    #[test]
    fn prop_deflation_neutral_at_year_zero(
        initial in 0.0f64..1_000_000.0,
        monthly in 0.0f64..10_000.0,
        years in 0u32..40,
        inflation in 0.0f64..20.0,
    ) {
        let snapshot = RateSnapshot::new(10.0, 6.0, inflation);
        let base = SimulationParams {
            initial_amount: initial,
            monthly_contribution: monthly,
            years,
            annual_rate_percent: 9.0,
            deflate_by_inflation: false,
        };
        let nominal = simulate(&base, &snapshot).unwrap();
        let real = simulate(&SimulationParams { deflate_by_inflation: true, ..base }, &snapshot).unwrap();

        prop_assert_eq!(real[0], nominal[0]);
    }

    #[test]
    fn prop_zero_rate_solve_is_linear(target in 1.0f64..10_000_000.0, years in 1u32..50) {
        let params = GoalParams { target_amount: target, years, annual_rate_percent: 0.0 };
        let result = solve(&params, &rates()).unwrap();

        prop_assert_eq!(result.monthly_amount, target / (years as f64 * 12.0));
        prop_assert_eq!(result.degeneracy, Some(Degeneracy::ZeroRate));
    }

    #[test]
    fn prop_solver_output_always_finite(
        target in 1.0f64..10_000_000.0,
        years in 0u32..100,
        rate in -50.0f64..50.0,
    ) {
        let params = GoalParams { target_amount: target, years, annual_rate_percent: rate };
        let result = solve(&params, &rates()).unwrap();

        prop_assert!(result.monthly_amount.is_finite());
        prop_assert!(result.monthly_amount >= 0.0);
        prop_assert!(result.total_contributed.is_finite());
        prop_assert!(result.interest_earned.is_finite());
    }

    #[test]
    fn prop_comparison_output_always_finite(
        initial in 0.0f64..1_000_000.0,
        years in 0u32..40,
        benchmark in 0.0f64..30.0,
        percent in 0.0f64..200.0,
    ) {
        let catalog = vec![
            FinancialProduct::new("b", "B", RateRule::BenchmarkMultiple { percent_of_benchmark: percent }, false),
            FinancialProduct::new("f", "F", RateRule::FixedRate { annual_rate_percent: 12.0 }, true),
        ];
        let snapshot = RateSnapshot::new(benchmark, 6.0, 4.5);
        let results = compare(&catalog, &ComparisonScenario { initial_amount: initial, years }, &snapshot).unwrap();

        for r in &results {
            prop_assert!(r.net_terminal_value.is_finite());
            prop_assert!(r.net_profit.is_finite());
            prop_assert!(r.equivalent_to_benchmark_percent.is_finite());
        }
    }
}

#[test]
fn goal_solution_reaches_target_when_projected() {
    let target = 100_000.0;
    let rate = 4.0;
    let years = 10;

    let required = solve(
        &GoalParams { target_amount: target, years, annual_rate_percent: rate },
        &rates(),
    )
    .unwrap();

    let points = simulate(
        &SimulationParams {
            initial_amount: 0.0,
            monthly_contribution: required.monthly_amount,
            years,
            annual_rate_percent: rate,
            deflate_by_inflation: false,
        },
        &rates(),
    )
    .unwrap();

    let final_total = points.last().unwrap().nominal_total;
    assert!(((final_total - target) / target).abs() < 0.005);

    // Deposits land at the start of each month, one period ahead of the annuity formula
    let monthly = rate / 100.0 / 12.0;
    approx::assert_relative_eq!(final_total, target * (1.0 + monthly), max_relative = 1e-9);
}

#[test]
fn zero_benchmark_equivalence_is_zero() {
    let catalog = vec![FinancialProduct::new(
        "pre",
        "Prefixado",
        RateRule::FixedRate { annual_rate_percent: 12.0 },
        false,
    )];
    let snapshot = RateSnapshot::new(0.0, 6.0, 4.5);
    let results = compare(&catalog, &ComparisonScenario { initial_amount: 1000.0, years: 5 }, &snapshot).unwrap();

    assert_eq!(results[0].equivalent_to_benchmark_percent, 0.0);
    assert!(!results[0].is_comparable());
}
