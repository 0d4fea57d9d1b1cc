//! Property-based tests for the opportunity calculator
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - Scenario gaps are ordered below <= at <= above
//! - Revenue never decreases as visitors, conversion rate or order value grow
//! - Position classification agrees with the 10% band
//! - Evaluation is deterministic

use proptest::prelude::*;
use revleak::{
    analyze, benchmarks, classify_position, compute_current_revenue, compute_gaps,
    compute_scenarios, project_test_impact, select_primary_gap, AnalysisRequest, Goal, Position,
};

fn industry_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(benchmarks::names().collect::<Vec<_>>())
}

fn valid_request() -> impl Strategy<Value = AnalysisRequest> {
    (
        industry_name(),
        1_000u64..=10_000_000,
        0.1f64..=20.0,
        10.0f64..=10_000.0,
    )
        .prop_map(|(industry, visitors, cr, aov)| AnalysisRequest {
            industry: industry.to_string(),
            monthly_visitors: visitors,
            conversion_rate: cr,
            average_order_value: aov,
        })
}

proptest! {
    #[test]
    fn prop_gaps_are_ordered(request in valid_request()) {
        let benchmark = benchmarks::lookup(&request.industry).unwrap();
        let current = compute_current_revenue(
            request.monthly_visitors,
            request.conversion_rate,
            request.average_order_value,
        );
        let scenarios = compute_scenarios(
            request.monthly_visitors,
            benchmark.conversion_rate,
            request.average_order_value,
        );
        let gaps = compute_gaps(&scenarios, current);

        prop_assert!(gaps.below <= gaps.at);
        prop_assert!(gaps.at <= gaps.above);
    }

    #[test]
    fn prop_revenue_is_monotonic_in_conversion_rate(
        visitors in 1_000u64..=10_000_000,
        low in 0.0f64..=10.0,
        delta in 0.0f64..=10.0,
        aov in 10.0f64..=10_000.0,
    ) {
        let a = compute_current_revenue(visitors, low, aov);
        let b = compute_current_revenue(visitors, low + delta, aov);
        prop_assert!(a <= b);
    }

    #[test]
    fn prop_revenue_is_monotonic_in_visitors(
        low in 0u64..=10_000_000,
        delta in 0u64..=10_000_000,
        cr in 0.0f64..=20.0,
        aov in 0.0f64..=10_000.0,
    ) {
        let a = compute_current_revenue(low, cr, aov);
        let b = compute_current_revenue(low + delta, cr, aov);
        prop_assert!(a <= b);
    }

    #[test]
    fn prop_revenue_is_monotonic_in_order_value(
        visitors in 0u64..=10_000_000,
        cr in 0.0f64..=20.0,
        low in 0.0f64..=10_000.0,
        delta in 0.0f64..=10_000.0,
    ) {
        let a = compute_current_revenue(visitors, cr, low);
        let b = compute_current_revenue(visitors, cr, low + delta);
        prop_assert!(a <= b);
    }

    #[test]
    fn prop_position_matches_band(cr in 0.1f64..=20.0, benchmark in 1.0f64..=5.0) {
        let position = classify_position(cr, benchmark);
        let expected = if cr < benchmark * 0.9 {
            Position::Below
        } else if cr > benchmark * 1.1 {
            Position::Above
        } else {
            Position::At
        };
        prop_assert_eq!(position, expected);
    }

    #[test]
    fn prop_primary_gap_positive_unless_maintaining(request in valid_request()) {
        let report = analyze(&request).unwrap();
        match report.position {
            Position::Below | Position::At => prop_assert!(report.primary_gap.value > 0.0),
            Position::Above => {
                let goal = report.primary_gap.goal;
                prop_assert!(goal == Goal::ReachTopPerformer || goal == Goal::MaintainPerformance);
                if goal == Goal::MaintainPerformance {
                    prop_assert!(report.gaps.above <= 0.0);
                }
            }
        }
        prop_assert_eq!(
            report.primary_gap,
            select_primary_gap(report.position, &report.gaps)
        );
    }

    #[test]
    fn prop_analysis_is_deterministic(request in valid_request()) {
        let first = analyze(&request).unwrap();
        let second = analyze(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_test_impact_scales_with_lift(request in valid_request()) {
        let report = analyze(&request).unwrap();
        for tier in &report.recommendations {
            for projection in &tier.tests {
                let expected = project_test_impact(
                    &projection.experiment,
                    request.monthly_visitors,
                    request.conversion_rate,
                    request.average_order_value,
                );
                prop_assert_eq!(projection.monthly_impact, expected);
                prop_assert!(projection.monthly_impact >= 0.0);
            }
        }
    }

    #[test]
    fn prop_out_of_range_rate_is_rejected(
        industry in industry_name(),
        cr in 20.01f64..=1_000.0,
    ) {
        let request = AnalysisRequest {
            industry: industry.to_string(),
            monthly_visitors: 100_000,
            conversion_rate: cr,
            average_order_value: 85.0,
        };
        prop_assert!(analyze(&request).is_err());
    }
}
