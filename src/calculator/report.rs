//! Full pipeline: lookup, validate, derive, classify, project.

use serde::Serialize;

use super::{
    classify_position, compute_current_revenue, compute_gaps, compute_scenarios,
    project_test_impact, select_primary_gap, validate_request, Gaps, PrimaryGap, Scenarios,
};
use crate::core::{AnalysisRequest, Experiment, ImpactTier, IndustryBenchmark, Position, Result};
use crate::data::{benchmarks, catalog};

/// Everything the presentation layer needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityReport {
    pub benchmark: IndustryBenchmark,
    pub input: AnalysisRequest,
    pub current_monthly_revenue: f64,
    pub annual_revenue: f64,
    pub scenarios: Scenarios,
    pub gaps: Gaps,
    pub position: Position,
    pub primary_gap: PrimaryGap,
    pub annual_opportunity: f64,
    pub recommendations: Vec<TierRecommendations>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierRecommendations {
    pub tier: ImpactTier,
    pub title: &'static str,
    pub tests: Vec<TestProjection>,
}

/// One experiment with its projected monthly dollar impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestProjection {
    pub experiment: Experiment,
    pub monthly_impact: f64,
}

impl OpportunityReport {
    pub fn has_opportunity(&self) -> bool {
        self.primary_gap.has_opportunity()
    }

    pub fn tier(&self, tier: ImpactTier) -> Option<&TierRecommendations> {
        self.recommendations.iter().find(|r| r.tier == tier)
    }
}

/// Run the whole calculation for one request.
///
/// Either every derived value is produced or the request is rejected
/// before any computation happens.
pub fn analyze(request: &AnalysisRequest) -> Result<OpportunityReport> {
    let benchmark = benchmarks::lookup(&request.industry)?;
    validate_request(request)?;
    Ok(build_report(benchmark, request))
}

fn build_report(benchmark: &IndustryBenchmark, request: &AnalysisRequest) -> OpportunityReport {
    let visitors = request.monthly_visitors;
    let current_cr = request.conversion_rate;
    let aov = request.average_order_value;

    let current = compute_current_revenue(visitors, current_cr, aov);
    let scenarios = compute_scenarios(visitors, benchmark.conversion_rate, aov);
    let gaps = compute_gaps(&scenarios, current);
    let position = classify_position(current_cr, benchmark.conversion_rate);
    let primary_gap = select_primary_gap(position, &gaps);

    tracing::debug!(
        industry = benchmark.name,
        current,
        %position,
        primary = primary_gap.value,
        "derived revenue figures"
    );

    let recommendations = ImpactTier::ALL
        .into_iter()
        .map(|tier| TierRecommendations {
            tier,
            title: tier.title(),
            tests: catalog::for_tier(tier)
                .iter()
                .map(|experiment| TestProjection {
                    experiment: *experiment,
                    monthly_impact: project_test_impact(experiment, visitors, current_cr, aov),
                })
                .collect(),
        })
        .collect();

    OpportunityReport {
        benchmark: *benchmark,
        input: request.clone(),
        current_monthly_revenue: current,
        annual_revenue: current * 12.0,
        scenarios,
        gaps,
        position,
        primary_gap,
        annual_opportunity: primary_gap.annual_value(),
        recommendations,
    }
}
