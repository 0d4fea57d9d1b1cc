//! Opportunity calculator.
//!
//! Every function here is pure: revenue figures are derived from the
//! visitor count, a conversion rate and the order value, and nothing is
//! cached between calls. The one formula used throughout is
//! `visitors * (rate / 100) * order_value`.

pub mod report;
pub mod validation;


use serde::Serialize;

use crate::core::{Experiment, Position};

pub use report::{analyze, OpportunityReport, TestProjection, TierRecommendations};
pub use validation::validate_request;

/// Scenario multiplier applied to the benchmark rate for "below average".
pub const BELOW_SCENARIO_FACTOR: f64 = 0.8;
/// Scenario multiplier applied to the benchmark rate for "top performer".
pub const ABOVE_SCENARIO_FACTOR: f64 = 1.2;

/// Current rates under `benchmark * 0.9` classify as below.
pub const BELOW_BAND_FACTOR: f64 = 0.9;
/// Current rates over `benchmark * 1.1` classify as above.
pub const ABOVE_BAND_FACTOR: f64 = 1.1;

/// Revenue at a given conversion rate (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub conversion_rate: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenarios {
    pub below: Scenario,
    pub at: Scenario,
    pub above: Scenario,
}

impl Scenarios {
    pub fn get(&self, position: Position) -> &Scenario {
        match position {
            Position::Below => &self.below,
            Position::At => &self.at,
            Position::Above => &self.above,
        }
    }
}

/// Scenario revenue minus current revenue. Negative when the user already
/// out-earns the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gaps {
    pub below: f64,
    pub at: f64,
    pub above: f64,
}

impl Gaps {
    pub fn get(&self, position: Position) -> f64 {
        match position {
            Position::Below => self.below,
            Position::At => self.at,
            Position::Above => self.above,
        }
    }
}

/// Goal attached to the headline gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal {
    #[serde(rename = "Match Industry Average")]
    MatchIndustryAverage,
    #[serde(rename = "Reach Top Performer Level")]
    ReachTopPerformer,
    #[serde(rename = "Maintain Performance")]
    MaintainPerformance,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Self::MatchIndustryAverage => "Match Industry Average",
            Self::ReachTopPerformer => "Reach Top Performer Level",
            Self::MaintainPerformance => "Maintain Performance",
        }
    }
}

/// Headline monthly gap and the goal it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimaryGap {
    pub value: f64,
    pub goal: Goal,
}

impl PrimaryGap {
    pub fn annual_value(&self) -> f64 {
        self.value * 12.0
    }

    /// Whether there is any revenue left to win at all.
    pub fn has_opportunity(&self) -> bool {
        self.value > 0.0
    }
}

pub fn compute_current_revenue(visitors: u64, conversion_rate_pct: f64, order_value: f64) -> f64 {
    visitors as f64 * (conversion_rate_pct / 100.0) * order_value
}

/// Revenue at 80%, 100% and 120% of the benchmark rate.
///
/// The order value stays fixed: only conversion improvements are modelled.
pub fn compute_scenarios(visitors: u64, benchmark_cr: f64, order_value: f64) -> Scenarios {
    let scenario = |rate: f64| Scenario {
        conversion_rate: rate,
        revenue: compute_current_revenue(visitors, rate, order_value),
    };

    Scenarios {
        below: scenario(benchmark_cr * BELOW_SCENARIO_FACTOR),
        at: scenario(benchmark_cr),
        above: scenario(benchmark_cr * ABOVE_SCENARIO_FACTOR),
    }
}

pub fn compute_gaps(scenarios: &Scenarios, current_revenue: f64) -> Gaps {
    Gaps {
        below: scenarios.below.revenue - current_revenue,
        at: scenarios.at.revenue - current_revenue,
        above: scenarios.above.revenue - current_revenue,
    }
}

/// Classify with a 10% dead zone around the benchmark.
pub fn classify_position(current_cr: f64, benchmark_cr: f64) -> Position {
    if current_cr < benchmark_cr * BELOW_BAND_FACTOR {
        Position::Below
    } else if current_cr > benchmark_cr * ABOVE_BAND_FACTOR {
        Position::Above
    } else {
        Position::At
    }
}

pub fn select_primary_gap(position: Position, gaps: &Gaps) -> PrimaryGap {
    match position {
        Position::Below => PrimaryGap {
            value: gaps.at,
            goal: Goal::MatchIndustryAverage,
        },
        Position::Above if gaps.above > 0.0 => PrimaryGap {
            value: gaps.above,
            goal: Goal::ReachTopPerformer,
        },
        // Already beating the top-performer scenario.
        Position::Above => PrimaryGap {
            value: gaps.at,
            goal: Goal::MaintainPerformance,
        },
        Position::At => PrimaryGap {
            value: gaps.above,
            goal: Goal::ReachTopPerformer,
        },
    }
}

/// Projected monthly dollars if `test` delivers its average lift.
///
/// Projections are independent per test and must not be summed into a
/// combined forecast.
pub fn project_test_impact(
    test: &Experiment,
    visitors: u64,
    current_cr: f64,
    order_value: f64,
) -> f64 {
    visitors as f64 * (current_cr / 100.0) * (test.average_lift / 100.0) * order_value
}
