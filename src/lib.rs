// Export modules for library usage
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod data;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    AnalysisRequest, Error, Experiment, ImpactTier, IndustryBenchmark, Position, RangeViolation,
    Result,
};

pub use crate::calculator::{
    analyze, classify_position, compute_current_revenue, compute_gaps, compute_scenarios,
    project_test_impact, select_primary_gap, validate_request, Gaps, Goal, OpportunityReport,
    PrimaryGap, Scenario, Scenarios, TestProjection, TierRecommendations,
};

pub use crate::data::{benchmarks, catalog, lookup};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
