pub mod errors;
pub mod types;

pub use errors::{Error, RangeViolation, Result, ResultExt};
pub use types::{AnalysisRequest, Experiment, ImpactTier, IndustryBenchmark, Position};
