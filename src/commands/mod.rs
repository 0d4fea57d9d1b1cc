//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: Compare one store against its industry benchmark
//! - **batch**: Evaluate many stores from a JSON file in parallel
//! - **industries** / **tests**: List the reference tables
//! - **init**: Initialize a new `.revleak.toml`
//! - **methodology**: Explain data sources and formulas

pub mod analyze;
pub mod batch;
pub mod init;
pub mod listing;
pub mod methodology;

pub use analyze::{build_request, handle_analyze, AnalyzeConfig};
pub use batch::{evaluate_batch, handle_batch, BatchConfig, BatchOutcome};
pub use init::init_config;
pub use listing::{handle_industries, handle_tests};
pub use methodology::print_methodology;
