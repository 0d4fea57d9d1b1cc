use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::ColorMode;
pub use crate::io::OutputFormat;

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s)
        .ok_or_else(|| format!("invalid color mode '{s}' (expected auto, always or never)"))
}

#[derive(Parser, Debug)]
#[command(name = "revleak")]
#[command(about = "Find the revenue your store is leaving on the table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .revleak.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colors and emoji
    #[arg(long, global = true)]
    pub plain: bool,

    /// When to use colors: auto, always, never (overrides NO_COLOR/CLICOLOR)
    #[arg(long, global = true, value_parser = parse_color_mode, conflicts_with = "plain")]
    pub color: Option<ColorMode>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare your store against an industry benchmark
    Analyze {
        /// Industry name exactly as listed by `revleak industries`
        #[arg(short, long, env = "REVLEAK_INDUSTRY")]
        industry: Option<String>,

        /// Unique visitors per month (1,000 - 10,000,000)
        #[arg(long)]
        visitors: Option<u64>,

        /// Percentage of visitors who purchase (0.1 - 20.0)
        #[arg(long = "conversion-rate", visible_alias = "cr")]
        conversion_rate: Option<f64>,

        /// Average dollar amount per order (10 - 10,000)
        #[arg(long = "order-value", visible_alias = "aov")]
        order_value: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show projected impact for every test tier, not just high impact
        #[arg(long = "all-tests")]
        all_tests: bool,
    },

    /// List industry benchmarks
    Industries {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// List the experiment catalog
    Tests {
        /// Only show one tier (high, medium, low)
        #[arg(long)]
        tier: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Evaluate many stores from a JSON array of requests
    Batch {
        /// JSON file with `industry`, `monthly_visitors`, `conversion_rate`,
        /// `average_order_value` per entry
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Explain where the benchmarks and win rates come from
    Methodology,
}
