use serde::{Deserialize, Serialize};

use crate::io::OutputFormat;

/// Root configuration structure for revleak
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevleakConfig {
    /// Fallback inputs used when a CLI argument is omitted
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub industry: Option<String>,
    pub monthly_visitors: Option<u64>,
    pub conversion_rate: Option<f64>,
    pub average_order_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Expand every test tier in terminal output
    #[serde(default)]
    pub show_all_tests: Option<bool>,
}

// Calculator form defaults.
pub const DEFAULT_MONTHLY_VISITORS: u64 = 100_000;
pub const DEFAULT_CONVERSION_RATE: f64 = 2.5;
pub const DEFAULT_ORDER_VALUE: f64 = 85.0;

impl RevleakConfig {
    pub fn default_industry(&self) -> Option<&str> {
        self.defaults.as_ref()?.industry.as_deref()
    }

    pub fn monthly_visitors(&self) -> u64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.monthly_visitors)
            .unwrap_or(DEFAULT_MONTHLY_VISITORS)
    }

    pub fn conversion_rate(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.conversion_rate)
            .unwrap_or(DEFAULT_CONVERSION_RATE)
    }

    pub fn average_order_value(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|d| d.average_order_value)
            .unwrap_or(DEFAULT_ORDER_VALUE)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn show_all_tests(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_all_tests)
            .unwrap_or(false)
    }
}
