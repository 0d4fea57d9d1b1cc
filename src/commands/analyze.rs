use crate::calculator;
use crate::config::RevleakConfig;
use crate::core::{AnalysisRequest, Error};
use crate::data::benchmarks;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub request: AnalysisRequest,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
    pub show_all_tests: bool,
}

/// Fill omitted CLI inputs from config, then from the built-in form defaults.
pub fn build_request(
    industry: Option<String>,
    visitors: Option<u64>,
    conversion_rate: Option<f64>,
    order_value: Option<f64>,
    config: &RevleakConfig,
) -> AnalysisRequest {
    let industry = industry
        .or_else(|| config.default_industry().map(str::to_string))
        .unwrap_or_else(|| benchmarks::default_industry().name.to_string());

    AnalysisRequest {
        industry,
        monthly_visitors: visitors.unwrap_or_else(|| config.monthly_visitors()),
        conversion_rate: conversion_rate.unwrap_or_else(|| config.conversion_rate()),
        average_order_value: order_value.unwrap_or_else(|| config.average_order_value()),
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let report = calculator::analyze(&config.request).map_err(explain_error)?;

    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = create_writer(
        destination,
        config.format,
        config.formatting_config,
        config.show_all_tests,
    );
    writer.write_report(&report)?;

    tracing::info!(
        industry = %config.request.industry,
        position = %report.position,
        primary_gap = report.primary_gap.value,
        "analysis complete"
    );
    Ok(())
}

/// Attach the list of valid industries to an unknown-industry error.
pub fn explain_error(err: Error) -> anyhow::Error {
    if matches!(err, Error::InvalidIndustryKey { .. }) {
        let valid: Vec<_> = benchmarks::names().collect();
        anyhow::anyhow!("{err}. Valid industries: {}", valid.join(", "))
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_build_request_prefers_cli_values() {
        let config = parse_config("[defaults]\nindustry = \"Pet Products\"\n").unwrap();
        let request = build_request(
            Some("Baby & Kids".into()),
            Some(5_000),
            Some(1.2),
            Some(40.0),
            &config,
        );
        assert_eq!(request.industry, "Baby & Kids");
        assert_eq!(request.monthly_visitors, 5_000);
    }

    #[test]
    fn test_build_request_falls_back_to_config_then_defaults() {
        let config = parse_config("[defaults]\nindustry = \"Pet Products\"\n").unwrap();
        let request = build_request(None, None, None, None, &config);
        assert_eq!(request.industry, "Pet Products");
        assert_eq!(request.monthly_visitors, 100_000);
        assert_eq!(request.conversion_rate, 2.5);
        assert_eq!(request.average_order_value, 85.0);

        let request = build_request(None, None, None, None, &RevleakConfig::default());
        assert_eq!(request.industry, "Fashion & Apparel");
    }

    #[test]
    fn test_explain_error_lists_valid_industries() {
        let err = explain_error(Error::invalid_industry("Toys"));
        let message = err.to_string();
        assert!(message.starts_with("Unknown industry 'Toys'"));
        assert!(message.contains("Fashion & Apparel"));
        assert!(message.contains("Baby & Kids"));
    }

    #[test]
    fn test_handle_analyze_writes_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("report.json");
        let config = AnalyzeConfig {
            request: build_request(None, None, None, None, &RevleakConfig::default()),
            format: OutputFormat::Json,
            output: Some(path.clone()),
            formatting_config: FormattingConfig::plain(),
            show_all_tests: false,
        };

        handle_analyze(config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["position"], "below");
    }
}
