//! Evaluate many stores at once.
//!
//! Each row is decoded and run through the same pure pipeline as `analyze`;
//! rows share only the read-only reference tables, so they are evaluated in
//! parallel without coordination. A row that fails to decode or validate is
//! reported on its own. Output keeps input order.

use crate::calculator::{self, OpportunityReport};
use crate::core::AnalysisRequest;
use crate::formatting::{format_currency, FormattingConfig};
use crate::io::{self, output::new_table, OutputFormat};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub struct BatchConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub jobs: usize,
    pub formatting_config: FormattingConfig,
}

/// Result of one request; exactly one of `report` or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub index: usize,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<OpportunityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Read the batch file as a JSON array; rows are decoded individually later.
pub fn load_requests(path: &Path) -> Result<Vec<Value>> {
    let contents = io::read_file(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid batch file {}", path.display()))
}

pub fn evaluate_batch(rows: &[Value]) -> Vec<BatchOutcome> {
    rows.par_iter()
        .enumerate()
        .map(|(index, row)| evaluate_row(index, row))
        .collect()
}

fn evaluate_row(index: usize, row: &Value) -> BatchOutcome {
    let industry = row
        .get("industry")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let decoded = AnalysisRequest::from_json(row);
    let (report, error) = match decoded.and_then(|request| calculator::analyze(&request)) {
        Ok(report) => (Some(report), None),
        Err(e) => {
            tracing::debug!(index, error = %e, "batch row rejected");
            (None, Some(e.to_string()))
        }
    };

    BatchOutcome {
        index,
        industry,
        report,
        error,
    }
}

pub fn render_outcomes(
    outcomes: &[BatchOutcome],
    format: OutputFormat,
    formatting: &FormattingConfig,
) -> Result<String> {
    let row = |o: &BatchOutcome| -> [String; 6] {
        match (&o.report, &o.error) {
            (Some(r), _) => [
                (o.index + 1).to_string(),
                o.industry.clone(),
                format_currency(r.current_monthly_revenue),
                r.position.to_string(),
                format_currency(r.primary_gap.value),
                r.primary_gap.goal.label().to_string(),
            ],
            (None, error) => [
                (o.index + 1).to_string(),
                o.industry.clone(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                format!("error: {}", error.as_deref().unwrap_or("unknown")),
            ],
        }
    };
    let header = [
        "#",
        "Industry",
        "Current Revenue",
        "Position",
        "Primary Gap",
        "Goal",
    ];

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Markdown => {
            let mut out = String::new();
            writeln!(out, "| {} |", header.join(" | "))?;
            writeln!(out, "|{}", "---|".repeat(header.len()))?;
            for o in outcomes {
                writeln!(out, "| {} |", row(o).join(" | "))?;
            }
            Ok(out)
        }
        OutputFormat::Terminal => {
            let mut table = new_table(formatting);
            table.set_header(header.to_vec());
            for o in outcomes {
                table.add_row(row(o).to_vec());
            }
            Ok(table.to_string())
        }
    }
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let requests = load_requests(&config.input)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    let outcomes = pool.install(|| evaluate_batch(&requests));

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    tracing::info!(
        total = outcomes.len(),
        failed,
        threads = pool.current_num_threads(),
        "batch evaluated"
    );

    let rendered = render_outcomes(&outcomes, config.format, &config.formatting_config)?;
    let mut destination = io::open_destination(config.output.as_deref())?;
    writeln!(destination, "{rendered}")?;

    if failed > 0 {
        eprintln!("{failed} of {} requests were rejected", outcomes.len());
    }
    Ok(())
}
