//! `industries` and `tests` listings of the reference tables.

use crate::core::{Experiment, ImpactTier};
use crate::data::{benchmarks, catalog};
use crate::formatting::{format_currency, FormattingConfig};
use crate::io::output::new_table;
use crate::io::OutputFormat;
use anyhow::Result;
use std::fmt::Write;

pub fn render_industries(format: OutputFormat, formatting: &FormattingConfig) -> Result<String> {
    let industries = benchmarks::all();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(industries)?),
        OutputFormat::Markdown => {
            let mut out = String::new();
            writeln!(out, "| Industry | Conversion Rate | Avg Order Value | Description |")?;
            writeln!(out, "|----------|-----------------|-----------------|-------------|")?;
            for b in industries {
                writeln!(
                    out,
                    "| {} | {}% | {} | {} |",
                    b.name,
                    b.conversion_rate,
                    format_currency(b.average_order_value),
                    b.description
                )?;
            }
            Ok(out)
        }
        OutputFormat::Terminal => {
            let mut table = new_table(formatting);
            table.set_header(vec![
                "Industry",
                "Conversion Rate",
                "Avg Order Value",
                "Description",
            ]);
            for b in industries {
                table.add_row(vec![
                    b.name.to_string(),
                    format!("{}%", b.conversion_rate),
                    format_currency(b.average_order_value),
                    b.description.to_string(),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

/// Resolve an optional tier filter into the experiments to show.
pub fn select_tests(tier: Option<&str>) -> Result<Vec<&'static Experiment>> {
    match tier {
        Some(name) => Ok(catalog::for_tier(ImpactTier::parse(name)?).iter().collect()),
        None => Ok(catalog::all().collect()),
    }
}

pub fn render_tests(
    tier: Option<&str>,
    format: OutputFormat,
    formatting: &FormattingConfig,
) -> Result<String> {
    let tests = select_tests(tier)?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&tests)?),
        OutputFormat::Markdown => {
            let mut out = String::new();
            writeln!(out, "| Tier | Test | Win Rate | Avg Lift | Why |")?;
            writeln!(out, "|------|------|----------|----------|-----|")?;
            for t in tests {
                writeln!(
                    out,
                    "| {} | {} | {}% | {}% | {} |",
                    t.impact_tier, t.name, t.win_rate, t.average_lift, t.rationale
                )?;
            }
            Ok(out)
        }
        OutputFormat::Terminal => {
            let mut table = new_table(formatting);
            table.set_header(vec!["Tier", "Test", "Win Rate", "Avg Lift", "Why"]);
            for t in tests {
                table.add_row(vec![
                    t.impact_tier.to_string(),
                    t.name.to_string(),
                    format!("{}%", t.win_rate),
                    format!("{}%", t.average_lift),
                    t.rationale.to_string(),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

pub fn handle_industries(format: OutputFormat, formatting: &FormattingConfig) -> Result<()> {
    println!("{}", render_industries(format, formatting)?);
    Ok(())
}

pub fn handle_tests(
    tier: Option<&str>,
    format: OutputFormat,
    formatting: &FormattingConfig,
) -> Result<()> {
    println!("{}", render_tests(tier, format, formatting)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industries_markdown_lists_every_row() {
        let out = render_industries(OutputFormat::Markdown, &FormattingConfig::plain()).unwrap();
        assert_eq!(out.lines().count(), 2 + benchmarks::all().len());
        assert!(out.contains("| Electronics & Gadgets | 2.1% | $180 | Tech accessories, smart home |"));
    }

    #[test]
    fn test_industries_json_is_ordered() {
        let out = render_industries(OutputFormat::Json, &FormattingConfig::plain()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Fashion & Apparel");
        assert_eq!(value[9]["name"], "Baby & Kids");
    }

    #[test]
    fn test_select_tests_by_tier() {
        let quick = select_tests(Some("low")).unwrap();
        assert_eq!(quick.len(), 3);
        assert!(quick.iter().all(|t| t.impact_tier == ImpactTier::Low));
        assert_eq!(select_tests(None).unwrap().len(), 9);
        assert!(select_tests(Some("mega")).is_err());
    }

    #[test]
    fn test_tests_terminal_table_contains_names() {
        let out = render_tests(Some("high"), OutputFormat::Terminal, &FormattingConfig::plain())
            .unwrap();
        assert!(out.contains("Test free shipping threshold"));
        assert!(!out.contains("Test checkout button copy"));
    }
}
