use crate::calculator::{OpportunityReport, TierRecommendations};
use crate::core::{ImpactTier, Position};
use crate::formatting::{
    format_currency, format_monthly, format_thousands, position_badge, scenario_delta_label,
    scenario_title, ColoredFormatter, FormattingConfig, OutputFormatter, PlainFormatter,
};
use clap::ValueEnum;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::io::Write;

const SCENARIO_ORDER: [Position; 3] = [Position::Below, Position::At, Position::Above];

pub const NOT_ADDITIVE_NOTE: &str = "Projected impacts are per test and illustrative. \
They are not additive: do not sum them into a combined forecast.";

pub const NO_OPPORTUNITY_MESSAGE: &str = "You're already performing at the top of your \
industry! Focus on maintaining this performance and testing incrementally.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &OpportunityReport) -> anyhow::Result<()>;
}

pub fn create_writer(
    writer: Box<dyn Write>,
    format: OutputFormat,
    formatting: FormattingConfig,
    show_all_tests: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(writer, formatting).with_all_tests(show_all_tests))
        }
    }
}

/// Table styled for the current terminal capabilities.
pub fn new_table(formatting: &FormattingConfig) -> Table {
    let mut table = Table::new();
    if formatting.emoji.should_use_emoji() {
        table.load_preset(UTF8_FULL);
    } else {
        table.load_preset(ASCII_FULL);
    }
    table
}

fn position_headline(position: Position) -> &'static str {
    match position {
        Position::Below => "You're Below Industry Average",
        Position::At => "You're At Industry Average",
        Position::Above => "You're Above Industry Average!",
    }
}

fn position_detail(report: &OpportunityReport) -> String {
    let current = report.input.conversion_rate;
    let benchmark = report.benchmark.conversion_rate;
    match report.position {
        Position::At => format!(
            "Your conversion rate is {current:.1}%, right at the industry average of {benchmark:.1}%"
        ),
        Position::Below | Position::Above => format!(
            "Your conversion rate is {current:.1}% vs industry average of {benchmark:.1}%"
        ),
    }
}

fn position_encouragement(position: Position) -> Option<&'static str> {
    match position {
        Position::Below => None,
        Position::At => Some("Time to become a top performer!"),
        Position::Above => Some("Great work! But there's still room to grow."),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_position(report)?;
        if report.has_opportunity() {
            self.write_scenarios(report)?;
            self.write_tests(report)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Revenue Opportunity Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Industry:** {}",
            report.benchmark.display_label()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.benchmark.summary())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Monthly Visitors | {} |",
            format_thousands(report.input.monthly_visitors as f64)
        )?;
        writeln!(
            self.writer,
            "| Conversion Rate | {:.1}% |",
            report.input.conversion_rate
        )?;
        writeln!(
            self.writer,
            "| Avg Order Value | {} |",
            format_currency(report.input.average_order_value)
        )?;
        writeln!(
            self.writer,
            "| Current Monthly Revenue | {} |",
            format_currency(report.current_monthly_revenue)
        )?;
        writeln!(
            self.writer,
            "| Annual Revenue | {} |",
            format_currency(report.annual_revenue)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_position(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", position_headline(report.position))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", position_detail(report))?;
        if let Some(line) = position_encouragement(report.position) {
            writeln!(self.writer)?;
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;

        if report.has_opportunity() {
            writeln!(
                self.writer,
                "If you {}: **{}** ({} annually)",
                report.primary_gap.goal.label().to_lowercase(),
                format_monthly(report.primary_gap.value),
                format_currency(report.annual_opportunity)
            )?;
        } else {
            writeln!(self.writer, "{NO_OPPORTUNITY_MESSAGE}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Revenue Scenarios")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Scenario | Conversion Rate | Revenue | Change |")?;
        writeln!(self.writer, "|----------|-----------------|---------|--------|")?;
        for position in SCENARIO_ORDER {
            let scenario = report.scenarios.get(position);
            writeln!(
                self.writer,
                "| {} | {:.1}% | {} | {} |",
                scenario_title(position),
                scenario.conversion_rate,
                format_monthly(scenario.revenue),
                scenario_delta_label(position, report.gaps.get(position))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tests(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Tests Most Likely to Close This Gap")?;
        writeln!(self.writer)?;
        for tier in &report.recommendations {
            writeln!(self.writer, "### {}", tier.title)?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "| Test | Win Rate | Avg Lift | Potential Impact |"
            )?;
            writeln!(
                self.writer,
                "|------|----------|----------|------------------|"
            )?;
            for projection in &tier.tests {
                let test = &projection.experiment;
                writeln!(
                    self.writer,
                    "| {} | {}% | {}% | {}/month |",
                    test.name,
                    test.win_rate,
                    test.average_lift,
                    format_currency(projection.monthly_impact)
                )?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "> {NOT_ADDITIVE_NOTE}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
    show_all_tests: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        let formatter: Box<dyn OutputFormatter> = if formatting.is_plain() {
            Box::new(PlainFormatter)
        } else {
            Box::new(ColoredFormatter::new(formatting))
        };
        Self {
            writer,
            formatting,
            formatter,
            show_all_tests: false,
        }
    }

    /// Expand medium-impact and quick-win tests instead of listing names only.
    pub fn with_all_tests(mut self, show_all_tests: bool) -> Self {
        self.show_all_tests = show_all_tests;
        self
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_revenue(report)?;
        self.write_position(report)?;
        if report.has_opportunity() {
            self.write_scenarios(report)?;
            self.write_tests(report)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{} {}",
            f.emoji("💰", "[$]"),
            f.header("Find My $100K")
        )?;
        writeln!(
            self.writer,
            "{}",
            f.dim("Discover how much revenue you're leaving on the table")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Industry: {}",
            f.bold(&report.benchmark.display_label())
        )?;
        writeln!(self.writer, "{}", f.dim(&report.benchmark.summary()))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_revenue(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{} {}",
            f.emoji("💡", "[IDEA]"),
            f.header("Your Revenue Opportunity")
        )?;
        writeln!(
            self.writer,
            "  Current Monthly Revenue: {}",
            f.bold(&format_currency(report.current_monthly_revenue))
        )?;
        writeln!(
            self.writer,
            "  Annual Revenue:          {}",
            f.bold(&format_currency(report.annual_revenue))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_position(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        let (badge, fallback) = position_badge(report.position);
        let headline = position_headline(report.position);
        let headline = match report.position {
            Position::Below => f.error(headline),
            Position::At => f.warning(headline),
            Position::Above => f.success(headline),
        };
        writeln!(self.writer, "{} {}", f.emoji(badge, fallback), headline)?;
        writeln!(self.writer, "  {}", position_detail(report))?;
        if let Some(line) = position_encouragement(report.position) {
            writeln!(self.writer, "  {line}")?;
        }
        writeln!(self.writer)?;

        if report.has_opportunity() {
            writeln!(
                self.writer,
                "  If you {}:",
                report.primary_gap.goal.label().to_lowercase()
            )?;
            writeln!(
                self.writer,
                "    {}",
                f.bold(&format_monthly(report.primary_gap.value))
            )?;
            writeln!(
                self.writer,
                "    {} annually",
                format_currency(report.annual_opportunity)
            )?;
        } else {
            writeln!(self.writer, "  {}", f.success(NO_OPPORTUNITY_MESSAGE))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{} {}",
            f.emoji("📊", "[STATS]"),
            f.header("Revenue Scenarios")
        )?;

        let mut table = new_table(&self.formatting);
        table.set_header(vec!["Scenario", "Conversion Rate", "Revenue", "Change"]);
        for position in SCENARIO_ORDER {
            let scenario = report.scenarios.get(position);
            table.add_row(vec![
                scenario_title(position).to_string(),
                format!("{:.1}% CR", scenario.conversion_rate),
                format_monthly(scenario.revenue),
                scenario_delta_label(position, report.gaps.get(position)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tests(&mut self, report: &OpportunityReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("🎯", "[TARGET]"),
            self.formatter.header("Tests Most Likely to Close This Gap")
        )?;
        writeln!(
            self.writer,
            "Based on 500+ e-commerce A/B tests, here are the highest-probability wins:"
        )?;
        writeln!(self.writer)?;

        let mut collapsed = Vec::new();
        for tier in &report.recommendations {
            if tier.tier == ImpactTier::High || self.show_all_tests {
                self.write_tier(tier)?;
            } else {
                collapsed.push(tier);
            }
        }

        if !collapsed.is_empty() {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .dim("More test ideas (use --all-tests for projected impact):")
            )?;
            for tier in collapsed {
                let names: Vec<_> = tier.tests.iter().map(|t| t.experiment.name).collect();
                writeln!(self.writer, "  {}: {}", tier.title, names.join("; "))?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", self.formatter.dim(NOT_ADDITIVE_NOTE))?;
        Ok(())
    }

    fn write_tier(&mut self, tier: &TierRecommendations) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.bold(tier.title))?;
        for projection in &tier.tests {
            let test = &projection.experiment;
            writeln!(
                self.writer,
                "  {}  {}",
                f.bold(test.name),
                f.info(&format!("[{}% win rate]", test.win_rate))
            )?;
            writeln!(self.writer, "    {}", f.dim(test.rationale))?;
            // Only the headline tier carries the lift figure.
            let impact = if tier.tier == ImpactTier::High {
                format!(
                    "Potential impact: {}/month ({}% avg lift)",
                    format_currency(projection.monthly_impact),
                    test.average_lift
                )
            } else {
                format!(
                    "Potential: {}/month",
                    format_currency(projection.monthly_impact)
                )
            };
            writeln!(self.writer, "    {}", f.success(&impact))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::analyze;
    use crate::core::AnalysisRequest;

    fn report(cr: f64) -> OpportunityReport {
        analyze(&AnalysisRequest {
            industry: "Fashion & Apparel".to_string(),
            monthly_visitors: 100_000,
            conversion_rate: cr,
            average_order_value: 85.0,
        })
        .unwrap()
    }

    fn render_terminal(report: &OpportunityReport, all: bool) -> String {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, FormattingConfig::plain())
            .with_all_tests(all)
            .write_report(report)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_terminal_report_for_below_average_store() {
        let out = render_terminal(&report(2.5), false);
        assert!(out.contains("[RED] You're Below Industry Average"));
        assert!(out.contains("Your conversion rate is 2.5% vs industry average of 2.8%"));
        assert!(out.contains("If you match industry average:"));
        assert!(out.contains("$25,500/mo"));
        assert!(out.contains("$306,000 annually"));
        assert!(out.contains("Potential impact: $38,250/month (18% avg lift)"));
        assert!(out.contains("Medium-Impact Tests: Optimize mobile checkout flow"));
        assert!(out.contains("not additive"));
    }

    #[test]
    fn test_terminal_report_expands_all_tiers_on_request() {
        let out = render_terminal(&report(2.5), true);
        assert!(out.contains("Quick Wins"));
        // Trust badges: 7% lift
        assert!(out.contains("Potential: $14,875/month"));
        assert!(!out.contains("use --all-tests"));
    }

    #[test]
    fn test_terminal_report_for_top_performer_skips_tests() {
        let out = render_terminal(&report(3.5), false);
        assert!(out.contains("You're Above Industry Average!"));
        assert!(out.contains("already performing at the top"));
        assert!(!out.contains("Revenue Scenarios"));
        assert!(!out.contains("High-Impact Tests"));
    }

    #[test]
    fn test_markdown_report_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_report(&report(2.5))
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("# Revenue Opportunity Report"));
        assert!(out.contains("| Current Monthly Revenue | $212,500 |"));
        assert!(out.contains("| Industry Average | 2.8% | $238,000/mo | +$25,500/mo |"));
        assert!(out.contains("### Quick Wins"));
        assert!(out.contains("| Test checkout button copy | 38% | 5% | $10,625/month |"));
    }

    #[test]
    fn test_json_report_round_trips_key_fields() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&report(2.5)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["position"], "below");
        assert_eq!(value["primary_gap"]["goal"], "Match Industry Average");
        assert_eq!(value["benchmark"]["name"], "Fashion & Apparel");
        assert_eq!(value["recommendations"][2]["tier"], "low");
    }
}
