use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Error, Result};

/// Reference conversion rate and order value for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndustryBenchmark {
    pub name: &'static str,
    /// Percent of visitors who purchase
    pub conversion_rate: f64,
    pub average_order_value: f64,
    pub description: &'static str,
}

impl IndustryBenchmark {
    /// Selector label, e.g. `Fashion & Apparel - Clothing, shoes, accessories`
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }

    pub fn summary(&self) -> String {
        format!(
            "Industry benchmark: {}% conversion rate, ${} average order value",
            self.conversion_rate, self.average_order_value
        )
    }
}

/// Qualitative impact grouping of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

impl ImpactTier {
    /// Display order: most persuasive first
    pub const ALL: [ImpactTier; 3] = [ImpactTier::High, ImpactTier::Medium, ImpactTier::Low];

    /// Catalog section key
    pub fn key(self) -> &'static str {
        match self {
            Self::High => "high_impact",
            Self::Medium => "medium_impact",
            Self::Low => "quick_wins",
        }
    }

    /// Section heading
    pub fn title(self) -> &'static str {
        match self {
            Self::High => "High-Impact Tests",
            Self::Medium => "Medium-Impact Tests",
            Self::Low => "Quick Wins",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "high_impact" => Ok(Self::High),
            "medium" | "medium_impact" => Ok(Self::Medium),
            "low" | "quick_wins" => Ok(Self::Low),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

impl fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(name)
    }
}

/// A suggested experiment with static reference statistics.
///
/// `win_rate` and `average_lift` are published reference figures, not
/// results computed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Experiment {
    pub name: &'static str,
    /// Percent of historical runs that won (0-100)
    pub win_rate: u8,
    /// Average conversion-rate lift in percent when the test won
    pub average_lift: f64,
    pub impact_tier: ImpactTier,
    pub rationale: &'static str,
}

/// Where the user's conversion rate sits relative to the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Below,
    At,
    Above,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Below => "below",
            Self::At => "at",
            Self::Above => "above",
        };
        f.write_str(name)
    }
}

/// Raw per-request inputs, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub industry: String,
    pub monthly_visitors: u64,
    /// Percent, e.g. `2.5` for 2.5%
    pub conversion_rate: f64,
    pub average_order_value: f64,
}

impl AnalysisRequest {
    /// Decode one request from an already-parsed JSON value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_accepts_names_and_keys() {
        assert_eq!(ImpactTier::parse("high").unwrap(), ImpactTier::High);
        assert_eq!(ImpactTier::parse("Medium").unwrap(), ImpactTier::Medium);
        assert_eq!(ImpactTier::parse("quick_wins").unwrap(), ImpactTier::Low);
        assert!(matches!(
            ImpactTier::parse("extreme"),
            Err(Error::UnknownTier(_))
        ));
    }

    #[test]
    fn test_tier_keys_and_titles() {
        let keys: Vec<_> = ImpactTier::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec!["high_impact", "medium_impact", "quick_wins"]);
        assert_eq!(ImpactTier::Low.title(), "Quick Wins");
    }

    #[test]
    fn test_position_serializes_lowercase() {
        let json = serde_json::to_string(&Position::Above).unwrap();
        assert_eq!(json, "\"above\"");
    }

    #[test]
    fn test_request_from_json_reports_bad_fields() {
        let value = serde_json::json!({
            "industry": "Pet Products",
            "monthly_visitors": -5,
            "conversion_rate": 3.0,
            "average_order_value": 70.0,
        });
        let err = AnalysisRequest::from_json(&value).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_benchmark_labels() {
        let b = IndustryBenchmark {
            name: "Pet Products",
            conversion_rate: 3.4,
            average_order_value: 70.0,
            description: "Pet food, toys, accessories",
        };
        assert_eq!(b.display_label(), "Pet Products - Pet food, toys, accessories");
        assert_eq!(
            b.summary(),
            "Industry benchmark: 3.4% conversion rate, $70 average order value"
        );
    }
}
