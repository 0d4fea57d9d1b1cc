//! Experiment catalog grouped by impact tier.
//!
//! Win rates and lifts come from aggregated CRO case studies. Order inside a
//! tier is display order (most persuasive first).

use crate::core::{Experiment, ImpactTier};

static HIGH_IMPACT: [Experiment; 3] = [
    Experiment {
        name: "Add product videos on PDPs",
        win_rate: 67,
        average_lift: 18.0,
        impact_tier: ImpactTier::High,
        rationale: "Reduces purchase anxiety, shows product in action",
    },
    Experiment {
        name: "Add reviews and ratings (if you don't have them)",
        win_rate: 71,
        average_lift: 22.0,
        impact_tier: ImpactTier::High,
        rationale: "Social proof is the #1 trust driver for online shoppers",
    },
    Experiment {
        name: "Test free shipping threshold",
        win_rate: 58,
        average_lift: 15.0,
        impact_tier: ImpactTier::High,
        rationale: "Reduces cart abandonment, increases AOV",
    },
];

static MEDIUM_IMPACT: [Experiment; 3] = [
    Experiment {
        name: "Optimize mobile checkout flow",
        win_rate: 54,
        average_lift: 12.0,
        impact_tier: ImpactTier::Medium,
        rationale: "Mobile traffic is 70%+ but converts 40% worse",
    },
    Experiment {
        name: "Add urgency messaging (low stock, limited time)",
        win_rate: 49,
        average_lift: 9.0,
        impact_tier: ImpactTier::Medium,
        rationale: "Creates FOMO but can backfire if overused",
    },
    Experiment {
        name: "Improve product photography (more angles, zoom)",
        win_rate: 52,
        average_lift: 11.0,
        impact_tier: ImpactTier::Medium,
        rationale: "Helps customers evaluate product quality",
    },
];

static QUICK_WINS: [Experiment; 3] = [
    Experiment {
        name: "Add trust badges at checkout (security, guarantees)",
        win_rate: 45,
        average_lift: 7.0,
        impact_tier: ImpactTier::Low,
        rationale: "Low effort, reduces payment anxiety",
    },
    Experiment {
        name: "Test checkout button copy",
        win_rate: 38,
        average_lift: 5.0,
        impact_tier: ImpactTier::Low,
        rationale: "Quick test, but rarely high impact",
    },
    Experiment {
        name: "Add exit-intent popup with offer",
        win_rate: 41,
        average_lift: 6.0,
        impact_tier: ImpactTier::Low,
        rationale: "Recovers 2-4% of abandoners",
    },
];

pub fn for_tier(tier: ImpactTier) -> &'static [Experiment] {
    match tier {
        ImpactTier::High => &HIGH_IMPACT,
        ImpactTier::Medium => &MEDIUM_IMPACT,
        ImpactTier::Low => &QUICK_WINS,
    }
}

/// Every experiment, high tier first.
pub fn all() -> impl Iterator<Item = &'static Experiment> {
    ImpactTier::ALL.into_iter().flat_map(for_tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_holds_its_own_records() {
        for tier in ImpactTier::ALL {
            let tests = for_tier(tier);
            assert_eq!(tests.len(), 3);
            assert!(tests.iter().all(|t| t.impact_tier == tier));
        }
    }

    #[test]
    fn test_all_concatenates_in_tier_order() {
        let names: Vec<_> = all().map(|t| t.name).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Add product videos on PDPs");
        assert_eq!(names[3], "Optimize mobile checkout flow");
        assert_eq!(names[8], "Add exit-intent popup with offer");
    }

    #[test]
    fn test_statistics_are_within_bounds() {
        for t in all() {
            assert!(t.win_rate <= 100, "{}", t.name);
            assert!(t.average_lift > 0.0, "{}", t.name);
        }
    }
}
