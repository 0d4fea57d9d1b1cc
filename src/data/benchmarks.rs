//! Industry benchmark table (aggregated e-commerce conversion data).

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::{Error, IndustryBenchmark, Result};

static BENCHMARKS: [IndustryBenchmark; 10] = [
    IndustryBenchmark {
        name: "Fashion & Apparel",
        conversion_rate: 2.8,
        average_order_value: 95.0,
        description: "Clothing, shoes, accessories",
    },
    IndustryBenchmark {
        name: "Beauty & Cosmetics",
        conversion_rate: 3.2,
        average_order_value: 75.0,
        description: "Skincare, makeup, personal care",
    },
    IndustryBenchmark {
        name: "Home & Garden",
        conversion_rate: 2.5,
        average_order_value: 120.0,
        description: "Furniture, decor, outdoor",
    },
    IndustryBenchmark {
        name: "Electronics & Gadgets",
        conversion_rate: 2.1,
        average_order_value: 180.0,
        description: "Tech accessories, smart home",
    },
    IndustryBenchmark {
        name: "Health & Wellness",
        conversion_rate: 3.5,
        average_order_value: 85.0,
        description: "Supplements, fitness, wellness",
    },
    IndustryBenchmark {
        name: "Food & Beverage",
        conversion_rate: 3.8,
        average_order_value: 65.0,
        description: "Specialty foods, snacks, drinks",
    },
    IndustryBenchmark {
        name: "Jewelry & Accessories",
        conversion_rate: 2.3,
        average_order_value: 150.0,
        description: "Fine jewelry, watches, luxury accessories",
    },
    IndustryBenchmark {
        name: "Pet Products",
        conversion_rate: 3.4,
        average_order_value: 70.0,
        description: "Pet food, toys, accessories",
    },
    IndustryBenchmark {
        name: "Sports & Outdoors",
        conversion_rate: 2.6,
        average_order_value: 110.0,
        description: "Athletic gear, outdoor equipment",
    },
    IndustryBenchmark {
        name: "Baby & Kids",
        conversion_rate: 2.9,
        average_order_value: 80.0,
        description: "Baby products, kids clothing, toys",
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static IndustryBenchmark>> =
    Lazy::new(|| BENCHMARKS.iter().map(|b| (b.name, b)).collect());

/// All benchmarks in display order.
pub fn all() -> &'static [IndustryBenchmark] {
    &BENCHMARKS
}

pub fn names() -> impl Iterator<Item = &'static str> {
    BENCHMARKS.iter().map(|b| b.name)
}

/// Look up a benchmark by its exact industry name.
///
/// There is no fuzzy matching or fallback: an unknown key is an error.
pub fn lookup(name: &str) -> Result<&'static IndustryBenchmark> {
    let found = INDEX.get(name).copied();
    tracing::debug!(industry = name, found = found.is_some(), "benchmark lookup");
    found.ok_or_else(|| Error::invalid_industry(name))
}

/// Default industry when the caller selects none (first table entry).
pub fn default_industry() -> &'static IndustryBenchmark {
    &BENCHMARKS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_industry() {
        let fashion = lookup("Fashion & Apparel").unwrap();
        assert_eq!(fashion.conversion_rate, 2.8);
        assert_eq!(fashion.average_order_value, 95.0);
        assert_eq!(fashion.description, "Clothing, shoes, accessories");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(matches!(
            lookup("fashion & apparel"),
            Err(Error::InvalidIndustryKey { .. })
        ));
        assert!(lookup("Fashion").is_err());
        assert!(lookup("").is_err());
    }

    #[test]
    fn test_names_are_unique_and_ordered() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names.first(), Some(&"Fashion & Apparel"));
        assert_eq!(names.last(), Some(&"Baby & Kids"));
        assert_eq!(INDEX.len(), names.len());
    }

    #[test]
    fn test_every_benchmark_is_positive() {
        for b in all() {
            assert!(b.conversion_rate > 0.0, "{}", b.name);
            assert!(b.average_order_value > 0.0, "{}", b.name);
        }
    }

    #[test]
    fn test_default_industry_is_first_entry() {
        assert_eq!(default_industry().name, "Fashion & Apparel");
    }
}
