//! Boundary checks on raw inputs.
//!
//! All violations are collected so the caller sees every bad field at once.
//! Values are never clamped.

use std::ops::RangeInclusive;

use crate::core::{AnalysisRequest, Error, RangeViolation, Result};

pub const MONTHLY_VISITORS_RANGE: RangeInclusive<u64> = 1_000..=10_000_000;
pub const CONVERSION_RATE_RANGE: RangeInclusive<f64> = 0.1..=20.0;
pub const ORDER_VALUE_RANGE: RangeInclusive<f64> = 10.0..=10_000.0;

pub fn validate_request(request: &AnalysisRequest) -> Result<()> {
    let violations = collect_violations(request);
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = violations.len(), "rejecting out-of-range input");
        Err(Error::OutOfRange { violations })
    }
}

pub fn collect_violations(request: &AnalysisRequest) -> Vec<RangeViolation> {
    let visitors = (!MONTHLY_VISITORS_RANGE.contains(&request.monthly_visitors)).then(|| {
        RangeViolation {
            field: "monthly_visitors",
            value: request.monthly_visitors as f64,
            min: *MONTHLY_VISITORS_RANGE.start() as f64,
            max: *MONTHLY_VISITORS_RANGE.end() as f64,
        }
    });

    [
        visitors,
        check_f64(
            "conversion_rate",
            request.conversion_rate,
            &CONVERSION_RATE_RANGE,
        ),
        check_f64(
            "average_order_value",
            request.average_order_value,
            &ORDER_VALUE_RANGE,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// NaN and infinities fail `contains`, so they are reported as violations too.
fn check_f64(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Option<RangeViolation> {
    (!range.contains(&value)).then(|| RangeViolation {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}
