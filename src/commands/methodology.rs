const METHODOLOGY: &str = "\
=== How This Works ===

## Benchmark Data Sources

Industry benchmarks are averages across 10,000+ e-commerce stores, drawn from:
  - IRP Commerce: E-commerce Conversion Rate Benchmarks 2024
  - Growcode: Average Conversion Rates by Industry
  - Littledata: Shopify Conversion Rate Benchmarks
  - Segment: E-commerce Benchmarks Report

## Test Win Rates & Impact

Recommendations draw on 500+ documented A/B tests from CRO agency case
studies, published DTC brand experiments, testing platform data and
industry research.

  Win rate = share of tests that reached significance with a positive lift
  Avg lift = average conversion rate improvement when the test won

## How the Numbers Are Derived

  revenue          = visitors x (conversion rate / 100) x order value
  scenarios        = benchmark rate x 0.8 / 1.0 / 1.2, your order value
  position         = below under 90% of benchmark, above over 110%
  test impact      = current revenue x (avg lift / 100)

Per-test impacts are independent estimates. They are not additive.

## Limitations

  - Benchmarks are averages; your specific niche may vary
  - Test outcomes depend on implementation quality
  - Results assume similar traffic quality to benchmark data
  - Actual performance requires A/B testing, not assumptions

This calculator is for prioritization and opportunity sizing, not
guaranteed outcomes.
";

pub fn methodology_text() -> &'static str {
    METHODOLOGY
}

pub fn print_methodology() {
    println!("{METHODOLOGY}");
}
