//! Daily KPI series tests.

use chrono::NaiveDate;
use kuliner_core::timeseries_generator::{
    generate_series, CAC_RANGE, CVR_RANGE, DEFAULT_SERIES_SEED, MARKETING_SPEND_RANGE,
    NEW_CUSTOMERS_RANGE, REVENUE_RANGE,
};

#[test]
fn series_has_thirty_consecutive_days_from_new_year() {
    let series = generate_series(DEFAULT_SERIES_SEED);
    assert_eq!(series.len(), 30);

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert_eq!(series[0].date, start);
    for pair in series.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }
    assert_eq!(series[29].date, NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
}

#[test]
fn every_field_stays_within_generator_range() {
    for seed in [DEFAULT_SERIES_SEED, 0, 7, u64::MAX] {
        for (i, p) in generate_series(seed).iter().enumerate() {
            assert!(CAC_RANGE.contains(&p.customer_acquisition_cost), "day {i}: cac {}", p.customer_acquisition_cost);
            assert!(CVR_RANGE.contains(&p.conversion_rate), "day {i}: cvr {}", p.conversion_rate);
            assert!(NEW_CUSTOMERS_RANGE.contains(&p.new_customers), "day {i}: customers {}", p.new_customers);
            assert!(MARKETING_SPEND_RANGE.contains(&p.marketing_spend), "day {i}: spend {}", p.marketing_spend);
            assert!(REVENUE_RANGE.contains(&p.revenue), "day {i}: revenue {}", p.revenue);
        }
    }
}

#[test]
fn series_is_not_constant() {
    let series = generate_series(DEFAULT_SERIES_SEED);
    let first = series[0].customer_acquisition_cost;
    assert!(
        series.iter().any(|p| p.customer_acquisition_cost != first),
        "All 30 days drew the same CAC"
    );
}
