//! Daily KPI series generator.
//!
//! Produces one point per day for a fixed 30-day window starting
//! 2025-01-01. Every field is an independent uniform draw; the whole
//! series is rebuilt from the seed on each call.

use crate::{
    calendar::ReportCalendar,
    generator::DataGenerator,
    rng::{GeneratorRng, GeneratorSlot},
    types::{Percent, Rupiah},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const DEFAULT_SERIES_SEED: u64 = 42;
pub const SERIES_DAYS: u32 = 30;

pub const CAC_RANGE:             Range<Rupiah> = 15_000..21_000;
pub const CVR_RANGE:             Range<Percent> = 1.8..2.8;
pub const NEW_CUSTOMERS_RANGE:   Range<i64> = 800..1_100;
pub const MARKETING_SPEND_RANGE: Range<Rupiah> = 4_000_000..5_000_000;
pub const REVENUE_RANGE:         Range<Rupiah> = 14_000_000..20_000_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    pub date:                      NaiveDate,
    pub customer_acquisition_cost: Rupiah,
    pub conversion_rate:           Percent,
    pub new_customers:             i64,
    pub marketing_spend:           Rupiah,
    pub revenue:                   Rupiah,
}

#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesGenerator {
    pub calendar: ReportCalendar,
}

impl TimeSeriesGenerator {
    pub fn new(calendar: ReportCalendar) -> Self {
        Self { calendar }
    }
}

impl Default for TimeSeriesGenerator {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        Self::new(ReportCalendar::new(start, SERIES_DAYS))
    }
}

impl DataGenerator for TimeSeriesGenerator {
    type Output = Vec<TimeSeriesPoint>;

    fn slot(&self) -> GeneratorSlot {
        GeneratorSlot::TimeSeries
    }

    fn generate(&self, rng: &mut GeneratorRng) -> Vec<TimeSeriesPoint> {
        let n = self.calendar.days as usize;

        // Column-major draws: all CACs, then all CVRs, and so on.
        let cac: Vec<Rupiah> = (0..n).map(|_| rng.range_i64(CAC_RANGE.start, CAC_RANGE.end)).collect();
        let cvr: Vec<Percent> = (0..n).map(|_| rng.uniform(CVR_RANGE.start, CVR_RANGE.end)).collect();
        let customers: Vec<i64> = (0..n)
            .map(|_| rng.range_i64(NEW_CUSTOMERS_RANGE.start, NEW_CUSTOMERS_RANGE.end))
            .collect();
        let spend: Vec<Rupiah> = (0..n)
            .map(|_| rng.range_i64(MARKETING_SPEND_RANGE.start, MARKETING_SPEND_RANGE.end))
            .collect();
        let revenue: Vec<Rupiah> = (0..n)
            .map(|_| rng.range_i64(REVENUE_RANGE.start, REVENUE_RANGE.end))
            .collect();

        let series: Vec<TimeSeriesPoint> = self
            .calendar
            .dates()
            .enumerate()
            .map(|(i, date)| TimeSeriesPoint {
                date,
                customer_acquisition_cost: cac[i],
                conversion_rate:           cvr[i],
                new_customers:             customers[i],
                marketing_spend:           spend[i],
                revenue:                   revenue[i],
            })
            .collect();

        log::debug!(
            "{}: {} daily points from {}",
            rng.name,
            series.len(),
            self.calendar.start
        );
        series
    }
}

/// The 30-day January 2025 series for `seed`.
pub fn generate_series(seed: u64) -> Vec<TimeSeriesPoint> {
    TimeSeriesGenerator::default().generate_seeded(seed)
}
