//! Report calendar — the fixed run of consecutive days a series covers.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCalendar {
    pub start: NaiveDate,
    pub days:  u32,
}

impl ReportCalendar {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// The date `offset` days after the start.
    /// Returns None past the end of the calendar.
    pub fn date_at(&self, offset: u32) -> Option<NaiveDate> {
        if offset >= self.days {
            return None;
        }
        self.start.checked_add_days(Days::new(u64::from(offset)))
    }

    /// Every date in order, start first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).filter_map(move |d| self.date_at(d))
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.checked_sub(1).and_then(|d| self.date_at(d))
    }
}
