//! Snapshot serialization — every generated dataset and page view
//! for one pair of seeds, as a single JSON document.
//!
//! A snapshot is what the presentation layer loads; it never needs to
//! call back into the core to render any page.

use crate::{
    analytics::{CacMonitorView, CvrOptimizerView, DashboardOverview},
    attribution::AttributionReport,
    config::SeedConfig,
    entity_generator::Entity,
    error::CoreResult,
    timeseries_generator::TimeSeriesPoint,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub seeds:         SeedConfig,
    pub series:        Vec<TimeSeriesPoint>,
    pub entities:      Vec<Entity>,
    pub dashboard:     DashboardOverview,
    pub cac_monitor:   CacMonitorView,
    pub cvr_optimizer: CvrOptimizerView,
    pub attribution:   AttributionReport,
}

impl DashboardSnapshot {
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
