//! Page requests and the views served back for them.
//!
//! One request per page of the dashboard. Each carries only what the
//! page's widgets can change; everything else comes from config.

use crate::{
    analytics::{CacMonitorView, CvrOptimizerView, DashboardOverview, SliderOverrides, SortKey},
    attribution::AttributionReport,
    entity_generator::Tier,
    types::{EntityId, Rupiah},
};
use serde::{Deserialize, Serialize};

/// Variants added per page — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageRequest {
    Dashboard,
    CacMonitor {
        /// None keeps every tier.
        #[serde(default)]
        tiers:         Option<Vec<Tier>>,
        /// None uses the configured alert threshold.
        #[serde(default)]
        cac_threshold: Option<Rupiah>,
        #[serde(default)]
        sort_by:       SortKey,
    },
    CvrOptimizer {
        /// None selects the first entity.
        #[serde(default)]
        entity_id: Option<EntityId>,
        #[serde(default)]
        overrides: SliderOverrides,
    },
    MtaAnalysis,
}

impl PageRequest {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard          => "dashboard",
            Self::CacMonitor { .. }  => "cac_monitor",
            Self::CvrOptimizer { .. } => "cvr_optimizer",
            Self::MtaAnalysis        => "mta_analysis",
        }
    }

    /// Default request for a page name, as typed on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dashboard"     => Some(Self::Dashboard),
            "cac_monitor"   => Some(Self::CacMonitor {
                tiers:         None,
                cac_threshold: None,
                sort_by:       SortKey::Cac,
            }),
            "cvr_optimizer" => Some(Self::CvrOptimizer {
                entity_id: None,
                overrides: SliderOverrides::default(),
            }),
            "mta_analysis"  => Some(Self::MtaAnalysis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Dashboard(DashboardOverview),
    CacMonitor(CacMonitorView),
    CvrOptimizer(CvrOptimizerView),
    MtaAnalysis(AttributionReport),
}
