//! The report engine — turns a config into page views.
//!
//! RULES:
//!   - The engine holds configuration only, never generated data.
//!   - Every call regenerates what it needs from the configured seeds,
//!     so two engines (or two threads sharing one) never share state.
//!   - All randomness flows through the generators' own RNG streams.

use crate::{
    analytics::{self, CacMonitorQuery, SliderOverrides, SortKey},
    attribution::{compute_attribution, AttributionReport},
    command::{PageRequest, PageView},
    config::{DashboardConfig, SeedConfig},
    entity_generator::{Entity, EntityGenerator},
    error::CoreResult,
    generator::DataGenerator,
    scoring_model::ConversionModel,
    snapshot::DashboardSnapshot,
    timeseries_generator::{TimeSeriesGenerator, TimeSeriesPoint},
    types::EntityId,
};

pub struct ReportEngine {
    config: DashboardConfig,
    model:  ConversionModel,
    series_generator: TimeSeriesGenerator,
    entity_generator: EntityGenerator,
}

impl ReportEngine {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            model:            ConversionModel::new(config.scoring),
            series_generator: TimeSeriesGenerator::default(),
            entity_generator: EntityGenerator::new(config.products.clone()),
            config,
        }
    }

    /// Load config from `data_dir` and build an engine on it.
    pub fn build(data_dir: &str) -> anyhow::Result<Self> {
        let config = DashboardConfig::load(data_dir)?;
        Ok(Self::new(config))
    }

    /// Engine on the built-in config. Used by tests.
    pub fn build_test() -> Self {
        Self::new(DashboardConfig::builtin())
    }

    pub fn with_seeds(mut self, seeds: SeedConfig) -> Self {
        self.config.seeds = seeds;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn model(&self) -> &ConversionModel {
        &self.model
    }

    pub fn series(&self) -> Vec<TimeSeriesPoint> {
        self.series_generator.generate_seeded(self.config.seeds.series)
    }

    pub fn entities(&self) -> Vec<Entity> {
        self.entity_generator.generate_seeded(self.config.seeds.entities)
    }

    pub fn attribution(&self) -> CoreResult<AttributionReport> {
        compute_attribution(&self.config.channels)
    }

    /// Build the view for one page request.
    pub fn serve(&self, request: &PageRequest) -> CoreResult<PageView> {
        let targets = &self.config.targets;
        let view = match request {
            PageRequest::Dashboard => {
                let series = self.series();
                let entities = self.entities();
                PageView::Dashboard(analytics::dashboard_overview(&series, &entities, targets))
            }
            PageRequest::CacMonitor { tiers, cac_threshold, sort_by } => {
                let query = CacMonitorQuery {
                    tiers:         tiers.clone(),
                    cac_threshold: cac_threshold.unwrap_or(targets.cac_alert_threshold),
                    sort_by:       *sort_by,
                };
                PageView::CacMonitor(analytics::cac_monitor(&self.entities(), &query, targets))
            }
            PageRequest::CvrOptimizer { entity_id, overrides } => {
                let entities = self.entities();
                let id = entity_id.unwrap_or_else(|| first_id(&entities));
                PageView::CvrOptimizer(analytics::cvr_optimizer(&entities, &self.model, id, overrides)?)
            }
            PageRequest::MtaAnalysis => PageView::MtaAnalysis(self.attribution()?),
        };
        log::info!("engine: served {} page", request.name());
        Ok(view)
    }

    /// Every dataset and default page view in one bundle.
    pub fn snapshot(&self) -> CoreResult<DashboardSnapshot> {
        let targets = &self.config.targets;
        let series = self.series();
        let entities = self.entities();

        let cac_query = CacMonitorQuery {
            tiers:         None,
            cac_threshold: targets.cac_alert_threshold,
            sort_by:       SortKey::Cac,
        };

        Ok(DashboardSnapshot {
            seeds:         self.config.seeds,
            dashboard:     analytics::dashboard_overview(&series, &entities, targets),
            cac_monitor:   analytics::cac_monitor(&entities, &cac_query, targets),
            cvr_optimizer: analytics::cvr_optimizer(
                &entities,
                &self.model,
                first_id(&entities),
                &SliderOverrides::default(),
            )?,
            attribution:   self.attribution()?,
            series,
            entities,
        })
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::build_test()
    }
}

fn first_id(entities: &[Entity]) -> EntityId {
    entities.first().map_or(1, |e| e.id)
}
