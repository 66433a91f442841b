//! Page analytics — aggregates the generated data into the view models
//! each dashboard page renders.
//!
//! Pure functions over slices; no generation happens here.

use crate::{
    config::DashboardTargets,
    entity_generator::{Entity, EntityStatus, Tier},
    error::{CoreError, CoreResult},
    scoring_model::{
        improvement_percent, recommendations, ConversionModel, Recommendation, ScoringInputs,
        SensitivityGrid,
    },
    timeseries_generator::TimeSeriesPoint,
    types::{EntityId, Percent, Rupiah},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Dashboard overview ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewKpis {
    pub mean_cac:        Option<f64>,
    pub mean_cvr:        Option<Percent>,
    pub new_customers:   i64,
    /// Σ revenue_7days / (Σ CAC × customers per entity).
    pub collective_roas: Option<f64>,
    pub roas_target:     f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyCac {
    pub date: NaiveDate,
    pub cac:  Rupiah,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacTrend {
    pub points:            Vec<DailyCac>,
    pub target_max:        Rupiah,
    pub days_above_target: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierShare {
    pub tier:  Tier,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierProfitability {
    pub tier:     Tier,
    pub mean_cac: f64,
    pub mean_clv: f64,
    pub ratio:    f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    pub id:        EntityId,
    pub latitude:  f64,
    pub longitude: f64,
    pub tier:      Tier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOverview {
    pub kpis:                OverviewKpis,
    pub cac_trend:           CacTrend,
    pub tier_distribution:   Vec<TierShare>,
    pub tier_profitability:  Vec<TierProfitability>,
    pub profitability_ratio: f64,
    pub map:                 Vec<MapPoint>,
}

pub fn overview_kpis(entities: &[Entity], targets: &DashboardTargets) -> OverviewKpis {
    let cac_sum: i64 = entities.iter().map(|e| e.acquisition_cost).sum();
    let revenue_sum: i64 = entities.iter().map(|e| e.revenue_7days).sum();
    let weighted_cac = cac_sum as f64 * targets.customers_per_entity as f64;

    OverviewKpis {
        mean_cac:        mean(entities.iter().map(|e| e.acquisition_cost as f64)),
        mean_cvr:        mean(entities.iter().map(|e| e.conversion_rate)),
        new_customers:   entities.len() as i64 * targets.customers_per_entity,
        collective_roas: (weighted_cac > 0.0).then(|| revenue_sum as f64 / weighted_cac),
        roas_target:     targets.roas_target,
    }
}

pub fn cac_trend(series: &[TimeSeriesPoint], target_max: Rupiah) -> CacTrend {
    let points: Vec<DailyCac> = series
        .iter()
        .map(|p| DailyCac { date: p.date, cac: p.customer_acquisition_cost })
        .collect();
    let days_above_target = points.iter().filter(|p| p.cac > target_max).count();
    CacTrend { points, target_max, days_above_target }
}

/// Count per tier, in tier order, including empty tiers.
pub fn tier_distribution(entities: &[Entity]) -> Vec<TierShare> {
    Tier::ALL
        .iter()
        .map(|&tier| TierShare {
            tier,
            count: entities.iter().filter(|e| e.tier == tier).count(),
        })
        .collect()
}

/// Mean CAC over mean CLV per tier. Tiers with no members are omitted.
pub fn tier_profitability(entities: &[Entity]) -> Vec<TierProfitability> {
    Tier::ALL
        .iter()
        .filter_map(|&tier| {
            let members: Vec<&Entity> = entities.iter().filter(|e| e.tier == tier).collect();
            let mean_cac = mean(members.iter().map(|e| e.acquisition_cost as f64))?;
            let mean_clv = mean(members.iter().map(|e| e.lifetime_value as f64))?;
            Some(TierProfitability { tier, mean_cac, mean_clv, ratio: mean_cac / mean_clv })
        })
        .collect()
}

pub fn map_points(entities: &[Entity]) -> Vec<MapPoint> {
    entities
        .iter()
        .map(|e| MapPoint { id: e.id, latitude: e.latitude, longitude: e.longitude, tier: e.tier })
        .collect()
}

pub fn dashboard_overview(
    series: &[TimeSeriesPoint],
    entities: &[Entity],
    targets: &DashboardTargets,
) -> DashboardOverview {
    DashboardOverview {
        kpis:                overview_kpis(entities, targets),
        cac_trend:           cac_trend(series, targets.cac_target_max),
        tier_distribution:   tier_distribution(entities),
        tier_profitability:  tier_profitability(entities),
        profitability_ratio: targets.profitability_ratio,
        map:                 map_points(entities),
    }
}

// ── CAC monitor ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Cac,
    Clv,
    Ratio,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacMonitorQuery {
    /// None keeps every tier.
    pub tiers:         Option<Vec<Tier>>,
    pub cac_threshold: Rupiah,
    pub sort_by:       SortKey,
}

impl CacMonitorQuery {
    pub fn all_tiers(cac_threshold: Rupiah) -> Self {
        Self { tiers: None, cac_threshold, sort_by: SortKey::Cac }
    }

    fn keeps(&self, tier: Tier) -> bool {
        self.tiers.as_ref().map_or(true, |ts| ts.contains(&tier))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacRow {
    pub id:               EntityId,
    pub name:             String,
    pub tier:             Tier,
    pub acquisition_cost: Rupiah,
    pub lifetime_value:   Rupiah,
    pub ratio:            f64,
    pub status:           EntityStatus,
    pub over_threshold:   bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacMonitorView {
    pub query:                CacMonitorQuery,
    pub filtered_count:       usize,
    pub over_threshold_count: usize,
    pub mean_cac:             Option<f64>,
    pub mean_clv:             Option<f64>,
    pub profitable_count:     usize,
    /// Lowest CAC first, at most `top_n` rows.
    pub leaderboard:          Vec<CacRow>,
    /// Every filtered row, ascending by the query's sort key.
    pub rows:                 Vec<CacRow>,
}

pub fn cac_monitor(
    entities: &[Entity],
    query: &CacMonitorQuery,
    targets: &DashboardTargets,
) -> CacMonitorView {
    let rows: Vec<CacRow> = entities
        .iter()
        .filter(|e| query.keeps(e.tier))
        .map(|e| CacRow {
            id:               e.id,
            name:             e.name.clone(),
            tier:             e.tier,
            acquisition_cost: e.acquisition_cost,
            lifetime_value:   e.lifetime_value,
            ratio:            e.cac_clv_ratio(),
            status:           e.status,
            over_threshold:   e.acquisition_cost > query.cac_threshold,
        })
        .collect();

    let over_threshold_count = rows.iter().filter(|r| r.over_threshold).count();
    let profitable_count = rows.iter().filter(|r| r.ratio < targets.profitability_ratio).count();
    if over_threshold_count > 0 {
        log::debug!(
            "cac_monitor: {over_threshold_count} entities above threshold {}",
            query.cac_threshold
        );
    }

    let mut leaderboard = rows.clone();
    leaderboard.sort_by_key(|r| r.acquisition_cost);
    leaderboard.truncate(targets.top_n);

    let mut sorted = rows;
    match query.sort_by {
        SortKey::Cac   => sorted.sort_by_key(|r| r.acquisition_cost),
        SortKey::Clv   => sorted.sort_by_key(|r| r.lifetime_value),
        SortKey::Ratio => sorted.sort_by(|a, b| a.ratio.total_cmp(&b.ratio)),
    }

    CacMonitorView {
        query:            query.clone(),
        filtered_count:   sorted.len(),
        over_threshold_count,
        mean_cac:         mean(sorted.iter().map(|r| r.acquisition_cost as f64)),
        mean_clv:         mean(sorted.iter().map(|r| r.lifetime_value as f64)),
        profitable_count,
        leaderboard,
        rows:             sorted,
    }
}

// ── CVR optimizer ────────────────────────────────────────────────────────────

/// Slider positions the user moved away from the entity's own values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SliderOverrides {
    pub speed:   Option<f64>,
    pub trust:   Option<f64>,
    pub urgency: Option<f64>,
    pub review:  Option<f64>,
    pub visual:  Option<f64>,
}

impl SliderOverrides {
    pub fn apply(&self, entity: &Entity) -> ScoringInputs {
        ScoringInputs {
            speed:   self.speed.unwrap_or(entity.landing_speed),
            trust:   self.trust.unwrap_or(entity.trust_signal),
            urgency: self.urgency.unwrap_or_else(|| entity.urgency_value()),
            review:  self.review.unwrap_or(entity.review_score),
            visual:  self.visual.unwrap_or(entity.visual_quality),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CvrOptimizerView {
    pub entity_id:           EntityId,
    pub entity_name:         String,
    pub inputs:              ScoringInputs,
    /// The entity's own rate; not clamped.
    pub current_cvr:         Percent,
    pub predicted_cvr:       Percent,
    pub improvement_percent: Option<f64>,
    pub recommendations:     Vec<Recommendation>,
    pub sensitivity:         SensitivityGrid,
}

pub fn cvr_optimizer(
    entities: &[Entity],
    model: &ConversionModel,
    entity_id: EntityId,
    overrides: &SliderOverrides,
) -> CoreResult<CvrOptimizerView> {
    let entity = entities
        .iter()
        .find(|e| e.id == entity_id)
        .ok_or(CoreError::EntityNotFound { id: entity_id })?;

    let inputs = overrides.apply(entity);
    let predicted_cvr = model.predict(&inputs);

    Ok(CvrOptimizerView {
        entity_id,
        entity_name:         entity.name.clone(),
        inputs,
        current_cvr:         entity.conversion_rate,
        predicted_cvr,
        improvement_percent: improvement_percent(entity.conversion_rate, predicted_cvr),
        recommendations:     recommendations(&inputs),
        sensitivity:         model.sensitivity_grid(&inputs),
    })
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Arithmetic mean; None for an empty iterator.
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
