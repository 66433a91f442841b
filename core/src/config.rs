use crate::{
    attribution::{default_channels, Channel},
    entity_generator::DEFAULT_ENTITY_SEED,
    error::{CoreError, CoreResult},
    name_generator::NameGenerator,
    scoring_model::ScoringCoefficients,
    timeseries_generator::DEFAULT_SERIES_SEED,
    types::Rupiah,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedConfig {
    pub series:   u64,
    pub entities: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            series:   DEFAULT_SERIES_SEED,
            entities: DEFAULT_ENTITY_SEED,
        }
    }
}

/// Reference lines and thresholds drawn on the dashboard pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardTargets {
    /// Daily CAC above this is flagged on the trend chart.
    pub cac_target_max:       Rupiah,
    /// CAC/CLV below this counts as profitable.
    pub profitability_ratio:  f64,
    /// Customers each vendor is credited with in collective KPIs.
    pub customers_per_entity: i64,
    pub roas_target:          f64,
    /// Default CAC alert threshold on the monitor page.
    pub cac_alert_threshold:  Rupiah,
    /// Rows in the lowest-CAC leaderboard.
    pub top_n:                usize,
}

impl Default for DashboardTargets {
    fn default() -> Self {
        Self {
            cac_target_max:       16_600,
            profitability_ratio:  0.33,
            customers_per_entity: 250,
            roas_target:          3.5,
            cac_alert_threshold:  20_000,
            top_n:                10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChannelTableFile {
    channels: Vec<Channel>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProductCatalogFile {
    products: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub seeds:    SeedConfig,
    pub scoring:  ScoringCoefficients,
    pub channels: Vec<Channel>,
    pub products: Vec<String>,
    pub targets:  DashboardTargets,
}

impl DashboardConfig {
    /// Load from the data/ directory.
    /// In tests, use DashboardConfig::builtin().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let seeds: SeedConfig = read_json(&format!("{data_dir}/seeds.json"))?;
        let scoring: ScoringCoefficients = read_json(&format!("{data_dir}/scoring/cvr_model.json"))?;
        let channel_file: ChannelTableFile =
            read_json(&format!("{data_dir}/channels/channel_table.json"))?;
        let product_file: ProductCatalogFile =
            read_json(&format!("{data_dir}/roster/products.json"))?;
        let targets: DashboardTargets =
            read_json(&format!("{data_dir}/targets/dashboard_targets.json"))?;

        let config = Self {
            seeds,
            scoring,
            channels: channel_file.channels,
            products: product_file.products,
            targets,
        };
        config.validate()?;

        log::info!(
            "config: loaded {} channels, {} products from {data_dir}",
            config.channels.len(),
            config.products.len()
        );
        Ok(config)
    }

    /// In-code defaults, identical to the shipped data/ files.
    pub fn builtin() -> Self {
        Self {
            seeds:    SeedConfig::default(),
            scoring:  ScoringCoefficients::default(),
            channels: default_channels(),
            products: NameGenerator::default_products(),
            targets:  DashboardTargets::default(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.products.is_empty() {
            return Err(invalid("product catalogue is empty"));
        }
        if !self.scoring.is_finite() {
            return Err(invalid(format!(
                "scoring coefficients must be finite: {:?}",
                self.scoring
            )));
        }
        let total: f64 = self.channels.iter().map(Channel::weighted_reach).sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(invalid(format!(
                "channel table has no positive weighted reach (total {total})"
            )));
        }
        if self.targets.customers_per_entity <= 0 {
            return Err(invalid("customers_per_entity must be positive"));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(reason: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig { reason: reason.into() }
}

fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
}
