//! Entity roster generator — the 98 synthetic food vendors.
//!
//! Economics are a deliberate linear trend over generation index
//! (cost and revenue rise, lifetime value and conversion fall);
//! only the landing-page factors, products and coordinates are random.
//! Tier is a fixed partition of the index, never sampled.

use crate::{
    generator::DataGenerator,
    name_generator::NameGenerator,
    rng::{GeneratorRng, GeneratorSlot},
    types::{EntityId, Percent, Rupiah},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENTITY_SEED: u64 = 123;

/// (tier, count) in generation order.
pub const TIER_PARTITION: [(Tier, usize); 4] = [
    (Tier::Tier1, 10),
    (Tier::Tier2, 29),
    (Tier::Tier3, 39),
    (Tier::Tier4, 20),
];
pub const ROSTER_SIZE: usize = 98;

pub const CAC_BASE:          Rupiah = 13_500;
pub const CAC_STEP:          Rupiah = 250;
pub const CLV_BASE:          Rupiah = 50_000;
pub const CLV_STEP:          Rupiah = 180;
pub const CVR_BASE:          Percent = 2.8;
pub const CVR_STEP:          Percent = 0.012;
pub const REVENUE_7D_BASE:   Rupiah = 5_500_000;
pub const REVENUE_7D_STEP:   Rupiah = 60_000;

/// Trust levels and their draw weights.
pub const TRUST_LEVELS:  [f64; 3] = [0.0, 0.5, 1.0];
pub const TRUST_WEIGHTS: [f64; 3] = [0.15, 0.25, 0.60];
pub const URGENCY_PROBABILITY: f64 = 0.5;

pub const LANDING_SPEED_RANGE:  (f64, f64) = (1.5, 6.5);
pub const REVIEW_RANGE:         (f64, f64) = (3.8, 4.95);
pub const VISUAL_QUALITY_RANGE: (f64, f64) = (0.5, 1.0);
/// Bounds are reversed on purpose; draws land in (-0.4650, -0.4640].
pub const LATITUDE_RANGE:       (f64, f64) = (-0.4640, -0.4650);
pub const LONGITUDE_RANGE:      (f64, f64) = (100.4000, 100.4010);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Tier4];

    /// Tier for a zero-based generation index. Indexes past the
    /// partition end stay in the last tier.
    pub fn for_index(index: usize) -> Tier {
        let mut upper = 0;
        for (tier, count) in TIER_PARTITION {
            upper += count;
            if index < upper {
                return tier;
            }
        }
        Tier::Tier4
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
            Self::Tier4 => "Tier 4",
        }
    }

    /// Display colour used by the dashboard charts.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Tier1 => "#006633",
            Self::Tier2 => "#FFCC00",
            Self::Tier3 => "#FF8C00",
            Self::Tier4 => "#DC143C",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Active,
    NeedsAttention,
    Inactive,
}

impl EntityStatus {
    /// active: cost < value / 3; needs attention: cost < value; else inactive.
    pub fn classify(acquisition_cost: Rupiah, lifetime_value: Rupiah) -> Self {
        // Integer form of cost < value / 3.
        if acquisition_cost.saturating_mul(3) < lifetime_value {
            Self::Active
        } else if acquisition_cost < lifetime_value {
            Self::NeedsAttention
        } else {
            Self::Inactive
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub id:               EntityId,
    pub name:             String,
    pub owner:            String,
    pub tier:             Tier,
    pub primary_product:  String,
    pub address:          String,
    pub whatsapp:         String,
    pub instagram:        String,
    /// Seconds.
    pub landing_speed:    f64,
    pub trust_signal:     f64,
    pub urgency_factor:   bool,
    pub review_score:     f64,
    pub visual_quality:   f64,
    pub acquisition_cost: Rupiah,
    pub lifetime_value:   Rupiah,
    pub conversion_rate:  Percent,
    pub revenue_7days:    Rupiah,
    pub latitude:         f64,
    pub longitude:        f64,
    pub status:           EntityStatus,
}

impl Entity {
    pub fn cac_clv_ratio(&self) -> f64 {
        self.acquisition_cost as f64 / self.lifetime_value as f64
    }

    pub fn urgency_value(&self) -> f64 {
        if self.urgency_factor { 1.0 } else { 0.0 }
    }
}

/// Deterministic economics for a zero-based index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendEconomics {
    pub acquisition_cost: Rupiah,
    pub lifetime_value:   Rupiah,
    pub conversion_rate:  Percent,
    pub revenue_7days:    Rupiah,
}

impl TrendEconomics {
    pub fn at(index: usize) -> Self {
        let i = index as i64;
        Self {
            acquisition_cost: CAC_BASE + i * CAC_STEP,
            lifetime_value:   CLV_BASE - i * CLV_STEP,
            conversion_rate:  CVR_BASE - index as f64 * CVR_STEP,
            revenue_7days:    REVENUE_7D_BASE + i * REVENUE_7D_STEP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntityGenerator {
    products: Vec<String>,
}

impl EntityGenerator {
    /// An empty catalogue falls back to DEFAULT_PRODUCTS.
    pub fn new(products: Vec<String>) -> Self {
        let products = if products.is_empty() {
            NameGenerator::default_products()
        } else {
            products
        };
        Self { products }
    }
}

impl Default for EntityGenerator {
    fn default() -> Self {
        Self::new(NameGenerator::default_products())
    }
}

impl DataGenerator for EntityGenerator {
    type Output = Vec<Entity>;

    fn slot(&self) -> GeneratorSlot {
        GeneratorSlot::Entity
    }

    fn generate(&self, rng: &mut GeneratorRng) -> Vec<Entity> {
        let n = ROSTER_SIZE;

        // Column-major draws, one column per random field.
        let names: Vec<String> = (1..=n as EntityId)
            .map(|id| NameGenerator::business_name(rng, id, &self.products))
            .collect();
        let primary: Vec<String> = (0..n).map(|_| rng.pick(&self.products).clone()).collect();
        let speed: Vec<f64> = (0..n)
            .map(|_| rng.uniform(LANDING_SPEED_RANGE.0, LANDING_SPEED_RANGE.1))
            .collect();
        let trust: Vec<f64> = (0..n)
            .map(|_| TRUST_LEVELS[rng.weighted_index(&TRUST_WEIGHTS)])
            .collect();
        let urgency: Vec<bool> = (0..n).map(|_| rng.chance(URGENCY_PROBABILITY)).collect();
        let review: Vec<f64> = (0..n).map(|_| rng.uniform(REVIEW_RANGE.0, REVIEW_RANGE.1)).collect();
        let visual: Vec<f64> = (0..n)
            .map(|_| rng.uniform(VISUAL_QUALITY_RANGE.0, VISUAL_QUALITY_RANGE.1))
            .collect();
        let lat: Vec<f64> = (0..n).map(|_| rng.uniform(LATITUDE_RANGE.0, LATITUDE_RANGE.1)).collect();
        let lon: Vec<f64> = (0..n).map(|_| rng.uniform(LONGITUDE_RANGE.0, LONGITUDE_RANGE.1)).collect();

        let roster: Vec<Entity> = names
            .into_iter()
            .zip(primary)
            .enumerate()
            .map(|(i, (name, primary_product))| {
                let id = i as EntityId + 1;
                let econ = TrendEconomics::at(i);
                let card = NameGenerator::contact_card(id);
                Entity {
                    id,
                    name,
                    owner:            card.owner,
                    tier:             Tier::for_index(i),
                    primary_product,
                    address:          card.address,
                    whatsapp:         card.whatsapp,
                    instagram:        card.instagram,
                    landing_speed:    speed[i],
                    trust_signal:     trust[i],
                    urgency_factor:   urgency[i],
                    review_score:     review[i],
                    visual_quality:   visual[i],
                    acquisition_cost: econ.acquisition_cost,
                    lifetime_value:   econ.lifetime_value,
                    conversion_rate:  econ.conversion_rate,
                    revenue_7days:    econ.revenue_7days,
                    latitude:         lat[i],
                    longitude:        lon[i],
                    status:           EntityStatus::classify(econ.acquisition_cost, econ.lifetime_value),
                }
            })
            .collect();

        log::debug!("{}: {} entities across {} products", rng.name, roster.len(), self.products.len());
        roster
    }
}

/// The full roster for `seed` drawn from `products`.
pub fn generate_entities(seed: u64, products: &[String]) -> Vec<Entity> {
    EntityGenerator::new(products.to_vec()).generate_seeded(seed)
}
