//! Multi-touch attribution — splits credit for conversions across
//! marketing channels by weighted reach.
//!
//! contribution[c] = reach × weight × multiplier / Σ(reach × weight × multiplier) × 100

use crate::{
    error::{CoreError, CoreResult},
    types::Percent,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub name:       String,
    pub reach:      u64,
    /// Touchpoint weight in [0, 1].
    pub weight:     f64,
    pub multiplier: f64,
}

impl Channel {
    pub fn new(name: &str, reach: u64, weight: f64, multiplier: f64) -> Self {
        Self { name: name.to_string(), reach, weight, multiplier }
    }

    pub fn weighted_reach(&self) -> f64 {
        self.reach as f64 * self.weight * self.multiplier
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelContribution {
    pub name:                 String,
    pub reach:                u64,
    pub weight:               f64,
    pub multiplier:           f64,
    pub weighted_reach:       f64,
    pub contribution_percent: Percent,
}

/// Contributions in channel-table order. Use `as_map` for lookup by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributionReport {
    pub total_weighted: f64,
    pub channels:       Vec<ChannelContribution>,
}

impl AttributionReport {
    /// Channel name → contribution percent. A repeated name keeps its
    /// last row's value.
    pub fn as_map(&self) -> BTreeMap<String, Percent> {
        self.channels
            .iter()
            .map(|c| (c.name.clone(), c.contribution_percent))
            .collect()
    }

    pub fn total_percent(&self) -> Percent {
        self.channels.iter().map(|c| c.contribution_percent).sum()
    }

    /// Highest contributor; ties go to the earlier channel.
    pub fn leading_channel(&self) -> Option<&ChannelContribution> {
        self.channels.iter().fold(None, |best: Option<&ChannelContribution>, c| match best {
            Some(b) if b.contribution_percent >= c.contribution_percent => Some(b),
            _ => Some(c),
        })
    }
}

/// The market's 2025 channel table.
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel::new("Instagram",   175_000, 0.35, 1.3),
        Channel::new("TikTok",      220_000, 0.30, 1.2),
        Channel::new("Google Maps", 115_000, 0.25, 1.1),
        Channel::new("Influencer",  105_000, 0.40, 1.3),
        Channel::new("WhatsApp",    160_000, 0.20, 1.0),
        Channel::new("Offline",      50_000, 0.15, 1.0),
    ]
}

/// Normalize weighted reach into percentages summing to 100.
/// Fails when the weighted total is zero, negative or not finite,
/// which includes an empty table.
pub fn compute_attribution(channels: &[Channel]) -> CoreResult<AttributionReport> {
    let total_weighted: f64 = channels.iter().map(Channel::weighted_reach).sum();

    if !(total_weighted.is_finite() && total_weighted > 0.0) {
        log::warn!(
            "attribution: weighted total {total_weighted} over {} channels is unusable",
            channels.len()
        );
        return Err(CoreError::DegenerateAttribution {
            channels: channels.len(),
            total:    total_weighted,
        });
    }

    let channels = channels
        .iter()
        .map(|c| {
            let weighted_reach = c.weighted_reach();
            ChannelContribution {
                name:                 c.name.clone(),
                reach:                c.reach,
                weight:               c.weight,
                multiplier:           c.multiplier,
                weighted_reach,
                contribution_percent: weighted_reach / total_weighted * 100.0,
            }
        })
        .collect();

    Ok(AttributionReport { total_weighted, channels })
}
