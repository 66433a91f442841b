//! Conversion-rate scoring model — a fixed linear combination of landing
//! page factors, clamped to a plausible band.
//!
//! Used by the CVR optimizer page for what-if sliders and the
//! speed × trust sensitivity heatmap.

use crate::types::Percent;
use serde::{Deserialize, Serialize};

/// Lower bound of any predicted conversion rate.
pub const MIN_PREDICTED_CVR: Percent = 0.5;
/// Upper bound of any predicted conversion rate.
pub const MAX_PREDICTED_CVR: Percent = 5.0;

/// Points along each axis of the sensitivity grid.
pub const SENSITIVITY_STEPS: usize = 20;

/// Weights only. The output band is fixed and cannot be configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringCoefficients {
    pub intercept: f64,
    pub speed:     f64,
    pub trust:     f64,
    pub urgency:   f64,
    /// Already scaled: 0.42 per review point × 0.1.
    pub review:    f64,
    pub visual:    f64,
}

impl ScoringCoefficients {
    pub fn is_finite(&self) -> bool {
        [self.intercept, self.speed, self.trust, self.urgency, self.review, self.visual]
            .iter()
            .all(|c| c.is_finite())
    }
}

impl Default for ScoringCoefficients {
    fn default() -> Self {
        Self {
            intercept: 2.1,
            speed:     -0.21,
            trust:     0.35,
            urgency:   0.18,
            review:    0.042,
            visual:    0.28,
        }
    }
}

/// One set of slider positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringInputs {
    /// Landing page load time in seconds.
    pub speed:   f64,
    pub trust:   f64,
    pub urgency: f64,
    pub review:  f64,
    pub visual:  f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ReduceLandingSpeed,
    AddTrustBadge,
    EnableUrgency,
    ImproveReviews,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ReduceLandingSpeed => "Bring landing page load time under 2.5 seconds",
            Self::AddTrustBadge      => "Add a trust badge",
            Self::EnableUrgency      => "Turn on an urgency cue",
            Self::ImproveReviews     => "Raise the local review score",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensitivityGrid {
    pub speeds: Vec<f64>,
    pub trusts: Vec<f64>,
    /// `rates[s][t]` is the prediction at `speeds[s]`, `trusts[t]`.
    pub rates:  Vec<Vec<Percent>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConversionModel {
    pub coefficients: ScoringCoefficients,
}

impl ConversionModel {
    pub fn new(coefficients: ScoringCoefficients) -> Self {
        Self { coefficients }
    }

    /// Predicted conversion rate in percent, always within
    /// [MIN_PREDICTED_CVR, MAX_PREDICTED_CVR] whatever the coefficients.
    /// No input validation: callers own sane ranges.
    pub fn predict(&self, inputs: &ScoringInputs) -> Percent {
        let c = &self.coefficients;
        let raw = c.intercept
            + c.speed * inputs.speed
            + c.trust * inputs.trust
            + c.urgency * inputs.urgency
            + c.review * inputs.review
            + c.visual * inputs.visual;
        // f64::min ignores NaN, so even a NaN sum stays inside the band.
        raw.min(MAX_PREDICTED_CVR).max(MIN_PREDICTED_CVR)
    }

    /// Sweep speed over [1, 6] s and trust over [0, 1], keeping the other
    /// inputs from `base`.
    pub fn sensitivity_grid(&self, base: &ScoringInputs) -> SensitivityGrid {
        let speeds = linspace(1.0, 6.0, SENSITIVITY_STEPS);
        let trusts = linspace(0.0, 1.0, SENSITIVITY_STEPS);
        let rates = speeds
            .iter()
            .map(|&speed| {
                trusts
                    .iter()
                    .map(|&trust| self.predict(&ScoringInputs { speed, trust, ..*base }))
                    .collect()
            })
            .collect();
        SensitivityGrid { speeds, trusts, rates }
    }
}

impl Default for ConversionModel {
    fn default() -> Self {
        Self::new(ScoringCoefficients::default())
    }
}

/// Score with the default coefficients.
pub fn predict_conversion_rate(
    speed: f64,
    trust: f64,
    urgency: f64,
    review: f64,
    visual: f64,
) -> Percent {
    ConversionModel::default().predict(&ScoringInputs { speed, trust, urgency, review, visual })
}

/// Actions that would lift the predicted rate for these slider positions.
pub fn recommendations(inputs: &ScoringInputs) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if inputs.speed > 2.5 {
        out.push(Recommendation::ReduceLandingSpeed);
    }
    if inputs.trust < 1.0 {
        out.push(Recommendation::AddTrustBadge);
    }
    if inputs.urgency == 0.0 {
        out.push(Recommendation::EnableUrgency);
    }
    if inputs.review < 4.5 {
        out.push(Recommendation::ImproveReviews);
    }
    out
}

/// Relative change from `current` to `predicted`, in percent.
/// `current` is the entity's own rate and is deliberately left unclamped.
pub fn improvement_percent(current: Percent, predicted: Percent) -> Option<f64> {
    if current == 0.0 {
        return None;
    }
    Some((predicted - current) / current * 100.0)
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
