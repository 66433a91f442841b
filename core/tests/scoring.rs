//! Conversion-rate scoring model tests.

use kuliner_core::scoring_model::{
    improvement_percent, predict_conversion_rate, recommendations, ConversionModel,
    Recommendation, ScoringCoefficients, ScoringInputs, MAX_PREDICTED_CVR, MIN_PREDICTED_CVR,
};

fn inputs(speed: f64, trust: f64, urgency: f64, review: f64, visual: f64) -> ScoringInputs {
    ScoringInputs { speed, trust, urgency, review, visual }
}

#[test]
fn worked_example_scores_2_623() {
    // 2.1 - 0.42 + 0.35 + 0.18 + 0.189 + 0.224
    let rate = predict_conversion_rate(2.0, 1.0, 1.0, 4.5, 0.8);
    assert!((rate - 2.623).abs() < 1e-9, "Expected 2.623, got {rate}");
}

#[test]
fn prediction_never_leaves_band_for_extreme_inputs() {
    let extremes = [-1_000.0, -50.0, -1.0, 0.0, 0.5, 1.0, 5.0, 10.0, 100.0, 1_000.0];
    for &speed in &extremes {
        for &trust in &extremes {
            for &review in &extremes {
                for &visual in &[-10.0, 0.0, 1.0, 10.0] {
                    for &urgency in &[0.0, 1.0] {
                        let rate = predict_conversion_rate(speed, trust, urgency, review, visual);
                        assert!(
                            (MIN_PREDICTED_CVR..=MAX_PREDICTED_CVR).contains(&rate),
                            "rate {rate} out of band for speed={speed} trust={trust} review={review}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn slow_page_with_negative_review_clamps_to_floor() {
    let rate = predict_conversion_rate(100.0, 0.0, 0.0, -50.0, 0.0);
    assert_eq!(rate, MIN_PREDICTED_CVR);
}

#[test]
fn implausibly_fast_page_clamps_to_ceiling() {
    let rate = predict_conversion_rate(-100.0, 1.0, 1.0, 5.0, 1.0);
    assert_eq!(rate, MAX_PREDICTED_CVR);
}

#[test]
fn custom_coefficients_are_honoured() {
    let model = ConversionModel::new(ScoringCoefficients {
        intercept: 1.0,
        speed:     0.0,
        trust:     0.0,
        urgency:   0.0,
        review:    0.0,
        visual:    0.0,
    });
    assert_eq!(model.predict(&inputs(9.0, 1.0, 1.0, 5.0, 1.0)), 1.0);
}

#[test]
fn custom_coefficients_cannot_escape_band() {
    let steep = ConversionModel::new(ScoringCoefficients {
        intercept: 2.1,
        speed:     -0.21,
        trust:     100.0,
        urgency:   0.18,
        review:    0.042,
        visual:    0.28,
    });
    assert_eq!(steep.predict(&inputs(2.0, 1.0, 1.0, 4.5, 0.8)), MAX_PREDICTED_CVR);
    assert_eq!(steep.predict(&inputs(2.0, -1.0, 1.0, 4.5, 0.8)), MIN_PREDICTED_CVR);
}

#[test]
fn recommendations_cover_every_weak_factor() {
    let recs = recommendations(&inputs(3.0, 0.5, 0.0, 4.0, 0.9));
    assert_eq!(
        recs,
        vec![
            Recommendation::ReduceLandingSpeed,
            Recommendation::AddTrustBadge,
            Recommendation::EnableUrgency,
            Recommendation::ImproveReviews,
        ]
    );
}

#[test]
fn strong_page_needs_no_recommendations() {
    // Thresholds are exclusive: 2.5 s and a 4.5 review pass.
    assert!(recommendations(&inputs(2.5, 1.0, 1.0, 4.5, 0.8)).is_empty());
}

#[test]
fn improvement_is_relative_to_unclamped_current_rate() {
    let delta = improvement_percent(2.8, 2.623).unwrap();
    assert!((delta - (2.623 - 2.8) / 2.8 * 100.0).abs() < 1e-12);
    assert!(delta < 0.0);

    // Current rates outside the prediction band are compared as-is.
    let above_band = improvement_percent(6.0, 5.0).unwrap();
    assert!((above_band + 100.0 / 6.0).abs() < 1e-12);

    assert_eq!(improvement_percent(0.0, 2.0), None);
}

#[test]
fn sensitivity_grid_is_20_by_20_and_monotone() {
    let model = ConversionModel::default();
    let grid = model.sensitivity_grid(&inputs(2.0, 1.0, 1.0, 4.5, 0.8));

    assert_eq!(grid.speeds.len(), 20);
    assert_eq!(grid.trusts.len(), 20);
    assert_eq!(grid.rates.len(), 20);
    assert!(grid.rates.iter().all(|row| row.len() == 20));

    assert_eq!(grid.speeds[0], 1.0);
    assert_eq!(grid.speeds[19], 6.0);
    assert_eq!(grid.trusts[0], 0.0);
    assert_eq!(grid.trusts[19], 1.0);

    for s in 1..20 {
        for t in 0..20 {
            assert!(grid.rates[s][t] <= grid.rates[s - 1][t], "slower page scored higher");
        }
    }
    for row in &grid.rates {
        for t in 1..20 {
            assert!(row[t] >= row[t - 1], "more trust scored lower");
        }
    }
}
