//! Custom assertions for score verification

/// Assert that two scores are equal within 1e-10
pub fn assert_score_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "Expected score {expected}, got {actual}"
    );
}

/// Assert that a score is a valid similarity value
pub fn assert_unit_range(score: f64) {
    assert!(
        (0.0..=1.0).contains(&score),
        "Expected score in [0, 1], got {score}"
    );
}
