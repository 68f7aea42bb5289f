/// Piecewise mapping from a dampened relative-risk score onto the 1-100 display scale.
///
/// `[0, 2]` spans `[1, 25]`, `(2, 10]` spans `(25, 50]`, and anything above 10 climbs
/// toward 100 over the next 40 points before it is capped.
pub fn normalize_score(score: f64) -> f64 {
    if score <= 2.0 {
        (score * 12.5).max(1.0)
    } else if score <= 10.0 {
        25.0 + ((score - 2.0) / 8.0) * 25.0
    } else {
        (50.0 + ((score - 10.0) / 40.0) * 50.0).min(100.0)
    }
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
