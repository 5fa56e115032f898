use garage_core::constants::HISTORICAL_SIGNAL_TOP_K;

/// Position-decayed mean of the top historical similarity scores.
///
/// Rank `r` (1-based) carries weight `1/r`. Returns `no_match` when empty.
pub fn calculate(scores: &[f64], no_match: f64) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (i, score) in scores.iter().take(HISTORICAL_SIGNAL_TOP_K).enumerate() {
        let weight = 1.0 / (i as f64 + 1.0);
        weighted += score.clamp(0.0, 1.0) * weight;
        total += weight;
    }
    if total > 0.0 {
        weighted / total
    } else {
        no_match
    }
}
