/// Fraction of extracted keywords that the candidate accounts for.
pub fn calculate(matched: usize, total: usize) -> f64 {
    (matched as f64 / total.max(1) as f64).clamp(0.0, 1.0)
}
