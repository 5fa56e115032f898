/// Reward for a confident pick from the closed taxonomy.
pub fn calculate(primary: f64) -> f64 {
    if primary >= 0.8 {
        0.9
    } else if primary >= 0.6 {
        0.7
    } else {
        0.5
    }
}
