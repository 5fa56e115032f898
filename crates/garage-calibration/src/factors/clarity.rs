/// Input clarity by complaint length in characters.
///
/// Very short complaints are vague; very long ones tend to ramble.
pub fn calculate(input_chars: usize) -> f64 {
    match input_chars {
        0..=9 => 0.3,
        10..=29 => 0.6,
        30..=99 => 0.85,
        _ => 0.75,
    }
}
