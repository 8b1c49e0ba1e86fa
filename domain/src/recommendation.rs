//! Reading the synthesizer's loosely structured recommendation.
//!
//! The `X/10` confidence convention is only a prompting convention; these
//! helpers tolerate its absence.

/// Confidence assumed when the recommendation carries no `X/10` score
pub const DEFAULT_CONFIDENCE: f32 = 7.0;

/// Extract the first `X/10` score (decimals and spaces around `/` allowed),
/// clamped to `0..=10`.
pub fn confidence_score(text: &str) -> f32 {
    find_score(text)
        .map(|score| score.clamp(0.0, 10.0))
        .unwrap_or(DEFAULT_CONFIDENCE)
}

fn find_score(text: &str) -> Option<f32> {
    for (slash, _) in text.match_indices('/') {
        let after = text[slash + 1..].trim_start();
        if !after.starts_with("10") {
            continue;
        }
        let before = text[..slash].trim_end();
        if let Some(number) = trailing_number(before) {
            if let Ok(value) = number.parse::<f32>() {
                return Some(value);
            }
        }
    }
    None
}

/// The longest suffix of `s` shaped like `digits` or `digits.digits`.
fn trailing_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() {
        return None;
    }
    if start >= 2 && bytes[start - 1] == b'.' && bytes[start - 2].is_ascii_digit() {
        let mut int_start = start - 1;
        while int_start > 0 && bytes[int_start - 1].is_ascii_digit() {
            int_start -= 1;
        }
        return Some(&s[int_start..]);
    }
    Some(&s[start..])
}
