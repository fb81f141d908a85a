//! Similarity ratio used by the fuzzy passes.
//!
//! The ratio is the normalized indel similarity on a 0-100 scale:
//! `100 * 2 * lcs(a, b) / (len(a) + len(b))`, where `lcs` is the length of
//! the longest common subsequence. Comparisons involving an empty string
//! score 0.

/// Similarity between `a` and `b`, rounded to the nearest integer.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let common = longest_common_subsequence(&a, &b);
    let total = a.len() + b.len();
    let score = (200.0 * common as f64 / total as f64).round();
    score.clamp(0.0, 100.0) as u8
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
