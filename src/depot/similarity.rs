//! Normalized string similarity for the "similar files" fallback.
//!
//! The ratio is `2 * LCS(a, b) / (|a| + |b|)` over case-folded characters:
//! deterministic, symmetric, and `ratio(a, a) == 1.0`. Suggestion ordering is
//! user-visible, so the exact values are pinned by the golden tests below.

/// Case-insensitive similarity ratio in `[0.0, 1.0]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let lcs = lcs_len(&a, &b);
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Longest common subsequence length, single-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut prev_diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let cur = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = cur;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_strings_score_one() {
        assert_close(ratio("constitution.pdf", "constitution.pdf"), 1.0);
        assert_close(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_close(ratio("abc", "xyz"), 0.0);
        assert_close(ratio("", "anything"), 0.0);
    }

    #[test]
    fn symmetric() {
        let forward = ratio("law101.pdf", "law");
        let backward = ratio("law", "law101.pdf");
        assert_close(forward, backward);
    }

    #[test]
    fn case_insensitive() {
        assert_close(ratio("LAW101.PDF", "law101.pdf"), 1.0);
    }

    // Golden values: 2 * LCS / (|a| + |b|).
    #[test]
    fn golden_values() {
        // LCS("constitution", "constitution.pdf") = 12; 24 / 28
        assert_close(ratio("constitution", "constitution.pdf"), 24.0 / 28.0);
        // LCS("law", "law101.pdf") = 3; 6 / 13
        assert_close(ratio("law", "law101.pdf"), 6.0 / 13.0);
        // LCS("kitten", "sitting") = 4 ("ittn"); 8 / 13
        assert_close(ratio("kitten", "sitting"), 8.0 / 13.0);
    }
}
