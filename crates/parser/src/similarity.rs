//! Fuzzy string similarity
//!
//! Implements the standard "ratio" score used for catalog matching: twice
//! the number of matching characters in an optimal alignment, divided by
//! the combined length of both strings, times 100. Equivalent to
//! `100 * (1 - indel_distance / (len_a + len_b))`.
//!
//! Scoring is over chars, so Devanagari aliases compare the same way Latin
//! ones do. Case folding is the caller's job.

/// Similarity ratio in [0.0, 100.0]; 100 means identical
pub fn ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() && b_chars.is_empty() {
        return 100.0;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    // Two-row LCS; matching chars in an optimal alignment = LCS length
    let mut prev: Vec<usize> = vec![0; b_chars.len() + 1];
    let mut curr: Vec<usize> = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        for j in 1..=b_chars.len() {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let matches = prev[b_chars.len()];
    200.0 * matches as f64 / (a_chars.len() + b_chars.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(ratio("doodh", "doodh"), 100.0);
        assert_eq!(ratio("", ""), 100.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
        assert_eq!(ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_known_scores() {
        // LCS("atta", "aata") = "ata" -> 2*3/8
        assert_eq!(ratio("atta", "aata"), 75.0);
        // LCS("abcd", "bcde") = "bcd" -> 2*3/8
        assert_eq!(ratio("abcd", "bcde"), 75.0);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(ratio("biskut", "biscuit"), ratio("biscuit", "biskut"));
    }

    #[test]
    fn test_devanagari_chars_score_per_char() {
        assert_eq!(ratio("दूध", "दूध"), 100.0);
        assert!(ratio("दूध", "दही") < 100.0);
    }

    #[test]
    fn test_case_sensitive_by_design() {
        assert!(ratio("Milk", "milk") < 100.0);
    }
}
