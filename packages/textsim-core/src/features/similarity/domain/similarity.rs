//! Normalized Similarity Score
//!
//! similarity(A, B) = 1 - distance(A, B) / max(|A|, |B|)
//!
//! Equal inputs short-circuit to 1.0, which also covers the empty/empty case
//! where the denominator would be zero.

use super::edit_distance::damerau_levenshtein;

/// Similarity of two sequences in [0.0, 1.0]
///
/// - 1.0 = identical
/// - 0.0 = every position must be edited
pub fn sequence_similarity<T>(seq_a: &[T], seq_b: &[T]) -> f64
where
    T: Eq,
{
    scored_distance(seq_a, seq_b).0
}

/// Score and edit distance together, so callers needing both run the DP once
pub(crate) fn scored_distance<T>(seq_a: &[T], seq_b: &[T]) -> (f64, usize)
where
    T: Eq,
{
    if seq_a == seq_b {
        return (1.0, 0);
    }

    let max_len = seq_a.len().max(seq_b.len());
    let distance = damerau_levenshtein(seq_a, seq_b);

    (1.0 - (distance as f64 / max_len as f64), distance)
}

/// Similarity of two strings, lengths counted in `char`s
///
/// # Example
/// ```
/// use textsim_core::features::similarity::similarity;
///
/// assert_eq!(similarity("hello", "hello"), 1.0);
/// assert_eq!(similarity("hello", "hell"), 0.8);
/// ```
pub fn similarity(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    sequence_similarity(&s1_chars, &s2_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("hello", "hello"), 1.0);
    }

    #[test]
    fn test_similarity_both_empty() {
        // Would divide by zero without the equality short-circuit
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(sequence_similarity::<u8>(&[], &[]), 1.0);
    }

    #[test]
    fn test_similarity_one_empty() {
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_similarity_partial() {
        // distance 1, max_len 5
        assert_eq!(similarity("hello", "hell"), 0.8);
    }

    #[test]
    fn test_similarity_transposition() {
        // "ab" -> "ba" is one edit over length 2
        assert_eq!(similarity("ab", "ba"), 0.5);
        assert!((similarity("recieve", "receive") - (1.0 - 1.0 / 7.0)).abs() < 1e-10);
    }

    #[test]
    fn test_similarity_boundary() {
        // distance 4, max_len 4
        assert_eq!(similarity("aaaa", "bbbb"), 0.0);
    }

    #[test]
    fn test_similarity_counts_chars_not_bytes() {
        // 'é' is two bytes; one substitution over four chars
        assert_eq!(similarity("café", "cafe"), 0.75);
    }

    #[test]
    fn test_similarity_symmetry() {
        assert_eq!(similarity("kitten", "sitting"), similarity("sitting", "kitten"));
    }

    #[test]
    fn test_scored_distance_matches_parts() {
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();

        let (score, distance) = scored_distance(&a, &b);
        assert_eq!(distance, damerau_levenshtein(&a, &b));
        assert_eq!(score, sequence_similarity(&a, &b));
        assert_eq!(scored_distance(&a, &a), (1.0, 0));
    }

    #[test]
    fn test_similarity_is_case_sensitive() {
        assert_eq!(similarity("Hello", "hello"), 0.8);
    }
}
