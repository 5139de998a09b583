//! Approximate title matching
//!
//! Ratcliff/Obershelp similarity: twice the total length of all matching
//! blocks divided by the combined length of the two strings. The same metric
//! backs the original application's close-match lookup, with the cutoff made
//! an explicit constant and the tie-break pinned to catalog order.

use crate::error::{AppError, AppResult};

/// Minimum similarity ratio a candidate title must reach to count as a match
pub const MATCH_CUTOFF: f64 = 0.6;

/// Similarity ratio between two strings in [0, 1]
///
/// Case-sensitive; callers wanting case-insensitive matching lowercase both
/// sides first. Two empty strings are considered identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let matched = matching_total(a, b);
    2.0 * matched as f64 / (a.len() + b.len()) as f64
}

/// Total length of all matching blocks: the longest common block plus,
/// recursively, the matches to its left and right.
fn matching_total(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_total(&a[..i], &b[..j]) + matching_total(&a[i + size..], &b[j + size..])
}

/// Finds the longest block of characters common to `a` and `b`, returning
/// (start in a, start in b, length). Among equally long blocks the earliest
/// start in `a`, then in `b`, wins.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j] = length of the common block ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len()];
    for (i, ca) in a.iter().enumerate() {
        let mut updated = vec![0usize; b.len()];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = if j == 0 { 1 } else { lengths[j - 1] + 1 };
                updated[j] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        lengths = updated;
    }
    best
}

/// Finds the known title closest to `query`, or `NoMatch` if nothing clears
/// the cutoff. Matching is case-insensitive; ties between equally good
/// candidates resolve to the first one in catalog order.
pub fn find_closest_title<'a, I>(query: &str, titles: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    let mut best: Option<(&str, f64)> = None;

    for title in titles {
        let candidate: Vec<char> = title.to_lowercase().chars().collect();
        let score = ratio_chars(&needle, &candidate);
        if score >= MATCH_CUTOFF && best.map_or(true, |(_, incumbent)| score > incumbent) {
            best = Some((title, score));
        }
    }

    match best {
        Some((title, _)) => Ok(title.to_string()),
        None => Err(AppError::NoMatch(query.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_ratio_identical_strings() {
        assert!((similarity_ratio("inception", "inception") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ratio_disjoint_strings() {
        assert!(similarity_ratio("abc", "xyz").abs() < EPSILON);
    }

    #[test]
    fn test_ratio_partial_overlap() {
        // "abcd" vs "bcde": matching block "bcd" -> 2*3/8
        assert!((similarity_ratio("abcd", "bcde") - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert!((similarity_ratio("", "") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert!(similarity_ratio("", "abc").abs() < EPSILON);
    }

    #[test]
    fn test_find_exact_title() {
        let titles = vec!["Inception", "The Matrix", "Interstellar"];
        let matched = find_closest_title("The Matrix", titles.iter().copied()).unwrap();
        assert_eq!(matched, "The Matrix");
    }

    #[test]
    fn test_find_title_with_typo() {
        let titles = vec!["Inception", "The Matrix", "Interstellar"];
        let matched = find_closest_title("Inceptoin", titles.iter().copied()).unwrap();
        assert_eq!(matched, "Inception");
    }

    #[test]
    fn test_find_title_is_case_insensitive() {
        let titles = vec!["Inception", "The Matrix"];
        let matched = find_closest_title("the matrix", titles.iter().copied()).unwrap();
        assert_eq!(matched, "The Matrix");
    }

    #[test]
    fn test_unrelated_query_yields_no_match() {
        let titles = vec!["Inception", "The Matrix", "Interstellar"];
        let err = find_closest_title("zzqqxxwwvv", titles.iter().copied()).unwrap_err();
        assert!(matches!(err, AppError::NoMatch(_)));
    }

    #[test]
    fn test_empty_query_yields_no_match() {
        let titles = vec!["Inception"];
        let err = find_closest_title("", titles.iter().copied()).unwrap_err();
        assert!(matches!(err, AppError::NoMatch(_)));
    }

    #[test]
    fn test_tie_resolves_to_first_in_catalog_order() {
        // Both candidates score identically against the query
        let titles = vec!["abcde", "abcdf"];
        let matched = find_closest_title("abcd", titles.iter().copied()).unwrap();
        assert_eq!(matched, "abcde");
    }
}
