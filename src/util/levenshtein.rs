//! Levenshtein distance over Unicode scalar values.
//!
//! Distances count `char`s, not bytes, so `"café"` and `"cafe"` are one
//! substitution apart. No case folding or normalization is applied.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions or substitutions) required to change one string into the other.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance_chars(&s1_chars, &s2_chars)
}

fn distance_chars(s1: &[char], s2: &[char]) -> usize {
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    let mut prev_row: Vec<usize> = (0..=s2.len()).collect();
    let mut curr_row = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance_chars_threshold(&s1_chars, &s2_chars, threshold)
}

/// Threshold-bounded distance on pre-split character slices.
pub fn distance_chars_threshold(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let (len1, len2) = (s1.len(), s2.len());

    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        let distance = len1.max(len2);
        return (distance <= threshold).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // No cell can decrease in later rows.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("bat", "cot"), 2);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("ŋa", "na"), 1);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let words = ["cat", "cart", "act", "", "tac"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
            }
        }
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_threshold("cat", "cat", 0), Some(0));
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "", 1), Some(0));
        assert_eq!(levenshtein_distance_threshold("cat", "bat", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("bat", "cot", 1), None);
    }

    #[test]
    fn test_threshold_agrees_with_full_distance() {
        let words = ["cat", "bat", "cot", "coat", "act", "", "tact"];
        for a in words {
            for b in words {
                let full = levenshtein_distance(a, b);
                let bounded = levenshtein_distance_threshold(a, b, 2);
                assert_eq!(bounded, (full <= 2).then_some(full), "{a} vs {b}");
            }
        }
    }
}
