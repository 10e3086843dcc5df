//! Typo-tolerant name matching.
//!
//! Each call compares one candidate against one query directly; there is no
//! index. The query is aligned against the best-fitting substring of the
//! candidate with a bounded edit distance (insertions, deletions,
//! substitutions and adjacent transpositions each cost one error).
//!
//! A match is scored as
//!
//! ```text
//! errors / query_len + start_offset / distance
//! ```
//!
//! and accepted when the score does not exceed the threshold. Both sides are
//! lowercased first. A blank query matches every candidate.

use super::matcher::NameMatcher;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
    distance: usize,
}

impl FuzzyMatcher {
    pub const DEFAULT_THRESHOLD: f64 = 0.6;
    pub const DEFAULT_DISTANCE: usize = 100;

    /// `threshold` is clamped to `0.0..=1.0`; `distance` to at least 1.
    pub fn new(threshold: f64, distance: usize) -> Self {
        let threshold = if threshold.is_nan() {
            Self::DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            distance: distance.max(1),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Best score of `query` against `candidate`; 0.0 is a perfect match.
    pub fn score(&self, candidate: &str, query: &str) -> f64 {
        let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
        if pattern.is_empty() {
            return 0.0;
        }
        let text: Vec<char> = candidate.to_lowercase().chars().collect();

        let m = pattern.len();
        let n = text.len();

        // Scaled score: errors / m + start / distance, times m * distance.
        // The start of an alignment never changes once chosen and errors only
        // grow, so keeping the lowest-scoring alignment per cell is exact.
        let weight = |(errors, start): (usize, usize)| {
            errors as u128 * self.distance as u128 + start as u128 * m as u128
        };
        let cheaper = |a: (usize, usize), b: (usize, usize)| {
            if weight(b) < weight(a) {
                b
            } else {
                a
            }
        };

        // (errors, start offset) of the cheapest alignment of pattern[..i]
        // ending right before text[j]. Rows i - 2, i - 1 and i.
        let mut before: Vec<(usize, usize)> = vec![(0, 0); n + 1];
        let mut previous: Vec<(usize, usize)> = (0..=n).map(|j| (0, j)).collect();
        let mut current: Vec<(usize, usize)> = vec![(0, 0); n + 1];

        for i in 1..=m {
            current[0] = (i, 0);
            for j in 1..=n {
                let (diag_errors, diag_start) = previous[j - 1];
                let substitution = (
                    diag_errors + usize::from(pattern[i - 1] != text[j - 1]),
                    diag_start,
                );
                let (up_errors, up_start) = previous[j];
                let (left_errors, left_start) = current[j - 1];

                let mut best = cheaper(
                    cheaper(substitution, (up_errors + 1, up_start)),
                    (left_errors + 1, left_start),
                );

                if i > 1
                    && j > 1
                    && pattern[i - 1] == text[j - 2]
                    && pattern[i - 2] == text[j - 1]
                {
                    let (swap_errors, swap_start) = before[j - 2];
                    best = cheaper(best, (swap_errors + 1, swap_start));
                }

                current[j] = best;
            }
            std::mem::swap(&mut before, &mut previous);
            std::mem::swap(&mut previous, &mut current);
        }

        previous
            .iter()
            .map(|&(errors, start)| {
                errors as f64 / m as f64 + start as f64 / self.distance as f64
            })
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_DISTANCE)
    }
}

impl NameMatcher for FuzzyMatcher {
    fn matches(&self, candidate: &str, query: &str) -> bool {
        self.score(candidate, query) <= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matcher() -> FuzzyMatcher {
        FuzzyMatcher::default()
    }

    #[test]
    fn should_match_exact_name() {
        assert!(matcher().matches("Milk", "Milk"));
        assert_eq!(matcher().score("Milk", "Milk"), 0.0);
    }

    #[test]
    fn should_ignore_case() {
        assert!(matcher().matches("Milk", "milk"));
        assert!(matcher().matches("milk", "MILK"));
    }

    #[test]
    fn should_match_substring() {
        assert!(matcher().matches("Chocolate Milk", "milk"));
        assert!(matcher().matches("Bread", "rea"));
    }

    #[test]
    fn should_tolerate_missing_character() {
        assert!(matcher().matches("Chocolate", "choclate"));
    }

    #[test]
    fn should_tolerate_single_typo() {
        assert!(matcher().matches("Chocolate", "chocolste"));
    }

    #[test]
    fn should_tolerate_transposition() {
        assert!(matcher().matches("Milk", "mlik"));
        assert_eq!(matcher().score("Milk", "mlik"), 0.25);
    }

    #[test]
    fn should_reject_dissimilar_query() {
        assert!(!matcher().matches("Chocolate", "xyz123"));
        assert!(!matcher().matches("Bread", "zzzz"));
    }

    #[test]
    fn should_match_everything_when_query_empty() {
        assert!(matcher().matches("Bread", ""));
        assert!(matcher().matches("Bread", "   "));
        assert!(matcher().matches("", ""));
    }

    #[test]
    fn should_not_match_empty_candidate_with_query() {
        assert!(!matcher().matches("", "milk"));
    }

    #[test]
    fn should_penalize_late_matches() {
        let early = matcher().score("milk chocolate", "milk");
        let late = matcher().score("chocolate milk", "milk");

        assert!(early < late);
        assert!((late - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_late_match_when_distance_small() {
        let strict = FuzzyMatcher::new(0.6, 10);

        assert!(!strict.matches("Extra virgin olive oil", "oil"));
        assert!(matcher().matches("Extra virgin olive oil", "oil"));
    }

    #[test]
    fn should_handle_non_ascii_names() {
        assert!(matcher().matches("Şarküteri", "şarküteri"));
        assert!(matcher().matches("Fırın", "firin"));
    }

    #[test]
    fn should_only_accept_exact_when_threshold_zero() {
        let exact = FuzzyMatcher::new(0.0, 100);

        assert!(exact.matches("Milk", "milk"));
        assert!(!exact.matches("Milk", "mlk"));
    }

    #[test]
    fn should_clamp_configuration() {
        let m = FuzzyMatcher::new(4.0, 0);

        assert_eq!(m.threshold(), 1.0);
        assert_eq!(m.distance(), 1);
        assert_eq!(
            FuzzyMatcher::new(f64::NAN, 100).threshold(),
            FuzzyMatcher::DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn should_match_inside_very_long_names() {
        let long_name = format!("{}milk", "x".repeat(20_000));
        let matcher = FuzzyMatcher::new(0.6, 1_000_000);

        assert!(matcher.matches(&long_name, "mlik"));
        assert!(!matcher.matches(&long_name, "bread"));
    }

    #[test]
    fn should_prefer_earlier_start_when_it_scores_lower() {
        // "abcx" at 0 costs one error; "abcd" at 5 costs none but starts
        // five characters late, which outweighs it at distance 2.
        let matcher = FuzzyMatcher::new(1.0, 2);

        assert_eq!(matcher.score("abcxqabcd", "abcd"), 0.25);
    }

    // Optimal string alignment distance between two whole strings.
    fn osa(a: &[char], b: &[char]) -> usize {
        let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=b.len() {
            d[0][j] = j;
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                d[i][j] = (d[i - 1][j] + 1)
                    .min(d[i][j - 1] + 1)
                    .min(d[i - 1][j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
                }
            }
        }
        d[a.len()][b.len()]
    }

    // Every substring of the candidate, scored on its own.
    fn exhaustive_score(candidate: &str, query: &str, distance: usize) -> f64 {
        let pattern: Vec<char> = query.chars().collect();
        let text: Vec<char> = candidate.chars().collect();
        let mut best = f64::INFINITY;
        for start in 0..=text.len() {
            for end in start..=text.len() {
                let errors = osa(&pattern, &text[start..end]);
                let score =
                    errors as f64 / pattern.len() as f64 + start as f64 / distance as f64;
                best = best.min(score);
            }
        }
        best
    }

    proptest! {
        #[test]
        fn should_score_like_best_substring_alignment(
            candidate in "[abc]{0,8}",
            query in "[abc]{1,5}",
            distance in 1usize..12,
        ) {
            let matcher = FuzzyMatcher::new(1.0, distance);

            let score = matcher.score(&candidate, &query);
            let expected = exhaustive_score(&candidate, &query, distance);

            prop_assert!((score - expected).abs() < 1e-9);
        }
    }
}
