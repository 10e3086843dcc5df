use std::env;

use business::domain::filter::fuzzy::FuzzyMatcher;

/// Tolerance of the fuzzy name filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    pub threshold: f64,
    pub distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: FuzzyMatcher::DEFAULT_THRESHOLD,
            distance: FuzzyMatcher::DEFAULT_DISTANCE,
        }
    }
}

impl MatcherConfig {
    /// Load matcher configuration from environment variables
    ///
    /// Environment variables:
    /// - FUZZY_THRESHOLD: highest accepted match score, 0.0 to 1.0 (default: 0.6)
    /// - FUZZY_DISTANCE: how far into a name a match may start (default: 100)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("FUZZY_THRESHOLD").ok(),
            env::var("FUZZY_DISTANCE").ok(),
        )
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_vars(threshold: Option<String>, distance: Option<String>) -> Self {
        let defaults = Self::default();

        let threshold = match threshold {
            Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid FUZZY_THRESHOLD, using default");
                defaults.threshold
            }),
            None => defaults.threshold,
        };

        let distance = match distance {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid FUZZY_DISTANCE, using default");
                defaults.distance
            }),
            None => defaults.distance,
        };

        Self {
            threshold,
            distance,
        }
    }

    pub fn build(&self) -> FuzzyMatcher {
        FuzzyMatcher::new(self.threshold, self.distance)
    }
}
