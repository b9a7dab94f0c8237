//! Suggestion UseCase Implementation
//!
//! Scores a query against a list of candidates and keeps the closest ones,
//! for "did you mean" messages. Every candidate is compared pairwise; there
//! is no index.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SuggestConfig;
use crate::features::similarity::domain::scored_distance;
use crate::features::text_format::domain::join;

/// Default minimum score for a candidate to be suggested
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default maximum number of suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Upper bound on the number of suggestions kept per query
pub const MAX_SUGGESTIONS_LIMIT: usize = 1000;

/// One scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub candidate: String,
    pub score: f64,
    pub distance: usize,
}

/// Output from a ranking pass
#[derive(Debug, Clone)]
pub struct SuggestOutput {
    pub suggestions: Vec<Suggestion>,
    pub stats: SuggestStats,
}

/// Ranking statistics
#[derive(Debug, Clone, Default)]
pub struct SuggestStats {
    pub total_candidates: usize,
    pub above_threshold: usize,
    pub execution_time_us: u64,
}

/// Candidate ranking over the similarity score
///
/// # Example
/// ```
/// use textsim_core::features::similarity::Suggester;
///
/// let commands = ["build", "test", "run", "clean"];
/// let best = Suggester::new().best_match("biuld", &commands).unwrap();
/// assert_eq!(best.candidate, "build");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggester {
    threshold: f64,
    max_suggestions: usize,
    case_insensitive: bool,
}

impl Suggester {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            case_insensitive: true,
        }
    }

    /// Build from a suggestion config; out-of-range values are clamped
    pub fn from_config(config: &SuggestConfig) -> Self {
        Self::new()
            .threshold(config.threshold)
            .max_suggestions(config.max_suggestions)
            .case_insensitive(config.case_insensitive)
    }

    /// Minimum score, clamped to [0.0, 1.0]; NaN falls back to the default
    pub fn threshold(mut self, threshold: f64) -> Self {
        if threshold.is_nan() {
            warn!("suggest: threshold NaN replaced by {}", DEFAULT_THRESHOLD);
            self.threshold = DEFAULT_THRESHOLD;
            return self;
        }

        let clamped = threshold.clamp(0.0, 1.0);
        if clamped != threshold {
            warn!("suggest: threshold {} clamped to {}", threshold, clamped);
        }
        self.threshold = clamped;
        self
    }

    /// Maximum results, clamped to [1, MAX_SUGGESTIONS_LIMIT]
    pub fn max_suggestions(mut self, max: usize) -> Self {
        let clamped = max.clamp(1, MAX_SUGGESTIONS_LIMIT);
        if clamped != max {
            warn!("suggest: max_suggestions {} clamped to {}", max, clamped);
        }
        self.max_suggestions = clamped;
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Rank candidates: score desc, then distance asc, then input order
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> SuggestOutput
    where
        S: AsRef<str> + Sync,
    {
        let start = std::time::Instant::now();

        let query_chars = self.normalize(query);

        #[cfg(feature = "parallel")]
        let scored_iter = candidates.par_iter().enumerate();
        #[cfg(not(feature = "parallel"))]
        let scored_iter = candidates.iter().enumerate();

        let mut scored: Vec<(usize, Suggestion)> = scored_iter
            .map(|(idx, candidate)| (idx, self.score(&query_chars, candidate.as_ref())))
            .filter(|(_, suggestion)| suggestion.score >= self.threshold)
            .collect();

        let above_threshold = scored.len();

        scored.sort_by(|(idx_a, a), (idx_b, b)| {
            b.score
                .total_cmp(&a.score)
                .then(a.distance.cmp(&b.distance))
                .then(idx_a.cmp(idx_b))
        });
        scored.truncate(self.max_suggestions);

        let suggestions: Vec<Suggestion> = scored.into_iter().map(|(_, s)| s).collect();

        let stats = SuggestStats {
            total_candidates: candidates.len(),
            above_threshold,
            execution_time_us: start.elapsed().as_micros() as u64,
        };

        debug!(
            "suggest: '{}' scored {} candidates, {} above {:.2}, kept {}",
            query,
            stats.total_candidates,
            stats.above_threshold,
            self.threshold,
            suggestions.len()
        );

        SuggestOutput { suggestions, stats }
    }

    /// Ranked suggestions only
    pub fn suggest<S>(&self, query: &str, candidates: &[S]) -> Vec<Suggestion>
    where
        S: AsRef<str> + Sync,
    {
        self.rank(query, candidates).suggestions
    }

    /// Closest candidate above the threshold
    pub fn best_match<S>(&self, query: &str, candidates: &[S]) -> Option<Suggestion>
    where
        S: AsRef<str> + Sync,
    {
        self.max_suggestions(1).suggest(query, candidates).into_iter().next()
    }

    /// "Did you mean 'x'?" / "Did you mean 'x', 'y' or 'z'?"
    pub fn did_you_mean<S>(&self, query: &str, candidates: &[S]) -> Option<String>
    where
        S: AsRef<str> + Sync,
    {
        let quoted: Vec<String> = self
            .suggest(query, candidates)
            .iter()
            .map(|s| format!("'{}'", s.candidate))
            .collect();

        if quoted.is_empty() {
            return None;
        }

        Some(format!("Did you mean {}?", join(&quoted, ", ", " or ")))
    }

    fn normalize(&self, text: &str) -> Vec<char> {
        if self.case_insensitive {
            text.to_lowercase().chars().collect()
        } else {
            text.chars().collect()
        }
    }

    fn score(&self, query_chars: &[char], candidate: &str) -> Suggestion {
        let candidate_chars = self.normalize(candidate);

        let (score, distance) = scored_distance(query_chars, &candidate_chars);

        Suggestion {
            candidate: candidate.to_string(),
            score,
            distance,
        }
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: [&str; 6] = ["install", "uninstall", "update", "upgrade", "build", "test"];

    #[test]
    fn test_best_match_typo() {
        let best = Suggester::new().best_match("instal", &COMMANDS).unwrap();
        assert_eq!(best.candidate, "install");
        assert_eq!(best.distance, 1);
    }

    #[test]
    fn test_best_match_transposition() {
        let best = Suggester::new().best_match("biuld", &COMMANDS).unwrap();
        assert_eq!(best.candidate, "build");
        assert_eq!(best.score, 0.8);
    }

    #[test]
    fn test_no_match_below_threshold() {
        assert!(Suggester::new().best_match("xyz", &COMMANDS).is_none());
        assert!(Suggester::new().did_you_mean("xyz", &COMMANDS).is_none());
    }

    #[test]
    fn test_exact_match_scores_one() {
        let best = Suggester::new().best_match("test", &COMMANDS).unwrap();
        assert_eq!(best.candidate, "test");
        assert_eq!(best.score, 1.0);
        assert_eq!(best.distance, 0);
    }

    #[test]
    fn test_case_insensitive_default() {
        let best = Suggester::new().best_match("BUILD", &COMMANDS).unwrap();
        assert_eq!(best.score, 1.0);

        let strict = Suggester::new().case_insensitive(false);
        assert!(strict.best_match("BUILD", &COMMANDS).is_none());
    }

    #[test]
    fn test_ranking_order() {
        let suggestions = Suggester::new().threshold(0.5).suggest("updat", &COMMANDS);

        assert_eq!(suggestions[0].candidate, "update");
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = ["cat", "bat", "hat"];
        let suggestions = Suggester::new().threshold(0.0).suggest("mat", &candidates);

        let names: Vec<&str> = suggestions.iter().map(|s| s.candidate.as_str()).collect();
        assert_eq!(names, vec!["cat", "bat", "hat"]);
    }

    #[test]
    fn test_max_suggestions_truncates() {
        let suggestions = Suggester::new()
            .threshold(0.0)
            .max_suggestions(2)
            .suggest("a", &COMMANDS);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Suggester::new().threshold(4.0), Suggester::new().threshold(1.0));
        assert_eq!(Suggester::new().threshold(-1.0), Suggester::new().threshold(0.0));
    }

    #[test]
    fn test_nan_threshold_falls_back_to_default() {
        let suggester = Suggester::new().threshold(f64::NAN);
        assert_eq!(suggester, Suggester::new());

        let best = suggester.best_match("build", &["build"]).unwrap();
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_infinite_threshold_is_clamped() {
        assert_eq!(Suggester::new().threshold(f64::INFINITY), Suggester::new().threshold(1.0));
        assert_eq!(Suggester::new().threshold(f64::NEG_INFINITY), Suggester::new().threshold(0.0));
    }

    #[test]
    fn test_zero_max_suggestions_keeps_one() {
        let suggester = Suggester::new().max_suggestions(0);
        assert_eq!(suggester, Suggester::new().max_suggestions(1));

        let message = suggester.did_you_mean("biuld", &["build"]);
        assert_eq!(message.as_deref(), Some("Did you mean 'build'?"));
    }

    #[test]
    fn test_max_suggestions_capped() {
        let capped = Suggester::new().max_suggestions(usize::MAX);
        assert_eq!(capped, Suggester::new().max_suggestions(MAX_SUGGESTIONS_LIMIT));
    }

    #[test]
    fn test_from_config_clamps_unvalidated_values() {
        let config = SuggestConfig {
            threshold: f64::NAN,
            max_suggestions: 0,
            case_insensitive: false,
        };
        let suggester = Suggester::from_config(&config);

        assert_eq!(
            suggester,
            Suggester::new().max_suggestions(1).case_insensitive(false)
        );
    }

    #[test]
    fn test_score_agrees_with_similarity() {
        use crate::features::similarity::domain::similarity;

        let suggestions = Suggester::new()
            .threshold(0.0)
            .case_insensitive(false)
            .max_suggestions(COMMANDS.len())
            .suggest("instal", &COMMANDS);

        for suggestion in &suggestions {
            assert_eq!(suggestion.score, similarity("instal", &suggestion.candidate));
        }
    }

    #[test]
    fn test_did_you_mean_single() {
        let message = Suggester::new().did_you_mean("tset", &COMMANDS);
        assert_eq!(message.as_deref(), Some("Did you mean 'test'?"));
    }

    #[test]
    fn test_did_you_mean_several() {
        let candidates = ["colour", "color", "collar"];
        let message = Suggester::new().threshold(0.5).did_you_mean("colr", &candidates);
        assert_eq!(message.as_deref(), Some("Did you mean 'color', 'colour' or 'collar'?"));
    }

    #[test]
    fn test_rank_stats() {
        let output = Suggester::new().rank("instal", &COMMANDS);
        assert_eq!(output.stats.total_candidates, COMMANDS.len());
        assert!(output.stats.above_threshold >= output.suggestions.len());
    }

    #[test]
    fn test_empty_candidates() {
        let candidates: [&str; 0] = [];
        let output = Suggester::new().rank("anything", &candidates);
        assert!(output.suggestions.is_empty());
        assert_eq!(output.stats.total_candidates, 0);
    }
}
