//! String Similarity
//!
//! Damerau-Levenshtein edit distance, the normalized score built on it, and
//! candidate ranking for "did you mean" suggestions.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (CLI / host application)
//!           ↓
//! application/ (Suggester - candidate ranking)
//!           ↓
//! domain/ (edit distance, similarity score)
//! ```
//!
//! # Usage
//!
//! ```
//! use textsim_core::features::similarity::{edit_distance, similarity};
//!
//! assert_eq!(edit_distance("ab", "ba"), 1);
//! assert_eq!(similarity("", ""), 1.0);
//! ```

pub mod application;
pub mod domain;

pub use application::{
    SuggestOutput, SuggestStats, Suggester, Suggestion, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD,
    MAX_SUGGESTIONS_LIMIT,
};
pub use domain::{damerau_levenshtein, edit_distance, sequence_similarity, similarity, DistanceMatrix};
