//! Similarity Application Layer (UseCase)

mod suggest_usecase;

pub use suggest_usecase::{
    SuggestOutput, SuggestStats, Suggester, Suggestion, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD,
    MAX_SUGGESTIONS_LIMIT,
};
