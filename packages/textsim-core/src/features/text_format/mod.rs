//! Text Formatting
//!
//! Joining, capitalization, censoring and elapsed-time rendering.
//! All helpers are pure functions over borrowed input.

pub mod domain;

pub use domain::{
    censor, censor_all, duration_text, duration_text_with, format_words, join, DurationParts,
    Locale, UnitLabels, DEFAULT_REPLACEMENT,
};
