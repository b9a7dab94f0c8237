/*
 * textsim-core - Text Similarity & Normalization
 *
 * Feature-First Hexagonal Architecture:
 * - features/similarity/  : Damerau-Levenshtein distance, similarity score, suggestions
 * - features/text_format/ : join, word capitalization, censoring, elapsed time
 * - config/               : YAML-loadable defaults
 * - errors                : crate error type
 *
 * Every helper is a pure function over borrowed input: safe to call from any
 * thread, no shared state, call-local buffers only.
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::derivable_impls)] // Manual impl for documentation

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Feature modules (similarity, text formatting)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{Result, TextError};

pub use features::similarity::{
    damerau_levenshtein, edit_distance, sequence_similarity, similarity, DistanceMatrix, Suggester,
    Suggestion,
};

pub use features::text_format::{
    censor, censor_all, duration_text, duration_text_with, format_words, join, DurationParts,
    Locale, DEFAULT_REPLACEMENT,
};

pub use config::TextConfig;
