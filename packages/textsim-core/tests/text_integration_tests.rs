//! Integration tests: public API end to end
//!
//! Exercises the helpers through the crate root re-exports and through a
//! loaded `TextConfig`, the way a host application would.

mod common;

use chrono::Duration;
use common::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use textsim_core::config::{ConfigError, TextConfig};
use textsim_core::{
    censor_all, duration_text, edit_distance, format_words, join, similarity, Locale, Suggester,
    TextError,
};

// ============================================================================
// Testable properties
// ============================================================================

#[test]
fn test_transposition_beats_plain_levenshtein() {
    assert_eq!(edit_distance("ab", "ba"), 1);
    assert_score_eq(similarity("ab", "ba"), 0.5);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(similarity("", ""), 1.0);
}

#[test]
fn test_join_rules() {
    let empty: [&str; 0] = [];
    assert_eq!(join(&empty, ",", " and "), "");
    assert_eq!(join(&["x"], ",", " and "), "x");
    assert_eq!(join(&["a", "b", "c"], ", ", " and "), "a, b and c");
}

#[test]
fn test_format_rules() {
    assert_eq!(format_words("hello world"), "Hello World");
    assert_eq!(format_words(""), "");
}

#[test]
fn test_censor_rules() {
    assert_eq!(censor_all("hello world", &["world"], '*'), "hello *****");
    assert_eq!(censor_all("aa", &["a", "aa"], '*'), "**");
    assert_eq!(censor_all("ab", &["a", "#b"], '#'), "##");
}

#[test]
fn test_duration_rules() {
    let t = fixture_start();
    assert_eq!(duration_text(&t, &t).unwrap(), "");
    assert_eq!(
        duration_text(&t, &(t + Duration::seconds(90))).unwrap(),
        "1 minute, 30 secondes"
    );
}

#[test]
fn test_duration_negative_span_is_an_error() {
    let t = fixture_start();
    let err = duration_text(&t, &(t - Duration::hours(1))).unwrap_err();

    assert!(matches!(err, TextError::NegativeSpan { seconds: -3600 }));
    assert!(err.to_string().contains("end is before start"));
}

// ============================================================================
// Suggestions
// ============================================================================

#[test]
fn test_suggestions_for_typos() {
    let suggester = Suggester::new();

    for (typo, expected) in [("instal", "install"), ("tset", "test"), ("biuld", "build"), ("claen", "clean")] {
        let best = suggester.best_match(typo, &COMMANDS).unwrap();
        assert_eq!(best.candidate, expected, "typo {typo}");
        assert_unit_range(best.score);
    }
}

#[test]
fn test_did_you_mean_message() {
    let message = Suggester::new().did_you_mean("upgrad", &COMMANDS).unwrap();
    assert!(message.starts_with("Did you mean 'upgrade'"));
}

#[test]
fn test_many_candidates_are_ranked_deterministically() {
    let candidates: Vec<String> = (0..500).map(|i| format!("command_{i}")).collect();

    let first = Suggester::new().suggest("command_42", &candidates);
    let second = Suggester::new().suggest("command_42", &candidates);

    assert_eq!(first, second);
    assert_eq!(first[0].candidate, "command_42");
    assert_eq!(first[0].score, 1.0);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_loaded_config_drives_helpers() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(fixture_full_yaml().as_bytes()).unwrap();
    let path = temp_file.path().to_str().unwrap();

    let config = TextConfig::from_yaml(path).unwrap();

    assert_eq!(config.join(&["a", "b", "c"]), "a; b et c");
    assert_eq!(config.censor("mot de passe", &["passe"]), "mot de #####");

    let t = fixture_start();
    let end = t + Duration::days(2) + Duration::minutes(1);
    assert_eq!(config.duration.locale, Locale::English);
    assert_eq!(config.duration_text(&t, &end).unwrap(), "2 days, 1 minute");

    let suggestions = config.suggester().threshold(0.0).suggest("rn", &COMMANDS);
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].candidate, "run");
}

#[test]
fn test_config_file_missing() {
    let result = TextConfig::from_yaml("/nonexistent/textsim.yaml");
    assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
}

#[test]
fn test_config_error_converts_to_text_error() {
    let err: TextError = TextConfig::from_yaml_str("version: 3\n").unwrap_err().into();
    assert!(err.to_string().starts_with("Configuration error:"));
}
