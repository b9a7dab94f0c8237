//! Text helper configuration (YAML schema v1)
//!
//! ```yaml
//! version: 1
//! join: { separator: ", ", last_separator: " and " }
//! censor: { replacement: "*" }
//! duration: { locale: french }
//! suggest: { threshold: 0.6, max_suggestions: 3, case_insensitive: true }
//! ```
//!
//! Every section is optional and falls back to its `Default`.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;
use crate::errors::Result;
use crate::features::similarity::{
    Suggester, DEFAULT_MAX_SUGGESTIONS, DEFAULT_THRESHOLD, MAX_SUGGESTIONS_LIMIT,
};
use crate::features::text_format::{censor_all, duration_text_with, join, Locale, DEFAULT_REPLACEMENT};

/// Current schema version
pub const CONFIG_VERSION: u32 = 1;

const TOP_LEVEL_FIELDS: &[&str] = &["version", "join", "censor", "duration", "suggest"];

const SECTION_FIELDS: &[(&str, &[&str])] = &[
    ("join", &["separator", "last_separator"]),
    ("censor", &["replacement"]),
    ("duration", &["locale"]),
    ("suggest", &["threshold", "max_suggestions", "case_insensitive"]),
];

/// List joining separators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    pub separator: String,
    pub last_separator: String,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            last_separator: " and ".to_string(),
        }
    }
}

/// Censor replacement char
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensorConfig {
    pub replacement: char,
}

impl Default for CensorConfig {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT,
        }
    }
}

impl Validatable for CensorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.replacement.is_control() {
            return Err(ConfigError::Custom(format!(
                "censor.replacement must be a printable char, got {:?}",
                self.replacement
            )));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "censor"
    }
}

/// Elapsed-time rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    pub locale: Locale,
}

/// Candidate ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Minimum similarity score (0.0-1.0)
    pub threshold: f64,
    pub max_suggestions: usize,
    pub case_insensitive: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            case_insensitive: true,
        }
    }
}

impl Validatable for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::range_with_hint(
                "suggest.threshold",
                self.threshold,
                0.0,
                1.0,
                "Similarity scores lie between 0 (unrelated) and 1 (identical).",
            ));
        }

        if self.max_suggestions == 0 || self.max_suggestions > MAX_SUGGESTIONS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "suggest.max_suggestions",
                self.max_suggestions,
                1,
                MAX_SUGGESTIONS_LIMIT,
                "At least one suggestion must be allowed.",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "suggest"
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub join: JoinConfig,

    #[serde(default)]
    pub censor: CensorConfig,

    #[serde(default)]
    pub duration: DurationConfig,

    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            join: JoinConfig::default(),
            censor: CensorConfig::default(),
            duration: DurationConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl Validatable for TextConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: vec![CONFIG_VERSION],
            });
        }
        self.censor.validate()?;
        self.suggest.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "text"
    }
}

impl TextConfig {
    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!("Loaded text config from {}", path);
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: Value = serde_yaml::from_str(content)?;
        check_schema(&raw)?;

        let config: Self = serde_yaml::from_value(raw)?;
        config.validate()?;

        debug!(
            "Text config v{}: locale={}, censor='{}', suggest.threshold={}",
            config.version, config.duration.locale, config.censor.replacement, config.suggest.threshold
        );
        Ok(config)
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Join with the configured separators
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        join(items, &self.join.separator, &self.join.last_separator)
    }

    /// Censor with the configured replacement char
    pub fn censor<S: AsRef<str>>(&self, input: &str, masks: &[S]) -> String {
        censor_all(input, masks, self.censor.replacement)
    }

    /// Render an elapsed time with the configured locale
    pub fn duration_text<Tz: TimeZone>(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> Result<String> {
        duration_text_with(start, end, self.duration.locale)
    }

    /// Suggester with the configured thresholds
    pub fn suggester(&self) -> Suggester {
        Suggester::from_config(&self.suggest)
    }
}

/// Reject unknown fields (with a suggestion), missing/unsupported versions and unknown locales
fn check_schema(raw: &Value) -> ConfigResult<()> {
    let root = raw
        .as_mapping()
        .ok_or_else(|| ConfigError::Custom("Configuration root must be a mapping".to_string()))?;

    check_keys(root, "root", TOP_LEVEL_FIELDS)?;

    match root.get("version") {
        None => return Err(ConfigError::MissingVersion),
        Some(version) => {
            let found = version
                .as_u64()
                .ok_or_else(|| ConfigError::Custom(format!("'version' must be an integer, got {:?}", version)))?;
            if found != u64::from(CONFIG_VERSION) {
                return Err(ConfigError::UnsupportedVersion {
                    found: u32::try_from(found).unwrap_or(u32::MAX),
                    supported: vec![CONFIG_VERSION],
                });
            }
        }
    }

    for (section, fields) in SECTION_FIELDS {
        if let Some(body) = root.get(*section).and_then(Value::as_mapping) {
            check_keys(body, section, fields)?;
        }
    }

    if let Some(locale) = root.get("duration").and_then(|d| d.get("locale")) {
        if serde_yaml::from_value::<Locale>(locale.clone()).is_err() {
            let name = locale.as_str().map(str::to_string).unwrap_or_else(|| format!("{:?}", locale));
            return Err(ConfigError::UnknownLocale(name));
        }
    }

    Ok(())
}

fn check_keys(mapping: &serde_yaml::Mapping, section: &str, valid: &[&str]) -> ConfigResult<()> {
    for key in mapping.keys() {
        let name = key.as_str().unwrap_or_default();
        if !valid.contains(&name) {
            return Err(ConfigError::unknown_field_with_suggestion(
                name,
                section,
                valid.iter().map(|f| f.to_string()).collect(),
            ));
        }
    }
    Ok(())
}
