//! Configuration System
//!
//! Defaults for the text helpers, loadable from a versioned YAML file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use textsim_core::config::TextConfig;
//!
//! // Built-in defaults
//! let config = TextConfig::default();
//!
//! // From YAML (validated, unknown fields get a "Did you mean" hint)
//! let config = TextConfig::from_yaml("textsim.yaml")?;
//! let text = config.join(&["a", "b", "c"]);
//! ```

pub mod error;
pub mod text_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use text_config::{
    CensorConfig, DurationConfig, JoinConfig, SuggestConfig, TextConfig, CONFIG_VERSION,
};
pub use validation::Validatable;
