//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use textsim_core::config::validation::Validatable;
///
/// fn apply<C: Validatable>(config: C) -> ConfigResult<C> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Section name used in error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

