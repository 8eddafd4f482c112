//! Service configuration
//!
//! Read once from the environment at startup.

use thiserror::Error;

use crate::models::UnitSystem;

/// Environment variable selecting the unit system used when a tool call omits one
pub const DEFAULT_UNITS_VAR: &str = "FITCALC_DEFAULT_UNITS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} value: '{value}'. Valid values: metric, imperial")]
    InvalidUnitSystem { var: &'static str, value: String },
}

/// Runtime configuration for the calculator service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub default_unit_system: UnitSystem,
}

impl ServiceConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_unit_system = match lookup(DEFAULT_UNITS_VAR) {
            Some(value) if !value.trim().is_empty() => UnitSystem::from_str(&value).ok_or(
                ConfigError::InvalidUnitSystem {
                    var: DEFAULT_UNITS_VAR,
                    value,
                },
            )?,
            _ => UnitSystem::default(),
        };

        Ok(Self { default_unit_system })
    }

    /// Resolve an optional unit system argument against the configured default
    pub fn resolve_units(&self, units: Option<&str>) -> Result<UnitSystem, String> {
        match units {
            Some(s) => UnitSystem::from_str(s)
                .ok_or_else(|| format!("Invalid unit system: '{}'. Valid values: metric, imperial", s)),
            None => Ok(self.default_unit_system),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_defaults_to_metric() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Metric);

        let config = ServiceConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_imperial_from_env() {
        let config = ServiceConfig::from_lookup(|key| {
            (key == DEFAULT_UNITS_VAR).then(|| "Imperial".to_string())
        })
        .unwrap();
        assert_eq!(config.default_unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let err = ServiceConfig::from_lookup(|_| Some("cubits".to_string())).unwrap_err();
        assert!(err.to_string().contains("cubits"));
        assert!(err.to_string().contains(DEFAULT_UNITS_VAR));
    }

    #[test]
    fn test_resolve_units() {
        let config = ServiceConfig {
            default_unit_system: UnitSystem::Imperial,
        };
        assert_eq!(config.resolve_units(None), Ok(UnitSystem::Imperial));
        assert_eq!(config.resolve_units(Some("metric")), Ok(UnitSystem::Metric));
        assert!(config.resolve_units(Some("stone")).is_err());
    }
}
