//! Engine configuration.
//!
//! Precision and truncation settings shared by the theta and zeta
//! evaluators. Defaults reproduce the fixed truncation policy; override via
//! a YAML document, environment variables, or explicit construction.

use serde::{Deserialize, Serialize};

use crate::constants::{zeta_convergence_bound, DEFAULT_SERIES_TERMS};
use crate::error::ConfigError;
use crate::precision::{NumericContext, Precision};

/// Default working precision in decimal digits.
pub const DEFAULT_PRECISION_DIGITS: u32 = 50;

/// Settings for building evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Significant decimal digits for every arbitrary-precision operation.
    pub precision_digits: u32,
    /// Highest index kept in the theta and eta q-series.
    pub series_terms: u32,
    /// Truncation bound of the direct zeta sum.
    pub zeta_bound: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision_digits: DEFAULT_PRECISION_DIGITS,
            series_terms: DEFAULT_SERIES_TERMS,
            zeta_bound: zeta_convergence_bound(),
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(doc: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(doc).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by environment variables.
    ///
    /// Variables:
    /// - `E8_PRECISION` (default: 50)
    /// - `E8_SERIES_TERMS` (default: 99)
    /// - `E8_ZETA_BOUND` (default: 256)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply any `E8_*` environment variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let config = Self {
            precision_digits: env_u32("E8_PRECISION")?.unwrap_or(self.precision_digits),
            series_terms: env_u32("E8_SERIES_TERMS")?.unwrap_or(self.series_terms),
            zeta_bound: env_u32("E8_ZETA_BOUND")?.unwrap_or(self.zeta_bound),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero precision, zero series terms, or a zero zeta bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("precision_digits", self.precision_digits),
            ("series_terms", self.series_terms),
            ("zeta_bound", self.zeta_bound),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The numeric context these settings describe.
    pub fn context(&self) -> Result<NumericContext, ConfigError> {
        let precision =
            Precision::new(self.precision_digits).map_err(|_| ConfigError::NotPositive {
                field: "precision_digits",
                value: self.precision_digits.to_string(),
            })?;
        Ok(NumericContext::new(precision))
    }
}

fn env_u32(var: &'static str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
        Err(_) => Ok(None),
    }
}
