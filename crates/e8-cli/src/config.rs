//! # Configuration Resolution
//!
//! Engine settings are layered, later layers winning:
//!
//! 1. built-in defaults (50 digits, 99 series terms, zeta bound 256);
//! 2. the YAML file named by `--config`;
//! 3. `E8_PRECISION`, `E8_SERIES_TERMS`, `E8_ZETA_BOUND`;
//! 4. the `--precision`, `--terms` and `--bound` flags.

use std::path::Path;

use anyhow::{Context, Result};

use e8_core::EngineConfig;

/// Values given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub precision: Option<u32>,
    pub terms: Option<u32>,
    pub bound: Option<u32>,
}

/// Merge every configuration layer.
///
/// # Errors
///
/// Fails if the config file cannot be read or parsed, an environment
/// variable is malformed, or the merged settings are invalid.
pub fn resolve_config(path: Option<&Path>, flags: FlagOverrides) -> Result<EngineConfig> {
    let base = match path {
        Some(path) => {
            let doc = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file: {}", path.display()))?;
            EngineConfig::from_yaml_str(&doc)
                .with_context(|| format!("parsing config file: {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    let from_env = base
        .with_env_overrides()
        .context("applying E8_* environment overrides")?;
    let merged = apply_flags(from_env, flags);
    merged.validate().context("validating engine configuration")?;
    tracing::debug!(?merged, "resolved engine configuration");
    Ok(merged)
}

fn apply_flags(config: EngineConfig, flags: FlagOverrides) -> EngineConfig {
    EngineConfig {
        precision_digits: flags.precision.unwrap_or(config.precision_digits),
        series_terms: flags.terms.unwrap_or(config.series_terms),
        zeta_bound: flags.bound.unwrap_or(config.zeta_bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("e8.yaml");
        std::fs::write(&path, "precision_digits: 70\nseries_terms: 40\n").unwrap();

        let from_file = resolve_config(Some(&path), FlagOverrides::default()).unwrap();
        assert_eq!(from_file.precision_digits, 70);
        assert_eq!(from_file.series_terms, 40);

        let flags = FlagOverrides {
            precision: Some(25),
            ..FlagOverrides::default()
        };
        let merged = resolve_config(Some(&path), flags).unwrap();
        assert_eq!(merged.precision_digits, 25);
        assert_eq!(merged.series_terms, 40);
        assert_eq!(merged.zeta_bound, 256);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config(Some(&dir.path().join("absent.yaml")), FlagOverrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn malformed_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "precision: [1, 2]\n").unwrap();
        let err = resolve_config(Some(&path), FlagOverrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn zero_flag_rejected() {
        let flags = FlagOverrides {
            terms: Some(0),
            ..FlagOverrides::default()
        };
        assert!(apply_flags(EngineConfig::default(), flags).validate().is_err());
    }
}
