//! Simulation configuration
//!
//! Two knobs affect the run: the number of trials and the RNG seed. Both
//! have reference defaults, can be loaded from a JSON file, and are
//! overridable from the command line (CLI > file > defaults).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    /// Number of independent trials to run
    #[serde(default = "default_trial_count")]
    pub trial_count: usize,

    /// RNG seed, fixed for reproducibility
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trial_count: default_trial_count(),
            seed: default_seed(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a JSON file, or defaults when `path` is None
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).context("Failed to read config file")?;
                serde_json::from_str(&content).context("Failed to parse config file")
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, trials: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(trials) = trials {
            self.trial_count = trials;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }

    /// Check that the merged values can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(crate::error::Error::ZeroTrials.into());
        }
        Ok(())
    }
}

// Default value functions for serde

fn default_trial_count() -> usize {
    100_000
}

fn default_seed() -> u64 {
    42
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.trial_count, 100_000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SimConfig::load(None).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"trialCount": 500, "seed": 7}"#).unwrap();

        let config = SimConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.trial_count, 500);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"seed": 7}"#).unwrap();

        let config = SimConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.trial_count, 100_000);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = SimConfig::default().with_overrides(Some(10), None);
        assert_eq!(config.trial_count, 10);
        assert_eq!(config.seed, 42);

        let config = SimConfig::default().with_overrides(None, Some(99));
        assert_eq!(config.trial_count, 100_000);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_zero_trials_rejected_after_merge() {
        let config = SimConfig::default().with_overrides(Some(0), None);
        assert!(config.validate().is_err());

        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = SimConfig {
            trial_count: 1234,
            seed: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
