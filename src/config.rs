use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{FreshnessWindows, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub freshness: FreshnessSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_preference_weight")]
    pub preference: f64,
    #[serde(default = "default_freshness_weight")]
    pub freshness: f64,
    #[serde(default = "default_random_weight")]
    pub random: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            preference: default_preference_weight(),
            freshness: default_freshness_weight(),
            random: default_random_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        ScoringWeights {
            distance: value.distance,
            preference: value.preference,
            freshness: value.freshness,
            random: value.random,
        }
    }
}

fn default_distance_weight() -> f64 { 0.30 }
fn default_preference_weight() -> f64 { 0.40 }
fn default_freshness_weight() -> f64 { 0.10 }
fn default_random_weight() -> f64 { 0.20 }

#[derive(Debug, Clone, Deserialize)]
pub struct FreshnessSettings {
    #[serde(default = "default_seed_id_threshold")]
    pub seed_id_threshold: i64,
    #[serde(default = "default_fresh_hours")]
    pub fresh_hours: i64,
    #[serde(default = "default_recent_hours")]
    pub recent_hours: i64,
}

impl Default for FreshnessSettings {
    fn default() -> Self {
        Self {
            seed_id_threshold: default_seed_id_threshold(),
            fresh_hours: default_fresh_hours(),
            recent_hours: default_recent_hours(),
        }
    }
}

impl TryFrom<&FreshnessSettings> for FreshnessWindows {
    type Error = ConfigError;

    fn try_from(value: &FreshnessSettings) -> Result<Self, Self::Error> {
        let hours = |name: &str, h: i64| {
            Duration::try_hours(h).ok_or_else(|| {
                ConfigError::Message(format!("freshness.{}: {} hours is out of range", name, h))
            })
        };

        Ok(FreshnessWindows {
            seed_id_threshold: value.seed_id_threshold,
            fresh: hours("fresh_hours", value.fresh_hours)?,
            recent: hours("recent_hours", value.recent_hours)?,
        })
    }
}

fn default_seed_id_threshold() -> i64 { 100_000 }
fn default_fresh_hours() -> i64 { 24 }
fn default_recent_hours() -> i64 { 24 * 7 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON snapshot of user pets and likes
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub include_seed: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            include_seed: true,
        }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PETMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PETMATCH__SCORING__WEIGHTS__RANDOM -> scoring.weights.random
            .add_source(
                Environment::with_prefix("PETMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PETMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject weight sets that do not sum to 1.0 and inverted freshness windows
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights()
            .validate()
            .map_err(|e| ConfigError::Message(format!("scoring.weights: {}", e)))?;

        let f = &self.freshness;
        if f.fresh_hours < 0 || f.recent_hours < f.fresh_hours {
            return Err(ConfigError::Message(format!(
                "freshness: expected 0 <= fresh_hours <= recent_hours, got {} and {}",
                f.fresh_hours, f.recent_hours
            )));
        }
        self.freshness_windows()?;
        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn freshness_windows(&self) -> Result<FreshnessWindows, ConfigError> {
        FreshnessWindows::try_from(&self.freshness)
    }
}
