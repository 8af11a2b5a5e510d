// Feedsynth Configuration
//
// Seed, generator sizes, the survey date window and the allocator's
// exhaustion policy. Loaded from TOML; command-line flags override it.

use crate::matching::ExhaustionPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsynthConfig {
    /// Seed for every random draw (generation and tie-breaking)
    pub seed: u64,

    pub comments: CommentConfig,

    pub surveys: SurveyConfig,

    pub allocation: AllocationConfig,
}

/// Comment pool generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Number of unique comments to aim for
    pub count: usize,

    /// Generation stops after `count * max_attempts_factor` draws
    pub max_attempts_factor: usize,
}

/// Survey generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub count: usize,

    /// First day of the submission window (YYYY-MM-DD)
    pub start_date: NaiveDate,

    /// Last day of the submission window (YYYY-MM-DD)
    pub end_date: NaiveDate,

    /// Share of respondents who rate everything at the top
    pub superfan_share: f64,

    /// Share of respondents who rate everything at the bottom
    pub critic_share: f64,

    /// Standard deviation of the noise added to balanced satisfaction
    pub satisfaction_noise: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    pub exhaustion: ExhaustionPolicy,
}

impl Default for FeedsynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            comments: CommentConfig::default(),
            surveys: SurveyConfig::default(),
            allocation: AllocationConfig::default(),
        }
    }
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            count: 1500,
            max_attempts_factor: 50,
        }
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            count: 1200,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
            superfan_share: 0.30,
            critic_share: 0.10,
            satisfaction_noise: 0.6,
        }
    }
}

impl FeedsynthConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FeedsynthConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comments.count == 0 {
            return Err(ConfigError::ValidationError(
                "comments: count must be greater than 0".to_string(),
            ));
        }

        if self.comments.max_attempts_factor == 0 {
            return Err(ConfigError::ValidationError(
                "comments: max_attempts_factor must be greater than 0".to_string(),
            ));
        }

        self.surveys.validate()
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

impl SurveyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ValidationError(
                "surveys: count must be greater than 0".to_string(),
            ));
        }

        if self.end_date <= self.start_date {
            return Err(ConfigError::ValidationError(format!(
                "surveys: end_date ({}) must be after start_date ({})",
                self.end_date, self.start_date
            )));
        }

        let shares = [self.superfan_share, self.critic_share];
        if shares.iter().any(|s| !(0.0..=1.0).contains(s))
            || self.superfan_share + self.critic_share > 1.0
        {
            return Err(ConfigError::ValidationError(
                "surveys: superfan_share and critic_share must be within 0..1 and sum to at most 1"
                    .to_string(),
            ));
        }

        if !self.satisfaction_noise.is_finite() || self.satisfaction_noise < 0.0 {
            return Err(ConfigError::ValidationError(
                "surveys: satisfaction_noise must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }
}
