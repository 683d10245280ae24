//! Engine configuration loaded from TOML

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::eval::CornerTerm;
use crate::rules::CaptureRule;

/// Depth past which every node is a cutoff node. Far deeper than any game on
/// the standard board can go, so in practice the deadline decides.
pub const DEFAULT_MAX_DEPTH: u32 = 1000;

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wall-clock budget for one root search, in seconds
    pub time_budget_secs: f64,
    /// Cutoff depth
    pub max_depth: u32,
    pub capture_rule: CaptureRule,
    pub corner_term: CornerTerm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            time_budget_secs: 1.0,
            max_depth: DEFAULT_MAX_DEPTH,
            capture_rule: CaptureRule::default(),
            corner_term: CornerTerm::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_budget_secs.is_finite() || self.time_budget_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "time_budget_secs must be a positive number".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Validation("max_depth must be > 0".into()));
        }
        Ok(())
    }

    /// The budget as a `Duration`, saturating at `Duration::MAX` for values
    /// too large to represent. The search treats a deadline past the end of
    /// `Instant` as no time limit.
    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_budget_secs).unwrap_or(Duration::MAX)
    }
}
