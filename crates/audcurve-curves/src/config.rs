//! Curve configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file is a
//! valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::monthly::DEFAULT_HORIZON_MONTHS;
use crate::point::CurveMode;
use crate::schedule::TenorSchedule;
use crate::validation::RateBounds;

/// Curve configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Spread subtracted from adjustable short rates, in basis points
    #[serde(default)]
    pub spread_bps: f64,

    /// Last month of the monthly series
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,

    /// Full (with cash rate) or reduced curve
    #[serde(default)]
    pub mode: CurveMode,

    /// Lowest monthly rate kept by the validator
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,

    /// Highest monthly rate kept by the validator
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,

    /// RBA F1 short rate file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f1_path: Option<PathBuf>,

    /// RBA F2 bond yield file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f2_path: Option<PathBuf>,

    /// Tenor schedule, the standard table when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TenorSchedule>,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_min_rate() -> f64 {
    RateBounds::DEFAULT_MIN
}

fn default_max_rate() -> f64 {
    RateBounds::DEFAULT_MAX
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            spread_bps: 0.0,
            horizon_months: default_horizon(),
            mode: CurveMode::Full,
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            f1_path: None,
            f2_path: None,
            schedule: None,
        }
    }
}

impl CurveConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurveError::ConfigIo(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> CurveResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CurveError::ConfigFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> CurveResult<String> {
        toml::to_string_pretty(self).map_err(|e| CurveError::ConfigFormat(e.to_string()))
    }

    /// Checks the values that serde cannot.
    pub fn validate(&self) -> CurveResult<()> {
        if self.horizon_months == 0 {
            return Err(CurveError::invalid_config(
                "horizon_months",
                "must be at least 1",
            ));
        }
        if !self.spread_bps.is_finite() {
            return Err(CurveError::invalid_config("spread_bps", "must be finite"));
        }
        self.bounds()?;
        Ok(())
    }

    /// Validator band from `min_rate` and `max_rate`.
    pub fn bounds(&self) -> CurveResult<RateBounds> {
        RateBounds::new(self.min_rate, self.max_rate)
    }

    /// The schedule in effect.
    pub fn schedule(&self) -> TenorSchedule {
        self.schedule.clone().unwrap_or_default()
    }
}
