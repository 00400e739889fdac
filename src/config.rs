//! Application configuration.
//!
//! Defaults are compiled in from `config/default.toml`. A user file only
//! needs the keys it wants to change; everything else falls back to the
//! embedded defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::mood::{ConfidencePolicy, Mood};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum number of mood history entries kept in memory.
    pub history_limit: usize,
    /// How out-of-range confidence values are handled by the store.
    pub confidence_policy: ConfidencePolicy,
    pub detection: DetectionConfig,
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// How long the mock detection pass "looks" at the camera.
    pub delay_ms: u64,
    pub width: u32,
    pub height: u32,
    /// Labels the stub classifier picks from.
    pub candidates: Vec<Mood>,
    pub min_confidence: f32,
    pub max_confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub default_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_step: f32,
    /// Radians per second.
    pub auto_rotate_speed: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: crate::mood::DEFAULT_HISTORY_LIMIT,
            confidence_policy: ConfidencePolicy::PassThrough,
            detection: DetectionConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            width: 640,
            height: 480,
            candidates: vec![
                Mood::Happy,
                Mood::Confident,
                Mood::Calm,
                Mood::Excited,
                Mood::Elegant,
            ],
            min_confidence: 0.7,
            max_confidence: 1.0,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_distance: 5.0,
            min_distance: 2.0,
            max_distance: 10.0,
            zoom_step: 1.0,
            auto_rotate_speed: 0.5,
        }
    }
}

impl AppConfig {
    /// Reject values the store, detector or camera cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            bail!("history_limit must be at least 1");
        }
        self.detection.validate()?;
        self.viewer.validate()
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            bail!("detection.candidates must not be empty");
        }
        // `contains` is false for NaN, so NaN bounds are rejected here too.
        if !(0.0..=1.0).contains(&self.min_confidence)
            || !(0.0..=1.0).contains(&self.max_confidence)
            || self.min_confidence > self.max_confidence
        {
            bail!(
                "detection confidence range [{}, {}] must lie within [0, 1]",
                self.min_confidence,
                self.max_confidence
            );
        }
        if self.width == 0 || self.height == 0 {
            bail!("detection resolution must be non-zero");
        }
        Ok(())
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("default_distance", self.default_distance),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("zoom_step", self.zoom_step),
            ("auto_rotate_speed", self.auto_rotate_speed),
        ] {
            if !value.is_finite() {
                bail!("viewer.{} must be a finite number, got {}", key, value);
            }
        }
        if self.min_distance <= 0.0 || self.min_distance > self.max_distance {
            bail!(
                "viewer distance range [{}, {}] is invalid",
                self.min_distance,
                self.max_distance
            );
        }
        if !(self.min_distance..=self.max_distance).contains(&self.default_distance) {
            bail!(
                "viewer.default_distance {} lies outside [{}, {}]",
                self.default_distance,
                self.min_distance,
                self.max_distance
            );
        }
        if self.zoom_step <= 0.0 {
            bail!("viewer.zoom_step must be positive");
        }
        Ok(())
    }
}

/// Parse and validate a TOML config string.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content).context("Invalid config TOML")?;
    config.validate()?;
    Ok(config)
}

/// Configuration embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).expect("embedded default.toml must be valid")
}

/// Load configuration from a TOML file at the given path.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Location of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moodstyle").join("config.toml"))
}

/// Load the user config if one exists, otherwise the embedded defaults.
///
/// A broken user file is logged and ignored rather than aborting startup.
pub fn discover_config() -> AppConfig {
    match user_config_path() {
        Some(path) if path.exists() => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config {}: {:#}", path.display(), e);
                default_config()
            }
        },
        _ => default_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_matches_struct_defaults() {
        assert_eq!(default_config(), AppConfig::default());
    }

    #[test]
    fn test_default_config_values() {
        let config = default_config();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.detection.delay_ms, 3000);
        assert_eq!((config.detection.width, config.detection.height), (640, 480));
        assert_eq!(config.detection.candidates.len(), 5);
        assert_eq!(config.viewer.min_distance, 2.0);
        assert_eq!(config.viewer.max_distance, 10.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            confidence_policy = "clamp"

            [viewer]
            zoom_step = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.confidence_policy, ConfidencePolicy::Clamp);
        assert_eq!(config.viewer.zoom_step, 0.5);
        assert_eq!(config.viewer.default_distance, 5.0);
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(parse_config("history_limit = 0").is_err());
        assert!(parse_config("[detection]\ncandidates = []").is_err());
        assert!(parse_config("[detection]\nmin_confidence = 0.9\nmax_confidence = 0.8").is_err());
        assert!(parse_config("[viewer]\ndefault_distance = 12.0").is_err());
        assert!(parse_config("[viewer]\nzoom_step = 0.0").is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(parse_config("[viewer]\nzoom_step = nan").is_err());
        assert!(parse_config("[viewer]\nmax_distance = nan").is_err());
        assert!(parse_config("[viewer]\nauto_rotate_speed = inf").is_err());
        assert!(parse_config("[detection]\nmin_confidence = nan").is_err());

        let viewer = ViewerConfig {
            min_distance: f32::NAN,
            ..ViewerConfig::default()
        };
        let err = viewer.validate().unwrap_err();
        assert!(err.to_string().contains("min_distance"));
    }

    #[test]
    fn test_detection_validate_in_code() {
        assert!(DetectionConfig::default().validate().is_ok());
        let inverted = DetectionConfig {
            min_confidence: 0.9,
            max_confidence: 0.8,
            ..DetectionConfig::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "history_limit = 10").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/moodstyle.toml"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to read config"));
    }
}
