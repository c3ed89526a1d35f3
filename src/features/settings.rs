//! Widget settings
//!
//! Tunables are read once at start-up from `settings.json` in the platform
//! config directory. The file is never written; a missing file means defaults.

use std::path::{Path, PathBuf};

use std::time::Duration;

use serde::Deserialize;

use crate::ui::animation::{Curve, SpringParams, TweenSpec};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub particles: ParticleSettings,
    /// Filled circle in the middle
    pub center_circle: CircleSettings,
    /// Outlined ring around it
    pub outer_circle: CircleSettings,
}

/// Initial window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

/// Particle flight tunables
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    /// Distance travelled from the origin when opening
    pub travel_distance: f32,
    /// Duration of the position and rotation tweens
    pub duration_ms: u64,
    pub position_curve: Curve,
    pub rotation_curve: Curve,
    /// Fixed seed for reproducible particle shapes and colors
    pub seed: Option<u64>,
}

/// Diameter range and spring for one circle
///
/// Overriding a circle requires all four fields, since the two circles
/// have different defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CircleSettings {
    pub closed_diameter: f32,
    pub open_diameter: f32,
    /// 1.0 = critically damped, below 1.0 bounces
    pub damping_ratio: f64,
    pub stiffness: f64,
}

impl CircleSettings {
    pub fn center_default() -> Self {
        Self {
            closed_diameter: 50.0,
            open_diameter: 70.0,
            damping_ratio: 1.0,
            stiffness: SpringParams::STIFFNESS_MEDIUM,
        }
    }

    pub fn outer_default() -> Self {
        Self {
            closed_diameter: 70.0,
            open_diameter: 90.0,
            damping_ratio: 1.0,
            stiffness: SpringParams::STIFFNESS_LOW,
        }
    }

    pub fn spring_params(&self) -> SpringParams {
        SpringParams::from_ratio(self.damping_ratio, self.stiffness)
    }

    /// Reject values that would keep the spring from ever settling
    fn validate(&self, name: &str) -> Result<(), SettingsError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.stiffness) {
            return Err(SettingsError::Parse(format!(
                "{name}.stiffness must be a positive number, got {}",
                self.stiffness
            )));
        }
        if !positive(self.damping_ratio) {
            return Err(SettingsError::Parse(format!(
                "{name}.damping_ratio must be a positive number, got {}",
                self.damping_ratio
            )));
        }
        for (field, value) in [
            ("closed_diameter", self.closed_diameter),
            ("open_diameter", self.open_diameter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Parse(format!(
                    "{name}.{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl ParticleSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn position_spec(&self) -> TweenSpec {
        TweenSpec::new(self.duration(), self.position_curve)
    }

    pub fn rotation_spec(&self) -> TweenSpec {
        TweenSpec::new(self.duration(), self.rotation_curve)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            particles: ParticleSettings::default(),
            center_circle: CircleSettings::center_default(),
            outer_circle: CircleSettings::outer_default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 760.0,
        }
    }
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            travel_distance: 1500.0,
            duration_ms: 3000,
            position_curve: Curve::Linear,
            rotation_curve: Curve::Linear,
            seed: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "circle-burst", "CircleBurst")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, or defaults if absent or invalid
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::debug!("No config directory available, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse settings from JSON text
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.center_circle.validate("center_circle")?;
        self.outer_circle.validate("outer_circle")?;
        if !self.particles.travel_distance.is_finite() {
            return Err(SettingsError::Parse(format!(
                "particles.travel_distance must be finite, got {}",
                self.particles.travel_distance
            )));
        }
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
