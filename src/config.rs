use std::fmt;

use log::Level;

use crate::effects::snowfall::SnowfallPreset;

/// How far the background layer drifts per pixel of pointer travel.
pub const PARALLAX_DAMPING: f64 = 0.02;
/// Tilt reached when the pointer sits on a card edge, in degrees.
pub const MAX_TILT_DEG: f64 = 10.0;
pub const COUNTER_ROTATION_STEP_DEG: f64 = 20.0;
pub const COUNTER_SCALE_STEP: f64 = 0.1;
/// How long the counter badge keeps its "pop" highlight after a click.
pub const BADGE_POP_MS: u32 = 300;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownPreset(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownPreset(name) => {
                write!(f, "unknown snowfall preset '{}', expected 'classic' or 'blizzard'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn parse_preset(raw: &str) -> Result<SnowfallPreset, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "classic" => Ok(SnowfallPreset::Classic),
        "blizzard" => Ok(SnowfallPreset::Blizzard),
        other => Err(ConfigError::UnknownPreset(other.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingConfig {
    pub snowfall: SnowfallPreset,
    pub parallax_damping: f64,
    pub max_tilt_deg: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            snowfall: SnowfallPreset::Blizzard,
            parallax_damping: PARALLAX_DAMPING,
            max_tilt_deg: MAX_TILT_DEG,
        }
    }
}

impl LandingConfig {
    /// Builds the page config from the `?flakes=` query parameter.
    /// A bad value is logged and the default preset is kept.
    pub fn from_flakes_param(flakes: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = flakes {
            match parse_preset(raw) {
                Ok(preset) => config.snowfall = preset,
                Err(e) => log::warn!("Ignoring flakes parameter: {}", e),
            }
        }
        config
    }
}
