//! Display and feedback preferences
//!
//! Stored as a small JSON file next to the app. Missing fields fall back to
//! their defaults, so old files keep loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_MS;

/// Pixel pattern used to fill planet disks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DitherMode {
    /// Solid fill
    None,
    #[default]
    Checkerboard,
    /// Checkerboard that flips with tick parity (shimmer)
    Xor,
}

impl DitherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DitherMode::None => "none",
            DitherMode::Checkerboard => "checkerboard",
            DitherMode::Xor => "xor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "solid" => Some(DitherMode::None),
            "checkerboard" | "checker" => Some(DitherMode::Checkerboard),
            "xor" => Some(DitherMode::Xor),
            _ => None,
        }
    }

    /// Whether the pixel at offset (dx, dy) from the disk center is lit
    #[inline]
    pub fn lit(&self, dx: i32, dy: i32, tick: u64) -> bool {
        match self {
            DitherMode::None => true,
            DitherMode::Checkerboard => (dx + dy) & 1 != 0,
            DitherMode::Xor => (dx ^ dy ^ (tick & 1) as i32) & 1 != 0,
        }
    }

    /// Next mode in the cycle (for a settings toggle)
    pub fn next(&self) -> Self {
        match self {
            DitherMode::None => DitherMode::Checkerboard,
            DitherMode::Checkerboard => DitherMode::Xor,
            DitherMode::Xor => DitherMode::None,
        }
    }
}

/// Player ship glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShipStyle {
    #[default]
    Dolphin,
    Ufo,
    Arrow,
}

impl ShipStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipStyle::Dolphin => "dolphin",
            ShipStyle::Ufo => "ufo",
            ShipStyle::Arrow => "arrow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dolphin" => Some(ShipStyle::Dolphin),
            "ufo" | "saucer" => Some(ShipStyle::Ufo),
            "arrow" => Some(ShipStyle::Arrow),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// App settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visuals ===
    /// Planet fill pattern
    pub dither: DitherMode,
    /// Player glyph
    pub ship_style: ShipStyle,
    /// Random background noise dots
    pub nebula: bool,
    /// Random spark dots while warping
    pub warp_sparks: bool,
    /// Expanding ellipses trailing the ship
    pub swirls: bool,

    // === Feedback ===
    /// Buzz when a comet passes close to the ship
    pub comet_haptics: bool,

    // === Host loop ===
    /// Tick period in milliseconds
    pub tick_ms: u64,
    /// Fixed world seed (None = random each run)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dither: DitherMode::Checkerboard,
            ship_style: ShipStyle::Dolphin,
            nebula: true,
            warp_sparks: true,
            swirls: false,

            comet_haptics: false,

            tick_ms: TICK_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Tick period, never below 1 ms
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms.max(1))
    }
}
