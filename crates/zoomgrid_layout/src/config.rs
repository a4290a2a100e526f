//! Grid configuration
//!
//! Engine-wide settings that can be loaded from TOML:
//!
//! ```toml
//! duration_ms = 350
//! spacing = 6.0
//! easing = { type = "out-elastic", amplitude = 0.7, period = 1.0 }
//!
//! [margins]
//! left = 10.0
//! top = 20.0
//! right = 10.0
//! bottom = 20.0
//! ```

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use zoomgrid_animation::Easing;
use zoomgrid_core::Insets;

/// Default animation duration
pub const DEFAULT_DURATION_MS: u32 = 250;
/// Default gap between cells
pub const DEFAULT_SPACING: f32 = 6.0;
/// Shortest duration accepted from configuration
pub const MIN_DURATION_MS: u32 = 50;
/// Longest duration accepted from configuration
pub const MAX_DURATION_MS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    /// Duration of every zoom animation
    pub duration_ms: u32,
    /// Gap between neighbouring cells
    pub spacing: f32,
    /// Curve shared by every tween of a group
    pub easing: Easing,
    /// Contents margins around the grid
    pub margins: Insets,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            spacing: DEFAULT_SPACING,
            easing: Easing::default(),
            margins: Insets::ZERO,
        }
    }
}

impl GridConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GridError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_DURATION_MS..=MAX_DURATION_MS).contains(&self.duration_ms) {
            return Err(GridError::DurationOutOfRange {
                duration_ms: self.duration_ms,
                min: MIN_DURATION_MS,
                max: MAX_DURATION_MS,
            });
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(GridError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}
