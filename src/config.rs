//! Render settings.
//!
//! Loaded from YAML; every field is optional and falls back to its default.
//!
//! ```yaml
//! antialiasing: true
//! fill_mode: seed-border
//! pattern_enabled: false
//! fill_color: "#ff0000"
//! border_color: "#0000ff"
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::fill::FillMode;
use crate::render::LineRasterizer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Strategy and color choices for drawing a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Draw lines with coverage splitting.
    #[serde(default)]
    pub antialiasing: bool,

    /// Fill strategy.
    #[serde(default)]
    pub fill_mode: FillMode,

    /// Use the checkerboard pattern for fills.
    #[serde(default)]
    pub pattern_enabled: bool,

    /// Fill color.
    #[serde(default = "default_fill_color")]
    pub fill_color: Rgba,

    /// Stop color for border-mode seed fills.
    #[serde(default = "default_border_color")]
    pub border_color: Rgba,

    /// Color at the start of each line.
    #[serde(default = "default_line_color")]
    pub line_start_color: Rgba,

    /// Color at the end of each line.
    #[serde(default = "default_line_color")]
    pub line_end_color: Rgba,

    /// Canvas clear color.
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_fill_color() -> Rgba {
    Rgba::WHITE
}
fn default_border_color() -> Rgba {
    Rgba::BLUE
}
fn default_line_color() -> Rgba {
    Rgba::WHITE
}
fn default_background() -> Rgba {
    Rgba::BLACK
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            antialiasing: false,
            fill_mode: FillMode::default(),
            pattern_enabled: false,
            fill_color: default_fill_color(),
            border_color: default_border_color(),
            line_start_color: default_line_color(),
            line_end_color: default_line_color(),
            background: default_background(),
        }
    }
}

impl RenderSettings {
    /// Default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses settings from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads settings with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes the settings back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Antialiasing as actually applied.
    ///
    /// Border-mode seed fills stop at an exact color, which blended edge
    /// pixels would no longer match, so antialiasing is off in that mode.
    #[must_use]
    pub fn effective_antialiasing(&self) -> bool {
        self.antialiasing && self.fill_mode != FillMode::SeedBorder
    }

    /// Line rasterizer matching [`Self::effective_antialiasing`].
    #[must_use]
    pub fn line_rasterizer(&self) -> LineRasterizer {
        LineRasterizer::from_antialiasing(self.effective_antialiasing())
    }
}
