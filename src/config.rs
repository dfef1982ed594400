//! Configuration for the three demos.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults. Every
//! field is optional; missing fields take the built-in defaults.
//!
//! ```yaml
//! version: 1
//! line:
//!   thick: true
//!   line_width: 7
//! circles:
//!   count: 24
//! clip:
//!   rect: [100, 100, 500, 400]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::demos::{circles, clip, line};
use crate::error::{Error, Result};

/// Line demo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Start with thick lines enabled.
    pub thick: bool,
    /// Initial line width (disk brush diameter).
    pub line_width: u32,
    /// Initial first endpoint.
    pub start: [i32; 2],
    /// Initial second endpoint.
    pub end: [i32; 2],
    /// Seed for the randomize action.
    pub seed: u64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            thick: true,
            line_width: 7,
            start: [120, 120],
            end: [780, 460],
            seed: 20_251_024,
        }
    }
}

/// Concentric circles demo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclesConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Number of rings.
    pub count: u32,
    /// Radius of the innermost ring.
    pub base_radius: u32,
    /// Radius increment per ring.
    pub radius_step: u32,
    /// Thickness of the innermost ring.
    pub base_thickness: u32,
    /// Thickness increment per ring.
    pub thickness_step: u32,
}

impl Default for CirclesConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            count: 18,
            base_radius: 18,
            radius_step: 12,
            base_thickness: 2,
            thickness_step: 1,
        }
    }
}

/// Clipping demo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Initial clip rectangle as `[xmin, ymin, xmax, ymax]`.
    pub rect: [i32; 4],
    /// Translation per move action.
    pub move_step: i32,
    /// Edge displacement per resize action.
    pub resize_step: i32,
    /// Segments generated by the randomize action.
    pub random_segments: usize,
    /// Seed for the randomize action; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            rect: [200, 150, 700, 450],
            move_step: 10,
            resize_step: 8,
            random_segments: 20,
            seed: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Line demo settings.
    #[serde(default)]
    pub line: LineConfig,

    /// Concentric circles demo settings.
    #[serde(default)]
    pub circles: CirclesConfig,

    /// Clipping demo settings.
    #[serde(default)]
    pub clip: ClipConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            line: LineConfig::default(),
            circles: CirclesConfig::default(),
            clip: ClipConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration file location (`<config dir>/raster-demos/config.yaml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("raster-demos").join("config.yaml"))
    }

    /// Loads the default configuration file if it exists, else the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is invalid.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                log::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to default configuration");
            Self::default()
        })
    }

    /// Checks every value against the bounds the demos enforce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        positive("line.width", self.line.width)?;
        positive("line.height", self.line.height)?;
        within("line.line_width", self.line.line_width, line::WIDTH_RANGE)?;

        positive("circles.width", self.circles.width)?;
        positive("circles.height", self.circles.height)?;
        within("circles.count", self.circles.count, circles::COUNT_RANGE)?;
        within(
            "circles.radius_step",
            self.circles.radius_step,
            circles::RADIUS_STEP_RANGE,
        )?;
        within(
            "circles.base_thickness",
            self.circles.base_thickness,
            circles::BASE_THICKNESS_RANGE,
        )?;
        within(
            "circles.thickness_step",
            self.circles.thickness_step,
            circles::THICKNESS_STEP_RANGE,
        )?;

        positive("clip.width", self.clip.width)?;
        positive("clip.height", self.clip.height)?;
        step_within("clip.move_step", self.clip.move_step)?;
        step_within("clip.resize_step", self.clip.resize_step)?;
        if self.clip.random_segments > clip::MAX_RANDOM_SEGMENTS {
            return Err(invalid(
                "clip.random_segments",
                &format!("must be at most {}", clip::MAX_RANDOM_SEGMENTS),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn positive(key: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid(key, "must be at least 1"));
    }
    Ok(())
}

fn step_within(key: &str, value: i32) -> Result<()> {
    let range = clip::STEP_RANGE;
    if !range.contains(&value) {
        return Err(invalid(
            key,
            &format!("{value} is outside {}..={}", range.start(), range.end()),
        ));
    }
    Ok(())
}

fn within(key: &str, value: u32, range: std::ops::RangeInclusive<u32>) -> Result<()> {
    if !range.contains(&value) {
        return Err(invalid(
            key,
            &format!("{value} is outside {}..={}", range.start(), range.end()),
        ));
    }
    Ok(())
}
