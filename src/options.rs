//! Rendering options
//!
//! The recognized option set matches what callers actually vary: palette,
//! smoothing, triangle handling, automatic subscripting, and the font.
//! Options can be built in code or loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading an options file
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options controlling how a tree is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeOptions {
    /// Colored palette (category labels blue, words red) vs monochrome
    pub color: bool,

    /// Smooth line and text rendering; off requests crisp edges
    pub antialias: bool,

    /// Honor collapsed (`^`) constituents; off force-expands them into
    /// plain word leaves
    pub triangles: bool,

    /// Number repeated category labels (`NP` → `NP1`, `NP2`)
    pub autosub: bool,

    /// TrueType/OpenType font file; system sans-serif when unset
    pub font_path: Option<PathBuf>,

    /// Font size in points
    pub font_size: u16,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            color: true,
            antialias: true,
            triangles: true,
            autosub: false,
            font_path: None,
            font_size: 12,
        }
    }
}

impl TreeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Set colored vs monochrome rendering
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set antialiasing
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Set whether collapsed constituents are honored
    pub fn with_triangles(mut self, triangles: bool) -> Self {
        self.triangles = triangles;
        self
    }

    /// Set automatic subscripting
    pub fn with_autosub(mut self, autosub: bool) -> Self {
        self.autosub = autosub;
        self
    }

    /// Set the font file
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Set the font size in points
    pub fn with_font_size(mut self, points: u16) -> Self {
        self.font_size = points;
        self
    }
}
