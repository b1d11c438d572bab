//! Font loading and text measurement
//!
//! Layout needs real glyph widths, not character counts: `VP` and `WWW` are
//! the same length but nowhere near the same width. Measurement goes through
//! cosmic-text shaping so kerning and ligatures are accounted for. The
//! [`TextMeasure`] trait is the seam between layout and fonts; tests supply
//! a fixed-metrics implementation instead.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, info};
use thiserror::Error;

/// Point-to-pixel conversion at standard DPI.
const PT_TO_PX: f32 = 1.33;

/// Line height as a multiple of the pixel font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Fallback per-character advance (fraction of the pixel font size) when a
/// buffer produces no layout runs, e.g. on a system with no fonts installed.
const FALLBACK_ADVANCE: f32 = 0.55;

/// Errors from font acquisition.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font '{path}': {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("font '{path}' contains no usable face")]
    NoFace { path: PathBuf },
}

/// Measured extent of a piece of text, in layout units (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Text measurement capability handed to the layout engine.
pub trait TextMeasure {
    /// Width/height of `text` rendered on a single line.
    fn measure(&self, text: &str) -> TextSize;

    /// Height of one text row, independent of content.
    fn line_height(&self) -> f64;
}

/// Font family and pixel size, as the renderer needs them for SVG
/// attributes.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub family: String,
    pub px: f64,
}

/// Real font metrics backed by a cosmic-text `FontSystem`.
///
/// The `FontSystem` is behind a `Mutex` so one `FontMetrics` can be shared
/// across concurrent renders; the font data itself is read-only after load.
#[derive(Debug)]
pub struct FontMetrics {
    font_system: Mutex<FontSystem>,
    family: Option<String>,
    font_size: u16,
}

impl FontMetrics {
    /// Build metrics for `font_size` points, optionally loading a font file.
    ///
    /// With no `font_path` the system's sans-serif fonts are used. A path
    /// that cannot be read, or that yields no font face, is a [`FontError`].
    pub fn load(font_path: Option<&Path>, font_size: u16) -> Result<Self, FontError> {
        let mut font_system = FontSystem::new();
        let family = match font_path {
            Some(path) => {
                let data = std::fs::read(path).map_err(|e| FontError::Read {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                let db = font_system.db_mut();
                let before = db.faces().count();
                db.load_font_data(data);
                let face = db.faces().nth(before).ok_or_else(|| FontError::NoFace {
                    path: path.to_path_buf(),
                })?;
                let family = face
                    .families
                    .first()
                    .map(|(name, _)| name.clone())
                    .ok_or_else(|| FontError::NoFace {
                        path: path.to_path_buf(),
                    })?;
                info!("loaded font '{}' from {}", family, path.display());
                Some(family)
            }
            None => {
                debug!("no font path given, using system sans-serif");
                None
            }
        };
        Ok(Self {
            font_system: Mutex::new(font_system),
            family,
            font_size,
        })
    }

    /// Configured size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    fn px(&self) -> f32 {
        f32::from(self.font_size) * PT_TO_PX
    }

    /// Style attributes for the renderer.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            family: self
                .family
                .clone()
                .unwrap_or_else(|| "sans-serif".to_string()),
            px: f64::from(self.px()),
        }
    }
}

impl TextMeasure for FontMetrics {
    fn measure(&self, text: &str) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = self.px();
        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = match &self.family {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new().family(Family::SansSerif),
        };

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // No fonts available at all; estimate from character count so
            // layout still produces a usable tree.
            max_width = text.chars().count() as f32 * font_size_px * FALLBACK_ADVANCE;
            total_height = line_height;
        } else {
            for run in &layout_runs {
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        TextSize {
            width: f64::from(max_width),
            height: f64::from(total_height),
        }
    }

    fn line_height(&self) -> f64 {
        f64::from(self.px() * LINE_HEIGHT_FACTOR)
    }
}
