//! Rendering: SVG emission and PNG rasterization

mod config;
pub mod png;
mod svg;

use thiserror::Error;

use crate::font::FontError;

pub use config::SvgConfig;
pub use svg::render_svg;

/// Errors that can occur while producing the output image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Font acquisition failed (missing or corrupt file)
    #[error(transparent)]
    Font(#[from] FontError),

    /// Canvas dimensions unusable for rasterization
    #[error("degenerate canvas dimensions {width}x{height}")]
    Canvas { width: f64, height: f64 },

    /// SVG parsing or PNG encoding failed
    #[error("failed to encode image: {0}")]
    Encode(String),
}
