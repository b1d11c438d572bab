//! treegraph - render linguistic syntax trees from labeled bracket notation
//!
//! This library parses a bracketed tree description like
//! `[S [NP the cat] [VP sat]]`, computes a tidy layout from real font
//! metrics, and draws the tree as SVG (optionally rasterized to PNG):
//! category labels per row, parent-to-child connector lines, optional
//! triangles for collapsed constituents, and optional automatic subscripts
//! on repeated category labels.
//!
//! # Example
//!
//! ```rust
//! let svg = treegraph::render("[S [NP the cat] [VP sat]]").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(">cat</text>"));
//! ```

pub mod error;
pub mod font;
pub mod layout;
pub mod options;
pub mod parser;
pub mod renderer;
pub mod subscript;

pub use error::ParseError;
pub use font::{FontError, FontMetrics, TextMeasure, TextSize, TextStyle};
pub use layout::{Connector, LayoutConfig, LayoutError, LayoutTree, PositionedElement};
pub use options::{OptionsError, TreeOptions};
pub use parser::{parse, Element, ElementKind};
pub use renderer::{render_svg, RenderError, SvgConfig};

use log::debug;
use thiserror::Error;

/// Errors from the complete render pipeline.
///
/// Each stage short-circuits: a parse failure never reaches layout, and no
/// partial image is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error during parsing
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error during rendering
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl From<FontError> for PipelineError {
    fn from(err: FontError) -> Self {
        PipelineError::Render(RenderError::Font(err))
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Tree rendering options
    pub options: TreeOptions,
    /// Layout spacing configuration
    pub layout: LayoutConfig,
    /// SVG serialization configuration
    pub svg: SvgConfig,
    /// Debug mode: dump computed positions to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tree options
    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render bracket notation to SVG with default configuration.
///
/// This is the main entry point for the library. It parses the source,
/// computes layout, and generates SVG output.
///
/// # Example
///
/// ```rust
/// let svg = treegraph::render("[S [NP John] [VP [V saw] [NP Mary]]]").unwrap();
/// assert!(svg.contains(">saw</text>"));
/// ```
pub fn render(source: &str) -> Result<String, PipelineError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render bracket notation to SVG with custom configuration.
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, PipelineError> {
    let (tree, metrics) = prepare(source, config)?;
    Ok(render_svg(
        &tree,
        &config.options,
        &metrics.text_style(),
        &config.svg,
    ))
}

/// Render bracket notation to PNG bytes with default configuration.
pub fn render_png(source: &str) -> Result<Vec<u8>, PipelineError> {
    render_png_with_config(source, &RenderConfig::default())
}

/// Render bracket notation to PNG bytes with custom configuration.
pub fn render_png_with_config(
    source: &str,
    config: &RenderConfig,
) -> Result<Vec<u8>, PipelineError> {
    let (tree, metrics) = prepare(source, config)?;
    let svg = render_svg(&tree, &config.options, &metrics.text_style(), &config.svg);
    let png = renderer::png::rasterize(
        &svg,
        config.options.font_path.as_deref(),
        tree.width,
        tree.height,
    )?;
    Ok(png)
}

/// Run the pipeline up to layout: parse, normalize, subscript, measure.
fn prepare(
    source: &str,
    config: &RenderConfig,
) -> Result<(LayoutTree, FontMetrics), PipelineError> {
    let mut element = parse(source)?;
    debug!("parsed tree with max depth {}", element.max_depth());

    if !config.options.triangles {
        element.expand_triangles();
    }
    if config.options.autosub {
        subscript::resolve(&mut element);
    }

    let metrics = FontMetrics::load(
        config.options.font_path.as_deref(),
        config.options.font_size,
    )?;
    let tree = layout::compute(&element, &metrics, &config.layout)?;
    debug!("laid out {}x{} canvas", tree.width, tree.height);

    if config.debug {
        fn print_tree(node: &layout::PositionedElement, depth: usize) {
            let indent = "  ".repeat(depth);
            eprintln!(
                "{}{} x={:.1} y={:.1} w={:.1}",
                indent,
                node.display_label(),
                node.x_center,
                node.y_top,
                node.subtree_width
            );
            for child in &node.children {
                print_tree(child, depth + 1);
            }
        }
        eprintln!("=== Layout Debug ===");
        print_tree(&tree.root, 0);
        eprintln!("====================");
    }

    Ok((tree, metrics))
}
