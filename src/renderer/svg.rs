//! SVG generation from a positioned tree

use crate::font::TextStyle;
use crate::layout::{Connector, LayoutTree, PositionedElement};
use crate::options::TreeOptions;
use crate::parser::ast::ElementKind;

use super::SvgConfig;

/// Fraction of the text height from `y_top` down to the baseline.
const ASCENT_RATIO: f64 = 0.8;

/// Subscript digits relative to the label size.
const SUBSCRIPT_SCALE: f64 = 0.7;

/// How far subscript digits sit below the label baseline, as a fraction of
/// the font size.
const SUBSCRIPT_SHIFT: f64 = 0.25;

/// Label and connector colors for one rendering mode.
struct Palette {
    phrase: &'static str,
    terminal: &'static str,
    connector: &'static str,
}

const COLORED: Palette = Palette {
    phrase: "#0000cc",
    terminal: "#cc0000",
    connector: "#666666",
};

const MONOCHROME: Palette = Palette {
    phrase: "#000000",
    terminal: "#000000",
    connector: "#000000",
};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    connectors: Vec<String>,
    labels: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            connectors: vec![],
            labels: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    /// Add a parent-to-child connector line
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        let prefix = self.prefix();
        self.connectors.push(format!(
            r#"{}<line class="{}connector" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            self.indent(),
            prefix,
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            stroke
        ));
    }

    /// Add the triangle glyph for a collapsed constituent
    pub fn add_triangle(
        &mut self,
        apex: (f64, f64),
        base_left: (f64, f64),
        base_right: (f64, f64),
        stroke: &str,
    ) {
        let prefix = self.prefix();
        self.connectors.push(format!(
            r#"{}<polygon class="{}triangle" points="{},{} {},{} {},{}" fill="none" stroke="{}"/>"#,
            self.indent(),
            prefix,
            fmt(apex.0),
            fmt(apex.1),
            fmt(base_left.0),
            fmt(base_left.1),
            fmt(base_right.0),
            fmt(base_right.1),
            stroke
        ));
    }

    /// Add a node label, with optional subscript digits
    pub fn add_label(
        &mut self,
        text: &str,
        subscript: Option<u32>,
        x_center: f64,
        baseline: f64,
        style: &TextStyle,
        fill: &str,
    ) {
        let prefix = self.prefix();
        let subscript_markup = match subscript {
            Some(n) => format!(
                r#"<tspan dy="{}" font-size="{}">{}</tspan>"#,
                fmt(style.px * SUBSCRIPT_SHIFT),
                fmt(style.px * SUBSCRIPT_SCALE),
                n
            ),
            None => String::new(),
        };
        self.labels.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" fill="{}">{}{}</text>"#,
            self.indent(),
            prefix,
            fmt(x_center),
            fmt(baseline),
            escape_xml(&style.family),
            fmt(style.px),
            fill,
            escape_xml(text),
            subscript_markup
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64, antialias: bool) -> String {
        let nl = if self.config.pretty_print { "\n" } else { "" };

        let mut svg = String::new();
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let rendering_hints = if antialias {
            ""
        } else {
            r#" shape-rendering="crispEdges" text-rendering="optimizeSpeed""#
        };
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}"{}>"#,
            fmt(width),
            fmt(height),
            fmt(width),
            fmt(height),
            rendering_hints
        ));
        svg.push_str(nl);

        // Connectors first so text is never struck through.
        for connector in &self.connectors {
            svg.push_str(connector);
            svg.push_str(nl);
        }
        for label in &self.labels {
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a positioned tree to an SVG string.
pub fn render_svg(
    tree: &LayoutTree,
    options: &TreeOptions,
    style: &TextStyle,
    config: &SvgConfig,
) -> String {
    let palette = if options.color { COLORED } else { MONOCHROME };
    let mut builder = SvgBuilder::new(config.clone());

    let mut stack: Vec<&PositionedElement> = vec![&tree.root];
    while let Some(node) = stack.pop() {
        let fill = match node.kind {
            ElementKind::Phrase => palette.phrase,
            ElementKind::Leaf | ElementKind::Triangle => palette.terminal,
        };
        let baseline = node.y_top + node.text_height * ASCENT_RATIO;
        builder.add_label(
            &node.label,
            node.subscript,
            node.x_center,
            baseline,
            style,
            fill,
        );

        for connector in &node.connectors {
            match *connector {
                Connector::Line { x1, y1, x2, y2 } => {
                    builder.add_line(x1, y1, x2, y2, palette.connector);
                }
                Connector::Triangle {
                    apex,
                    base_left,
                    base_right,
                } => {
                    builder.add_triangle(apex, base_left, base_right, palette.connector);
                }
            }
        }

        stack.extend(node.children.iter().rev());
    }

    builder.build(tree.width, tree.height, options.antialias)
}

/// Format a coordinate with enough precision for rendering, without the
/// floating-point noise of the default `Display`.
fn fmt(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
