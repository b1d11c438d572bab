//! Layout computation engine
//!
//! Computes node positions from a parsed element tree and a text measurer,
//! producing a [`LayoutTree`] the renderer can draw without further
//! geometry.
//!
//! The pass structure is the classic two phases for tidy trees:
//!
//! 1. **Measure** (post-order): every node gets its label extent and the
//!    total width of its subtree. A phrase is as wide as its children plus
//!    gaps, or as wide as its own label if that is larger.
//! 2. **Place** (pre-order): children are laid out left to right inside the
//!    parent's span; when the parent is wider than its children the slack is
//!    split symmetrically so the child block stays centered. A parent's
//!    `x_center` is the midpoint of its children's combined span. Rows are
//!    uniform height; collapsed nodes sink an extra `triangle_drop`.
//!
//! Connector geometry (parent-to-child lines, triangle vertices) is
//! computed here and stored on the parent, so the renderer only draws.

use crate::font::TextMeasure;
use crate::parser::ast::{Element, ElementKind};

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{Connector, LayoutTree, PositionedElement};

/// Lay out an element tree.
///
/// All geometry stays in `f64`; nothing is rounded until serialization, so
/// centering does not drift on deep trees.
pub fn compute(
    root: &Element,
    measure: &dyn TextMeasure,
    config: &LayoutConfig,
) -> Result<LayoutTree, LayoutError> {
    if root.children.is_empty() && root.label.trim().is_empty() {
        return Err(LayoutError::EmptyTree);
    }

    let row_height = measure.line_height() + config.level_gap;
    let mut positioned = measure_node(root, measure, config);
    let mut max_bottom: f64 = 0.0;
    place_node(
        &mut positioned,
        config.margin,
        0,
        row_height,
        config,
        &mut max_bottom,
    );

    Ok(LayoutTree {
        width: positioned.subtree_width + 2.0 * config.margin,
        height: max_bottom + config.margin,
        root: positioned,
    })
}

/// Combined width of already-measured children, including gaps.
fn children_span(children: &[PositionedElement], config: &LayoutConfig) -> f64 {
    let widths: f64 = children.iter().map(|c| c.subtree_width).sum();
    widths + config.sibling_gap * (children.len().saturating_sub(1)) as f64
}

/// Post-order measurement: text extents and subtree widths.
fn measure_node(
    elem: &Element,
    measure: &dyn TextMeasure,
    config: &LayoutConfig,
) -> PositionedElement {
    let text = measure.measure(&elem.display_label());
    let children: Vec<PositionedElement> = elem
        .children
        .iter()
        .map(|child| measure_node(child, measure, config))
        .collect();

    let own_width = text.width + 2.0 * config.node_padding;
    let subtree_width = if children.is_empty() {
        own_width
    } else {
        own_width.max(children_span(&children, config))
    };

    PositionedElement {
        label: elem.label.clone(),
        subscript: elem.subscript,
        kind: elem.kind,
        x_center: 0.0,
        y_top: 0.0,
        subtree_width,
        text_width: text.width,
        text_height: text.height,
        connectors: Vec::new(),
        children,
    }
}

/// Pre-order placement: assign coordinates and connector geometry.
fn place_node(
    node: &mut PositionedElement,
    left: f64,
    depth: usize,
    row_height: f64,
    config: &LayoutConfig,
    max_bottom: &mut f64,
) {
    let drop = if node.kind == ElementKind::Triangle {
        config.triangle_drop
    } else {
        0.0
    };
    node.y_top = config.margin + depth as f64 * row_height + drop;
    *max_bottom = max_bottom.max(node.text_bottom());

    if node.children.is_empty() {
        node.x_center = left + node.subtree_width / 2.0;
        return;
    }

    // Symmetric slack split: when the label out-spans the children, the
    // child block is centered inside the reserved span.
    let span = children_span(&node.children, config);
    let mut child_left = left + (node.subtree_width - span) / 2.0;
    for child in node.children.iter_mut() {
        place_node(child, child_left, depth + 1, row_height, config, max_bottom);
        child_left += child.subtree_width + config.sibling_gap;
    }

    if let (Some(first), Some(last)) = (node.children.first(), node.children.last()) {
        node.x_center = (first.left() + last.right()) / 2.0;
    }

    let parent_bottom = node.text_bottom() + config.connector_inset;
    let x_center = node.x_center;
    node.connectors = node
        .children
        .iter()
        .map(|child| {
            let child_top = child.y_top - config.connector_inset;
            match child.kind {
                ElementKind::Triangle => Connector::Triangle {
                    apex: (x_center, parent_bottom),
                    base_left: (child.x_center - child.text_width / 2.0, child_top),
                    base_right: (child.x_center + child.text_width / 2.0, child_top),
                },
                _ => Connector::Line {
                    x1: x_center,
                    y1: parent_bottom,
                    x2: child.x_center,
                    y2: child_top,
                },
            }
        })
        .collect();
}
