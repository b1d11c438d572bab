//! Positioned-tree types produced by the layout engine

use crate::parser::ast::ElementKind;

/// A line segment or triangle linking a parent to one child.
///
/// Coordinates are absolute canvas positions. Triangle connectors replace
/// the single line for collapsed children: the apex sits under the parent
/// label and the base spans the collapsed phrase text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Connector {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Triangle {
        apex: (f64, f64),
        base_left: (f64, f64),
        base_right: (f64, f64),
    },
}

/// An element annotated with layout results.
///
/// `x_center`/`y_top` anchor the label text; `subtree_width` is the full
/// horizontal span reserved for this node and its descendants. Connectors
/// to the children are stored on the parent.
#[derive(Debug, Clone)]
pub struct PositionedElement {
    pub label: String,
    pub subscript: Option<u32>,
    pub kind: ElementKind,
    pub x_center: f64,
    pub y_top: f64,
    pub subtree_width: f64,
    pub text_width: f64,
    pub text_height: f64,
    pub connectors: Vec<Connector>,
    pub children: Vec<PositionedElement>,
}

impl PositionedElement {
    /// Label as drawn: the category text plus any subscript digits.
    pub fn display_label(&self) -> String {
        match self.subscript {
            Some(n) => format!("{}{}", self.label, n),
            None => self.label.clone(),
        }
    }

    /// Left edge of the span reserved for this subtree.
    pub fn left(&self) -> f64 {
        self.x_center - self.subtree_width / 2.0
    }

    /// Right edge of the span reserved for this subtree.
    pub fn right(&self) -> f64 {
        self.x_center + self.subtree_width / 2.0
    }

    /// Bottom edge of the label text.
    pub fn text_bottom(&self) -> f64 {
        self.y_top + self.text_height
    }

    /// Terminal nodes of this subtree in left-to-right order.
    pub fn terminals(&self) -> Vec<&PositionedElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&PositionedElement> = vec![self];
        while let Some(node) = stack.pop() {
            if node.children.is_empty() {
                out.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

/// The positioned tree plus the canvas it needs.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    pub root: PositionedElement,
    pub width: f64,
    pub height: f64,
}
