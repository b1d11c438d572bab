//! Configuration for the layout engine

/// Spacing knobs for layout computation, in layout units (pixels).
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal padding on each side of a node's label text
    pub node_padding: f64,

    /// Minimum gap between adjacent sibling subtrees
    pub sibling_gap: f64,

    /// Vertical gap between a row of labels and the next row
    pub level_gap: f64,

    /// Extra vertical drop for collapsed (triangle) nodes, making the
    /// triangle glyph taller than a one-level connector
    pub triangle_drop: f64,

    /// Margin around the whole tree
    pub margin: f64,

    /// Gap between a connector endpoint and the label text it touches
    pub connector_inset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_padding: 6.0,
            sibling_gap: 12.0,
            level_gap: 32.0,
            triangle_drop: 16.0,
            margin: 12.0,
            connector_inset: 4.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding around node labels
    pub fn with_node_padding(mut self, padding: f64) -> Self {
        self.node_padding = padding;
        self
    }

    /// Set the gap between sibling subtrees
    pub fn with_sibling_gap(mut self, gap: f64) -> Self {
        self.sibling_gap = gap;
        self
    }

    /// Set the vertical gap between tree levels
    pub fn with_level_gap(mut self, gap: f64) -> Self {
        self.level_gap = gap;
        self
    }

    /// Set the extra vertical drop for triangle nodes
    pub fn with_triangle_drop(mut self, drop: f64) -> Self {
        self.triangle_drop = drop;
        self
    }

    /// Set the canvas margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}
