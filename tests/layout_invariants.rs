//! Layout invariants over a fixed-metrics measurer
//!
//! These tests use a monospace stand-in for font metrics so the geometry is
//! exact and independent of the fonts installed on the machine.

use treegraph::{
    layout, parse, subscript, Connector, ElementKind, LayoutConfig, PositionedElement,
    TextMeasure, TextSize,
};

struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str) -> TextSize {
        TextSize {
            width: text.chars().count() as f64 * 10.0,
            height: 16.0,
        }
    }

    fn line_height(&self) -> f64 {
        16.0
    }
}

fn layout_of(input: &str) -> treegraph::LayoutTree {
    let tree = parse(input).unwrap();
    layout::compute(&tree, &FixedMeasure, &LayoutConfig::default()).unwrap()
}

fn for_each_node(node: &PositionedElement, f: &mut dyn FnMut(&PositionedElement)) {
    f(node);
    for child in &node.children {
        for_each_node(child, f);
    }
}

const SENTENCES: &[&str] = &[
    "[S [NP the cat] [VP sat]]",
    "[S [NP John] [VP [V saw] [NP Mary]]]",
    "[S [NP [D the] [N cat]] [VP [V chased] [NP [D the] [N mouse]]]]",
    "[ROOT [XXXXXXXXXXXXXXXXXXXX a] [Y b]]",
    "[S [NP^ the old man] [VP [V saw] [NP^ the young dog]]]",
    "[A [B [C [D [E deep]]]]]",
];

#[test]
fn test_sibling_subtrees_never_overlap() {
    for input in SENTENCES {
        let tree = layout_of(input);
        for_each_node(&tree.root, &mut |node| {
            for pair in node.children.windows(2) {
                assert!(
                    pair[0].x_center + pair[0].subtree_width / 2.0
                        <= pair[1].x_center - pair[1].subtree_width / 2.0,
                    "{input}: '{}' and '{}' overlap",
                    pair[0].label,
                    pair[1].label
                );
            }
        });
    }
}

#[test]
fn test_parents_sit_at_child_span_midpoint() {
    for input in SENTENCES {
        let tree = layout_of(input);
        for_each_node(&tree.root, &mut |node| {
            if let (Some(first), Some(last)) = (node.children.first(), node.children.last()) {
                let midpoint = (first.left() + last.right()) / 2.0;
                assert!(
                    (node.x_center - midpoint).abs() < 1e-9,
                    "{input}: '{}' off midpoint",
                    node.label
                );
            }
        });
    }
}

#[test]
fn test_rows_strictly_increase_with_depth() {
    for input in SENTENCES {
        let tree = layout_of(input);
        for_each_node(&tree.root, &mut |node| {
            for child in &node.children {
                assert!(child.y_top > node.y_top, "{input}: row order violated");
            }
        });
    }
}

#[test]
fn test_canvas_contains_every_node() {
    for input in SENTENCES {
        let tree = layout_of(input);
        assert!(tree.width > 0.0);
        assert!(tree.height > 0.0);
        for_each_node(&tree.root, &mut |node| {
            assert!(node.left() >= 0.0);
            assert!(node.right() <= tree.width + 1e-9);
            assert!(node.y_top >= 0.0);
            assert!(node.text_bottom() <= tree.height + 1e-9);
        });
    }
}

#[test]
fn test_terminal_row_increases_left_to_right() {
    let tree = layout_of("[S [NP John] [VP [V saw] [NP Mary]]]");
    let terminals = tree.root.terminals();
    let labels: Vec<&str> = terminals.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["John", "saw", "Mary"]);
    for pair in terminals.windows(2) {
        assert!(pair[0].x_center < pair[1].x_center);
    }
}

#[test]
fn test_triangle_connector_spans_collapsed_text() {
    let tree = layout_of("[S [NP^ the old man] [VP left]]");
    let np = &tree.root.children[0];
    let collapsed = &np.children[0];
    assert_eq!(collapsed.kind, ElementKind::Triangle);
    match np.connectors[0] {
        Connector::Triangle {
            apex,
            base_left,
            base_right,
        } => {
            let base_width = base_right.0 - base_left.0;
            assert!((base_width - collapsed.text_width).abs() < 1e-9);
            assert!(base_left.1 > apex.1, "base must sit below the apex");
        }
        Connector::Line { .. } => panic!("expected a triangle connector"),
    }
}

#[test]
fn test_subscripted_tree_still_satisfies_invariants() {
    let mut element = parse("[S [NP a] [NP bb] [NP ccc]]").unwrap();
    subscript::resolve(&mut element);
    let tree = layout::compute(&element, &FixedMeasure, &LayoutConfig::default()).unwrap();
    for_each_node(&tree.root, &mut |node| {
        for pair in node.children.windows(2) {
            assert!(pair[0].right() <= pair[1].left());
        }
    });
}

#[test]
fn test_wider_gap_widens_canvas() {
    let element = parse("[S [NP a] [VP b]]").unwrap();
    let narrow = layout::compute(&element, &FixedMeasure, &LayoutConfig::default()).unwrap();
    let wide = layout::compute(
        &element,
        &FixedMeasure,
        &LayoutConfig::default().with_sibling_gap(60.0),
    )
    .unwrap();
    assert!(wide.width > narrow.width);
}
