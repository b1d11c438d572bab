//! Automatic subscripting of repeated category labels
//!
//! When two constituents in one tree share a label (two `NP`s, say), the
//! rendered tree is ambiguous about which is which. This pass numbers every
//! occurrence of a repeated phrase label in pre-order, left-to-right
//! (`NP` → `NP1`, `NP2`); unique labels are left alone. Terminal words and
//! collapsed triangle text are never subscripted.

use std::collections::HashMap;

use crate::parser::ast::{Element, ElementKind};

/// Assign subscripts to repeated phrase labels.
///
/// Assignments are recomputed from the (unchanged) `label` fields on every
/// call, so running the resolver twice yields identical results.
pub fn resolve(root: &mut Element) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    root.visit(&mut |node| {
        if node.kind == ElementKind::Phrase {
            *counts.entry(node.label.clone()).or_default() += 1;
        }
    });

    let mut next: HashMap<String, u32> = HashMap::new();
    // Pre-order, left-to-right, matching the counting pass.
    let mut stack: Vec<&mut Element> = vec![root];
    while let Some(node) = stack.pop() {
        if node.kind == ElementKind::Phrase {
            if counts.get(&node.label).copied().unwrap_or(0) > 1 {
                let counter = next.entry(node.label.clone()).or_insert(0);
                *counter += 1;
                node.subscript = Some(*counter);
            } else {
                node.subscript = None;
            }
        }
        for child in node.children.iter_mut().rev() {
            stack.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn subscripts(tree: &Element) -> Vec<(String, String)> {
        let mut out = Vec::new();
        tree.visit(&mut |node| {
            if node.kind == ElementKind::Phrase {
                out.push((node.label.clone(), node.display_label()));
            }
        });
        out
    }

    #[test]
    fn test_repeated_labels_are_numbered_in_order() {
        let mut tree = parse("[S [NP John] [VP [V saw] [NP Mary]]]").unwrap();
        resolve(&mut tree);
        assert_eq!(
            subscripts(&tree),
            vec![
                ("S".into(), "S".into()),
                ("NP".into(), "NP1".into()),
                ("VP".into(), "VP".into()),
                ("V".into(), "V".into()),
                ("NP".into(), "NP2".into()),
            ]
        );
    }

    #[test]
    fn test_unique_labels_untouched() {
        let mut tree = parse("[S [NP dogs] [VP bark]]").unwrap();
        resolve(&mut tree);
        let mut any_subscript = false;
        tree.visit(&mut |node| any_subscript |= node.subscript.is_some());
        assert!(!any_subscript);
    }

    #[test]
    fn test_terminals_never_subscripted() {
        // "the" repeats as a word; words are not category labels.
        let mut tree = parse("[S [NP the cat] [NP the dog]]").unwrap();
        resolve(&mut tree);
        tree.visit(&mut |node| {
            if node.is_terminal() {
                assert_eq!(node.subscript, None);
            }
        });
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let mut once = parse("[S [NP a] [NP b] [NP c] [VP d]]").unwrap();
        resolve(&mut once);
        let mut twice = once.clone();
        resolve(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_three_way_collision() {
        let mut tree = parse("[X [N a] [N b] [N c]]").unwrap();
        resolve(&mut tree);
        let labels: Vec<String> = subscripts(&tree).into_iter().map(|(_, d)| d).collect();
        assert_eq!(labels, vec!["X", "N1", "N2", "N3"]);
    }
}
