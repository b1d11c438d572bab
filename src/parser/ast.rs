//! Element tree produced by the bracket-notation parser

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// What a parsed element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A labeled constituent with children, e.g. `[NP the cat]`.
    Phrase,
    /// A terminal word (or a childless bracketed label).
    Leaf,
    /// A collapsed constituent: multi-word phrase text drawn under a
    /// triangle instead of an expanded subtree.
    Triangle,
}

/// A node in the parsed tree.
///
/// `Phrase` nodes own at least one child; `Leaf` and `Triangle` nodes own
/// none. `depth` is assigned during parsing (root = 0). `subscript` is
/// filled in by the subscript resolver and is `None` until then.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub label: String,
    pub subscript: Option<u32>,
    pub kind: ElementKind,
    pub children: Vec<Element>,
    pub depth: usize,
    pub span: Span,
}

impl Element {
    pub fn phrase(label: impl Into<String>, children: Vec<Element>, depth: usize, span: Span) -> Self {
        Self {
            label: label.into(),
            subscript: None,
            kind: ElementKind::Phrase,
            children,
            depth,
            span,
        }
    }

    pub fn leaf(label: impl Into<String>, depth: usize, span: Span) -> Self {
        Self {
            label: label.into(),
            subscript: None,
            kind: ElementKind::Leaf,
            children: Vec::new(),
            depth,
            span,
        }
    }

    pub fn triangle(label: impl Into<String>, depth: usize, span: Span) -> Self {
        Self {
            label: label.into(),
            subscript: None,
            kind: ElementKind::Triangle,
            children: Vec::new(),
            depth,
            span,
        }
    }

    /// Label as drawn: the category text plus any resolved subscript digits.
    pub fn display_label(&self) -> String {
        match self.subscript {
            Some(n) => format!("{}{}", self.label, n),
            None => self.label.clone(),
        }
    }

    /// True for nodes that end a branch (terminal words and collapsed
    /// phrases).
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, ElementKind::Leaf | ElementKind::Triangle)
    }

    /// Deepest level in this subtree (a lone leaf has max depth == its own).
    pub fn max_depth(&self) -> usize {
        let mut max = self.depth;
        let mut stack: Vec<&Element> = vec![self];
        while let Some(node) = stack.pop() {
            max = max.max(node.depth);
            stack.extend(node.children.iter());
        }
        max
    }

    /// Pre-order, left-to-right visit of every node in the subtree.
    pub fn visit(&self, f: &mut dyn FnMut(&Element)) {
        let mut stack: Vec<&Element> = vec![self];
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children.iter().rev());
        }
    }

    /// Replace every `Triangle` child with the plain word leaves it
    /// collapsed, for rendering with triangles disabled. The words were
    /// joined with single spaces at parse time, so splitting on whitespace
    /// restores them.
    pub fn expand_triangles(&mut self) {
        let mut stack: Vec<&mut Element> = vec![self];
        while let Some(node) = stack.pop() {
            let depth = node.depth;
            let has_triangle = node
                .children
                .iter()
                .any(|c| c.kind == ElementKind::Triangle);
            if has_triangle {
                let mut expanded = Vec::with_capacity(node.children.len());
                for child in node.children.drain(..) {
                    if child.kind == ElementKind::Triangle {
                        for word in child.label.split_whitespace() {
                            expanded.push(Element::leaf(word, depth + 1, child.span.clone()));
                        }
                    } else {
                        expanded.push(child);
                    }
                }
                node.children = expanded;
            }
            stack.extend(node.children.iter_mut());
        }
    }
}
