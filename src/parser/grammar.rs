//! Parser for labeled bracket notation
//!
//! The grammar is a single production, `tree := '[' label child* ']'`, where
//! a child is either a nested tree or a bare word. A label ending in an
//! unescaped `^` marks a collapsed constituent: its children must all be
//! bare words and are joined into one `Triangle` element.
//!
//! The parser is an iterative stack machine over the token stream rather
//! than call recursion, so arbitrarily deep nesting cannot exhaust the call
//! stack. Node depth is assigned from the stack height while parsing.

use crate::error::ParseError;

use super::ast::{Element, Span};
use super::lexer::{lex, Token, Word};

/// A constituent whose closing `]` has not been seen yet.
struct OpenNode {
    label: String,
    caret: bool,
    depth: usize,
    open_span: Span,
    children: Vec<Element>,
}

/// Parse bracket notation into an element tree.
///
/// Returns the single root element, or a [`ParseError`] whose offset points
/// at (or before) the first offending character.
pub fn parse(source: &str) -> Result<Element, ParseError> {
    let mut tokens = Vec::new();
    for (token, span) in lex(source) {
        match token {
            Ok(t) => tokens.push((t, span)),
            Err(()) => return Err(ParseError::syntax(span, "unrecognized character")),
        }
    }

    let mut stack: Vec<OpenNode> = Vec::new();
    let mut root: Option<Element> = None;
    let mut iter = tokens.into_iter();

    while let Some((token, span)) = iter.next() {
        if root.is_some() {
            return Err(ParseError::syntax(
                span,
                "trailing content after the root constituent",
            ));
        }
        match token {
            Token::BracketOpen => {
                if let Some(parent) = stack.last() {
                    if parent.caret {
                        return Err(ParseError::syntax(
                            span,
                            format!(
                                "collapsed constituent '{}^' cannot contain nested brackets",
                                parent.label
                            ),
                        ));
                    }
                }
                let (label, caret) = match iter.next() {
                    Some((Token::Word(Word { text, caret }), _)) => (text, caret),
                    _ => {
                        return Err(ParseError::syntax(span, "constituent is missing a label"));
                    }
                };
                stack.push(OpenNode {
                    label,
                    caret,
                    depth: stack.len(),
                    open_span: span,
                    children: Vec::new(),
                });
            }
            Token::BracketClose => {
                let Some(open) = stack.pop() else {
                    return Err(ParseError::syntax(span, "unmatched ']'"));
                };
                let element = close_node(open, span.end)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Token::Word(Word { mut text, caret }) => {
                // In child position a trailing caret is ordinary text.
                if caret {
                    text.push('^');
                }
                match stack.last_mut() {
                    Some(open) => open.children.push(Element::leaf(text, open.depth + 1, span)),
                    None => {
                        return Err(ParseError::syntax(
                            span,
                            "expected '[' to begin a constituent",
                        ));
                    }
                }
            }
        }
    }

    if let Some(open) = stack.first() {
        let end = source.len();
        return Err(ParseError::syntax(
            end..end,
            format!("unmatched '[' opened at offset {}", open.open_span.start),
        ));
    }

    root.ok_or_else(|| ParseError::syntax(0..0, "empty input: expected a bracketed constituent"))
}

/// Finish a constituent when its `]` arrives.
fn close_node(open: OpenNode, close_end: usize) -> Result<Element, ParseError> {
    let span = open.open_span.start..close_end;

    if open.caret {
        if open.children.is_empty() {
            return Err(ParseError::syntax(
                open.open_span,
                format!("collapsed constituent '{}^' has no phrase text", open.label),
            ));
        }
        // Children are guaranteed to be bare words here; nested brackets
        // were rejected when they were opened.
        let first = open.children.first().map(|c| c.span.start).unwrap_or(span.start);
        let last = open.children.last().map(|c| c.span.end).unwrap_or(span.end);
        let phrase = open
            .children
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let collapsed = Element::triangle(phrase, open.depth + 1, first..last);
        return Ok(Element::phrase(open.label, vec![collapsed], open.depth, span));
    }

    if open.children.is_empty() {
        // `[NP]` — a childless bracketed label renders as a bare leaf.
        return Ok(Element::leaf(open.label, open.depth, span));
    }

    Ok(Element::phrase(open.label, open.children, open.depth, span))
}
