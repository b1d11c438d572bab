//! Error type for parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::ast::Span;

/// Structured parse failure: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("parse error at offset {}: {message}", span.start)]
    Syntax { span: Span, message: String },
}

impl ParseError {
    pub fn syntax(span: Span, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            span,
            message: message.into(),
        }
    }

    /// Byte offset of the first offending character.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax { span, .. } => span.start,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax { span, message } => {
                // A span at end-of-input still needs a visible caret.
                let span = if span.start == span.end {
                    span.start..span.end + 1
                } else {
                    span.clone()
                };
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
