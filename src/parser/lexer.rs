//! Lexer for labeled bracket notation using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Un-escaped word text plus whether a trailing collapse marker was seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub caret: bool,
}

/// Tokens of the bracket notation.
///
/// Anything that is not a bracket or whitespace is a `Word`. Words may
/// contain `\[`, `\]`, `\\` and `\^` escapes, which are un-escaped during
/// lexing. A trailing unescaped `^` is stripped from the word text and
/// reported through the `caret` flag; the grammar decides whether it marks
/// a collapsed constituent (label position) or is plain text (child
/// position).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[regex(r"([^\[\]\s\\]|\\[\[\]\\^])+", |lex| unescape(lex.slice()))]
    Word(Word),
}

/// Un-escape a raw word slice and split off a trailing unescaped caret.
fn unescape(raw: &str) -> Word {
    let (raw, caret) = match raw.strip_suffix('^') {
        // A caret preceded by an odd number of backslashes was an escape,
        // not a marker.
        Some(head) => {
            let escapes = head.chars().rev().take_while(|&c| c == '\\').count();
            if escapes % 2 == 0 {
                (head, true)
            } else {
                (raw, false)
            }
        }
        None => (raw, false),
    };

    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                text.push(escaped);
            }
        } else {
            text.push(c);
        }
    }
    Word { text, caret }
}

/// Lex input into `(token, span)` pairs; unlexable bytes yield `Err` items
/// so the parser can report them with a position.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
