//! # Token Cursor
//!
//! The grammar walks the token stream through a cursor that owns both
//! the position and the error bookkeeping. Productions never build
//! error values themselves: they declare what would have been
//! acceptable at the current token ([`Cursor::eat`], [`Cursor::fail`])
//! and hand back a unit [`ParseFailure`]. The cursor keeps the labels
//! recorded at the furthest position reached, and [`Cursor::error`]
//! turns them into the one message worth showing once the whole parse
//! has given up.
//!
//! Speculative branches save a mark and rewind on failure:
//!
//! ```text
//! let mark = cursor.mark();
//! match atom(cursor) {
//!     Ok(arg) => result = Term::app(result, arg),
//!     Err(_) => {
//!         cursor.rewind(mark);
//!         return Ok(result);
//!     }
//! }
//! ```
//!
//! Rewinding moves only the position; recorded labels stay behind.
//! That is what makes the final message list every alternative that
//! was tried at the point of failure, even the ones tried inside
//! branches that were later rolled back.

use std::fmt;

use lachs::Span;

use crate::lexer::Token;

/// Marker for a failed production; the message lives in the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailure;

/// Result type for grammar productions.
pub type ParseResult<T> = Result<T, ParseFailure>;

/// Why an input line was rejected.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The lexer rejected the raw input.
    Lex(String),
    /// The token stream stopped matching the grammar.
    Unexpected {
        /// Labels for everything acceptable at the failure point.
        expected: Vec<String>,
        /// Description and position of the offending token; `None`
        /// when the input ended too early.
        found: Option<(String, Span)>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(message) => write!(f, "Parse error: {message}"),
            ParseError::Unexpected { expected, found } => {
                let mut msg = if expected.is_empty() {
                    String::from("unexpected input")
                } else {
                    String::from("expected ")
                };
                for (i, what) in expected.iter().enumerate() {
                    if i > 0 {
                        msg.push_str(if i + 1 == expected.len() { " or " } else { ", " });
                    }
                    msg.push_str(what);
                }
                match found {
                    Some((description, span)) => {
                        let msg = format!("{msg}, found {description}");
                        if span.source.is_empty() {
                            write!(f, "Parse error: {msg}")
                        } else {
                            write!(f, "{}", span.to_string(&msg))
                        }
                    }
                    None => write!(f, "Parse error: {msg}, found end of input"),
                }
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Position in the token stream plus the expectations recorded at the
/// furthest point the grammar reached.
pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
    furthest: usize,
    expected: Vec<String>,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: 0,
            expected: Vec::new(),
        }
    }

    /// Next token, unconsumed.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// Whether the next token satisfies `accepts`.
    pub fn at(&self, accepts: impl Fn(&Token) -> bool) -> bool {
        self.peek().is_some_and(accepts)
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Consume the next token unconditionally (after a successful
    /// [`Cursor::at`] check).
    pub fn bump(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Consume the next token if it satisfies `accepts`, otherwise
    /// record `what` as an expectation and fail.
    pub fn eat(&mut self, what: &str, accepts: impl Fn(&Token) -> bool) -> ParseResult<Token> {
        match self.tokens.get(self.index) {
            Some(token) if accepts(token) => {
                let token = token.clone();
                self.index += 1;
                Ok(token)
            }
            _ => Err(self.fail(&[what])),
        }
    }

    /// Record every label in `wanted` as acceptable here and fail.
    pub fn fail(&mut self, wanted: &[&str]) -> ParseFailure {
        for what in wanted {
            self.note(what);
        }
        ParseFailure
    }

    /// Current position, for a later [`Cursor::rewind`].
    pub fn mark(&self) -> usize {
        self.index
    }

    /// Backtrack to a saved mark. Expectations recorded meanwhile are
    /// kept; only the position moves.
    pub fn rewind(&mut self, mark: usize) {
        self.index = mark;
    }

    /// Build the error for the furthest failure point.
    pub fn error(&self) -> ParseError {
        ParseError::Unexpected {
            expected: self.expected.clone(),
            found: self
                .tokens
                .get(self.furthest)
                .map(|token| (token.describe(), token.pos())),
        }
    }

    /// Keep only the labels recorded at the furthest position; the
    /// deepest point the grammar reached is where the real problem is.
    fn note(&mut self, what: &str) {
        if self.index > self.furthest {
            self.furthest = self.index;
            self.expected.clear();
        }
        if self.index == self.furthest && !self.expected.iter().any(|e| e == what) {
            self.expected.push(what.to_string());
        }
    }
}
