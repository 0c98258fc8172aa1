//! Surface syntax for terms and constraint skeletons.
//!
//! Terms are classical λ-calculus with backslash lambdas: `\x. x`,
//! `(\x. x) (\y. y)`, `\f x. f x`. A constraint skeleton mirrors a
//! term's shape and annotates binders or leaves with type names:
//! `\x:A. \y:B. _`. A query line is a term, optionally followed by
//! `::` and a skeleton.

pub mod cursor;
pub mod grammar;

use crate::lexer::Token;
use crate::term::Term;
use crate::types::ConstraintTerm;

pub use cursor::{Cursor, ParseError, ParseFailure, ParseResult};

/// Parse a λ-term from a whole input string.
pub fn parse_term(input: &str) -> Result<Term<String>, ParseError> {
    let mut cursor = lex(input)?;
    let term = grammar::term(&mut cursor).map_err(|_| cursor.error())?;
    finish(&mut cursor, term)
}

/// Parse a constraint skeleton from a whole input string.
pub fn parse_constraint(input: &str) -> Result<ConstraintTerm, ParseError> {
    let mut cursor = lex(input)?;
    let skeleton = grammar::constraint(&mut cursor).map_err(|_| cursor.error())?;
    finish(&mut cursor, skeleton)
}

/// Parse a query line: a term, optionally followed by `::` and a
/// constraint skeleton.
pub fn parse_query(input: &str) -> Result<(Term<String>, Option<ConstraintTerm>), ParseError> {
    let mut cursor = lex(input)?;
    let term = grammar::term(&mut cursor).map_err(|_| cursor.error())?;
    let skeleton = if cursor.at(|t| matches!(t, Token::DoubleColon(_))) {
        cursor.bump();
        Some(grammar::constraint(&mut cursor).map_err(|_| cursor.error())?)
    } else {
        None
    };
    finish(&mut cursor, (term, skeleton))
}

fn lex(input: &str) -> Result<Cursor, ParseError> {
    let tokens = Token::lex(input).map_err(|e| ParseError::Lex(e.to_string()))?;
    Ok(Cursor::new(tokens))
}

/// Reject leftover tokens after a production consumed all it could.
fn finish<T>(cursor: &mut Cursor, value: T) -> Result<T, ParseError> {
    if cursor.at_end() {
        Ok(value)
    } else {
        cursor.fail(&["end of input"]);
        Err(cursor.error())
    }
}
