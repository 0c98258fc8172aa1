//! # Grammar
//!
//! Recursive-descent productions for terms, constraint skeletons and
//! named types:
//!
//! ```text
//! term        = '\' ident+ '.' term | app
//! app         = atom atom*                      (left-associative)
//! atom        = ident | '(' term ')'
//!
//! constraint  = '\' cbinder+ '.' constraint | capp
//! cbinder     = (ident | '_') (':' type)?
//! capp        = catom catom*
//! catom       = (ident | '_') (':' type)? | '(' constraint ')'
//!
//! type        = tatom ('->' type)?              (right-associative)
//! tatom       = ident | '(' type ')'
//! ```
//!
//! `\x y. t` is sugar for `\x. \y. t`, on both sides.

use crate::lexer::Token;
use crate::term::Term;
use crate::types::{ConstraintTerm, NamedType, Ty};

use super::cursor::{Cursor, ParseResult};

pub fn term(cursor: &mut Cursor) -> ParseResult<Term<String>> {
    if cursor.at(|t| matches!(t, Token::Backslash(_))) {
        lambda(cursor)
    } else {
        application(cursor)
    }
}

fn lambda(cursor: &mut Cursor) -> ParseResult<Term<String>> {
    cursor.eat("'\\'", |t| matches!(t, Token::Backslash(_)))?;
    let mut binders = vec![ident(cursor)?];
    while cursor.at(|t| matches!(t, Token::Ident(_))) {
        binders.push(ident(cursor)?);
    }
    cursor.eat("'.'", |t| matches!(t, Token::Dot(_)))?;
    let mut result = term(cursor)?;
    for binder in binders.into_iter().rev() {
        result = Term::abs(binder, result);
    }
    Ok(result)
}

fn application(cursor: &mut Cursor) -> ParseResult<Term<String>> {
    let mut result = atom(cursor)?;
    loop {
        let mark = cursor.mark();
        match atom(cursor) {
            Ok(arg) => result = Term::app(result, arg),
            Err(_) => {
                cursor.rewind(mark);
                return Ok(result);
            }
        }
    }
}

fn atom(cursor: &mut Cursor) -> ParseResult<Term<String>> {
    if cursor.at(|t| matches!(t, Token::Ident(_))) {
        return Ok(Term::Var(ident(cursor)?));
    }
    if cursor.at(|t| matches!(t, Token::LParen(_))) {
        cursor.bump();
        let inner = term(cursor)?;
        cursor.eat("')'", |t| matches!(t, Token::RParen(_)))?;
        return Ok(inner);
    }
    Err(cursor.fail(&["identifier", "'('"]))
}

pub fn constraint(cursor: &mut Cursor) -> ParseResult<ConstraintTerm> {
    if cursor.at(|t| matches!(t, Token::Backslash(_))) {
        constraint_lambda(cursor)
    } else {
        constraint_application(cursor)
    }
}

fn constraint_lambda(cursor: &mut Cursor) -> ParseResult<ConstraintTerm> {
    cursor.eat("'\\'", |t| matches!(t, Token::Backslash(_)))?;
    let mut binders = vec![constraint_binder(cursor)?];
    while cursor.at(|t| matches!(t, Token::Ident(_) | Token::Underscore(_))) {
        binders.push(constraint_binder(cursor)?);
    }
    cursor.eat("'.'", |t| matches!(t, Token::Dot(_)))?;
    let mut result = constraint(cursor)?;
    for annotation in binders.into_iter().rev() {
        result = Term::abs(annotation, result);
    }
    Ok(result)
}

/// `x`, `_`, `x:A` or `_:A -> B`; only the annotation is kept.
fn constraint_binder(cursor: &mut Cursor) -> ParseResult<Option<NamedType>> {
    if cursor.at(|t| matches!(t, Token::Ident(_))) {
        ident(cursor)?;
    } else if cursor.at(|t| matches!(t, Token::Underscore(_))) {
        cursor.bump();
    } else {
        return Err(cursor.fail(&["identifier", "'_'"]));
    }
    annotation(cursor)
}

fn annotation(cursor: &mut Cursor) -> ParseResult<Option<NamedType>> {
    if cursor.at(|t| matches!(t, Token::Colon(_))) {
        cursor.bump();
        Ok(Some(named_type(cursor)?))
    } else {
        Ok(None)
    }
}

fn constraint_application(cursor: &mut Cursor) -> ParseResult<ConstraintTerm> {
    let mut result = constraint_atom(cursor)?;
    loop {
        let mark = cursor.mark();
        match constraint_atom(cursor) {
            Ok(arg) => result = Term::app(result, arg),
            Err(_) => {
                cursor.rewind(mark);
                return Ok(result);
            }
        }
    }
}

fn constraint_atom(cursor: &mut Cursor) -> ParseResult<ConstraintTerm> {
    if cursor.at(|t| matches!(t, Token::Ident(_) | Token::Underscore(_))) {
        return Ok(Term::Var(constraint_binder(cursor)?));
    }
    if cursor.at(|t| matches!(t, Token::LParen(_))) {
        cursor.bump();
        let inner = constraint(cursor)?;
        cursor.eat("')'", |t| matches!(t, Token::RParen(_)))?;
        return Ok(inner);
    }
    Err(cursor.fail(&["identifier", "'_'", "'('"]))
}

pub fn named_type(cursor: &mut Cursor) -> ParseResult<NamedType> {
    let left = type_atom(cursor)?;
    if cursor.at(|t| matches!(t, Token::Arrow(_))) {
        cursor.bump();
        let right = named_type(cursor)?;
        Ok(Ty::arrow(left, right))
    } else {
        Ok(left)
    }
}

fn type_atom(cursor: &mut Cursor) -> ParseResult<NamedType> {
    if cursor.at(|t| matches!(t, Token::Ident(_))) {
        return Ok(Ty::Var(ident(cursor)?));
    }
    if cursor.at(|t| matches!(t, Token::LParen(_))) {
        cursor.bump();
        let inner = named_type(cursor)?;
        cursor.eat("')'", |t| matches!(t, Token::RParen(_)))?;
        return Ok(inner);
    }
    Err(cursor.fail(&["identifier", "'('"]))
}

fn ident(cursor: &mut Cursor) -> ParseResult<String> {
    match cursor.peek() {
        Some(Token::Ident(inner)) => {
            let name = inner.value.clone();
            cursor.bump();
            Ok(name)
        }
        _ => Err(cursor.fail(&["identifier"])),
    }
}
