//! Rendering of typed trees.
//!
//! The typed tree mirrors the term but keeps only types; the names live
//! in the original term. Rendering therefore walks the two trees side
//! by side:
//!
//! ```text
//! {x: t0}                  a variable with its type
//! λx: t0 . {x: t0}         an abstraction with its binder's type
//! (λx: t0 . {x: t0}) {y: t1}   application by juxtaposition
//! ```
//!
//! The left operand of an application is parenthesized when it is an
//! abstraction, the right operand whenever it is not a plain variable.

use std::fmt::Write;

use crate::term::Term;
use crate::types::NamedTypedTerm;

/// Render a typed tree against the term it was inferred from.
///
/// The typed tree must come from inference on this very term; the two
/// trees always share their shape then.
pub fn show_type_tree(term: &Term<String>, typed: &NamedTypedTerm) -> String {
    let mut out = String::new();
    node(term, typed, &mut out);
    out
}

fn node(term: &Term<String>, typed: &NamedTypedTerm, out: &mut String) {
    match (term, typed) {
        (Term::Var(name), Term::Var(ty)) => {
            let _ = write!(out, "{{{name}: {ty}}}");
        }
        (Term::Abs(name, body), Term::Abs(binder_ty, typed_body)) => {
            let _ = write!(out, "λ{name}: {binder_ty} . ");
            node(body, typed_body, out);
        }
        (Term::App(fun, arg), Term::App(typed_fun, typed_arg)) => {
            if matches!(**fun, Term::Abs(..)) {
                out.push('(');
                node(fun, typed_fun, out);
                out.push(')');
            } else {
                node(fun, typed_fun, out);
            }
            out.push(' ');
            if matches!(**arg, Term::Var(_)) {
                node(arg, typed_arg, out);
            } else {
                out.push('(');
                node(arg, typed_arg, out);
                out.push(')');
            }
        }
        // The trees disagree; there is nothing sensible to print.
        _ => out.push('?'),
    }
}
