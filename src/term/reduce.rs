//! β-reduction for λ-terms.
//!
//! Reduction is normal order (leftmost-outermost), so terms with a
//! normal form reach it even when some argument diverges. Because the
//! calculus is untyped, `normal_form` is fuel-limited rather than
//! guaranteed to terminate.

use super::Term;

/// Perform one leftmost-outermost β-step, or `None` if the term is
/// already in normal form.
pub fn reduce(term: &Term<String>) -> Option<Term<String>> {
    match term {
        Term::Var(_) => None,
        Term::App(fun, arg) => {
            if let Term::Abs(v, body) = &**fun {
                return Some(body.substitute(v, arg));
            }
            if let Some(fun) = reduce(fun) {
                return Some(Term::app(fun, (**arg).clone()));
            }
            reduce(arg).map(|arg| Term::app((**fun).clone(), arg))
        }
        Term::Abs(v, body) => reduce(body).map(|body| Term::abs(v.clone(), body)),
    }
}

/// Reduce to β-normal form, giving up after `fuel` steps.
///
/// Returns the last term reached as the error value when fuel runs out,
/// so callers can still show how far reduction got.
pub fn normal_form(term: &Term<String>, fuel: usize) -> Result<Term<String>, Term<String>> {
    let mut current = term.clone();
    for _ in 0..fuel {
        match reduce(&current) {
            Some(next) => current = next,
            None => return Ok(current),
        }
    }
    Err(current)
}
