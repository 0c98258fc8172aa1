//! # Capture-Avoiding Substitution
//!
//! Replacing a free variable by a term must not let a free variable of
//! the replacement be captured by a binder it happens to run into:
//!
//! ```text
//! (λy. x)[x := y]     naive result λy. y is wrong
//!                     correct result λu. y, binder renamed first
//! ```
//!
//! When the binder would capture, it is renamed to the first name from
//! [`crate::term::names`] that avoids the replacement's free variables,
//! and the body is rewritten in two steps: binder occurrences first,
//! then the actual substitution.

use std::collections::HashSet;

use super::names::fresh_name;
use super::Term;

impl Term<String> {
    /// Replace free occurrences of `name` by `replacement`.
    ///
    /// Bound occurrences are untouched; binders are renamed when they
    /// would capture a free variable of `replacement`.
    pub fn substitute(&self, name: &str, replacement: &Term<String>) -> Term<String> {
        match self {
            Term::Var(v) => {
                if v == name {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Term::App(fun, arg) => Term::app(
                fun.substitute(name, replacement),
                arg.substitute(name, replacement),
            ),
            Term::Abs(v, body) => {
                if v == name || !body.free_vars().contains(name) {
                    // Nothing free to replace underneath this binder.
                    self.clone()
                } else if !replacement.free_vars().contains(v) {
                    Term::abs(v.clone(), body.substitute(name, replacement))
                } else {
                    let fresh = fresh_binder(replacement);
                    let renamed = body.substitute(v, &Term::Var(fresh.clone()));
                    Term::abs(fresh, renamed.substitute(name, replacement))
                }
            }
        }
    }
}

/// First supply name avoiding the free variables of `replacement`.
fn fresh_binder(replacement: &Term<String>) -> String {
    let avoid: HashSet<String> = replacement.free_vars();
    fresh_name(&avoid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Term<String> {
        Term::Var(name.to_string())
    }

    fn abs(name: &str, body: Term<String>) -> Term<String> {
        Term::abs(name.to_string(), body)
    }

    #[test]
    fn test_substitute_matching_var() {
        assert_eq!(var("x").substitute("x", &var("y")), var("y"));
    }

    #[test]
    fn test_substitute_other_var_unchanged() {
        assert_eq!(var("z").substitute("x", &var("y")), var("z"));
    }

    #[test]
    fn test_substitute_in_application() {
        let term = Term::app(var("x"), var("x"));
        let expected = Term::app(var("y"), var("y"));
        assert_eq!(term.substitute("x", &var("y")), expected);
    }

    #[test]
    fn test_substitute_skips_bound_occurrences() {
        let term = abs("x", var("x"));
        assert_eq!(term.substitute("x", &var("y")), term);
    }

    #[test]
    fn test_substitute_skips_absent_variable() {
        let term = abs("y", var("z"));
        assert_eq!(term.substitute("x", &var("w")), term);
    }

    #[test]
    fn test_substitute_under_harmless_binder() {
        let term = abs("y", var("x"));
        let expected = abs("y", var("z"));
        assert_eq!(term.substitute("x", &var("z")), expected);
    }

    #[test]
    fn test_substitute_renames_capturing_binder() {
        // (λy. x)[x := y]: the binder must move out of the way.
        let term = abs("y", var("x"));
        let result = term.substitute("x", &var("y"));
        assert_eq!(result, abs("u", var("y")));
    }

    #[test]
    fn test_renamed_binder_keeps_its_occurrences() {
        // (λy. x y)[x := y] → λu. y u
        let term = abs("y", Term::app(var("x"), var("y")));
        let result = term.substitute("x", &var("y"));
        assert_eq!(result, abs("u", Term::app(var("y"), var("u"))));
    }

    #[test]
    fn test_rename_avoids_replacement_free_vars() {
        // Replacement has free {u, y}; the renamed binder skips to v.
        let term = abs("y", Term::app(var("x"), var("y")));
        let replacement = Term::app(var("u"), var("y"));
        let result = term.substitute("x", &replacement);
        assert_eq!(
            result,
            abs("v", Term::app(replacement.clone(), var("v")))
        );
    }

    #[test]
    fn test_substituted_result_respects_free_vars() {
        // free(t[x := n]) ⊆ (free(t) \ {x}) ∪ free(n)
        let cases = [
            (abs("y", Term::app(var("x"), var("y"))), "x", var("y")),
            (Term::app(var("x"), abs("x", var("x"))), "x", var("z")),
            (abs("y", var("x")), "x", Term::app(var("y"), var("z"))),
        ];
        for (term, name, replacement) in cases {
            let result = term.substitute(name, &replacement);
            let mut allowed = term.free_vars();
            allowed.remove(name);
            allowed.extend(replacement.free_vars());
            for v in result.free_vars() {
                assert!(allowed.contains(&v), "unexpected free variable {v}");
            }
        }
    }
}
