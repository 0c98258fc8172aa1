//! # Lambda Terms
//!
//! This module defines the term shape shared by every tree the crate
//! manipulates, plus the pure term algebra: variable analysis, size,
//! occurrence, structural search and α-equivalence.
//!
//! ## Term Shape
//!
//! A term is a variable, an application, or an abstraction:
//!
//! ```text
//! Var("x")                          x
//! App(f, x)                         f x
//! Abs("x", body)                    λx. body
//! ```
//!
//! The label type is generic. Three instantiations are used:
//!
//! - `Term<String>` - ordinary λ-terms with named variables
//! - `Term<Type>` - typed trees: a `Var` carries its inferred type, an
//!   `Abs` carries the type of the variable it binds
//! - `Term<Option<NamedType>>` - constraint skeletons where any leaf or
//!   binder may carry a user annotation
//!
//! ## Free and Bound Variables
//!
//! `free_vars` removes the binder of each abstraction from its body's
//! free set. `bound_vars` collects every binder that appears anywhere,
//! so a name can be both free and bound in the same term:
//!
//! ```text
//! x (λx. x)      free = {x}, bound = {x}
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::term::subst`] - capture-avoiding substitution
//! - [`crate::term::reduce`] - β-reduction built on substitution

pub mod names;
pub mod reduce;
pub mod subst;

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

/// A λ-term over variable labels of type `V`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term<V> {
    /// An occurrence of a variable.
    Var(V),
    /// An application; the surface syntax is left-associative.
    App(Box<Term<V>>, Box<Term<V>>),
    /// An abstraction binding its label in the body.
    Abs(V, Box<Term<V>>),
}

impl<V> Term<V> {
    /// Build an application without spelling out the boxes.
    pub fn app(fun: Term<V>, arg: Term<V>) -> Self {
        Term::App(Box::new(fun), Box::new(arg))
    }

    /// Build an abstraction without spelling out the box.
    pub fn abs(var: V, body: Term<V>) -> Self {
        Term::Abs(var, Box::new(body))
    }

    /// Number of leaves and binders in the term.
    ///
    /// A variable counts 1, an abstraction counts 1 plus its body, an
    /// application counts the sum of its children.
    pub fn length(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Abs(_, body) => 1 + body.length(),
            Term::App(fun, arg) => fun.length() + arg.length(),
        }
    }

    /// Relabel the term, preserving its shape.
    pub fn map<W>(&self, f: &impl Fn(&V) -> W) -> Term<W> {
        match self {
            Term::Var(v) => Term::Var(f(v)),
            Term::App(fun, arg) => Term::app(fun.map(f), arg.map(f)),
            Term::Abs(v, body) => Term::abs(f(v), body.map(f)),
        }
    }
}

impl<V: Clone + Eq + Hash> Term<V> {
    /// Set of labels occurring free in the term.
    pub fn free_vars(&self) -> HashSet<V> {
        match self {
            Term::Var(v) => {
                let mut set = HashSet::new();
                set.insert(v.clone());
                set
            }
            Term::App(fun, arg) => {
                let mut set = fun.free_vars();
                set.extend(arg.free_vars());
                set
            }
            Term::Abs(v, body) => {
                let mut set = body.free_vars();
                set.remove(v);
                set
            }
        }
    }

    /// Set of labels bound by some abstraction in the term.
    ///
    /// Shadowed binders are still collected; the result accumulates
    /// across every binder in scope.
    pub fn bound_vars(&self) -> HashSet<V> {
        match self {
            Term::Var(_) => HashSet::new(),
            Term::App(fun, arg) => {
                let mut set = fun.bound_vars();
                set.extend(arg.bound_vars());
                set
            }
            Term::Abs(v, body) => {
                let mut set = body.bound_vars();
                set.insert(v.clone());
                set
            }
        }
    }
}

impl<V: Clone> Term<V> {
    /// Try `f` at the root, then search the children for the first
    /// subterm it accepts.
    ///
    /// The search order is fixed: an application tries its function
    /// child before its argument; an abstraction first offers its
    /// binder *as a variable node* and only then descends into the
    /// body. The binder step means a pattern looking for `Var(x)`
    /// succeeds on `λx. y` even though `x` has no occurrence there.
    pub fn find_map<R>(&self, f: &impl Fn(&Term<V>) -> Option<R>) -> Option<R> {
        if let Some(r) = f(self) {
            return Some(r);
        }
        match self {
            Term::Var(_) => None,
            Term::App(fun, arg) => fun.find_map(f).or_else(|| arg.find_map(f)),
            Term::Abs(v, body) => f(&Term::Var(v.clone())).or_else(|| body.find_map(f)),
        }
    }
}

impl<V: Clone + Eq> Term<V> {
    /// Whether `pattern` matches some subterm of `self`, under the
    /// search order of [`Term::find_map`] (structural equality, not
    /// α-equivalence).
    pub fn contains(&self, pattern: &Term<V>) -> bool {
        self.find_map(&|t| if t == pattern { Some(()) } else { None })
            .is_some()
    }
}

impl<V: Clone + Ord> Term<V> {
    /// Set of all subterms, the term itself included.
    ///
    /// An abstraction contributes itself and its body's subterms; no
    /// variable node is synthesized for the binder.
    pub fn sub_terms(&self) -> BTreeSet<Term<V>> {
        let mut set = BTreeSet::new();
        self.collect_sub_terms(&mut set);
        set
    }

    fn collect_sub_terms(&self, set: &mut BTreeSet<Term<V>>) {
        set.insert(self.clone());
        match self {
            Term::Var(_) => {}
            Term::App(fun, arg) => {
                fun.collect_sub_terms(set);
                arg.collect_sub_terms(set);
            }
            Term::Abs(_, body) => body.collect_sub_terms(set),
        }
    }
}

impl Term<String> {
    /// α-equivalence: structural equality up to consistent renaming of
    /// binders.
    ///
    /// Two abstractions `λv. e1` and `λw. e2` are α-equal when `w` is
    /// not free in the first abstraction and `e1` is α-equal to
    /// `e2[w := v]`.
    pub fn alpha_eq(&self, other: &Term<String>) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::App(f1, x1), Term::App(f2, x2)) => f1.alpha_eq(f2) && x1.alpha_eq(x2),
            (Term::Abs(v, e1), Term::Abs(w, e2)) => {
                !self.free_vars().contains(w)
                    && e1.alpha_eq(&e2.substitute(w, &Term::Var(v.clone())))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Term<String> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{v}"),
            Term::Abs(v, body) => write!(f, "λ{v}. {body}"),
            Term::App(fun, arg) => {
                if matches!(**fun, Term::Abs(..)) {
                    write!(f, "({fun})")?;
                } else {
                    write!(f, "{fun}")?;
                }
                if matches!(**arg, Term::Var(_)) {
                    write!(f, " {arg}")
                } else {
                    write!(f, " ({arg})")
                }
            }
        }
    }
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
    fn test_free_vars_var() {
        let free = var("x").free_vars();
        assert_eq!(free.len(), 1);
        assert!(free.contains("x"));
    }

    #[test]
    fn test_free_vars_abs_removes_binder() {
        let term = abs("x", Term::app(var("x"), var("y")));
        let free = term.free_vars();
        assert_eq!(free.len(), 1);
        assert!(free.contains("y"));
    }

    #[test]
    fn test_name_both_free_and_bound() {
        let term = Term::app(var("x"), abs("x", var("x")));
        assert!(term.free_vars().contains("x"));
        assert!(term.bound_vars().contains("x"));
    }

    #[test]
    fn test_bound_vars_accumulate_through_shadowing() {
        let term = abs("x", abs("x", var("x")));
        let bound = term.bound_vars();
        assert_eq!(bound.len(), 1);
        assert!(bound.contains("x"));
    }

    #[test]
    fn test_length() {
        assert_eq!(var("x").length(), 1);
        assert_eq!(abs("x", var("x")).length(), 2);
        assert_eq!(Term::app(var("x"), var("y")).length(), 2);
        assert_eq!(abs("f", abs("x", Term::app(var("f"), var("x")))).length(), 4);
    }

    #[test]
    fn test_contains_subterm() {
        let term = Term::app(abs("x", var("x")), var("y"));
        assert!(term.contains(&var("y")));
        assert!(term.contains(&abs("x", var("x"))));
        assert!(!term.contains(&var("z")));
    }

    #[test]
    fn test_contains_sees_binder_as_var() {
        // The binder of an abstraction is offered as a variable node, so
        // x "occurs" in λx. y even without a free occurrence.
        let term = abs("x", var("y"));
        assert!(term.contains(&var("x")));
    }

    #[test]
    fn test_find_map_tries_function_before_argument() {
        let term = Term::app(var("a"), var("b"));
        let first = term.find_map(&|t| match t {
            Term::Var(v) => Some(v.clone()),
            _ => None,
        });
        assert_eq!(first, Some("a".to_string()));
    }

    #[test]
    fn test_find_map_tries_binder_before_body() {
        let term = abs("x", var("y"));
        let first = term.find_map(&|t| match t {
            Term::Var(v) => Some(v.clone()),
            _ => None,
        });
        assert_eq!(first, Some("x".to_string()));
    }

    #[test]
    fn test_sub_terms_excludes_binder() {
        let term = abs("x", var("y"));
        let subs = term.sub_terms();
        assert_eq!(subs.len(), 2);
        assert!(subs.contains(&term));
        assert!(subs.contains(&var("y")));
        assert!(!subs.contains(&var("x")));
    }

    #[test]
    fn test_sub_terms_of_application() {
        let term = abs("x", Term::app(var("x"), var("y")));
        let subs = term.sub_terms();
        assert_eq!(subs.len(), 4);
        assert!(subs.contains(&Term::app(var("x"), var("y"))));
    }

    #[test]
    fn test_alpha_eq_renamed_binder() {
        assert!(abs("x", var("x")).alpha_eq(&abs("y", var("y"))));
    }

    #[test]
    fn test_alpha_eq_nested() {
        let k1 = abs("x", abs("y", var("x")));
        let k2 = abs("a", abs("b", var("a")));
        assert!(k1.alpha_eq(&k2));
    }

    #[test]
    fn test_alpha_eq_rejects_different_structure() {
        let k = abs("x", abs("y", var("x")));
        let i = abs("x", abs("y", var("y")));
        assert!(!k.alpha_eq(&i));
    }

    #[test]
    fn test_alpha_eq_rejects_captured_rename() {
        // λx. y and λy. y differ: the second binder captures the free y.
        assert!(!abs("x", var("y")).alpha_eq(&abs("y", var("y"))));
    }

    #[test]
    fn test_alpha_eq_reflexive() {
        let terms = [
            var("x"),
            abs("x", var("x")),
            abs("f", abs("x", Term::app(var("f"), var("x")))),
            Term::app(abs("x", var("x")), var("y")),
        ];
        for t in &terms {
            assert!(t.alpha_eq(t), "{t} should be α-equal to itself");
        }
    }

    #[test]
    fn test_alpha_eq_symmetric() {
        let a = abs("f", abs("x", Term::app(var("f"), var("x"))));
        let b = abs("g", abs("y", Term::app(var("g"), var("y"))));
        assert!(a.alpha_eq(&b));
        assert!(b.alpha_eq(&a));
    }

    #[test]
    fn test_alpha_eq_transitive() {
        let a = abs("x", var("x"));
        let b = abs("y", var("y"));
        let c = abs("z", var("z"));
        assert!(a.alpha_eq(&b));
        assert!(b.alpha_eq(&c));
        assert!(a.alpha_eq(&c));
    }

    #[test]
    fn test_display_application() {
        let term = Term::app(Term::app(var("f"), var("x")), var("y"));
        assert_eq!(term.to_string(), "f x y");
    }

    #[test]
    fn test_display_parenthesizes_abs_on_the_left() {
        let term = Term::app(abs("x", var("x")), var("y"));
        assert_eq!(term.to_string(), "(λx. x) y");
    }

    #[test]
    fn test_display_parenthesizes_compound_argument() {
        let term = Term::app(var("f"), Term::app(var("g"), var("x")));
        assert_eq!(term.to_string(), "f (g x)");
    }

    #[test]
    fn test_display_lambda() {
        let term = abs("x", Term::app(var("x"), var("x")));
        assert_eq!(term.to_string(), "λx. x x");
    }
}
