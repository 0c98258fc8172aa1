//! # Inference Error Definitions
//!
//! Two things can go wrong when typing a term:
//!
//! - Unification hits the occurs check: the term demands an infinite
//!   type, as in `λx. x x`. The error carries the offending equation
//!   and the stack of enclosing subterms, innermost first.
//! - A user-supplied constraint skeleton cannot be reconciled with the
//!   inferred tree: the shapes disagree, two annotations fight over one
//!   type variable, or an arrow is pinned to a plain name.
//!
//! Both are reported as plain human-readable strings through `Display`;
//! the first failure wins and aborts the run.

use std::fmt;

use crate::term::Term;

use super::ty::{NamedType, Ty, Type, TypeId};
use super::unify::UnifyError;

/// Failure of an inference run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The occurs check rejected a self-referential merge.
    InfiniteType {
        /// The variable that would contain itself.
        var: TypeId,
        /// The type it was about to be merged into.
        ty: Type,
        /// Enclosing subterms at the point of failure, innermost first.
        trace: Vec<Term<String>>,
    },

    /// A constraint skeleton's shape differs from the term's.
    ConstraintShape,

    /// Two annotations assign different names to one type variable.
    ConstraintConflict {
        /// The name recorded first.
        first: NamedType,
        /// The conflicting later name.
        second: NamedType,
    },

    /// An arrow type was pinned against a bare name.
    ConstraintArrow {
        /// The inferred arrow.
        ty: Type,
        /// The annotation it cannot collapse into.
        name: NamedType,
    },
}

impl TypeError {
    /// Promote a unification failure, attaching the walk's current
    /// stack of enclosing subterms (outermost first on input).
    pub fn from_unify(err: UnifyError, enclosing: &[Term<String>]) -> Self {
        TypeError::InfiniteType {
            var: err.var,
            ty: err.ty,
            trace: enclosing.iter().rev().cloned().collect(),
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeError::InfiniteType { var, ty, trace } => {
                write!(
                    f,
                    "can't construct infinite type: {} = {}",
                    Ty::<TypeId>::Var(*var),
                    ty
                )?;
                for term in trace {
                    write!(f, "\n\tin {term}")?;
                }
                Ok(())
            }
            TypeError::ConstraintShape => write!(f, "constraint shape not match!"),
            TypeError::ConstraintConflict { first, second } => {
                write!(f, "{first} can't be {second}")
            }
            TypeError::ConstraintArrow { ty, name } => {
                write!(f, "type {ty} can't be constraint to {name}")
            }
        }
    }
}

impl std::error::Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_type_message_lists_enclosing_terms() {
        let outer: Term<String> = Term::abs(
            "x".to_string(),
            Term::app(Term::Var("x".to_string()), Term::Var("x".to_string())),
        );
        let inner = Term::Var("x".to_string());
        let err = TypeError::from_unify(
            UnifyError {
                var: TypeId(1),
                ty: Ty::arrow(Ty::Var(TypeId(1)), Ty::Var(TypeId(2))),
            },
            &[outer, inner],
        );
        assert_eq!(
            err.to_string(),
            "can't construct infinite type: t1 = t1 -> t2\n\tin x\n\tin λx. x x"
        );
    }

    #[test]
    fn test_constraint_messages() {
        let a = Ty::Var("A".to_string());
        let b = Ty::Var("B".to_string());
        assert_eq!(
            TypeError::ConstraintShape.to_string(),
            "constraint shape not match!"
        );
        assert_eq!(
            TypeError::ConstraintConflict {
                first: a.clone(),
                second: b.clone(),
            }
            .to_string(),
            "A can't be B"
        );
        assert_eq!(
            TypeError::ConstraintArrow {
                ty: Ty::arrow(Ty::Var(TypeId(0)), Ty::Var(TypeId(1))),
                name: a,
            }
            .to_string(),
            "type t0 -> t1 can't be constraint to A"
        );
    }
}
