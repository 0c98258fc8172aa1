//! # Simple Types
//!
//! Types are the simple types of the λ-calculus: type variables and
//! function arrows. The same shape is used twice:
//!
//! - [`Type`] - leaves are opaque [`TypeId`]s minted during inference
//! - [`NamedType`] - leaves are user-facing names, produced when the
//!   final substitution is flushed and ids are renamed, and consumed in
//!   constraint skeletons
//!
//! ## Rendering
//!
//! Arrows are right-associative, so only a left operand that is itself
//! an arrow needs parentheses:
//!
//! ```text
//! t0 -> t1 -> t2        means t0 -> (t1 -> t2)
//! (t0 -> t1) -> t2      the parentheses are significant
//! ```

use std::fmt;

use crate::term::Term;

/// Opaque identifier of a type variable, displayed as `t<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A simple type over leaves of type `V`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ty<V> {
    /// A type variable.
    Var(V),
    /// A function type; right-associative.
    Arrow(Box<Ty<V>>, Box<Ty<V>>),
}

/// Machine types: leaves are minted [`TypeId`]s.
pub type Type = Ty<TypeId>;

/// User-facing types: leaves carry names.
pub type NamedType = Ty<String>;

/// A term tree decorated with machine types: a `Var` carries its
/// inferred type, an `Abs` the type of the variable it binds.
pub type TypedTerm = Term<Type>;

/// A typed tree after renaming, ready for display.
pub type NamedTypedTerm = Term<NamedType>;

/// A term-shaped skeleton of optional annotations, matched against a
/// typed tree by the constraint merger.
pub type ConstraintTerm = Term<Option<NamedType>>;

impl<V> Ty<V> {
    /// Build an arrow without spelling out the boxes.
    pub fn arrow(domain: Ty<V>, codomain: Ty<V>) -> Self {
        Ty::Arrow(Box::new(domain), Box::new(codomain))
    }

    /// Relabel every leaf, preserving the arrow structure.
    pub fn map<W>(&self, f: &impl Fn(&V) -> W) -> Ty<W> {
        match self {
            Ty::Var(v) => Ty::Var(f(v)),
            Ty::Arrow(a, b) => Ty::arrow(a.map(f), b.map(f)),
        }
    }
}

impl Type {
    /// Whether the type variable `id` occurs anywhere in this type.
    pub fn mentions(&self, id: TypeId) -> bool {
        match self {
            Ty::Var(v) => *v == id,
            Ty::Arrow(a, b) => a.mentions(id) || b.mentions(id),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Ty<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ty::Var(v) => write!(f, "{v}"),
            Ty::Arrow(a, b) => {
                if matches!(**a, Ty::Arrow(..)) {
                    write!(f, "({a}) -> {b}")
                } else {
                    write!(f, "{a} -> {b}")
                }
            }
        }
    }
}
