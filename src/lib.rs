//! Rambda - a λ-calculus playground
//!
//! This library provides λ-terms with capture-avoiding substitution and
//! β-reduction, and Hindley-style type inference with optional
//! user-supplied type constraints.

pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod term;
pub mod types;

pub use fmt::show_type_tree;
pub use term::Term;
pub use types::{
    infer_constraint_show, infer_then_show, infer_type, infer_type_with_constraint, TypeError,
};
