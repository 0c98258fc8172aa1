//! # Type Inference
//!
//! The walk descends the term carrying the type the context *requires*
//! of it, minting fresh variables for unknowns and unifying as it goes:
//!
//! - a variable either adopts the required type (first occurrence) or
//!   merges its recorded type with it;
//! - an application types its argument first, then demands an arrow
//!   from argument type to required type of its function;
//! - an abstraction gives its binder a fresh type, types the body, and
//!   merges the assembled arrow with the required type, restoring any
//!   shadowed binding afterwards.
//!
//! Every step returns both the inferred type and a tree mirroring the
//! term, with variables and binders decorated by their types. On
//! success, [`crate::types::canon`] flushes the substitution and packs
//! the surviving type variables into `t0, t1, ...`; an optional
//! constraint skeleton then renames them.

use crate::fmt::show_type_tree;
use crate::term::Term;

use super::canon::{canonicalize, relabel};
use super::constraint::{merge_constraints, NameMap};
use super::env::InferEnv;
use super::error::TypeError;
use super::ty::{ConstraintTerm, NamedType, NamedTypedTerm, Ty, Type, TypeId, TypedTerm};
use super::unify::unify;

/// Infer the type of a closed or open λ-term.
///
/// Returns the type and the term tree decorated with the types of its
/// variables and binders, both renamed into the dense `t0, t1, ...`
/// form.
///
/// # Example
///
/// ```text
/// infer_type(λx. x)      Ok(t0 -> t0, λx:t0. x:t0)
/// infer_type(λx. x x)    Err(can't construct infinite type: ...)
/// ```
pub fn infer_type(term: &Term<String>) -> Result<(NamedType, NamedTypedTerm), TypeError> {
    infer(term, None)
}

/// Infer like [`infer_type`], then rename type variables according to a
/// constraint skeleton.
///
/// Every annotation in the skeleton reappears verbatim at the matching
/// position of the output tree, or the merge fails.
pub fn infer_type_with_constraint(
    term: &Term<String>,
    skeleton: &ConstraintTerm,
) -> Result<(NamedType, NamedTypedTerm), TypeError> {
    infer(term, Some(skeleton))
}

/// Render an inference result as `tree : type`, or pass the failure
/// message through verbatim.
pub fn infer_then_show(term: &Term<String>) -> String {
    render(term, infer_type(term))
}

/// Constraint-carrying variant of [`infer_then_show`].
pub fn infer_constraint_show(term: &Term<String>, skeleton: &ConstraintTerm) -> String {
    render(term, infer_type_with_constraint(term, skeleton))
}

fn render(
    term: &Term<String>,
    result: Result<(NamedType, NamedTypedTerm), TypeError>,
) -> String {
    match result {
        Ok((ty, tree)) => format!("{} : {}", show_type_tree(term, &tree), ty),
        Err(err) => err.to_string(),
    }
}

fn infer(
    term: &Term<String>,
    skeleton: Option<&ConstraintTerm>,
) -> Result<(NamedType, NamedTypedTerm), TypeError> {
    log::debug!("inferring type of {term}");
    let mut env = InferEnv::new();
    let mut enclosing = vec![term.clone()];
    let (ty, tree) = walk(&mut env, term, Ty::Var(TypeId(0)), &mut enclosing)?;
    let (ty, tree) = canonicalize(&env, &ty, &tree);
    let names = match skeleton {
        Some(skeleton) => merge_constraints(skeleton, &tree)?,
        None => NameMap::new(),
    };
    let ty = relabel(&ty, &names);
    log::debug!("inferred {term} : {ty}");
    Ok((ty, tree.map(&|t| relabel(t, &names))))
}

/// One step of the walk: type `term` against the `required` type.
///
/// `enclosing` holds the subterms on the path from the root down to and
/// including `term`; unification failures carry a copy for their trace.
fn walk(
    env: &mut InferEnv,
    term: &Term<String>,
    required: Type,
    enclosing: &mut Vec<Term<String>>,
) -> Result<(Type, TypedTerm), TypeError> {
    match term {
        Term::Var(name) => match env.lookup_term_var(name) {
            None => {
                env.bind_term_var(name, required.clone());
                Ok((required.clone(), Term::Var(required)))
            }
            Some(recorded) => {
                let ty = unify(env, &recorded, &required)
                    .map_err(|e| TypeError::from_unify(e, enclosing))?;
                Ok((ty.clone(), Term::Var(ty)))
            }
        },
        Term::App(fun, arg) => {
            let fresh = env.fresh_tvar();
            let (arg_ty, arg_tree) = descend(env, arg, fresh, enclosing)?;
            let wanted = Ty::arrow(arg_ty, required);
            let (fun_ty, fun_tree) = descend(env, fun, wanted, enclosing)?;
            let Ty::Arrow(_, result_ty) = fun_ty else {
                // Unifying anything against an arrow yields an arrow;
                // only a new type constructor could change that.
                unreachable!("function position inferred a non-arrow type")
            };
            Ok((*result_ty, Term::app(fun_tree, arg_tree)))
        }
        Term::Abs(var, body) => {
            let binder_ty = env.fresh_tvar();
            let body_required = env.fresh_tvar();
            let saved = env.lookup_term_var(var);
            env.bind_term_var(var, binder_ty.clone());
            let (body_ty, body_tree) = descend(env, body, body_required, enclosing)?;
            let assembled = Ty::arrow(binder_ty.clone(), body_ty);
            let total = unify(env, &assembled, &required)
                .map_err(|e| TypeError::from_unify(e, enclosing))?;
            match saved {
                Some(previous) => env.bind_term_var(var, previous),
                None => env.unbind_term_var(var),
            }
            Ok((total, Term::Abs(binder_ty, Box::new(body_tree))))
        }
    }
}

fn descend(
    env: &mut InferEnv,
    child: &Term<String>,
    required: Type,
    enclosing: &mut Vec<Term<String>>,
) -> Result<(Type, TypedTerm), TypeError> {
    enclosing.push(child.clone());
    let result = walk(env, child, required, enclosing);
    enclosing.pop();
    result
}
