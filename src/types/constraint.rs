//! # Constraint Skeletons
//!
//! A constraint skeleton is a term-shaped tree whose leaves and binders
//! may carry user-chosen type names. Merging it against the inferred
//! typed tree yields a map from internal type variables to those names,
//! which the final renaming then honors:
//!
//! ```text
//! term          λx. λy. x
//! skeleton      λx:A. λy:B. _
//! result        A -> B -> A
//! ```
//!
//! The walk is lockstep; a skeleton that disagrees with the term's
//! shape is rejected outright. Within one skeleton the same type
//! variable may be pinned twice only to the same name, and a variable
//! that inference already forced into an arrow can be pinned leafwise
//! (`t0 -> t1` against `A -> B`) but never to a bare name.

use std::collections::BTreeMap;

use super::error::TypeError;
use super::ty::{ConstraintTerm, NamedType, Ty, Type, TypeId, TypedTerm};
use crate::term::Term;

/// Map from internal type variables to the names users gave them.
pub type NameMap = BTreeMap<TypeId, NamedType>;

/// Walk skeleton and typed tree in lockstep, collecting the name each
/// pinned type variable must take.
pub fn merge_constraints(
    skeleton: &ConstraintTerm,
    typed: &TypedTerm,
) -> Result<NameMap, TypeError> {
    match (skeleton, typed) {
        (Term::Var(annotation), Term::Var(ty)) => match annotation {
            None => Ok(NameMap::new()),
            Some(name) => constrain_type(ty, name),
        },
        (Term::App(sf, sx), Term::App(tf, tx)) => {
            let fun = merge_constraints(sf, tf)?;
            let arg = merge_constraints(sx, tx)?;
            merge_maps(fun, arg)
        }
        (Term::Abs(annotation, sbody), Term::Abs(binder_ty, tbody)) => {
            let binder = match annotation {
                None => NameMap::new(),
                Some(name) => constrain_type(binder_ty, name)?,
            };
            let body = merge_constraints(sbody, tbody)?;
            merge_maps(binder, body)
        }
        _ => Err(TypeError::ConstraintShape),
    }
}

/// Pin an inferred type against a named annotation.
///
/// A type variable takes the whole annotation; arrows are pinned
/// componentwise. An arrow against a bare name cannot be honored.
fn constrain_type(ty: &Type, name: &NamedType) -> Result<NameMap, TypeError> {
    match (ty, name) {
        (Ty::Var(id), _) => {
            let mut map = NameMap::new();
            map.insert(*id, name.clone());
            Ok(map)
        }
        (Ty::Arrow(a, b), Ty::Arrow(c, d)) => {
            let domain = constrain_type(a, c)?;
            let codomain = constrain_type(b, d)?;
            merge_maps(domain, codomain)
        }
        (Ty::Arrow(..), Ty::Var(_)) => Err(TypeError::ConstraintArrow {
            ty: ty.clone(),
            name: name.clone(),
        }),
    }
}

fn merge_maps(mut acc: NameMap, other: NameMap) -> Result<NameMap, TypeError> {
    for (id, name) in other {
        match acc.get(&id) {
            Some(existing) if *existing != name => {
                return Err(TypeError::ConstraintConflict {
                    first: existing.clone(),
                    second: name,
                });
            }
            _ => {
                acc.insert(id, name);
            }
        }
    }
    Ok(acc)
}
