//! Canonical form for inference results.
//!
//! After the walk succeeds, the result type and typed tree still carry
//! whatever ids unification happened to leave unbound, with gaps where
//! merged ids disappeared. Canonicalization flushes the substitution,
//! renumbers the surviving ids densely from 0 and finally renames every
//! id into a [`NamedType`], honoring the constraint merger's choices.

use std::collections::BTreeMap;

use super::env::InferEnv;
use super::ty::{NamedType, Ty, Type, TypeId, TypedTerm};

/// Flush the substitution through both outputs and renumber the
/// surviving type variables to a dense 0-based range, ascending.
pub fn canonicalize(env: &InferEnv, ty: &Type, tree: &TypedTerm) -> (Type, TypedTerm) {
    let ty = env.rewrite(ty);
    let tree = tree.map(&|t| env.rewrite(t));

    // Ids 0..=counter were handed out; the bound ones are gone from the
    // rewritten trees, everything else survives in ascending order.
    let renumbering: BTreeMap<TypeId, TypeId> = (0..=env.counter())
        .map(TypeId)
        .filter(|id| !env.is_bound(*id))
        .enumerate()
        .map(|(next, id)| (id, TypeId(next as u32)))
        .collect();

    let renumber = |ty: &Type| ty.map(&|id| renumbering.get(id).copied().unwrap_or(*id));
    (renumber(&ty), tree.map(&renumber))
}

/// Rename every id leaf, falling back to the id's own `t<n>` rendering
/// when the constraint map has nothing better to say.
pub fn relabel(ty: &Type, names: &BTreeMap<TypeId, NamedType>) -> NamedType {
    match ty {
        Ty::Var(id) => names
            .get(id)
            .cloned()
            .unwrap_or_else(|| Ty::Var(id.to_string())),
        Ty::Arrow(a, b) => Ty::arrow(relabel(a, names), relabel(b, names)),
    }
}
