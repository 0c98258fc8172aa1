use std::fmt;

use super::env::InferEnv;
use super::ty::{Ty, Type, TypeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyError {
    pub var: TypeId,
    pub ty: Type,
}

impl fmt::Display for UnifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "can't construct infinite type: {} = {}",
            Ty::<TypeId>::Var(self.var),
            self.ty
        )
    }
}

impl std::error::Error for UnifyError {}

/// Merge two types under the environment's substitution, recording the
/// bindings the merge requires.
///
/// Both operands are pushed through the current substitution before the
/// shapes are compared; a merge of `t1 -> t1` against `(a -> b) -> c`
/// must see the first binding when it reaches the second `t1`. A
/// variable is only ever bound when it does not occur in the other
/// side, so the substitution stays acyclic.
pub fn unify(env: &mut InferEnv, t1: &Type, t2: &Type) -> Result<Type, UnifyError> {
    let t1 = env.rewrite(t1);
    let t2 = env.rewrite(t2);
    log::trace!("unify {t1} ~ {t2}");
    match (t1, t2) {
        (Ty::Var(i), Ty::Var(j)) if i == j => Ok(Ty::Var(i)),
        (t, Ty::Var(j)) => bind(env, j, t),
        (Ty::Var(i), t) => bind(env, i, t),
        (Ty::Arrow(a, b), Ty::Arrow(c, d)) => {
            let domain = unify(env, &a, &c)?;
            let codomain = unify(env, &b, &d)?;
            Ok(Ty::arrow(domain, codomain))
        }
    }
}

fn bind(env: &mut InferEnv, id: TypeId, ty: Type) -> Result<Type, UnifyError> {
    if ty.mentions(id) {
        return Err(UnifyError { var: id, ty });
    }
    env.bind_type_var(id, ty.clone());
    Ok(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(n: u32) -> Type {
        Ty::Var(TypeId(n))
    }

    #[test]
    fn test_unify_same_var() {
        let mut env = InferEnv::new();
        assert_eq!(unify(&mut env, &tv(1), &tv(1)), Ok(tv(1)));
        assert!(!env.is_bound(TypeId(1)));
    }

    #[test]
    fn test_unify_two_vars_keeps_the_left() {
        let mut env = InferEnv::new();
        assert_eq!(unify(&mut env, &tv(1), &tv(2)), Ok(tv(1)));
        assert_eq!(env.rewrite(&tv(2)), tv(1));
    }

    #[test]
    fn test_unify_var_with_arrow() {
        let mut env = InferEnv::new();
        let arrow = Ty::arrow(tv(2), tv(3));
        assert_eq!(unify(&mut env, &tv(1), &arrow), Ok(arrow.clone()));
        assert_eq!(env.rewrite(&tv(1)), arrow);
    }

    #[test]
    fn test_unify_arrow_with_var() {
        let mut env = InferEnv::new();
        let arrow = Ty::arrow(tv(2), tv(3));
        assert_eq!(unify(&mut env, &arrow, &tv(1)), Ok(arrow.clone()));
        assert_eq!(env.rewrite(&tv(1)), arrow);
    }

    #[test]
    fn test_occurs_check_direct() {
        let mut env = InferEnv::new();
        let arrow = Ty::arrow(tv(1), tv(2));
        let err = unify(&mut env, &tv(1), &arrow).unwrap_err();
        assert_eq!(err.var, TypeId(1));
        assert_eq!(
            err.to_string(),
            "can't construct infinite type: t1 = t1 -> t2"
        );
    }

    #[test]
    fn test_occurs_check_through_substitution() {
        // t1 := t2 first; then t2 against t1 -> t3 must still fail.
        let mut env = InferEnv::new();
        unify(&mut env, &tv(2), &tv(1)).unwrap();
        let err = unify(&mut env, &tv(1), &Ty::arrow(tv(2), tv(3))).unwrap_err();
        assert_eq!(err.var, TypeId(2));
    }

    #[test]
    fn test_unify_arrows_componentwise() {
        let mut env = InferEnv::new();
        let left = Ty::arrow(tv(1), tv(2));
        let right = Ty::arrow(tv(3), Ty::arrow(tv(4), tv(5)));
        let merged = unify(&mut env, &left, &right).unwrap();
        assert_eq!(merged, Ty::arrow(tv(1), Ty::arrow(tv(4), tv(5))));
        assert_eq!(env.rewrite(&tv(3)), tv(1));
        assert_eq!(env.rewrite(&tv(2)), Ty::arrow(tv(4), tv(5)));
    }

    #[test]
    fn test_repeated_var_sees_earlier_binding() {
        // t1 -> t1 against (t2 -> t3) -> t4: the second t1 must resolve
        // to t2 -> t3 before it meets t4.
        let mut env = InferEnv::new();
        let left = Ty::arrow(tv(1), tv(1));
        let right = Ty::arrow(Ty::arrow(tv(2), tv(3)), tv(4));
        unify(&mut env, &left, &right).unwrap();
        assert_eq!(env.rewrite(&tv(1)), Ty::arrow(tv(2), tv(3)));
        assert_eq!(env.rewrite(&tv(4)), Ty::arrow(tv(2), tv(3)));
    }
}
