pub mod canon;
pub mod constraint;
pub mod env;
pub mod error;
pub mod infer;
pub mod ty;
pub mod unify;

pub use error::TypeError;
pub use infer::{infer_constraint_show, infer_then_show, infer_type, infer_type_with_constraint};
pub use ty::{ConstraintTerm, NamedType, NamedTypedTerm, Ty, Type, TypeId, TypedTerm};
