//! Generic head identity
//!
//! Two types share a template when both are instantiations of the same
//! generic definition. Their argument lists are ignored entirely.

use super::context::TypeContext;
use super::normalize::{decay_key, DecayKey};
use super::ty::{GenericHeadId, TypeId};
use tracing::trace;

/// Generic head of a type after decay, if it is a generic instance
pub fn generic_head(ctx: &TypeContext, ty: TypeId) -> Option<GenericHeadId> {
    match decay_key(ctx, ty)? {
        DecayKey::Type(id) => ctx.get(id)?.as_instance().map(|inst| inst.head),
        DecayKey::PointerTo(_) => None,
    }
}

/// Check whether two types were instantiated from the same generic definition
///
/// Non-generic arguments never match, not even each other. Evaluates to
/// `false` unless exactly two types are given.
pub fn is_same_template(ctx: &TypeContext, args: &[TypeId]) -> bool {
    let [lhs, rhs] = args else {
        trace!(arity = args.len(), "is_same_template called with unsupported arity");
        return false;
    };

    let result = match (generic_head(ctx, *lhs), generic_head(ctx, *rhs)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    trace!(
        lhs = %ctx.display(*lhs),
        rhs = %ctx.display(*rhs),
        result,
        "is_same_template"
    );
    result
}
