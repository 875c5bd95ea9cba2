//! Derivation and relation predicates
//!
//! `is_derived` answers "is the first type derived from, or the same as, the
//! second?" and `is_related` is its symmetric closure. Both compare decayed
//! types, so references, cv-qualification and array/function surface form do
//! not influence the answer. `void` is a base of every type.
//!
//! Both predicates are strictly binary. Any other number of arguments yields
//! `false` rather than an error, so a caller that gates a code path on the
//! answer simply loses that path.

use super::context::TypeContext;
use super::normalize::{decay_key, DecayKey};
use super::ty::TypeId;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Check whether `base` is a transitive base of `derived` in the lattice
///
/// Both ids are taken as-is, without decay. A type is not its own base here.
pub fn is_base_of(ctx: &TypeContext, base: TypeId, derived: TypeId) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack: Vec<TypeId> = ctx.bases_of(derived).to_vec();

    while let Some(current) = stack.pop() {
        if current == base {
            return true;
        }
        if visited.insert(current) {
            stack.extend_from_slice(ctx.bases_of(current));
        }
    }

    false
}

/// Binary form of [`is_derived`]
pub fn derives_from(ctx: &TypeContext, derived: TypeId, base: TypeId) -> bool {
    let (derived_key, base_key) = match (decay_key(ctx, derived), decay_key(ctx, base)) {
        (Some(d), Some(b)) => (d, b),
        _ => return false,
    };

    let result = match (derived_key, base_key) {
        (_, DecayKey::Type(b)) if b == ctx.void_type() => true,
        (d, b) if d == b => true,
        (DecayKey::Type(d), DecayKey::Type(b)) => is_base_of(ctx, b, d),
        _ => false,
    };

    trace!(
        derived = %ctx.display(derived),
        base = %ctx.display(base),
        result,
        "derives_from"
    );
    result
}

/// Check whether `args[0]` is derived from or identical to `args[1]`
///
/// Evaluates to `false` unless exactly two types are given.
pub fn is_derived(ctx: &TypeContext, args: &[TypeId]) -> bool {
    match args {
        [derived, base] => derives_from(ctx, *derived, *base),
        _ => {
            trace!(arity = args.len(), "is_derived called with unsupported arity");
            false
        }
    }
}

/// Check whether two types are related in either derivation direction
///
/// Evaluates to `false` unless exactly two types are given. Siblings under a
/// common base are not related.
pub fn is_related(ctx: &TypeContext, args: &[TypeId]) -> bool {
    match args {
        [lhs, rhs] => derives_from(ctx, *lhs, *rhs) || derives_from(ctx, *rhs, *lhs),
        _ => {
            trace!(arity = args.len(), "is_related called with unsupported arity");
            false
        }
    }
}
