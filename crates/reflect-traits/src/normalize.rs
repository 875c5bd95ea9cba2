//! Type normalization
//!
//! Two canonical forms are provided:
//!
//! - [`decompose`] strips the reference and turns arrays and functions into
//!   pointers, but keeps cv-qualifiers. Its result is used as a storage key.
//! - [`decay`] additionally strips top-level cv-qualifiers. The predicates
//!   compare types in this form, via the non-interning [`decay_key`].

use super::context::TypeContext;
use super::error::TypeError;
use super::ty::{Type, TypeId};

/// Decayed form of a type, computed without interning new descriptors
///
/// Every pointer-shaped result is represented by its pointee, so a decayed
/// array, a decayed function and an explicit pointer compare equal whenever
/// they denote the same pointer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecayKey {
    /// A non-pointer type, unqualified and reference-free
    Type(TypeId),
    /// A pointer to the given type
    PointerTo(TypeId),
}

impl DecayKey {
    /// Intern the type this key denotes
    pub fn to_type(self, ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        match self {
            DecayKey::Type(id) => Ok(id),
            DecayKey::PointerTo(pointee) => ctx.pointer(pointee),
        }
    }
}

/// Strip reference-ness: `T&` and `T&&` become `T`
pub fn remove_reference(ctx: &TypeContext, ty: TypeId) -> Result<TypeId, TypeError> {
    match ctx.resolve(ty)? {
        Type::Reference(r) => Ok(r.referent),
        _ => Ok(ty),
    }
}

/// Canonical surface form of a type
///
/// References are stripped first. An array then becomes a pointer to its
/// element type and a function becomes a pointer to that function. Anything
/// else is returned unchanged. Qualifiers survive: `const i32(&)[3]` becomes
/// `const i32*`.
pub fn decompose(ctx: &mut TypeContext, ty: TypeId) -> Result<TypeId, TypeError> {
    let ty = remove_reference(ctx, ty)?;
    let pointee = match ctx.resolve(ty)? {
        Type::Array(arr) => Some(arr.element),
        Type::Function(_) => Some(ty),
        _ => None,
    };
    match pointee {
        Some(pointee) => ctx.pointer(pointee),
        None => Ok(ty),
    }
}

/// [`decompose`] followed by removal of top-level cv-qualifiers
pub fn decay(ctx: &mut TypeContext, ty: TypeId) -> Result<TypeId, TypeError> {
    let decomposed = decompose(ctx, ty)?;
    ctx.remove_qualifiers(decomposed)
}

/// Decayed form of `ty` without touching the context
///
/// Returns `None` for ids that do not belong to `ctx`.
pub fn decay_key(ctx: &TypeContext, ty: TypeId) -> Option<DecayKey> {
    let ty = remove_reference(ctx, ty).ok()?;
    let key = match ctx.get(ty)? {
        Type::Array(arr) => DecayKey::PointerTo(arr.element),
        Type::Function(_) => DecayKey::PointerTo(ty),
        _ => {
            let bare = ctx.remove_qualifiers(ty).ok()?;
            match ctx.get(bare)? {
                Type::Pointer(ptr) => DecayKey::PointerTo(ptr.pointee),
                _ => DecayKey::Type(bare),
            }
        }
    };
    Some(key)
}
