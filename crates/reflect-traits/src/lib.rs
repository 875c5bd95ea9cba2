//! Raya Reflection Type Traits
//!
//! Type relationship predicates and type normalization used by the reflection
//! layer to decide which overloads and specializations apply:
//!
//! - [`is_derived`]: derived from, or identical to, after decay
//! - [`is_related`]: derived in either direction
//! - [`is_same_template`]: same generic definition, arguments ignored
//! - [`decompose`]: strip references, turn arrays and functions into pointers
//! - [`gate`]: enable a generic item only when a condition holds
//!
//! Rust has no inheritance lattice, so class bases and generic heads are
//! registered explicitly in a [`TypeContext`], which is then frozen into a
//! read-only [`TypeRegistry`].

#![warn(missing_docs)]

pub mod context;
pub mod derivation;
pub mod describe;
pub mod error;
pub mod gate;
pub mod normalize;
pub mod registry;
pub mod template;
pub mod ty;

pub use context::TypeContext;
pub use derivation::{derives_from, is_base_of, is_derived, is_related};
pub use describe::Describe;
pub use error::TypeError;
pub use gate::{enable_if, EnableIf, EnableIfType, Enabled, Gate};
pub use normalize::{decay, decay_key, decompose, remove_reference, DecayKey};
pub use registry::TypeRegistry;
pub use template::{generic_head, is_same_template};
pub use ty::{GenericHeadId, PrimitiveType, Qualifiers, RefKind, Type, TypeId};
