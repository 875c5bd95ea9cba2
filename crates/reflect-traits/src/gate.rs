//! Conditional gate
//!
//! `Gate<C>` implements [`Enabled`] only when `C` is `true`. A generic item
//! bounded on `Gate<C>: Enabled` therefore does not exist for a false
//! condition, and rustc rejects any use of it at compile time:
//!
//! ```
//! use reflect_traits::gate::{Enabled, EnableIf, EnableIfType, Gate};
//!
//! fn only_when<const C: bool>() -> EnableIf<C>
//! where
//!     Gate<C>: Enabled<Marker = EnableIfType>,
//! {
//!     EnableIfType
//! }
//!
//! let _marker = only_when::<true>();
//! ```
//!
//! [`enable_if`] is the value-level counterpart used with answers from a
//! [`TypeRegistry`](crate::TypeRegistry), where the condition is only known
//! once the registry has been built.

/// Marker produced by an open gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnableIfType;

/// Compile-time condition holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gate<const C: bool>;

impl<const C: bool> Gate<C> {
    /// The condition this gate was instantiated with
    pub const CONDITION: bool = C;
}

/// Implemented only by open gates
pub trait Enabled {
    /// Marker type yielded by the gate
    type Marker;
}

impl Enabled for Gate<true> {
    type Marker = EnableIfType;
}

/// Marker type of an open gate; naming it for `false` is a compile error
pub type EnableIf<const C: bool> = <Gate<C> as Enabled>::Marker;

/// Value-level gate: `Some` marker when the condition holds
pub fn enable_if(condition: bool) -> Option<EnableIfType> {
    condition.then_some(EnableIfType)
}
