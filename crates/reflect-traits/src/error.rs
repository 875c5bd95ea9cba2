//! Errors raised while building type descriptors

use thiserror::Error;

/// Errors that can occur while registering or constructing types
///
/// Predicates never produce these; they degrade to `false` instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// Undefined type or generic reference
    #[error("Undefined type: {name}")]
    UndefinedType {
        /// Name that was not found
        name: String,
    },

    /// A class or generic definition with this name was already declared
    #[error("Duplicate definition: {name}")]
    DuplicateDefinition {
        /// Declared name
        name: String,
    },

    /// A type used as a base, or given bases, is not a class or generic instance
    #[error("Not a class type: {ty}")]
    NotAClass {
        /// Rendered type
        ty: String,
    },

    /// Circular inheritance
    #[error("Circular type reference detected: {cycle}")]
    CircularReference {
        /// Description of the cycle
        cycle: String,
    },

    /// Invalid type argument count
    #[error("Invalid type argument count for {name}: expected {expected}, got {actual}")]
    InvalidTypeArgCount {
        /// Generic name
        name: String,
        /// Expected count
        expected: usize,
        /// Actual count
        actual: usize,
    },

    /// The requested type cannot be formed
    #[error("Invalid type: {reason}")]
    Invalid {
        /// Reason for invalidity
        reason: String,
    },

    /// The id does not belong to this context
    #[error("Unknown type id: {id}")]
    UnknownTypeId {
        /// Offending id
        id: u32,
    },

    /// A process-wide registry is already installed
    #[error("A global type registry is already installed")]
    AlreadyInstalled,
}
