//! Frozen type registry
//!
//! A [`TypeContext`] is built once at startup and then frozen into a
//! [`TypeRegistry`]. The registry is read-only, cheap to clone and safe to
//! share between threads. Freezing precomputes the canonical surface form of
//! every interned type, so [`TypeRegistry::decompose`] never needs to intern.
//!
//! One registry may be installed as the process-wide registry.

use super::context::TypeContext;
use super::derivation;
use super::error::TypeError;
use super::normalize;
use super::template;
use super::ty::{GenericHeadId, Type, TypeId};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

static GLOBAL: OnceCell<TypeRegistry> = OnceCell::new();

/// Read-only snapshot of a type context
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    ctx: Arc<TypeContext>,
    /// Canonical surface form, indexed by TypeId
    decomposed: Arc<[TypeId]>,
}

impl TypeContext {
    /// Freeze this context into a read-only registry
    pub fn freeze(mut self) -> Result<TypeRegistry, TypeError> {
        let mut decomposed = Vec::with_capacity(self.len());

        // Decomposing can intern new pointer types, which are decomposed in turn
        let mut index = 0;
        while index < self.len() {
            let id = self.id_at(index);
            decomposed.push(normalize::decompose(&mut self, id)?);
            index += 1;
        }

        debug!(types = self.len(), "froze type context");
        Ok(TypeRegistry {
            ctx: Arc::new(self),
            decomposed: decomposed.into(),
        })
    }
}

impl TypeRegistry {
    /// Underlying context
    pub fn context(&self) -> &TypeContext {
        &self.ctx
    }

    /// Get a type by its TypeId
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.ctx.get(id)
    }

    /// Look up a class or alias by name
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.ctx.lookup_named_type(name)
    }

    /// Look up a generic definition by name
    pub fn lookup_generic(&self, name: &str) -> Option<GenericHeadId> {
        self.ctx.lookup_generic(name)
    }

    /// Render a type
    pub fn display(&self, id: TypeId) -> String {
        self.ctx.display(id)
    }

    /// See [`derivation::is_derived`]
    pub fn is_derived(&self, args: &[TypeId]) -> bool {
        derivation::is_derived(&self.ctx, args)
    }

    /// See [`derivation::is_related`]
    pub fn is_related(&self, args: &[TypeId]) -> bool {
        derivation::is_related(&self.ctx, args)
    }

    /// See [`template::is_same_template`]
    pub fn is_same_template(&self, args: &[TypeId]) -> bool {
        template::is_same_template(&self.ctx, args)
    }

    /// Canonical surface form, `None` for ids from another context
    pub fn decompose(&self, id: TypeId) -> Option<TypeId> {
        if !self.ctx.contains(id) {
            return None;
        }
        self.decomposed.get(id.index()).copied()
    }

    /// Number of types in the registry
    pub fn len(&self) -> usize {
        self.ctx.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.ctx.is_empty()
    }

    /// Install this registry as the process-wide registry
    pub fn install(self) -> Result<&'static TypeRegistry, TypeError> {
        GLOBAL.set(self).map_err(|_| TypeError::AlreadyInstalled)?;
        debug!("installed global type registry");
        GLOBAL.get().ok_or(TypeError::AlreadyInstalled)
    }

    /// The process-wide registry, if one was installed
    pub fn global() -> Option<&'static TypeRegistry> {
        GLOBAL.get()
    }
}
