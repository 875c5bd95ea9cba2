//! Type context for managing descriptors and type interning

use super::derivation::is_base_of;
use super::error::TypeError;
use super::ty::{
    ArrayType, ClassType, FunctionType, GenericDef, GenericHeadId, InstanceType, PointerType,
    PrimitiveType, QualifiedType, Qualifiers, RefKind, ReferenceType, Type, TypeId,
};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Source of per-context stamps
static NEXT_STAMP: AtomicU32 = AtomicU32::new(0);

const PRIMITIVES: [PrimitiveType; 16] = [
    PrimitiveType::Bool,
    PrimitiveType::Char,
    PrimitiveType::I8,
    PrimitiveType::I16,
    PrimitiveType::I32,
    PrimitiveType::I64,
    PrimitiveType::I128,
    PrimitiveType::Isize,
    PrimitiveType::U8,
    PrimitiveType::U16,
    PrimitiveType::U32,
    PrimitiveType::U64,
    PrimitiveType::U128,
    PrimitiveType::Usize,
    PrimitiveType::F32,
    PrimitiveType::F64,
];

/// Type context that owns every descriptor of a program
///
/// Types are interned, so structurally identical descriptors share a `TypeId`
/// and identity is plain id equality. The constructors canonicalise their
/// input (qualifier placement, reference collapsing, parameter adjustment) and
/// refuse types that cannot be formed.
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Process-unique stamp carried by every id this context mints
    stamp: u32,

    /// Storage for all types, indexed by TypeId
    types: Vec<Arc<Type>>,

    /// Reverse mapping from Type to TypeId for interning
    type_to_id: FxHashMap<Type, TypeId>,

    /// Named types (classes and aliases)
    named_types: FxHashMap<String, TypeId>,

    /// Generic definitions, indexed by GenericHeadId
    generics: Vec<GenericDef>,

    /// Generic definitions by name
    generic_names: FxHashMap<String, GenericHeadId>,

    /// Direct bases of class and instance types
    bases: FxHashMap<TypeId, Vec<TypeId>>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    /// Create a new context with `void` and the primitives pre-interned
    pub fn new() -> Self {
        let mut ctx = TypeContext {
            stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
            types: Vec::new(),
            type_to_id: FxHashMap::default(),
            named_types: FxHashMap::default(),
            generics: Vec::new(),
            generic_names: FxHashMap::default(),
            bases: FxHashMap::default(),
        };

        ctx.intern(Type::Void);
        for prim in PRIMITIVES {
            ctx.intern(Type::Primitive(prim));
        }

        ctx
    }

    /// Intern a type, returning its TypeId
    ///
    /// Callers must pass an already canonical descriptor.
    pub(crate) fn intern(&mut self, ty: Type) -> TypeId {
        if let Some(&id) = self.type_to_id.get(&ty) {
            return id;
        }

        let id = self.id_at(self.types.len());
        self.types.push(Arc::new(ty.clone()));
        self.type_to_id.insert(ty, id);
        id
    }

    /// Id of the type stored at `index` in this context
    pub(crate) fn id_at(&self, index: usize) -> TypeId {
        TypeId::new(self.stamp, index as u32)
    }

    /// Get a type by its TypeId
    ///
    /// Ids minted by another context never resolve, even when in range.
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        if id.context != self.stamp {
            return None;
        }
        self.types.get(id.index()).map(|arc| arc.as_ref())
    }

    /// Get a type by its TypeId, failing for ids from another context
    pub fn resolve(&self, id: TypeId) -> Result<&Type, TypeError> {
        self.get(id).ok_or(TypeError::UnknownTypeId { id: id.index })
    }

    /// Check whether a TypeId belongs to this context
    pub fn contains(&self, id: TypeId) -> bool {
        id.context == self.stamp && id.index() < self.types.len()
    }

    // Convenience methods for leaf types

    /// Get the `void` sentinel
    pub fn void_type(&self) -> TypeId {
        // Interned first by `new`
        self.id_at(0)
    }

    /// Get a primitive type
    pub fn primitive(&mut self, prim: PrimitiveType) -> TypeId {
        self.intern(Type::Primitive(prim))
    }

    /// Get the `bool` type
    pub fn bool_type(&mut self) -> TypeId {
        self.primitive(PrimitiveType::Bool)
    }

    /// Get the `i32` type
    pub fn i32_type(&mut self) -> TypeId {
        self.primitive(PrimitiveType::I32)
    }

    /// Get the `f64` type
    pub fn f64_type(&mut self) -> TypeId {
        self.primitive(PrimitiveType::F64)
    }

    // Compound constructors

    /// Apply cv-qualifiers to a type
    ///
    /// Qualifiers on references and functions are dropped, and qualifiers on
    /// an array move onto its element type.
    pub fn qualified(
        &mut self,
        inner: TypeId,
        qualifiers: Qualifiers,
    ) -> Result<TypeId, TypeError> {
        let inner_ty = self.resolve(inner)?.clone();
        if qualifiers.is_empty() {
            return Ok(inner);
        }

        match inner_ty {
            Type::Qualified(q) => Ok(self.intern(Type::Qualified(QualifiedType {
                inner: q.inner,
                qualifiers: q.qualifiers | qualifiers,
            }))),
            Type::Reference(_) | Type::Function(_) => Ok(inner),
            Type::Array(arr) => {
                let element = self.qualified(arr.element, qualifiers)?;
                self.array(element, arr.len)
            }
            _ => Ok(self.intern(Type::Qualified(QualifiedType { inner, qualifiers }))),
        }
    }

    /// Shorthand for `const T`
    pub fn const_of(&mut self, inner: TypeId) -> Result<TypeId, TypeError> {
        self.qualified(inner, Qualifiers::CONST)
    }

    /// Create a reference, collapsing references to references
    pub fn reference(&mut self, referent: TypeId, kind: RefKind) -> Result<TypeId, TypeError> {
        match self.resolve(referent)?.clone() {
            Type::Reference(inner) => Ok(self.intern(Type::Reference(ReferenceType {
                referent: inner.referent,
                kind: inner.kind.collapse(kind),
            }))),
            _ if self.is_void_like(referent) => Err(TypeError::Invalid {
                reason: format!("reference to {}", self.display(referent)),
            }),
            _ => Ok(self.intern(Type::Reference(ReferenceType { referent, kind }))),
        }
    }

    /// Shorthand for `T&`
    pub fn lvalue_ref(&mut self, referent: TypeId) -> Result<TypeId, TypeError> {
        self.reference(referent, RefKind::Lvalue)
    }

    /// Shorthand for `T&&`
    pub fn rvalue_ref(&mut self, referent: TypeId) -> Result<TypeId, TypeError> {
        self.reference(referent, RefKind::Rvalue)
    }

    /// Create a pointer type
    pub fn pointer(&mut self, pointee: TypeId) -> Result<TypeId, TypeError> {
        if self.resolve(pointee)?.is_reference() {
            return Err(TypeError::Invalid {
                reason: format!("pointer to reference {}", self.display(pointee)),
            });
        }
        Ok(self.intern(Type::Pointer(PointerType { pointee })))
    }

    /// Create an array type, `len: None` for an unknown bound
    pub fn array(&mut self, element: TypeId, len: Option<u64>) -> Result<TypeId, TypeError> {
        let bare = self.remove_qualifiers(element)?;
        let invalid = match self.resolve(bare)? {
            Type::Void => Some("void"),
            Type::Reference(_) => Some("references"),
            Type::Function(_) => Some("functions"),
            _ => None,
        };
        if let Some(what) = invalid {
            return Err(TypeError::Invalid {
                reason: format!("array of {}", what),
            });
        }
        Ok(self.intern(Type::Array(ArrayType { element, len })))
    }

    /// Create a function type
    ///
    /// Parameters are adjusted the way a declaration would be: array and
    /// function parameters become pointers and top-level qualifiers are dropped.
    pub fn function(
        &mut self,
        params: Vec<TypeId>,
        ret: TypeId,
        variadic: bool,
    ) -> Result<TypeId, TypeError> {
        let bare_ret = self.remove_qualifiers(ret)?;
        if matches!(self.resolve(bare_ret)?, Type::Array(_) | Type::Function(_)) {
            return Err(TypeError::Invalid {
                reason: format!("function returning {}", self.display(ret)),
            });
        }

        let mut adjusted = Vec::with_capacity(params.len());
        for param in params {
            adjusted.push(self.adjust_parameter(param)?);
        }

        Ok(self.intern(Type::Function(FunctionType {
            params: adjusted,
            ret,
            variadic,
        })))
    }

    fn adjust_parameter(&mut self, param: TypeId) -> Result<TypeId, TypeError> {
        if self.is_void_like(param) {
            return Err(TypeError::Invalid {
                reason: "void parameter".to_string(),
            });
        }
        match self.resolve(param)?.clone() {
            Type::Array(arr) => self.pointer(arr.element),
            Type::Function(_) => self.pointer(param),
            Type::Qualified(q) => Ok(q.inner),
            _ => Ok(param),
        }
    }

    /// Strip top-level cv-qualifiers
    pub fn remove_qualifiers(&self, ty: TypeId) -> Result<TypeId, TypeError> {
        match self.resolve(ty)? {
            Type::Qualified(q) => Ok(q.inner),
            _ => Ok(ty),
        }
    }

    /// Top-level cv-qualifiers of a type
    pub fn qualifiers_of(&self, ty: TypeId) -> Qualifiers {
        match self.get(ty) {
            Some(Type::Qualified(q)) => q.qualifiers,
            _ => Qualifiers::empty(),
        }
    }

    fn is_void_like(&self, ty: TypeId) -> bool {
        match self.get(ty) {
            Some(Type::Void) => true,
            Some(Type::Qualified(q)) => matches!(self.get(q.inner), Some(Type::Void)),
            _ => false,
        }
    }

    // Classes and the derivation lattice

    /// Declare a nominal class with its direct bases
    pub fn declare_class(
        &mut self,
        name: impl Into<String>,
        bases: &[TypeId],
    ) -> Result<TypeId, TypeError> {
        let name = name.into();
        if self.named_types.contains_key(&name) {
            return Err(TypeError::DuplicateDefinition { name });
        }
        for &base in bases {
            self.check_class_like(base)?;
        }

        let id = self.intern(Type::Class(ClassType { name: name.clone() }));
        debug!(class = %name, bases = bases.len(), "declared class");
        self.named_types.insert(name, id);
        if !bases.is_empty() {
            self.bases.insert(id, bases.to_vec());
        }
        Ok(id)
    }

    /// Attach further direct bases to a class or generic instance
    pub fn declare_bases(&mut self, derived: TypeId, bases: &[TypeId]) -> Result<(), TypeError> {
        self.check_class_like(derived)?;
        for &base in bases {
            self.check_class_like(base)?;
            if base == derived || is_base_of(self, derived, base) {
                return Err(TypeError::CircularReference {
                    cycle: format!("{} -> {}", self.display(derived), self.display(base)),
                });
            }
        }

        debug!(ty = %self.display(derived), added = bases.len(), "declared bases");
        let entry = self.bases.entry(derived).or_default();
        for &base in bases {
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
        Ok(())
    }

    /// Direct bases of a class or instance type
    pub fn bases_of(&self, ty: TypeId) -> &[TypeId] {
        self.bases.get(&ty).map(Vec::as_slice).unwrap_or(&[])
    }

    fn check_class_like(&self, ty: TypeId) -> Result<(), TypeError> {
        if self.resolve(ty)?.is_class_like() {
            Ok(())
        } else {
            Err(TypeError::NotAClass {
                ty: self.display(ty),
            })
        }
    }

    // Generic definitions

    /// Register a generic definition, `arity: None` for variadic ones
    pub fn declare_generic(
        &mut self,
        name: impl Into<String>,
        arity: Option<usize>,
    ) -> Result<GenericHeadId, TypeError> {
        let name = name.into();
        if self.generic_names.contains_key(&name) {
            return Err(TypeError::DuplicateDefinition { name });
        }

        let head = GenericHeadId {
            context: self.stamp,
            index: self.generics.len() as u32,
        };
        debug!(generic = %name, ?arity, "declared generic");
        self.generic_names.insert(name.clone(), head);
        self.generics.push(GenericDef { name, arity });
        Ok(head)
    }

    /// Instantiate a generic definition with concrete arguments
    pub fn instantiate(
        &mut self,
        head: GenericHeadId,
        args: Vec<TypeId>,
    ) -> Result<TypeId, TypeError> {
        let def = self
            .generic_def(head)
            .ok_or_else(|| TypeError::UndefinedType {
                name: head.to_string(),
            })?;
        if let Some(expected) = def.arity {
            if expected != args.len() {
                return Err(TypeError::InvalidTypeArgCount {
                    name: def.name.clone(),
                    expected,
                    actual: args.len(),
                });
            }
        }
        for &arg in &args {
            self.resolve(arg)?;
        }
        Ok(self.intern(Type::Instance(InstanceType { head, args })))
    }

    /// Get a generic definition
    pub fn generic_def(&self, head: GenericHeadId) -> Option<&GenericDef> {
        if head.context != self.stamp {
            return None;
        }
        self.generics.get(head.index as usize)
    }

    /// Look up a generic definition by name
    pub fn lookup_generic(&self, name: &str) -> Option<GenericHeadId> {
        self.generic_names.get(name).copied()
    }

    // Named types

    /// Register a type alias
    pub fn register_named_type(&mut self, name: String, ty: TypeId) {
        self.named_types.insert(name, ty);
    }

    /// Look up a named type by name
    pub fn lookup_named_type(&self, name: &str) -> Option<TypeId> {
        self.named_types.get(name).copied()
    }

    /// Resolve a named type, returning an error if not found
    pub fn resolve_named_type(&self, name: &str) -> Result<TypeId, TypeError> {
        self.lookup_named_type(name).ok_or_else(|| TypeError::UndefinedType {
            name: name.to_string(),
        })
    }

    /// Render a type the way it would be written in a declaration
    pub fn display(&self, id: TypeId) -> String {
        let ty = match self.get(id) {
            Some(ty) => ty,
            None => return format!("InvalidType({})", id.index),
        };

        match ty {
            Type::Void | Type::Primitive(_) => ty.to_string(),
            Type::Class(c) => c.name.clone(),
            Type::Instance(inst) => {
                let name = self
                    .generic_def(inst.head)
                    .map(|def| def.name.clone())
                    .unwrap_or_else(|| inst.head.to_string());
                let args: Vec<_> = inst.args.iter().map(|&a| self.display(a)).collect();
                format!("{}<{}>", name, args.join(", "))
            }
            Type::Qualified(q) => match self.get(q.inner) {
                Some(Type::Pointer(_)) => format!("{} {}", self.display(q.inner), q.qualifiers),
                _ => format!("{} {}", q.qualifiers, self.display(q.inner)),
            },
            Type::Reference(r) => match r.kind {
                RefKind::Lvalue => format!("{}&", self.display(r.referent)),
                RefKind::Rvalue => format!("{}&&", self.display(r.referent)),
            },
            Type::Pointer(p) => match self.get(p.pointee) {
                Some(Type::Function(func)) => {
                    format!("{}(*)({})", self.display(func.ret), self.display_params(func))
                }
                _ => format!("{}*", self.display(p.pointee)),
            },
            Type::Array(a) => match a.len {
                Some(len) => format!("{}[{}]", self.display(a.element), len),
                None => format!("{}[]", self.display(a.element)),
            },
            Type::Function(func) => {
                format!("{}({})", self.display(func.ret), self.display_params(func))
            }
        }
    }

    fn display_params(&self, func: &FunctionType) -> String {
        let mut parts: Vec<_> = func.params.iter().map(|&p| self.display(p)).collect();
        if func.variadic {
            parts.push("...".to_string());
        }
        parts.join(", ")
    }

    /// Get the number of types in the context
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_interning() {
        let mut ctx = TypeContext::new();

        let a = ctx.i32_type();
        let b = ctx.i32_type();
        assert_eq!(a, b);

        let p1 = ctx.pointer(a).unwrap();
        let p2 = ctx.pointer(b).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_void_is_preinterned() {
        let ctx = TypeContext::new();
        assert_eq!(ctx.get(ctx.void_type()), Some(&Type::Void));
    }

    #[test]
    fn test_qualifier_merging() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        let c = ctx.const_of(int).unwrap();
        let cv = ctx.qualified(c, Qualifiers::VOLATILE).unwrap();
        let direct = ctx
            .qualified(int, Qualifiers::CONST | Qualifiers::VOLATILE)
            .unwrap();
        assert_eq!(cv, direct);

        // Empty qualification is the identity
        assert_eq!(ctx.qualified(int, Qualifiers::empty()).unwrap(), int);

        assert_eq!(ctx.qualifiers_of(cv), Qualifiers::CONST | Qualifiers::VOLATILE);
        assert_eq!(ctx.qualifiers_of(c), Qualifiers::CONST);
        assert!(ctx.qualifiers_of(int).is_empty());
    }

    #[test]
    fn test_qualifiers_on_references_and_functions_are_dropped() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        let r = ctx.lvalue_ref(int).unwrap();
        assert_eq!(ctx.const_of(r).unwrap(), r);

        let f = ctx.function(vec![int], int, false).unwrap();
        assert_eq!(ctx.const_of(f).unwrap(), f);
    }

    #[test]
    fn test_array_qualifiers_move_to_element() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        let arr = ctx.array(int, Some(3)).unwrap();
        let const_arr = ctx.const_of(arr).unwrap();

        let const_int = ctx.const_of(int).unwrap();
        let arr_of_const = ctx.array(const_int, Some(3)).unwrap();
        assert_eq!(const_arr, arr_of_const);
    }

    #[test]
    fn test_reference_collapsing() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        let lref = ctx.lvalue_ref(int).unwrap();
        let rref = ctx.rvalue_ref(int).unwrap();

        assert_eq!(ctx.rvalue_ref(lref).unwrap(), lref);
        assert_eq!(ctx.lvalue_ref(rref).unwrap(), lref);
        assert_eq!(ctx.rvalue_ref(rref).unwrap(), rref);
    }

    #[test]
    fn test_invalid_types_are_rejected() {
        let mut ctx = TypeContext::new();
        let void = ctx.void_type();
        let int = ctx.i32_type();
        let lref = ctx.lvalue_ref(int).unwrap();
        let func = ctx.function(vec![], int, false).unwrap();
        let arr = ctx.array(int, Some(2)).unwrap();

        assert!(ctx.lvalue_ref(void).is_err());
        let const_void = ctx.const_of(void).unwrap();
        assert!(ctx.lvalue_ref(const_void).is_err());
        assert!(ctx.pointer(lref).is_err());
        assert!(ctx.array(void, None).is_err());
        assert!(ctx.array(lref, Some(1)).is_err());
        assert!(ctx.array(func, Some(1)).is_err());
        assert!(ctx.function(vec![], arr, false).is_err());
        assert!(ctx.function(vec![], func, false).is_err());
        assert!(ctx.function(vec![void], int, false).is_err());

        // void* is fine
        assert!(ctx.pointer(void).is_ok());
    }

    #[test]
    fn test_parameter_adjustment() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();
        let void = ctx.void_type();

        let arr = ctx.array(int, Some(4)).unwrap();
        let ptr = ctx.pointer(int).unwrap();
        let const_int = ctx.const_of(int).unwrap();

        let by_array = ctx.function(vec![arr], void, false).unwrap();
        let by_pointer = ctx.function(vec![ptr], void, false).unwrap();
        assert_eq!(by_array, by_pointer);

        let by_const = ctx.function(vec![const_int], void, false).unwrap();
        let by_value = ctx.function(vec![int], void, false).unwrap();
        assert_eq!(by_const, by_value);
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let mut ctx = TypeContext::new();
        let foreign = ctx.id_at(10_000);

        assert!(!ctx.contains(foreign));
        assert_eq!(
            ctx.pointer(foreign),
            Err(TypeError::UnknownTypeId { id: 10_000 })
        );
        assert!(ctx.const_of(foreign).is_err());
    }

    #[test]
    fn test_ids_from_another_context_do_not_resolve() {
        let mut other = TypeContext::new();
        let a = other.declare_class("A", &[]).unwrap();
        let b = other.declare_class("B", &[a]).unwrap();

        let mut ctx = TypeContext::new();
        let x = ctx.declare_class("X", &[]).unwrap();
        let y = ctx.declare_class("Y", &[x]).unwrap();

        // Same slots, different owners
        assert_eq!((a.index(), b.index()), (x.index(), y.index()));
        assert_ne!(a, x);

        assert!(!ctx.contains(a));
        assert_eq!(ctx.get(b), None);
        assert_eq!(ctx.resolve(b), Err(TypeError::UnknownTypeId { id: b.index }));
        assert!(ctx.bases_of(b).is_empty());
        assert_eq!(ctx.display(a), format!("InvalidType({})", a.index()));
        assert!(ctx.pointer(a).is_err());

        let other_box = other.declare_generic("Box", Some(1)).unwrap();
        let int = ctx.i32_type();
        assert!(ctx.generic_def(other_box).is_none());
        assert!(ctx.instantiate(other_box, vec![int]).is_err());
    }

    #[test]
    fn test_clones_share_ids() {
        let mut ctx = TypeContext::new();
        let a = ctx.declare_class("A", &[]).unwrap();
        let copy = ctx.clone();

        assert!(copy.contains(a));
        assert_eq!(copy.get(a), ctx.get(a));
    }

    #[test]
    fn test_declare_class() {
        let mut ctx = TypeContext::new();

        let base = ctx.declare_class("Base", &[]).unwrap();
        let derived = ctx.declare_class("Derived", &[base]).unwrap();

        assert_eq!(ctx.bases_of(derived), &[base]);
        assert!(ctx.bases_of(base).is_empty());
        assert_eq!(ctx.lookup_named_type("Derived"), Some(derived));
        assert_eq!(
            ctx.declare_class("Base", &[]),
            Err(TypeError::DuplicateDefinition {
                name: "Base".to_string()
            })
        );
    }

    #[test]
    fn test_bases_must_be_classes() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        assert!(matches!(
            ctx.declare_class("Bad", &[int]),
            Err(TypeError::NotAClass { .. })
        ));
    }

    #[test]
    fn test_inheritance_cycle_is_rejected() {
        let mut ctx = TypeContext::new();

        let a = ctx.declare_class("A", &[]).unwrap();
        let b = ctx.declare_class("B", &[a]).unwrap();
        let c = ctx.declare_class("C", &[b]).unwrap();

        assert!(matches!(
            ctx.declare_bases(a, &[c]),
            Err(TypeError::CircularReference { .. })
        ));
        assert!(matches!(
            ctx.declare_bases(a, &[a]),
            Err(TypeError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_declare_bases_deduplicates() {
        let mut ctx = TypeContext::new();

        let a = ctx.declare_class("A", &[]).unwrap();
        let b = ctx.declare_class("B", &[a]).unwrap();
        ctx.declare_bases(b, &[a]).unwrap();

        assert_eq!(ctx.bases_of(b), &[a]);
    }

    #[test]
    fn test_generic_instantiation() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();
        let float = ctx.f64_type();

        let pair = ctx.declare_generic("Pair", Some(2)).unwrap();
        let p1 = ctx.instantiate(pair, vec![int, float]).unwrap();
        let p2 = ctx.instantiate(pair, vec![int, float]).unwrap();
        assert_eq!(p1, p2);

        assert_eq!(
            ctx.instantiate(pair, vec![int]),
            Err(TypeError::InvalidTypeArgCount {
                name: "Pair".to_string(),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(ctx.lookup_generic("Pair"), Some(pair));
    }

    #[test]
    fn test_variadic_generic() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();

        let tuple = ctx.declare_generic("Tuple", None).unwrap();
        assert!(ctx.instantiate(tuple, vec![]).is_ok());
        assert!(ctx.instantiate(tuple, vec![int, int, int]).is_ok());
    }

    #[test]
    fn test_resolve_named_type() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();
        ctx.register_named_type("Int".to_string(), int);

        assert_eq!(ctx.resolve_named_type("Int"), Ok(int));
        assert!(ctx.resolve_named_type("Missing").is_err());
    }

    #[test]
    fn test_display() {
        let mut ctx = TypeContext::new();
        let int = ctx.i32_type();
        let void = ctx.void_type();

        let const_int = ctx.const_of(int).unwrap();
        assert_eq!(ctx.display(const_int), "const i32");

        let ptr = ctx.pointer(int).unwrap();
        let const_ptr = ctx.const_of(ptr).unwrap();
        assert_eq!(ctx.display(const_ptr), "i32* const");

        let arr = ctx.array(int, Some(3)).unwrap();
        let arr_ref = ctx.lvalue_ref(arr).unwrap();
        assert_eq!(ctx.display(arr_ref), "i32[3]&");

        let func = ctx.function(vec![int], void, true).unwrap();
        assert_eq!(ctx.display(func), "void(i32, ...)");
        let fptr = ctx.pointer(func).unwrap();
        assert_eq!(ctx.display(fptr), "void(*)(i32, ...)");

        let boxed = ctx.declare_generic("Box", Some(1)).unwrap();
        let box_int = ctx.instantiate(boxed, vec![int]).unwrap();
        assert_eq!(ctx.display(box_int), "Box<i32>");

        assert_eq!(ctx.display(ctx.id_at(9_999)), "InvalidType(9999)");
    }
}
