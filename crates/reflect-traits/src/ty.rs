//! Core type descriptor definitions

use bitflags::bitflags;
use std::fmt;

/// Unique identifier for a type in the type context
///
/// Ids carry the stamp of the context that minted them, so an id only
/// resolves in that context (and its clones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId {
    pub(crate) context: u32,
    pub(crate) index: u32,
}

impl TypeId {
    pub(crate) fn new(context: u32, index: u32) -> Self {
        TypeId { context, index }
    }

    /// Index of this type in its owning context
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.index)
    }
}

/// Identity of a generic definition, independent of its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericHeadId {
    pub(crate) context: u32,
    pub(crate) index: u32,
}

impl fmt::Display for GenericHeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericHeadId({})", self.index)
    }
}

bitflags! {
    /// cv-qualification carried by a type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers: u8 {
        /// `const`
        const CONST = 1 << 0;
        /// `volatile`
        const VOLATILE = 1 << 1;
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::CONST), self.contains(Self::VOLATILE)) {
            (true, true) => write!(f, "const volatile"),
            (true, false) => write!(f, "const"),
            (false, true) => write!(f, "volatile"),
            (false, false) => Ok(()),
        }
    }
}

/// Value category of a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `T&`
    Lvalue,
    /// `T&&`
    Rvalue,
}

impl RefKind {
    /// Reference collapsing: `&` wins over `&&`
    pub fn collapse(self, other: RefKind) -> RefKind {
        match (self, other) {
            (RefKind::Rvalue, RefKind::Rvalue) => RefKind::Rvalue,
            _ => RefKind::Lvalue,
        }
    }
}

/// Primitive scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PrimitiveType {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl PrimitiveType {
    /// Source-level name of the primitive
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::I128 => "i128",
            PrimitiveType::Isize => "isize",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::U128 => "u128",
            PrimitiveType::Usize => "usize",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Nominal class type. Base links are kept by the context, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    /// Class name
    pub name: String,
}

/// Registered generic definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericDef {
    /// Generic name, e.g. `Box`
    pub name: String,
    /// Declared parameter count, `None` for variadic definitions
    pub arity: Option<usize>,
}

/// Instantiation of a generic definition: `Box<i32>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceType {
    /// Generic head
    pub head: GenericHeadId,
    /// Concrete type arguments
    pub args: Vec<TypeId>,
}

/// cv-qualified type: `const T`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedType {
    /// Unqualified type
    pub inner: TypeId,
    /// Qualifiers, never empty
    pub qualifiers: Qualifiers,
}

/// Reference type: `T&` or `T&&`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceType {
    /// Referenced type, never itself a reference
    pub referent: TypeId,
    /// Value category
    pub kind: RefKind,
}

/// Pointer type: `T*`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerType {
    /// Pointee type
    pub pointee: TypeId,
}

/// Array type: `T[N]` or `T[]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    /// Element type, carries the array's qualifiers
    pub element: TypeId,
    /// Number of elements, `None` for an unknown bound
    pub len: Option<u64>,
}

/// Function type: `R(P1, P2, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Parameter types
    pub params: Vec<TypeId>,
    /// Return type
    pub ret: TypeId,
    /// Whether the signature ends in `...`
    pub variadic: bool,
}

/// The core type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The universal sentinel, a base of every type
    Void,

    /// Primitive scalar
    Primitive(PrimitiveType),

    /// Nominal class
    Class(ClassType),

    /// Generic instantiation
    Instance(InstanceType),

    /// cv-qualified type
    Qualified(QualifiedType),

    /// Reference
    Reference(ReferenceType),

    /// Pointer
    Pointer(PointerType),

    /// Array
    Array(ArrayType),

    /// Function signature
    Function(FunctionType),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Primitive(p) => write!(f, "{}", p),
            Type::Class(c) => write!(f, "{}", c.name),
            Type::Instance(i) => {
                write!(f, "{}<", i.head)?;
                for (idx, arg) in i.args.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            Type::Qualified(q) => write!(f, "{} {}", q.qualifiers, q.inner),
            Type::Reference(r) => match r.kind {
                RefKind::Lvalue => write!(f, "{}&", r.referent),
                RefKind::Rvalue => write!(f, "{}&&", r.referent),
            },
            Type::Pointer(p) => write!(f, "{}*", p.pointee),
            Type::Array(a) => match a.len {
                Some(len) => write!(f, "{}[{}]", a.element, len),
                None => write!(f, "{}[]", a.element),
            },
            Type::Function(func) => {
                write!(f, "{}(", func.ret)?;
                for (idx, param) in func.params.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                if func.variadic {
                    if !func.params.is_empty() {
                        write!(f, ", ")?;
                    }
                    write!(f, "...")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Type {
    /// Check if this is the universal sentinel
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Check if this type can take part in the derivation lattice
    pub fn is_class_like(&self) -> bool {
        matches!(self, Type::Class(_) | Type::Instance(_))
    }

    /// Check if this is a reference
    pub fn is_reference(&self) -> bool {
        matches!(self, Type::Reference(_))
    }

    /// Check if this is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// Check if this is a raw function type
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }

    /// Get the generic instance if this is one
    pub fn as_instance(&self) -> Option<&InstanceType> {
        match self {
            Type::Instance(i) => Some(i),
            _ => None,
        }
    }

    /// Get the qualified type if this is one
    pub fn as_qualified(&self) -> Option<&QualifiedType> {
        match self {
            Type::Qualified(q) => Some(q),
            _ => None,
        }
    }
}
