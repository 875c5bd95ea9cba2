//! Descriptors for Rust's own types
//!
//! | Rust           | Descriptor                |
//! |----------------|---------------------------|
//! | `()`           | `void`                    |
//! | `&T`           | `const T&`                |
//! | `&mut T`       | `T&`                      |
//! | `*const T`     | `const T*`                |
//! | `*mut T`       | `T*`                      |
//! | `[T; N]`       | `T[N]`                    |
//! | `[T]`          | `T[]`                     |
//! | `fn(A) -> R`   | `R(*)(A)`                 |

use super::context::TypeContext;
use super::error::TypeError;
use super::ty::{PrimitiveType, TypeId};

/// Maps a Rust type onto a descriptor in a [`TypeContext`]
pub trait Describe {
    /// Intern the descriptor for `Self`
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError>;
}

impl TypeContext {
    /// Descriptor for the Rust type `T`
    pub fn describe<T: Describe + ?Sized>(&mut self) -> Result<TypeId, TypeError> {
        T::describe(self)
    }
}

impl Describe for () {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        Ok(ctx.void_type())
    }
}

macro_rules! describe_primitive {
    ($($ty:ty => $prim:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
                    Ok(ctx.primitive(PrimitiveType::$prim))
                }
            }
        )*
    };
}

describe_primitive! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let inner = T::describe(ctx)?;
        let inner = ctx.const_of(inner)?;
        ctx.lvalue_ref(inner)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let inner = T::describe(ctx)?;
        ctx.lvalue_ref(inner)
    }
}

impl<T: Describe + ?Sized> Describe for *const T {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let inner = T::describe(ctx)?;
        let inner = ctx.const_of(inner)?;
        ctx.pointer(inner)
    }
}

impl<T: Describe + ?Sized> Describe for *mut T {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let inner = T::describe(ctx)?;
        ctx.pointer(inner)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let element = T::describe(ctx)?;
        ctx.array(element, Some(N as u64))
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
        let element = T::describe(ctx)?;
        ctx.array(element, None)
    }
}

macro_rules! describe_fn_pointer {
    ($($param:ident),*) => {
        impl<R: Describe, $($param: Describe),*> Describe for fn($($param),*) -> R {
            fn describe(ctx: &mut TypeContext) -> Result<TypeId, TypeError> {
                let params = vec![$($param::describe(ctx)?),*];
                let ret = R::describe(ctx)?;
                let func = ctx.function(params, ret, false)?;
                ctx.pointer(func)
            }
        }
    };
}

describe_fn_pointer!();
describe_fn_pointer!(A);
describe_fn_pointer!(A, B);
describe_fn_pointer!(A, B, C);
describe_fn_pointer!(A, B, C, D);
