//! Where the `SubsetLayout` trait is declared,as well as its impls for std types.

use std::marker::{PhantomData, PhantomPinned};

use crate::type_layout::{FieldKind, Indirection, TypeLayout};

///////////////////////

/// A type whose layout is described by a [`TypeLayout`],
/// which the subset checker uses to decide whether reinterpreting
/// one type as another is allowed.
///
/// This trait can be derived for `#[repr(C)]` structs using
/// [`#[derive(SubsetLayout)]`](derive@crate::SubsetLayout).
///
/// # Safety
///
/// The layout specified in `LAYOUT` must be correct:
/// field offsets,field types,size,and alignment must be those of `Self`,
/// otherwise reinterpreting `Self` is equivalent to an unchecked transmute.
pub unsafe trait SubsetLayout {
    /// The layout of the type provided by implementors.
    const LAYOUT: &'static TypeLayout;
}

/// Retrieves the TypeLayout of `T: SubsetLayout`.
pub fn get_type_layout<T>() -> &'static TypeLayout
where
    T: SubsetLayout + ?Sized,
{
    T::LAYOUT
}

/////////////////////////////////////////////////////////////////////////////

/// Wrapper type used by `#[derive(SubsetLayout)]` to describe fields
/// with the `#[subset(unsafe_opaque_field)]` attribute.
#[doc(hidden)]
pub struct UnsafeOpaqueField<T>(PhantomData<T>);

unsafe impl<T> SubsetLayout for UnsafeOpaqueField<T> {
    const LAYOUT: &'static TypeLayout = &TypeLayout::from_std::<T>("<opaque>", FieldKind::Opaque);
}

/////////////////////////////////////////////////////////////////////////////
////                Implementations
/////////////////////////////////////////////////////////////////////////////

macro_rules! impl_std_layout {
    (
        $( [$($impl_params:tt)*] $ty:ty = ($name:expr, $kind:ident), )*
    ) => (
        $(
            unsafe impl<$($impl_params)*> SubsetLayout for $ty {
                const LAYOUT: &'static TypeLayout =
                    &TypeLayout::from_std::<Self>($name, FieldKind::$kind);
            }
        )*
    )
}

impl_std_layout! {
    [] bool = ("bool", Bool),
    [] i8 = ("i8", I8),
    [] i16 = ("i16", I16),
    [] i32 = ("i32", I32),
    [] i64 = ("i64", I64),
    [] i128 = ("i128", I128),
    [] isize = ("isize", Isize),
    [] u8 = ("u8", U8),
    [] u16 = ("u16", U16),
    [] u32 = ("u32", U32),
    [] u64 = ("u64", U64),
    [] u128 = ("u128", U128),
    [] usize = ("usize", Usize),
    [] f32 = ("f32", F32),
    [] f64 = ("f64", F64),
    [] char = ("char", Char),
    [] () = ("()", Unit),
    [] PhantomPinned = ("PhantomPinned", Unit),
    [T: ?Sized] PhantomData<T> = ("PhantomData", Unit),
    [] String = ("String", Str),
}

/// The layouts of the type parameters of a std type.
struct TypeParams<T>(PhantomData<T>);

impl<T: SubsetLayout> TypeParams<T> {
    const ONE: &'static [&'static TypeLayout] = &[T::LAYOUT];
}

macro_rules! impl_generic_std_layout {
    (
        $( [$($impl_params:tt)*] $ty:ty = ($name:expr, $kind:ident), )*
    ) => (
        $(
            unsafe impl<$($impl_params)*> SubsetLayout for $ty
            where
                T: SubsetLayout,
            {
                const LAYOUT: &'static TypeLayout =
                    &TypeLayout::from_std::<Self>($name, FieldKind::$kind)
                        .with_type_params(TypeParams::<T>::ONE);
            }
        )*
    )
}

impl_generic_std_layout! {
    [T] Vec<T> = ("Vec", Sequence),
    [T, const N: usize] [T; N] = ("array", Sequence),
    [T] Option<T> = ("Option", Aggregate),
}

unsafe impl SubsetLayout for str {
    const LAYOUT: &'static TypeLayout = &TypeLayout::from_unsized("str", 1, FieldKind::Str);
}

unsafe impl<T: SubsetLayout> SubsetLayout for [T] {
    const LAYOUT: &'static TypeLayout =
        &TypeLayout::from_unsized("slice", std::mem::align_of::<T>(), FieldKind::Sequence)
            .with_type_params(TypeParams::<T>::ONE);
}

macro_rules! impl_pointer_layout {
    (
        $( [$($impl_params:tt)*] $ty:ty = $indirection:ident, )*
    ) => (
        $(
            unsafe impl<$($impl_params)*> SubsetLayout for $ty
            where
                T: SubsetLayout + ?Sized,
            {
                const LAYOUT: &'static TypeLayout =
                    &TypeLayout::from_pointer::<Self>(Indirection::$indirection, T::LAYOUT);
            }
        )*
    )
}

impl_pointer_layout! {
    ['a, T] &'a T = SharedRef,
    ['a, T] &'a mut T = MutRef,
    [T] *const T = ConstPtr,
    [T] *mut T = MutPtr,
    [T] Box<T> = Boxed,
}

/////////////////////////////////////////////////////////////////////////////
