/*!
Reinterpreting a struct as a layout-compatible subset of its fields.

Every operation here runs the subset checks first,
and only reinterprets memory once they pass.
All the pointer casts of this crate are in this module.
*/

use std::ptr;

use crate::{
    subset_checking::{SubsetCheck, SubsetError},
    subset_layout_trait::SubsetLayout,
    type_layout::TypeLayout,
};

/// A pointer to a struct,which [`convert_to`] reads from.
///
/// # Safety
///
/// `address` must return the address of the value that `Self` points to,
/// whose layout is the pointee in `<Self as SubsetLayout>::LAYOUT`.
pub unsafe trait SourcePointer: SubsetLayout {
    /// The address of the value this points to.
    fn address(&self) -> *const u8;
}

unsafe impl<'a, S> SourcePointer for &'a S
where
    S: SubsetLayout,
{
    fn address(&self) -> *const u8 {
        *self as *const S as *const u8
    }
}

unsafe impl<'a, S> SourcePointer for &'a mut S
where
    S: SubsetLayout,
{
    fn address(&self) -> *const u8 {
        &**self as *const S as *const u8
    }
}

///////////////////////////////////////////////////////////////////////////////

/// Reads a `T2` out of the struct that `source` points to,
/// without checking that `T2` is a subset of that struct.
///
/// The fields of the returned value are bitwise copies of the
/// fields at the same positions in the source,
/// reference fields keep pointing to the same values.
///
/// # Panics
///
/// Panics if any of the checks done by
/// [`check_subset_layout`](crate::check_subset_layout) fails.
///
/// # Safety
///
/// The layout checks can't see lifetimes,
/// so every lifetime in the reference fields of `T2` must be outlived by
/// the lifetime of the reference at the same position in the source.
///
/// # Example
///
/// ```
/// use subset_cast::{convert_to, SubsetLayout};
///
/// #[repr(C)]
/// #[derive(SubsetLayout)]
/// struct Type1<'a> {
///     t1: i8,
///     t2: &'a i32,
///     t3: String,
/// }
///
/// #[repr(C)]
/// #[derive(SubsetLayout, Copy, Clone)]
/// struct Type2<'a> {
///     tt1: i8,
///     tt2: &'a i32,
/// }
///
/// let two = 2;
/// let t1 = Type1 { t1: 1, t2: &two, t3: "test".to_string() };
///
/// let t2 = unsafe { convert_to::<&Type1<'_>, Type2<'_>>(&t1) };
///
/// assert_eq!(t2.tt1, 1);
/// assert_eq!(*t2.tt2, 2);
/// assert!(std::ptr::eq(t2.tt2, t1.t2));
/// ```
#[track_caller]
pub unsafe fn convert_to<T1, T2>(source: T1) -> T2
where
    T1: SourcePointer,
    T2: SubsetLayout + Copy,
{
    match try_convert_to::<T1, T2>(source) {
        Ok(x) => x,
        Err(e) => abort_conversion(T1::LAYOUT, T2::LAYOUT, e),
    }
}

/// Fallible version of [`convert_to`],
/// returning the first check that failed instead of panicking.
///
/// # Safety
///
/// This has the same safety requirements as [`convert_to`].
pub unsafe fn try_convert_to<T1, T2>(source: T1) -> Result<T2, SubsetError>
where
    T1: SourcePointer,
    T2: SubsetLayout + Copy,
{
    log_check::<T1, T2>(SubsetCheck::<T1, T2>::RESULT)?;

    // The checks guarantee that the pointee is at least as large and as aligned as `T2`,
    // and that the bytes of every field of `T2` are a valid value of that field.
    unsafe { Ok(ptr::read(source.address() as *const T2)) }
}

/// Borrows the struct that `source` points to as a `T`,
/// which must be a subset of its fields.
///
/// The returned reference aliases `source`,no memory is copied.
///
/// # Panics
///
/// Panics if any of the checks done by
/// [`check_subset_layout`](crate::check_subset_layout) fails.
///
/// # Example
///
/// ```
/// use subset_cast::{view, SubsetLayout};
///
/// #[repr(C)]
/// #[derive(SubsetLayout)]
/// struct Particle {
///     x: f32,
///     y: f32,
///     mass: f64,
///     label: String,
/// }
///
/// #[repr(C)]
/// #[derive(SubsetLayout)]
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// let particle = Particle { x: 1.0, y: 2.0, mass: 3.0, label: "p".into() };
///
/// let pos: &Position = view(&particle);
///
/// assert_eq!((pos.x, pos.y), (1.0, 2.0));
/// ```
#[track_caller]
pub fn view<S, T>(source: &S) -> &T
where
    S: SubsetLayout + 'static,
    T: SubsetLayout + 'static,
{
    match try_view::<S, T>(source) {
        Ok(x) => x,
        Err(e) => abort_conversion(<&S>::LAYOUT, T::LAYOUT, e),
    }
}

/// Fallible version of [`view`],
/// returning the first check that failed instead of panicking.
pub fn try_view<S, T>(source: &S) -> Result<&T, SubsetError>
where
    S: SubsetLayout + 'static,
    T: SubsetLayout + 'static,
{
    log_check::<&'static S, T>(SubsetCheck::<&'static S, T>::RESULT)?;

    // Both types have no lifetime parameters,
    // and the checks guarantee that reading every field of `T` reads
    // a valid value from the field of `S` at the same position.
    unsafe { Ok(&*(source as *const S as *const T)) }
}

/// Mutably borrows `source` as a `T`,which must be a subset of its fields.
///
/// Writes through the returned reference mutate `source`,no memory is copied.
///
/// # Panics
///
/// Panics if any of the checks done by
/// [`check_mutable_subset_layout`](crate::check_mutable_subset_layout) fails.
#[track_caller]
pub fn view_mut<S, T>(source: &mut S) -> &mut T
where
    S: SubsetLayout + 'static,
    T: SubsetLayout + 'static,
{
    match try_view_mut::<S, T>(source) {
        Ok(x) => x,
        Err(e) => abort_conversion(<&mut S>::LAYOUT, T::LAYOUT, e),
    }
}

/// Fallible version of [`view_mut`],
/// returning the first check that failed instead of panicking.
pub fn try_view_mut<S, T>(source: &mut S) -> Result<&mut T, SubsetError>
where
    S: SubsetLayout + 'static,
    T: SubsetLayout + 'static,
{
    log_check::<&'static mut S, T>(SubsetCheck::<&'static mut S, T>::MUT_RESULT)?;

    // On top of what `try_view` relies on,
    // the checks guarantee that writing a whole `T` only overwrites
    // the fields of `S` that `T` has,and the padding of `S`.
    unsafe { Ok(&mut *(source as *mut S as *mut T)) }
}

///////////////////////////////////////////////////////////////////////////////

fn log_check<T1, T2>(result: Result<(), SubsetError>) -> Result<(), SubsetError>
where
    T1: SubsetLayout,
    T2: SubsetLayout,
{
    match &result {
        Ok(()) => log::trace!("reinterpreting `{}` as `{}`", T1::LAYOUT, T2::LAYOUT),
        Err(e) => log::debug!(
            "refusing to reinterpret `{}` as `{}`: {}",
            T1::LAYOUT,
            T2::LAYOUT,
            e.kind_name(),
        ),
    }
    result
}

#[cold]
#[inline(never)]
#[track_caller]
fn abort_conversion(source: &TypeLayout, target: &TypeLayout, err: SubsetError) -> ! {
    panic!(
        "cannot reinterpret `{}` as `{}`\n{}",
        source, target, err
    )
}
