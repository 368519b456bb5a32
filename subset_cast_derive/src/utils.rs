use std::{
    fmt::Display,
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut},
    ptr,
};

use proc_macro2::Span;
use quote::ToTokens;

////////////////////////////////////////////////////////////////////////////////

macro_rules! spanned_err {
    ( $e:expr, $($fmt:tt)* ) => ({
        $crate::utils::spanned_err(
            &$e,
            &format!($($fmt)*),
        )
    })
}

macro_rules! return_spanned_err {
    ( $($args:tt)* ) => ({
        return Err(spanned_err!($($args)*));
    })
}

macro_rules! syn_err {
    ( $span:expr, $($fmt:tt)* ) => ({
        $crate::utils::syn_err(
            $span,
            &format!($($fmt)*),
        )
    })
}

macro_rules! return_syn_err {
    ( $($args:tt)* ) => ({
        return Err(syn_err!($($args)*));
    })
}

////////////////////////////////////////////////////////////////////////////////

pub(crate) trait SynPathExt {
    fn equals_str(&self, s: &str) -> bool;
}

impl SynPathExt for syn::Path {
    fn equals_str(&self, s: &str) -> bool {
        match self.get_ident() {
            Some(ident) => ident == s,
            None => false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

pub(crate) trait SynResultExt {
    fn push_err(&mut self, err: syn::Error);
    fn combine_err<T>(&mut self, res: Result<T, syn::Error>);
    fn combine_into_err<T>(self, into: &mut Result<T, syn::Error>);
}

impl<T> SynResultExt for Result<T, syn::Error> {
    fn push_err(&mut self, err: syn::Error) {
        match self {
            this @ Ok(_) => *this = Err(err),
            Err(e) => e.combine(err),
        }
    }
    fn combine_err<T2>(&mut self, res: Result<T2, syn::Error>) {
        if let Err(err) = res {
            self.push_err(err);
        }
    }
    fn combine_into_err<T2>(self, into: &mut Result<T2, syn::Error>) {
        into.combine_err(self);
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A result wrapper which panics if it's the error variant is not handled,
/// by calling `.into_result()` or `.take()`.
#[derive(Debug, Clone)]
pub(crate) struct LinearResult<T> {
    errors: ManuallyDrop<Result<T, syn::Error>>,
}

impl<T> Drop for LinearResult<T> {
    fn drop(&mut self) {
        let res = unsafe { take_manuallydrop(&mut self.errors) };
        if let Err(e) = res {
            panic!("Expected LinearResult to be handled:\n{}", e);
        }
    }
}

impl<T> LinearResult<T> {
    #[inline]
    pub(crate) fn new(res: Result<T, syn::Error>) -> Self {
        Self {
            errors: ManuallyDrop::new(res),
        }
    }

    #[inline]
    pub(crate) fn ok(value: T) -> Self {
        Self::new(Ok(value))
    }
}

impl<T> Default for LinearResult<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(Ok(T::default()))
    }
}

impl<T> Deref for LinearResult<T> {
    type Target = Result<T, syn::Error>;

    fn deref(&self) -> &Result<T, syn::Error> {
        &self.errors
    }
}

impl<T> DerefMut for LinearResult<T> {
    fn deref_mut(&mut self) -> &mut Result<T, syn::Error> {
        &mut self.errors
    }
}

impl<T> LinearResult<T> {
    #[inline]
    pub(crate) fn into_result(self) -> Result<T, syn::Error> {
        let mut this = ManuallyDrop::new(self);
        unsafe { take_manuallydrop(&mut this.errors) }
    }

    #[inline]
    pub(crate) fn take(&mut self) -> Result<T, syn::Error>
    where
        T: Default,
    {
        mem::replace(&mut *self.errors, Ok(Default::default()))
    }
}

impl<T> SynResultExt for LinearResult<T> {
    #[inline]
    fn push_err(&mut self, err: syn::Error) {
        self.errors.push_err(err);
    }
    #[inline]
    fn combine_err<T2>(&mut self, res: Result<T2, syn::Error>) {
        self.errors.combine_err(res);
    }
    #[inline]
    fn combine_into_err<T2>(self, into: &mut Result<T2, syn::Error>) {
        self.into_result().combine_into_err(into);
    }
}

////////////////////////////////////////////////////////////////////////////////

pub(crate) fn spanned_err(tokens: &dyn ToTokens, display: &dyn Display) -> syn::Error {
    syn::Error::new_spanned(tokens, display)
}

pub(crate) fn syn_err(span: Span, display: &dyn Display) -> syn::Error {
    syn::Error::new(span, display)
}

////////////////////////////////////////////////////////////////////////////////

/// Takes the contents out of a `ManuallyDrop<T>`.
///
/// # Safety
///
/// After this function is called `slot` will become uninitialized and
/// must not be read again.
pub(crate) unsafe fn take_manuallydrop<T>(slot: &mut ManuallyDrop<T>) -> T {
    ManuallyDrop::into_inner(ptr::read(slot))
}

////////////////////////////////////////////////////////////////////////////////
