use proc_macro2::Span;

/// The `#[repr(..)]` attributes of the struct,before checking that they're supported.
#[derive(Debug, Copy, Clone)]
pub(crate) struct UncheckedReprAttr {
    is_packed: Option<u32>,
    repr_kind: Option<UncheckedReprKind>,
    repr_span: Span,
}

impl Default for UncheckedReprAttr {
    fn default() -> Self {
        Self {
            is_packed: None,
            repr_kind: None,
            repr_span: Span::call_site(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum UncheckedReprKind {
    C,
    Transparent,
    Rust,
    /// Means that `repr(IntegerType)` was used.
    Int,
}

pub(crate) static REPR_ERROR_MSG: &str = "\n\
    the #[repr(..)] attribute must be one of the supported attributes:\n\
    \t- #[repr(C)]\n\
    \t- #[repr(C, align(<some_integer>))]\n\
";

impl UncheckedReprAttr {
    pub(crate) fn set_packed(&mut self, packing: Option<u32>) -> Result<(), syn::Error> {
        self.is_packed = packing.or(Some(1));
        Ok(())
    }
    pub(crate) fn set_repr_kind(
        &mut self,
        repr_kind: UncheckedReprKind,
        repr_span: Span,
    ) -> Result<(), syn::Error> {
        if let Some(from) = self.repr_kind {
            if from != repr_kind {
                return_syn_err!(
                    repr_span,
                    "Attempting to override {:?} representation with {:?}.",
                    from,
                    repr_kind
                );
            }
        }
        self.repr_kind = Some(repr_kind);
        self.repr_span = repr_span;
        Ok(())
    }
}

impl UncheckedReprAttr {
    /// Checks that the struct is `#[repr(C)]`,optionally with an `align(..)`.
    ///
    /// `#[repr(C)]` is the only representation with a field order and offsets
    /// that can be relied on.
    pub(crate) fn check(self) -> Result<(), syn::Error> {
        let span = self.repr_span;

        let ura: UncheckedReprKind = self.repr_kind.ok_or_else(|| {
            syn_err!(
                span,
                "SubsetLayout requires the struct to have a #[repr(C)] attribute.{}",
                REPR_ERROR_MSG
            )
        })?;

        match ura {
            UncheckedReprKind::C => {}
            UncheckedReprKind::Transparent => return_syn_err!(
                span,
                "#[repr(transparent)] structs are not supported,use #[repr(C)] instead.{}",
                REPR_ERROR_MSG,
            ),
            UncheckedReprKind::Rust => return_syn_err!(
                span,
                "#[repr(Rust)] structs don't have a stable field order.{}",
                REPR_ERROR_MSG,
            ),
            UncheckedReprKind::Int => return_syn_err!(
                span,
                "#[repr(<some_integer_type>)] is only valid on enums.{}",
                REPR_ERROR_MSG,
            ),
        }

        if let Some(packing) = self.is_packed {
            return_syn_err!(
                span,
                "#[repr(packed({}))] structs are not supported,\
                 their fields can be unaligned.{}",
                packing,
                REPR_ERROR_MSG,
            );
        }

        Ok(())
    }
}

/// Whether `ident` names an integer type usable in `#[repr(..)]`.
pub(crate) fn is_int_repr(ident: &syn::Ident) -> bool {
    [
        "u8", "i8", "u16", "i16", "u32", "i32", "u64", "i64", "u128", "i128", "usize", "isize",
    ]
    .iter()
    .any(|int| ident == int)
}
