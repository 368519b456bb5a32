/*!
Functions and types related to checking that a type is a layout-compatible
subset of another.
*/

use std::marker::PhantomData;

use crate::{
    subset_layout_trait::SubsetLayout,
    type_layout::{fields_are_identical, FieldLayout, TypeLayout, TypeShape},
};

mod errors;

pub use self::errors::{ExpectedFound, SubsetError};

use self::SubsetError as SE;

/// Checks that `target` can be read from the memory of the struct that `source` points to.
///
/// The checks are performed in this order,returning the first error:
///
/// - `source` must be a pointer to a struct,otherwise this returns
///     [`InvalidSourceShape`](SubsetError::InvalidSourceShape).
///
/// - `target` must be a struct,otherwise this returns
///     [`InvalidTargetShape`](SubsetError::InvalidTargetShape).
///
/// - The pointee of `source` must not have the same definition as `target`,
///     otherwise this returns
///     [`RedundantConversion`](SubsetError::RedundantConversion).
///
/// - `target` must not have more fields than the pointee of `source`.
///
/// - Every field of `target` must have a supported kind,
///     the same classification,and the same offset as the field at the same
///     position in the pointee of `source`.
///
/// - `target` must not be larger,or more aligned,than the pointee of `source`.
///
/// Within a single field,an unsupported kind is reported as
/// [`UnsupportedFieldKind`](SubsetError::UnsupportedFieldKind)
/// even if the kinds of both fields also differ.
///
/// Field names are ignored (other than to detect redundant conversions),
/// fields correspond to each other by position.
pub const fn check_subset_layout(
    source: &'static TypeLayout,
    target: &'static TypeLayout,
) -> Result<(), SubsetError> {
    let source_struct = match source.pointee_struct() {
        Some(x) => x,
        None => return Err(SE::InvalidSourceShape { found: source }),
    };
    let s_fields = match source_struct.shape() {
        TypeShape::Struct(fields) => fields,
        _ => return Err(SE::InvalidSourceShape { found: source }),
    };
    let t_fields = match target.shape() {
        TypeShape::Struct(fields) => fields,
        _ => return Err(SE::InvalidTargetShape { found: target }),
    };

    if is_same_definition(source_struct, target) {
        return Err(SE::RedundantConversion {
            source: source_struct,
            target,
        });
    }

    if t_fields.len() > s_fields.len() {
        return Err(SE::TargetTooLarge(ExpectedFound {
            expected: s_fields.len(),
            found: t_fields.len(),
        }));
    }

    let mut index = 0;
    while index < t_fields.len() {
        let fields = ExpectedFound {
            expected: s_fields[index],
            found: t_fields[index],
        };
        let s_class = fields.expected.classify();
        let t_class = fields.found.classify();

        if !s_class.is_supported() || !t_class.is_supported() {
            return Err(SE::UnsupportedFieldKind { index, fields });
        }
        if !s_class.is_same(t_class) {
            return Err(SE::FieldKindMismatch { index, fields });
        }
        if fields.expected.offset() != fields.found.offset() {
            return Err(SE::FieldOffsetMismatch { index, fields });
        }

        index += 1;
    }

    if target.size() > source_struct.size() {
        return Err(SE::Size(ExpectedFound {
            expected: source_struct.size(),
            found: target.size(),
        }));
    }
    if target.alignment() > source_struct.alignment() {
        return Err(SE::Alignment(ExpectedFound {
            expected: source_struct.alignment(),
            found: target.alignment(),
        }));
    }

    Ok(())
}

/// Checks that `target` can be written into the memory of the struct that `source` points to.
///
/// This does every check that [`check_subset_layout`] does,
/// and also requires that the trailing padding of `target` does not overlap
/// with the fields of the pointee of `source`,
/// since writing a whole `target` would overwrite those fields with padding.
pub const fn check_mutable_subset_layout(
    source: &'static TypeLayout,
    target: &'static TypeLayout,
) -> Result<(), SubsetError> {
    if let Err(e) = check_subset_layout(source, target) {
        return Err(e);
    }

    // Both of these were checked to be structs in `check_subset_layout`.
    let (s_fields, t_fields) = match (source.pointee_struct(), target.fields()) {
        (Some(source_struct), Some(t_fields)) => match source_struct.fields() {
            Some(s_fields) => (s_fields, t_fields),
            None => return Err(SE::InvalidSourceShape { found: source }),
        },
        _ => return Err(SE::InvalidTargetShape { found: target }),
    };

    if t_fields.len() < s_fields.len() {
        let next_field: FieldLayout = s_fields[t_fields.len()];
        if target.size() > next_field.offset() {
            return Err(SE::PaddingOverlap {
                index: t_fields.len(),
                end: ExpectedFound {
                    expected: next_field.offset(),
                    found: target.size(),
                },
            });
        }
    }

    Ok(())
}

/// Whether both types are the same struct,or structs with identical fields.
///
/// Fields are identical when they have the same name,offset,and type,
/// so `[u8; 4]` and `[i8; 4]` fields are different despite both being sequences.
const fn is_same_definition(this: &TypeLayout, other: &TypeLayout) -> bool {
    match (this.fields(), other.fields()) {
        (Some(t_fields), Some(o_fields)) => {
            this.size() == other.size()
                && this.alignment() == other.alignment()
                && fields_are_identical(t_fields, o_fields)
        }
        _ => false,
    }
}

///////////////////////////////////////////////////////////////////////////////

/// Caches the result of checking that `T2` can be read from `T1`,
/// computing it once per pair of types at compile-time.
///
/// `T1` is expected to be a pointer to a struct,and `T2` a struct.
pub struct SubsetCheck<T1, T2>(PhantomData<(fn() -> T1, fn() -> T2)>);

impl<T1, T2> SubsetCheck<T1, T2>
where
    T1: SubsetLayout,
    T2: SubsetLayout,
{
    /// The result of reading a `T2` from the memory `T1` points to.
    pub const RESULT: Result<(), SubsetError> = check_subset_layout(T1::LAYOUT, T2::LAYOUT);

    /// The result of writing a `T2` into the memory `T1` points to.
    pub const MUT_RESULT: Result<(), SubsetError> =
        check_mutable_subset_layout(T1::LAYOUT, T2::LAYOUT);

    /// Fails compilation if a `T2` can't be read from the memory `T1` points to.
    pub const ASSERT: () = match Self::RESULT {
        Ok(()) => (),
        Err(e) => e.panic_at_compile_time(),
    };

    /// Fails compilation if a `T2` can't be written into the memory `T1` points to.
    pub const MUT_ASSERT: () = match Self::MUT_RESULT {
        Ok(()) => (),
        Err(e) => e.panic_at_compile_time(),
    };
}

/// Checks that a `T2` can be read from the memory that `T1` points to.
///
/// This is the check that [`convert_to`](crate::convert_to) and
/// [`view`](crate::view) do before reinterpreting anything.
///
/// # Example
///
/// ```
/// use subset_cast::{check_subset, SubsetError, SubsetLayout};
///
/// #[repr(C)]
/// #[derive(SubsetLayout)]
/// struct Wide {
///     id: u32,
///     score: f64,
///     name: String,
/// }
///
/// #[repr(C)]
/// #[derive(SubsetLayout)]
/// struct Narrow {
///     key: u32,
///     value: f64,
/// }
///
/// assert_eq!(check_subset::<&Wide, Narrow>(), Ok(()));
///
/// assert!(matches!(
///     check_subset::<&Narrow, Wide>(),
///     Err(SubsetError::TargetTooLarge { .. }),
/// ));
/// ```
pub fn check_subset<T1, T2>() -> Result<(), SubsetError>
where
    T1: SubsetLayout,
    T2: SubsetLayout,
{
    SubsetCheck::<T1, T2>::RESULT
}

/// Checks that a `T2` can be written into the memory that `T1` points to.
///
/// This is the check that [`view_mut`](crate::view_mut) does.
pub fn check_mutable_subset<T1, T2>() -> Result<(), SubsetError>
where
    T1: SubsetLayout,
    T2: SubsetLayout,
{
    SubsetCheck::<T1, T2>::MUT_RESULT
}
