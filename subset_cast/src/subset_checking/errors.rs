use std::fmt::{self, Display};

use core_extensions::StringExt;

use crate::type_layout::{FieldLayout, TypeLayout};

/// An error from checking that a type is a layout-compatible subset of another.
///
/// In every `ExpectedFound` of this error,
/// `expected` comes from the source type and `found` from the target type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubsetError {
    /// The source type is not a pointer to a struct.
    InvalidSourceShape { found: &'static TypeLayout },
    /// The target type is not a struct.
    InvalidTargetShape { found: &'static TypeLayout },
    /// The target type is the same struct as the pointee of the source type,
    /// or a struct with identical fields.
    RedundantConversion {
        source: &'static TypeLayout,
        target: &'static TypeLayout,
    },
    /// The target type has more fields than the pointee of the source type.
    TargetTooLarge(ExpectedFound<usize>),
    /// The fields at `index` are classified differently.
    FieldKindMismatch {
        index: usize,
        fields: ExpectedFound<FieldLayout>,
    },
    /// One of the fields at `index` is of a kind that can't be reinterpreted.
    UnsupportedFieldKind {
        index: usize,
        fields: ExpectedFound<FieldLayout>,
    },
    /// The fields at `index` are at different offsets.
    FieldOffsetMismatch {
        index: usize,
        fields: ExpectedFound<FieldLayout>,
    },
    /// The target type is larger than the pointee of the source type.
    Size(ExpectedFound<usize>),
    /// The target type is more aligned than the pointee of the source type.
    Alignment(ExpectedFound<usize>),
    /// The trailing padding of the target type overlaps with the field
    /// of the source type at `index`.
    PaddingOverlap {
        index: usize,
        end: ExpectedFound<usize>,
    },
}

use self::SubsetError as SE;

impl SubsetError {
    /// The index of the field that caused the error,if there is one.
    pub const fn field_index(&self) -> Option<usize> {
        match *self {
            SE::FieldKindMismatch { index, .. }
            | SE::UnsupportedFieldKind { index, .. }
            | SE::FieldOffsetMismatch { index, .. }
            | SE::PaddingOverlap { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The name of the kind of error this is.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            SE::InvalidSourceShape { .. } => "InvalidSourceShape",
            SE::InvalidTargetShape { .. } => "InvalidTargetShape",
            SE::RedundantConversion { .. } => "RedundantConversion",
            SE::TargetTooLarge { .. } => "TargetTooLarge",
            SE::FieldKindMismatch { .. } => "FieldKindMismatch",
            SE::UnsupportedFieldKind { .. } => "UnsupportedFieldKind",
            SE::FieldOffsetMismatch { .. } => "FieldOffsetMismatch",
            SE::Size { .. } => "Size",
            SE::Alignment { .. } => "Alignment",
            SE::PaddingOverlap { .. } => "PaddingOverlap",
        }
    }

    const fn description(&self) -> &'static str {
        match self {
            SE::InvalidSourceShape { .. } => "the source type must be a pointer to a struct",
            SE::InvalidTargetShape { .. } => "the target type must be a struct",
            SE::RedundantConversion { .. } => {
                "the target type has the same definition as the source type,\
                 no reinterpretation is necessary"
            }
            SE::TargetTooLarge { .. } => "the target type has more fields than the source type",
            SE::FieldKindMismatch { .. } => "fields at the same position have different kinds",
            SE::UnsupportedFieldKind { .. } => "field of a kind that can't be reinterpreted",
            SE::FieldOffsetMismatch { .. } => "fields at the same position have different offsets",
            SE::Size { .. } => "the target type is larger than the source type",
            SE::Alignment { .. } => "the target type is more aligned than the source type",
            SE::PaddingOverlap { .. } => {
                "the trailing padding of the target type overlaps a field of the source type"
            }
        }
    }

    /// Used to report errors in `const` assertions.
    pub(crate) const fn panic_at_compile_time(self) -> ! {
        match self {
            SE::InvalidSourceShape { .. } => {
                panic!("InvalidSourceShape: the source type must be a pointer to a struct")
            }
            SE::InvalidTargetShape { .. } => {
                panic!("InvalidTargetShape: the target type must be a struct")
            }
            SE::RedundantConversion { .. } => panic!(
                "RedundantConversion: the target type has the same definition as the source type"
            ),
            SE::TargetTooLarge { .. } => {
                panic!("TargetTooLarge: the target type has more fields than the source type")
            }
            SE::FieldKindMismatch { .. } => {
                panic!("FieldKindMismatch: fields at the same position have different kinds")
            }
            SE::UnsupportedFieldKind { .. } => {
                panic!("UnsupportedFieldKind: field of a kind that can't be reinterpreted")
            }
            SE::FieldOffsetMismatch { .. } => {
                panic!("FieldOffsetMismatch: fields at the same position have different offsets")
            }
            SE::Size { .. } => panic!("Size: the target type is larger than the source type"),
            SE::Alignment { .. } => {
                panic!("Alignment: the target type is more aligned than the source type")
            }
            SE::PaddingOverlap { .. } => panic!(
                "PaddingOverlap: the trailing padding of the target type \
                 overlaps a field of the source type"
            ),
        }
    }
}

impl std::error::Error for SubsetError {}

impl Display for SubsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind_name(), self.description())?;
        if let Some(index) = self.field_index() {
            write!(f, " (field {})", index)?;
        }
        writeln!(f)?;

        let expected_err: Option<ExpectedFound<String>> = match self {
            SE::InvalidSourceShape { found } | SE::InvalidTargetShape { found } => {
                writeln!(f, "Found:\n{}", found.formatted_layout().left_padder(4))?;
                None
            }
            SE::RedundantConversion { source, target } => Some(ExpectedFound {
                expected: source.formatted_layout(),
                found: target.formatted_layout(),
            }),
            SE::TargetTooLarge(v) | SE::Size(v) | SE::Alignment(v) => Some(v.display_str()),
            SE::FieldKindMismatch { fields, .. }
            | SE::UnsupportedFieldKind { fields, .. }
            | SE::FieldOffsetMismatch { fields, .. } => Some(fields.display_str()),
            SE::PaddingOverlap { end, .. } => Some(end.display_str()),
        };

        if let Some(expected_err) = expected_err {
            writeln!(
                f,
                "Expected:\n{}\nFound:\n{}",
                expected_err.expected.left_padder(4),
                expected_err.found.left_padder(4),
            )?;
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////

/// Represents an error where a value was expected,but another value was found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExpectedFound<T> {
    pub expected: T,
    pub found: T,
}

impl<T> ExpectedFound<T> {
    pub fn new<O, F>(this: O, other: O, mut field_getter: F) -> ExpectedFound<T>
    where
        F: FnMut(O) -> T,
    {
        ExpectedFound {
            expected: field_getter(this),
            found: field_getter(other),
        }
    }

    pub fn as_ref(&self) -> ExpectedFound<&T> {
        ExpectedFound {
            expected: &self.expected,
            found: &self.found,
        }
    }

    pub fn map<F, U>(self, mut f: F) -> ExpectedFound<U>
    where
        F: FnMut(T) -> U,
    {
        ExpectedFound {
            expected: f(self.expected),
            found: f(self.found),
        }
    }

    pub fn display_str(&self) -> ExpectedFound<String>
    where
        T: Display,
    {
        self.as_ref().map(|x| format!("{:#}", x))
    }

    pub fn debug_str(&self) -> ExpectedFound<String>
    where
        T: fmt::Debug,
    {
        self.as_ref().map(|x| format!("{:#?}", x))
    }
}
