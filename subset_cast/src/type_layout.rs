/*!
Types for modeling the layout of a datatype,
as seen by the subset checker.
*/

use std::{
    fmt::{self, Display, Formatter},
    mem,
};

use core_extensions::StringExt;

use crate::const_utils::str_eq;

mod field_kind;
mod tl_field;

pub use self::{
    field_kind::{FieldClass, FieldKind, Indirection},
    tl_field::FieldLayout,
};

////////////////////////////////////////////////////////////////////////////////

/// The layout of a type,
/// also includes metadata about where the type was defined.
///
/// This is constructed in a `const` context by the
/// [`SubsetLayout`](crate::SubsetLayout) impls of this crate,
/// and by `#[derive(SubsetLayout)]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeLayout {
    name: &'static str,
    module_path: &'static str,
    size: usize,
    alignment: usize,
    /// The layouts of the type parameters of std types,eg:`u64` in `Vec<u64>`.
    type_params: &'static [&'static TypeLayout],
    shape: TypeShape,
}

/// What kind of type a [`TypeLayout`] describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A `#[repr(C)]` struct,with its fields in declaration order.
    Struct(&'static [FieldLayout]),
    /// A type without fields that this crate inspects.
    Scalar(FieldKind),
    /// A pointer to another type.
    Pointer {
        indirection: Indirection,
        pointee: &'static TypeLayout,
    },
}

impl TypeLayout {
    /// Constructs the layout of the struct `T`.
    ///
    /// `fields` must be in declaration order,
    /// with the offsets that the fields have inside of `T`.
    pub const fn from_struct<T>(
        name: &'static str,
        module_path: &'static str,
        fields: &'static [FieldLayout],
    ) -> Self {
        Self {
            name,
            module_path,
            size: mem::size_of::<T>(),
            alignment: mem::align_of::<T>(),
            type_params: &[],
            shape: TypeShape::Struct(fields),
        }
    }

    /// Constructs the layout of a type defined in the standard library.
    pub const fn from_std<T>(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            module_path: "std",
            size: mem::size_of::<T>(),
            alignment: mem::align_of::<T>(),
            type_params: &[],
            shape: TypeShape::Scalar(kind),
        }
    }

    /// Constructs the layout of a dynamically sized type (`str`,`[T]`).
    ///
    /// Dynamically sized types report a size of 0.
    pub const fn from_unsized(name: &'static str, alignment: usize, kind: FieldKind) -> Self {
        Self {
            name,
            module_path: "std",
            size: 0,
            alignment,
            type_params: &[],
            shape: TypeShape::Scalar(kind),
        }
    }

    /// Constructs the layout of the pointer type `P`,which points to `pointee`.
    pub const fn from_pointer<P>(indirection: Indirection, pointee: &'static TypeLayout) -> Self {
        Self {
            name: indirection.symbol(),
            module_path: "std",
            size: mem::size_of::<P>(),
            alignment: mem::align_of::<P>(),
            type_params: &[],
            shape: TypeShape::Pointer {
                indirection,
                pointee,
            },
        }
    }

    /// Sets the layouts of the type parameters of a std type.
    pub const fn with_type_params(self, type_params: &'static [&'static TypeLayout]) -> Self {
        Self {
            type_params,
            ..self
        }
    }

    /// The name of the type,without generic parameters.
    ///
    /// For pointers this is the pointer symbol,eg:`&mut`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The module the type was defined in.
    pub const fn module_path(&self) -> &'static str {
        self.module_path
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn alignment(&self) -> usize {
        self.alignment
    }

    pub const fn shape(&self) -> TypeShape {
        self.shape
    }

    pub const fn type_params(&self) -> &'static [&'static TypeLayout] {
        self.type_params
    }

    /// Whether both layouts describe the same type,
    /// comparing the layouts of fields,pointees,and type parameters.
    ///
    /// This is a `const` equivalent of `==`.
    pub const fn is_same_type(&self, other: &Self) -> bool {
        if !str_eq(self.name, other.name)
            || !str_eq(self.module_path, other.module_path)
            || self.size != other.size
            || self.alignment != other.alignment
            || self.type_params.len() != other.type_params.len()
        {
            return false;
        }

        let mut i = 0;
        while i < self.type_params.len() {
            if !self.type_params[i].is_same_type(other.type_params[i]) {
                return false;
            }
            i += 1;
        }

        match (self.shape, other.shape) {
            (TypeShape::Struct(l_fields), TypeShape::Struct(r_fields)) => {
                fields_are_identical(l_fields, r_fields)
            }
            (TypeShape::Scalar(l_kind), TypeShape::Scalar(r_kind)) => l_kind as u8 == r_kind as u8,
            (
                TypeShape::Pointer {
                    indirection: l_ind,
                    pointee: l_pointee,
                },
                TypeShape::Pointer {
                    indirection: r_ind,
                    pointee: r_pointee,
                },
            ) => l_ind as u8 == r_ind as u8 && l_pointee.is_same_type(r_pointee),
            _ => false,
        }
    }

    /// The fields of this type,if it's a struct.
    pub const fn fields(&self) -> Option<&'static [FieldLayout]> {
        match self.shape {
            TypeShape::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Gets the struct that this type points to,
    /// returning None if it's not a pointer to a struct.
    pub const fn pointee_struct(&self) -> Option<&'static TypeLayout> {
        match self.shape {
            TypeShape::Pointer { pointee, .. } => match pointee.shape {
                TypeShape::Struct(_) => Some(pointee),
                _ => None,
            },
            _ => None,
        }
    }

    /// The kind of this type,without looking through pointers.
    pub const fn direct_kind(&self) -> FieldKind {
        match self.shape {
            TypeShape::Struct(_) => FieldKind::Aggregate,
            TypeShape::Scalar(kind) => kind,
            TypeShape::Pointer { .. } => FieldKind::Pointer,
        }
    }

    /// Classifies this type as a field,
    /// stripping one level of pointer indirection.
    pub const fn classify(&self) -> FieldClass {
        match self.shape {
            TypeShape::Pointer {
                indirection,
                pointee,
            } => FieldClass::new(Some(indirection), pointee.direct_kind()),
            _ => FieldClass::new(None, self.direct_kind()),
        }
    }

    /// Returns a value that prints the fields of this type,
    /// alongside their offsets and classification.
    pub fn formatted_layout(&self) -> String {
        let mut out = format!(
            "{} (size:{} alignment:{})",
            self, self.size, self.alignment
        );
        if let TypeShape::Struct(fields) = self.shape {
            let fields = fields
                .iter()
                .enumerate()
                .map(|(i, field)| format!("{}: {}\n", i, field))
                .collect::<String>();
            out.push_str("{\n");
            out.push_str(&fields.left_padder(4).to_string());
            out.push('}');
        }
        out
    }
}

impl Display for TypeLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.shape {
            TypeShape::Pointer {
                indirection,
                pointee,
            } => {
                Display::fmt(&indirection, f)?;
                Display::fmt(pointee, f)
            }
            TypeShape::Struct(_) => write!(f, "{}::{}", self.module_path, self.name),
            TypeShape::Scalar(_) => {
                Display::fmt(self.name, f)?;
                if let Some((first, rest)) = self.type_params.split_first() {
                    write!(f, "<{}", first)?;
                    for param in rest {
                        write!(f, ",{}", param)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

/// Whether both field lists have the same length,
/// and every pair of fields is [identical](FieldLayout::is_identical).
pub(crate) const fn fields_are_identical(left: &[FieldLayout], right: &[FieldLayout]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut i = 0;
    while i < left.len() {
        if !left[i].is_identical(&right[i]) {
            return false;
        }
        i += 1;
    }
    true
}
