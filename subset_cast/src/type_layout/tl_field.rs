use std::fmt::{self, Display, Formatter};

use super::{FieldClass, TypeLayout};

use crate::const_utils::str_eq;

/// The layout of a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    name: &'static str,
    offset: usize,
    layout: &'static TypeLayout,
}

impl FieldLayout {
    /// Constructs a `FieldLayout`.
    ///
    /// For tuple structs the name is the index of the field.
    pub const fn new(name: &'static str, offset: usize, layout: &'static TypeLayout) -> Self {
        Self {
            name,
            offset,
            layout,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The offset of the field in bytes,from the start of the struct.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The layout of the type of the field.
    pub const fn layout(&self) -> &'static TypeLayout {
        self.layout
    }

    pub const fn classify(&self) -> FieldClass {
        self.layout.classify()
    }

    /// Whether both fields have the same name,offset,and type.
    pub const fn is_identical(&self, other: &Self) -> bool {
        str_eq(self.name, other.name)
            && self.offset == other.offset
            && self.layout.is_same_type(other.layout)
    }
}

impl Display for FieldLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} @{} ({})",
            self.name,
            self.layout,
            self.offset,
            self.classify(),
        )
    }
}
