use std::fmt::{self, Display, Formatter};

/// The representation category of a field,independent of its name.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
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
    Char,
    /// `str` and `String`.
    Str,
    /// Arrays,slices,and `Vec`s.
    Sequence,
    /// Structs and enums.
    Aggregate,
    /// A pointer to a pointer.
    Pointer,
    /// A field marked with `#[subset(unsafe_opaque_field)]`.
    Opaque,
    /// Zero-sized types.
    Unit,
}

impl FieldKind {
    /// Whether fields of this kind can be reinterpreted.
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            FieldKind::Bool
                | FieldKind::I8
                | FieldKind::I32
                | FieldKind::I64
                | FieldKind::Isize
                | FieldKind::U8
                | FieldKind::U32
                | FieldKind::U64
                | FieldKind::Usize
                | FieldKind::F32
                | FieldKind::F64
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::I8 => "i8",
            FieldKind::I16 => "i16",
            FieldKind::I32 => "i32",
            FieldKind::I64 => "i64",
            FieldKind::I128 => "i128",
            FieldKind::Isize => "isize",
            FieldKind::U8 => "u8",
            FieldKind::U16 => "u16",
            FieldKind::U32 => "u32",
            FieldKind::U64 => "u64",
            FieldKind::U128 => "u128",
            FieldKind::Usize => "usize",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Char => "char",
            FieldKind::Str => "string",
            FieldKind::Sequence => "sequence",
            FieldKind::Aggregate => "aggregate",
            FieldKind::Pointer => "pointer",
            FieldKind::Opaque => "opaque",
            FieldKind::Unit => "unit",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.name(), f)
    }
}

///////////////////////////////////////////////////////////////////////////////

/// The kind of pointer a type is.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Indirection {
    /// A `&T`
    SharedRef,
    /// A `&mut T`
    MutRef,
    /// A `*const T`
    ConstPtr,
    /// A `*mut T`
    MutPtr,
    /// A `Box<T>`
    Boxed,
}

impl Indirection {
    pub const fn symbol(self) -> &'static str {
        match self {
            Indirection::SharedRef => "&",
            Indirection::MutRef => "&mut",
            Indirection::ConstPtr => "*const",
            Indirection::MutPtr => "*mut",
            Indirection::Boxed => "Box",
        }
    }
}

impl Display for Indirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Indirection::SharedRef => f.write_str("&"),
            Indirection::Boxed => f.write_str("Box "),
            _ => write!(f, "{} ", self.symbol()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

/// The classification of a field:
/// the kind of the field after stripping one level of pointer indirection,
/// and the stripped indirection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldClass {
    pub indirection: Option<Indirection>,
    pub kind: FieldKind,
}

impl FieldClass {
    pub const fn new(indirection: Option<Indirection>, kind: FieldKind) -> Self {
        Self { indirection, kind }
    }

    /// Whether the field can be reinterpreted.
    pub const fn is_supported(self) -> bool {
        self.kind.is_supported()
    }

    /// `const` equivalent of `==`.
    pub const fn is_same(self, other: Self) -> bool {
        let same_indirection = match (self.indirection, other.indirection) {
            (Some(l), Some(r)) => l as u8 == r as u8,
            (None, None) => true,
            _ => false,
        };
        same_indirection && self.kind as u8 == other.kind as u8
    }
}

impl Display for FieldClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(indirection) = self.indirection {
            Display::fmt(&indirection, f)?;
        }
        Display::fmt(&self.kind, f)
    }
}
