//! Items used by the code that `#[derive(SubsetLayout)]` generates.

pub use crate::{
    subset_layout_trait::{SubsetLayout, UnsafeOpaqueField},
    type_layout::{FieldLayout, TypeLayout},
};

pub use core::mem::offset_of;
