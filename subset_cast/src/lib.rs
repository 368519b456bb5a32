/*!

This crate is for reinterpreting a struct as another struct with a subset of its fields,
without copying or allocating.

Given a wide struct,and a narrower struct whose fields have the same kinds
(and are at the same offsets) as a prefix of the wide struct's fields,
this crate lets you view the memory of the wide struct as the narrow one.

# Features

- The `SubsetLayout` trait,describing the layout of a type in a constant.

- The `SubsetLayout` derive macro,for implementing the trait for `#[repr(C)]` structs.

- Checking that one type is a layout-compatible subset of another,
    at compile-time with [`assert_subset_layout`],
    or when converting with [`view`],[`view_mut`],and [`convert_to`].

# Layout compatibility

A struct `T` can be read from the memory of a struct `S` when:

- `T` is not the same type as `S`,nor a struct with identical fields.
    Those conversions don't need this crate.

- `T` has at most as many fields as `S`.

- Every field of `T` is classified the same as the field at the same position in `S`,
    regardless of their names.
    Fields are classified by their kind after stripping one level of pointer indirection,
    eg: `&i32` fields are only compatible with other `&i32` fields,
    not with `*const i32` or `i32` fields.

- The classified kinds are one of:
    `bool`,`i8`,`i32`,`i64`,`isize`,`u8`,`u32`,`u64`,`usize`,`f32`,`f64`.

- Every field of `T` is at the same offset as the field at the same position in `S`.

- `T` is not larger or more aligned than `S`.

# Example

```
use subset_cast::{view, view_mut, SubsetLayout};

#[repr(C)]
#[derive(SubsetLayout)]
struct Monster {
    id: u64,
    health: f64,
    is_boss: bool,
    name: String,
}

#[repr(C)]
#[derive(SubsetLayout)]
struct Stats {
    monster_id: u64,
    hp: f64,
}

let mut monster = Monster {
    id: 7,
    health: 100.0,
    is_boss: false,
    name: "slime".to_string(),
};

assert_eq!(view::<Monster, Stats>(&monster).hp, 100.0);

view_mut::<Monster, Stats>(&mut monster).hp -= 25.0;
assert_eq!(monster.health, 75.0);
```

*/

#![allow(unused_unsafe)]
#![warn(rust_2018_idioms)]
#![deny(clippy::missing_safety_doc)]

extern crate self as subset_cast;

pub use subset_cast_derive::SubsetLayout;

#[macro_use]
mod macros;

pub mod const_utils;
pub mod reinterpret;
pub mod subset_checking;
pub mod subset_layout_trait;
pub mod type_layout;

#[doc(hidden)]
pub mod derive_macro_reexports;

#[doc(hidden)]
pub use crate::derive_macro_reexports as __subset_re;


pub use crate::{
    reinterpret::{
        convert_to, try_convert_to, try_view, try_view_mut, view, view_mut, SourcePointer,
    },
    subset_checking::{
        check_mutable_subset, check_mutable_subset_layout, check_subset, check_subset_layout,
        ExpectedFound, SubsetCheck, SubsetError,
    },
    subset_layout_trait::SubsetLayout,
    type_layout::{FieldClass, FieldKind, FieldLayout, Indirection, TypeLayout, TypeShape},
};
