#![allow(dead_code)]

use crate::SubsetLayout;

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Type1<'a> {
    pub t1: i8,
    pub t2: &'a i32,
    pub t3: String,
}

#[repr(C)]
#[derive(SubsetLayout, Copy, Clone)]
pub struct Type2<'a> {
    pub tt1: i8,
    pub tt2: &'a i32,
}

pub type Type2Alias<'a> = Type2<'a>;

/// A struct with the same definition as `Type2`,declared somewhere else.
pub mod same_fields {
    use crate::SubsetLayout;

    #[repr(C)]
    #[derive(SubsetLayout)]
    pub struct Type2<'a> {
        pub tt1: i8,
        pub tt2: &'a i32,
    }
}

#[repr(C)]
#[derive(SubsetLayout, Copy, Clone)]
pub struct Renamed<'a> {
    pub first: i8,
    pub second: &'a i32,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: u64,
    pub health: f64,
    pub is_boss: bool,
    pub name: String,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Stats {
    pub monster_id: u64,
    pub hp: f64,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Rg(pub u8, pub u8);

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Pair<T> {
    pub first: T,
    pub second: T,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Single<T> {
    pub value: T,
}
