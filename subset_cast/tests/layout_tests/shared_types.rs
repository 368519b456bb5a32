#![allow(dead_code)]

use subset_cast::SubsetLayout;

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

/// `Type2` with the types of its fields swapped.
#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone)]
pub struct Swapped {
    pub tt1: i32,
    pub tt2: i8,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Shared {
    pub tag: u8,
    pub value: *mut i32,
    pub label: String,
}

#[repr(C)]
#[derive(SubsetLayout, Copy, Clone)]
pub struct SharedPrefix {
    pub tag: u8,
    pub value: *mut i32,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Clone, PartialEq)]
pub struct Account {
    pub id: u64,
    pub balance: i64,
    pub frozen: bool,
    pub owner: String,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Balance {
    pub id: u64,
    pub balance: i64,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(SubsetLayout, Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}
