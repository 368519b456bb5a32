/**
Asserts at compile-time that the second type is a layout-compatible subset
of the struct that the first type points to.

Use `assert_subset_layout!(mut Source, Target)` to also assert that
the target can be written into the source,as [`view_mut`](crate::view_mut) requires.

# Example

```
use subset_cast::{assert_subset_layout, SubsetLayout};

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Pixel {
    x: u32,
    y: u32,
    depth: f32,
    color: [u8; 4],
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Point {
    x: u32,
    y: u32,
}

assert_subset_layout!(&Pixel, Point);
assert_subset_layout!(mut &mut Pixel, Point);
```

Reinterpreting a type with more fields fails to compile:

```compile_fail
use subset_cast::{assert_subset_layout, SubsetLayout};

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Point {
    x: u32,
    y: u32,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Point3D {
    x: u32,
    y: u32,
    z: u32,
}

assert_subset_layout!(&Point, Point3D);
```

*/
#[macro_export]
macro_rules! assert_subset_layout {
    (mut $source:ty, $target:ty $(,)*) => {
        const _: () = $crate::SubsetCheck::<$source, $target>::MUT_ASSERT;
    };
    ($source:ty, $target:ty $(,)*) => {
        const _: () = $crate::SubsetCheck::<$source, $target>::ASSERT;
    };
}
