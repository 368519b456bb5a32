use std::{
    fs::File,
    marker::PhantomData,
    mem::{self, offset_of},
};

use subset_cast::{
    check_subset, subset_layout_trait::get_type_layout, FieldClass, FieldKind, Indirection,
    SubsetError, SubsetLayout, TypeLayout, TypeShape,
};

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Mixed<'a> {
    pub flag: bool,
    pub count: u32,
    pub total: i64,
    pub ratio: f32,
    pub reference: &'a u8,
    pub pointer: *mut usize,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Tuple(pub u8, pub u64, pub i8);

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Unit;

#[repr(C, align(32))]
#[derive(SubsetLayout)]
pub struct Aligned {
    pub a: u8,
    pub b: u16,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Generic<'a, T, const N: usize> {
    pub value: T,
    pub array: [u8; N],
    pub reference: &'a T,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct WithWhere<T>
where
    T: Copy,
{
    pub value: T,
    pub other: T,
}

#[repr(C)]
#[derive(SubsetLayout)]
#[subset(bound = "T: 'static")]
pub struct WithBound<T> {
    pub value: u32,
    pub _marker: PhantomData<T>,
}

#[repr(C)]
#[derive(SubsetLayout)]
pub struct WithOpaque {
    pub id: u32,
    #[subset(unsafe_opaque_field)]
    pub file: Option<File>,
}

fn field_names(layout: &TypeLayout) -> Vec<&'static str> {
    layout
        .fields()
        .unwrap()
        .iter()
        .map(|f| f.name())
        .collect()
}

fn field_offsets(layout: &TypeLayout) -> Vec<usize> {
    layout
        .fields()
        .unwrap()
        .iter()
        .map(|f| f.offset())
        .collect()
}

fn field_kinds(layout: &TypeLayout) -> Vec<FieldClass> {
    layout
        .fields()
        .unwrap()
        .iter()
        .map(|f| f.classify())
        .collect()
}

fn assert_size_align<T: SubsetLayout>() {
    let layout = get_type_layout::<T>();
    assert_eq!(layout.size(), mem::size_of::<T>(), "{}", layout);
    assert_eq!(layout.alignment(), mem::align_of::<T>(), "{}", layout);
}

#[test]
fn named_struct() {
    let layout = <Mixed<'_>>::LAYOUT;

    assert_size_align::<Mixed<'_>>();
    assert_eq!(layout.name(), "Mixed");
    assert_eq!(layout.module_path(), module_path!());
    assert!(layout.module_path().ends_with("derive_layouts"));
    assert_eq!(
        field_names(layout),
        ["flag", "count", "total", "ratio", "reference", "pointer"]
    );
    assert_eq!(
        field_offsets(layout),
        [
            offset_of!(Mixed<'static>, flag),
            offset_of!(Mixed<'static>, count),
            offset_of!(Mixed<'static>, total),
            offset_of!(Mixed<'static>, ratio),
            offset_of!(Mixed<'static>, reference),
            offset_of!(Mixed<'static>, pointer),
        ]
    );
    assert_eq!(
        field_kinds(layout),
        [
            FieldClass::new(None, FieldKind::Bool),
            FieldClass::new(None, FieldKind::U32),
            FieldClass::new(None, FieldKind::I64),
            FieldClass::new(None, FieldKind::F32),
            FieldClass::new(Some(Indirection::SharedRef), FieldKind::U8),
            FieldClass::new(Some(Indirection::MutPtr), FieldKind::Usize),
        ]
    );
}

#[test]
fn tuple_struct() {
    let layout = Tuple::LAYOUT;

    assert_size_align::<Tuple>();
    assert_eq!(field_names(layout), ["0", "1", "2"]);
    assert_eq!(
        field_offsets(layout),
        [
            offset_of!(Tuple, 0),
            offset_of!(Tuple, 1),
            offset_of!(Tuple, 2)
        ]
    );
    assert_eq!(layout.to_string(), format!("{}::Tuple", module_path!()));
}

#[test]
fn unit_struct() {
    assert_size_align::<Unit>();
    assert_eq!(Unit::LAYOUT.shape(), TypeShape::Struct(&[]));

    assert!(matches!(
        check_subset::<&Unit, Unit>(),
        Err(SubsetError::RedundantConversion { .. })
    ));
    assert!(matches!(
        check_subset::<&Unit, Tuple>(),
        Err(SubsetError::TargetTooLarge { .. })
    ));
}

#[test]
fn aligned_struct() {
    assert_size_align::<Aligned>();
    assert_eq!(Aligned::LAYOUT.alignment(), 32);
    assert_eq!(Aligned::LAYOUT.size(), 32);
    assert_eq!(field_offsets(Aligned::LAYOUT), [0, 2]);
}

#[test]
fn generic_struct() {
    type Concrete<'a> = Generic<'a, u64, 3>;

    let layout = <Concrete<'_>>::LAYOUT;

    assert_size_align::<Concrete<'_>>();
    assert_size_align::<Generic<'_, u8, 0>>();
    assert_eq!(
        field_offsets(layout),
        [
            offset_of!(Concrete<'static>, value),
            offset_of!(Concrete<'static>, array),
            offset_of!(Concrete<'static>, reference),
        ]
    );
    assert_eq!(
        field_kinds(layout),
        [
            FieldClass::new(None, FieldKind::U64),
            FieldClass::new(None, FieldKind::Sequence),
            FieldClass::new(Some(Indirection::SharedRef), FieldKind::U64),
        ]
    );

    let other = <Generic<'_, i8, 3>>::LAYOUT;
    assert_eq!(field_kinds(other)[0], FieldClass::new(None, FieldKind::I8));
    assert_ne!(field_offsets(other), field_offsets(layout));
}

#[test]
fn where_clauses_and_bounds() {
    assert_size_align::<WithWhere<f64>>();
    assert_eq!(
        field_kinds(<WithWhere<f64>>::LAYOUT),
        [
            FieldClass::new(None, FieldKind::F64),
            FieldClass::new(None, FieldKind::F64),
        ]
    );

    assert_size_align::<WithBound<String>>();
    assert_eq!(
        field_kinds(<WithBound<String>>::LAYOUT),
        [
            FieldClass::new(None, FieldKind::U32),
            FieldClass::new(None, FieldKind::Unit),
        ]
    );
}

#[test]
fn opaque_fields() {
    let layout = WithOpaque::LAYOUT;

    assert_size_align::<WithOpaque>();
    assert_eq!(
        field_kinds(layout)[1],
        FieldClass::new(None, FieldKind::Opaque)
    );
    assert_eq!(layout.fields().unwrap()[1].layout().name(), "<opaque>");
    assert_eq!(
        layout.fields().unwrap()[1].layout().size(),
        mem::size_of::<Option<File>>()
    );

    #[allow(dead_code)]
    #[repr(C)]
    #[derive(SubsetLayout)]
    struct Id {
        id: u32,
    }

    #[allow(dead_code)]
    #[repr(C)]
    #[derive(SubsetLayout)]
    struct IdAndFile {
        id: u32,
        #[subset(unsafe_opaque_field)]
        handle: Option<File>,
    }

    assert_eq!(check_subset::<&WithOpaque, Id>(), Ok(()));
    assert!(matches!(
        check_subset::<&WithOpaque, IdAndFile>(),
        Err(SubsetError::UnsupportedFieldKind { index: 1, .. })
    ));
}
