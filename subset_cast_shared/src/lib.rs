#[doc(hidden)]
#[macro_use]
pub mod test_utils;

/// Gets the name of a hidden item that `#[derive(SubsetLayout)]` generates,
/// eg: `hidden_item_name("fields")` returns `"__SUBSET_FIELDS"`.
#[doc(hidden)]
pub fn hidden_item_name(kind: &str) -> String {
    let mut name = String::with_capacity(kind.len() + 9);
    name.push_str("__SUBSET_");
    for c in kind.chars() {
        match c {
            ' ' | '-' | '.' => name.push('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => name.push(c.to_ascii_uppercase()),
            c => panic!("cannot use the '{}' character in a hidden item name.", c),
        }
    }
    name
}

#[test]
fn test_hidden_item_name() {
    assert_eq!(hidden_item_name("fields"), "__SUBSET_FIELDS");
    assert_eq!(hidden_item_name("field layouts"), "__SUBSET_FIELD_LAYOUTS");
    assert!(test_utils::must_panic(file_span!(), || hidden_item_name("a<b>")).is_ok());
}
