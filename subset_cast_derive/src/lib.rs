/*!
An implementation detail of subset_cast.
*/

extern crate proc_macro;

#[macro_use]
mod utils;

mod datastructure;

mod subset_layout;

#[cfg(test)]
mod test_framework;

use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;

/**

Implements the `SubsetLayout` trait for a `#[repr(C)]` struct.

This macro is documented in `subset_cast::SubsetLayout`.

# Attributes

- `#[subset(debug_print)]`:
    Prints the generated code,stopping compilation.

- `#[subset(unsafe_opaque_field)]` (on a field):
    Describes the field as opaque,
    without requiring the type of the field to implement `SubsetLayout`.
    Opaque fields can't be reinterpreted.

*/
#[proc_macro_derive(SubsetLayout, attributes(subset))]
pub fn derive_subset_layout(input: TokenStream1) -> TokenStream1 {
    parse_or_compile_err(input, subset_layout::derive).into()
}

fn parse_or_compile_err<P, F>(tokens: TokenStream1, f: F) -> TokenStream2
where
    P: syn::parse::Parse,
    F: FnOnce(P) -> Result<TokenStream2, syn::Error>,
{
    syn::parse::<P>(tokens)
        .and_then(f)
        .unwrap_or_else(|e| e.to_compile_error())
}

#[cfg(test)]
pub(crate) fn derive_subset_layout_from_str(s: &str) -> Result<TokenStream2, syn::Error> {
    syn::parse_str::<syn::DeriveInput>(s).and_then(subset_layout::derive)
}
