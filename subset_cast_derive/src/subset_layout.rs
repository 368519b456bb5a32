use crate::datastructure::DataStructure;

use core_extensions::SelfOps;

use proc_macro2::{Span, TokenStream as TokenStream2};

use quote::{quote, ToTokens};

use subset_cast_shared::hidden_item_name;

use syn::{DeriveInput, Ident};

mod attribute_parsing;

mod repr_attrs;


use self::attribute_parsing::{parse_attrs_for_subset_layout, SubsetLayoutOptions};

pub(crate) fn derive(data: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let ds = &DataStructure::new(&data)?;
    let config = &parse_attrs_for_subset_layout(ds)?;
    let name = ds.name;
    let (impl_generics, ty_generics, _) = ds.generics.split_for_impl();

    let re = quote!(::subset_cast::__subset_re);

    let name_str = name.to_string();

    let fields_ident = Ident::new(&hidden_item_name("fields"), Span::call_site());

    let where_preds = where_predicates(ds, config, &re);

    let field_layouts = ds.fields.iter().map(|field| {
        let ident = &field.ident;
        let field_name = field.ident.to_string();
        let ty = field.ty;

        let layout = if config.opaque_fields[field.index] {
            quote!( <#re::UnsafeOpaqueField<#ty> as #re::SubsetLayout>::LAYOUT )
        } else {
            quote!( <#ty as #re::SubsetLayout>::LAYOUT )
        };

        quote!(
            #re::FieldLayout::new(
                #field_name,
                #re::offset_of!(Self, #ident),
                #layout,
            ),
        )
    });

    quote!(
        impl #impl_generics #name #ty_generics
        where
            #(#where_preds,)*
        {
            #[doc(hidden)]
            const #fields_ident: &'static [#re::FieldLayout] = &[
                #(#field_layouts)*
            ];
        }

        unsafe impl #impl_generics #re::SubsetLayout for #name #ty_generics
        where
            #(#where_preds,)*
        {
            const LAYOUT: &'static #re::TypeLayout = &#re::TypeLayout::from_struct::<Self>(
                #name_str,
                ::core::module_path!(),
                Self::#fields_ident,
            );
        }
    )
    .observe(|tokens| {
        if config.debug_print {
            panic!("\n\n\n{}\n\n\n", tokens);
        }
    })
    .piped(Ok)
}

/// The bounds of both impls,
/// every type parameter is required to implement `SubsetLayout`.
fn where_predicates(
    ds: &DataStructure<'_>,
    config: &SubsetLayoutOptions,
    re: &TokenStream2,
) -> Vec<TokenStream2> {
    let type_param_bounds = ds.generics.type_params().map(|param| {
        let ident = &param.ident;
        quote!(#ident: #re::SubsetLayout)
    });

    let declared = ds
        .generics
        .where_clause
        .iter()
        .flat_map(|wc| wc.predicates.iter())
        .map(ToTokens::to_token_stream);

    let extra = config.extra_bounds.iter().map(ToTokens::to_token_stream);

    type_param_bounds.chain(declared).chain(extra).collect()
}
