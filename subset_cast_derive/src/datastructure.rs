use syn::{self, Attribute, Data, DeriveInput, Field as SynField, Generics, Ident, Type};

use quote::ToTokens;

use proc_macro2::{Span, TokenStream};

use std::fmt::{self, Display};

//////////////////////////////////////////////////////////////////////////////

/// A struct definition.
#[derive(Clone, Debug)]
pub(crate) struct DataStructure<'a> {
    pub(crate) name: &'a Ident,
    pub(crate) generics: &'a Generics,
    pub(crate) attrs: &'a [Attribute],
    pub(crate) fields: Vec<Field<'a>>,
}

impl<'a> DataStructure<'a> {
    /// Constructs a `DataStructure`,returning an error if the type is not a struct.
    pub(crate) fn new(ast: &'a DeriveInput) -> Result<Self, syn::Error> {
        let name = &ast.ident;

        let fields = match &ast.data {
            Data::Struct(struct_) => &struct_.fields,
            Data::Enum(enum_) => return_spanned_err!(
                enum_.enum_token,
                "SubsetLayout can only be derived for structs,found the `{}` enum",
                name,
            ),
            Data::Union(union_) => return_spanned_err!(
                union_.union_token,
                "SubsetLayout can only be derived for structs,found the `{}` union",
                name,
            ),
        };

        Ok(Self {
            name,
            generics: &ast.generics,
            attrs: &ast.attrs,
            fields: Field::from_iter(name.span(), fields),
        })
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Represent a struct field
#[derive(Clone, Debug)]
pub(crate) struct Field<'a> {
    /// The position of the field in the struct.
    pub(crate) index: usize,
    pub(crate) attrs: &'a [Attribute],
    /// identifier for the field,which is either an index(in a tuple struct) or a name.
    pub(crate) ident: FieldIdent<'a>,
    pub(crate) ty: &'a Type,
}

impl<'a> Field<'a> {
    fn new(index: usize, field: &'a SynField, span: Span) -> Self {
        let ident = match field.ident.as_ref() {
            Some(ident) => FieldIdent::Named(ident),
            None => FieldIdent::new_index(index, span),
        };

        Self {
            index,
            attrs: &field.attrs,
            ident,
            ty: &field.ty,
        }
    }

    fn from_iter<I>(span: Span, fields: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a SynField>,
    {
        fields
            .into_iter()
            .enumerate()
            .map(|(pos, f)| Field::new(pos, f, span))
            .collect()
    }
}

//////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub(crate) enum FieldIdent<'a> {
    Index(usize, Span),
    Named(&'a Ident),
}

impl<'a> Display for FieldIdent<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIdent::Index(x, ..) => Display::fmt(x, f),
            FieldIdent::Named(x) => Display::fmt(x, f),
        }
    }
}

impl<'a> ToTokens for FieldIdent<'a> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match *self {
            FieldIdent::Index(index, span) => syn::Index {
                index: index as u32,
                span,
            }
            .to_tokens(tokens),
            FieldIdent::Named(name) => name.to_tokens(tokens),
        }
    }
}

impl<'a> FieldIdent<'a> {
    fn new_index(index: usize, span: Span) -> Self {
        FieldIdent::Index(index, span)
    }
}
