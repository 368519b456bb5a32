use syn::{
    punctuated::Punctuated, token::Comma, Attribute, Lit, Meta, MetaList, MetaNameValue,
    NestedMeta, WherePredicate,
};

use quote::ToTokens;

use crate::{
    datastructure::{DataStructure, Field},
    utils::{LinearResult, SynPathExt, SynResultExt},
};

use super::repr_attrs::{is_int_repr, UncheckedReprAttr, UncheckedReprKind, REPR_ERROR_MSG};

/// The configuration of the `SubsetLayout` derive,parsed from the attributes of a struct.
pub(crate) struct SubsetLayoutOptions {
    pub(crate) debug_print: bool,

    /// Whether each field is described as an opaque field,indexed by `Field::index`.
    pub(crate) opaque_fields: Vec<bool>,

    pub(crate) extra_bounds: Vec<WherePredicate>,
}

#[derive(Default)]
struct SubsetLayoutAttrs {
    debug_print: bool,
    repr: UncheckedReprAttr,
    opaque_fields: Vec<bool>,
    extra_bounds: Vec<WherePredicate>,
    errors: LinearResult<()>,
}

#[derive(Copy, Clone)]
enum ParseContext<'a> {
    TypeAttr,
    Field { field: &'a Field<'a> },
}

/// Parses the attributes for the `SubsetLayout` derive macro.
pub(crate) fn parse_attrs_for_subset_layout<'a>(
    ds: &'a DataStructure<'a>,
) -> Result<SubsetLayoutOptions, syn::Error> {
    let mut this = SubsetLayoutAttrs::default();

    this.opaque_fields = vec![false; ds.fields.len()];

    parse_inner(&mut this, ds.attrs, ParseContext::TypeAttr);

    for field in &ds.fields {
        parse_inner(&mut this, field.attrs, ParseContext::Field { field });
    }

    this.errors.combine_err(this.repr.check());

    this.errors.take()?;

    Ok(SubsetLayoutOptions {
        debug_print: this.debug_print,
        opaque_fields: std::mem::take(&mut this.opaque_fields),
        extra_bounds: std::mem::take(&mut this.extra_bounds),
    })
}

/// Parses an individual attribute
fn parse_inner<'a>(this: &mut SubsetLayoutAttrs, attrs: &'a [Attribute], pctx: ParseContext<'a>) {
    for attr in attrs {
        match attr.parse_meta() {
            Ok(Meta::List(list)) => {
                parse_attr_list(this, pctx, list).combine_into_err(&mut this.errors);
            }
            Err(e) => {
                this.errors.push_err(e);
            }
            _ => {}
        }
    }
}

/// Parses an individual attribute list (A `#[attribute( .. )] attribute`).
fn parse_attr_list<'a>(
    this: &mut SubsetLayoutAttrs,
    pctx: ParseContext<'a>,
    list: MetaList,
) -> Result<(), syn::Error> {
    if list.path.equals_str("repr") {
        if let ParseContext::TypeAttr = pctx {
            parse_repr_attr(this, list.nested)?;
        }
    } else if list.path.equals_str("subset") {
        with_nested_meta("subset", list.nested, |attr| {
            parse_subset_attr(this, pctx, attr).combine_into_err(&mut this.errors);
            Ok(())
        })?;
    }
    Ok(())
}

/// Parses the contents of a `#[repr( .. )]` attribute.
fn parse_repr_attr(
    this: &mut SubsetLayoutAttrs,
    nested: Punctuated<NestedMeta, Comma>,
) -> Result<(), syn::Error> {
    fn make_err(tokens: &dyn ToTokens) -> syn::Error {
        spanned_err!(
            tokens,
            "repr attribute not currently recognized by this macro.{}",
            REPR_ERROR_MSG
        )
    }

    with_nested_meta("repr", nested, |attr| {
        match attr {
            Meta::Path(ref path) => {
                let ident = path.get_ident().ok_or_else(|| make_err(path))?;
                let span = ident.span();

                if ident == "C" {
                    this.repr.set_repr_kind(UncheckedReprKind::C, span)
                } else if ident == "transparent" {
                    this.repr.set_repr_kind(UncheckedReprKind::Transparent, span)
                } else if ident == "Rust" {
                    this.repr.set_repr_kind(UncheckedReprKind::Rust, span)
                } else if ident == "packed" {
                    this.repr.set_packed(None)
                } else if is_int_repr(ident) {
                    this.repr.set_repr_kind(UncheckedReprKind::Int, span)
                } else {
                    Err(make_err(ident))
                }
            }
            Meta::List(ref list) if list.path.equals_str("align") => Ok(()),
            Meta::List(ref list) if list.path.equals_str("packed") => {
                let packing = match list.nested.first() {
                    Some(NestedMeta::Lit(Lit::Int(lit))) => lit.base10_parse::<u32>()?,
                    _ => return Err(make_err(list)),
                };
                this.repr.set_packed(Some(packing))
            }
            x => Err(make_err(&x)),
        }
        .combine_into_err(&mut this.errors);
        Ok(())
    })
}

/// Parses the contents of a `#[subset( .. )]` attribute.
fn parse_subset_attr<'a>(
    this: &mut SubsetLayoutAttrs,
    pctx: ParseContext<'a>,
    attr: Meta,
) -> Result<(), syn::Error> {
    fn make_err(tokens: &dyn ToTokens) -> syn::Error {
        spanned_err!(tokens, "unrecognized attribute")
    }
    match (pctx, attr) {
        (ParseContext::Field { field }, Meta::Path(path)) => {
            if path.equals_str("unsafe_opaque_field") {
                this.opaque_fields[field.index] = true;
            } else {
                return Err(make_err(&path));
            }
        }
        (ParseContext::TypeAttr, Meta::Path(ref path)) if path.equals_str("debug_print") => {
            this.debug_print = true;
        }
        (
            ParseContext::TypeAttr,
            Meta::NameValue(MetaNameValue {
                lit: Lit::Str(ref unparsed_lit),
                ref path,
                ..
            }),
        ) => {
            if path.equals_str("bound") {
                let bound = unparsed_lit.parse::<WherePredicate>()?;
                this.extra_bounds.push(bound);
            } else {
                return Err(make_err(path));
            }
        }
        (_, x) => return Err(make_err(&x)),
    }
    Ok(())
}

/// Iterates over an iterator of syn::NestedMeta,
/// unwrapping it into a syn::Meta and passing it into the `f` closure.
fn with_nested_meta<I, F>(attr_name: &str, iter: I, mut f: F) -> Result<(), syn::Error>
where
    F: FnMut(Meta) -> Result<(), syn::Error>,
    I: IntoIterator<Item = NestedMeta>,
{
    for repr in iter {
        match repr {
            NestedMeta::Meta(attr) => {
                f(attr)?;
            }
            NestedMeta::Lit(lit) => {
                return_spanned_err!(
                    lit,
                    "the #[{}(...)] attribute does not allow literals in the attribute list",
                    attr_name,
                );
            }
        }
    }
    Ok(())
}
