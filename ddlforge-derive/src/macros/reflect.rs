//! Derive macro for `Reflect`
//!
//! Emits the static shape of a struct: one `Field` entry per named field,
//! carrying its tags and embed flag. Enums and unions are opaque.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields};

use crate::attributes;
use crate::utils;

pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_attrs = attributes::parse_struct_attributes(&input.attrs)?;
    let ident = &input.ident;

    let def = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => {
            let fields = named
                .named
                .iter()
                .map(field_entry)
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { ::ddlforge::Def::Struct(&[#(#fields),*]) }
        }
        Data::Struct(DataStruct {
            fields: Fields::Unit,
            ..
        }) => quote! { ::ddlforge::Def::Struct(&[]) },
        Data::Struct(DataStruct {
            fields: Fields::Unnamed(unnamed),
            ..
        }) => {
            return Err(syn::Error::new_spanned(
                unnamed,
                "Reflect can only be derived for structs with named fields",
            ));
        }
        Data::Enum(_) | Data::Union(_) => quote! { ::ddlforge::Def::Opaque },
    };

    let json = struct_attrs.json;
    let generics = utils::add_reflect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ddlforge::Reflect for #ident #ty_generics #where_clause {
            const SHAPE: &'static ::ddlforge::Shape = &::ddlforge::Shape {
                id: ::core::any::TypeId::of::<Self>,
                type_name: ::core::any::type_name::<Self>,
                def: #def,
                json: #json,
            };
        }
    })
}

fn field_entry(field: &syn::Field) -> syn::Result<TokenStream2> {
    let attrs = attributes::parse_field_attributes(field)?;
    let name = field
        .ident
        .as_ref()
        .map(utils::field_name)
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let ty = &field.ty;
    let tags = attrs.tags.iter().map(|(key, value)| quote! { (#key, #value) });
    let embedded = attrs.embedded;

    Ok(quote! {
        ::ddlforge::Field {
            name: #name,
            shape: <#ty as ::ddlforge::Reflect>::shape,
            tags: &[#(#tags),*],
            embedded: #embedded,
        }
    })
}
