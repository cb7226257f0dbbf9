//! Derive macro for `Table`
//!
//! Fills in `table_name` and `table_comment` from `#[ddl(table, comment)]`.
//! Keys and indexes need a hand-written impl.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::attributes;
use crate::utils;

pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_attrs = attributes::parse_struct_attributes(&input.attrs)?;
    let ident = &input.ident;

    let table_name = struct_attrs.table.map(|name| {
        quote! {
            fn table_name(&self) -> ::core::option::Option<::std::string::String> {
                ::core::option::Option::Some(::std::string::String::from(#name))
            }
        }
    });
    let table_comment = struct_attrs.comment.map(|comment| {
        quote! {
            fn table_comment(&self) -> ::core::option::Option<::std::string::String> {
                ::core::option::Option::Some(::std::string::String::from(#comment))
            }
        }
    });

    let generics = utils::add_reflect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ddlforge::Table for #ident #ty_generics #where_clause {
            #table_name
            #table_comment
        }
    })
}
