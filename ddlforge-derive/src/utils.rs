//! Code generation helpers shared by the derives

use syn::{parse_quote, Generics};

/// Add a `::ddlforge::Reflect` bound to every type parameter.
pub fn add_reflect_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::ddlforge::Reflect));
    }
    generics
}

/// Field name as written, without a raw identifier prefix.
pub fn field_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
