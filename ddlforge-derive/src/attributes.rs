//! Attribute parsing utilities

use syn::{Attribute, Expr, ExprLit, Field, Lit, LitStr};

/// Helper attribute carrying schema options.
pub const DDL: &str = "ddl";
/// Helper attribute carrying tags under arbitrary keys.
pub const TAG: &str = "tag";

/// Struct-level options from `#[ddl(...)]`.
#[derive(Default)]
pub struct StructAttributes {
    /// `#[ddl(table = "...")]`
    pub table: Option<LitStr>,
    /// `#[ddl(comment = "...")]`
    pub comment: Option<LitStr>,
    /// `#[ddl(json)]`: the type is stored as a JSON document.
    pub json: bool,
}

/// Field-level annotations.
#[derive(Default)]
pub struct FieldAttributes {
    /// Raw tags in declaration order, keyed by tag key.
    pub tags: Vec<(String, LitStr)>,
    /// `#[ddl(embed)]`
    pub embedded: bool,
}

/// Parse the `#[ddl(...)]` attributes of a struct or enum.
pub fn parse_struct_attributes(attrs: &[Attribute]) -> syn::Result<StructAttributes> {
    let mut out = StructAttributes::default();
    for attr in attrs {
        if !attr.path().is_ident(DDL) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                set_once(&mut out.table, meta.value()?.parse()?, &meta.path, "table")
            } else if meta.path.is_ident("comment") {
                set_once(&mut out.comment, meta.value()?.parse()?, &meta.path, "comment")
            } else if meta.path.is_ident("json") {
                out.json = true;
                Ok(())
            } else {
                Err(meta.error("unsupported ddl attribute, expected `table`, `comment` or `json`"))
            }
        })?;
    }
    Ok(out)
}

/// Parse the annotations of one named field.
///
/// `#[ddl = "..."]` stores a tag under the `ddl` key, `#[tag(key = "...")]`
/// stores tags under arbitrary keys and `#[ddl(embed)]` marks the field as
/// embedded.
pub fn parse_field_attributes(field: &Field) -> syn::Result<FieldAttributes> {
    let mut out = FieldAttributes::default();
    for attr in &field.attrs {
        if attr.path().is_ident(DDL) {
            match &attr.meta {
                syn::Meta::NameValue(nv) => {
                    let value = string_literal(&nv.value)?;
                    push_tag(&mut out.tags, DDL.to_string(), value, attr)?;
                }
                syn::Meta::List(_) => {
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("embed") {
                            out.embedded = true;
                            Ok(())
                        } else {
                            Err(meta.error("unsupported ddl field attribute, expected `embed`"))
                        }
                    })?;
                }
                syn::Meta::Path(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `#[ddl = \"...\"]` or `#[ddl(embed)]`",
                    ));
                }
            }
        } else if attr.path().is_ident(TAG) {
            let mut tags = Vec::new();
            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(ToString::to_string)
                    .ok_or_else(|| meta.error("tag key must be an identifier"))?;
                let value: LitStr = meta.value()?.parse()?;
                tags.push((key, value));
                Ok(())
            })?;
            for (key, value) in tags {
                push_tag(&mut out.tags, key, value, attr)?;
            }
        }
    }
    Ok(out)
}

fn string_literal(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

fn push_tag(
    tags: &mut Vec<(String, LitStr)>,
    key: String,
    value: LitStr,
    attr: &Attribute,
) -> syn::Result<()> {
    if tags.iter().any(|(k, _)| *k == key) {
        return Err(syn::Error::new_spanned(
            attr,
            format!("duplicate `{key}` tag on field"),
        ));
    }
    tags.push((key, value));
    Ok(())
}

fn set_once(
    slot: &mut Option<LitStr>,
    value: LitStr,
    path: &syn::Path,
    name: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(
            path,
            format!("duplicate `{name}` attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}
