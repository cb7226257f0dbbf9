//! Procedural macros for ddlforge
//!
//! This crate provides the `Reflect` and `Table` derives. Use them through
//! the re-exports in `ddlforge`.

mod attributes;
mod macros;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for `Reflect` - generates the static shape of a type
///
/// For a struct with named fields this records, per field:
/// - its name as written
/// - its type's shape
/// - its tags (`#[ddl = "..."]`, `#[tag(key = "...")]`)
/// - whether it is embedded (`#[ddl(embed)]`)
///
/// `#[ddl(json)]` on the type marks it as stored in a JSON column. Enums are
/// reflected as opaque types; tuple structs are rejected.
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Post {
///     #[ddl = "id,auto"]
///     id: u64,
///     #[ddl = ",size=120"]
///     title: String,
///     #[ddl(embed)]
///     timestamps: Timestamps,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(ddl, tag))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    macros::derive_reflect(input)
}

/// Derive macro for `Table` - implements the table naming hooks
///
/// Reads `#[ddl(table = "...")]` and `#[ddl(comment = "...")]`; every other
/// hook keeps its default. The type must also implement `Reflect`.
#[proc_macro_derive(Table, attributes(ddl))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    macros::derive_table(input)
}
