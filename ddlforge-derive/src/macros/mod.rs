//! Macro implementations

pub mod reflect;
pub mod table;

pub use reflect::derive_reflect;
pub use table::derive_table;
