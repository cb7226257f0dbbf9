//! # ddlforge
//!
//! Extracts a normalized relational schema model from tagged Rust structs.
//!
//! Structs describe themselves through [`Reflect`] (usually derived); each
//! field carries a tag such as `#[ddl = "name,null,size=64"]`. The builders
//! resolve every field type, apply the tag and produce a [`TableDefinition`]
//! that DDL renderers consume.
//!
//! ```no_run
//! use ddlforge::{Reflect, SchemaConfig, Table, TableDefinition};
//!
//! #[derive(Reflect, Table)]
//! #[ddl(table = "users", comment = "registered users")]
//! struct User {
//!     #[ddl = "id,auto"]
//!     id: u64,
//!     #[ddl = ",size=64"]
//!     name: String,
//!     nickname: Option<String>,
//!     #[ddl = "-"]
//!     session: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 0,
//!     name: String::new(),
//!     nickname: None,
//!     session: vec![],
//! };
//! let table = TableDefinition::build(&user, &SchemaConfig::default())?;
//! assert_eq!(table.name, "users");
//! # Ok::<(), ddlforge::SchemaError>(())
//! ```

extern crate self as ddlforge;

pub mod config;
pub mod error;
pub mod reflect;
pub mod registry;
pub mod schema;

pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use reflect::{
    Def, Field, Json, Null, NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64,
    NullString, NullTime, PointerDef, Reflect, ScalarKind, Shape, ShapeFn,
};
pub use registry::SchemaRegistry;
pub use schema::{
    ColumnDefinition, ForeignKey, ForeignKeyOption, FullTextIndex, Index, PrimaryKey, SpatialIndex,
    Table, TableDefinition, UniqueIndex,
};

pub use ddlforge_derive::{Reflect, Table};
