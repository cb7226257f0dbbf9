//! Schema extraction: from reflected struct shapes to resolved table definitions.
//!
//! # Structure
//!
//! - `tag`: field tag grammar
//! - `resolve`: pointer / nullable wrapper unwrapping
//! - `type_mapping`: default SQL types of base types
//! - `column`: `ColumnDefinition` and the column builder
//! - `fields`: visible field enumeration (embedded struct promotion)
//! - `table`: `TableDefinition`, the `Table` hooks and the table builder
//! - `constraint`: key and index descriptors

pub mod column;
pub mod constraint;
pub mod fields;
pub mod naming;
pub mod resolve;
pub mod table;
pub mod tag;
pub mod type_mapping;

pub use column::ColumnDefinition;
pub use constraint::{
    ForeignKey, ForeignKeyOption, FullTextIndex, Index, PrimaryKey, SpatialIndex, UniqueIndex,
};
pub use naming::snake_case;
pub use resolve::{resolve, ResolvedType};
pub use table::{Table, TableDefinition};
pub use tag::{Tag, TagName, TagOption};
