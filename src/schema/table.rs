//! Table definitions and the table builder.

use std::collections::HashMap;

use serde::Serialize;

use super::column::ColumnDefinition;
use super::constraint::{ForeignKey, FullTextIndex, Index, PrimaryKey, SpatialIndex, UniqueIndex};
use super::fields::visible_fields;
use super::naming::snake_case;
use super::resolve::resolve;
use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::reflect::Reflect;

/// Schema customization hooks for a struct.
///
/// Every method is optional; the defaults mean "not customized". Derive
/// `Table` to fill in the name and comment from `#[ddl(...)]` attributes, or
/// implement the trait by hand for keys and indexes.
///
/// ```no_run
/// use ddlforge::{Index, PrimaryKey, Reflect, Table};
///
/// #[derive(Reflect)]
/// struct User {
///     #[ddl = "id,auto"]
///     id: u64,
///     name: String,
/// }
///
/// impl Table for User {
///     fn table_name(&self) -> Option<String> {
///         Some("users".to_string())
///     }
///
///     fn primary_key(&self) -> Option<PrimaryKey> {
///         Some(PrimaryKey::new(["id"]))
///     }
///
///     fn indexes(&self) -> Vec<Index> {
///         vec![Index::new("idx_name", ["name"])]
///     }
/// }
/// ```
pub trait Table: Reflect {
    /// Table name, used verbatim. Defaults to the snake_case type name.
    fn table_name(&self) -> Option<String> {
        None
    }

    /// Table comment; an empty string means no comment.
    fn table_comment(&self) -> Option<String> {
        None
    }

    fn primary_key(&self) -> Option<PrimaryKey> {
        None
    }

    fn indexes(&self) -> Vec<Index> {
        Vec::new()
    }

    fn unique_indexes(&self) -> Vec<UniqueIndex> {
        Vec::new()
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        Vec::new()
    }

    fn full_text_indexes(&self) -> Vec<FullTextIndex> {
        Vec::new()
    }

    fn spatial_indexes(&self) -> Vec<SpatialIndex> {
        Vec::new()
    }
}

/// Table definition metadata
///
/// The resolved table: columns in field declaration order plus the keys and
/// indexes returned by the struct's [`Table`] hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    /// Table name in SQL.
    pub name: String,
    /// Type name in Rust, for diagnostics.
    pub source_name: String,
    pub columns: Vec<ColumnDefinition>,
    pub comment: Option<String>,
    pub primary_key: Option<PrimaryKey>,
    pub indexes: Vec<Index>,
    pub unique_indexes: Vec<UniqueIndex>,
    pub foreign_keys: Vec<ForeignKey>,
    pub full_text_indexes: Vec<FullTextIndex>,
    pub spatial_indexes: Vec<SpatialIndex>,
}

impl TableDefinition {
    /// Build the table definition of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotAStruct`] if `T` does not resolve to a struct,
    /// [`SchemaError::DuplicateColumn`] if two visible fields resolve to the
    /// same column name, or the first error raised while building a column.
    /// No partial definition is ever returned.
    pub fn build<T: Table>(value: &T, config: &SchemaConfig) -> Result<Self> {
        let shape = resolve(T::SHAPE).shape;
        if shape.fields().is_none() {
            return Err(SchemaError::NotAStruct {
                type_name: shape.type_name().to_string(),
                kind: shape.kind(),
            });
        }

        let source_name = short_type_name(shape.type_name()).to_string();
        let name = value
            .table_name()
            .unwrap_or_else(|| snake_case(&source_name));
        let comment = value.table_comment().filter(|c| !c.is_empty());
        log::debug!("building table {} from {}", name, shape.type_name());

        let mut columns: Vec<ColumnDefinition> = Vec::new();
        let mut owners: HashMap<String, String> = HashMap::new();
        for vf in visible_fields(shape) {
            if vf.promoted {
                continue;
            }
            let Some(column) = ColumnDefinition::from_field(vf.field, config)? else {
                continue;
            };
            if let Some(first) = owners.insert(column.name.clone(), column.source_name.clone()) {
                return Err(SchemaError::DuplicateColumn {
                    table: name,
                    column: column.name,
                    fields: vec![first, column.source_name],
                });
            }
            columns.push(column);
        }

        Ok(Self {
            name,
            source_name,
            columns,
            comment,
            primary_key: value.primary_key(),
            indexes: value.indexes(),
            unique_indexes: value.unique_indexes(),
            foreign_keys: value.foreign_keys(),
            full_text_indexes: value.full_text_indexes(),
            spatial_indexes: value.spatial_indexes(),
        })
    }

    /// Look up a column by its SQL name.
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Last path segment of a type name, generics stripped
/// (`app::model::Page<u8>` → `Page`).
fn short_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}
