//! Accumulates table definitions for downstream renderers.

use crate::config::SchemaConfig;
use crate::error::Result;
use crate::schema::{Table, TableDefinition};

/// Collects the resolved tables of several structs, in insertion order.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    config: SchemaConfig,
    tables: Vec<TableDefinition>,
}

impl SchemaRegistry {
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
        }
    }

    /// Registry using the process-wide configuration.
    pub fn with_global_config() -> Self {
        Self::new(SchemaConfig::global().clone())
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Build the table of `value` and register it.
    ///
    /// On error nothing is registered.
    pub fn add<T: Table>(&mut self, value: &T) -> Result<&TableDefinition> {
        let table = TableDefinition::build(value, &self.config)?;
        log::debug!(
            "registered table {} ({} columns)",
            table.name,
            table.columns.len()
        );
        self.tables.push(table);
        Ok(&self.tables[self.tables.len() - 1])
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn into_tables(self) -> Vec<TableDefinition> {
        self.tables
    }

    /// Serialize the registered tables as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.tables)
    }
}
