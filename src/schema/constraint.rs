//! Key and index descriptors returned by [`Table`](super::Table) hooks.
//!
//! Descriptors are stored on the table definition as given; column
//! references are not checked against the table's columns here.

use serde::Serialize;

fn to_strings<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    columns.into_iter().map(Into::into).collect()
}

/// Primary key over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: to_strings(columns),
        }
    }
}

/// Secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub comment: Option<String>,
    pub invisible: bool,
}

impl Index {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: to_strings(columns),
            comment: None,
            invisible: false,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn invisible(mut self) -> Self {
        self.invisible = true;
        self
    }
}

/// Unique index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueIndex {
    pub name: String,
    pub columns: Vec<String>,
    pub comment: Option<String>,
    pub invisible: bool,
}

impl UniqueIndex {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: to_strings(columns),
            comment: None,
            invisible: false,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn invisible(mut self) -> Self {
        self.invisible = true;
        self
    }
}

/// Referential action of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForeignKeyOption {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

/// Foreign key from `columns` to `references` of `table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    pub table: String,
    pub references: Vec<String>,
    pub on_update: Option<ForeignKeyOption>,
    pub on_delete: Option<ForeignKeyOption>,
}

impl ForeignKey {
    pub fn new<I, S, R, T>(
        name: impl Into<String>,
        columns: I,
        table: impl Into<String>,
        references: R,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            columns: to_strings(columns),
            table: table.into(),
            references: to_strings(references),
            on_update: None,
            on_delete: None,
        }
    }

    pub fn on_update(mut self, option: ForeignKeyOption) -> Self {
        self.on_update = Some(option);
        self
    }

    pub fn on_delete(mut self, option: ForeignKeyOption) -> Self {
        self.on_delete = Some(option);
        self
    }
}

/// Full-text index over a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullTextIndex {
    pub name: String,
    pub column: String,
    pub comment: Option<String>,
    pub invisible: bool,
    /// Full-text parser plugin (e.g. `ngram`).
    pub parser: Option<String>,
}

impl FullTextIndex {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            comment: None,
            invisible: false,
            parser: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn invisible(mut self) -> Self {
        self.invisible = true;
        self
    }

    pub fn with_parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = Some(parser.into());
        self
    }
}

/// Spatial index over a single geometry column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpatialIndex {
    pub name: String,
    pub column: String,
    pub comment: Option<String>,
    pub invisible: bool,
}

impl SpatialIndex {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            comment: None,
            invisible: false,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn invisible(mut self) -> Self {
        self.invisible = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_builder() {
        let idx = Index::new("idx_created_at", ["created_at", "id"])
            .comment("listing order")
            .invisible();
        assert_eq!(idx.name, "idx_created_at");
        assert_eq!(idx.columns, vec!["created_at".to_string(), "id".to_string()]);
        assert_eq!(idx.comment.as_deref(), Some("listing order"));
        assert!(idx.invisible);
    }

    #[test]
    fn test_foreign_key_builder() {
        let fk = ForeignKey::new("fk_user", ["user_id"], "users", ["id"])
            .on_delete(ForeignKeyOption::Cascade);
        assert_eq!(fk.table, "users");
        assert_eq!(fk.references, vec!["id".to_string()]);
        assert_eq!(fk.on_update, None);
        assert_eq!(fk.on_delete, Some(ForeignKeyOption::Cascade));
    }

    #[test]
    fn test_full_text_parser() {
        let idx = FullTextIndex::new("ft_body", "body").with_parser("ngram");
        assert_eq!(idx.parser.as_deref(), Some("ngram"));
        assert!(!idx.invisible);
    }

    #[test]
    fn test_serialize_foreign_key_option() {
        let json = serde_json::to_string(&ForeignKeyOption::SetNull).unwrap();
        assert_eq!(json, "\"SET_NULL\"");
    }
}
