//! Error types for schema extraction.
//!
//! All variants describe a static definition mistake (bad tag, unmapped type,
//! wrong input shape). None of them is retried; they propagate straight to the
//! caller and abort the table being built.

use thiserror::Error;

/// Errors raised while extracting a table definition.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A tag option carried a malformed boolean or integer literal.
    #[error("failed to parse {option} param in tag of field `{field}`: {reason}")]
    TagParse {
        field: String,
        option: String,
        value: String,
        reason: String,
    },

    /// The field's resolved type has no column mapping and no `type` option.
    #[error("unknown type for field `{field}`: {type_name}")]
    UnsupportedType { field: String, type_name: String },

    /// A table was requested for something that does not resolve to a struct.
    #[error("expected struct: {type_name} is a {kind}")]
    NotAStruct { type_name: String, kind: &'static str },

    /// Unknown tag option while `strict_options` is enabled.
    #[error("unknown option `{option}` in tag of field `{field}`")]
    UnknownOption { field: String, option: String },

    /// Two visible fields resolved to the same column name.
    #[error(
        "duplicate column `{column}` in table `{table}`: declared by fields {}",
        .fields.join(", ")
    )]
    DuplicateColumn {
        table: String,
        column: String,
        /// Source fields in declaration order: the first owner, then the clashing one.
        fields: Vec<String>,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_display_names_option() {
        let err = SchemaError::TagParse {
            field: "Age".to_string(),
            option: "size".to_string(),
            value: "ten".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse size param in tag of field `Age`: invalid digit found in string"
        );
    }

    #[test]
    fn test_not_a_struct_display() {
        let err = SchemaError::NotAStruct {
            type_name: "alloc::vec::Vec<u8>".to_string(),
            kind: "list",
        };
        assert_eq!(err.to_string(), "expected struct: alloc::vec::Vec<u8> is a list");
    }

    #[test]
    fn test_duplicate_column_display_lists_fields() {
        let err = SchemaError::DuplicateColumn {
            table: "users".to_string(),
            column: "user_id".to_string(),
            fields: vec!["UserID".to_string(), "owner".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "duplicate column `user_id` in table `users`: declared by fields UserID, owner"
        );
    }
}
