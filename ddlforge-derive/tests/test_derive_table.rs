//! Tests for the Table derive
//!
//! Derived naming hooks combined with the table builder.

use ddlforge::{
    Index, PrimaryKey, Reflect, SchemaConfig, SchemaError, Table, TableDefinition,
};

#[derive(Reflect, Table)]
#[ddl(table = "users", comment = "registered users")]
#[allow(dead_code)]
struct User {
    #[ddl = "id,auto"]
    id: u64,
    #[ddl = ",size=64"]
    name: String,
    nickname: Option<String>,
}

#[derive(Reflect, Table, Default)]
#[allow(dead_code)]
struct AuditLogEntry {
    message: String,
}

#[derive(Reflect, Table)]
#[ddl(comment = "")]
#[allow(dead_code)]
struct Blank {
    id: i32,
}

#[derive(Reflect)]
#[allow(dead_code)]
struct Tagged {
    #[ddl = "id,auto"]
    id: u64,
    name: String,
}

impl Table for Tagged {
    fn table_name(&self) -> Option<String> {
        Some("tagged_items".to_string())
    }

    fn primary_key(&self) -> Option<PrimaryKey> {
        Some(PrimaryKey::new(["id"]))
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new("idx_name", ["name"])]
    }
}

#[derive(Reflect, Table)]
#[allow(dead_code)]
enum Kind {
    A,
}

fn user() -> User {
    User {
        id: 1,
        name: "alice".to_string(),
        nickname: None,
    }
}

#[test]
fn test_derived_name_and_comment() {
    assert_eq!(user().table_name().as_deref(), Some("users"));
    assert_eq!(user().table_comment().as_deref(), Some("registered users"));
    assert_eq!(user().primary_key(), None);

    let table = TableDefinition::build(&user(), &SchemaConfig::default()).unwrap();
    assert_eq!(table.name, "users");
    assert_eq!(table.comment.as_deref(), Some("registered users"));
    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "nickname"]);
    assert!(table.column("nickname").unwrap().nullable);
}

#[test]
fn test_default_name_is_snake_case() {
    let entry = AuditLogEntry::default();
    assert_eq!(entry.table_name(), None);
    let table = TableDefinition::build(&entry, &SchemaConfig::default()).unwrap();
    assert_eq!(table.name, "audit_log_entry");
    assert_eq!(table.source_name, "AuditLogEntry");
}

#[test]
fn test_empty_comment_is_dropped() {
    let table = TableDefinition::build(&Blank { id: 1 }, &SchemaConfig::default()).unwrap();
    assert_eq!(table.comment, None);
}

#[test]
fn test_hand_written_hooks() {
    let value = Tagged {
        id: 1,
        name: String::new(),
    };
    let table = TableDefinition::build(&value, &SchemaConfig::default()).unwrap();
    assert_eq!(table.name, "tagged_items");
    assert_eq!(table.primary_key, Some(PrimaryKey::new(["id"])));
    assert_eq!(table.indexes, vec![Index::new("idx_name", ["name"])]);
}

#[test]
fn test_enum_table_is_rejected() {
    let err = TableDefinition::build(&Kind::A, &SchemaConfig::default()).unwrap_err();
    assert!(matches!(err, SchemaError::NotAStruct { kind: "opaque", .. }));
}
