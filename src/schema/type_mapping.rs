//! Default SQL type inference for resolved base types.
//!
//! Maps a resolved [`Shape`] to the `(sql_type, size, unsigned)` triple a
//! column starts from before its tag is applied.
//!
//! | base type                     | sql type   | size         | unsigned |
//! |-------------------------------|------------|--------------|----------|
//! | `bool`                        | `TINYINT`  | 1            | no       |
//! | `i8` / `i16` / `i32` / `i64`  | `TINYINT` / `SMALLINT` / `INTEGER` / `BIGINT` | 0 | no |
//! | `u8` / `u16` / `u32` / `u64`  | `TINYINT` / `SMALLINT` / `INTEGER` / `BIGINT` | 0 | yes |
//! | `f32` / `f64`                 | `FLOAT` / `DOUBLE` | 0    | no       |
//! | `String`                      | `VARCHAR`  | 191          | no       |
//! | raw JSON                      | `JSON`     | 0            | no       |
//! | `Vec<u8>`                     | `VARBINARY`| 767          | no       |
//! | `[u8; N]`                     | `BINARY`   | N            | no       |
//! | timestamps                    | `DATETIME` | 6            | no       |

use crate::reflect::{Def, ScalarKind, Shape};

pub const TINYINT: &str = "TINYINT";
pub const SMALLINT: &str = "SMALLINT";
pub const INTEGER: &str = "INTEGER";
pub const BIGINT: &str = "BIGINT";
pub const FLOAT: &str = "FLOAT";
pub const DOUBLE: &str = "DOUBLE";
pub const VARCHAR: &str = "VARCHAR";
pub const VARBINARY: &str = "VARBINARY";
pub const BINARY: &str = "BINARY";
pub const DATETIME: &str = "DATETIME";
pub const JSON: &str = "JSON";

/// Default length of `VARCHAR` columns (fits a 767-byte index prefix in utf8mb4).
pub const DEFAULT_VARCHAR_SIZE: u32 = 191;
/// Default length of `VARBINARY` columns.
pub const DEFAULT_VARBINARY_SIZE: u32 = 767;
/// Fractional seconds precision of `DATETIME` columns.
pub const DATETIME_PRECISION: u32 = 6;

/// Inferred column type before tag options are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferredType {
    pub sql_type: &'static str,
    pub size: u32,
    pub unsigned: bool,
}

impl InferredType {
    const fn new(sql_type: &'static str, size: u32, unsigned: bool) -> Self {
        Self {
            sql_type,
            size,
            unsigned,
        }
    }
}

/// Infer the default column type of a resolved base type.
///
/// Returns `None` when the type has no mapping. A shape carrying the JSON
/// marker always maps to `JSON`, keeping whatever size/unsigned its kind
/// would have had.
pub(crate) fn infer(shape: &'static Shape) -> Option<InferredType> {
    let inferred = infer_kind(shape);
    if shape.json {
        let base = inferred.unwrap_or(InferredType::new(JSON, 0, false));
        return Some(InferredType {
            sql_type: JSON,
            ..base
        });
    }
    inferred
}

fn infer_kind(shape: &'static Shape) -> Option<InferredType> {
    let inferred = match shape.def {
        Def::Scalar(kind) => scalar(kind),
        Def::RawJson => InferredType::new(JSON, 0, false),
        Def::List(elem) if is_byte(elem()) => {
            InferredType::new(VARBINARY, DEFAULT_VARBINARY_SIZE, false)
        }
        Def::Array { elem, len } if is_byte(elem()) => {
            InferredType::new(BINARY, u32::try_from(len).ok()?, false)
        }
        _ => return None,
    };
    Some(inferred)
}

fn scalar(kind: ScalarKind) -> InferredType {
    match kind {
        ScalarKind::Bool => InferredType::new(TINYINT, 1, false),
        ScalarKind::I8 => InferredType::new(TINYINT, 0, false),
        ScalarKind::I16 => InferredType::new(SMALLINT, 0, false),
        ScalarKind::I32 => InferredType::new(INTEGER, 0, false),
        ScalarKind::I64 => InferredType::new(BIGINT, 0, false),
        ScalarKind::U8 => InferredType::new(TINYINT, 0, true),
        ScalarKind::U16 => InferredType::new(SMALLINT, 0, true),
        ScalarKind::U32 => InferredType::new(INTEGER, 0, true),
        ScalarKind::U64 => InferredType::new(BIGINT, 0, true),
        ScalarKind::F32 => InferredType::new(FLOAT, 0, false),
        ScalarKind::F64 => InferredType::new(DOUBLE, 0, false),
        ScalarKind::String => InferredType::new(VARCHAR, DEFAULT_VARCHAR_SIZE, false),
        ScalarKind::Timestamp => InferredType::new(DATETIME, DATETIME_PRECISION, false),
    }
}

// Element types are matched as declared, without unwrapping.
fn is_byte(shape: &Shape) -> bool {
    matches!(shape.def, Def::Scalar(ScalarKind::U8))
}
