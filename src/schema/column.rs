//! Column definitions and the column builder.
//!
//! A column is built from one struct field in three steps:
//!
//! 1. the field type is resolved (see [`resolve`]) and a default SQL type is
//!    inferred from the base type;
//! 2. the field's tag is parsed and each option is applied through a fixed
//!    dispatch table;
//! 3. a base type without a mapping is rejected unless a `type` option
//!    supplied one.

use serde::{Serialize, Serializer};

use super::naming::snake_case;
use super::resolve::resolve;
use super::tag::{parse_bool, Tag, TagName, TagOption};
use super::type_mapping;
use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::reflect::{Field, Shape};

/// Column definition metadata
///
/// Fully resolved description of one column. Built once per field and not
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Column name in SQL.
    pub name: String,
    /// Field identifier in the struct definition.
    pub source_name: String,
    /// SQL type name (e.g. "BIGINT", "VARCHAR").
    pub sql_type: String,
    /// Base type after unwrapping pointers and nullable wrappers.
    #[serde(serialize_with = "serialize_shape")]
    pub resolved_type: &'static Shape,
    /// Character length, binary length or fractional seconds precision;
    /// 0 leaves it unspecified.
    pub size: u32,
    pub unsigned: bool,
    pub auto_increment: bool,
    /// <https://dev.mysql.com/doc/refman/8.0/en/invisible-columns.html>
    pub invisible: bool,
    pub nullable: bool,
    /// Default value, passed through verbatim.
    pub default_value: Option<String>,
    pub comment: Option<String>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    /// Spatial reference system id.
    pub srid: Option<u32>,
}

fn serialize_shape<S: Serializer>(
    shape: &&'static Shape,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(shape.type_name())
}

impl ColumnDefinition {
    /// Build the column for `field`.
    ///
    /// Returns `Ok(None)` when the field is tagged with the skip marker; the
    /// field's type is not checked in that case.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::TagParse`] for a malformed boolean or integer option,
    ///   or a `type` option without a type name
    /// - [`SchemaError::UnknownOption`] for an unknown option in strict mode
    /// - [`SchemaError::UnsupportedType`] when the resolved type has no
    ///   mapping and no `type` option was given
    pub fn from_field(field: &Field, config: &SchemaConfig) -> Result<Option<Self>> {
        let raw_tag = field.tag(&config.tag_key).unwrap_or("");
        Self::build(field.name, field.shape(), raw_tag, config)
    }

    /// Build a column from its parts: field identifier, declared type and raw
    /// tag string.
    pub fn build(
        source_name: &str,
        declared: &'static Shape,
        raw_tag: &str,
        config: &SchemaConfig,
    ) -> Result<Option<Self>> {
        let resolved = resolve(declared);
        let inferred = type_mapping::infer(resolved.shape);

        let mut draft = ColumnDraft {
            column: ColumnDefinition {
                name: String::new(),
                source_name: source_name.to_string(),
                sql_type: inferred.map(|t| t.sql_type).unwrap_or_default().to_string(),
                resolved_type: resolved.shape,
                size: inferred.map_or(0, |t| t.size),
                unsigned: inferred.is_some_and(|t| t.unsigned),
                auto_increment: false,
                invisible: false,
                nullable: resolved.optional,
                default_value: None,
                comment: None,
                charset: None,
                collation: None,
                srid: None,
            },
            invalid_type: inferred.is_none(),
        };

        let tag = Tag::parse(raw_tag, &config.skip_marker);
        draft.column.name = match tag.name {
            TagName::Skip => {
                log::debug!("skipping field {}", source_name);
                return Ok(None);
            }
            TagName::Default => snake_case(source_name),
            TagName::Named(name) => name.to_string(),
        };

        for option in &tag.options {
            match setter(option.key) {
                Some(apply) => apply(&mut draft, option)?,
                None if config.strict_options => {
                    return Err(SchemaError::UnknownOption {
                        field: source_name.to_string(),
                        option: option.key.to_string(),
                    });
                }
                None => log::trace!("ignoring unknown option {} on {}", option.key, source_name),
            }
        }

        if draft.invalid_type {
            return Err(SchemaError::UnsupportedType {
                field: source_name.to_string(),
                type_name: resolved.shape.type_name().to_string(),
            });
        }

        log::trace!(
            "column {} ({}) -> {} size={} unsigned={} null={}",
            draft.column.name,
            resolved.shape,
            draft.column.sql_type,
            draft.column.size,
            draft.column.unsigned,
            draft.column.nullable
        );
        Ok(Some(draft.column))
    }
}

/// Column under construction plus the pending "no mapping" flag.
struct ColumnDraft {
    column: ColumnDefinition,
    invalid_type: bool,
}

impl ColumnDraft {
    fn bool_option(&self, option: &TagOption<'_>) -> Result<bool> {
        match option.value {
            None => Ok(true),
            Some(value) => parse_bool(value)
                .ok_or_else(|| self.parse_error(option, "invalid syntax".to_string())),
        }
    }

    fn int_option(&self, option: &TagOption<'_>) -> Result<u32> {
        option
            .raw_value()
            .parse::<u32>()
            .map_err(|e| self.parse_error(option, e.to_string()))
    }

    fn parse_error(&self, option: &TagOption<'_>, reason: String) -> SchemaError {
        SchemaError::TagParse {
            field: self.column.source_name.clone(),
            option: option.key.to_string(),
            value: option.raw_value().to_string(),
            reason,
        }
    }
}

type Setter = fn(&mut ColumnDraft, &TagOption<'_>) -> Result<()>;

/// Recognized tag options.
const SETTERS: &[(&str, Setter)] = &[
    ("null", |d, o| {
        d.column.nullable = d.bool_option(o)?;
        Ok(())
    }),
    ("auto", |d, o| {
        d.column.auto_increment = d.bool_option(o)?;
        Ok(())
    }),
    ("invisible", |d, o| {
        d.column.invisible = d.bool_option(o)?;
        Ok(())
    }),
    ("unsigned", |d, o| {
        d.column.unsigned = d.bool_option(o)?;
        Ok(())
    }),
    ("size", |d, o| {
        d.column.size = d.int_option(o)?;
        Ok(())
    }),
    ("srid", |d, o| {
        d.column.srid = Some(d.int_option(o)?);
        Ok(())
    }),
    ("type", |d, o| {
        if o.raw_value().is_empty() {
            return Err(d.parse_error(o, "missing type name".to_string()));
        }
        // An explicit type drops everything inferred from the base type.
        d.column.sql_type = o.raw_value().to_string();
        d.column.unsigned = false;
        d.column.size = 0;
        d.invalid_type = false;
        Ok(())
    }),
    ("default", |d, o| {
        d.column.default_value = Some(o.raw_value().to_string());
        Ok(())
    }),
    ("charset", |d, o| {
        d.column.charset = Some(o.raw_value().to_string());
        Ok(())
    }),
    ("collate", |d, o| {
        d.column.collation = Some(o.raw_value().to_string());
        Ok(())
    }),
    ("comment", |d, o| {
        d.column.comment = Some(o.raw_value().to_string());
        Ok(())
    }),
];

fn setter(key: &str) -> Option<Setter> {
    SETTERS.iter().find(|(k, _)| *k == key).map(|(_, f)| *f)
}
