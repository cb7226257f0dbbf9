//! Field tag grammar.
//!
//! A tag is `["-" | name][,key[=value]]*`. Parentheses only affect where the
//! string is split: a `,` inside `(...)` belongs to the current option, so
//! `default=f(1,2)` stays one option. Parentheses are kept in the value.

/// Leading segment of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagName<'a> {
    /// Empty name: derive it from the field identifier.
    Default,
    /// Explicit column name.
    Named(&'a str),
    /// The skip marker: exclude the field.
    Skip,
}

/// One `key` or `key=value` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption<'a> {
    pub key: &'a str,
    /// `None` when the option was written without `=`.
    pub value: Option<&'a str>,
}

impl<'a> TagOption<'a> {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The value, or `""` for a valueless option.
    pub fn raw_value(&self) -> &'a str {
        self.value.unwrap_or("")
    }
}

/// A parsed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: TagName<'a>,
    pub options: Vec<TagOption<'a>>,
}

impl<'a> Tag<'a> {
    /// Parse `raw`. A name equal to `skip_marker` yields [`TagName::Skip`].
    ///
    /// Parsing never fails: values are kept as raw strings and only
    /// interpreted when applied to a column. Empty options are dropped.
    pub fn parse(raw: &'a str, skip_marker: &str) -> Self {
        let (name, mut remain) = split_top_level(raw);
        let name = if name.is_empty() {
            TagName::Default
        } else if name == skip_marker {
            TagName::Skip
        } else {
            TagName::Named(name)
        };

        let mut options = Vec::new();
        while let Some(rest) = remain {
            let (opt, next) = split_top_level(rest);
            remain = next;
            if opt.is_empty() {
                continue;
            }
            let option = match opt.split_once('=') {
                Some((key, value)) => TagOption {
                    key,
                    value: Some(value),
                },
                None => TagOption {
                    key: opt,
                    value: None,
                },
            };
            options.push(option);
        }

        Self { name, options }
    }

    pub fn is_skip(&self) -> bool {
        self.name == TagName::Skip
    }
}

/// Split at the first `,` outside parentheses. The remainder is `None` when
/// no separator was found.
fn split_top_level(s: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => return (&s[..i], Some(&s[i + 1..])),
            _ => {}
        }
    }
    (s, None)
}

/// Parse a boolean literal the way tag values spell them.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt<'a>(key: &'a str, value: Option<&'a str>) -> TagOption<'a> {
        TagOption { key, value }
    }

    #[test]
    fn test_parse_name_only() {
        let tag = Tag::parse("user_name", "-");
        assert_eq!(tag.name, TagName::Named("user_name"));
        assert!(tag.options.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let tag = Tag::parse("", "-");
        assert_eq!(tag.name, TagName::Default);
        assert!(tag.options.is_empty());
    }

    #[test]
    fn test_parse_skip_marker() {
        assert!(Tag::parse("-", "-").is_skip());
        assert!(Tag::parse("-,null", "-").is_skip());
        assert!(!Tag::parse("-", "skip").is_skip());
        assert!(Tag::parse("skip", "skip").is_skip());
    }

    #[test]
    fn test_parse_options_in_order() {
        let tag = Tag::parse(",null,size=10,type=VARCHAR", "-");
        assert_eq!(tag.name, TagName::Default);
        assert_eq!(
            tag.options,
            vec![
                opt("null", None),
                opt("size", Some("10")),
                opt("type", Some("VARCHAR")),
            ]
        );
        assert!(!tag.options[0].has_value());
        assert_eq!(tag.options[0].raw_value(), "");
    }

    #[test]
    fn test_parse_grouped_value() {
        let tag = Tag::parse("amount,default=f(1,2)", "-");
        assert_eq!(tag.name, TagName::Named("amount"));
        assert_eq!(tag.options, vec![opt("default", Some("f(1,2)"))]);
    }

    #[test]
    fn test_parse_nested_groups() {
        let tag = Tag::parse("p,default=(ST_GeomFromText('POINT(1 1)', 4326)),srid=4326", "-");
        assert_eq!(
            tag.options,
            vec![
                opt("default", Some("(ST_GeomFromText('POINT(1 1)', 4326))")),
                opt("srid", Some("4326")),
            ]
        );
    }

    #[test]
    fn test_parse_unbalanced_close_is_clamped() {
        let tag = Tag::parse("x,comment=a)b,null", "-");
        assert_eq!(tag.options, vec![opt("comment", Some("a)b")), opt("null", None)]);
    }

    #[test]
    fn test_parse_value_keeps_later_equals() {
        let tag = Tag::parse("x,default='a=b'", "-");
        assert_eq!(tag.options, vec![opt("default", Some("'a=b'"))]);
    }

    #[test]
    fn test_parse_trailing_and_empty_options() {
        let tag = Tag::parse("x,,null,", "-");
        assert_eq!(tag.options, vec![opt("null", None)]);
    }

    #[test]
    fn test_parse_bool_literals() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("T"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool(""), None);
    }
}
