//! Nullable wrappers and the JSON marker wrapper.
//!
//! These mirror the shapes drivers commonly use for NULL-capable scalars: a
//! value paired with a validity flag. The schema builders unwrap every one of
//! them to the carried value's type, so `NullString` and `Null<String>` map to
//! the same column.

use serde::{Deserialize, Serialize};

use super::shape::{Def, Reflect, Shape};

/// Generic nullable wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Null<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Null<T> {
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }
}

impl<T: Reflect> Reflect for Null<T> {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Nullable(T::shape));
}

macro_rules! null_wrapper {
    ($($(#[$doc:meta])* $name:ident { $field:ident: $ty:ty }),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct $name {
                pub $field: $ty,
                pub valid: bool,
            }

            impl From<Option<$ty>> for $name {
                fn from(value: Option<$ty>) -> Self {
                    match value {
                        Some($field) => Self { $field, valid: true },
                        None => Self::default(),
                    }
                }
            }

            impl Reflect for $name {
                const SHAPE: &'static Shape =
                    &Shape::of::<$name>(Def::Nullable(<$ty as Reflect>::shape));
            }
        )*
    };
}

null_wrapper! {
    NullBool { bool: bool },
    NullByte { byte: u8 },
    NullFloat64 { float64: f64 },
    NullInt16 { int16: i16 },
    NullInt32 { int32: i32 },
    NullInt64 { int64: i64 },
    NullString { string: String },
    /// Nullable moment in time.
    NullTime { time: chrono::NaiveDateTime },
}

/// Stores `T` as a JSON document.
///
/// The wrapped type needs no shape of its own; the column is always `JSON`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T: 'static> Reflect for Json<T> {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Opaque).with_json();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_from_option() {
        assert_eq!(Null::from(Some(3_i64)), Null { value: 3, valid: true });
        assert_eq!(Null::<i64>::from(None), Null { value: 0, valid: false });
        assert_eq!(Null::new("a").into_option(), Some("a"));
    }

    #[test]
    fn test_hand_rolled_wrappers_point_at_base_type() {
        let cases: [(&Shape, &Shape); 4] = [
            (NullString::SHAPE, String::SHAPE),
            (NullByte::SHAPE, u8::SHAPE),
            (NullInt32::SHAPE, i32::SHAPE),
            (NullTime::SHAPE, chrono::NaiveDateTime::SHAPE),
        ];
        for (wrapper, base) in cases {
            match wrapper.def {
                Def::Nullable(value) => assert!(value().is(base), "{wrapper}"),
                other => panic!("expected nullable, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_wrapper_carries_marker() {
        assert!(<Json<Vec<String>> as Reflect>::SHAPE.json);
        assert!(!<Vec<String> as Reflect>::SHAPE.json);
    }
}
