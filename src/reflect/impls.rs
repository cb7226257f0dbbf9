//! `Reflect` implementations for std, chrono and serde_json types.

use std::rc::Rc;
use std::sync::Arc;
use std::time::SystemTime;

use super::shape::{Def, PointerDef, Reflect, ScalarKind, Shape};

macro_rules! reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                const SHAPE: &'static Shape = &Shape::of::<$ty>(Def::Scalar(ScalarKind::$kind));
            }
        )*
    };
}

reflect_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    SystemTime => Timestamp,
    chrono::NaiveDateTime => Timestamp,
}

// Described, but without a default column mapping: a field of one of these
// types needs an explicit `type=` option.
macro_rules! reflect_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                const SHAPE: &'static Shape = &Shape::of::<$ty>(Def::Opaque);
            }
        )*
    };
}

reflect_opaque!(char, i128, u128, isize, usize, chrono::NaiveDate, chrono::NaiveTime);

impl<Tz> Reflect for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone + 'static,
{
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Scalar(ScalarKind::Timestamp));
}

impl Reflect for serde_json::Value {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::RawJson);
}

impl Reflect for Box<serde_json::value::RawValue> {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::RawJson);
}

impl<T: Reflect> Reflect for Option<T> {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Pointer(PointerDef {
        pointee: T::shape,
        optional: true,
    }));
}

macro_rules! reflect_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Pointer(PointerDef {
                    pointee: T::shape,
                    optional: false,
                }));
            }
        )*
    };
}

reflect_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Vec<T> {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::List(T::shape));
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    const SHAPE: &'static Shape = &Shape::of::<Self>(Def::Array {
        elem: T::shape,
        len: N,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_is_optional_pointer() {
        match <Option<i32> as Reflect>::SHAPE.def {
            Def::Pointer(ptr) => {
                assert!(ptr.optional);
                assert!((ptr.pointee)().is(<i32 as Reflect>::SHAPE));
            }
            other => panic!("expected pointer, got {other:?}"),
        }
    }

    #[test]
    fn test_box_is_required_pointer() {
        match <Box<String> as Reflect>::SHAPE.def {
            Def::Pointer(ptr) => assert!(!ptr.optional),
            other => panic!("expected pointer, got {other:?}"),
        }
    }

    #[test]
    fn test_byte_array_length() {
        match <[u8; 16] as Reflect>::SHAPE.def {
            Def::Array { elem, len } => {
                assert_eq!(len, 16);
                assert!(elem().is(<u8 as Reflect>::SHAPE));
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_time_types_are_timestamps() {
        for shape in [
            <SystemTime as Reflect>::SHAPE,
            <chrono::NaiveDateTime as Reflect>::SHAPE,
            <chrono::DateTime<chrono::Utc> as Reflect>::SHAPE,
        ] {
            assert!(matches!(shape.def, Def::Scalar(ScalarKind::Timestamp)), "{shape}");
        }
    }
}
