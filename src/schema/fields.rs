//! Visible field enumeration with embedded-struct promotion.

use std::any::TypeId;
use std::collections::HashMap;

use super::resolve::resolve;
use crate::reflect::{Field, Shape};

/// A field reachable from the top-level struct.
#[derive(Debug, Clone, Copy)]
pub struct VisibleField {
    pub field: &'static Field,
    /// Embedding depth; 0 for the struct's own fields.
    pub depth: usize,
    /// The field is an embedding container whose fields were promoted.
    pub promoted: bool,
}

/// Enumerate the visible fields of a struct shape in declaration order.
///
/// Fields of an embedded struct follow the embedding field. A name declared
/// at a shallower depth hides deeper fields of the same name; names that
/// occur more than once at their shallowest depth are ambiguous and dropped.
/// A shape that is not a struct has no fields.
pub fn visible_fields(shape: &'static Shape) -> Vec<VisibleField> {
    let Some(fields) = shape.fields() else {
        return Vec::new();
    };
    let mut all = Vec::new();
    let mut path = vec![shape.type_id()];
    collect(fields, 0, &mut path, &mut all);

    let mut shallowest: HashMap<&str, (usize, usize)> = HashMap::new();
    for vf in &all {
        let entry = shallowest.entry(vf.field.name).or_insert((vf.depth, 0));
        if vf.depth < entry.0 {
            *entry = (vf.depth, 1);
        } else if vf.depth == entry.0 {
            entry.1 += 1;
        }
    }

    all.into_iter()
        .filter(|vf| shallowest[vf.field.name] == (vf.depth, 1))
        .collect()
}

fn collect(
    fields: &'static [Field],
    depth: usize,
    path: &mut Vec<TypeId>,
    out: &mut Vec<VisibleField>,
) {
    for field in fields {
        let embedded = if field.embedded {
            let resolved = resolve(field.shape());
            resolved.shape.fields().map(|inner| (resolved.shape.type_id(), inner))
        } else {
            None
        };

        out.push(VisibleField {
            field,
            depth,
            promoted: embedded.is_some(),
        });

        if let Some((id, inner)) = embedded {
            if path.contains(&id) {
                continue;
            }
            path.push(id);
            collect(inner, depth + 1, path, out);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Def, Reflect};

    macro_rules! reflect_struct {
        ($ty:ident { $($(#[$embed:ident])? $name:literal: $fty:ty),* $(,)? }) => {
            struct $ty;
            impl Reflect for $ty {
                const SHAPE: &'static Shape = &Shape::of::<$ty>(Def::Struct(&[$(Field {
                    name: $name,
                    shape: <$fty as Reflect>::shape,
                    tags: &[],
                    embedded: reflect_struct!(@embedded $($embed)?),
                }),*]));
            }
        };
        (@embedded embed) => { true };
        (@embedded) => { false };
    }

    reflect_struct!(Timestamps {
        "CreatedAt": chrono::NaiveDateTime,
        "UpdatedAt": chrono::NaiveDateTime,
        "ID": i64,
    });

    reflect_struct!(Audit {
        "UpdatedAt": String,
        "Editor": String,
    });

    reflect_struct!(Linked {
        "Name": String,
        #[embed] "Next": Option<Linked>,
    });

    reflect_struct!(Flat { "ID": i64, "Name": String });

    reflect_struct!(WithTimestamps {
        "Name": String,
        #[embed] "Timestamps": Timestamps,
        "Email": String,
    });

    reflect_struct!(Shadowing {
        "ID": String,
        #[embed] "Timestamps": Box<Timestamps>,
    });

    reflect_struct!(Ambiguous {
        #[embed] "Timestamps": Timestamps,
        #[embed] "Audit": Audit,
    });

    reflect_struct!(EmbedsScalar { #[embed] "Count": i32 });

    reflect_struct!(EmbedsItself {
        "Label": String,
        #[embed] "Parent": Option<EmbedsItself>,
    });

    fn names(fields: &[VisibleField]) -> Vec<&'static str> {
        fields.iter().filter(|vf| !vf.promoted).map(|vf| vf.field.name).collect()
    }

    #[test]
    fn test_flat_struct() {
        let visible = visible_fields(Flat::SHAPE);
        assert_eq!(names(&visible), vec!["ID", "Name"]);
        assert!(visible.iter().all(|vf| vf.depth == 0));
    }

    #[test]
    fn test_non_struct_has_no_fields() {
        assert!(visible_fields(String::SHAPE).is_empty());
    }

    #[test]
    fn test_embedded_fields_follow_embedding_field() {
        let visible = visible_fields(WithTimestamps::SHAPE);
        assert_eq!(names(&visible), vec!["Name", "CreatedAt", "UpdatedAt", "ID", "Email"]);
        assert!(visible[1].promoted);
        assert_eq!(visible[2].depth, 1);
    }

    #[test]
    fn test_shallow_field_shadows_promoted_one() {
        let visible = visible_fields(Shadowing::SHAPE);
        assert_eq!(names(&visible), vec!["ID", "CreatedAt", "UpdatedAt"]);
        assert!(visible[0].field.shape().is(String::SHAPE));
    }

    #[test]
    fn test_ambiguous_fields_are_dropped() {
        let visible = visible_fields(Ambiguous::SHAPE);
        assert_eq!(names(&visible), vec!["CreatedAt", "ID", "Editor"]);
    }

    #[test]
    fn test_embedding_non_struct_is_regular_field() {
        let visible = visible_fields(EmbedsScalar::SHAPE);
        assert_eq!(names(&visible), vec!["Count"]);
    }

    #[test]
    fn test_recursive_embedding_terminates() {
        let visible = visible_fields(Linked::SHAPE);
        assert_eq!(names(&visible), vec!["Name"]);

        let visible = visible_fields(EmbedsItself::SHAPE);
        assert_eq!(names(&visible), vec!["Label"]);
    }
}
