//! Type resolution: strips pointers and nullable wrappers down to the base type.

use std::any::TypeId;
use std::collections::HashSet;

use crate::reflect::{Def, Shape};

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType {
    /// The fully unwrapped type used for column inference.
    pub shape: &'static Shape,
    /// An optional pointer or a nullable wrapper was unwrapped on the way.
    pub optional: bool,
}

/// Unwrap pointer indirection and nullable wrappers.
///
/// Stops at the first shape that is neither. A pointer whose pointee was
/// already visited is returned as is, so self-referential pointer types
/// terminate.
pub fn resolve(shape: &'static Shape) -> ResolvedType {
    let mut seen: HashSet<TypeId> = HashSet::from([shape.type_id()]);
    let mut current = shape;
    let mut optional = false;

    loop {
        let (next, nullable) = match current.def {
            Def::Pointer(ptr) => ((ptr.pointee)(), ptr.optional),
            Def::Nullable(value) => (value(), true),
            _ => break,
        };
        if !seen.insert(next.type_id()) {
            log::trace!("cyclic indirection at {}", current.type_name());
            break;
        }
        optional |= nullable;
        current = next;
    }

    ResolvedType {
        shape: current,
        optional,
    }
}
