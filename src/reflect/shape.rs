//! Static type descriptions.
//!
//! A [`Shape`] is the compile-time stand-in for runtime type inspection: every
//! type that can appear as a table field describes itself once, as a
//! `&'static Shape`, and the schema builders walk those descriptions instead of
//! the values themselves.

use std::any::TypeId;
use std::fmt;

/// Implemented by every type that can be inspected by the schema builders.
///
/// Usually derived with `#[derive(Reflect)]`; the crate ships implementations
/// for scalars, strings, byte containers, smart pointers, `Option`, the
/// nullable wrappers and the supported time types.
pub trait Reflect: 'static {
    /// The static description of `Self`.
    const SHAPE: &'static Shape;

    /// Function form of [`Reflect::SHAPE`], used where a shape must be
    /// resolved lazily (field types, pointees) so recursive types can refer
    /// to themselves.
    fn shape() -> &'static Shape {
        Self::SHAPE
    }
}

/// Lazily resolved shape reference.
pub type ShapeFn = fn() -> &'static Shape;

/// Description of one type.
pub struct Shape {
    /// Identity of the described type. Two shapes describe the same type iff
    /// their ids are equal.
    pub id: fn() -> TypeId,
    /// Printable type name, used in diagnostics.
    pub type_name: fn() -> &'static str,
    /// Structural definition.
    pub def: Def,
    /// The type stores itself as a JSON document (custom JSON capability).
    pub json: bool,
}

impl Shape {
    /// Shape of `T` with the given definition and no JSON marker.
    pub const fn of<T: ?Sized + 'static>(def: Def) -> Self {
        Self {
            id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
            def,
            json: false,
        }
    }

    /// Marks the shape as carrying the custom JSON capability.
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    pub fn type_id(&self) -> TypeId {
        (self.id)()
    }

    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether both shapes describe the same type.
    pub fn is(&self, other: &Shape) -> bool {
        self.type_id() == other.type_id()
    }

    /// Short kind label for error messages (`"struct"`, `"pointer"`, ...).
    pub fn kind(&self) -> &'static str {
        self.def.kind()
    }

    /// The field list if this shape is a struct.
    pub fn fields(&self) -> Option<&'static [Field]> {
        match self.def {
            Def::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_name", &self.type_name())
            .field("kind", &self.kind())
            .field("json", &self.json)
            .finish()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Structural definition of a type.
#[derive(Clone, Copy)]
pub enum Def {
    /// Primitive value with a direct column mapping.
    Scalar(ScalarKind),
    /// One level of indirection.
    Pointer(PointerDef),
    /// Nullable wrapper: a value paired with a validity flag. The function
    /// yields the shape of the carried value.
    Nullable(ShapeFn),
    /// Variable-length sequence (`Vec<T>`).
    List(ShapeFn),
    /// Fixed-length array (`[T; N]`).
    Array { elem: ShapeFn, len: usize },
    /// Raw JSON payload.
    RawJson,
    /// Record with named fields, in declaration order.
    Struct(&'static [Field]),
    /// No structural information; has no default column mapping.
    Opaque,
}

impl Def {
    pub fn kind(&self) -> &'static str {
        match self {
            Def::Scalar(kind) => kind.name(),
            Def::Pointer(_) => "pointer",
            Def::Nullable(_) => "nullable",
            Def::List(_) => "list",
            Def::Array { .. } => "array",
            Def::RawJson => "json",
            Def::Struct(_) => "struct",
            Def::Opaque => "opaque",
        }
    }
}

impl fmt::Debug for Def {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Def::Scalar(kind) => f.debug_tuple("Scalar").field(kind).finish(),
            Def::Pointer(ptr) => f
                .debug_struct("Pointer")
                .field("pointee", &(ptr.pointee)().type_name())
                .field("optional", &ptr.optional)
                .finish(),
            Def::Nullable(value) => f.debug_tuple("Nullable").field(&value().type_name()).finish(),
            Def::List(elem) => f.debug_tuple("List").field(&elem().type_name()).finish(),
            Def::Array { elem, len } => f
                .debug_struct("Array")
                .field("elem", &elem().type_name())
                .field("len", len)
                .finish(),
            Def::RawJson => f.write_str("RawJson"),
            Def::Struct(fields) => f.debug_tuple("Struct").field(fields).finish(),
            Def::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Pointer indirection.
#[derive(Clone, Copy)]
pub struct PointerDef {
    pub pointee: ShapeFn,
    /// The pointer may be absent (`Option<T>`), which makes the column
    /// nullable by default.
    pub optional: bool,
}

/// Primitive kinds with a default SQL mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    /// A moment in time.
    Timestamp,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "string",
            ScalarKind::Timestamp => "timestamp",
        }
    }
}

/// One field of a struct shape.
pub struct Field {
    /// Identifier in the struct definition.
    pub name: &'static str,
    pub shape: ShapeFn,
    /// Raw annotation strings keyed by tag key (e.g. `("ddl", "id,auto")`).
    pub tags: &'static [(&'static str, &'static str)],
    /// Fields of this field's struct type are promoted into the parent.
    pub embedded: bool,
}

impl Field {
    /// The raw annotation stored under `key`, if any.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type", &self.shape().type_name())
            .field("tags", &self.tags)
            .field("embedded", &self.embedded)
            .finish()
    }
}
