//! Static type descriptions consumed by the schema builders.
//!
//! # Structure
//!
//! - `shape`: the `Reflect` trait and the `Shape`/`Def`/`Field` model
//! - `impls`: implementations for std, chrono and serde_json types
//! - `null`: nullable wrappers and the `Json` marker wrapper

mod impls;
pub mod null;
pub mod shape;

pub use null::{
    Json, Null, NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString,
    NullTime,
};
pub use shape::{Def, Field, PointerDef, Reflect, ScalarKind, Shape, ShapeFn};
