//! Incremental builder for IDL schema descriptions.
//!
//! Callers assemble type and resource descriptors with the builders, register
//! them on a [`SchemaBuilder`] in any order, and call
//! [`SchemaBuilder::finalize`] to get a [`Schema`] whose types are ordered so
//! that every type follows the types it refers to.
//!
//! ```
//! use rdl_schema::{SchemaBuilder, StructField, StructTypeBuilder};
//!
//! let schema = SchemaBuilder::new("geometry")
//!     .add_type(
//!         StructTypeBuilder::new("Struct", "Line")
//!             .field(StructField::new("from", "Point"))
//!             .field(StructField::new("to", "Point"))
//!             .build(),
//!     )
//!     .add_type(
//!         StructTypeBuilder::new("Struct", "Point")
//!             .field(StructField::new("x", "Int32"))
//!             .field(StructField::new("y", "Int32"))
//!             .build(),
//!     )
//!     .finalize()?;
//!
//! let names: Vec<_> = schema.types().iter().map(|t| t.name()).collect();
//! assert_eq!(names, ["Point", "Line"]);
//! # Ok::<(), rdl_schema::SchemaError>(())
//! ```
pub mod base;
pub mod builder;
pub mod error;
pub mod resolve;
pub mod resource;
pub mod schema;
pub mod types;

pub use base::BaseType;
pub use builder::{
    AliasTypeBuilder, ArrayTypeBuilder, EnumTypeBuilder, MapTypeBuilder, NumberTypeBuilder,
    StringTypeBuilder, StructTypeBuilder, UnionTypeBuilder,
};
pub use error::{Result, SchemaError};
pub use resource::{
    ExceptionDef, Resource, ResourceAuth, ResourceBuilder, ResourceInput, ResourceOutput,
};
pub use schema::{Schema, SchemaBuilder};
pub use types::{FieldKind, Number, StructField, Type, TypeInfo};
