//! Declared type descriptors.
//!
//! A `Type` is one of eight variants; every variant carries the same
//! `TypeInfo` header (name, supertype, comment) plus only the fields that
//! make sense for it. Descriptors are produced by the builders in
//! [`crate::builder`] and never change afterwards.
pub mod field;
pub mod number;

use crate::base::{self, BaseType};

pub use field::{FieldKind, StructField};
pub use number::Number;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub supertype: String,   // a base type name or another declared type
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Alias(AliasType),
    String(StringType),
    Number(NumberType),
    Struct(StructType),
    Array(ArrayType),
    Map(MapType),
    Enum(EnumType),
    Union(UnionType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasType {
    pub info: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringType {
    pub info: TypeInfo,
    pub pattern: Option<String>,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberType {
    pub info: TypeInfo,
    pub min: Option<Number>,
    pub max: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub info: TypeInfo,
    pub fields: Vec<StructField>,   // declaration order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub info: TypeInfo,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub info: TypeInfo,
    pub keys: String,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub info: TypeInfo,
    pub elements: Vec<EnumElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumElement {
    pub symbol: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub info: TypeInfo,
    pub variants: Vec<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeInfo {
    pub(crate) fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { name: name.into(), supertype: supertype.into(), comment: None }
    }
}

impl Type {
    pub fn info(&self) -> &TypeInfo {
        match self {
            Type::Alias(t) => &t.info,
            Type::String(t) => &t.info,
            Type::Number(t) => &t.info,
            Type::Struct(t) => &t.info,
            Type::Array(t) => &t.info,
            Type::Map(t) => &t.info,
            Type::Enum(t) => &t.info,
            Type::Union(t) => &t.info,
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn supertype(&self) -> &str {
        &self.info().supertype
    }

    pub fn comment(&self) -> Option<&str> {
        self.info().comment.as_deref()
    }

    /// Structural kind of the variant. Aliases report their supertype when
    /// it is a base type and `Any` otherwise; numbers derived from another
    /// declared type fall back to the width of their bounds.
    pub fn kind(&self) -> BaseType {
        match self {
            Type::Alias(t) => BaseType::from_name(&t.info.supertype).unwrap_or(BaseType::Any),
            Type::String(_) => BaseType::String,
            Type::Number(t) => BaseType::from_name(&t.info.supertype)
                .filter(|b| b.is_primitive())
                .or_else(|| t.min.or(t.max).map(Number::base_type))
                .unwrap_or(BaseType::Any),
            Type::Struct(_) => BaseType::Struct,
            Type::Array(_) => BaseType::Array,
            Type::Map(_) => BaseType::Map,
            Type::Enum(_) => BaseType::Enum,
            Type::Union(_) => BaseType::Union,
        }
    }

    /// Every name this type refers to, in resolution order: the supertype
    /// first, then the variant's own references. Map items precede keys.
    pub fn references(&self) -> Vec<&str> {
        let mut out = vec![self.supertype()];
        match self {
            Type::Alias(_) | Type::String(_) | Type::Number(_) | Type::Enum(_) => {}
            Type::Array(t) => out.push(&t.items),
            Type::Map(t) => {
                out.push(&t.items);
                out.push(&t.keys);
            }
            Type::Struct(t) => {
                for f in &t.fields {
                    out.extend(f.kind.references());
                }
            }
            Type::Union(t) => out.extend(t.variants.iter().map(String::as_str)),
        }
        out
    }

    /// References that name declared types rather than base types.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for r in self.references() {
            if !base::is_base_type(r) && !out.contains(&r) {
                out.push(r);
            }
        }
        out
    }
}

impl StructType {
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
