//! The closed set of built-in type names.
//!
//! Base types are always considered resolved: they are never declared by a
//! schema and never appear in its type sequence.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
    Timestamp,
    Symbol,
    Uuid,
    Struct,
    Array,
    Map,
    Enum,
    Union,
    Any,
}

impl BaseType {
    pub const ALL: [BaseType; 18] = [
        BaseType::Bool,
        BaseType::Int8,
        BaseType::Int16,
        BaseType::Int32,
        BaseType::Int64,
        BaseType::Float32,
        BaseType::Float64,
        BaseType::String,
        BaseType::Bytes,
        BaseType::Timestamp,
        BaseType::Symbol,
        BaseType::Uuid,
        BaseType::Struct,
        BaseType::Array,
        BaseType::Map,
        BaseType::Enum,
        BaseType::Union,
        BaseType::Any,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let base = match name {
            "Bool" => BaseType::Bool,
            "Int8" => BaseType::Int8,
            "Int16" => BaseType::Int16,
            "Int32" => BaseType::Int32,
            "Int64" => BaseType::Int64,
            "Float32" => BaseType::Float32,
            "Float64" => BaseType::Float64,
            "String" => BaseType::String,
            "Bytes" => BaseType::Bytes,
            "Timestamp" => BaseType::Timestamp,
            "Symbol" => BaseType::Symbol,
            "UUID" => BaseType::Uuid,
            "Struct" => BaseType::Struct,
            "Array" => BaseType::Array,
            "Map" => BaseType::Map,
            "Enum" => BaseType::Enum,
            "Union" => BaseType::Union,
            "Any" => BaseType::Any,
            _ => return None,
        };
        Some(base)
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseType::Bool => "Bool",
            BaseType::Int8 => "Int8",
            BaseType::Int16 => "Int16",
            BaseType::Int32 => "Int32",
            BaseType::Int64 => "Int64",
            BaseType::Float32 => "Float32",
            BaseType::Float64 => "Float64",
            BaseType::String => "String",
            BaseType::Bytes => "Bytes",
            BaseType::Timestamp => "Timestamp",
            BaseType::Symbol => "Symbol",
            BaseType::Uuid => "UUID",
            BaseType::Struct => "Struct",
            BaseType::Array => "Array",
            BaseType::Map => "Map",
            BaseType::Enum => "Enum",
            BaseType::Union => "Union",
            BaseType::Any => "Any",
        }
    }

    /// Scalar kinds carry no references of their own.
    pub fn is_primitive(self) -> bool {
        !matches!(
            self,
            BaseType::Struct
                | BaseType::Array
                | BaseType::Map
                | BaseType::Enum
                | BaseType::Union
                | BaseType::Any
        )
    }
}

pub fn is_base_type(name: &str) -> bool {
    BaseType::from_name(name).is_some()
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
