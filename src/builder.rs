//! Fluent builders for type descriptors.
//!
//! Each variant has its own builder: construct with `(supertype, name)`,
//! chain setters, then call `build()`, which consumes the builder and
//! returns an immutable [`Type`]. Builders never check referenced names;
//! that happens when the schema is finalized.
pub mod arr;
pub mod num;
pub mod obj;
pub mod string;

use crate::types::{AliasType, EnumElement, EnumType, Type, TypeInfo, UnionType};

pub use arr::{ArrayTypeBuilder, MapTypeBuilder};
pub use num::NumberTypeBuilder;
pub use obj::StructTypeBuilder;
pub use string::StringTypeBuilder;

// ------------------------------- Alias ----------------------------------- //

#[derive(Debug, Clone)]
pub struct AliasTypeBuilder {
    info: TypeInfo,
}

impl AliasTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name) }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> Type {
        Type::Alias(AliasType { info: self.info })
    }
}

// -------------------------------- Enum ----------------------------------- //

#[derive(Debug, Clone)]
pub struct EnumTypeBuilder {
    info: TypeInfo,
    elements: Vec<EnumElement>,
}

impl EnumTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name), elements: Vec::new() }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn element(mut self, symbol: impl Into<String>) -> Self {
        self.elements.push(EnumElement { symbol: symbol.into(), comment: None });
        self
    }

    pub fn element_with_comment(
        mut self,
        symbol: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        self.elements.push(EnumElement { symbol: symbol.into(), comment: Some(comment.into()) });
        self
    }

    pub fn build(self) -> Type {
        Type::Enum(EnumType { info: self.info, elements: self.elements })
    }
}

// -------------------------------- Union ---------------------------------- //

#[derive(Debug, Clone)]
pub struct UnionTypeBuilder {
    info: TypeInfo,
    variants: Vec<String>,
}

impl UnionTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name), variants: Vec::new() }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn build(self) -> Type {
        Type::Union(UnionType { info: self.info, variants: self.variants })
    }
}
