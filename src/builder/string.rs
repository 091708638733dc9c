use crate::types::{AliasType, StringType, Type, TypeInfo};

/// Builds a constrained string type.
///
/// A builder left without a pattern, size bounds or enumerated values builds
/// an [`Type::Alias`] of its supertype instead, so plain renames carry no
/// empty constraint fields.
#[derive(Debug, Clone)]
pub struct StringTypeBuilder {
    info: TypeInfo,
    pattern: Option<String>,
    min_size: Option<i32>,
    max_size: Option<i32>,
    values: Vec<String>,
}

impl StringTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            info: TypeInfo::new(supertype, name),
            pattern: None,
            min_size: None,
            max_size: None,
            values: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min_size(mut self, min_size: i32) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(mut self, max_size: i32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    fn is_unconstrained(&self) -> bool {
        self.pattern.is_none()
            && self.min_size.is_none()
            && self.max_size.is_none()
            && self.values.is_empty()
    }

    pub fn build(self) -> Type {
        if self.is_unconstrained() {
            return Type::Alias(AliasType { info: self.info });
        }
        Type::String(StringType {
            info: self.info,
            pattern: self.pattern,
            min_size: self.min_size,
            max_size: self.max_size,
            values: self.values,
        })
    }
}
