use crate::types::{ArrayType, MapType, Type, TypeInfo};

/// Items default to `Any` until set.
#[derive(Debug, Clone)]
pub struct ArrayTypeBuilder {
    info: TypeInfo,
    items: String,
}

impl ArrayTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name), items: "Any".to_string() }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn items(mut self, items: impl Into<String>) -> Self {
        self.items = items.into();
        self
    }

    pub fn build(self) -> Type {
        Type::Array(ArrayType { info: self.info, items: self.items })
    }
}

/// Keys and items default to `Any` until set.
#[derive(Debug, Clone)]
pub struct MapTypeBuilder {
    info: TypeInfo,
    keys: String,
    items: String,
}

impl MapTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            info: TypeInfo::new(supertype, name),
            keys: "Any".to_string(),
            items: "Any".to_string(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    pub fn keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = keys.into();
        self
    }

    pub fn items(mut self, items: impl Into<String>) -> Self {
        self.items = items.into();
        self
    }

    pub fn build(self) -> Type {
        Type::Map(MapType { info: self.info, keys: self.keys, items: self.items })
    }
}
