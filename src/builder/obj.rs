use crate::types::{StructField, StructType, Type, TypeInfo};

#[derive(Debug, Clone)]
pub struct StructTypeBuilder {
    info: TypeInfo,
    fields: Vec<StructField>,
}

impl StructTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name), fields: Vec::new() }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    /// Appends a field. Field names are not checked for uniqueness.
    pub fn field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    /// Shorthand for a required inline array field.
    pub fn array_field(self, name: impl Into<String>, items: impl Into<String>) -> Self {
        self.field(StructField::array(name, items))
    }

    /// Shorthand for a required inline map field.
    pub fn map_field(
        self,
        name: impl Into<String>,
        keys: impl Into<String>,
        items: impl Into<String>,
    ) -> Self {
        self.field(StructField::map(name, keys, items))
    }

    pub fn build(self) -> Type {
        Type::Struct(StructType { info: self.info, fields: self.fields })
    }
}
