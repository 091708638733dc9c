use serde_json::Value;

/// What a struct field holds: a named type, or an inline array or map whose
/// element types are named directly on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Named(String),
    Array { items: String },
    Map { keys: String, items: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub kind: FieldKind,
    pub optional: bool,
    pub default: Option<Value>,   // arbitrary literal
    pub comment: Option<String>,
}

impl FieldKind {
    /// The type name the field is declared with (`Array`/`Map` for inline
    /// collections).
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Named(name) => name,
            FieldKind::Array { .. } => "Array",
            FieldKind::Map { .. } => "Map",
        }
    }

    /// Names the field depends on. Map items precede keys.
    pub fn references(&self) -> Vec<&str> {
        match self {
            FieldKind::Named(name) => vec![name.as_str()],
            FieldKind::Array { items } => vec![items.as_str()],
            FieldKind::Map { keys, items } => vec![items.as_str(), keys.as_str()],
        }
    }
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Named(ty.into()))
    }

    pub fn array(name: impl Into<String>, items: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Array { items: items.into() })
    }

    pub fn map(name: impl Into<String>, keys: impl Into<String>, items: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Map { keys: keys.into(), items: items.into() })
    }

    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, optional: false, default: None, comment: None }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
