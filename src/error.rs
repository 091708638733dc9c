//! Errors raised while finalizing a schema.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Every variant is a construction mistake by the caller; none is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A supertype or structural reference names a type the schema does not declare.
    #[error("type `{referrer}` references undeclared type `{reference}`")]
    DanglingReference { referrer: String, reference: String },

    /// Two declared types share a name.
    #[error("type `{name}` is declared more than once")]
    DuplicateType { name: String },

    /// A type reaches itself through its references.
    #[error("reference cycle: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },

    /// A declared type uses the name of a base type.
    #[error("type `{name}` shadows a base type")]
    ReservedName { name: String },
}

impl SchemaError {
    pub fn dangling(referrer: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::DanglingReference { referrer: referrer.into(), reference: reference.into() }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    pub fn reserved(name: impl Into<String>) -> Self {
        Self::ReservedName { name: name.into() }
    }
}
