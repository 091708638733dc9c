//! Schema aggregation and finalization.
//!
//! A [`SchemaBuilder`] collects type and resource descriptors in any order.
//! [`SchemaBuilder::finalize`] orders the types so that each one follows
//! everything it refers to and hands back an immutable [`Schema`].

use tracing::debug;

use crate::error::Result;
use crate::resolve::resolve_order;
use crate::resource::Resource;
use crate::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    namespace: Option<String>,
    version: Option<i32>,
    base: Option<String>,
    comment: Option<String>,
    types: Vec<Type>,           // dependency order
    resources: Vec<Resource>,   // declaration order
}

#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    proto: Schema,
}

impl Schema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Declared types; any type referenced by another appears before it.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn find_type(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Looks a resource up by its display name.
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name.as_deref() == Some(name))
    }
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            proto: Schema {
                name: name.into(),
                namespace: None,
                version: None,
                base: None,
                comment: None,
                types: Vec::new(),
                resources: Vec::new(),
            },
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.proto.namespace = Some(namespace.into());
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.proto.version = Some(version);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.proto.base = Some(base.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.proto.comment = Some(comment.into());
        self
    }

    pub fn add_type(mut self, t: Type) -> Self {
        self.proto.types.push(t);
        self
    }

    pub fn add_resource(mut self, r: Resource) -> Self {
        self.proto.resources.push(r);
        self
    }

    /// Non-consuming variant of [`Self::add_type`] for builders held in a loop.
    pub fn push_type(&mut self, t: Type) -> &mut Self {
        self.proto.types.push(t);
        self
    }

    pub fn push_resource(&mut self, r: Resource) -> &mut Self {
        self.proto.resources.push(r);
        self
    }

    /// Orders the declared types by dependency and returns the finished
    /// schema. Fails on the first duplicate or base-type name, dangling
    /// reference, or reference cycle; no partial schema is produced.
    pub fn finalize(self) -> Result<Schema> {
        let mut schema = self.proto;
        debug!(
            schema = %schema.name,
            types = schema.types.len(),
            resources = schema.resources.len(),
            "finalizing schema"
        );

        let order = resolve_order(&schema.types)?;

        let mut slots: Vec<Option<Type>> = schema.types.into_iter().map(Some).collect();
        schema.types = order.into_iter().filter_map(|i| slots[i].take()).collect();

        debug!(schema = %schema.name, types = schema.types.len(), "schema finalized");
        Ok(schema)
    }
}
