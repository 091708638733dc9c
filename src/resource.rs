//! Service operation descriptors.
use indexmap::IndexMap;
use serde_json::Value;

pub const DEFAULT_EXPECTED: &str = "OK";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub type_name: String,   // the type the operation produces or accepts
    pub method: String,
    pub path: String,        // path template, e.g. `/contacts/{id}`
    pub name: Option<String>,
    pub comment: Option<String>,
    pub inputs: Vec<ResourceInput>,
    pub outputs: Vec<ResourceOutput>,
    pub auth: Option<ResourceAuth>,
    pub expected: String,
    /// Keyed by outcome symbol, in first-registration order.
    pub exceptions: IndexMap<String, ExceptionDef>,
}

/// One request input. The path/query/header tags are independent of each
/// other; nothing stops an input from carrying more than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInput {
    pub name: String,
    pub type_name: String,
    pub path_param: bool,
    pub query_param: Option<String>,
    pub header: Option<String>,
    pub optional: bool,
    pub default: Option<Value>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutput {
    pub name: String,
    pub type_name: String,
    pub header: Option<String>,
    pub optional: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAuth {
    pub authenticate: bool,
    pub action: Option<String>,
    pub resource: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionDef {
    pub type_name: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    proto: Resource,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Resource {
    /// Input bound to a `{name}` segment of the path template.
    pub fn path_inputs(&self) -> impl Iterator<Item = &ResourceInput> {
        self.inputs.iter().filter(|i| i.path_param)
    }

    /// The input carrying the request body: neither path, query nor header.
    pub fn body_input(&self) -> Option<&ResourceInput> {
        self.inputs.iter().find(|i| !i.path_param && i.query_param.is_none() && i.header.is_none())
    }
}

impl ResourceInput {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            path_param: false,
            query_param: None,
            header: None,
            optional: false,
            default: None,
            comment: None,
        }
    }

    pub fn path_param(mut self) -> Self {
        self.path_param = true;
        self
    }

    pub fn query_param(mut self, param: impl Into<String>) -> Self {
        self.query_param = Some(param.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
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

impl ResourceOutput {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            header: None,
            optional: false,
            comment: None,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ResourceAuth {
    /// Only require an authenticated caller.
    pub fn authenticate() -> Self {
        Self { authenticate: true, action: None, resource: None, domain: None }
    }

    /// Require authorization of `action` on `resource`.
    pub fn authorize(action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            authenticate: false,
            action: Some(action.into()),
            resource: Some(resource.into()),
            domain: None,
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

impl ResourceBuilder {
    pub fn new(
        type_name: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            proto: Resource {
                type_name: type_name.into(),
                method: method.into(),
                path: path.into(),
                name: None,
                comment: None,
                inputs: Vec::new(),
                outputs: Vec::new(),
                auth: None,
                expected: DEFAULT_EXPECTED.to_string(),
                exceptions: IndexMap::new(),
            },
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.proto.comment = Some(comment.into());
        self
    }

    /// Display name of the operation.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.proto.name = Some(name.into());
        self
    }

    pub fn input(mut self, input: ResourceInput) -> Self {
        self.proto.inputs.push(input);
        self
    }

    pub fn output(mut self, output: ResourceOutput) -> Self {
        self.proto.outputs.push(output);
        self
    }

    pub fn auth(mut self, auth: ResourceAuth) -> Self {
        self.proto.auth = Some(auth);
        self
    }

    pub fn expected(mut self, symbol: impl Into<String>) -> Self {
        self.proto.expected = symbol.into();
        self
    }

    /// Registers the exception for an outcome symbol. A later registration
    /// under the same symbol replaces the earlier one.
    pub fn exception(
        mut self,
        symbol: impl Into<String>,
        type_name: impl Into<String>,
        comment: Option<&str>,
    ) -> Self {
        let def = ExceptionDef {
            type_name: type_name.into(),
            comment: comment.map(str::to_string),
        };
        self.proto.exceptions.insert(symbol.into(), def);
        self
    }

    pub fn build(self) -> Resource {
        self.proto
    }
}
