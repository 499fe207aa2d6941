//! Query documents.
//!
//! Documents are parsed with `graphql-parser` and narrowed to the subset the
//! endpoint needs: one anonymous or named `query`/`mutation` operation with a
//! selection set of fields, each with optional alias, literal arguments, and
//! subselection. Variables, fragments, and directives are rejected.

mod guard;
mod parser;

pub use guard::MAX_DEPTH;
pub use parser::parse;

/// Root operation type of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
}

impl OperationType {
    /// Name of the root object type.
    pub fn root_name(self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
        }
    }
}

/// Literal argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
    Null,
}

/// A selected field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<(String, Value)>,
    pub selection: Option<Vec<Field>>,
}

impl Field {
    /// Key under which this field's result appears in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Value of argument `name`, if present. Names are unique per field.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }
}

/// A parsed document: one operation over a set of root fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub operation: OperationType,
    pub name: Option<String>,
    pub fields: Vec<Field>,
}
