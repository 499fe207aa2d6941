//! Executes query documents and builds the response envelope.

use crate::document::{self, Field, OperationType};
use crate::error::{ResolveError, Result};
use crate::resolver::{Operation, Resolved, Resolver};
use crate::types::Media;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Subfields selectable on a media record.
const MEDIA_FIELDS: &[&str] = &["id", "name", "type", "__typename"];

/// One entry of the response `errors` list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

/// The `{"data": ..., "errors": [...]}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    pub data: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorEntry>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs every root field of a document through the resolver.
#[derive(Clone)]
pub struct Executor {
    resolver: Resolver,
}

impl Executor {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Parse and execute `source`.
    ///
    /// A document that fails to parse yields `data: null` and a single error.
    /// Otherwise each root field resolves on its own: a failing field is
    /// `null` in `data` and adds an error, and its siblings are unaffected.
    /// Root fields that share a response key are not run at all.
    pub fn execute(&self, source: &str) -> Response {
        let document = match document::parse(source) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "rejected query document");
                return Response {
                    data: Value::Null,
                    errors: vec![ErrorEntry {
                        message: e.to_string(),
                        path: None,
                    }],
                };
            }
        };

        let mut key_counts: HashMap<&str, usize> = HashMap::new();
        for field in &document.fields {
            *key_counts.entry(field.response_key()).or_default() += 1;
        }

        let mut data = Map::new();
        let mut errors = Vec::new();

        for field in &document.fields {
            let key = field.response_key().to_string();
            let outcome = if key_counts[key.as_str()] > 1 {
                // Fields sharing a response key never run; report the key once.
                if data.contains_key(&key) {
                    continue;
                }
                Err(ResolveError::ConflictingKey(key.clone()))
            } else {
                self.execute_field(document.operation, field)
            };

            match outcome {
                Ok(value) => {
                    data.insert(key, value);
                }
                Err(e) => {
                    warn!(field = %field.name, error = %e, "field resolution failed");
                    data.insert(key.clone(), Value::Null);
                    errors.push(ErrorEntry {
                        message: e.to_string(),
                        path: Some(vec![key]),
                    });
                }
            }
        }

        Response {
            data: Value::Object(data),
            errors,
        }
    }

    fn execute_field(&self, root: OperationType, field: &Field) -> Result<Value> {
        let operation = Operation::from_field(root, field)?;
        let selection = validate_selection(field)?;

        debug!(field = %field.name, kind = ?operation.kind(), "resolving field");
        let resolved = self.resolver.resolve(operation)?;

        Ok(match resolved {
            Resolved::Media(Some(media)) => project(&media, selection),
            Resolved::Media(None) => Value::Null,
            Resolved::List(records) => {
                Value::Array(records.iter().map(|media| project(media, selection)).collect())
            }
        })
    }
}

/// Check the subselection of a root field before anything executes.
fn validate_selection(field: &Field) -> Result<&[Field]> {
    let selection = field
        .selection
        .as_deref()
        .ok_or_else(|| ResolveError::MissingSelection(field.name.clone()))?;

    for sub in selection {
        if !MEDIA_FIELDS.contains(&sub.name.as_str()) {
            return Err(ResolveError::UnknownSubfield {
                parent: "Media".to_string(),
                name: sub.name.clone(),
            });
        }
        if sub.selection.is_some() {
            return Err(ResolveError::ScalarSelection(sub.name.clone()));
        }
    }
    Ok(selection)
}

fn project(media: &Media, selection: &[Field]) -> Value {
    let mut object = Map::new();
    for sub in selection {
        let value = match sub.name.as_str() {
            "id" => Value::from(media.id.0),
            "name" => Value::from(media.name.clone()),
            "type" => Value::from(media.category.clone()),
            _ => Value::from("Media"),
        };
        object.insert(sub.response_key().to_string(), value);
    }
    Value::Object(object)
}
