//! Parsing via `graphql-parser`, mapped onto the catalog's document types.

use super::guard::{check_nesting, MAX_DEPTH};
use super::{Document, Field, OperationType, Value};
use crate::error::DocumentError;
use graphql_parser::query::{self as ast, Definition, OperationDefinition, Selection};

/// Parse `source` into a [`Document`].
///
/// Exactly one operation is accepted. Variables, fragments, directives, and
/// repeated argument names are rejected.
pub fn parse(source: &str) -> Result<Document, DocumentError> {
    if !check_nesting(source, MAX_DEPTH)? {
        return Err(DocumentError::Empty);
    }

    let document = ast::parse_query::<String>(source)
        .map_err(|e| DocumentError::Syntax(e.to_string().trim().to_string()))?;

    let mut definitions = document.definitions.into_iter();
    let definition = match (definitions.next(), definitions.next()) {
        (Some(definition), None) => definition,
        (None, _) => return Err(DocumentError::Empty),
        (Some(_), Some(_)) => return Err(DocumentError::Unsupported("multiple operations")),
    };

    let (operation, name, selection_set) = match definition {
        Definition::Fragment(_) => return Err(DocumentError::Unsupported("fragments")),
        Definition::Operation(OperationDefinition::SelectionSet(set)) => {
            (OperationType::Query, None, set)
        }
        Definition::Operation(OperationDefinition::Query(query)) => {
            reject_extras(!query.variable_definitions.is_empty(), !query.directives.is_empty())?;
            (OperationType::Query, query.name, query.selection_set)
        }
        Definition::Operation(OperationDefinition::Mutation(mutation)) => {
            reject_extras(
                !mutation.variable_definitions.is_empty(),
                !mutation.directives.is_empty(),
            )?;
            (OperationType::Mutation, mutation.name, mutation.selection_set)
        }
        Definition::Operation(OperationDefinition::Subscription(_)) => {
            return Err(DocumentError::UnsupportedOperation("subscription".to_string()))
        }
    };

    if selection_set.items.is_empty() {
        return Err(DocumentError::Syntax("selection set cannot be empty".to_string()));
    }

    Ok(Document {
        operation,
        name,
        fields: convert_selection(selection_set)?,
    })
}

fn reject_extras(has_variables: bool, has_directives: bool) -> Result<(), DocumentError> {
    if has_variables {
        return Err(DocumentError::Unsupported("variables"));
    }
    if has_directives {
        return Err(DocumentError::Unsupported("directives"));
    }
    Ok(())
}

fn convert_selection(set: ast::SelectionSet<'_, String>) -> Result<Vec<Field>, DocumentError> {
    set.items
        .into_iter()
        .map(|item| match item {
            Selection::Field(field) => convert_field(field),
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => {
                Err(DocumentError::Unsupported("fragments"))
            }
        })
        .collect()
}

fn convert_field(field: ast::Field<'_, String>) -> Result<Field, DocumentError> {
    let ast::Field {
        alias,
        name,
        arguments: raw_arguments,
        directives,
        selection_set,
        ..
    } = field;

    if !directives.is_empty() {
        return Err(DocumentError::Unsupported("directives"));
    }

    let mut arguments: Vec<(String, Value)> = Vec::with_capacity(raw_arguments.len());
    for (arg, value) in raw_arguments {
        if arguments.iter().any(|(seen, _)| *seen == arg) {
            return Err(DocumentError::DuplicateArgument { field: name, name: arg });
        }
        arguments.push((arg, convert_value(value)?));
    }

    let selection = if selection_set.items.is_empty() {
        None
    } else {
        Some(convert_selection(selection_set)?)
    };

    Ok(Field {
        alias,
        name,
        arguments,
        selection,
    })
}

fn convert_value(value: ast::Value<'_, String>) -> Result<Value, DocumentError> {
    Ok(match value {
        ast::Value::Variable(_) => return Err(DocumentError::Unsupported("variables")),
        ast::Value::Int(number) => Value::Int(
            number
                .as_i64()
                .ok_or_else(|| DocumentError::Syntax("integer out of range".to_string()))?,
        ),
        ast::Value::Float(f) => Value::Float(f),
        ast::Value::String(s) => Value::String(s),
        ast::Value::Boolean(b) => Value::Boolean(b),
        ast::Value::Null => Value::Null,
        ast::Value::Enum(e) => Value::Enum(e),
        ast::Value::List(items) => {
            Value::List(items.into_iter().map(convert_value).collect::<Result<_, _>>()?)
        }
        ast::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| Ok((key, convert_value(value)?)))
                .collect::<Result<_, DocumentError>>()?,
        ),
    })
}
