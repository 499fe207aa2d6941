//! Typed per-operation arguments.
//!
//! Each struct is built from a parsed [`Field`]. A required argument that is
//! absent, `null`, or of the wrong type yields
//! [`ResolveError::MissingArgument`]; an optional argument of the wrong type
//! is treated as absent.

use crate::document::{Field, Value};
use crate::error::{ResolveError, Result};
use crate::types::MediaId;

/// Wire name of the credential argument, followed by its alias.
const PASSWORD: &[&str] = &["password", "credential"];
/// Wire name of the category argument, followed by its alias.
const CATEGORY: &[&str] = &["type", "category"];
const USERNAME: &[&str] = &["username"];
const NAME: &[&str] = &["name"];
const ID: &[&str] = &["id"];

fn lookup<'a>(field: &'a Field, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| field.argument(name))
}

fn optional_string(field: &Field, names: &[&str]) -> Option<String> {
    match lookup(field, names) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn required_string(field: &Field, names: &[&str]) -> Result<String> {
    optional_string(field, names).ok_or_else(|| ResolveError::MissingArgument(names[0].to_string()))
}

fn optional_id(field: &Field, names: &[&str]) -> Option<MediaId> {
    match lookup(field, names) {
        Some(Value::Int(i)) => Some(MediaId(*i)),
        _ => None,
    }
}

fn required_id(field: &Field, names: &[&str]) -> Result<MediaId> {
    optional_id(field, names).ok_or_else(|| ResolveError::MissingArgument(names[0].to_string()))
}

/// Arguments of the single-record query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaArgs {
    pub id: Option<MediaId>,
    pub username: String,
    pub password: String,
}

impl MediaArgs {
    pub fn from_field(field: &Field) -> Result<Self> {
        Ok(Self {
            username: required_string(field, USERNAME)?,
            password: required_string(field, PASSWORD)?,
            id: optional_id(field, ID),
        })
    }
}

/// Arguments of the filtered-list query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaListArgs {
    pub username: String,
    pub password: String,
}

impl MediaListArgs {
    pub fn from_field(field: &Field) -> Result<Self> {
        Ok(Self {
            username: required_string(field, USERNAME)?,
            password: required_string(field, PASSWORD)?,
        })
    }
}

/// Arguments of the create mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub category: String,
}

impl CreateArgs {
    pub fn from_field(field: &Field) -> Result<Self> {
        Ok(Self {
            name: optional_string(field, NAME),
            category: required_string(field, CATEGORY)?,
        })
    }
}

/// Arguments of the update mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateArgs {
    pub id: MediaId,
    pub name: Option<String>,
    pub category: Option<String>,
}

impl UpdateArgs {
    pub fn from_field(field: &Field) -> Result<Self> {
        Ok(Self {
            id: required_id(field, ID)?,
            name: optional_string(field, NAME),
            category: optional_string(field, CATEGORY),
        })
    }
}

/// Arguments of the delete mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteArgs {
    pub id: MediaId,
}

impl DeleteArgs {
    pub fn from_field(field: &Field) -> Result<Self> {
        Ok(Self {
            id: required_id(field, ID)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(arguments: Vec<(&str, Value)>) -> Field {
        Field {
            alias: None,
            name: "test".into(),
            arguments: arguments.into_iter().map(|(n, v)| (n.to_string(), v)).collect(),
            selection: None,
        }
    }

    fn s(v: &str) -> Value {
        Value::String(v.into())
    }

    #[test]
    fn test_media_args() {
        let args = MediaArgs::from_field(&field(vec![
            ("id", Value::Int(3)),
            ("username", s("hawk")),
            ("password", s("123")),
        ]))
        .unwrap();
        assert_eq!(args.id, Some(MediaId(3)));
        assert_eq!(args.username, "hawk");
        assert_eq!(args.password, "123");
    }

    #[test]
    fn test_credential_alias() {
        let args = MediaListArgs::from_field(&field(vec![("username", s("hawk")), ("credential", s("1"))])).unwrap();
        assert_eq!(args.password, "1");
    }

    #[test]
    fn test_missing_or_mistyped_required() {
        assert_eq!(
            MediaArgs::from_field(&field(vec![("password", s("123"))])),
            Err(ResolveError::MissingArgument("username".into()))
        );
        assert_eq!(
            MediaArgs::from_field(&field(vec![("username", s("hawk")), ("password", Value::Int(123))])),
            Err(ResolveError::MissingArgument("password".into()))
        );
        assert_eq!(
            DeleteArgs::from_field(&field(vec![("id", s("5"))])),
            Err(ResolveError::MissingArgument("id".into()))
        );
        assert_eq!(
            CreateArgs::from_field(&field(vec![("name", s("clip")), ("type", Value::Null)])),
            Err(ResolveError::MissingArgument("type".into()))
        );
    }

    #[test]
    fn test_create_ignores_info() {
        let result = CreateArgs::from_field(&field(vec![("name", s("clip")), ("info", s("Video"))]));
        assert_eq!(result, Err(ResolveError::MissingArgument("type".into())));

        let args = CreateArgs::from_field(&field(vec![("category", s("Image"))])).unwrap();
        assert_eq!(args.name, None);
        assert_eq!(args.category, "Image");
    }

    #[test]
    fn test_update_optional_fields() {
        let args = UpdateArgs::from_field(&field(vec![("id", Value::Int(2)), ("name", Value::Int(1))])).unwrap();
        assert_eq!(args.id, MediaId(2));
        assert_eq!(args.name, None);
        assert_eq!(args.category, None);
    }
}
