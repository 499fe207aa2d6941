//! Operation resolution.
//!
//! The schema is a closed set of operations. A field name is mapped to its
//! [`OperationKind`] through the [`OPERATIONS`] table, its arguments are
//! validated into a typed struct, and [`Resolver::resolve`] runs it against
//! the shared [`Catalog`].

mod args;
mod mutation;
mod query;

pub use args::{CreateArgs, DeleteArgs, MediaArgs, MediaListArgs, UpdateArgs};

use crate::catalog::Catalog;
use crate::document::{Field, OperationType};
use crate::error::{ResolveError, Result};
use crate::types::Media;
use std::sync::Arc;

/// The named operations the endpoint understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// Get one media record by id.
    Media,
    /// Get the media records whose name contains the username.
    MediaList,
    /// Create a new media record.
    Create,
    /// Update a media record by id.
    Update,
    /// Delete a media record by id.
    Delete,
}

/// Field name, root type, and kind of every operation.
pub const OPERATIONS: &[(&str, OperationType, OperationKind)] = &[
    ("media", OperationType::Query, OperationKind::Media),
    ("mediaList", OperationType::Query, OperationKind::MediaList),
    ("create", OperationType::Mutation, OperationKind::Create),
    ("update", OperationType::Mutation, OperationKind::Update),
    ("delete", OperationType::Mutation, OperationKind::Delete),
];

impl OperationKind {
    /// Look up the operation named `name` on the `root` type.
    pub fn lookup(root: OperationType, name: &str) -> Option<Self> {
        OPERATIONS
            .iter()
            .find(|(field, op_root, _)| *op_root == root && *field == name)
            .map(|(_, _, kind)| *kind)
    }

    /// Whether the result is a list of records rather than a single one.
    pub fn returns_list(self) -> bool {
        self == OperationKind::MediaList
    }
}

/// An operation with validated arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Media(MediaArgs),
    MediaList(MediaListArgs),
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete(DeleteArgs),
}

impl Operation {
    /// Resolve `field` on `root` to an operation and validate its arguments.
    pub fn from_field(root: OperationType, field: &Field) -> Result<Self> {
        let kind = OperationKind::lookup(root, &field.name).ok_or_else(|| ResolveError::UnknownField {
            root: root.root_name().to_string(),
            name: field.name.clone(),
        })?;

        Ok(match kind {
            OperationKind::Media => Operation::Media(MediaArgs::from_field(field)?),
            OperationKind::MediaList => Operation::MediaList(MediaListArgs::from_field(field)?),
            OperationKind::Create => Operation::Create(CreateArgs::from_field(field)?),
            OperationKind::Update => Operation::Update(UpdateArgs::from_field(field)?),
            OperationKind::Delete => Operation::Delete(DeleteArgs::from_field(field)?),
        })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Media(_) => OperationKind::Media,
            Operation::MediaList(_) => OperationKind::MediaList,
            Operation::Create(_) => OperationKind::Create,
            Operation::Update(_) => OperationKind::Update,
            Operation::Delete(_) => OperationKind::Delete,
        }
    }
}

/// Result of a successfully resolved operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A single record, or `None` for an explicit empty result.
    Media(Option<Media>),
    List(Vec<Media>),
}

/// Runs operations against the shared catalog.
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve one operation. Each call is an independent unit of work.
    pub fn resolve(&self, operation: Operation) -> Result<Resolved> {
        match operation {
            Operation::Media(args) => self.media(args).map(Resolved::Media),
            Operation::MediaList(args) => self.media_list(args).map(Resolved::List),
            Operation::Create(args) => Ok(Resolved::Media(Some(self.create(args)))),
            Operation::Update(args) => Ok(Resolved::Media(Some(self.update(args)))),
            Operation::Delete(args) => Ok(Resolved::Media(Some(self.delete(args)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Value;

    #[test]
    fn test_lookup_respects_root() {
        assert_eq!(OperationKind::lookup(OperationType::Query, "media"), Some(OperationKind::Media));
        assert_eq!(OperationKind::lookup(OperationType::Mutation, "delete"), Some(OperationKind::Delete));
        assert_eq!(OperationKind::lookup(OperationType::Mutation, "media"), None);
        assert_eq!(OperationKind::lookup(OperationType::Query, "create"), None);
    }

    #[test]
    fn test_unknown_field() {
        let field = Field {
            alias: None,
            name: "users".into(),
            arguments: vec![],
            selection: None,
        };
        assert_eq!(
            Operation::from_field(OperationType::Query, &field),
            Err(ResolveError::UnknownField {
                root: "Query".into(),
                name: "users".into()
            })
        );
    }

    #[test]
    fn test_from_field_builds_typed_args() {
        let field = Field {
            alias: Some("gone".into()),
            name: "delete".into(),
            arguments: vec![("id".into(), Value::Int(4))],
            selection: None,
        };
        let op = Operation::from_field(OperationType::Mutation, &field).unwrap();
        assert_eq!(op.kind(), OperationKind::Delete);
        assert!(!op.kind().returns_list());
    }
}
