//! Core types for the media catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a media record.
///
/// Ids are not unique: the seed data carries a duplicate, and by-id
/// operations resolve to the first record in store order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl fmt::Debug for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaId({})", self.0)
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MediaId {
    fn from(id: i64) -> Self {
        MediaId(id)
    }
}

/// A single media record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    pub name: String,
    /// Free-form label such as "Video" or "Image". Exposed as `type`.
    #[serde(rename = "type")]
    pub category: String,
}

impl Media {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: MediaId(id),
            name: name.into(),
            category: category.into(),
        }
    }

    /// The zero-valued record returned by update/delete when no id matches.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A username/secret pair. Secrets are held and compared in plain form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

/// Records the catalog starts with.
pub fn seed_media() -> Vec<Media> {
    vec![
        Media::new(
            1,
            "media_flag",
            "Look at the ldap server at port 80. Can you somehow extract the data inside it? \
             Hint 1: the login username is autofilled for you. Hint 2: google is your best friend.",
        ),
        Media::new(2, "media_sunset_hawk", "Video"),
        Media::new(3, "media_admin_canyon", "Video"),
        Media::new(4, "media_admin_not_flag", "Video"),
        Media::new(5, "hello_media_admin", "Video"),
        Media::new(5, "hawk's workout", "Image"),
    ]
}

/// Credentials the registry starts with.
pub fn seed_credentials() -> Vec<Credential> {
    vec![
        Credential::new("media_admin", "bad_matching_practice"),
        Credential::new("hawk", "123"),
    ]
}
