//! In-memory media store.

use crate::error::Result;
use crate::types::{seed_media, Media, MediaId};
use parking_lot::RwLock;
use rand::Rng;
use tracing::debug;

/// Upper bound (exclusive) for generated media ids.
pub const MAX_GENERATED_ID: i64 = 100_000;

/// The process-resident media collection.
///
/// Records keep insertion order. All by-id operations act on the first
/// record with a matching id. Readers and writers are serialized through a
/// single `RwLock`, so a write never overlaps an iteration.
pub struct MediaStore {
    records: RwLock<Vec<Media>>,
}

impl MediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a store holding the seed records.
    pub fn seeded() -> Self {
        Self::from_records(seed_media())
    }

    pub fn from_records(records: Vec<Media>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    // --- Reads ---

    /// First record with `id`, if any.
    pub fn get(&self, id: MediaId) -> Option<Media> {
        self.records.read().iter().find(|m| m.id == id).cloned()
    }

    /// Snapshot of every record in store order.
    pub fn list(&self) -> Vec<Media> {
        self.records.read().clone()
    }

    /// Records accepted by `predicate`, in store order.
    ///
    /// The whole scan runs under one read lock; the first predicate error
    /// aborts it.
    pub fn filter<F>(&self, mut predicate: F) -> Result<Vec<Media>>
    where
        F: FnMut(&Media) -> Result<bool>,
    {
        let records = self.records.read();
        let mut result = Vec::new();
        for media in records.iter() {
            if predicate(media)? {
                result.push(media.clone());
            }
        }
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    // --- Writes ---

    /// Append a record under a freshly generated id in `[0, MAX_GENERATED_ID)`.
    pub fn insert(&self, name: impl Into<String>, category: impl Into<String>) -> Media {
        let id = MediaId(rand::rng().random_range(0..MAX_GENERATED_ID));
        let media = Media {
            id,
            name: name.into(),
            category: category.into(),
        };

        self.records.write().push(media.clone());
        debug!(id = %id, name = %media.name, "inserted media");

        media
    }

    /// Overwrite the supplied fields of the first record with `id`.
    ///
    /// Returns the updated record, or [`Media::empty`] if nothing matched.
    pub fn update(&self, id: MediaId, name: Option<String>, category: Option<String>) -> Media {
        let mut records = self.records.write();

        let Some(media) = records.iter_mut().find(|m| m.id == id) else {
            debug!(id = %id, "update matched no media");
            return Media::empty();
        };

        if let Some(name) = name {
            media.name = name;
        }
        if let Some(category) = category {
            media.category = category;
        }
        debug!(id = %id, "updated media");

        media.clone()
    }

    /// Remove the first record with `id`.
    ///
    /// Returns the removed record, or [`Media::empty`] if nothing matched.
    pub fn delete(&self, id: MediaId) -> Media {
        let mut records = self.records.write();

        match records.iter().position(|m| m.id == id) {
            Some(index) => {
                let removed = records.remove(index);
                debug!(id = %id, remaining = records.len(), "deleted media");
                removed
            }
            None => {
                debug!(id = %id, "delete matched no media");
                Media::empty()
            }
        }
    }
}

impl Default for MediaStore {
    fn default() -> Self {
        Self::new()
    }
}
