//! Shared catalog state.

use crate::credentials::CredentialRegistry;
use crate::pattern::PatternMode;
use crate::store::MediaStore;

/// Process-wide state, built once at startup and shared behind an `Arc`.
///
/// The store carries its own lock; the registry is immutable.
pub struct Catalog {
    pub store: MediaStore,
    pub credentials: CredentialRegistry,
}

impl Catalog {
    pub fn new(store: MediaStore, credentials: CredentialRegistry) -> Self {
        Self { store, credentials }
    }

    /// Catalog with the seed records and credentials.
    pub fn seeded(mode: PatternMode) -> Self {
        Self::new(MediaStore::seeded(), CredentialRegistry::seeded(mode))
    }

    pub fn mode(&self) -> PatternMode {
        self.credentials.mode()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded(PatternMode::default())
    }
}
