//! Static credential registry.

use crate::error::Result;
use crate::pattern::{self, PatternMode};
use crate::types::{seed_credentials, Credential};

/// Outcome of a credential check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Matched,
    NotFound,
    Mismatch,
}

/// Read-only set of username/secret pairs, fixed at construction.
#[derive(Clone, Debug)]
pub struct CredentialRegistry {
    entries: Vec<Credential>,
    mode: PatternMode,
}

impl CredentialRegistry {
    pub fn new(entries: Vec<Credential>, mode: PatternMode) -> Self {
        Self { entries, mode }
    }

    /// Registry holding the seed credentials.
    pub fn seeded(mode: PatternMode) -> Self {
        Self::new(seed_credentials(), mode)
    }

    pub fn entries(&self) -> &[Credential] {
        &self.entries
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// Check `pattern` against the secret of the first entry named `username`.
    ///
    /// The username must match exactly. In permissive mode the pattern only
    /// has to match somewhere inside the secret, so `.*` or an empty pattern
    /// passes for any known user.
    pub fn verify(&self, username: &str, pattern: &str) -> Result<Verification> {
        let Some(entry) = self.entries.iter().find(|c| c.username == username) else {
            return Ok(Verification::NotFound);
        };

        if self.mode.check(pattern, &entry.secret)? {
            Ok(Verification::Matched)
        } else {
            Ok(Verification::Mismatch)
        }
    }

    /// First entry whose username matches `username_pattern`.
    ///
    /// Permissive mode treats the argument as a regex; hardened mode requires
    /// an exact username.
    pub fn find_matching(&self, username_pattern: &str) -> Result<Option<&Credential>> {
        if self.mode.is_hardened() {
            return Ok(self.entries.iter().find(|c| c.username == username_pattern));
        }

        let re = pattern::compile(username_pattern)?;
        Ok(self.entries.iter().find(|c| re.is_match(&c.username)))
    }
}

impl Default for CredentialRegistry {
    fn default() -> Self {
        Self::seeded(PatternMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    #[test]
    fn test_verify_outcomes() {
        let registry = CredentialRegistry::default();

        assert_eq!(registry.verify("hawk", "123").unwrap(), Verification::Matched);
        assert_eq!(registry.verify("hawk", "999").unwrap(), Verification::Mismatch);
        assert_eq!(registry.verify("nobody", "x").unwrap(), Verification::NotFound);
    }

    #[test]
    fn test_verify_wildcard_passes() {
        let registry = CredentialRegistry::default();

        assert_eq!(registry.verify("media_admin", ".*").unwrap(), Verification::Matched);
        assert_eq!(registry.verify("media_admin", "").unwrap(), Verification::Matched);
        assert_eq!(registry.verify("media_admin", "matching").unwrap(), Verification::Matched);
    }

    #[test]
    fn test_verify_username_is_exact() {
        let registry = CredentialRegistry::default();
        assert_eq!(registry.verify("haw", "123").unwrap(), Verification::NotFound);
    }

    #[test]
    fn test_first_duplicate_username_wins() {
        let registry = CredentialRegistry::new(
            vec![Credential::new("dup", "first"), Credential::new("dup", "second")],
            PatternMode::Permissive,
        );

        assert_eq!(registry.verify("dup", "second").unwrap(), Verification::Mismatch);
        assert_eq!(registry.verify("dup", "first").unwrap(), Verification::Matched);
    }

    #[test]
    fn test_verify_bad_pattern() {
        let registry = CredentialRegistry::default();
        assert!(matches!(
            registry.verify("hawk", "["),
            Err(ResolveError::InvalidPattern { .. })
        ));
        // Unknown users never reach the pattern compiler.
        assert_eq!(registry.verify("nobody", "[").unwrap(), Verification::NotFound);
    }

    #[test]
    fn test_find_matching() {
        let registry = CredentialRegistry::default();

        let entry = registry.find_matching("hawk").unwrap().unwrap();
        assert_eq!(entry.secret, "123");

        let entry = registry.find_matching("admin").unwrap().unwrap();
        assert_eq!(entry.username, "media_admin");

        assert!(registry.find_matching("zzz").unwrap().is_none());
    }

    #[test]
    fn test_hardened_registry() {
        let registry = CredentialRegistry::seeded(PatternMode::Hardened);

        assert_eq!(registry.verify("hawk", ".*").unwrap(), Verification::Mismatch);
        assert_eq!(registry.verify("hawk", "123").unwrap(), Verification::Matched);
        assert!(registry.find_matching("admin").unwrap().is_none());
        assert!(registry.find_matching("(").unwrap().is_none());
    }
}
