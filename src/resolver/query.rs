//! Read operations, gated by the credential check.

use super::args::{MediaArgs, MediaListArgs};
use super::Resolver;
use crate::credentials::Verification;
use crate::error::{ResolveError, Result};
use crate::types::Media;
use tracing::debug;

impl Resolver {
    /// Fetch one record by id.
    ///
    /// An unknown username does not fail the check; only a known username
    /// with a non-matching password does.
    pub(super) fn media(&self, args: MediaArgs) -> Result<Option<Media>> {
        let catalog = self.catalog();

        match catalog.credentials.verify(&args.username, &args.password)? {
            Verification::Mismatch => return Err(ResolveError::PasswordMismatch),
            Verification::NotFound => debug!(username = %args.username, "unknown username, continuing"),
            Verification::Matched => {}
        }

        Ok(args.id.and_then(|id| catalog.store.get(id)))
    }

    /// Fetch every record whose name contains the username.
    ///
    /// The username is used as a pattern twice: to pick the credential entry
    /// whose password is checked, and inside the list filter.
    pub(super) fn media_list(&self, args: MediaListArgs) -> Result<Vec<Media>> {
        let catalog = self.catalog();
        let mode = catalog.mode();

        if let Some(entry) = catalog.credentials.find_matching(&args.username)? {
            if !mode.check(&args.password, &entry.secret)? {
                return Err(ResolveError::PasswordMismatch);
            }
        } else {
            debug!(username = %args.username, "no credential matched, continuing");
        }

        let filter = mode.list_filter(&args.username)?;
        catalog.store.filter(|media| Ok(filter.is_match(&media.name)))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::error::ResolveError;
    use crate::pattern::PatternMode;
    use crate::resolver::{MediaArgs, MediaListArgs, Resolver};
    use crate::types::MediaId;
    use std::sync::Arc;

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(Catalog::default()))
    }

    fn media_args(id: Option<i64>, username: &str, password: &str) -> MediaArgs {
        MediaArgs {
            id: id.map(MediaId),
            username: username.into(),
            password: password.into(),
        }
    }

    fn list_args(username: &str, password: &str) -> MediaListArgs {
        MediaListArgs {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_media_by_id() {
        let media = resolver().media(media_args(Some(2), "hawk", "123")).unwrap().unwrap();
        assert_eq!(media.name, "media_sunset_hawk");
    }

    #[test]
    fn test_media_without_id_is_empty() {
        assert_eq!(resolver().media(media_args(None, "hawk", "123")).unwrap(), None);
        assert_eq!(resolver().media(media_args(Some(77), "hawk", "123")).unwrap(), None);
    }

    #[test]
    fn test_media_password_mismatch() {
        assert_eq!(
            resolver().media(media_args(Some(2), "hawk", "999")),
            Err(ResolveError::PasswordMismatch)
        );
    }

    #[test]
    fn test_media_unknown_user_proceeds() {
        let media = resolver().media(media_args(Some(1), "nobody", "x")).unwrap().unwrap();
        assert_eq!(media.name, "media_flag");
    }

    #[test]
    fn test_media_list_filters_by_username() {
        let names: Vec<_> = resolver()
            .media_list(list_args("hawk", "123"))
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["media_sunset_hawk", "hawk's workout"]);
    }

    #[test]
    fn test_media_list_mismatch() {
        assert_eq!(
            resolver().media_list(list_args("media_admin", "wrong")),
            Err(ResolveError::PasswordMismatch)
        );
    }

    #[test]
    fn test_media_list_username_is_a_pattern() {
        let names: Vec<_> = resolver()
            .media_list(list_args("media_admin", ".*"))
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["media_admin_canyon", "media_admin_not_flag", "hello_media_admin"]);

        // Alternation in the username widens the list filter.
        let all = resolver().media_list(list_args("flag|hawk", ".*")).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_media_list_invalid_pattern() {
        assert!(matches!(
            resolver().media_list(list_args("(", "x")),
            Err(ResolveError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_hardened_mode_list() {
        let resolver = Resolver::new(Arc::new(Catalog::seeded(PatternMode::Hardened)));

        assert_eq!(resolver.media_list(list_args("hawk", ".*")), Err(ResolveError::PasswordMismatch));
        assert!(resolver.media_list(list_args("flag|hawk", ".*")).unwrap().is_empty());
        assert_eq!(resolver.media_list(list_args("hawk", "123")).unwrap().len(), 2);
    }
}
