//! Write operations. Mutations carry no credential check.

use super::args::{CreateArgs, DeleteArgs, UpdateArgs};
use super::Resolver;
use crate::types::Media;

impl Resolver {
    pub(super) fn create(&self, args: CreateArgs) -> Media {
        self.catalog()
            .store
            .insert(args.name.unwrap_or_default(), args.category)
    }

    /// Returns the updated record, or the empty record if the id is unknown.
    pub(super) fn update(&self, args: UpdateArgs) -> Media {
        self.catalog().store.update(args.id, args.name, args.category)
    }

    /// Returns the removed record, or the empty record if the id is unknown.
    pub(super) fn delete(&self, args: DeleteArgs) -> Media {
        self.catalog().store.delete(args.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::resolver::{CreateArgs, DeleteArgs, Resolver, UpdateArgs};
    use crate::store::MAX_GENERATED_ID;
    use crate::types::MediaId;
    use std::sync::Arc;

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_create_then_get() {
        let resolver = resolver();
        let created = resolver.create(CreateArgs {
            name: Some("clip".into()),
            category: "Video".into(),
        });

        assert!((0..MAX_GENERATED_ID).contains(&created.id.0));
        assert_eq!(resolver.catalog().store.len(), 7);

        let last = resolver.catalog().store.list().pop().unwrap();
        assert_eq!(last, created);
    }

    #[test]
    fn test_create_without_name() {
        let created = resolver().create(CreateArgs {
            name: None,
            category: "Image".into(),
        });
        assert_eq!(created.name, "");
        assert_eq!(created.category, "Image");
    }

    #[test]
    fn test_update_category_only() {
        let updated = resolver().update(UpdateArgs {
            id: MediaId(3),
            name: None,
            category: Some("Image".into()),
        });
        assert_eq!(updated.name, "media_admin_canyon");
        assert_eq!(updated.category, "Image");
    }

    #[test]
    fn test_delete_twice() {
        let resolver = resolver();

        let removed = resolver.delete(DeleteArgs { id: MediaId(2) });
        assert_eq!(removed.name, "media_sunset_hawk");

        assert!(resolver.delete(DeleteArgs { id: MediaId(2) }).is_empty());
        assert_eq!(resolver.catalog().store.len(), 5);
    }
}
