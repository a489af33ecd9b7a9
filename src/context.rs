//! Per-virtual-user scenario state.
//!
//! Each virtual user owns one `ScenarioContext`, stored in goose session
//! data. Scenario steps read and write it to pass generated payloads and
//! fetched identifiers between one another; last write wins per field.

use crate::data::{LegoSetDraft, ListingDraft, UserDraft};

/// The variable store shared across one virtual user's scenario steps.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    /// Registration payload staged by the user-data generator.
    pub user: Option<UserDraft>,
    /// User ids fetched from the service, consumed LIFO.
    pub user_ids: Vec<String>,
    /// Length of `user_ids` at fetch time.
    pub user_count: usize,
    /// The user id most recently popped from `user_ids`.
    pub user_id: Option<String>,
    /// Catalog-item payload staged by the item-data generator.
    pub lego_set: Option<LegoSetDraft>,
    /// Catalog-item ids fetched from the service, read non-destructively.
    pub lego_set_ids: Vec<String>,
    /// Selected (or upload-created) catalog-item id.
    pub lego_set_id: Option<String>,
    /// Listing payload staged by the listing-data generator.
    pub listing: Option<ListingDraft>,
}

impl ScenarioContext {
    /// Record a freshly fetched user-id list and its length.
    pub fn store_user_ids(&mut self, ids: Vec<String>) {
        self.user_count = ids.len();
        self.user_ids = ids;
    }

    /// Pop the most recent user id, emptying the list over repeated calls.
    /// Mirrors the result into `user_id`; `None` once exhausted.
    pub fn pop_user_id(&mut self) -> Option<String> {
        self.user_id = self.user_ids.pop();
        self.user_id.clone()
    }

    /// Record a freshly fetched catalog-item id list.
    pub fn store_lego_set_ids(&mut self, ids: Vec<String>) {
        self.lego_set_ids = ids;
    }

    /// Read the first catalog-item id without consuming it. Every call
    /// returns the same id until the list is refetched.
    pub fn select_lego_set_id(&mut self) -> Option<String> {
        self.lego_set_id = self.lego_set_ids.first().cloned();
        self.lego_set_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pop_user_id_is_lifo() {
        let mut ctx = ScenarioContext::default();
        ctx.store_user_ids(ids(&["1", "2", "3"]));
        assert_eq!(ctx.user_count, 3);

        assert_eq!(ctx.pop_user_id().as_deref(), Some("3"));
        assert_eq!(ctx.pop_user_id().as_deref(), Some("2"));
        assert_eq!(ctx.pop_user_id().as_deref(), Some("1"));
        // Fourth call: the list is exhausted.
        assert_eq!(ctx.pop_user_id(), None);
        assert_eq!(ctx.user_id, None);
    }

    #[test]
    fn test_pop_user_id_mirrors_into_user_id() {
        let mut ctx = ScenarioContext::default();
        ctx.store_user_ids(ids(&["a", "b"]));
        ctx.pop_user_id();
        assert_eq!(ctx.user_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_select_lego_set_id_non_destructive() {
        let mut ctx = ScenarioContext::default();
        ctx.store_lego_set_ids(ids(&["7", "8", "9"]));

        for _ in 0..4 {
            assert_eq!(ctx.select_lego_set_id().as_deref(), Some("7"));
        }
        assert_eq!(ctx.lego_set_ids.len(), 3);
    }

    #[test]
    fn test_select_lego_set_id_empty() {
        let mut ctx = ScenarioContext::default();
        assert_eq!(ctx.select_lego_set_id(), None);
        assert_eq!(ctx.lego_set_id, None);
    }

    #[test]
    fn test_store_user_ids_resets_count() {
        let mut ctx = ScenarioContext::default();
        ctx.store_user_ids(ids(&["1", "2"]));
        ctx.pop_user_id();
        ctx.store_user_ids(Vec::new());
        assert_eq!(ctx.user_count, 0);
        assert_eq!(ctx.pop_user_id(), None);
    }
}
