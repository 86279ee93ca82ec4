//! Session-lifetime cache for the prize catalog

use dailycase_core::PrizeItem;
use std::sync::RwLock;

/// Read-only reference data for the reveal animation.
///
/// Filled once per session from the cases service. If the fetch fails the
/// cache stays unfilled; dependent code must treat that as "still loading"
/// and never fabricate items. Catalog size is small (tens of items), so
/// reads hand out clones.
pub struct CatalogCache {
    items: RwLock<Option<Vec<PrizeItem>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(None),
        }
    }

    /// Store the fetched catalog. The first fill wins; the catalog is
    /// immutable for the rest of the session. Returns whether the items
    /// were stored.
    pub fn fill(&self, items: Vec<PrizeItem>) -> bool {
        if let Ok(mut slot) = self.items.write() {
            if slot.is_none() {
                *slot = Some(items);
                return true;
            }
        }
        false
    }

    /// Snapshot of the catalog, `None` while unfilled
    pub fn items(&self) -> Option<Vec<PrizeItem>> {
        self.items.read().ok()?.clone()
    }

    /// Look up a single item by id
    pub fn get(&self, id: i64) -> Option<PrizeItem> {
        let slot = self.items.read().ok()?;
        slot.as_ref()?.iter().find(|item| item.id == id).cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.items
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().map(Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailycase_core::{Rarity, RewardKind};

    fn item(id: i64, name: &str) -> PrizeItem {
        PrizeItem {
            id,
            name: name.to_string(),
            description: String::new(),
            rarity: Rarity::Common,
            kind: RewardKind::Currency,
            value: 100,
            chance: 10.0,
            icon: "Coins".to_string(),
        }
    }

    #[test]
    fn starts_unloaded() {
        let cache = CatalogCache::new();
        assert!(!cache.is_loaded());
        assert!(cache.items().is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn first_fill_wins() {
        let cache = CatalogCache::new();
        assert!(cache.fill(vec![item(1, "a"), item(2, "b")]));
        assert!(!cache.fill(vec![item(3, "c")]));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(2).unwrap().name, "b");
        assert!(cache.get(3).is_none());
    }

    #[test]
    fn empty_fill_still_counts_as_loaded() {
        // A service that legitimately returns zero items is "loaded";
        // spin triggers are gated separately on emptiness.
        let cache = CatalogCache::new();
        assert!(cache.fill(Vec::new()));
        assert!(cache.is_loaded());
        assert!(cache.is_empty());
    }
}
