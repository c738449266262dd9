use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::AppError;
use crate::models::favorite::FavoriteRef;
use crate::storage::KeyValueStore;

pub const BOOKMARKS_KEY: &str = "bookmarks";

pub struct FavoriteStore {
    kv: Arc<dyn KeyValueStore>,
    items: Mutex<Vec<FavoriteRef>>,
}

impl FavoriteStore {
    /// Reads the persisted list. A value that does not decode is treated as
    /// if nothing had been saved.
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let items = match kv.get(BOOKMARKS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<FavoriteRef>>(&raw) {
                Ok(items) => dedup_by_id(items),
                Err(err) => {
                    warn!("Discarding corrupted {} value: {}", BOOKMARKS_KEY, err);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        info!("Loaded {} bookmarks", items.len());
        FavoriteStore { kv, items: Mutex::new(items) }
    }

    fn items(&self) -> MutexGuard<'_, Vec<FavoriteRef>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &[FavoriteRef]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items).map_err(|err| AppError::Storage(err.to_string()))?;
        self.kv.set(BOOKMARKS_KEY, &raw)
    }

    pub fn list(&self) -> Vec<FavoriteRef> {
        self.items().clone()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items().iter().any(|f| f.id == id)
    }

    /// Returns `false` when the id was already bookmarked.
    pub fn add(&self, favorite: FavoriteRef) -> Result<bool, AppError> {
        let mut items = self.items();
        if items.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        let mut next = items.clone();
        next.push(favorite);
        self.persist(&next)?;
        *items = next;
        Ok(true)
    }

    /// Returns `false` when the id was not bookmarked.
    pub fn remove(&self, id: u64) -> Result<bool, AppError> {
        let mut items = self.items();
        if !items.iter().any(|f| f.id == id) {
            return Ok(false);
        }
        let next: Vec<FavoriteRef> = items.iter().filter(|f| f.id != id).cloned().collect();
        self.persist(&next)?;
        *items = next;
        Ok(true)
    }

    pub fn flush(&self) -> Result<(), AppError> {
        let items = self.items();
        self.persist(&items)
    }
}

fn dedup_by_id(items: Vec<FavoriteRef>) -> Vec<FavoriteRef> {
    let mut kept: Vec<FavoriteRef> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.iter().any(|k| k.id == item.id) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn favorite(id: u64) -> FavoriteRef {
        FavoriteRef {
            id,
            first_name: format!("First{}", id),
            last_name: "Last".to_string(),
        }
    }

    #[test]
    fn add_is_idempotent() {
        let store = FavoriteStore::load(Arc::new(MemoryStore::new()));
        assert!(store.add(favorite(3)).unwrap());
        assert!(!store.add(favorite(3)).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.contains(3));
    }

    #[test]
    fn removing_non_member_is_a_no_op() {
        let store = FavoriteStore::load(Arc::new(MemoryStore::new()));
        store.add(favorite(1)).unwrap();
        assert!(!store.remove(42).unwrap());
        assert_eq!(store.list(), vec![favorite(1)]);
        assert!(store.remove(1).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn changes_are_saved_immediately() {
        let kv = Arc::new(MemoryStore::new());
        let store = FavoriteStore::load(kv.clone());
        store.add(favorite(1)).unwrap();
        store.add(favorite(2)).unwrap();
        store.remove(1).unwrap();

        let reloaded = FavoriteStore::load(kv);
        assert_eq!(reloaded.list(), vec![favorite(2)]);
    }

    #[test]
    fn corrupted_value_falls_back_to_empty() {
        let kv = Arc::new(MemoryStore::with_value(BOOKMARKS_KEY, "{not json"));
        let store = FavoriteStore::load(kv);
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_ids_in_stored_value_are_collapsed() {
        let raw = r#"[{"id":1,"firstName":"A","lastName":"B"},{"id":1,"firstName":"C","lastName":"D"}]"#;
        let store = FavoriteStore::load(Arc::new(MemoryStore::with_value(BOOKMARKS_KEY, raw)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].first_name, "A");
    }
}
