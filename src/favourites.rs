// File: src/favourites.rs
//
// The favourites list is one JSON document behind the storage port,
// read-modify-written as a whole. Last writer wins across concurrent
// hosts; unreadable state reads as empty and failed writes are
// discarded. That degradation is policy, not a bug.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::types::Realm;
use crate::storage::KeyValueStore;

/// Slot holding the JSON-encoded favourites list.
pub const FAVOURITES_KEY: &str = "atelier_favs";

/// Slot holding the one-time install-hint dismissal flag.
pub const INSTALL_HINT_KEY: &str = "install_hint_dismissed";

/// A favourite carries at most this many provenance tags.
pub const MAX_TAGS: usize = 5;

/// A saved query candidate plus provenance. The JSON field names are
/// the persisted wire format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteRecord {
    pub id: String,
    pub keyword: String,
    pub label: String,
    pub realm: Realm,
    pub tags: Vec<String>,
    /// Unix milliseconds at save time.
    pub saved_at: i64,
}

/// Ordered favourites list, most recent first, over an injected
/// storage port.
pub struct FavouritesStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> FavouritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Creates a record with a fresh id and the current timestamp,
    /// prepends it to the list and persists synchronously.
    pub fn save(
        &mut self,
        keyword: &str,
        label: &str,
        realm: Realm,
        tags: &[String],
    ) -> FavouriteRecord {
        let mut list = self.list();
        let saved_at = Utc::now().timestamp_millis();
        let record = FavouriteRecord {
            id: fresh_id(saved_at, &list),
            keyword: keyword.to_string(),
            label: label.to_string(),
            realm,
            tags: tags.iter().take(MAX_TAGS).cloned().collect(),
            saved_at,
        };
        list.insert(0, record.clone());
        self.write(&list);
        record
    }

    /// Most recent first. Empty when nothing is persisted, storage is
    /// unavailable, or the stored document does not parse.
    pub fn list(&self) -> Vec<FavouriteRecord> {
        let Ok(Some(raw)) = self.storage.get(FAVOURITES_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Deletes the record with the matching id. No-op when absent.
    pub fn remove(&mut self, id: &str) {
        let mut list = self.list();
        let before = list.len();
        list.retain(|record| record.id != id);
        if list.len() != before {
            self.write(&list);
        }
    }

    pub fn hint_dismissed(&self) -> bool {
        matches!(self.storage.get(INSTALL_HINT_KEY), Ok(Some(_)))
    }

    pub fn dismiss_hint(&mut self) {
        let _ = self.storage.set(INSTALL_HINT_KEY, "1");
    }

    fn write(&mut self, list: &[FavouriteRecord]) {
        if let Ok(raw) = serde_json::to_string(list) {
            let _ = self.storage.set(FAVOURITES_KEY, &raw);
        }
    }
}

/// Millisecond timestamp as the id, bumped while it collides with an
/// existing record (two saves can land in the same millisecond).
fn fresh_id(saved_at: i64, existing: &[FavouriteRecord]) -> String {
    let mut candidate = saved_at;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|record| record.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    fn store() -> FavouritesStore<MemoryStore> {
        FavouritesStore::new(MemoryStore::new())
    }

    #[test]
    fn save_then_list_round_trips_at_the_head() {
        let mut favs = store();
        favs.save("连衣裙 高品质 包邮", "Quality Filter", Realm::Fashion, &[]);
        let record = favs.save(
            "哥特暗黑风 连衣裙 黑色 女款",
            "Style Discovery",
            Realm::Fashion,
            &["Dress".to_string(), "Goth".to_string()],
        );

        let list = favs.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], record);
        assert_eq!(list[0].keyword, "哥特暗黑风 连衣裙 黑色 女款");
        assert_eq!(list[0].label, "Style Discovery");
        assert_eq!(list[0].realm, Realm::Fashion);
        assert_eq!(list[0].tags, vec!["Dress", "Goth"]);
    }

    #[test]
    fn remove_deletes_only_the_matching_id() {
        let mut favs = store();
        let first = favs.save("a", "Focused Search", Realm::Home, &[]);
        let second = favs.save("b", "Broader Search", Realm::Home, &[]);

        favs.remove(&first.id);
        let list = favs.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, second.id);

        // Unknown id is a no-op.
        favs.remove("not-an-id");
        assert_eq!(favs.list().len(), 1);
    }

    #[test]
    fn ids_stay_unique_within_a_millisecond() {
        let mut favs = store();
        let a = favs.save("a", "Focused Search", Realm::Fashion, &[]);
        let b = favs.save("b", "Focused Search", Realm::Fashion, &[]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn tags_are_capped_at_five() {
        let mut favs = store();
        let tags: Vec<String> = (0..8).map(|i| format!("tag{i}")).collect();
        let record = favs.save("a", "Focused Search", Realm::Fashion, &tags);
        assert_eq!(record.tags.len(), MAX_TAGS);
        assert_eq!(record.tags[4], "tag4");
    }

    #[test]
    fn wire_format_matches_the_persisted_document() {
        let record = FavouriteRecord {
            id: "1700000000000".to_string(),
            keyword: "短袖T恤 高品质 包邮".to_string(),
            label: "Quality Filter".to_string(),
            realm: Realm::Fashion,
            tags: vec!["T-Shirt".to_string()],
            saved_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"savedAt\":1700000000000"));
        assert!(json.contains("\"realm\":\"fashion\""));

        // A legacy-format document parses unchanged.
        let legacy = r#"[{"keyword":"连衣裙 高品质 包邮","label":"Quality Filter",
            "realm":"character","tags":["Stitch"],"id":"1699999999999",
            "savedAt":1699999999999}]"#;
        let parsed: Vec<FavouriteRecord> = serde_json::from_str(legacy).unwrap();
        assert_eq!(parsed[0].realm, Realm::Character);
        assert_eq!(parsed[0].saved_at, 1_699_999_999_999);
    }

    #[test]
    fn malformed_or_unavailable_state_reads_as_empty() {
        let mut backing = MemoryStore::new();
        backing.set(FAVOURITES_KEY, "not json").unwrap();
        let favs = FavouritesStore::new(backing);
        assert!(favs.list().is_empty());

        fn gone() -> StorageError {
            StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, "gone"))
        }
        struct DeadStore;
        impl KeyValueStore for DeadStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Err(gone())
            }
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(gone())
            }
            fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
                Err(gone())
            }
        }
        let mut dead = FavouritesStore::new(DeadStore);
        assert!(dead.list().is_empty());
        // Saving still returns the record; the write is discarded.
        let record = dead.save("a", "Focused Search", Realm::Fashion, &[]);
        assert_eq!(record.keyword, "a");
        assert!(dead.list().is_empty());
    }

    #[test]
    fn hint_flag_defaults_off_and_sticks() {
        let mut favs = store();
        assert!(!favs.hint_dismissed());
        favs.dismiss_hint();
        assert!(favs.hint_dismissed());
    }
}
