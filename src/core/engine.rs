// File: src/core/engine.rs

use std::path::Path;

use crate::core::generator;
use crate::core::types::{QueryCandidate, Realm, SelectionSet};
use crate::favourites::{FavouriteRecord, FavouritesStore};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Raised before generation when the selection cannot produce a useful
/// result. The pure generator never fails; this is the upstream check
/// the UI surfaces as a blocking message.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("select at least one category, style, or character")]
    EmptySelection,
}

/// The main engine composes the static catalog, the pure generator and
/// the favourites store over an injected storage port.
pub struct AtelierEngine<S: KeyValueStore> {
    favourites: FavouritesStore<S>,
}

impl AtelierEngine<MemoryStore> {
    /// Engine with nothing behind it: favourites live and die in memory.
    pub fn new() -> Self {
        Self::with_storage(MemoryStore::new())
    }
}

impl Default for AtelierEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl AtelierEngine<FileStore> {
    /// Engine persisting under `dir`. Missing or unreadable state starts
    /// fresh rather than failing.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::with_storage(FileStore::new(dir))
    }
}

impl<S: KeyValueStore> AtelierEngine<S> {
    pub fn with_storage(storage: S) -> Self {
        Self {
            favourites: FavouritesStore::new(storage),
        }
    }

    /// Validates the selection, then runs the generator. A selection
    /// with no category, style or character is rejected here so the
    /// degenerate fallback-only result is never shown to a user.
    pub fn generate(
        &self,
        selection: &SelectionSet,
    ) -> Result<Vec<QueryCandidate>, GenerateError> {
        if !selection.has_primary_selection() {
            return Err(GenerateError::EmptySelection);
        }
        Ok(generator::generate(selection))
    }

    /// Saves a generated candidate with its provenance tags. Returns the
    /// stored record (persistence failures degrade silently by policy).
    pub fn save_favourite(
        &mut self,
        candidate: &QueryCandidate,
        realm: Realm,
        tags: &[String],
    ) -> FavouriteRecord {
        self.favourites
            .save(&candidate.keyword, candidate.label(), realm, tags)
    }

    /// All saved favourites, most recent first.
    pub fn favourites(&self) -> Vec<FavouriteRecord> {
        self.favourites.list()
    }

    /// Removes a favourite by id. No-op when the id is unknown.
    pub fn remove_favourite(&mut self, id: &str) {
        self.favourites.remove(id);
    }

    pub fn install_hint_dismissed(&self) -> bool {
        self.favourites.hint_dismissed()
    }

    pub fn dismiss_install_hint(&mut self) {
        self.favourites.dismiss_hint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RankTier;

    #[test]
    fn rejects_empty_selection_before_generating() {
        let engine = AtelierEngine::new();
        let mut selection = SelectionSet::default();
        selection.colors.push("黑色".to_string());
        assert_eq!(
            engine.generate(&selection),
            Err(GenerateError::EmptySelection)
        );
    }

    #[test]
    fn generates_once_a_primary_attribute_is_selected() {
        let engine = AtelierEngine::new();
        let selection =
            SelectionSet::from_toggles(Realm::Fashion, &["Dress", "Cottagecore"], &["Black"]);
        let results = engine.generate(&selection).unwrap();
        assert_eq!(results[0].keyword, "连衣裙 田园风碎花 黑色");
        assert_eq!(results.last().unwrap().tier, RankTier::QualityFilter);
    }

    #[test]
    fn saves_and_removes_favourites_through_the_store() {
        let mut engine = AtelierEngine::new();
        let selection = SelectionSet::from_toggles(Realm::Fashion, &["Dress"], &[]);
        let results = engine.generate(&selection).unwrap();
        let record = engine.save_favourite(&results[0], Realm::Fashion, &selection.tags());

        let listed = engine.favourites();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
        assert_eq!(listed[0].label, "Focused Search");
        assert_eq!(listed[0].tags, vec!["Dress"]);

        engine.remove_favourite(&record.id);
        assert!(engine.favourites().is_empty());
    }

    #[test]
    fn install_hint_flag_round_trips() {
        let mut engine = AtelierEngine::new();
        assert!(!engine.install_hint_dismissed());
        engine.dismiss_install_hint();
        assert!(engine.install_hint_dismissed());
    }
}
