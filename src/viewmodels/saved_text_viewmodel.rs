// ============================================================================
// SAVED TEXT VIEWMODEL - Campo de texto persistido en localStorage
// ============================================================================

use crate::utils::constants::SAVED_TEXT_KEY;
use crate::utils::storage::{KeyValueStore, PersistedValue};

pub struct SavedTextViewModel<S: KeyValueStore> {
    value: PersistedValue<String, S>,
}

impl<S: KeyValueStore> SavedTextViewModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            value: PersistedValue::load(store, SAVED_TEXT_KEY),
        }
    }

    pub fn text(&self) -> String {
        self.value.get()
    }

    /// Cada tecla se guarda al momento
    pub fn on_input(&self, text: impl Into<String>) -> Result<(), String> {
        self.value.set(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn restores_previous_text() {
        let store = MemoryStore::new();
        let first = SavedTextViewModel::new(store.clone());
        assert_eq!(first.text(), "");

        first.on_input("pizza").unwrap();
        assert_eq!(store.get_item(SAVED_TEXT_KEY).as_deref(), Some("\"pizza\""));

        let second = SavedTextViewModel::new(store);
        assert_eq!(second.text(), "pizza");
    }
}
