// ============================================================================
// STORAGE - Persistencia clave/valor (localStorage en navegador)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

/// Almacén clave/valor de strings (localStorage o memoria)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Almacén en memoria para hosts sin localStorage (y tests)
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use web_sys::{window, Storage};

    /// window.localStorage
    #[derive(Clone, Copy, Default)]
    pub struct BrowserStore;

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    impl KeyValueStore for BrowserStore {
        fn get_item(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok()?
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            let storage = local_storage().ok_or("No se pudo acceder a localStorage")?;
            storage
                .set_item(key, value)
                .map_err(|_| "Error guardando en localStorage".to_string())
        }
    }
}

/// Valor leído una vez al crear y escrito (JSON) en cada cambio
pub struct PersistedValue<T, S: KeyValueStore> {
    key: String,
    store: S,
    value: RefCell<T>,
}

impl<T, S> PersistedValue<T, S>
where
    T: Serialize + DeserializeOwned + Default + Clone,
    S: KeyValueStore,
{
    /// Lee el valor guardado; ausente o ilegible → `T::default()`
    pub fn load(store: S, key: &str) -> Self {
        let value = match store.get_item(key) {
            Some(json) => serde_json::from_str::<Option<T>>(&json)
                .unwrap_or_else(|e| {
                    log::warn!("⚠️ [STORAGE] Valor ilegible en '{}': {}", key, e);
                    None
                })
                .unwrap_or_default(),
            None => T::default(),
        };

        Self {
            key: key.to_string(),
            store,
            value: RefCell::new(value),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Actualiza el valor y lo escribe de forma síncrona
    pub fn set(&self, value: T) -> Result<(), String> {
        let json = serde_json::to_string(&value)
            .map_err(|e| format!("Error serializando datos: {}", e))?;
        *self.value.borrow_mut() = value;
        self.store.set_item(&self.key, &json)
    }
}
