//! Almacenamiento clave → valor donde se persiste el progreso.
//!
//! En la web es `localStorage`; en escritorio un fichero JSON por clave; en
//! los tests un `HashMap`.

use std::collections::HashMap;
use thiserror::Error;

pub const STATS_KEY: &str = "eduva_stats_v2";
pub const HISTORY_KEY: &str = "eduva_history";
pub const THEME_KEY: &str = "eduva_theme_v2";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Sobrescribe cualquier valor previo en `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{KeyValueStore, StoreError};
    use std::path::{Path, PathBuf};

    /// Un fichero `<clave>.json` por clave dentro de `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `EDUVA_DATA_DIR` si está definida; si no, `<data_dir>/eduva`.
        pub fn default_location() -> Result<Self, StoreError> {
            if let Some(dir) = std::env::var_os("EDUVA_DATA_DIR").filter(|d| !d.is_empty()) {
                return Ok(Self::new(dir));
            }
            dirs::data_dir()
                .map(|d| Self::new(d.join("eduva")))
                .ok_or_else(|| StoreError::Unavailable("no data directory on this platform".into()))
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            match std::fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Some(raw),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    log::warn!("No se pudo leer {key}: {e}");
                    None
                }
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.path_for(key), value)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StoreError};

    /// `window.localStorage`, las mismas claves que usaba la versión web.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            let storage = local_storage()
                .ok_or_else(|| StoreError::Unavailable("localStorage not available".into()))?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(STATS_KEY), None);
        store.set(STATS_KEY, "1").unwrap();
        store.set(STATS_KEY, "2").unwrap();
        assert_eq!(store.get(STATS_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set(THEME_KEY, "ocean").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("ocean"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_creates_directory_and_reads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested"));
        assert_eq!(store.get(HISTORY_KEY), None);
        store.set(HISTORY_KEY, "[]").unwrap();
        assert_eq!(store.get(HISTORY_KEY).as_deref(), Some("[]"));
        assert!(store.dir().join("eduva_history.json").exists());
    }
}
