//! Persistent storage for the access token

use std::cell::RefCell;

/// Key/value slot holding the access token between sessions
pub trait TokenStore {
    /// Read the persisted token, if any
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous one
    fn save(&self, token: &str) -> crate::Result<()>;

    /// Remove the persisted token; succeeds when nothing is stored
    fn clear(&self) -> crate::Result<()>;
}

/// Token store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> crate::Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> crate::Result<()> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::TokenStore;
    use crate::FarmError;

    /// Token store backed by a JSON object on disk, keyed like browser local storage
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
        key: String,
    }

    impl FileTokenStore {
        pub fn new(path: impl AsRef<Path>, key: impl Into<String>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
                key: key.into(),
            }
        }

        fn read_entries(&self) -> crate::Result<BTreeMap<String, String>> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let content = std::fs::read_to_string(&self.path).map_err(|e| {
                FarmError::Storage(format!("Failed to read {:?}: {}", self.path, e))
            })?;
            Ok(serde_json::from_str(&content)?)
        }

        fn write_entries(&self, entries: &BTreeMap<String, String>) -> crate::Result<()> {
            let content = serde_json::to_string_pretty(entries)?;
            std::fs::write(&self.path, content).map_err(|e| {
                FarmError::Storage(format!("Failed to write {:?}: {}", self.path, e))
            })
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> Option<String> {
            match self.read_entries() {
                Ok(entries) => entries.get(&self.key).cloned(),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session file: {}", e);
                    None
                }
            }
        }

        fn save(&self, token: &str) -> crate::Result<()> {
            let mut entries = self.read_entries().unwrap_or_default();
            entries.insert(self.key.clone(), token.to_string());
            self.write_entries(&entries)?;
            tracing::debug!("Stored token under '{}' in {:?}", self.key, self.path);
            Ok(())
        }

        fn clear(&self) -> crate::Result<()> {
            if !self.path.exists() {
                return Ok(());
            }
            let mut entries = self.read_entries().unwrap_or_default();
            if entries.remove(&self.key).is_some() {
                tracing::debug!("Removed token '{}' from {:?}", self.key, self.path);
            }
            self.write_entries(&entries)
        }
    }

}
