use std::rc::Rc;

use once_cell::unsync::OnceCell;
use shared::{MemoryStorage, SessionStorage, StorageError};

thread_local! {
    static SHARED_STORAGE: OnceCell<BrowserStorage> = OnceCell::new();
}

#[derive(Debug)]
enum Backend {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

/// [`SessionStorage`] backed by the browser's `localStorage`, or by memory
/// when the browser refuses access (private mode, disabled storage).
///
/// Values are stored raw so the token stays readable from devtools and the
/// user JSON is exactly what the API returned. Clones share one backend.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    backend: Rc<Backend>,
}

impl BrowserStorage {
    /// The page-wide storage, resolved on first use.
    pub fn shared() -> Self {
        SHARED_STORAGE.with(|cell| {
            cell.get_or_init(|| {
                Self::from_local(
                    web_sys::window().and_then(|window| window.local_storage().ok().flatten()),
                )
            })
            .clone()
        })
    }

    fn from_local(local: Option<web_sys::Storage>) -> Self {
        let backend = match local {
            Some(storage) => Backend::Local(storage),
            None => {
                log::warn!("localStorage unavailable; the session will not survive a reload");
                Backend::Memory(MemoryStorage::new())
            }
        };
        Self {
            backend: Rc::new(backend),
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.backend.as_ref() {
            Backend::Local(storage) => storage.get_item(key).ok().flatten(),
            Backend::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        match self.backend.as_ref() {
            Backend::Local(storage) => storage.set_item(key, value).map_err(|err| {
                StorageError::Write {
                    key,
                    reason: format!("{err:?}"),
                }
            }),
            Backend::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self.backend.as_ref() {
            Backend::Local(storage) => {
                if let Err(err) = storage.remove_item(key) {
                    log::debug!("removing `{key}` failed: {err:?}");
                }
            }
            Backend::Memory(memory) => memory.remove(key),
        }
    }
}
