use contracts::domain::SessionStore;
use web_sys::window;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// `window.sessionStorage`; every operation is a no-op when it is unavailable
pub struct BrowserSessionStore {
    storage: Option<web_sys::Storage>,
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not store {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn session_store() -> BrowserSessionStore {
    BrowserSessionStore {
        storage: get_session_storage(),
    }
}
