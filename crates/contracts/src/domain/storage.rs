//! Session storage keys and the store abstraction the pages share.
//!
//! The browser implementation wraps `window.sessionStorage`; tests use
//! [`MemoryStore`].

use crate::enums::Language;
use std::cell::RefCell;
use std::collections::HashMap;

pub const LANG_KEY: &str = "lang";
pub const DONATION_TYPE_KEY: &str = "donationType";
pub const DONATION_AMOUNT_KEY: &str = "donationAmount";
pub const IS_ANONYMOUS_KEY: &str = "isAnonymous";
pub const FIDYAH_DAYS_KEY: &str = "fidyahDays";
pub const MOBILE_NUMBER_KEY: &str = "mobileNumber";

/// Keys describing one donation, cleared before starting the next
pub const DONATION_KEYS: [&str; 5] = [
    DONATION_TYPE_KEY,
    DONATION_AMOUNT_KEY,
    IS_ANONYMOUS_KEY,
    FIDYAH_DAYS_KEY,
    MOBILE_NUMBER_KEY,
];

/// String key/value storage that survives navigation within the tab
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn clear_donation(&self) {
        for key in DONATION_KEYS {
            self.remove(key);
        }
    }
}

/// Language saved by the index page, if any
pub fn saved_language(store: &impl SessionStore) -> Option<Language> {
    store
        .get(LANG_KEY)
        .and_then(|code| Language::from_code(&code))
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_donation_keeps_language() {
        let store = MemoryStore::new();
        store.set(LANG_KEY, "ml");
        store.set(DONATION_TYPE_KEY, "zakat");
        store.set(DONATION_AMOUNT_KEY, "500");
        store.set(IS_ANONYMOUS_KEY, "false");
        store.set(MOBILE_NUMBER_KEY, "9876543210");

        store.clear_donation();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("ml"));
        assert_eq!(store.get(DONATION_TYPE_KEY), None);
    }

    #[test]
    fn test_saved_language() {
        let store = MemoryStore::new();
        assert_eq!(saved_language(&store), None);
        store.set(LANG_KEY, "ml");
        assert_eq!(saved_language(&store), Some(Language::Ml));
        store.set(LANG_KEY, "fr");
        assert_eq!(saved_language(&store), None);
    }
}
