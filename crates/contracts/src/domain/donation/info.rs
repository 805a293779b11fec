//! Content of the category information page.
//!
//! Each category has an `info.<code>` section in the dictionaries:
//! `{"title": "...", "body": "...", "rate": "..."}`, where older
//! dictionaries use `description` instead of `body`.

use crate::domain::query::PageQuery;
use crate::domain::storage::{SessionStore, DONATION_TYPE_KEY};
use crate::enums::{DonationCategory, Language};
use crate::shared::i18n::Translations;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoContent {
    pub category: Option<DonationCategory>,
    pub title: String,
    pub body: String,
    pub rate: String,
}

impl InfoContent {
    /// Category to explain: `?c=`, then `?category=`, then the stored choice
    pub fn requested_category(query: &PageQuery, store: &impl SessionStore) -> Option<String> {
        query
            .info_category()
            .map(str::to_string)
            .or_else(|| store.get(DONATION_TYPE_KEY).filter(|c| !c.is_empty()))
    }

    /// `None` when the active dictionary has no section for the category
    pub fn resolve(translations: &Translations, language: Language, code: &str) -> Option<Self> {
        let section = translations.entry(language, &format!("info.{}", code))?;
        if !section.is_object() {
            return None;
        }
        let text = |field: &str| section.get(field).and_then(Value::as_str).unwrap_or_default();
        let body = match text("body") {
            "" => text("description"),
            body => body,
        };
        Some(Self {
            category: DonationCategory::from_code(code),
            title: text("title").to_string(),
            body: body.to_string(),
            rate: text("rate").to_string(),
        })
    }

    /// Badge colour; unknown categories use the zakat colour
    pub fn accent_class(&self) -> &'static str {
        self.category
            .map(|c| c.accent_class())
            .unwrap_or_else(|| DonationCategory::Zakat.accent_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MemoryStore;
    use serde_json::json;

    fn translations() -> Translations {
        Translations::new(
            json!({
                "info": {
                    "zakat": { "title": "Zakat", "body": "2.5% of savings", "rate": "Nisab applies" },
                    "fidyah": { "title": "Fidyah", "description": "Per missed fast" }
                }
            }),
            json!({}),
        )
    }

    #[test]
    fn test_resolve_body_and_rate() {
        let info = InfoContent::resolve(&translations(), Language::En, "zakat").unwrap();
        assert_eq!(info.title, "Zakat");
        assert_eq!(info.body, "2.5% of savings");
        assert_eq!(info.rate, "Nisab applies");
        assert_eq!(info.accent_class(), "bg-primary-600");
    }

    #[test]
    fn test_description_stands_in_for_body() {
        let info = InfoContent::resolve(&translations(), Language::En, "fidyah").unwrap();
        assert_eq!(info.body, "Per missed fast");
        assert_eq!(info.rate, "");
        assert_eq!(info.accent_class(), "bg-green-600");
    }

    #[test]
    fn test_missing_section() {
        assert_eq!(InfoContent::resolve(&translations(), Language::En, "sadaqah"), None);
        assert_eq!(InfoContent::resolve(&translations(), Language::Ml, "zakat"), None);
    }

    #[test]
    fn test_requested_category() {
        let store = MemoryStore::new();
        store.set(DONATION_TYPE_KEY, "kaffarah");
        assert_eq!(
            InfoContent::requested_category(&PageQuery::parse("?c=zakat"), &store).as_deref(),
            Some("zakat")
        );
        assert_eq!(
            InfoContent::requested_category(&PageQuery::default(), &store).as_deref(),
            Some("kaffarah")
        );
        assert_eq!(InfoContent::requested_category(&PageQuery::default(), &MemoryStore::new()), None);
    }
}
