//! What the success page shows about the completed donation

use crate::domain::query::PageQuery;
use crate::domain::storage::{
    SessionStore, DONATION_AMOUNT_KEY, DONATION_TYPE_KEY, IS_ANONYMOUS_KEY,
};
use crate::enums::Language;
use crate::shared::format::format_inr;
use crate::shared::validation::leading_integer;
use crate::shared::i18n::Translations;

/// Raw values read back after the payment page returns the donor.
/// Query parameters win over what was stored before leaving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessSummary {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub anonymous: Option<String>,
}

impl SuccessSummary {
    pub fn resolve(query: &PageQuery, store: &impl SessionStore) -> Self {
        let pick = |from_query: Option<&str>, key: &str| {
            from_query
                .map(str::to_string)
                .or_else(|| store.get(key).filter(|v| !v.is_empty()))
        };
        Self {
            category: pick(query.donation_type(), DONATION_TYPE_KEY),
            amount: pick(query.amount(), DONATION_AMOUNT_KEY),
            anonymous: pick(query.anonymous(), IS_ANONYMOUS_KEY),
        }
    }

    pub fn category_label(&self, translations: &Translations, language: Language) -> Option<String> {
        self.category
            .as_deref()
            .map(|code| translations.category_title(language, code))
    }

    /// Amount as whole rupees, e.g. `₹1,500`; unreadable amounts are hidden
    pub fn amount_label(&self) -> Option<String> {
        let amount = self.amount.as_deref()?.trim();
        let value = leading_integer(amount)?;
        Some(format_inr(value as f64))
    }

    /// Only the literal `true` means anonymous
    pub fn is_anonymous(&self) -> Option<bool> {
        self.anonymous.as_deref().map(|flag| flag == "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MemoryStore;
    use serde_json::json;

    fn translations() -> Translations {
        Translations::new(
            json!({ "donation": { "zakat": { "title": "Zakat" } } }),
            json!({ "donation": { "zakat": { "title": "സകാത്ത്" } } }),
        )
    }

    #[test]
    fn test_query_overrides_storage() {
        let store = MemoryStore::new();
        store.set(DONATION_TYPE_KEY, "fidyah");
        store.set(DONATION_AMOUNT_KEY, "360");
        store.set(IS_ANONYMOUS_KEY, "false");

        let summary = SuccessSummary::resolve(&PageQuery::parse("?amount=500&anonymous=true"), &store);
        assert_eq!(summary.category.as_deref(), Some("fidyah"));
        assert_eq!(summary.amount.as_deref(), Some("500"));
        assert_eq!(summary.is_anonymous(), Some(true));
    }

    #[test]
    fn test_nothing_known() {
        let summary = SuccessSummary::resolve(&PageQuery::default(), &MemoryStore::new());
        assert_eq!(summary, SuccessSummary::default());
        assert_eq!(summary.amount_label(), None);
        assert_eq!(summary.is_anonymous(), None);
        assert_eq!(summary.category_label(&translations(), Language::En), None);
    }

    #[test]
    fn test_labels() {
        let summary = SuccessSummary {
            category: Some("zakat".to_string()),
            amount: Some("125000.75".to_string()),
            anonymous: Some("yes".to_string()),
        };
        assert_eq!(summary.category_label(&translations(), Language::Ml).as_deref(), Some("സകാത്ത്"));
        assert_eq!(summary.amount_label().as_deref(), Some("₹1,25,000"));
        assert_eq!(summary.is_anonymous(), Some(false));
    }

    #[test]
    fn test_untranslated_category_shows_code() {
        let summary = SuccessSummary {
            category: Some("kaffarah".to_string()),
            ..SuccessSummary::default()
        };
        assert_eq!(summary.category_label(&translations(), Language::En).as_deref(), Some("kaffarah"));
    }
}
