//! State of the give form for one page view.
//!
//! The session is a plain value: the frontend keeps it in a signal, feeds it
//! input events and renders what it derives. Nothing here touches the DOM.

use super::fidyah::calculate_fidyah_amount;
use crate::domain::query::PageQuery;
use crate::domain::storage::{
    SessionStore, DONATION_AMOUNT_KEY, DONATION_TYPE_KEY, FIDYAH_DAYS_KEY,
    IS_ANONYMOUS_KEY, MOBILE_NUMBER_KEY,
};
use crate::enums::DonationCategory;
use crate::shared::config::PaymentPages;
use crate::shared::validation::{
    parse_amount, parse_days, validate_amount, validate_mobile, MOBILE_DIGITS,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationSession {
    /// Category code as requested; may name no known category
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub is_anonymous: bool,
    pub fidyah_days: Option<u32>,
    pub mobile_number: Option<String>,
}

/// What confirming the form does: storage writes, then a redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub entries: Vec<(&'static str, String)>,
    pub redirect_url: String,
}

impl Checkout {
    pub fn persist(&self, store: &impl SessionStore) {
        for (key, value) in &self.entries {
            store.set(key, value);
        }
    }
}

impl DonationSession {
    /// Session for the give page: category from `?type=`, else the one
    /// picked earlier in this tab
    pub fn for_give_page(query: &PageQuery, store: &impl SessionStore) -> Self {
        let category = query
            .donation_type()
            .map(str::to_string)
            .or_else(|| store.get(DONATION_TYPE_KEY).filter(|c| !c.is_empty()));
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn category(&self) -> Option<DonationCategory> {
        self.category
            .as_deref()
            .and_then(DonationCategory::from_code)
    }

    pub fn shows_fidyah_calculator(&self) -> bool {
        self.category()
            .is_some_and(|category| category.has_day_calculator())
    }

    /// The mobile field is only offered to donors who give their name
    pub fn shows_mobile_section(&self) -> bool {
        !self.is_anonymous
    }

    pub fn set_amount_input(&mut self, input: &str) {
        self.amount = parse_amount(input);
    }

    /// Take the fidyah day count; a count of one or more also fills in the
    /// amount. Returns the calculated amount.
    pub fn set_fidyah_days_input(&mut self, input: &str, rate: u32) -> Option<u64> {
        self.fidyah_days = parse_days(input);
        let calculated = self.calculated_fidyah(rate)?;
        self.amount = Some(calculated as f64);
        Some(calculated)
    }

    pub fn calculated_fidyah(&self, rate: u32) -> Option<u64> {
        self.fidyah_days
            .filter(|days| *days >= 1)
            .map(|days| calculate_fidyah_amount(days, rate))
    }

    pub fn set_anonymous(&mut self, is_anonymous: bool) {
        self.is_anonymous = is_anonymous;
    }

    pub fn set_mobile_input(&mut self, input: &str) {
        let trimmed = input.trim();
        self.mobile_number = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn amount_is_valid(&self) -> bool {
        self.amount.is_some_and(validate_amount)
    }

    /// A typed mobile number that is not ten digits
    pub fn mobile_error(&self) -> bool {
        self.shows_mobile_section()
            && self
                .mobile_number
                .as_deref()
                .is_some_and(|m| !validate_mobile(m))
    }

    /// Whether to show the mobile error yet: once the field was left, or
    /// once ten characters are typed. Until then the error only gates
    /// the continue button.
    pub fn shows_mobile_error(&self, field_left: bool) -> bool {
        let typed = self
            .mobile_number
            .as_deref()
            .map_or(0, |m| m.chars().count());
        self.mobile_error() && (field_left || typed >= MOBILE_DIGITS)
    }

    /// Whether the continue button is enabled
    pub fn can_continue(&self) -> bool {
        self.amount_is_valid() && !self.mobile_error()
    }

    /// Storage writes and payment page for the current form, or `None` while
    /// the form cannot be submitted
    pub fn checkout(&self, pages: &PaymentPages) -> Option<Checkout> {
        if !self.can_continue() {
            return None;
        }
        let amount = self.amount?;
        let category = self
            .category
            .clone()
            .unwrap_or_else(|| DonationCategory::default().code().to_string());

        let mut entries = vec![
            (DONATION_AMOUNT_KEY, amount.to_string()),
            (IS_ANONYMOUS_KEY, self.is_anonymous.to_string()),
            (DONATION_TYPE_KEY, category.clone()),
        ];
        if let Some(days) = self.fidyah_days.filter(|days| *days >= 1) {
            entries.push((FIDYAH_DAYS_KEY, days.to_string()));
        }
        if let Some(mobile) = self.mobile_number.as_ref().filter(|_| !self.is_anonymous) {
            entries.push((MOBILE_NUMBER_KEY, mobile.clone()));
        }

        Some(Checkout {
            entries,
            redirect_url: pages.resolve(&category, self.is_anonymous).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MemoryStore;
    use crate::shared::config::PaymentUrls;

    fn persisted(checkout: &Checkout) -> MemoryStore {
        let store = MemoryStore::new();
        checkout.persist(&store);
        store
    }

    fn pages() -> PaymentPages {
        let mut pages = PaymentPages::shared("https://pay.example/general");
        pages.zakat = PaymentUrls {
            public: "https://pay.example/zakat".to_string(),
            anonymous: "https://pay.example/zakat-anon".to_string(),
        };
        pages
    }

    fn zakat_session() -> DonationSession {
        DonationSession {
            category: Some("zakat".to_string()),
            ..DonationSession::default()
        }
    }

    #[test]
    fn test_category_from_query_then_storage() {
        let store = MemoryStore::new();
        store.set(DONATION_TYPE_KEY, "sadaqah");

        let from_query = DonationSession::for_give_page(&PageQuery::parse("?type=zakat"), &store);
        assert_eq!(from_query.category(), Some(DonationCategory::Zakat));

        let from_store = DonationSession::for_give_page(&PageQuery::default(), &store);
        assert_eq!(from_store.category(), Some(DonationCategory::Sadaqah));

        let nothing = DonationSession::for_give_page(&PageQuery::default(), &MemoryStore::new());
        assert_eq!(nothing.category, None);
    }

    #[test]
    fn test_continue_requires_valid_amount() {
        let mut session = zakat_session();
        assert!(!session.can_continue());

        session.set_amount_input("0");
        assert!(!session.can_continue());
        session.set_amount_input("abc");
        assert!(!session.can_continue());
        session.set_amount_input("250");
        assert!(session.can_continue());
        session.set_amount_input("");
        assert!(!session.can_continue());
    }

    #[test]
    fn test_invalid_mobile_blocks_continue_unless_anonymous() {
        let mut session = zakat_session();
        session.set_amount_input("250");
        session.set_mobile_input("98765");
        assert!(session.mobile_error());
        assert!(!session.can_continue());

        session.set_anonymous(true);
        assert!(!session.shows_mobile_section());
        assert!(session.can_continue());

        session.set_anonymous(false);
        session.set_mobile_input("9876543210");
        assert!(session.can_continue());
    }

    #[test]
    fn test_days_below_one_leave_amount_alone() {
        let mut session = DonationSession {
            category: Some("fidyah".to_string()),
            amount: Some(50.0),
            ..DonationSession::default()
        };
        assert_eq!(session.set_fidyah_days_input("0", 120), None);
        assert_eq!(session.amount, Some(50.0));
        assert_eq!(session.set_fidyah_days_input("", 120), None);
        assert_eq!(session.amount, Some(50.0));
    }

    #[test]
    fn test_fractional_days_count_whole_days() {
        let mut session = DonationSession {
            category: Some("fidyah".to_string()),
            ..DonationSession::default()
        };
        assert_eq!(session.set_fidyah_days_input("3.5", 120), Some(360));
        assert_eq!(session.amount, Some(360.0));
        assert_eq!(session.fidyah_days, Some(3));
    }

    #[test]
    fn test_mobile_error_waits_for_full_number_or_leaving_field() {
        let mut session = zakat_session();
        session.set_amount_input("250");

        session.set_mobile_input("9");
        assert!(session.mobile_error());
        assert!(!session.shows_mobile_error(false));
        assert!(session.shows_mobile_error(true));

        session.set_mobile_input("98765abcde");
        assert!(session.shows_mobile_error(false));

        session.set_mobile_input("9876543210");
        assert!(!session.shows_mobile_error(true));

        session.set_mobile_input("9");
        session.set_anonymous(true);
        assert!(!session.shows_mobile_error(true));
    }

    #[test]
    fn test_checkout_anonymous_zakat() {
        let mut session = zakat_session();
        session.set_amount_input("1000");
        session.set_mobile_input("9876543210");
        session.set_anonymous(true);

        let checkout = session.checkout(&pages()).unwrap();
        assert_eq!(checkout.redirect_url, "https://pay.example/zakat-anon");
        let store = persisted(&checkout);
        assert_eq!(store.get(DONATION_AMOUNT_KEY).as_deref(), Some("1000"));
        assert_eq!(store.get(IS_ANONYMOUS_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(MOBILE_NUMBER_KEY), None);
        assert_eq!(store.get(FIDYAH_DAYS_KEY), None);
    }

    #[test]
    fn test_checkout_without_category_uses_masjid_fund() {
        let mut session = DonationSession::default();
        session.set_amount_input("75.5");
        let checkout = session.checkout(&pages()).unwrap();
        let store = persisted(&checkout);
        assert_eq!(store.get(DONATION_TYPE_KEY).as_deref(), Some("masjid_fund"));
        assert_eq!(store.get(DONATION_AMOUNT_KEY).as_deref(), Some("75.5"));
        assert_eq!(checkout.redirect_url, "https://pay.example/general");
    }

    #[test]
    fn test_checkout_unknown_category_falls_back_to_default_page() {
        let mut session = DonationSession {
            category: Some("interest".to_string()),
            ..DonationSession::default()
        };
        session.set_amount_input("10");
        let checkout = session.checkout(&pages()).unwrap();
        assert_eq!(persisted(&checkout).get(DONATION_TYPE_KEY).as_deref(), Some("interest"));
        assert_eq!(checkout.redirect_url, "https://pay.example/general");
    }

    #[test]
    fn test_no_checkout_while_invalid() {
        let session = zakat_session();
        assert_eq!(session.checkout(&pages()), None);
    }
}
