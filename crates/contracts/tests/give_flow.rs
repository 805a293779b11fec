//! Give-page flow from arrival to the payment redirect, without a browser.

use contracts::domain::donation::{DonationSession, SuccessSummary};
use contracts::domain::storage::{
    MemoryStore, DONATION_AMOUNT_KEY, DONATION_TYPE_KEY, FIDYAH_DAYS_KEY, IS_ANONYMOUS_KEY,
    LANG_KEY,
};
use contracts::domain::{PageQuery, SessionStore};
use contracts::enums::DonationCategory;
use contracts::shared::config::{AppConfig, PaymentUrls};

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.settings.fidyah_rate = 120;
    config.payment_pages.fidyah = PaymentUrls {
        public: "https://pay.example/fidyah".to_string(),
        anonymous: "https://pay.example/fidyah-anon".to_string(),
    };
    config
}

#[test]
fn fidyah_days_fill_amount_and_checkout_redirects() {
    let config = config();
    let store = MemoryStore::new();
    store.set(LANG_KEY, "en");

    let mut session = DonationSession::for_give_page(&PageQuery::parse("?type=fidyah"), &store);
    assert_eq!(session.category(), Some(DonationCategory::Fidyah));
    assert!(session.shows_fidyah_calculator());
    assert!(!session.can_continue());

    let calculated = session.set_fidyah_days_input("3", config.settings.fidyah_rate);
    assert_eq!(calculated, Some(360));
    assert_eq!(session.amount, Some(360.0));
    assert!(session.can_continue());

    let checkout = session
        .checkout(&config.payment_pages)
        .expect("form should be submittable");
    checkout.persist(&store);

    assert_eq!(store.get(DONATION_TYPE_KEY).as_deref(), Some("fidyah"));
    assert_eq!(store.get(DONATION_AMOUNT_KEY).as_deref(), Some("360"));
    assert_eq!(store.get(IS_ANONYMOUS_KEY).as_deref(), Some("false"));
    assert_eq!(store.get(FIDYAH_DAYS_KEY).as_deref(), Some("3"));
    assert_eq!(checkout.redirect_url, "https://pay.example/fidyah");
}

#[test]
fn success_page_reads_back_stored_donation() {
    let config = config();
    let store = MemoryStore::new();

    let mut session = DonationSession::default();
    session.category = Some("fidyah".to_string());
    session.set_fidyah_days_input("10", config.settings.fidyah_rate);
    session.set_anonymous(true);
    let checkout = session.checkout(&config.payment_pages).unwrap();
    checkout.persist(&store);
    assert_eq!(checkout.redirect_url, "https://pay.example/fidyah-anon");

    let summary = SuccessSummary::resolve(&PageQuery::default(), &store);
    assert_eq!(summary.amount_label().as_deref(), Some("₹1,200"));
    assert_eq!(summary.is_anonymous(), Some(true));

    store.clear_donation();
    assert!(store.is_empty());
}

#[test]
fn give_page_keeps_category_despite_repeated_tracking_params() {
    let store = MemoryStore::new();
    store.set(DONATION_TYPE_KEY, "sadaqah");

    let query = PageQuery::parse("?type=zakat&utm_source=a&utm_source=b");
    let session = DonationSession::for_give_page(&query, &store);
    assert_eq!(session.category(), Some(DonationCategory::Zakat));
}
