use crate::layout::global_context::AppContext;
use crate::shared::navigation::{current_search, navigate};
use crate::system::storage::session_store;
use contracts::domain::donation::DonationSession;
use contracts::domain::PageQuery;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// ViewModel for the give form
#[derive(Clone, Copy)]
pub struct GivePageViewModel {
    pub session: RwSignal<DonationSession>,
    /// Raw field texts, kept apart so partial input is not rewritten
    pub amount_text: RwSignal<String>,
    pub days_text: RwSignal<String>,
    pub mobile_text: RwSignal<String>,
    pub is_anonymous: RwSignal<bool>,
    /// Set once the mobile field loses focus
    pub mobile_left: RwSignal<bool>,
    fidyah_rate: u32,
}

impl GivePageViewModel {
    pub fn new(ctx: &AppContext) -> Self {
        let query = PageQuery::parse(&current_search());
        let session = DonationSession::for_give_page(&query, &session_store());

        let vm = Self {
            session: RwSignal::new(session),
            amount_text: RwSignal::new(String::new()),
            days_text: RwSignal::new(String::new()),
            mobile_text: RwSignal::new(String::new()),
            is_anonymous: RwSignal::new(false),
            mobile_left: RwSignal::new(false),
            fidyah_rate: ctx.with_config(|config| config.settings.fidyah_rate),
        };

        // The anonymity switch owns its signal; mirror it into the session.
        let session = vm.session;
        let is_anonymous = vm.is_anonymous;
        Effect::new(move |_| {
            let anonymous = is_anonymous.get();
            session.update(|s| s.set_anonymous(anonymous));
        });

        vm
    }

    pub fn category_code(&self) -> Option<String> {
        self.session.with(|s| s.category.clone())
    }

    pub fn shows_fidyah_calculator(&self) -> bool {
        self.session.with(|s| s.shows_fidyah_calculator())
    }

    pub fn shows_mobile_section(&self) -> bool {
        self.session.with(|s| s.shows_mobile_section())
    }

    pub fn calculated_fidyah(&self) -> Option<u64> {
        let rate = self.fidyah_rate;
        self.session.with(|s| s.calculated_fidyah(rate))
    }

    pub fn can_continue(&self) -> bool {
        self.session.with(|s| s.can_continue())
    }

    pub fn shows_mobile_error(&self) -> bool {
        let left = self.mobile_left.get();
        self.session.with(|s| s.shows_mobile_error(left))
    }

    pub fn on_mobile_blur(&self) {
        self.mobile_left.set(true);
    }

    pub fn on_amount_input(&self, value: String) {
        self.session.update(|s| s.set_amount_input(&value));
        self.amount_text.set(value);
    }

    pub fn set_preset_amount(&self, amount: u32) {
        self.on_amount_input(amount.to_string());
    }

    /// A day count of one or more rewrites the amount field
    pub fn on_days_input(&self, value: String) {
        let rate = self.fidyah_rate;
        self.session.update(|s| {
            s.set_fidyah_days_input(&value, rate);
        });
        self.days_text.set(value);

        if let Some(calculated) = self.session.with_untracked(|s| s.calculated_fidyah(rate)) {
            self.amount_text.set(calculated.to_string());
        }
    }

    pub fn on_mobile_input(&self, value: String) {
        self.session.update(|s| s.set_mobile_input(&value));
        self.mobile_text.set(value);
    }

    /// Store the donation details and leave for the payment page
    pub fn continue_command(&self, config: &AppConfig) {
        let checkout = match self
            .session
            .with_untracked(|s| s.checkout(&config.payment_pages))
        {
            Some(checkout) => checkout,
            None => return,
        };

        checkout.persist(&session_store());
        log::info!("Redirecting to payment page: {}", checkout.redirect_url);
        navigate(&checkout.redirect_url);
    }
}
