use super::view_model::GivePageViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CategoryBadge;
use crate::shared::i18n_text::Tr;
use contracts::enums::DonationCategory;
use contracts::shared::format::format_inr;
use leptos::prelude::*;
use thaw::Switch;

#[component]
pub fn GivePage() -> impl IntoView {
    let ctx = use_app_context();
    let vm = GivePageViewModel::new(&ctx);

    let known_category = move || {
        vm.category_code()
            .and_then(|code| DonationCategory::from_code(&code))
    };
    let preset_amounts = ctx.with_config(|config| config.settings.preset_amounts.clone());

    view! {
        <section class="page page--give">
            // Category header: only for categories we know how to draw
            {move || known_category().map(|category| view! {
                <div class="give-header">
                    <CategoryBadge category=category size="lg" />
                    <h1 id="donation-title" class="give-header__title">
                        {move || ctx.category_title(category.code())}
                    </h1>
                    <p id="donation-description" class="give-header__description">
                        {move || ctx.t(&category.description_key())}
                    </p>
                </div>
            })}

            {move || vm.category_code().map(|code| view! {
                <span id="category-chip" class="category-chip">
                    {move || ctx.category_title(&code)}
                </span>
            })}

            <Show when=move || vm.shows_fidyah_calculator()>
                <div id="fidyah-calculator" class="fidyah-calculator">
                    <Input
                        id="fidyah-days-input"
                        label="give.fidyah_days"
                        input_type="number"
                        inputmode="numeric"
                        min="1"
                        value=vm.days_text
                        on_input=Callback::new(move |value: String| vm.on_days_input(value))
                        placeholder=Signal::derive(move || ctx.t("give.fidyah_days_placeholder"))
                    />
                    {move || vm.calculated_fidyah().map(|amount| view! {
                        <p id="fidyah-calculated-amount" class="fidyah-calculator__result">
                            <Tr path="give.calculated_amount" fallback="Calculated amount:" />
                            " "
                            <strong>{format_inr(amount as f64)}</strong>
                        </p>
                    })}
                </div>
            </Show>

            <div class="amount-presets">
                {preset_amounts
                    .into_iter()
                    .map(|amount| view! {
                        <Button
                            variant="chip"
                            size="sm"
                            on_click=Callback::new(move |_| vm.set_preset_amount(amount))
                        >
                            {format_inr(f64::from(amount))}
                        </Button>
                    })
                    .collect_view()}
            </div>

            <Input
                id="amount-input"
                label="give.amount"
                input_type="number"
                inputmode="decimal"
                min="1"
                value=vm.amount_text
                on_input=Callback::new(move |value: String| vm.on_amount_input(value))
                placeholder=Signal::derive(move || ctx.t("give.amount_placeholder"))
            />

            <div class="anonymous-toggle">
                <Switch checked=vm.is_anonymous />
                <div class="anonymous-toggle__text">
                    <Tr path="give.anonymous" fallback="Give anonymously" class="anonymous-toggle__label" />
                    <Tr path="give.anonymous_hint" class="anonymous-toggle__hint" />
                </div>
            </div>

            <Show when=move || vm.shows_mobile_section()>
                <div id="mobile-section" class="mobile-section">
                    <Input
                        id="mobile-input"
                        label="give.mobile"
                        input_type="tel"
                        inputmode="numeric"
                        maxlength="10"
                        value=vm.mobile_text
                        invalid=Signal::derive(move || vm.shows_mobile_error())
                        on_input=Callback::new(move |value: String| vm.on_mobile_input(value))
                        on_blur=Callback::new(move |_| vm.on_mobile_blur())
                        placeholder=Signal::derive(move || ctx.t("give.mobile_placeholder"))
                    />
                    <Show when=move || vm.shows_mobile_error()>
                        <p class="form__error">
                            <Tr path="give.mobile_invalid" fallback="Enter a 10-digit mobile number" />
                        </p>
                    </Show>
                </div>
            </Show>

            <Button
                class="continue-button"
                disabled=Signal::derive(move || !vm.can_continue())
                on_click=Callback::new(move |_| {
                    ctx.with_config(|config| vm.continue_command(config));
                })
            >
                <Tr path="give.continue" fallback="Continue to payment" />
            </Button>
        </section>
    }
}
