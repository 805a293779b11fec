//! TopHeader component - the bar above every page.
//!
//! Contains:
//! - Back button (not on the language chooser)
//! - Site title
//! - Language toggle

use crate::layout::global_context::use_app_context;
use crate::shared::i18n_text::Tr;
use crate::shared::icons::icon;
use crate::shared::navigation::go_back;
use contracts::domain::Page;
use leptos::prelude::*;

#[component]
pub fn TopHeader(page: Page) -> impl IntoView {
    let ctx = use_app_context();

    let switch_language = move |_| {
        ctx.switch_language();
    };

    view! {
        <div class="top-header">
            <div class="top-header__nav">
                <Show when=move || page != Page::Index>
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| go_back()
                        title=move || ctx.t("nav.back")
                    >
                        {icon("arrow-left")}
                    </button>
                </Show>
            </div>

            <div class="top-header__brand">
                <span class="top-header__title">
                    <Tr path="app.title" fallback="Infaq" />
                </span>
            </div>

            <div class="top-header__actions">
                <Show when=move || page != Page::Index>
                    <button
                        class="top-header__lang-btn"
                        on:click=switch_language
                    >
                        {icon("globe")}
                        <span>{move || ctx.language.get().toggle_label()}</span>
                    </button>
                </Show>
            </div>
        </div>
    }
}
