use crate::shared::components::{CategoryBadge, PageHeader};
use crate::shared::i18n_text::Tr;
use crate::shared::icons::icon;
use crate::shared::navigation::navigate;
use crate::system::storage::session_store;
use contracts::domain::page::{give_url, info_url};
use contracts::domain::storage::DONATION_TYPE_KEY;
use contracts::domain::SessionStore;
use contracts::enums::DonationCategory;
use leptos::prelude::*;

fn select_category(category: DonationCategory) {
    session_store().set(DONATION_TYPE_KEY, category.code());
    navigate(&give_url(category));
}

/// Category list
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <PageHeader title="home.title" fallback="Choose a cause" subtitle="home.subtitle" />

            <div class="category-list">
                {DonationCategory::all()
                    .into_iter()
                    .map(|category| view! { <CategoryCard category=category /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: DonationCategory) -> impl IntoView {
    view! {
        <div class="category-card">
            <button class="category-card__main" on:click=move |_| select_category(category)>
                <CategoryBadge category=category />
                <div class="category-card__text">
                    <h3 class="category-card__title">
                        <Tr path=category.title_key() fallback=category.code() />
                    </h3>
                    <p class="category-card__description">
                        <Tr path=category.description_key() />
                    </p>
                </div>
            </button>
            <a class="category-card__info" href=info_url(Some(category))>
                {icon("info")}
                <Tr path="home.learn_more" fallback="Learn more" />
            </a>
        </div>
    }
}
