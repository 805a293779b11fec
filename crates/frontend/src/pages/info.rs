use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::CategoryBadge;
use crate::shared::i18n_text::Tr;
use crate::shared::navigation::{current_search, navigate};
use crate::system::storage::session_store;
use contracts::domain::donation::InfoContent;
use contracts::domain::page::give_url;
use contracts::domain::PageQuery;
use contracts::enums::DonationCategory;
use leptos::prelude::*;

/// Explanation of one category, from the `info.<category>` dictionary section
#[component]
pub fn InfoPage() -> impl IntoView {
    let ctx = use_app_context();
    let requested =
        InfoContent::requested_category(&PageQuery::parse(&current_search()), &session_store());

    let content = move || {
        let code = requested.clone()?;
        let language = ctx.language.get();
        ctx.translations
            .with(|t| InfoContent::resolve(t, language, &code))
    };

    view! {
        <section class="page page--info">
            {move || content().map(|info| {
                let badge_category = info.category.unwrap_or(DonationCategory::Zakat);
                view! {
                    <div class="info-header">
                        <CategoryBadge category=badge_category size="lg" />
                        <h1 id="info-title" class="info-header__title">{info.title.clone()}</h1>
                    </div>
                    <div id="info-content" class="info-content">
                        <div class="info-content__heading">
                            <div class=format!("info-content__badge {}", info.accent_class())></div>
                            <h3>{info.title.clone()}</h3>
                        </div>
                        <p class="info-content__body">{info.body.clone()}</p>
                        <div class="info-content__rate">{info.rate.clone()}</div>
                    </div>
                    {info.category.map(|category| view! {
                        <Button on_click=Callback::new(move |_| navigate(&give_url(category)))>
                            <Tr path="nav.donate" fallback="Donate now" />
                        </Button>
                    })}
                }
            })}
        </section>
    }
}
