use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::i18n_text::Tr;
use crate::shared::icons::icon;
use crate::shared::navigation::{current_search, navigate, open_in_new_tab, origin};
use crate::system::storage::session_store;
use contracts::domain::donation::SuccessSummary;
use contracts::domain::{Page, PageQuery, SessionStore};
use contracts::shared::share::{telegram_share_url, whatsapp_share_url};
use leptos::prelude::*;

/// Forget the finished donation and start over
fn make_another_donation() {
    session_store().clear_donation();
    navigate(Page::Home.path());
}

#[component]
pub fn SuccessPage() -> impl IntoView {
    let ctx = use_app_context();
    let summary = SuccessSummary::resolve(&PageQuery::parse(&current_search()), &session_store());

    let category_summary = summary.clone();
    let category_label = move || {
        let language = ctx.language.get();
        ctx.translations
            .with(|t| category_summary.category_label(t, language))
    };
    let amount_label = summary.amount_label();
    let anonymous = summary.is_anonymous();

    let join_whatsapp = move |_: leptos::ev::MouseEvent| {
        let link = ctx.with_config(|config| config.settings.whatsapp_link.clone());
        open_in_new_tab(&link);
    };

    view! {
        <section class="page page--success">
            <div class="success-banner">
                {icon("check-circle")}
                <h1><Tr path="success.title" fallback="Thank you!" /></h1>
                <p><Tr path="success.message" fallback="May Allah accept your donation." /></p>
            </div>

            <dl class="success-details">
                {move || category_label().map(|label| view! {
                    <dt><Tr path="success.type" fallback="Donation type" /></dt>
                    <dd id="donation-type">{label}</dd>
                })}
                {amount_label.map(|amount| view! {
                    <dt><Tr path="success.amount" fallback="Amount" /></dt>
                    <dd id="donation-amount">{amount}</dd>
                })}
                {anonymous.map(|is_anonymous| view! {
                    <dt><Tr path="success.anonymous" fallback="Anonymous" /></dt>
                    <dd id="donation-anonymous">
                        {if is_anonymous {
                            view! { <Tr path="common.yes" fallback="Yes" /> }.into_any()
                        } else {
                            view! { <Tr path="common.no" fallback="No" /> }.into_any()
                        }}
                    </dd>
                })}
            </dl>

            <div class="success-actions">
                <Button on_click=Callback::new(|_| make_another_donation())>
                    <Tr path="success.another" fallback="Make another donation" />
                </Button>
                <Button variant="secondary" on_click=Callback::new(join_whatsapp)>
                    {icon("users")}
                    <Tr path="success.join_whatsapp" fallback="Join our WhatsApp group" />
                </Button>
            </div>

            <div class="share-actions">
                <p><Tr path="success.share" fallback="Share with friends" /></p>
                <Button
                    variant="ghost"
                    on_click=Callback::new(|_| open_in_new_tab(&whatsapp_share_url(&origin())))
                >
                    {icon("share")}
                    "WhatsApp"
                </Button>
                <Button
                    variant="ghost"
                    on_click=Callback::new(|_| open_in_new_tab(&telegram_share_url(&origin())))
                >
                    {icon("share")}
                    "Telegram"
                </Button>
            </div>
        </section>
    }
}
