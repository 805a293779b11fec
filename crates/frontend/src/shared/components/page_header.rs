use crate::shared::i18n_text::Tr;
use leptos::prelude::*;

/// Page title block with an optional subtitle and actions
#[component]
pub fn PageHeader(
    /// Dictionary key of the title
    #[prop(into)]
    title: String,

    /// Text shown until the title is translated
    #[prop(optional, into)]
    fallback: String,

    /// Dictionary key of the subtitle
    #[prop(optional, into)]
    subtitle: Option<String>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    <Tr path=title fallback=fallback />
                </h1>
                {subtitle.map(|key| view! {
                    <p class="page-header__subtitle">
                        <Tr path=key />
                    </p>
                })}
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}
