use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::i18n_text::Tr;
use crate::shared::icons::Icon;
use crate::shared::navigation::navigate;
use contracts::domain::Page;
use contracts::enums::Language;
use leptos::prelude::*;

/// Language chooser, the first page a visitor sees
#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_app_context();

    let choose = move |language: Language| {
        ctx.set_language(language);
        navigate(Page::Home.path());
    };

    view! {
        <section class="page page--index">
            <div class="brand">
                <Icon name="masjid" class="brand__icon" />
                <h1 class="brand__title">
                    <Tr path="app.title" fallback="Infaq" />
                </h1>
                <p class="brand__subtitle">
                    <Tr path="app.subtitle" fallback="Masjid Ul Huda" />
                </p>
            </div>

            <h2 class="page__heading">
                <Tr path="language.choose" fallback="Choose your language" />
            </h2>

            <div class="language-options">
                {Language::all()
                    .into_iter()
                    .map(|language| {
                        view! {
                            <Button
                                variant="secondary"
                                class="language-option"
                                on_click=Callback::new(move |_| choose(language))
                            >
                                <span lang=language.code()>{language.display_name()}</span>
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
