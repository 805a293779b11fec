//! One module per static page. The same bundle serves every page and picks
//! the view from the URL path.

pub mod give;
pub mod home;
pub mod index;
pub mod info;
pub mod success;

use contracts::domain::Page;
use leptos::prelude::*;

pub fn page_view(page: Page) -> AnyView {
    match page {
        Page::Index => view! { <index::IndexPage /> }.into_any(),
        Page::Home => view! { <home::HomePage /> }.into_any(),
        Page::Give => view! { <give::GivePage /> }.into_any(),
        Page::Info => view! { <info::InfoPage /> }.into_any(),
        Page::Success => view! { <success::SuccessPage /> }.into_any(),
    }
}
