use crate::shared::icons::Icon;
use contracts::enums::DonationCategory;
use leptos::prelude::*;

/// Round badge with the category icon on the category colour
#[component]
pub fn CategoryBadge(
    category: DonationCategory,
    /// "lg" for page headers, small otherwise
    #[prop(optional, into)]
    size: MaybeProp<String>,
) -> impl IntoView {
    let size_class = move || {
        if size.get().as_deref() == Some("lg") {
            "category-badge--lg"
        } else {
            "category-badge--sm"
        }
    };

    view! {
        <div class=move || format!("category-badge {} {}", size_class(), category.accent_class())>
            <Icon name=category.icon_name() class="category-badge__icon" />
        </div>
    }
}
