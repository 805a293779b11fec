use crate::shared::i18n_text::Tr;
use leptos::prelude::*;

/// Input component with label and hint support
#[component]
pub fn Input(
    /// Dictionary key of the label (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Input value; written as a property so programmatic changes show up
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Called when the field loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Virtual keyboard hint, e.g. "numeric"
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Smallest accepted number for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// Maximum number of characters
    #[prop(optional, into)]
    maxlength: MaybeProp<String>,
    /// Marks the field as invalid
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let invalid_class = move || {
        if invalid.get().unwrap_or(false) {
            "form__input--invalid"
        } else {
            ""
        }
    };

    view! {
        <div class="form__group">
            {label.map(|key| view! {
                <label class="form__label" for=input_id>
                    <Tr path=key />
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {} {}", invalid_class(), additional_class())
                type=input_t
                inputmode=move || inputmode.get()
                min=move || min.get()
                maxlength=move || maxlength.get()
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
        </div>
    }
}
