use contracts::enums::Language;
use contracts::shared::i18n::Translations;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

/// Reflect the active language on the document: `<html lang>`, the body
/// font class, and `data-i18n` elements in the static `<head>` markup that
/// the app does not render itself (such as `<title>`).
pub fn apply_document_language(language: Language, translations: &Translations) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", language.code());
    }

    if let Some(body) = document.body() {
        let classes = body.class_list();
        for candidate in Language::all() {
            if let Some(class) = candidate.body_font_class() {
                let _ = if candidate == language {
                    classes.add_1(class)
                } else {
                    classes.remove_1(class)
                };
            }
        }
    }

    let tagged = match document.query_selector_all("head [data-i18n]") {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    for index in 0..tagged.length() {
        let element = match tagged.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        if let Some(key) = element.get_attribute("data-i18n") {
            let current = element.text_content().unwrap_or_default();
            element.set_text_content(Some(&translations.retranslate(language, &key, &current)));
        }
    }
}
