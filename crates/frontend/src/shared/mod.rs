pub mod assets;
pub mod components;
pub mod dom;
pub mod i18n_text;
pub mod icons;
pub mod navigation;
