pub mod config;
pub mod format;
pub mod i18n;
pub mod share;
pub mod validation;
