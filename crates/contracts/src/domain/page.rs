//! Which static page is being shown, and links between pages

use crate::enums::{DonationCategory, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Language chooser, the entry point
    Index,
    /// Category list
    Home,
    /// Amount form for one category
    Give,
    /// Explanation of a category
    Info,
    /// Shown after the payment provider sends the donor back
    Success,
}

impl Page {
    /// Identify the page from `location.pathname`
    pub fn from_path(path: &str) -> Self {
        if path.contains("home.html") {
            Page::Home
        } else if path.contains("give.html") {
            Page::Give
        } else if path.contains("info.html") {
            Page::Info
        } else if path.contains("success.html") {
            Page::Success
        } else {
            Page::Index
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Index => "/index.html",
            Page::Home => "/home.html",
            Page::Give => "/give.html",
            Page::Info => "/info.html",
            Page::Success => "/success.html",
        }
    }

    /// Every page except the language chooser needs a language picked first
    pub fn requires_language(&self) -> bool {
        !matches!(self, Page::Index)
    }

    /// Where to send the visitor before rendering, if anywhere
    pub fn startup_redirect(&self, saved_language: Option<Language>) -> Option<&'static str> {
        if saved_language.is_none() && self.requires_language() {
            Some(Page::Index.path())
        } else {
            None
        }
    }
}

pub fn give_url(category: DonationCategory) -> String {
    format!("{}?type={}", Page::Give.path(), category.code())
}

pub fn info_url(category: Option<DonationCategory>) -> String {
    match category {
        Some(category) => format!("{}?category={}", Page::Info.path(), category.code()),
        None => Page::Info.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/home.html"), Page::Home);
        assert_eq!(Page::from_path("/give.html"), Page::Give);
        assert_eq!(Page::from_path("/app/info.html"), Page::Info);
        assert_eq!(Page::from_path("/success.html"), Page::Success);
        assert_eq!(Page::from_path("/"), Page::Index);
        assert_eq!(Page::from_path("/index.html"), Page::Index);
        assert_eq!(Page::from_path("/unknown"), Page::Index);
    }

    #[test]
    fn test_startup_redirect() {
        assert_eq!(Page::Give.startup_redirect(None), Some("/index.html"));
        assert_eq!(Page::Success.startup_redirect(None), Some("/index.html"));
        assert_eq!(Page::Index.startup_redirect(None), None);
        assert_eq!(Page::Give.startup_redirect(Some(Language::Ml)), None);
    }

    #[test]
    fn test_links() {
        assert_eq!(give_url(DonationCategory::Fidyah), "/give.html?type=fidyah");
        assert_eq!(
            info_url(Some(DonationCategory::MasjidFund)),
            "/info.html?category=masjid_fund"
        );
        assert_eq!(info_url(None), "/info.html");
    }
}
