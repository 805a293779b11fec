use serde::{Deserialize, Serialize};
use std::fmt;

/// Donation categories offered by the masjid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationCategory {
    Zakat,
    Fidyah,
    Kaffarah,
    Sadaqah,
    /// General masjid fund, also the fallback category
    #[default]
    MasjidFund,
}

impl DonationCategory {
    /// Code used in URLs, session storage and translation keys
    pub fn code(&self) -> &'static str {
        match self {
            DonationCategory::Zakat => "zakat",
            DonationCategory::Fidyah => "fidyah",
            DonationCategory::Kaffarah => "kaffarah",
            DonationCategory::Sadaqah => "sadaqah",
            DonationCategory::MasjidFund => "masjid_fund",
        }
    }

    /// Name of the icon drawn for this category
    pub fn icon_name(&self) -> &'static str {
        match self {
            DonationCategory::MasjidFund => "masjid",
            other => other.code(),
        }
    }

    /// Background class of the round category badge
    pub fn accent_class(&self) -> &'static str {
        match self {
            DonationCategory::Zakat => "bg-primary-600",
            DonationCategory::Fidyah => "bg-green-600",
            DonationCategory::Kaffarah => "bg-gold-600",
            DonationCategory::Sadaqah => "bg-purple-600",
            DonationCategory::MasjidFund => "bg-blue-600",
        }
    }

    /// Fidyah is paid per missed fasting day and gets a day calculator
    pub fn has_day_calculator(&self) -> bool {
        matches!(self, DonationCategory::Fidyah)
    }

    /// Translation key of the category title
    pub fn title_key(&self) -> String {
        format!("donation.{}.title", self.code())
    }

    /// Translation key of the short category description
    pub fn description_key(&self) -> String {
        format!("donation.{}.description", self.code())
    }

    pub fn all() -> [DonationCategory; 5] {
        [
            DonationCategory::Zakat,
            DonationCategory::Fidyah,
            DonationCategory::Kaffarah,
            DonationCategory::Sadaqah,
            DonationCategory::MasjidFund,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zakat" => Some(DonationCategory::Zakat),
            "fidyah" => Some(DonationCategory::Fidyah),
            "kaffarah" => Some(DonationCategory::Kaffarah),
            "sadaqah" => Some(DonationCategory::Sadaqah),
            "masjid_fund" => Some(DonationCategory::MasjidFund),
            _ => None,
        }
    }
}

impl fmt::Display for DonationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for category in DonationCategory::all() {
            assert_eq!(DonationCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(DonationCategory::from_code("masjidFund"), None);
        assert_eq!(DonationCategory::from_code("ZAKAT"), None);
        assert_eq!(DonationCategory::from_code("interest"), None);
    }

    #[test]
    fn test_only_fidyah_has_calculator() {
        let with_calculator: Vec<_> = DonationCategory::all()
            .into_iter()
            .filter(|c| c.has_day_calculator())
            .collect();
        assert_eq!(with_calculator, vec![DonationCategory::Fidyah]);
    }

    #[test]
    fn test_translation_keys() {
        assert_eq!(DonationCategory::Zakat.title_key(), "donation.zakat.title");
        assert_eq!(
            DonationCategory::MasjidFund.description_key(),
            "donation.masjid_fund.description"
        );
        assert_eq!(DonationCategory::MasjidFund.icon_name(), "masjid");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&DonationCategory::MasjidFund).unwrap();
        assert_eq!(json, "\"masjid_fund\"");
    }
}
