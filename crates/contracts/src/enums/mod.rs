pub mod donation_category;
pub mod language;

pub use donation_category::DonationCategory;
pub use language::Language;
