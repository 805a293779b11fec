//! The donation being prepared, and what the pages derive from it

pub mod fidyah;
pub mod info;
pub mod session;
pub mod success;

pub use fidyah::calculate_fidyah_amount;
pub use info::InfoContent;
pub use session::{Checkout, DonationSession};
pub use success::SuccessSummary;
