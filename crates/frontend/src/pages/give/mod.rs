//! Give page
//!
//! MVVM split:
//! - view_model.rs: form state and commands over `DonationSession`
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::GivePage;
pub use view_model::GivePageViewModel;
