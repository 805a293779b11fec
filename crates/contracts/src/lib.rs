//! Browser-free core of the Infaq donation site.
//!
//! Everything that can be decided without a DOM lives here: categories and
//! languages, the embedded site configuration, translation lookup, input
//! validation, fidyah arithmetic, payment URL resolution, page identity and
//! the session-state model that the frontend threads through its pages.

pub mod domain;
pub mod enums;
pub mod shared;
