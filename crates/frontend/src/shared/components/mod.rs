pub mod category_badge;
pub mod page_header;
pub mod ui;

pub use category_badge::CategoryBadge;
pub use page_header::PageHeader;
