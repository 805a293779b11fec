pub mod donation;
pub mod page;
pub mod query;
pub mod storage;

pub use page::Page;
pub use query::PageQuery;
pub use storage::SessionStore;
