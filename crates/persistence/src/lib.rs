//! Daily Case Persistence - Local account blob, session store, and catalog cache

pub mod cache;
pub mod sqlite;
pub mod store;

pub use cache::CatalogCache;
pub use sqlite::Database;
pub use store::AccountStore;
