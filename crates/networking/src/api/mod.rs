//! High-level API wrappers over the raw HTTP clients
//!
//! These compose a client with the session-scoped caches and store, and are
//! what hosting code calls at mount / refresh time.

mod cases;
mod user;

pub use cases::*;
pub use user::*;
