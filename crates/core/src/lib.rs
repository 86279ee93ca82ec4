//! Daily Case Core - Shared data models, cooldown math, and errors

pub mod cooldown;
pub mod errors;
pub mod models;

pub use errors::{Error, Result};
pub use models::*;
