//! SQLite database management

mod account;
mod connection;

pub use account::*;
pub use connection::Database;
