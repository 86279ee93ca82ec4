//! Daily Case Networking - HTTP clients for the cases and auth services

pub mod api;
pub mod http;

pub use http::{AuthClient, CasesClient};
