//! Raw HTTP clients for the remote services

mod auth;
mod cases;

pub use auth::AuthClient;
pub use cases::CasesClient;

/// Browser-like User-Agent; the services sit behind the same gateway as the
/// web dashboard and expect browser traffic.
pub(crate) const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
