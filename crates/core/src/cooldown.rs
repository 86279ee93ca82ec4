//! Daily spin cooldown math
//!
//! Pure functions of the last-spin timestamp and the current time. Callers
//! may evaluate these at any rate; the authoritative gate is re-checked
//! server-side on every grant attempt.

use chrono::{DateTime, Duration, Utc};

/// Rolling lockout window between daily spins
fn spin_window() -> Duration {
    Duration::hours(24)
}

/// Remaining lockout before the next spin is permitted.
///
/// `None` means the spin is allowed: the user has never spun, or the full
/// 24h window has elapsed. Otherwise the strictly positive remainder of the
/// window.
pub fn remaining_lockout(
    last_spin_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<Duration> {
    let last = last_spin_at?;
    let elapsed = now - last;
    if elapsed >= spin_window() {
        None
    } else {
        Some(spin_window() - elapsed)
    }
}

/// Format a lockout remainder as whole hours and minutes, matching the
/// server's own `"{h}ч {m}м"` rendering.
///
/// Both parts are floored, never rounded: a window with 30 seconds left
/// still reads `"0ч 0м"` until it expires.
pub fn format_lockout(remaining: Duration) -> String {
    let total_secs = remaining.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    format!("{}ч {}м", hours, minutes)
}
