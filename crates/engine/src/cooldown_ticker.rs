//! Cooldown display ticker
//!
//! Re-evaluates the lockout once per minute and republishes it for display
//! freshness. Purely cosmetic cadence: the pure cooldown math can be called
//! at any rate, and the server re-checks eligibility on every grant attempt
//! regardless of what this task last published.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dailycase_core::cooldown;
use dailycase_persistence::AccountStore;
use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// How often the display countdown is re-evaluated (seconds)
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Snapshot published on every tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CooldownTick {
    /// Locally formatted remaining lockout, `None` when a spin is permitted
    pub time_left: Option<String>,
    pub can_spin: bool,
}

/// Handle to control the ticker task
#[derive(Clone)]
pub struct CooldownTickerHandle {
    cancel: CancellationToken,
}

impl CooldownTickerHandle {
    /// Stop the ticker task entirely
    pub fn stop(&self) {
        self.cancel.cancel();
        info!("Cooldown ticker stopped");
    }
}

/// Spawn the ticker background task.
///
/// Returns a control handle and the receiver carrying the latest snapshot;
/// the initial value is computed immediately rather than a minute in.
pub fn spawn_cooldown_ticker(
    store: Arc<AccountStore>,
) -> (CooldownTickerHandle, watch::Receiver<CooldownTick>) {
    let cancel = CancellationToken::new();
    let (tx, rx) = watch::channel(snapshot(&store));

    let handle = CooldownTickerHandle {
        cancel: cancel.clone(),
    };

    tokio::spawn(ticker_loop(store, cancel, tx));

    (handle, rx)
}

fn snapshot(store: &AccountStore) -> CooldownTick {
    let last = store.current().and_then(|a| a.last_daily_spin);
    let remaining = cooldown::remaining_lockout(last, Utc::now());
    CooldownTick {
        can_spin: remaining.is_none(),
        time_left: remaining.map(cooldown::format_lockout),
    }
}

async fn ticker_loop(
    store: Arc<AccountStore>,
    cancel: CancellationToken,
    tx: watch::Sender<CooldownTick>,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(TICK_INTERVAL_SECS));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Cooldown ticker cancelled, exiting");
                return;
            }
            _ = interval.tick() => {
                if tx.send(snapshot(&store)).is_err() {
                    debug!("Cooldown ticker receiver dropped, exiting");
                    return;
                }
            }
        }
    }
}
