//! Spin orchestrator state machine
//!
//! One spin attempt moves Idle → AwaitingGrant → Animating → Revealed and
//! back to Idle. The grant call is the only authority on eligibility; the
//! orchestrator gates locally for responsiveness, animates the granted
//! outcome on a fixed timeline, and reconciles the wallet only when the
//! reveal commits. Every attempt carries a monotonically increasing token
//! so a timer from an abandoned attempt can never mutate newer state.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use dailycase_core::{cooldown, Error, Result, SpinOutcome};
use dailycase_networking::CasesClient;
use dailycase_persistence::{AccountStore, CatalogCache};
use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::reconcile;
use crate::strip::RouletteStrip;

/// Observable lifecycle of a spin attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpinPhase {
    Idle,
    AwaitingGrant,
    Animating,
    Revealed,
}

/// Timing contract for the reveal animation.
///
/// The traversal begins after `start_delay` and the reveal commits at
/// `reveal_at()`, strictly after the full traversal has played out — even
/// when the grant response arrived instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpinTimeline {
    /// Delay before the strip translation starts
    pub start_delay: Duration,
    /// Length of the eased traversal
    pub traversal: Duration,
    /// Settle buffer between traversal end and the reveal commit
    pub settle: Duration,
}

impl SpinTimeline {
    /// The reference timeline: 50ms start delay, 4s traversal, 50ms settle,
    /// reveal at 4.1s
    pub const fn reference() -> Self {
        Self {
            start_delay: Duration::from_millis(50),
            traversal: Duration::from_secs(4),
            settle: Duration::from_millis(50),
        }
    }

    /// Time from animation start at which the reveal may commit
    pub fn reveal_at(&self) -> Duration {
        self.start_delay + self.traversal + self.settle
    }
}

impl Default for SpinTimeline {
    fn default() -> Self {
        Self::reference()
    }
}

/// Remote grant seam; implemented by the cases HTTP client and by scripted
/// fakes in tests
pub trait GrantService: Send + Sync + 'static {
    fn request_grant(&self, user_id: i64) -> impl Future<Output = Result<SpinOutcome>> + Send;
}

impl GrantService for CasesClient {
    async fn request_grant(&self, user_id: i64) -> Result<SpinOutcome> {
        self.spin(user_id).await
    }
}

/// Everything a renderer needs to drive one reveal
#[derive(Debug, Clone, Serialize)]
pub struct SpinTicket {
    pub attempt: u64,
    pub outcome: SpinOutcome,
    pub strip: RouletteStrip,
    pub timeline: SpinTimeline,
}

/// Result of a spin trigger
#[derive(Debug)]
pub enum SpinCycle {
    /// The trigger arrived while an attempt was in flight, or the session
    /// has no account / catalog yet; nothing was requested
    Ignored,
    /// The grant succeeded and the reveal timer is armed
    Spinning(SpinTicket),
}

#[derive(Debug)]
struct Session {
    phase: SpinPhase,
    attempt: u64,
    outcome: Option<SpinOutcome>,
}

impl Session {
    fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            attempt: 0,
            outcome: None,
        }
    }
}

/// Drives the daily spin cycle for one session
pub struct SpinOrchestrator<S: GrantService> {
    service: S,
    catalog: Arc<CatalogCache>,
    store: Arc<AccountStore>,
    timeline: SpinTimeline,
    session: Arc<Mutex<Session>>,
    phase_tx: Arc<watch::Sender<SpinPhase>>,
    /// Opaque countdown from the last authoritative 429, if any
    server_lockout: Mutex<Option<String>>,
    cancel: CancellationToken,
}

impl<S: GrantService> SpinOrchestrator<S> {
    pub fn new(service: S, catalog: Arc<CatalogCache>, store: Arc<AccountStore>) -> Self {
        Self::with_timeline(service, catalog, store, SpinTimeline::reference())
    }

    pub fn with_timeline(
        service: S,
        catalog: Arc<CatalogCache>,
        store: Arc<AccountStore>,
        timeline: SpinTimeline,
    ) -> Self {
        let (phase_tx, _) = watch::channel(SpinPhase::Idle);
        Self {
            service,
            catalog,
            store,
            timeline,
            session: Arc::new(Mutex::new(Session::new())),
            phase_tx: Arc::new(phase_tx),
            server_lockout: Mutex::new(None),
            cancel: CancellationToken::new(),
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> SpinPhase {
        *self.phase_tx.borrow()
    }

    /// Watch phase transitions (for UI)
    pub fn subscribe(&self) -> watch::Receiver<SpinPhase> {
        self.phase_tx.subscribe()
    }

    pub fn timeline(&self) -> SpinTimeline {
        self.timeline
    }

    /// Outcome of the most recent attempt, once bound
    pub fn last_outcome(&self) -> Option<SpinOutcome> {
        self.session.lock().ok()?.outcome.clone()
    }

    /// Remaining local lockout, `None` when a spin is permitted
    pub fn lockout(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let last = self.store.current().and_then(|a| a.last_daily_spin);
        cooldown::remaining_lockout(last, now)
    }

    /// Countdown string for display. The server-reported value from the
    /// last authoritative refusal wins over the locally computed one until
    /// the next accepted attempt or reset.
    pub fn lockout_display(&self, now: DateTime<Utc>) -> Option<String> {
        if let Ok(guard) = self.server_lockout.lock() {
            if let Some(ref time_left) = *guard {
                return Some(time_left.clone());
            }
        }
        self.lockout(now).map(cooldown::format_lockout)
    }

    /// Start a spin attempt.
    ///
    /// A trigger while an attempt is in flight is a no-op, not a queued
    /// request. Local lockout refuses before any network traffic; the
    /// server re-checks authoritatively and its 429 surfaces as
    /// `Error::LockedOut` with the opaque server countdown. Transport-class
    /// failures abort silently back to idle and the user may retry at once.
    pub async fn trigger(&self) -> Result<SpinCycle> {
        let (attempt, user_id) = {
            let Ok(mut session) = self.session.lock() else {
                return Ok(SpinCycle::Ignored);
            };
            if session.phase != SpinPhase::Idle {
                debug!(
                    "Spin trigger ignored, attempt {} still in flight",
                    session.attempt
                );
                return Ok(SpinCycle::Ignored);
            }
            let Some(account) = self.store.current() else {
                debug!("Spin trigger ignored, no signed-in account");
                return Ok(SpinCycle::Ignored);
            };
            if !self.catalog.is_loaded() || self.catalog.is_empty() {
                debug!("Spin trigger ignored, catalog not available");
                return Ok(SpinCycle::Ignored);
            }
            if let Some(remaining) =
                cooldown::remaining_lockout(account.last_daily_spin, Utc::now())
            {
                return Err(Error::LockedOut {
                    time_left: cooldown::format_lockout(remaining),
                });
            }
            session.attempt += 1;
            session.phase = SpinPhase::AwaitingGrant;
            session.outcome = None;
            (session.attempt, account.id)
        };
        self.set_server_lockout(None);
        self.publish(SpinPhase::AwaitingGrant);
        info!("Spin attempt {} requesting grant for user {}", attempt, user_id);

        let outcome = match self.service.request_grant(user_id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if let Error::LockedOut { ref time_left } = err {
                    info!("Grant refused, server reports {} remaining", time_left);
                    self.set_server_lockout(Some(time_left.clone()));
                } else {
                    warn!("Grant attempt {} aborted: {}", attempt, err);
                }
                self.abort_attempt(attempt);
                return Err(err);
            }
        };

        let catalog = self.catalog.items().unwrap_or_default();
        let strip = RouletteStrip::build(&catalog, outcome.item.clone());

        {
            let Ok(mut session) = self.session.lock() else {
                return Ok(SpinCycle::Ignored);
            };
            if session.attempt != attempt {
                debug!("Attempt {} superseded during grant, discarding", attempt);
                return Ok(SpinCycle::Ignored);
            }
            session.phase = SpinPhase::Animating;
            session.outcome = Some(outcome.clone());
        }
        self.publish(SpinPhase::Animating);
        self.arm_reveal_timer(attempt);

        Ok(SpinCycle::Spinning(SpinTicket {
            attempt,
            outcome,
            strip,
            timeline: self.timeline,
        }))
    }

    /// Tear down the current attempt (e.g. the hosting view navigated
    /// away). Bumps the attempt token, so a reveal timer still pending for
    /// the old attempt commits nothing.
    pub fn reset(&self) {
        if let Ok(mut session) = self.session.lock() {
            if session.phase != SpinPhase::Idle {
                debug!("Resetting session mid-attempt {}", session.attempt);
            }
            session.attempt += 1;
            session.phase = SpinPhase::Idle;
            session.outcome = None;
        }
        self.set_server_lockout(None);
        self.publish(SpinPhase::Idle);
    }

    /// Cancel any pending reveal timer outright (orchestrator teardown)
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn arm_reveal_timer(&self, attempt: u64) {
        let session = Arc::clone(&self.session);
        let store = Arc::clone(&self.store);
        let phase_tx = Arc::clone(&self.phase_tx);
        let cancel = self.cancel.clone();
        let reveal_at = self.timeline.reveal_at();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Reveal timer for attempt {} cancelled", attempt);
                    return;
                }
                _ = tokio::time::sleep(reveal_at) => {}
            }
            commit_reveal(&session, &store, &phase_tx, attempt).await;
        });
    }

    fn abort_attempt(&self, attempt: u64) {
        let mut aborted = false;
        if let Ok(mut session) = self.session.lock() {
            if session.attempt == attempt {
                session.phase = SpinPhase::Idle;
                session.outcome = None;
                aborted = true;
            }
        }
        if aborted {
            self.publish(SpinPhase::Idle);
        }
    }

    fn set_server_lockout(&self, value: Option<String>) {
        if let Ok(mut guard) = self.server_lockout.lock() {
            *guard = value;
        }
    }

    fn publish(&self, phase: SpinPhase) {
        self.phase_tx.send_replace(phase);
    }
}

/// Reveal commit, run from the detached timer.
///
/// Checks the attempt token before touching anything: a reset or a newer
/// attempt owns the session now and a stale timer must leave it alone. The
/// machine passes through Revealed and lands back on Idle within this one
/// call; reconciliation happens in between, so the session cannot accept a
/// new trigger until the wallet write has finished.
async fn commit_reveal(
    session: &Mutex<Session>,
    store: &AccountStore,
    phase_tx: &watch::Sender<SpinPhase>,
    attempt: u64,
) {
    let outcome = {
        let Ok(mut session) = session.lock() else {
            return;
        };
        if session.attempt != attempt || session.phase != SpinPhase::Animating {
            debug!("Discarding stale reveal for attempt {}", attempt);
            return;
        }
        session.phase = SpinPhase::Revealed;
        session.outcome.clone()
    };
    phase_tx.send_replace(SpinPhase::Revealed);

    // The outcome is always bound before the timer is armed
    if let Some(outcome) = outcome {
        if let Some(account) = store.current() {
            let updated = reconcile::apply_outcome(&account, &outcome, Utc::now());
            match store.commit_reconciled(updated).await {
                Ok(account) => info!(
                    "Reconciled spin for {}: balance {}, privilege {}",
                    account.username, account.balance, account.privilege
                ),
                Err(e) => { eprintln!("DBGPERSIST FAIL: {}", e); warn!("Failed to persist reconciled account: {}", e) },
            }
        }
    }

    let mut finished = false;
    if let Ok(mut session) = session.lock() {
        if session.attempt == attempt {
            session.phase = SpinPhase::Idle;
            finished = true;
        }
    }
    if finished {
        phase_tx.send_replace(SpinPhase::Idle);
    }
}
