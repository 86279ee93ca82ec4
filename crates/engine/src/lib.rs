//! Daily Case Engine - Spin orchestration, reconciliation, and display timing

pub mod cooldown_ticker;
pub mod easing;
pub mod reconcile;
pub mod spin;
pub mod strip;

pub use cooldown_ticker::{spawn_cooldown_ticker, CooldownTick, CooldownTickerHandle};
pub use easing::{CubicBezier, SPIN_EASING};
pub use spin::{GrantService, SpinCycle, SpinOrchestrator, SpinPhase, SpinTicket, SpinTimeline};
pub use strip::RouletteStrip;
