//! Command Center Feed Simulation
//!
//! Timer-driven simulators behind the command center dashboard: a news feed,
//! equity and index tickers, the map pulse flag and the header clock. Each
//! simulator is plain state with a `tick` step; the ticker runs it on a
//! cancellable tokio task and publishes snapshots.
//!
//! # Modules
//! - `config` — Periods, jitter bounds and feed capacity
//! - `jitter` — Seeded uniform decimal jitter
//! - `ticker` — Simulator trait, cancellable periodic task, snapshot channel
//! - `news` — Bounded news feed simulator
//! - `market` — Equity and index jitter simulators
//! - `pulse` — Map pulse flag
//! - `clock` — Header UTC clock
//! - `selection` — Hotspot selection state
//! - `seed` — Opening data for every panel
//! - `dashboard` — Starts everything, holds read-side intents
//! - `metrics` — Tick counters
//! - `export` — Dashboard JSON export
//! - `error` — Error taxonomy

pub mod config;
pub mod jitter;
pub mod ticker;
pub mod news;
pub mod market;
pub mod pulse;
pub mod clock;
pub mod selection;
pub mod seed;
pub mod dashboard;
pub mod metrics;
pub mod export;
pub mod error;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
