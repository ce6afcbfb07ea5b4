//! Error types for the simulation runtime
//!
//! Simulator steps are infallible; these cover the edges around them.

use thiserror::Error;
use types::errors::TypesError;
use types::ids::HotspotId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown hotspot: {id}")]
    UnknownHotspot { id: HotspotId },

    #[error("Ticker {name} failed: {reason}")]
    TickerFailed { name: &'static str, reason: String },

    #[error("Invalid intent: {0}")]
    Intent(#[from] TypesError),

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),
}
