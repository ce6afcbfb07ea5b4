//! Error types for parsing dashboard intents
//!
//! The presentation layer hands categories, views and filters across as
//! strings; anything outside the known vocabulary is rejected here.

use thiserror::Error;

/// Parse errors for the dashboard vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Unknown news category: {0}")]
    UnknownCategory(String),

    #[error("Unknown news priority: {0}")]
    UnknownPriority(String),

    #[error("Unknown hotspot intensity: {0}")]
    UnknownIntensity(String),

    #[error("Unknown hotspot kind: {0}")]
    UnknownHotspotKind(String),

    #[error("Unknown stock view: {0}")]
    UnknownStockView(String),
}
