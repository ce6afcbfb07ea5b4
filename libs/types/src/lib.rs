//! Types library for the command center dashboard
//!
//! Records shared by the feed simulators and whatever renders them. Every
//! record here is plain data; the simulators own the mutation rules.
//!
//! # Modules
//! - `ids`: Identifiers (NewsId, HotspotId)
//! - `numeric`: Decimal rounding and change helpers
//! - `news`: News items, categories, the bounded feed and its filter
//! - `quote`: Equity and index quotes, stock panel view
//! - `hotspot`: Static map hotspots and their canvas projection
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod news;
pub mod quote;
pub mod hotspot;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::news::*;
    pub use crate::quote::*;
    pub use crate::hotspot::*;
    pub use crate::errors::*;
}
