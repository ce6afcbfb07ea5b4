//! Simulator tunables
//!
//! Values are fixed constants; the config structs exist so tests can shorten
//! periods or tighten bounds without touching the simulators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use types::news::FEED_CAPACITY;

/// News feed: one synthetic item every 30 s.
pub const NEWS_PERIOD: Duration = Duration::from_secs(30);
/// Equity and index jitter: every 3 s.
pub const MARKET_PERIOD: Duration = Duration::from_secs(3);
/// Map pulse flag: every 2 s.
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);
/// Header clock: every second.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Half-width of the equity jitter range [-1, 1).
pub const STOCK_JITTER: Decimal = Decimal::ONE;
/// Half-width of the index jitter range [-0.25, 0.25).
pub const INDEX_JITTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    pub period: Duration,
    pub capacity: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            period: NEWS_PERIOD,
            capacity: FEED_CAPACITY,
        }
    }
}

/// Configuration for one market simulator instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub period: Duration,
    /// Jitter is drawn uniformly from [-bound, bound)
    pub jitter_bound: Decimal,
}

impl MarketConfig {
    pub fn stocks() -> Self {
        Self {
            period: MARKET_PERIOD,
            jitter_bound: STOCK_JITTER,
        }
    }

    pub fn indices() -> Self {
        Self {
            period: MARKET_PERIOD,
            jitter_bound: INDEX_JITTER,
        }
    }
}

/// Top-level configuration for every simulator behind the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Root seed; each simulator derives its own stream from it
    pub seed: u64,
    pub news: NewsConfig,
    pub stocks: MarketConfig,
    pub indices: MarketConfig,
    pub pulse_period: Duration,
    pub clock_period: Duration,
}

impl DashboardConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            news: NewsConfig::default(),
            stocks: MarketConfig::stocks(),
            indices: MarketConfig::indices(),
            pulse_period: PULSE_PERIOD,
            clock_period: CLOCK_PERIOD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.news.period, Duration::from_secs(30));
        assert_eq!(cfg.news.capacity, 10);
        assert_eq!(cfg.stocks.jitter_bound, dec!(1));
        assert_eq!(cfg.indices.jitter_bound, dec!(0.25));
        assert_eq!(cfg.stocks.period, Duration::from_secs(3));
        assert_eq!(cfg.pulse_period, Duration::from_secs(2));
        assert_eq!(cfg.clock_period, Duration::from_secs(1));
    }

    #[test]
    fn test_with_seed_keeps_defaults() {
        let cfg = DashboardConfig::with_seed(99);
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.indices.period, MARKET_PERIOD);
    }
}
