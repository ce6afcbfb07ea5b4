//! Tick counters for the dashboard simulators
//!
//! Tracks how many times each ticker fired and over how long.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dashboard's fixed set of tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerKind {
    News,
    Stocks,
    Indices,
    Pulse,
    Clock,
}

impl TickerKind {
    pub const ALL: [TickerKind; 5] = [
        TickerKind::News,
        TickerKind::Stocks,
        TickerKind::Indices,
        TickerKind::Pulse,
        TickerKind::Clock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TickerKind::News => "news",
            TickerKind::Stocks => "stocks",
            TickerKind::Indices => "indices",
            TickerKind::Pulse => "pulse",
            TickerKind::Clock => "clock",
        }
    }
}

impl fmt::Display for TickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated tick counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickMetrics {
    pub news_ticks: u64,
    pub stock_ticks: u64,
    pub index_ticks: u64,
    pub pulse_ticks: u64,
    pub clock_ticks: u64,
    pub elapsed_ms: u64,
}

impl TickMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tick count of one ticker.
    pub fn record(&mut self, ticker: TickerKind, ticks: u64) {
        *self.slot(ticker) = ticks;
    }

    pub fn ticks(&self, ticker: TickerKind) -> u64 {
        match ticker {
            TickerKind::News => self.news_ticks,
            TickerKind::Stocks => self.stock_ticks,
            TickerKind::Indices => self.index_ticks,
            TickerKind::Pulse => self.pulse_ticks,
            TickerKind::Clock => self.clock_ticks,
        }
    }

    fn slot(&mut self, ticker: TickerKind) -> &mut u64 {
        match ticker {
            TickerKind::News => &mut self.news_ticks,
            TickerKind::Stocks => &mut self.stock_ticks,
            TickerKind::Indices => &mut self.index_ticks,
            TickerKind::Pulse => &mut self.pulse_ticks,
            TickerKind::Clock => &mut self.clock_ticks,
        }
    }

    pub fn set_elapsed(&mut self, ms: u64) {
        self.elapsed_ms = ms;
    }

    pub fn total_ticks(&self) -> u64 {
        self.news_ticks + self.stock_ticks + self.index_ticks + self.pulse_ticks + self.clock_ticks
    }

    /// Throughput across all tickers.
    pub fn ticks_per_second(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        self.total_ticks() as f64 / (self.elapsed_ms as f64 / 1_000.0)
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "News: {} | Stocks: {} | Indices: {} | Pulse: {} | Clock: {} | Throughput: {:.2} ticks/s",
            self.news_ticks,
            self.stock_ticks,
            self.index_ticks,
            self.pulse_ticks,
            self.clock_ticks,
            self.ticks_per_second(),
        )
    }
}
