//! Dashboard boundary
//!
//! Starts one ticker per simulator and keeps the read-side state the
//! presentation layer controls: news filter, stock view and hotspot
//! selection. Simulator state is only ever read through snapshots.
//!
//! ```text
//!  News ─┐  Stocks ─┐  Indices ─┐  Pulse ─┐  Clock ─┐
//!        ▼          ▼           ▼         ▼         ▼
//!   ┌────────────── watch::Receiver<Published<_>> ───────────┐
//!   │ Dashboard: filter · view · selection · hotspot catalog │
//!   └────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{info, warn};
use types::hotspot::Hotspot;
use types::ids::HotspotId;
use types::news::{CategoryFilter, NewsFeed, NewsItem};
use types::quote::{IndexQuote, Quote, StockView};

use crate::clock::{format_clock, ClockSimulator, TimeSource};
use crate::config::DashboardConfig;
use crate::error::SimError;
use crate::market::{IndexSimulator, StockSimulator};
use crate::metrics::{TickMetrics, TickerKind};
use crate::news::NewsSimulator;
use crate::pulse::MapPulseSimulator;
use crate::seed::hotspots;
use crate::selection::HotspotSelection;
use crate::ticker::{self, Published, TickerHandle};

/// A running ticker and the receiver for its snapshots.
struct Panel<T> {
    handle: TickerHandle,
    rx: watch::Receiver<Published<T>>,
}

impl<T: Clone> Panel<T> {
    fn current(&self) -> T {
        self.rx.borrow().value.clone()
    }

    fn ticks(&self) -> u64 {
        self.rx.borrow().tick
    }
}

pub struct Dashboard {
    news: Panel<NewsFeed>,
    stocks: Panel<Vec<Quote>>,
    indices: Panel<Vec<IndexQuote>>,
    pulse: Panel<bool>,
    clock: Panel<DateTime<Utc>>,
    hotspots: Vec<Hotspot>,
    selection: HotspotSelection,
    news_filter: CategoryFilter,
    stock_view: StockView,
    started_at: Instant,
}

impl Dashboard {
    /// Start every simulator on the current tokio runtime.
    ///
    /// Each simulator gets its own RNG stream derived from `config.seed`.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn start(config: DashboardConfig) -> Self {
        Self::start_with_clock(config, Utc::now)
    }

    /// Like [`Dashboard::start`] with an injected wall-clock source.
    pub fn start_with_clock(config: DashboardConfig, time_source: TimeSource) -> Self {
        let seed = config.seed;
        info!(seed, "starting dashboard simulators");

        let news = NewsSimulator::new(config.news.clone(), seed);
        let stocks = StockSimulator::stocks(&config.stocks, seed.wrapping_add(1));
        let indices = IndexSimulator::indices(&config.indices, seed.wrapping_add(2));
        let pulse = MapPulseSimulator::new(config.pulse_period);
        let clock = ClockSimulator::with_source(config.clock_period, time_source);

        Self {
            news: panel(news),
            stocks: panel(stocks),
            indices: panel(indices),
            pulse: panel(pulse),
            clock: panel(clock),
            hotspots: hotspots(),
            selection: HotspotSelection::new(),
            news_filter: CategoryFilter::All,
            stock_view: StockView::Stocks,
            started_at: Instant::now(),
        }
    }

    // --- news ---

    /// Current feed items passing the news filter, newest first.
    pub fn news(&self) -> Vec<NewsItem> {
        self.news
            .rx
            .borrow()
            .value
            .filtered(self.news_filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Unfiltered feed snapshot.
    pub fn news_feed(&self) -> NewsFeed {
        self.news.current()
    }

    /// Count shown in the news status bar.
    pub fn news_count(&self) -> usize {
        self.news.rx.borrow().value.filtered(self.news_filter).len()
    }

    /// The feed itself is untouched; only [`Dashboard::news`] and
    /// [`Dashboard::news_count`] change.
    pub fn set_news_filter(&mut self, filter: CategoryFilter) {
        self.news_filter = filter;
    }

    /// Parse and apply a filter sent as text (`"all"`, `"economy"`, ...).
    pub fn set_news_filter_str(&mut self, filter: &str) -> Result<(), SimError> {
        self.news_filter = filter.parse()?;
        Ok(())
    }

    pub fn news_filter(&self) -> CategoryFilter {
        self.news_filter
    }

    // --- markets ---

    pub fn stocks(&self) -> Vec<Quote> {
        self.stocks.current()
    }

    pub fn indices(&self) -> Vec<IndexQuote> {
        self.indices.current()
    }

    pub fn set_stock_view(&mut self, view: StockView) {
        self.stock_view = view;
    }

    pub fn stock_view(&self) -> StockView {
        self.stock_view
    }

    /// Count shown in the stock status bar for the active view.
    pub fn market_count(&self) -> usize {
        match self.stock_view {
            StockView::Stocks => self.stocks.rx.borrow().value.len(),
            StockView::Indices => self.indices.rx.borrow().value.len(),
        }
    }

    // --- map ---

    pub fn pulse(&self) -> bool {
        self.pulse.current()
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Highlight a hotspot by id, or clear with `None`.
    ///
    /// An unknown id leaves the current selection in place.
    pub fn select_hotspot(&mut self, id: Option<HotspotId>) -> Result<(), SimError> {
        let hotspot = match id {
            Some(id) => match self.hotspots.iter().find(|h| h.id == id) {
                Some(h) => Some(h.clone()),
                None => {
                    warn!(hotspot = %id, "rejected selection of unknown hotspot");
                    return Err(SimError::UnknownHotspot { id });
                }
            },
            None => None,
        };
        self.selection.select(hotspot);
        Ok(())
    }

    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.selection.selected()
    }

    // --- header ---

    pub fn clock(&self) -> DateTime<Utc> {
        self.clock.current()
    }

    pub fn clock_label(&self) -> String {
        format_clock(&self.clock.rx.borrow().value)
    }

    // --- subscriptions ---

    pub fn subscribe_news(&self) -> watch::Receiver<Published<NewsFeed>> {
        self.news.rx.clone()
    }

    pub fn subscribe_stocks(&self) -> watch::Receiver<Published<Vec<Quote>>> {
        self.stocks.rx.clone()
    }

    pub fn subscribe_indices(&self) -> watch::Receiver<Published<Vec<IndexQuote>>> {
        self.indices.rx.clone()
    }

    pub fn subscribe_pulse(&self) -> watch::Receiver<Published<bool>> {
        self.pulse.rx.clone()
    }

    pub fn subscribe_clock(&self) -> watch::Receiver<Published<DateTime<Utc>>> {
        self.clock.rx.clone()
    }

    // --- lifecycle ---

    /// Tick counts observed so far.
    pub fn metrics(&self) -> TickMetrics {
        let mut metrics = TickMetrics::new();
        metrics.record(TickerKind::News, self.news.ticks());
        metrics.record(TickerKind::Stocks, self.stocks.ticks());
        metrics.record(TickerKind::Indices, self.indices.ticks());
        metrics.record(TickerKind::Pulse, self.pulse.ticks());
        metrics.record(TickerKind::Clock, self.clock.ticks());
        metrics.set_elapsed(elapsed_ms(self.started_at.elapsed()));
        metrics
    }

    pub fn is_running(&self) -> bool {
        self.news.handle.is_running()
            || self.stocks.handle.is_running()
            || self.indices.handle.is_running()
            || self.pulse.handle.is_running()
            || self.clock.handle.is_running()
    }

    /// Signal every ticker to stop. Safe to call more than once.
    pub fn stop(&mut self) {
        let stopped = [
            self.news.handle.stop(),
            self.stocks.handle.stop(),
            self.indices.handle.stop(),
            self.pulse.handle.stop(),
            self.clock.handle.stop(),
        ];
        if stopped.iter().any(|s| *s) {
            info!("dashboard simulators stopping");
        }
    }

    /// Stop every ticker, wait for them, and report final tick counts.
    pub async fn shutdown(self) -> Result<TickMetrics, SimError> {
        let Dashboard {
            news,
            stocks,
            indices,
            pulse,
            clock,
            started_at,
            ..
        } = self;

        let mut metrics = TickMetrics::new();
        let handles = [news.handle, stocks.handle, indices.handle, pulse.handle, clock.handle];
        for (kind, handle) in TickerKind::ALL.into_iter().zip(handles) {
            let ticks = handle.join().await?;
            metrics.record(kind, ticks);
        }
        metrics.set_elapsed(elapsed_ms(started_at.elapsed()));
        info!(summary = %metrics.summary(), "dashboard stopped");
        Ok(metrics)
    }
}

fn panel<S: ticker::Simulator>(sim: S) -> Panel<S::Snapshot> {
    let (handle, rx) = ticker::spawn(sim);
    Panel { handle, rx }
}

fn elapsed_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
