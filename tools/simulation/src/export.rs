//! Dashboard snapshot export
//!
//! Serializes the current panels and tick metrics to JSON for external
//! consumption (fixtures, debugging a renderer).

use crate::dashboard::Dashboard;
use crate::error::SimError;
use crate::metrics::TickMetrics;
use serde::{Deserialize, Serialize};
use types::hotspot::Hotspot;
use types::news::{CategoryFilter, NewsItem};
use types::quote::{IndexQuote, Quote, StockView};

/// Combined export of every panel's current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    pub version: String,
    pub clock: String,
    pub metrics: TickMetrics,
    pub news_filter: CategoryFilter,
    /// Filtered, newest first
    pub news: Vec<NewsItem>,
    pub stock_view: StockView,
    pub stocks: Vec<Quote>,
    pub indices: Vec<IndexQuote>,
    pub pulse: bool,
    pub selected_hotspot: Option<Hotspot>,
}

/// Capture the dashboard as it reads right now.
pub fn build_export(dashboard: &Dashboard) -> DashboardExport {
    DashboardExport {
        version: crate::VERSION.to_string(),
        clock: dashboard.clock_label(),
        metrics: dashboard.metrics(),
        news_filter: dashboard.news_filter(),
        news: dashboard.news(),
        stock_view: dashboard.stock_view(),
        stocks: dashboard.stocks(),
        indices: dashboard.indices(),
        pulse: dashboard.pulse(),
        selected_hotspot: dashboard.selected_hotspot().cloned(),
    }
}

/// Export as pretty JSON.
pub fn export_json(export: &DashboardExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write export to a file path.
pub fn write_to_file(export: &DashboardExport, path: &str) -> Result<(), SimError> {
    let json = export_json(export);
    std::fs::write(path, json)?;
    Ok(())
}
