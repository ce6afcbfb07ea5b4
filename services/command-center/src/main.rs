mod render;

use simulation::config::DashboardConfig;
use simulation::dashboard::Dashboard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed: u64 = rand::random();
    tracing::info!(seed, "Starting command center simulators");

    let dashboard = Dashboard::start(DashboardConfig::with_seed(seed));
    let mut news = dashboard.subscribe_news();
    let mut stocks = dashboard.subscribe_stocks();
    let mut indices = dashboard.subscribe_indices();
    let mut pulse = dashboard.subscribe_pulse();
    let mut clock = dashboard.subscribe_clock();

    tracing::info!(
        hotspots = dashboard.hotspots().len(),
        news = dashboard.news_count(),
        clock = %dashboard.clock_label(),
        "Dashboard online"
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            Ok(()) = news.changed() => {
                let feed = news.borrow_and_update();
                if let Some(item) = feed.value.latest() {
                    tracing::info!(tick = feed.tick, items = feed.value.len(), "{}", render::headline(item));
                }
            }
            Ok(()) = stocks.changed() => {
                let quotes = stocks.borrow_and_update();
                tracing::info!(tick = quotes.tick, "{}", render::joined(&quotes.value, render::quote_line));
            }
            Ok(()) = indices.changed() => {
                let levels = indices.borrow_and_update();
                tracing::info!(tick = levels.tick, "{}", render::joined(&levels.value, render::index_line));
            }
            Ok(()) = pulse.changed() => {
                tracing::trace!(active = pulse.borrow_and_update().value, "map pulse");
            }
            Ok(()) = clock.changed() => {
                let now = clock.borrow_and_update().value;
                tracing::debug!(clock = %simulation::clock::format_clock(&now), "clock");
            }
        }
    }

    let metrics = dashboard.shutdown().await?;
    tracing::info!("{}", metrics.summary());

    Ok(())
}
