//! Seed data for every panel
//!
//! Each call builds fresh owned collections; nothing here is shared between
//! simulator instances.

use rust_decimal::Decimal;
use types::hotspot::{GeoPoint, Hotspot, HotspotKind, Intensity};
use types::ids::{HotspotId, NewsId};
use types::news::{Category, NewsItem, Priority};
use types::quote::{IndexQuote, Quote};

/// A seed report before an id is assigned.
#[derive(Debug, Clone)]
pub struct SeedNews {
    pub title: &'static str,
    pub location: &'static str,
    pub timestamp: &'static str,
    pub category: Category,
    pub priority: Priority,
    pub source: &'static str,
    pub excerpt: &'static str,
}

impl SeedNews {
    pub fn into_item(self, id: NewsId) -> NewsItem {
        NewsItem {
            id,
            title: self.title.to_string(),
            location: self.location.to_string(),
            timestamp: self.timestamp.to_string(),
            category: self.category,
            priority: self.priority,
            source: self.source.to_string(),
            excerpt: self.excerpt.to_string(),
        }
    }
}

/// The six opening reports, newest first.
pub fn seed_news() -> Vec<SeedNews> {
    vec![
        SeedNews {
            title: "Diplomatic Crisis Escalates in Middle East",
            location: "Qatar",
            timestamp: "2 min ago",
            category: Category::Breaking,
            priority: Priority::High,
            source: "NEXUS INTEL",
            excerpt: "Regional tensions reach critical levels as diplomatic talks stall...",
        },
        SeedNews {
            title: "Environmental Monitoring Systems Activated",
            location: "Utah, USA",
            timestamp: "15 min ago",
            category: Category::Tech,
            priority: Priority::Medium,
            source: "GLOBAL WATCH",
            excerpt: "Advanced sensor networks detect unusual atmospheric patterns...",
        },
        SeedNews {
            title: "Political Unrest Spreads Across Region",
            location: "Nepal",
            timestamp: "32 min ago",
            category: Category::Politics,
            priority: Priority::High,
            source: "WORLD MONITOR",
            excerpt: "Protests continue as government faces mounting pressure...",
        },
        SeedNews {
            title: "Economic Sanctions Impact Global Markets",
            location: "Europe",
            timestamp: "1 hour ago",
            category: Category::Economy,
            priority: Priority::Medium,
            source: "MARKET INTEL",
            excerpt: "Financial institutions report significant volatility...",
        },
        SeedNews {
            title: "Cyber Security Breach Detected",
            location: "Global",
            timestamp: "2 hours ago",
            category: Category::Tech,
            priority: Priority::High,
            source: "CYBER COMMAND",
            excerpt: "Multiple infrastructure systems show signs of coordinated attack...",
        },
        SeedNews {
            title: "Trade Agreement Negotiations Resume",
            location: "Asia-Pacific",
            timestamp: "3 hours ago",
            category: Category::Economy,
            priority: Priority::Low,
            source: "TRADE WATCH",
            excerpt: "Bilateral talks show promising signs of progress...",
        },
    ]
}

/// Decimal from integer cents.
fn cents(v: i64) -> Decimal {
    Decimal::new(v, 2)
}

#[allow(clippy::too_many_arguments)]
fn quote(
    symbol: &str,
    name: &str,
    price: i64,
    change: i64,
    change_percent: i64,
    volume: &str,
    market_cap: &str,
    sector: &str,
) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: cents(price),
        change: cents(change),
        change_percent: cents(change_percent),
        volume: volume.to_string(),
        market_cap: market_cap.to_string(),
        sector: sector.to_string(),
    }
}

/// Opening equity quotes.
pub fn seed_stocks() -> Vec<Quote> {
    vec![
        quote("AAPL", "Apple Inc.", 17543, 215, 124, "52.3M", "2.8T", "Technology"),
        quote("MSFT", "Microsoft Corp.", 37885, -192, -50, "28.7M", "2.8T", "Technology"),
        quote("GOOGL", "Alphabet Inc.", 13821, 347, 258, "31.2M", "1.7T", "Technology"),
        quote("TSLA", "Tesla Inc.", 24850, -823, -320, "89.4M", "789B", "Automotive"),
        quote("NVDA", "NVIDIA Corp.", 87528, 1567, 182, "45.8M", "2.2T", "Technology"),
        quote("META", "Meta Platforms", 48420, -285, -58, "19.6M", "1.2T", "Technology"),
    ]
}

/// Opening index levels.
pub fn seed_indices() -> Vec<IndexQuote> {
    let index = |name: &str, symbol: &str, value: i64, change_percent: i64| IndexQuote {
        name: name.to_string(),
        symbol: symbol.to_string(),
        value: cents(value),
        change_percent: cents(change_percent),
    };
    vec![
        index("S&P 500", "SPX", 478985, 45),
        index("NASDAQ", "IXIC", 1523442, -23),
        index("DOW JONES", "DJI", 3786380, 12),
    ]
}

/// Static hotspot catalog.
pub fn hotspots() -> Vec<Hotspot> {
    let spot = |id: u32, country: &str, lng: f64, lat: f64, intensity: Intensity, kind: HotspotKind, title: &str| Hotspot {
        id: HotspotId::new(id),
        country: country.to_string(),
        location: GeoPoint { lng, lat },
        intensity,
        kind,
        title: title.to_string(),
    };
    vec![
        spot(1, "Qatar", 51.5, 25.3, Intensity::High, HotspotKind::Political, "Major diplomatic developments"),
        spot(2, "Utah, USA", -111.9, 39.3, Intensity::Medium, HotspotKind::Natural, "Environmental monitoring alerts"),
        spot(3, "Nepal", 84.1, 28.4, Intensity::High, HotspotKind::Political, "Regional stability concerns"),
        spot(4, "Ukraine", 31.2, 49.0, Intensity::High, HotspotKind::Conflict, "Ongoing conflict updates"),
        spot(5, "Taiwan", 121.0, 23.8, Intensity::Medium, HotspotKind::Political, "Geopolitical tensions"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(seed_news().len(), 6);
        assert_eq!(seed_stocks().len(), 6);
        assert_eq!(seed_indices().len(), 3);
        assert_eq!(hotspots().len(), 5);
    }

    #[test]
    fn test_seed_prices_positive() {
        assert!(seed_stocks().iter().all(|q| q.price > Decimal::ZERO));
        assert!(seed_indices().iter().all(|i| i.value > Decimal::ZERO));
        assert_eq!(seed_stocks()[0].price, dec!(175.43));
        assert_eq!(seed_indices()[2].value, dec!(37863.80));
    }

    #[test]
    fn test_hotspot_ids_unique() {
        let ids: HashSet<_> = hotspots().iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), 5);
    }
}
