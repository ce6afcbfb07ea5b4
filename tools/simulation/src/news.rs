//! News feed simulator
//!
//! Every tick prepends one synthetic "breaking" report to the feed. Ids come
//! from a seeded RNG so a replay with the same seed yields the same feed.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::debug;
use types::ids::NewsId;
use types::news::{Category, NewsFeed, NewsItem, Priority};

use crate::config::NewsConfig;
use crate::seed::{seed_news, SeedNews};
use crate::ticker::Simulator;

const GENERATED_TITLE: &str = "New Intelligence Report Available";
const GENERATED_LOCATION: &str = "Global Network";
const GENERATED_SOURCE: &str = "AUTO-INTEL";
const GENERATED_EXCERPT: &str = "Automated systems have detected new patterns requiring analysis...";
/// Relative label stamped on generated items.
pub const JUST_NOW: &str = "Just now";

pub struct NewsSimulator {
    config: NewsConfig,
    feed: NewsFeed,
    rng: ChaCha8Rng,
}

impl NewsSimulator {
    /// Create a simulator over the six seed reports.
    pub fn new(config: NewsConfig, seed: u64) -> Self {
        Self::with_seed_items(config, seed, seed_news())
    }

    /// Create a simulator over caller-provided seed reports (newest first).
    pub fn with_seed_items(config: NewsConfig, seed: u64, items: Vec<SeedNews>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let items: Vec<NewsItem> = items
            .into_iter()
            .map(|s| s.into_item(NewsId::from_random_bytes(rng.gen())))
            .collect();
        let feed = NewsFeed::from_items(items, config.capacity);
        Self {
            config,
            feed,
            rng,
        }
    }

    /// Build the next synthetic report without inserting it.
    fn next_item(&mut self) -> NewsItem {
        NewsItem {
            id: NewsId::from_random_bytes(self.rng.gen()),
            title: GENERATED_TITLE.to_string(),
            location: GENERATED_LOCATION.to_string(),
            timestamp: JUST_NOW.to_string(),
            category: Category::Breaking,
            priority: Priority::Medium,
            source: GENERATED_SOURCE.to_string(),
            excerpt: GENERATED_EXCERPT.to_string(),
        }
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }
}

impl Simulator for NewsSimulator {
    type Snapshot = NewsFeed;

    fn name(&self) -> &'static str {
        "news"
    }

    fn period(&self) -> Duration {
        self.config.period
    }

    fn tick(&mut self) {
        let item = self.next_item();
        let id = item.id;
        let evicted = self.feed.push_front(item);
        debug!(
            id = %id,
            len = self.feed.len(),
            evicted = evicted.is_some(),
            "news item published"
        );
    }

    fn snapshot(&self) -> NewsFeed {
        self.feed.clone()
    }
}
