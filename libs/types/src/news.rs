//! News feed types
//!
//! A `NewsFeed` is newest-first and bounded: inserting at the front pushes the
//! oldest item out once the feed is at capacity.

use crate::errors::TypesError;
use crate::ids::NewsId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Maximum number of items a feed keeps.
pub const FEED_CAPACITY: usize = 10;

/// News category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breaking,
    Politics,
    Economy,
    Conflict,
    Tech,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breaking,
        Category::Politics,
        Category::Economy,
        Category::Conflict,
        Category::Tech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breaking => "breaking",
            Category::Politics => "politics",
            Category::Economy => "economy",
            Category::Conflict => "conflict",
            Category::Tech => "tech",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypesError::UnknownCategory(s.to_string()))
    }
}

/// News priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TypesError::UnknownPriority(s.to_string())),
        }
    }
}

/// A single news item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub location: String,
    /// Relative label such as "Just now" or "2 hours ago"
    pub timestamp: String,
    pub category: Category,
    pub priority: Priority,
    pub source: String,
    pub excerpt: String,
}

/// Read-side category selection: everything, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Newest-first bounded list of news items.
///
/// Deserialized feeds go through [`NewsFeed::from_items`], so the bound holds
/// for input that was never produced by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFeed")]
pub struct NewsFeed {
    items: VecDeque<NewsItem>,
    capacity: usize,
}

/// Unchecked wire form of [`NewsFeed`].
#[derive(Deserialize)]
struct RawFeed {
    items: Vec<NewsItem>,
    capacity: usize,
}

impl From<RawFeed> for NewsFeed {
    fn from(raw: RawFeed) -> Self {
        NewsFeed::from_items(raw.items, raw.capacity)
    }
}

impl NewsFeed {
    /// Create an empty feed with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }

    /// Create an empty feed holding at most `capacity` items (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Build a feed from items already ordered newest-first.
    ///
    /// Anything past capacity is dropped from the old end.
    pub fn from_items(items: impl IntoIterator<Item = NewsItem>, capacity: usize) -> Self {
        let mut feed = Self::with_capacity(capacity);
        feed.items.extend(items);
        feed.items.truncate(feed.capacity);
        feed
    }

    /// Insert at the front, dropping the oldest item when over capacity.
    ///
    /// Returns the evicted item, if any.
    pub fn push_front(&mut self, item: NewsItem) -> Option<NewsItem> {
        self.items.push_front(item);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&NewsItem> {
        self.items.get(index)
    }

    /// Newest item, if any.
    pub fn latest(&self) -> Option<&NewsItem> {
        self.items.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NewsItem> {
        self.items.iter()
    }

    /// Items matching `filter`, newest first.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&NewsItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new()
    }
}
