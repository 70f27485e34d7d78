//! Query engine: pure functions over an immutable [`Corpus`](crate::corpus::Corpus).
//!
//! - [`search`] — term-scored keyword search with an exact-phrase boost
//! - [`filter`] — category browsing and the mistakes subset
//! - [`stats`] — category counts and aggregate statistics
//!
//! None of these fail: argument validation happens in the tool layer, and
//! limits are clamped rather than rejected.

pub mod filter;
pub mod search;
pub mod stats;

pub use filter::{by_category, mistakes};
pub use search::{search, search_scored, ScoredPattern};
pub use stats::{category_counts, statistics, CategoryCount, Statistics};

/// Default and upper bound for a result limit. The lower bound is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBounds {
    pub default: i64,
    pub max: i64,
}

pub const SEARCH_LIMIT: LimitBounds = LimitBounds { default: 10, max: 30 };
pub const CATEGORY_LIMIT: LimitBounds = LimitBounds { default: 15, max: 40 };
pub const MISTAKES_LIMIT: LimitBounds = LimitBounds { default: 10, max: 25 };

impl LimitBounds {
    /// Clamp a requested limit into `[1, max]`.
    pub fn clamp(self, requested: i64) -> usize {
        requested.clamp(1, self.max) as usize
    }

    /// The requested limit, or the default when none was given. Not yet clamped.
    pub fn or_default(self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.default)
    }
}

/// Lower-case and trim a category label for exact comparison.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}
