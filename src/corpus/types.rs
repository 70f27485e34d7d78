//! Pattern record definition.

use serde::{Deserialize, Serialize};

/// The one record kind with interpreted meaning: the mistakes subset.
pub const MISTAKE: &str = "mistake";

/// A curated pattern record. Immutable once the corpus is loaded.
///
/// `kind` is an open vocabulary (`mistake`, `practice`, `insight`, ...); only
/// [`MISTAKE`] is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub kind: String,
    /// Category labels, conventionally lower-case. Never empty.
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
}

impl Pattern {
    pub fn is_mistake(&self) -> bool {
        self.kind == MISTAKE
    }

    /// Exact membership test against the record's category labels.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
