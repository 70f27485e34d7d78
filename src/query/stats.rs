use serde::Serialize;
use std::collections::BTreeMap;

use crate::corpus::Corpus;

/// Number of records carrying one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate statistics over the whole store.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_category: Vec<CategoryCount>,
    pub source: String,
    pub version: String,
}

/// Category counts, highest first. Equal counts keep first-encounter order.
pub fn category_counts(corpus: &Corpus) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = corpus
        .index()
        .counts()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn statistics(corpus: &Corpus) -> Statistics {
    let mut by_type = BTreeMap::new();
    for pattern in corpus.records() {
        *by_type.entry(pattern.kind.clone()).or_insert(0) += 1;
    }

    Statistics {
        total: corpus.len(),
        by_type,
        by_category: category_counts(corpus),
        source: corpus.source().to_string(),
        version: corpus.version().to_string(),
    }
}
