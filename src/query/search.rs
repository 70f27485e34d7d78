use crate::corpus::types::Pattern;
use crate::corpus::Corpus;

use super::SEARCH_LIMIT;

/// Flat score added when the whole query occurs verbatim in a record.
pub const PHRASE_BOOST: usize = 3;

/// A search hit with its score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPattern<'a> {
    pub pattern: &'a Pattern,
    pub score: usize,
}

/// Keyword search, best matches first. Ties keep store order.
pub fn search<'a>(corpus: &'a Corpus, query: &str, limit: i64) -> Vec<&'a Pattern> {
    search_scored(corpus, query, limit)
        .into_iter()
        .map(|hit| hit.pattern)
        .collect()
}

/// Keyword search returning scores alongside records.
///
/// Score = distinct query terms found as substrings of the record's
/// content, categories and tags (lower-cased), plus [`PHRASE_BOOST`] when
/// the full lower-cased query occurs. Zero-score records are dropped.
pub fn search_scored<'a>(corpus: &'a Corpus, query: &str, limit: i64) -> Vec<ScoredPattern<'a>> {
    let limit = SEARCH_LIMIT.clamp(limit);
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }
    let phrase = query.to_lowercase();

    let mut hits: Vec<ScoredPattern<'a>> = corpus
        .records()
        .iter()
        .filter_map(|pattern| {
            let haystack = haystack(pattern);
            let mut score = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
            if score == 0 {
                return None;
            }
            if haystack.contains(&phrase) {
                score += PHRASE_BOOST;
            }
            Some(ScoredPattern { pattern, score })
        })
        .collect();

    // sort_by is stable: equal scores stay in store order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}

/// Whitespace-split, lower-cased, de-duplicated terms in first-seen order.
fn tokenize(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.split_whitespace().map(str::to_lowercase) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

fn haystack(pattern: &Pattern) -> String {
    format!(
        "{} {} {}",
        pattern.content,
        pattern.categories.join(" "),
        pattern.tags.join(" ")
    )
    .to_lowercase()
}
