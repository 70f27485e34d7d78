use crate::corpus::types::Pattern;
use crate::corpus::Corpus;

use super::{normalize_category, CATEGORY_LIMIT, MISTAKES_LIMIT};

/// Records carrying `category` (case- and whitespace-insensitive, exact label match), in store order.
pub fn by_category<'a>(corpus: &'a Corpus, category: &str, limit: i64) -> Vec<&'a Pattern> {
    let limit = CATEGORY_LIMIT.clamp(limit);
    let category = normalize_category(category);
    let records = corpus.records();
    corpus
        .index()
        .members(&category)
        .iter()
        .map(|&pos| &records[pos])
        .take(limit)
        .collect()
}

/// Records of type `mistake`, optionally narrowed to one category, in store order.
///
/// A category that is blank after trimming is treated as absent.
pub fn mistakes<'a>(corpus: &'a Corpus, category: Option<&str>, limit: i64) -> Vec<&'a Pattern> {
    let limit = MISTAKES_LIMIT.clamp(limit);
    let category = category
        .map(normalize_category)
        .filter(|c| !c.is_empty());

    corpus
        .records()
        .iter()
        .filter(|p| p.is_mistake())
        .filter(|p| category.as_deref().map_or(true, |c| p.in_category(c)))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        let json = r#"[
            {"type": "mistake", "categories": ["deployment"], "content": "m1"},
            {"type": "practice", "categories": ["deployment", "database"], "content": "p1"},
            {"type": "mistake", "categories": ["database"], "content": "m2"},
            {"type": "mistake", "categories": ["deployment-ops"], "content": "m3"}
        ]"#;
        Corpus::from_json(json, "test").unwrap()
    }

    fn contents(patterns: &[&Pattern]) -> Vec<String> {
        patterns.iter().map(|p| p.content.clone()).collect()
    }

    #[test]
    fn category_match_is_exact_not_substring() {
        let corpus = corpus();
        assert_eq!(contents(&by_category(&corpus, "deployment", 15)), vec!["m1", "p1"]);
        assert!(by_category(&corpus, "deploy", 15).is_empty());
    }

    #[test]
    fn category_lookup_ignores_case_and_padding() {
        let corpus = corpus();
        assert_eq!(
            by_category(&corpus, " Deployment ", 15),
            by_category(&corpus, "deployment", 15)
        );
    }

    #[test]
    fn category_limit_clamps() {
        let corpus = corpus();
        assert_eq!(by_category(&corpus, "deployment", 0).len(), 1);
    }

    #[test]
    fn mistakes_filters_by_type_then_category() {
        let corpus = corpus();
        assert_eq!(contents(&mistakes(&corpus, None, 10)), vec!["m1", "m2", "m3"]);
        assert_eq!(contents(&mistakes(&corpus, Some("DATABASE"), 10)), vec!["m2"]);
        assert_eq!(contents(&mistakes(&corpus, Some("   "), 10)), vec!["m1", "m2", "m3"]);
        assert_eq!(mistakes(&corpus, None, -1).len(), 1);
    }
}
