//! `get_mistakes` tool: documented anti-patterns, optionally per category.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{deserialize_limit, ToolError};
use crate::corpus::Corpus;
use crate::format::format_patterns;
use crate::query::{self, MISTAKES_LIMIT};

/// Parameters for the `get_mistakes` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMistakesParams {
    #[schemars(description = "Optional category filter (e.g. 'deployment', 'database')")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_limit")]
    #[schemars(with = "i64")]
    #[schemars(description = "Maximum number of results (default 10, max 25)")]
    pub limit: Option<i64>,
}

pub fn run(corpus: &Corpus, params: GetMistakesParams) -> Result<String, ToolError> {
    let category = params.category.as_deref().filter(|c| !c.trim().is_empty());
    let limit = MISTAKES_LIMIT.or_default(params.limit);
    tracing::debug!(category = ?category, limit, "get_mistakes");

    let results = query::mistakes(corpus, category, limit);
    let text = format_patterns(&results);
    if results.is_empty() {
        return Ok(text);
    }

    let mut header = String::from("**Documented mistakes**");
    if let Some(category) = category {
        header.push_str(&format!(" in {category}"));
    }
    Ok(format!("{header} — {} entry(s):\n\n{text}", results.len()))
}
