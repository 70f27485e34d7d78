//! `get_by_category` tool: browse one category.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{deserialize_limit, ToolError};
use crate::corpus::Corpus;
use crate::format::format_patterns;
use crate::query::{self, CATEGORY_LIMIT};

/// Parameters for the `get_by_category` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetByCategoryParams {
    /// Category label, matched case-insensitively. Required.
    #[serde(default)]
    #[schemars(description = "Category name (e.g. 'deployment', 'security', 'mcp')")]
    pub category: String,

    #[serde(default, deserialize_with = "deserialize_limit")]
    #[schemars(with = "i64")]
    #[schemars(description = "Maximum number of results (default 15, max 40)")]
    pub limit: Option<i64>,
}

pub fn run(corpus: &Corpus, params: GetByCategoryParams) -> Result<String, ToolError> {
    if params.category.is_empty() {
        return Err(ToolError::MissingArgument("category"));
    }
    let limit = CATEGORY_LIMIT.or_default(params.limit);
    tracing::debug!(category = %params.category, limit, "get_by_category");

    let results = query::by_category(corpus, &params.category, limit);
    if results.is_empty() {
        let available = corpus.index().labels_sorted().join(", ");
        return Ok(format!(
            "No patterns found for category '{}'.\nAvailable categories: {available}",
            params.category
        ));
    }
    Ok(format!(
        "**{}** — {} pattern(s):\n\n{}",
        params.category,
        results.len(),
        format_patterns(&results)
    ))
}
