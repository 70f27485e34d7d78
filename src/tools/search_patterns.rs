//! `search_patterns` tool: keyword search across the field guide.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{deserialize_limit, ToolError};
use crate::corpus::Corpus;
use crate::format::format_patterns;
use crate::query::{self, SEARCH_LIMIT};

/// Parameters for the `search_patterns` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchPatternsParams {
    /// Search terms. Required.
    #[serde(default)]
    #[schemars(
        description = "Search terms to find relevant patterns (e.g. 'rate limit', 'database migration', 'MCP server')"
    )]
    pub query: String,

    #[serde(default, deserialize_with = "deserialize_limit")]
    #[schemars(with = "i64")]
    #[schemars(description = "Maximum number of results to return (default 10, max 30)")]
    pub limit: Option<i64>,
}

pub fn run(corpus: &Corpus, params: SearchPatternsParams) -> Result<String, ToolError> {
    if params.query.is_empty() {
        return Err(ToolError::MissingArgument("query"));
    }
    let limit = SEARCH_LIMIT.or_default(params.limit);
    tracing::debug!(query = %params.query, limit, "search_patterns");

    let results = query::search(corpus, &params.query, limit);
    let text = format_patterns(&results);
    if results.is_empty() {
        return Ok(text);
    }
    Ok(format!(
        "Found {} pattern(s) for '{}':\n\n{text}",
        results.len(),
        params.query
    ))
}
