//! `stats` tool parameter definition and handler.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolError;
use crate::corpus::Corpus;
use crate::format::format_statistics;
use crate::query;

/// The `stats` tool takes no arguments.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StatsParams {}

pub fn run(corpus: &Corpus, _params: StatsParams) -> Result<String, ToolError> {
    Ok(format_statistics(&query::statistics(corpus)))
}
