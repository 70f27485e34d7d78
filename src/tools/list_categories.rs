//! `list_categories` tool parameter definition and handler.

use schemars::JsonSchema;
use serde::Deserialize;

use super::ToolError;
use crate::corpus::Corpus;
use crate::format::format_categories;
use crate::query;

/// The `list_categories` tool takes no arguments.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCategoriesParams {}

pub fn run(corpus: &Corpus, _params: ListCategoriesParams) -> Result<String, ToolError> {
    Ok(format_categories(&query::category_counts(corpus)))
}
