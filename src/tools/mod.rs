//! The fixed tool registry.
//!
//! [`ToolKind`] enumerates the five tools; each variant maps to a parameter
//! struct (with its JSON schema) and a handler in the matching submodule.
//! Handlers return rendered text or a [`ToolError`].

pub mod get_by_category;
pub mod get_mistakes;
pub mod list_categories;
pub mod search_patterns;
pub mod stats;

use schemars::JsonSchema;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::corpus::Corpus;
use get_by_category::GetByCategoryParams;
use get_mistakes::GetMistakesParams;
use list_categories::ListCategoriesParams;
use search_patterns::SearchPatternsParams;
use stats::StatsParams;

/// Failure while validating or running a recognized tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0} is required")]
    MissingArgument(&'static str),
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

/// One entry of the `tools/list` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    SearchPatterns,
    GetByCategory,
    GetMistakes,
    ListCategories,
    Stats,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        Self::SearchPatterns,
        Self::GetByCategory,
        Self::GetMistakes,
        Self::ListCategories,
        Self::Stats,
    ];

    /// Canonical name advertised by `tools/list`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchPatterns => "search_patterns",
            Self::GetByCategory => "get_by_category",
            Self::GetMistakes => "get_mistakes",
            Self::ListCategories => "list_categories",
            Self::Stats => "stats",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SearchPatterns => {
                "Search for agent patterns and learnings by keyword. \
                 Returns the most relevant patterns from sessions of autonomous operation. \
                 Use this when you want to know how to handle a specific situation, \
                 e.g. 'How do I handle rate limits?', 'What's the pattern for health checks?', \
                 'How do I debug a failing deployment?'"
            }
            Self::GetByCategory => {
                "Browse patterns by category. \
                 Typical categories: deployment, database, api-design, testing, security, \
                 agent-ops, mcp, project-mgmt, content, meta-patterns, python, performance, general. \
                 Use this when you want to explore all learnings in a domain area."
            }
            Self::GetMistakes => {
                "Get documented mistakes and anti-patterns: things that were tried, failed, \
                 and why. Useful before starting a new task to avoid known pitfalls. \
                 Can optionally filter by category."
            }
            Self::ListCategories => {
                "List all available pattern categories with counts. \
                 Use this to discover what domains the field guide covers before diving in."
            }
            Self::Stats => {
                "Get statistics about the field guide: total patterns, breakdown by type \
                 and category, and origin metadata."
            }
        }
    }

    /// JSON schema for the tool's `arguments` object.
    pub fn input_schema(&self) -> Value {
        match self {
            Self::SearchPatterns => input_schema::<SearchPatternsParams>(&["query"], &[("limit", 10)]),
            Self::GetByCategory => input_schema::<GetByCategoryParams>(&["category"], &[("limit", 15)]),
            Self::GetMistakes => input_schema::<GetMistakesParams>(&[], &[("limit", 10)]),
            Self::ListCategories => input_schema::<ListCategoriesParams>(&[], &[]),
            Self::Stats => input_schema::<StatsParams>(&[], &[]),
        }
    }

    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ToolKind {
    type Err = String;

    /// Accepts the canonical names plus the short `search` alias and hyphenated spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search_patterns" | "search-patterns" | "search" => Ok(Self::SearchPatterns),
            "get_by_category" | "get-by-category" => Ok(Self::GetByCategory),
            "get_mistakes" | "get-mistakes" => Ok(Self::GetMistakes),
            "list_categories" | "list-categories" => Ok(Self::ListCategories),
            "stats" => Ok(Self::Stats),
            _ => Err(format!("Unknown tool: {s}")),
        }
    }
}

/// Tool handler over a shared, immutable corpus.
#[derive(Debug, Clone)]
pub struct FieldGuideTools {
    corpus: Arc<Corpus>,
}

impl FieldGuideTools {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    pub fn list(&self) -> Vec<ToolDescriptor> {
        ToolKind::ALL.iter().map(ToolKind::descriptor).collect()
    }

    /// Validate `arguments` for `tool`, run it, and render the result as text.
    pub fn call(&self, tool: ToolKind, arguments: Map<String, Value>) -> Result<String, ToolError> {
        let corpus = self.corpus.as_ref();
        match tool {
            ToolKind::SearchPatterns => search_patterns::run(corpus, parse_args(arguments)?),
            ToolKind::GetByCategory => get_by_category::run(corpus, parse_args(arguments)?),
            ToolKind::GetMistakes => get_mistakes::run(corpus, parse_args(arguments)?),
            ToolKind::ListCategories => list_categories::run(corpus, parse_args(arguments)?),
            ToolKind::Stats => stats::run(corpus, parse_args(arguments)?),
        }
    }
}

fn parse_args<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    Ok(serde_json::from_value(Value::Object(arguments))?)
}

/// Accepts an integer, a float (truncated), or a numeric string. `null` is treated as absent.
pub(crate) fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("limit must be an integer, got {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("limit must be an integer, got '{s}'"))),
        Some(other) => Err(D::Error::custom(format!(
            "limit must be an integer, got {other}"
        ))),
    }
}

/// Derive the schema from `T`, then state required arguments and defaults explicitly.
fn input_schema<T: JsonSchema>(required: &[&str], defaults: &[(&str, i64)]) -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| json!({ "type": "object" }));

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        obj.insert("type".into(), json!("object"));
        let props = obj
            .entry("properties")
            .or_insert_with(|| json!({}));
        if let Some(props) = props.as_object_mut() {
            for name in required {
                if let Some(prop) = props.get_mut(*name).and_then(Value::as_object_mut) {
                    prop.remove("default");
                }
            }
            for (name, default) in defaults {
                if let Some(prop) = props.get_mut(*name).and_then(Value::as_object_mut) {
                    prop.insert("default".into(), json!(default));
                }
            }
        }
        if required.is_empty() {
            obj.remove("required");
        } else {
            obj.insert("required".into(), json!(required));
        }
    }
    schema
}
