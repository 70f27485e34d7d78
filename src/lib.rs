//! Agent field guide: curated patterns from autonomous AI agent operation, served over MCP.
//!
//! A fixed, in-memory corpus of short text records ("patterns") is exposed
//! through five read-only tools over newline-delimited JSON-RPC on stdio:
//!
//! | Tool | Purpose | Limit (default / max) |
//! |------|---------|-----------------------|
//! | `search_patterns` | Term-scored keyword search with exact-phrase boost | 10 / 30 |
//! | `get_by_category` | All patterns carrying one category label | 15 / 40 |
//! | `get_mistakes` | Documented mistakes, optionally per category | 10 / 25 |
//! | `list_categories` | Category labels with counts | — |
//! | `stats` | Totals by type and category, plus provenance | — |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`corpus`] — The immutable record store and its category index
//! - [`query`] — Query engine: search, category filter, mistakes, statistics
//! - [`format`] — Text rendering of query results
//! - [`tools`] — Tool registry, parameter schemas, and handlers
//! - [`protocol`] — JSON-RPC message types, error codes, and the dispatcher
//! - [`server`] — The stdio transport loop

pub mod config;
pub mod corpus;
pub mod format;
pub mod protocol;
pub mod query;
pub mod server;
pub mod tools;
