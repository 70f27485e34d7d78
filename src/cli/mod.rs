//! Terminal commands. Each prints the same text the matching MCP tool returns.

pub mod search;
pub mod stats;
