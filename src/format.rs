//! Markdown-ish text rendering of query results.

use crate::corpus::types::Pattern;
use crate::query::{CategoryCount, Statistics};

/// Returned in place of an empty result list.
pub const NO_RESULTS: &str = "No patterns found.";

const DIVIDER: &str = "\n\n---\n\n";

/// Render one record as a numbered block. `idx` is zero-based.
pub fn format_pattern(pattern: &Pattern, idx: usize) -> String {
    let mut out = format!(
        "[{}] **{}** — {}\n\n{}",
        idx + 1,
        pattern.kind.to_uppercase(),
        pattern.categories.join(", "),
        pattern.content
    );
    if !pattern.tags.is_empty() {
        out.push_str(&format!("\n\n_Tags: {}_", pattern.tags.join(", ")));
    }
    out
}

pub fn format_patterns(patterns: &[&Pattern]) -> String {
    if patterns.is_empty() {
        return NO_RESULTS.to_string();
    }
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| format_pattern(p, i))
        .collect::<Vec<_>>()
        .join(DIVIDER)
}

/// Bulleted category list; `counts` is expected highest-first.
pub fn format_categories(counts: &[CategoryCount]) -> String {
    let mut lines = vec!["**Available categories:**\n".to_string()];
    lines.extend(
        counts
            .iter()
            .map(|c| format!("- **{}** ({} patterns)", c.category, c.count)),
    );
    lines.join("\n")
}

pub fn format_statistics(stats: &Statistics) -> String {
    let mut lines = vec![
        format!("**Agent Field Guide** — v{}", stats.version),
        format!("Source: {}", stats.source),
        String::new(),
        format!("**Total patterns:** {}", stats.total),
        String::new(),
        "**By type:**".to_string(),
    ];
    // by_type is a BTreeMap, so this is alphabetical
    for (kind, n) in &stats.by_type {
        lines.push(format!("  - {kind}: {n}"));
    }
    lines.push(String::new());
    lines.push("**By category:**".to_string());

    let mut by_category: Vec<&CategoryCount> = stats.by_category.iter().collect();
    by_category.sort_by(|a, b| b.count.cmp(&a.count));
    for c in by_category {
        lines.push(format!("  - {}: {}", c.category, c.count));
    }
    lines.join("\n")
}
