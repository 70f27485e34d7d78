use anyhow::Result;

use agent_field_guide::config::FieldGuideConfig;
use agent_field_guide::format::{format_categories, format_statistics};
use agent_field_guide::query;
use agent_field_guide::server::load_corpus;

/// Display category counts in the terminal.
pub fn categories(config: &FieldGuideConfig) -> Result<()> {
    let corpus = load_corpus(config)?;
    println!("{}", format_categories(&query::category_counts(&corpus)));
    Ok(())
}

/// Display field guide statistics in the terminal.
pub fn stats(config: &FieldGuideConfig) -> Result<()> {
    let corpus = load_corpus(config)?;
    println!("{}", format_statistics(&query::statistics(&corpus)));
    Ok(())
}
