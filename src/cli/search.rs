use anyhow::Result;

use agent_field_guide::config::FieldGuideConfig;
use agent_field_guide::server::load_corpus;
use agent_field_guide::tools::get_by_category::{self, GetByCategoryParams};
use agent_field_guide::tools::get_mistakes::{self, GetMistakesParams};
use agent_field_guide::tools::search_patterns::{self, SearchPatternsParams};

/// Run a keyword search from the terminal.
pub fn search(config: &FieldGuideConfig, query: &str, limit: Option<i64>) -> Result<()> {
    let corpus = load_corpus(config)?;
    let params = SearchPatternsParams {
        query: query.to_string(),
        limit,
    };
    println!("{}", search_patterns::run(&corpus, params)?);
    Ok(())
}

/// Browse one category from the terminal.
pub fn category(config: &FieldGuideConfig, name: &str, limit: Option<i64>) -> Result<()> {
    let corpus = load_corpus(config)?;
    let params = GetByCategoryParams {
        category: name.to_string(),
        limit,
    };
    println!("{}", get_by_category::run(&corpus, params)?);
    Ok(())
}

pub fn mistakes(
    config: &FieldGuideConfig,
    category: Option<&str>,
    limit: Option<i64>,
) -> Result<()> {
    let corpus = load_corpus(config)?;
    let params = GetMistakesParams {
        category: category.map(str::to_string),
        limit,
    };
    println!("{}", get_mistakes::run(&corpus, params)?);
    Ok(())
}
