#![allow(dead_code)]

use agent_field_guide::corpus::types::Pattern;
use agent_field_guide::corpus::Corpus;
use agent_field_guide::protocol::Dispatcher;
use agent_field_guide::server::run_loop;
use agent_field_guide::tools::FieldGuideTools;
use serde_json::Value;
use std::sync::Arc;

/// Build a pattern record with the given type, categories, tags and content.
pub fn pattern(kind: &str, categories: &[&str], tags: &[&str], content: &str) -> Pattern {
    Pattern {
        kind: kind.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        content: content.to_string(),
    }
}

/// A small mixed corpus covering every record kind and overlapping categories.
pub fn sample_corpus() -> Corpus {
    let records = vec![
        pattern("mistake", &["deployment"], &["rollback"], "Shipped without a readiness probe."),
        pattern("practice", &["api-design", "performance"], &["rate-limit"], "Back off on rate limit responses with jitter."),
        pattern("insight", &["agent-ops"], &[], "Persist decisions between sessions."),
        pattern("mistake", &["database", "deployment"], &["migration"], "Deployed code before its migration ran."),
        pattern("practice", &["deployment"], &[], "Rate limiting guidance for public endpoints."),
        pattern("mistake", &["testing"], &["flaky"], "Tests depended on wall-clock time."),
        pattern("practice", &["mcp"], &["stdio"], "Log to stderr, never stdout."),
        pattern("mistake", &["mcp", "python"], &["print"], "A stray print corrupted the protocol stream."),
    ];
    Corpus::new(records, "integration tests", "0.0.1").unwrap()
}

/// Exactly the single-record store used by the end-to-end search scenario.
pub fn single_record_corpus() -> Corpus {
    let records = vec![pattern(
        "practice",
        &["deployment"],
        &[],
        "Follow the rate limiting guidance from the provider.",
    )];
    Corpus::new(records, "integration tests", "0.0.1").unwrap()
}

pub fn dispatcher(corpus: Corpus) -> Dispatcher {
    Dispatcher::new(FieldGuideTools::new(Arc::new(corpus)))
}

/// Feed `input` through the transport loop and return each output line parsed as JSON.
pub async fn run_session(corpus: Corpus, input: &str) -> Vec<Value> {
    run_session_bytes(corpus, input.as_bytes()).await
}

/// Like [`run_session`], for input that need not be valid UTF-8.
pub async fn run_session_bytes(corpus: Corpus, input: &[u8]) -> Vec<Value> {
    let dispatcher = dispatcher(corpus);
    let mut output: Vec<u8> = Vec::new();
    run_loop(input, &mut output, &dispatcher)
        .await
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// The text payload of a successful `tools/call` response.
pub fn result_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}
