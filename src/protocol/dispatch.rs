use serde_json::{json, Map, Value};

use super::{decode, Request, Response, RpcError, PROTOCOL_VERSION, SERVER_NAME};
use crate::tools::{FieldGuideTools, ToolKind};

const INSTRUCTIONS: &str = "The agent field guide serves curated patterns and documented mistakes. \
     Use search_patterns for keyword lookups, get_mistakes before starting risky work, \
     and list_categories to discover what is covered.";

/// Routes decoded requests to the tool registry and builds responses.
///
/// Never fails: every request-attributable problem becomes an error response,
/// and notifications produce no response at all.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tools: FieldGuideTools,
}

impl Dispatcher {
    pub fn new(tools: FieldGuideTools) -> Self {
        Self { tools }
    }

    /// Decode and handle one non-blank input line.
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        match decode(line) {
            Ok(request) => self.dispatch(request),
            Err(err) => {
                tracing::warn!(error = %err, "undecodable request line");
                Some(Response::error(Value::Null, &err))
            }
        }
    }

    /// Handle one request. Returns `None` for notifications.
    pub fn dispatch(&self, request: Request) -> Option<Response> {
        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        let params = into_object(request.params);
        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize()),
            "tools/list" => Ok(json!({ "tools": self.tools.list() })),
            "tools/call" => self.call_tool(params),
            "ping" => Ok(json!({})),
            other => Err(RpcError::MethodNotFound(other.to_string())),
        };

        Some(match outcome {
            Ok(result) => Response::success(id, result),
            Err(err) => {
                tracing::warn!(method = %request.method, code = err.code(), error = %err, "request failed");
                Response::error(id, &err)
            }
        })
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "notifications/initialized" => tracing::info!("client initialized"),
            "notifications/cancelled" => tracing::debug!("request cancelled by client"),
            _ => tracing::debug!(method, "ignoring notification"),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "instructions": INSTRUCTIONS,
        })
    }

    fn call_tool(&self, mut params: Map<String, Value>) -> Result<Value, RpcError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let arguments = into_object(params.remove("arguments"));

        let tool: ToolKind = name.parse().map_err(RpcError::UnknownTool)?;
        tracing::info!(tool = %tool, "tools/call");

        let text = self.tools.call(tool, arguments)?;
        Ok(json!({ "content": [ { "type": "text", "text": text } ] }))
    }
}

/// Absent or non-object params/arguments are treated as empty.
fn into_object(value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::protocol::codes;
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        let json = r#"[
            {"type": "practice", "categories": ["deployment"], "tags": ["edge"], "content": "Rate limiting guidance for public endpoints."},
            {"type": "mistake", "categories": ["database"], "content": "Locked a large table during a migration."}
        ]"#;
        let corpus = Corpus::from_json(json, "dispatch tests").unwrap();
        Dispatcher::new(FieldGuideTools::new(Arc::new(corpus)))
    }

    fn call(d: &Dispatcher, line: &str) -> Response {
        d.handle_line(line).expect("expected a response")
    }

    fn text(resp: &Response) -> String {
        resp.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn initialize_reports_server_info() {
        let resp = call(&dispatcher(), r#"{"id":0,"method":"initialize","params":{}}"#);
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[test]
    fn tools_list_has_five_descriptors() {
        let resp = call(&dispatcher(), r#"{"id":1,"method":"tools/list"}"#);
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0]["name"], "search_patterns");
        assert!(tools[0]["inputSchema"]["properties"]["query"].is_object());
    }

    #[test]
    fn search_tool_call() {
        let resp = call(
            &dispatcher(),
            r#"{"id":1,"method":"tools/call","params":{"name":"search","arguments":{"query":"rate limit"}}}"#,
        );
        assert_eq!(resp.id, json!(1));
        assert!(text(&resp).starts_with("Found 1 pattern(s) for 'rate limit':"));
    }

    #[test]
    fn missing_category_is_internal_error() {
        let resp = call(
            &dispatcher(),
            r#"{"id":2,"method":"tools/call","params":{"name":"get_by_category","arguments":{}}}"#,
        );
        let err = resp.error.unwrap();
        assert_eq!(err.code, codes::INTERNAL_ERROR);
        assert_eq!(err.message, "category is required");
        assert_eq!(resp.id, json!(2));
    }

    #[test]
    fn unknown_tool_is_method_not_found() {
        let resp = call(
            &dispatcher(),
            r#"{"id":"t","method":"tools/call","params":{"name":"drop_table"}}"#,
        );
        let err = resp.error.unwrap();
        assert_eq!(err.code, codes::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: drop_table");
        assert_eq!(resp.id, json!("t"));
    }

    #[test]
    fn unknown_method_with_id_is_method_not_found() {
        let resp = call(&dispatcher(), r#"{"id":9,"method":"resources/list"}"#);
        let err = resp.error.unwrap();
        assert_eq!(err.code, codes::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Method not found: resources/list");
    }

    #[test]
    fn notifications_get_no_response() {
        let d = dispatcher();
        assert!(d.handle_line(r#"{"method":"notifications/initialized"}"#).is_none());
        assert!(d.handle_line(r#"{"method":"no/such/method"}"#).is_none());
        assert!(d
            .handle_line(r#"{"method":"tools/call","params":{"name":"bogus"}}"#)
            .is_none());
    }

    #[test]
    fn malformed_line_gets_null_id_parse_error() {
        let resp = call(&dispatcher(), "{\"id\": 1, \"method\"");
        assert_eq!(resp.id, Value::Null);
        assert_eq!(resp.error.unwrap().code, codes::PARSE_ERROR);
    }

    #[test]
    fn non_object_params_are_treated_as_empty() {
        let resp = call(&dispatcher(), r#"{"id":3,"method":"tools/call","params":"stats"}"#);
        assert_eq!(resp.error.unwrap().message, "Unknown tool: ");

        let resp = call(
            &dispatcher(),
            r#"{"id":4,"method":"tools/call","params":{"name":"get_mistakes","arguments":null}}"#,
        );
        assert!(text(&resp).starts_with("**Documented mistakes** — 1 entry(s):"));
    }

    #[test]
    fn bad_limit_is_internal_error() {
        let resp = call(
            &dispatcher(),
            r#"{"id":5,"method":"tools/call","params":{"name":"search_patterns","arguments":{"query":"rate","limit":"lots"}}}"#,
        );
        let err = resp.error.unwrap();
        assert_eq!(err.code, codes::INTERNAL_ERROR);
        assert!(err.message.contains("limit must be an integer"));
    }

    #[test]
    fn ping_returns_empty_object() {
        let resp = call(&dispatcher(), r#"{"id":6,"method":"ping"}"#);
        assert_eq!(resp.result, Some(json!({})));
    }
}
