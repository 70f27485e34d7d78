//! JSON-RPC 2.0 message types and the error taxonomy used on the wire.

pub mod dispatch;

pub use dispatch::Dispatcher;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::ToolError;

pub const JSONRPC_VERSION: &str = "2.0";
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "agent-field-guide";

/// Wire-level error codes.
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// A decoded request. `id: None` (absent or null) marks a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl Request {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

/// A single response line. Exactly one of `result` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, err: &RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(ErrorObject {
                code: err.code(),
                message: err.to_string(),
            }),
        }
    }
}

/// Everything that can turn a request into an error response.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    #[error("{0}")]
    UnknownTool(String),
    #[error(transparent)]
    Tool(#[from] ToolError),
}

impl RpcError {
    pub fn code(&self) -> i64 {
        match self {
            Self::Parse(_) => codes::PARSE_ERROR,
            Self::MethodNotFound(_) | Self::UnknownTool(_) => codes::METHOD_NOT_FOUND,
            Self::Tool(_) => codes::INTERNAL_ERROR,
        }
    }
}

/// Decode one line into a request. Anything that is not a request object is a parse error.
pub fn decode(line: &str) -> Result<Request, RpcError> {
    let value: Value = serde_json::from_str(line).map_err(|e| RpcError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(RpcError::Parse("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| RpcError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_request() {
        let req = decode(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list","params":{}}"#).unwrap();
        assert_eq!(req.id, Some(json!(7)));
        assert_eq!(req.method, "tools/list");
        assert!(!req.is_notification());
    }

    #[test]
    fn null_or_missing_id_is_notification() {
        assert!(decode(r#"{"method":"notifications/initialized"}"#).unwrap().is_notification());
        assert!(decode(r#"{"id":null,"method":"x"}"#).unwrap().is_notification());
    }

    #[test]
    fn string_ids_are_kept_verbatim() {
        let req = decode(r#"{"id":"abc-1","method":"ping"}"#).unwrap();
        assert_eq!(req.id, Some(json!("abc-1")));
    }

    #[test]
    fn non_object_lines_are_parse_errors() {
        for line in ["{oops", "[1,2]", "42", r#"{"method": 5}"#] {
            let err = decode(line).unwrap_err();
            assert_eq!(err.code(), codes::PARSE_ERROR, "line {line}");
            assert!(err.to_string().starts_with("Parse error: "));
        }
    }

    #[test]
    fn error_codes() {
        assert_eq!(RpcError::MethodNotFound("x".into()).code(), codes::METHOD_NOT_FOUND);
        assert_eq!(RpcError::UnknownTool("Unknown tool: x".into()).code(), codes::METHOD_NOT_FOUND);
        assert_eq!(
            RpcError::from(ToolError::MissingArgument("query")).code(),
            codes::INTERNAL_ERROR
        );
    }

    #[test]
    fn response_serializes_only_one_payload() {
        let ok = serde_json::to_value(Response::success(json!(1), json!({}))).unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "id": 1, "result": {}}));

        let err = RpcError::MethodNotFound("bogus".into());
        let value = serde_json::to_value(Response::error(Value::Null, &err)).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32601, "message": "Method not found: bogus"}
            })
        );
    }
}
