//! Line-delimited JSON-RPC 2.0 server exposing the registry as MCP tools.
//!
//! Supported methods: `initialize`, `ping`, `tools/list`, `tools/call`.
//! Notifications (requests without an `id`) are accepted and never answered.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::core::registry::ToolRegistry;
use crate::core::ConfigProvider;
use crate::utils::error::{CalcError, Result};

pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            name: config.server_name().to_string(),
            version: config.server_version().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Failure that becomes a JSON-RPC `error` object.
#[derive(Debug)]
struct RpcError {
    code: i64,
    message: String,
}

impl RpcError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub struct StdioServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl StdioServer {
    pub fn new(registry: ToolRegistry, info: ServerInfo) -> Self {
        Self {
            registry: Arc::new(registry),
            info,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serves until the reader reaches EOF.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            "🚀 {} {} serving {} tools on stdio",
            self.info.name,
            self.info.version,
            self.registry.len()
        );

        // Read raw bytes: a non-UTF-8 line gets a parse error reply
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_bytes(line).await {
                let mut encoded = serde_json::to_vec(&response)?;
                encoded.push(b'\n');
                writer.write_all(&encoded).await?;
                writer.flush().await?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handles one raw message. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        self.handle_bytes(line.as_bytes()).await
    }

    pub async fn handle_bytes(&self, line: &[u8]) -> Option<Value> {
        let message: Value = match serde_json::from_slice(line) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Malformed JSON-RPC message: {}", e);
                return Some(error_response(
                    Value::Null,
                    RpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };
        self.handle_message(message).await
    }

    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        let Value::Object(object) = message else {
            return Some(error_response(
                Value::Null,
                RpcError::new(INVALID_REQUEST, "Request must be a JSON object"),
            ));
        };

        let id = object.get("id").cloned();
        let reply_id = id.clone().unwrap_or(Value::Null);

        if object.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            return Some(error_response(
                reply_id,
                RpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
            ));
        }
        let Some(method) = object.get("method").and_then(Value::as_str) else {
            return Some(error_response(
                reply_id,
                RpcError::new(INVALID_REQUEST, "method must be a string"),
            ));
        };
        let params = object.get("params").cloned().unwrap_or(Value::Null);

        let Some(id) = id else {
            tracing::debug!("Notification {}", method);
            return None;
        };

        tracing::debug!("Request {} ({})", method, id);
        let outcome = match method {
            "initialize" => Ok(self.initialize(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(params).await,
            other => Err(RpcError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        };

        Some(match outcome {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(e) => error_response(id, e),
        })
    }

    fn initialize(&self, params: &Value) -> Value {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": { "name": self.info.name, "version": self.info.version },
        })
    }

    fn list_tools(&self) -> Value {
        json!({ "tools": self.registry.specs() })
    }

    async fn call_tool(&self, params: Value) -> std::result::Result<Value, RpcError> {
        let params: CallParams = serde_json::from_value(params)
            .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid tools/call params: {}", e)))?;

        match self.registry.call(&params.name, &params.arguments).await {
            Ok(output) => {
                let mut result = json!({
                    "content": [{ "type": "text", "text": output.value.to_string() }],
                    "isError": false,
                });
                if output.value.is_finite() {
                    result["structuredContent"] = json!({ "result": output.value });
                }
                Ok(result)
            }
            Err(CalcError::UnknownTool { name }) => Err(RpcError::new(
                INVALID_PARAMS,
                format!("Unknown tool: {}", name),
            )),
            Err(e) => Ok(json!({
                "content": [{ "type": "text", "text": e.user_friendly_message() }],
                "isError": true,
            })),
        }
    }
}

fn error_response(id: Value, error: RpcError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": error.code, "message": error.message },
    })
}
