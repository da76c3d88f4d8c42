//! The central Model Context Protocol engine
//!
//! Provides the primary MCP JSON-RPC decoding, method execution routing, the
//! mock `initialize` handshake, and tool routing.

use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, JsonrpcMessage, ListToolsResult, ProtocolVersion,
    ServerCapabilities,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::tools::{build_tools_list, handle_tools_call};
use crate::errors::AppError;
use crate::mcp::rpc::{
    app_error_to_json_rpc, is_json_rpc_error, json_rpc_error, json_rpc_result_from,
    request_id_to_value,
};
use crate::AppState;

pub const SUPPORTED_PROTOCOL_VERSION: &str = "2024-11-05";

/// The closed set of methods this server understands. Anything outside it
/// falls through to a single method-not-found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpMethod {
    Initialize,
    InitializedNotification,
    ToolsList,
    ToolsCall,
}

impl McpMethod {
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "initialize" => Some(Self::Initialize),
            "notifications/initialized" => Some(Self::InitializedNotification),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            _ => None,
        }
    }
}

pub async fn handle_json_rpc_value(state: &AppState, payload: Value) -> Option<Value> {
    let request_id = payload.get("id").cloned();
    let parsed: JsonrpcMessage = match serde_json::from_value(payload) {
        Ok(message) => message,
        Err(err) => {
            warn!(error = %err, "dropping value with invalid request envelope");
            // A caller that sent an id must not be left waiting.
            return request_id.map(|id| json_rpc_error(Some(id), -32600, "Invalid Request"));
        }
    };

    match parsed {
        JsonrpcMessage::Request(request) => {
            let request_id = request_id_to_value(request.id);
            handle_json_rpc_request(
                state,
                Some(request_id),
                request.method,
                request.params.map(Value::Object),
            )
            .await
        }
        JsonrpcMessage::Notification(notification) => {
            let _ = handle_json_rpc_request(
                state,
                None,
                notification.method,
                notification.params.map(Value::Object),
            )
            .await;
            None
        }
        JsonrpcMessage::ResultResponse(_) | JsonrpcMessage::ErrorResponse(_) => {
            Some(json_rpc_error(request_id, -32600, "Invalid Request"))
        }
    }
}

pub async fn handle_json_rpc_request(
    state: &AppState,
    id: Option<Value>,
    method: String,
    params: Option<Value>,
) -> Option<Value> {
    let Some(parsed_method) = McpMethod::parse(&method) else {
        if id.is_none() {
            debug!(method = %method, "ignoring unrecognized notification");
            return None;
        }
        return Some(app_error_to_json_rpc(id, AppError::method_not_found(method)));
    };

    let response = match parsed_method {
        McpMethod::Initialize => {
            // The mock handshake is permissive: whatever the client offers,
            // it gets the fixed protocol version back.
            let initialize_result = InitializeResult {
                server_info: Implementation {
                    name: state.server_name.to_string(),
                    version: state.server_version.to_string(),
                    title: None,
                    description: None,
                    icons: vec![],
                    website_url: None,
                },
                capabilities: ServerCapabilities::default(),
                protocol_version: ProtocolVersion::V2024_11_05.into(),
                instructions: None,
                meta: None,
            };

            json_rpc_result_from(id, &initialize_result)
        }
        McpMethod::InitializedNotification => {
            // Silent even when a client attaches an id to it.
            debug!("client reported initialized");
            return None;
        }
        McpMethod::ToolsList => json_rpc_result_from(
            id,
            &ListToolsResult {
                meta: None,
                next_cursor: None,
                tools: build_tools_list(),
            },
        ),
        McpMethod::ToolsCall => handle_tools_call(id, params).await,
    };

    info!(
        method = %method,
        outcome = if is_json_rpc_error(&response) { "failure" } else { "success" },
        "request handled"
    );

    Some(response)
}
