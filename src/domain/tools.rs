//! The fixed mock tool catalog exposed via Model Context Protocol
//!
//! Provides the `echo` and `add` implementations used by client test suites
//! to exercise `tools/list` and `tools/call` round trips.

use rust_mcp_sdk::{
    macros,
    schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent, Tool},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::mcp::rpc::{app_error_to_json_rpc, json_rpc_result_from};

/// The closed set of tool names; unknown names fall through to a single
/// tool-not-found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Echo,
    Add,
}

impl ToolKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "echo" => Some(Self::Echo),
            "add" => Some(Self::Add),
            _ => None,
        }
    }
}

#[macros::mcp_tool(name = "echo", description = "Echoes back the input")]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct EchoTool {
    /// Text to echo
    pub text: String,
}

#[macros::mcp_tool(name = "add", description = "Adds two numbers")]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct AddTool {
    pub a: f64,
    pub b: f64,
}

// Call-time argument decoding is deliberately more lenient than the
// advertised schemas: missing text echoes as "" and missing operands add
// as 0, so sloppy clients still get an answer out of the mock.
#[derive(Debug, Default, Deserialize)]
struct EchoArgs {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AddArgs {
    a: Option<f64>,
    b: Option<f64>,
}

pub fn build_tools_list() -> Vec<Tool> {
    vec![EchoTool::tool(), AddTool::tool()]
}

pub async fn handle_tools_call(id: Option<Value>, params: Option<Value>) -> Value {
    let Some(raw_params) = params else {
        return app_error_to_json_rpc(id, AppError::invalid_params("params are required"));
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => {
            return app_error_to_json_rpc(id, AppError::invalid_params("malformed tool call params"))
        }
    };

    let arguments = json!(tool_call.arguments.unwrap_or_default());

    match ToolKind::parse(&tool_call.name) {
        Some(ToolKind::Echo) => {
            let args: EchoArgs = match serde_json::from_value(arguments) {
                Ok(value) => value,
                Err(_) => {
                    return app_error_to_json_rpc(
                        id,
                        AppError::invalid_params("echo arguments must be an object"),
                    )
                }
            };

            text_result(id, args.text.unwrap_or_default())
        }
        Some(ToolKind::Add) => {
            let args: AddArgs = match serde_json::from_value(arguments) {
                Ok(value) => value,
                Err(_) => {
                    return app_error_to_json_rpc(
                        id,
                        AppError::invalid_params("add arguments must be numeric"),
                    )
                }
            };

            text_result(id, render_sum(args.a.unwrap_or(0.0), args.b.unwrap_or(0.0)))
        }
        None => app_error_to_json_rpc(id, AppError::tool_not_found(tool_call.name)),
    }
}

/// Whole-number operands render as an integer, anything else as a decimal:
/// `2 + 3` is `"5"` while `2.5 + 1` is `"3.5"` and `2.5 + 1.5` is `"4.0"`.
fn render_sum(a: f64, b: f64) -> String {
    let sum = a + b;
    if a.fract() == 0.0 && b.fract() == 0.0 {
        // Zero precision prints the exact integer expansion, even beyond
        // the i64 range.
        format!("{sum:.0}")
    } else {
        // Debug keeps the trailing ".0" on whole-valued floats.
        format!("{sum:?}")
    }
}

fn text_result(id: Option<Value>, text: String) -> Value {
    let result = CallToolResult {
        content: vec![ContentBlock::from(TextContent::new(text, None, None))],
        is_error: None,
        meta: None,
        structured_content: None,
    };

    json_rpc_result_from(id, &result)
}
