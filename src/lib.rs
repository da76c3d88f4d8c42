use std::sync::Arc;

pub mod domain;
pub mod errors;
pub mod logging;
pub mod mcp;
pub mod stdio;

/// Identity reported by the `initialize` handshake. The mock carries no other
/// state: the tool catalog is constant and nothing persists between requests.
#[derive(Clone)]
pub struct AppState {
    pub server_name: Arc<str>,
    pub server_version: Arc<str>,
}

impl AppState {
    pub fn new(server_name: impl Into<Arc<str>>, server_version: impl Into<Arc<str>>) -> Self {
        Self {
            server_name: server_name.into(),
            server_version: server_version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stdio::process_line;

    fn state() -> AppState {
        AppState::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    async fn respond(state: &AppState, line: &str) -> serde_json::Value {
        let rendered = process_line(state, line)
            .await
            .expect("request must produce a response");
        serde_json::from_str(&rendered).expect("valid json response")
    }

    #[tokio::test]
    async fn full_session_answers_in_request_order() {
        let state = state();
        let script = [
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test-client","version":"1.0.0"},"capabilities":{}}}"#,
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"echo","arguments":{"text":"hi"}}}"#,
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"add","arguments":{"a":2,"b":3}}}"#,
        ];

        let mut responses = Vec::new();
        for line in script {
            if let Some(rendered) = process_line(&state, line).await {
                responses.push(
                    serde_json::from_str::<serde_json::Value>(&rendered)
                        .expect("valid json response"),
                );
            }
        }

        // The notification contributes nothing; everything else answers in order.
        let ids: Vec<i64> = responses
            .iter()
            .filter_map(|response| response["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn initialize_reports_package_identity() {
        let response = respond(
            &state(),
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test-client","version":"1.0.0"},"capabilities":{}}}"#,
        )
        .await;

        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(
            response["result"]["serverInfo"]["name"],
            env!("CARGO_PKG_NAME")
        );
        assert_eq!(
            response["result"]["serverInfo"]["version"],
            env!("CARGO_PKG_VERSION")
        );
    }

    #[tokio::test]
    async fn echo_round_trip_matches_wire_contract() {
        let response = respond(
            &state(),
            r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"echo","arguments":{"text":"hi"}}}"#,
        )
        .await;

        assert_eq!(response["id"], 10);
        assert_eq!(response["result"]["content"][0]["type"], "text");
        assert_eq!(response["result"]["content"][0]["text"], "hi");
    }

    #[tokio::test]
    async fn add_round_trips_integer_and_decimal_renderings() {
        let state = state();

        let integer = respond(
            &state,
            r#"{"jsonrpc":"2.0","id":11,"method":"tools/call","params":{"name":"add","arguments":{"a":2,"b":3}}}"#,
        )
        .await;
        assert_eq!(integer["result"]["content"][0]["text"], "5");

        let decimal = respond(
            &state,
            r#"{"jsonrpc":"2.0","id":12,"method":"tools/call","params":{"name":"add","arguments":{"a":2.5,"b":1}}}"#,
        )
        .await;
        assert_eq!(decimal["result"]["content"][0]["text"], "3.5");
    }

    #[tokio::test]
    async fn unknown_tool_and_method_surface_as_errors() {
        let state = state();

        let tool = respond(
            &state,
            r#"{"jsonrpc":"2.0","id":13,"method":"tools/call","params":{"name":"unknown","arguments":{}}}"#,
        )
        .await;
        assert_eq!(tool["error"]["code"], -32601);
        assert_eq!(tool["error"]["message"], "Tool not found: unknown");

        let method = respond(&state, r#"{"jsonrpc":"2.0","id":14,"method":"bogus"}"#).await;
        assert_eq!(method["error"]["code"], -32601);
        assert_eq!(method["error"]["message"], "Method not found: bogus");
    }

    #[tokio::test]
    async fn malformed_line_does_not_poison_the_stream() {
        let state = state();

        assert!(process_line(&state, "{ this is not json").await.is_none());

        let response = respond(&state, r#"{"jsonrpc":"2.0","id":15,"method":"tools/list"}"#).await;
        assert_eq!(response["id"], 15);
        assert!(response["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn string_ids_are_echoed_back() {
        let response = respond(
            &state(),
            r#"{"jsonrpc":"2.0","id":"req-echo","method":"tools/call","params":{"name":"echo","arguments":{"text":"x"}}}"#,
        )
        .await;

        assert_eq!(response["id"], "req-echo");
        assert_eq!(response["result"]["content"][0]["text"], "x");
    }
}
