use thiserror::Error;

/// Failures that can occur while handling a single request.
///
/// Every variant maps onto a JSON-RPC error object; the mapping lives in
/// `crate::mcp::rpc`. Nothing here is fatal: a failed request never takes
/// down the read loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not found: {method}")]
    MethodNotFound { method: String },
    #[error("tool not found: {name}")]
    ToolNotFound { name: String },
    #[error("invalid params: {message}")]
    InvalidParams { message: &'static str },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }

    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    pub fn invalid_params(message: &'static str) -> Self {
        Self::InvalidParams { message }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
