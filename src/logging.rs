use tracing_subscriber::{EnvFilter, fmt};

/// Stdout carries the JSON-RPC response stream, so all diagnostics go to
/// stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
