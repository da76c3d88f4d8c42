use mcp_mock_server::{logging, stdio, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let state = AppState::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    info!("mock server starting");
    stdio::serve(state).await?;
    info!("input stream closed, shutting down");

    Ok(())
}
