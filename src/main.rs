//! Binary entry point that wires environment bootstrap and launches the
//! voice-driven MyCare+ companion loop.

use anyhow::Result;

use mycare::companion;

#[tokio::main]
/// Bootstraps environment variables and launches the asynchronous
/// companion session loop.
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    companion::run_companion().await
}
