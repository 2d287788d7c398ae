//! ARGen Worker Service Entry Point
//!
//! Initializes configuration, services, and the HTTP server.

use argen_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
