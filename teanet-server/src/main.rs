//! # Teanet Server
//!
//! Provide a line-based TCP server with a small command set, including a
//! Wikipedia summary lookup.
//!
//! ## Design Principles
//!
//! 1. **Single Responsibility**: Parsing, dispatch and lookups live in
//!    separate modules and crates.
//! 2. **Async First**: Tokio runs one task per connection.
//! 3. **Fail-Open Defaults**: Errors are localized to the connection; only a
//!    failed bind stops the process.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use teanet_lookup::WikipediaClient;
use teanet_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let lookup = Arc::new(WikipediaClient::new()?);

    let addr = server::listen_addr();
    let listener = server::bind(addr).with_context(|| format!("failed to bind {addr}"))?;
    info!("Teanet server listening on port {}", listener.local_addr()?.port());

    server::serve_until(listener, lookup, async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    })
    .await;

    Ok(())
}
