//! # Ledger Node
//!
//! Serves JSON-RPC 2.0 over stdin/stdout: one request object per input
//! line, one response object per output line. Logs go to stderr.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (devnet defaults, `LC_*` environment overrides)
//! 2. Install the tracing subscriber
//! 3. Validate configuration and seed genesis
//! 4. Start the apply queue
//! 5. Serve until stdin closes or Ctrl+C

use anyhow::{Context, Result};
use node_runtime::{NodeConfig, NodeRuntime};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.logging.filter)?;

    info!("===========================================");
    info!("  Ledger Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let runtime = NodeRuntime::start(config).context("Failed to start node runtime")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    info!("Node is running. Reading JSON-RPC requests from stdin.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let mut response = runtime.handle_line(&line).await;
                response.push('\n');
                stdout.write_all(response.as_bytes()).await?;
                stdout.flush().await?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received");
                break;
            }
        }
    }

    runtime.shutdown().await;
    Ok(())
}
