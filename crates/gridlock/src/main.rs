//! Server binary: CLI flags, logging setup, run loop.

use clap::Parser;
use gridlock::{GameServer, ServerError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player tic-tac-toe matchmaking server")]
struct Args {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8888)]
    port: u16,

    /// Enable debug-level logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let server = GameServer::builder()
        .bind(&format!("{}:{}", args.host, args.port))
        .build()
        .await?;
    server.run().await
}
