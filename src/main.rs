//! `client-orders`: serve the REST API or work with records from the terminal.

use clap::{Parser, Subcommand};
use client_orders::commands::{run_clients, run_orders, ClientCommand, OrderCommand};
use client_orders::{app, config::DEFAULT_LOG_FILTER, AppConfig, AppState, Database};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "client-orders", version, about = "Client and order records over SQLite")]
struct Cli {
    /// SQLite URL; overrides DATABASE_URL.
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default).
    Serve {
        /// Listen address; overrides BIND_ADDR.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Manage clients.
    #[command(subcommand)]
    Clients(ClientCommand),
    /// Manage orders.
    #[command(subcommand)]
    Orders(OrderCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let db = Arc::new(Database::new(config.database_url.clone()));
    db.connect().await;
    if let Err(e) = db.initialize_schema().await {
        tracing::error!(error = %e, "schema not initialized");
    }
    let state = AppState::new(db.clone());

    let result = match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(state, bind.unwrap_or(config.bind_addr)).await,
        Command::Clients(cmd) => run_clients(&state, cmd).await.map_err(Into::into),
        Command::Orders(cmd) => run_orders(&state, cmd).await.map_err(Into::into),
    };
    db.disconnect().await;
    result
}

async fn serve(state: AppState, addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
