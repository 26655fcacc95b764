// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod routes;
mod session;

#[cfg(test)]
mod tests;

use atelier_persistence::SqlitePersistence;
use axum::Router;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::net::SocketAddr;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;
use crate::routes::{AppState, build_router};

/// Atelier Server - HTTP server for appointment booking and negotiation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "ATELIER_DATABASE")]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, env = "ATELIER_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG overrides the verbosity flag
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .init();

    run(&args).await?;
    Ok(())
}

async fn run(args: &Args) -> Result<(), ServerError> {
    info!("Initializing Atelier Server");

    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app: Router = build_router(AppState::new(persistence));

    let address: String = format!("{}:{}", args.bind, args.port);
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| ServerError::InvalidAddress { address, source })?;
    info!("Server listening on {}", addr);

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
