use anyhow::Context;
use clap::Parser;

use minibin::config::Config;
use minibin::db::Database;
use minibin::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // try to load .env, ignoring any errors
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let database = Database::connect(&config.db_path)
        .await
        .context("failed to open database")?;

    server::run(AppState { config, database }).await
}
