use std::path::PathBuf;

use clap::Parser;

/// Process configuration, read from CLI flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "minibin", about = "A small web service for hosting pastes")]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Username for the admin surface.
    #[arg(long, env = "AUTH_USER", default_value = "admin")]
    pub auth_user: String,

    /// Password for the admin surface.
    #[arg(long, env = "AUTH_PASS", default_value = "changeme")]
    pub auth_pass: String,

    /// Location of the SQLite database file, created on first run.
    #[arg(long, env = "DB_PATH", default_value = "./pastes.db")]
    pub db_path: PathBuf,

    /// Public base URL reported in paste creation responses.
    #[arg(long, env = "BASE_URL")]
    pub base_url: Option<String>,
}

impl Config {
    /// The absolute URL prefix pastes are reachable under.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}
