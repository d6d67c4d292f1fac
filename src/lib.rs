pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod id;
pub mod markdown;
pub mod models;
pub mod server;
pub mod types;

pub use error::{ApiError, ApiResult, PublicError, PublicResult};
