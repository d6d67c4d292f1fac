use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A stored paste with all of its fields, as served to the admin API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Paste {
    pub id: String,
    pub content: String,
    pub format: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row for the admin dashboard; omits `content`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PasteSummary {
    pub id: String,
    pub format: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection used by the public read paths.
#[derive(Debug, Clone, FromRow)]
pub struct PublicPaste {
    pub content: String,
    pub format: String,
}
