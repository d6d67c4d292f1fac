use serde::{Deserialize, Serialize};

/// Body of `POST /api/pastes`.
#[derive(Debug, Deserialize)]
pub struct CreatePaste {
    pub content: Option<String>,
    pub format: Option<String>,
}

/// Body of `PUT /api/pastes/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdatePaste {
    pub content: Option<String>,
    pub format: Option<String>,
}

/// Response to a successful paste creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct PasteCreated {
    pub id: String,
    pub url: String,
}

/// Acknowledgement for updates and deletions.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}
