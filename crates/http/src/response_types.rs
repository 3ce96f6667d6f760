//! Response types (Serialize)

use serde::{Deserialize, Serialize};

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy".to_owned() }
    }
}
