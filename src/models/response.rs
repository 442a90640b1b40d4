use serde::{Deserialize, Serialize};

/// `{message, status}` envelope for every non-data reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResponseMessage {
    pub message: String,
    pub status: u16,
}

impl ResponseMessage {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}
