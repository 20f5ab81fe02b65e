use serde::{Deserialize, Serialize};

/// Error envelope every backend endpoint uses for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
