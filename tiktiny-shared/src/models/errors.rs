use serde::Deserialize;

/// Error body returned by the video API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(alias = "error")]
    pub message: String,
}

impl ErrorResponse {
    /// Parse an API error body, returning `None` when it carries no usable message.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|error| !error.message.trim().is_empty())
    }
}
