use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ENDPOINT CONTRACT
// =============================================================================

pub const CONVERT_PATH: &str = "/api/convert";
pub const DOWNLOAD_FILENAME: &str = "frames.pdf";
pub const FALLBACK_ERROR_MESSAGE: &str = "Conversion failed";
pub const SUCCESS_MESSAGE: &str = "Conversion successful! Download started.";

// =============================================================================
// REQUEST
// =============================================================================

// Body of POST /api/convert. Both fields are sent as the raw input text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertRequest {
    pub url: String,
    pub interval: String, // Not validated client-side, the converter parses it
}

impl ConvertRequest {
    pub fn new(url: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interval: interval.into(),
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Raw outcome of the POST: status plus the unread-as-anything body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: reqwest::StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: reqwest::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }
}

// Error payload returned with a non-OK status: { "error": "..." }
// Kept as a raw value: the converter is not bound to any particular shape.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ConvertErrorResponse(pub Value);

impl ConvertErrorResponse {
    /// Message to surface for a failed conversion body.
    ///
    /// A body that is not JSON at all is an error in its own right. Otherwise
    /// a string `error` is used verbatim and any other truthy `error` as its
    /// JSON text; a missing, null, `false`, `0` or empty one falls back to
    /// [`FALLBACK_ERROR_MESSAGE`].
    pub fn message_from_body(body: &[u8]) -> Result<String, serde_json::Error> {
        let ConvertErrorResponse(parsed) = serde_json::from_slice::<ConvertErrorResponse>(body)?;

        let message = match parsed.get("error") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()))
    }
}
