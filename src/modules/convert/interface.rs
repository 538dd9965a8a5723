use async_trait::async_trait;
use std::path::PathBuf;

use super::schema::{ApiResponse, ConvertRequest};

// =============================================================================
// ERRORS
// =============================================================================

pub type Result<T> = std::result::Result<T, ConvertError>;

// Display is the exact text shown in the status message.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Download(#[from] std::io::Error),
    #[error("Missing page element: #{0}")]
    MissingElement(&'static str),
}

// =============================================================================
// PAGE SURFACE
// =============================================================================

pub const FORM_ID: &str = "convertForm";
pub const URL_FIELD_ID: &str = "url";
pub const INTERVAL_FIELD_ID: &str = "interval";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const STATUS_MESSAGE_ID: &str = "statusMessage";

/// Elements the controller needs on attach.
pub const REQUIRED_ELEMENTS: [&str; 5] = [
    FORM_ID,
    URL_FIELD_ID,
    INTERVAL_FIELD_ID,
    SUBMIT_BUTTON_ID,
    STATUS_MESSAGE_ID,
];

/// The markup the controller is attached to.
pub trait FormSurface: Send {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input field, `None` if there is no such field.
    fn field_value(&self, id: &str) -> Option<String>;
}

// =============================================================================
// COLLABORATORS
// =============================================================================

#[async_trait]
pub trait ConvertApi: Send + Sync {
    /// POST the request to the convert endpoint and read the whole body.
    async fn post_convert(&self, request: &ConvertRequest) -> Result<ApiResponse>;
}

#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Save `contents` under `filename`, returning where it landed.
    async fn download(&self, filename: &str, contents: &[u8]) -> Result<PathBuf>;
}
