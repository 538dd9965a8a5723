pub mod controller;
pub mod interface;
pub mod model;
pub mod schema;

pub use controller::FormController;
pub use interface::{ConvertApi, ConvertError, DownloadSink, FormSurface};
pub use model::{ConvertForm, StatusClass, SubmissionPhase, UiState};
