use std::path::{Path, PathBuf};

use super::interface::{
    ConvertApi, ConvertError, DownloadSink, FormSurface, Result, INTERVAL_FIELD_ID,
    REQUIRED_ELEMENTS, URL_FIELD_ID,
};
use super::model::{StatusClass, UiState};
use super::schema::{
    ConvertErrorResponse, ConvertRequest, DOWNLOAD_FILENAME, SUCCESS_MESSAGE,
};

/// Drives the convert form: one submission at a time, UI state owned here.
pub struct FormController<F, A, D> {
    form: F,
    api: A,
    downloads: D,
    ui: UiState,
    last_download: Option<PathBuf>,
}

impl<F, A, D> FormController<F, A, D>
where
    F: FormSurface,
    A: ConvertApi,
    D: DownloadSink,
{
    /// Bind to the page. Fails if any element the form needs is absent.
    pub fn attach(form: F, api: A, downloads: D) -> Result<Self> {
        if let Some(missing) = REQUIRED_ELEMENTS
            .iter()
            .copied()
            .find(|id| !form.has_element(id))
        {
            return Err(ConvertError::MissingElement(missing));
        }

        Ok(Self {
            form,
            api,
            downloads,
            ui: UiState::default(),
            last_download: None,
        })
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Where the last successful submission saved its file.
    pub fn last_download(&self) -> Option<&Path> {
        self.last_download.as_deref()
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Run one submission and settle the UI. Never fails: every error ends
    /// up as an error-styled status message.
    pub async fn submit(&mut self) -> &UiState {
        let request = ConvertRequest::new(
            self.form.field_value(URL_FIELD_ID).unwrap_or_default(),
            self.form.field_value(INTERVAL_FIELD_ID).unwrap_or_default(),
        );

        self.ui.status.reset();
        self.last_download = None;

        let busy = self.ui.button.begin();

        match Self::convert(&self.api, &self.downloads, &request).await {
            Ok(path) => {
                tracing::info!("Saved {} to {}", DOWNLOAD_FILENAME, path.display());
                self.last_download = Some(path);
                self.ui.status.set(SUCCESS_MESSAGE, StatusClass::Success);
            }
            Err(e) => {
                tracing::error!("Error: {:?}", e);
                self.ui.status.set(e.to_string(), StatusClass::Error);
            }
        }

        drop(busy);
        &self.ui
    }

    async fn convert(api: &A, downloads: &D, request: &ConvertRequest) -> Result<PathBuf> {
        tracing::debug!(
            "Submitting conversion: url={}, interval={}",
            request.url,
            request.interval
        );

        let response = api.post_convert(request).await?;

        if !response.is_ok() {
            let message = ConvertErrorResponse::message_from_body(&response.body)?;
            return Err(ConvertError::Server {
                status: response.status,
                message,
            });
        }

        tracing::debug!("Conversion returned {} bytes", response.body.len());
        downloads.download(DOWNLOAD_FILENAME, &response.body).await
    }
}
