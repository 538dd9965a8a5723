pub mod config;
pub mod modules;
pub mod services;

use config::Config;
use modules::convert::{interface::Result, ConvertForm, FormController};
use services::{FileDownloader, HttpConvertClient};

pub type CliController = FormController<ConvertForm, HttpConvertClient, FileDownloader>;

/// Wire the HTTP client and file downloader to a form.
pub fn create_controller(config: &Config, form: ConvertForm) -> Result<CliController> {
    let api = match config.request_timeout {
        Some(timeout) => HttpConvertClient::with_timeout(config.converter_url.clone(), timeout),
        None => HttpConvertClient::new(config.converter_url.clone()),
    };

    FormController::attach(form, api, FileDownloader::new(config.download_dir.clone()))
}
