use frames_pdf_client::config::Config;
use frames_pdf_client::create_controller;
use frames_pdf_client::modules::convert::{ConvertForm, StatusClass, SubmissionPhase};
use reqwest::StatusCode;
use std::time::Duration;

use crate::common::{dir_entries, scratch_dir, unreachable_base_url, MockConverter, MockReply};

// =============================================================================
// INTEGRATION TESTS - FORM SUBMISSION END TO END
// Real HTTP client and file downloader against a local mock converter
// =============================================================================

fn config_for(base_url: &str, download_dir: &std::path::Path) -> Config {
    Config {
        converter_url: base_url.to_string(),
        download_dir: download_dir.to_path_buf(),
        request_timeout: None,
    }
}

fn video_form() -> ConvertForm {
    ConvertForm::new("http://example.com/video", "5")
}

/// 200 with a binary body: frames.pdf lands on disk, success message shown
#[tokio::test]
async fn test_submit_success_saves_frames_pdf() {
    let converter = MockConverter::start(vec![MockReply::pdf(b"%PDF-1.4 fake frames")]).await;
    let dir = scratch_dir();
    let mut controller = create_controller(&config_for(&converter.base_url, &dir), video_form())
        .expect("Every element is present on an argument-backed form");

    let ui = controller.submit().await.clone();

    assert_eq!(ui.phase(), SubmissionPhase::Succeeded);
    assert_eq!(ui.status.text, "Conversion successful! Download started.");
    assert_eq!(ui.status.class, StatusClass::Success);
    assert!(!ui.button.disabled);
    assert!(!ui.button.loading);

    let requests = converter.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        r#"{"url":"http://example.com/video","interval":"5"}"#
    );

    // Saved under the fixed name, not the server's Content-Disposition name
    assert_eq!(dir_entries(&dir), vec!["frames.pdf".to_string()]);
    assert_eq!(
        std::fs::read(dir.join("frames.pdf")).unwrap(),
        b"%PDF-1.4 fake frames"
    );
    assert_eq!(controller.last_download(), Some(dir.join("frames.pdf").as_path()));

    std::fs::remove_dir_all(&dir).ok();
}

/// 400 with {"error": "Invalid URL"}: message shown verbatim, nothing saved
#[tokio::test]
async fn test_submit_server_error_shows_message() {
    let converter = MockConverter::start(vec![MockReply::json(
        StatusCode::BAD_REQUEST,
        r#"{"error":"Invalid URL"}"#,
    )])
    .await;
    let dir = scratch_dir();
    let mut controller =
        create_controller(&config_for(&converter.base_url, &dir), video_form()).unwrap();

    let ui = controller.submit().await.clone();

    assert_eq!(ui.phase(), SubmissionPhase::Failed);
    assert_eq!(ui.status.text, "Invalid URL");
    assert_eq!(ui.status.class, StatusClass::Error);
    assert!(!ui.button.disabled);
    assert!(dir_entries(&dir).is_empty());
    assert!(controller.last_download().is_none());

    std::fs::remove_dir_all(&dir).ok();
}

/// Non-JSON error page surfaces the parse failure, nothing saved
#[tokio::test]
async fn test_submit_non_json_error_page_shows_parse_error() {
    let converter = MockConverter::start(vec![MockReply::html(
        StatusCode::BAD_GATEWAY,
        "<html><body>Bad Gateway</body></html>",
    )])
    .await;
    let dir = scratch_dir();
    let mut controller =
        create_controller(&config_for(&converter.base_url, &dir), video_form()).unwrap();

    let ui = controller.submit().await;

    assert_eq!(ui.status.text, "expected value at line 1 column 1");
    assert_eq!(ui.status.class, StatusClass::Error);
    assert!(dir_entries(&dir).is_empty());
}

/// JSON error body without a usable message falls back to the generic one
#[tokio::test]
async fn test_submit_empty_error_uses_fallback() {
    let converter = MockConverter::start(vec![MockReply::json(
        StatusCode::BAD_REQUEST,
        r#"{"error":""}"#,
    )])
    .await;
    let dir = scratch_dir();
    let mut controller =
        create_controller(&config_for(&converter.base_url, &dir), video_form()).unwrap();

    let ui = controller.submit().await;

    assert_eq!(ui.status.text, "Conversion failed");
    assert_eq!(ui.status.class, StatusClass::Error);
}

/// The converter's own "no frames" failure comes through unchanged
#[tokio::test]
async fn test_submit_server_500_message() {
    let converter = MockConverter::start(vec![MockReply::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"No frames extracted. Check video or interval."}"#,
    )])
    .await;
    let dir = scratch_dir();
    let mut controller =
        create_controller(&config_for(&converter.base_url, &dir), video_form()).unwrap();

    let ui = controller.submit().await;

    assert_eq!(ui.status.text, "No frames extracted. Check video or interval.");
    assert_eq!(ui.phase(), SubmissionPhase::Failed);
}

/// Network failure is caught and surfaced, control re-enabled
#[tokio::test]
async fn test_submit_unreachable_converter() {
    let dir = scratch_dir();
    let base_url = unreachable_base_url().await;
    let mut controller = create_controller(&config_for(&base_url, &dir), video_form()).unwrap();

    let ui = controller.submit().await;

    assert_eq!(ui.phase(), SubmissionPhase::Failed);
    assert_eq!(ui.status.class, StatusClass::Error);
    assert!(!ui.status.text.is_empty());
    assert!(!ui.button.disabled);
    assert!(!ui.button.loading);
    assert!(dir_entries(&dir).is_empty());
}

/// Configured timeout turns a hung converter into an error message
#[tokio::test]
async fn test_submit_times_out_when_configured() {
    let converter = MockConverter::start(vec![
        MockReply::pdf(b"too late").delayed(Duration::from_secs(2)),
    ])
    .await;
    let dir = scratch_dir();
    let mut config = config_for(&converter.base_url, &dir);
    config.request_timeout = Some(Duration::from_millis(200));
    let mut controller = create_controller(&config, video_form()).unwrap();

    let ui = controller.submit().await;

    assert_eq!(ui.phase(), SubmissionPhase::Failed);
    assert!(!ui.button.disabled);
    assert!(dir_entries(&dir).is_empty());
}

/// A second submission starts from a reset status, whatever the first did
#[tokio::test]
async fn test_serial_submissions_reset_status() {
    let converter = MockConverter::start(vec![
        MockReply::json(StatusCode::BAD_REQUEST, r#"{"error":"Invalid URL"}"#),
        MockReply::pdf(b"%PDF-1.4"),
    ])
    .await;
    let dir = scratch_dir();
    let mut controller =
        create_controller(&config_for(&converter.base_url, &dir), video_form()).unwrap();

    assert_eq!(controller.submit().await.status.text, "Invalid URL");

    controller.form_mut().url = "http://example.com/other".to_string();
    let ui = controller.submit().await.clone();

    assert_eq!(ui.phase(), SubmissionPhase::Succeeded);
    assert_eq!(ui.status.text, "Conversion successful! Download started.");

    let requests = converter.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].body.contains("http://example.com/other"));
    assert_eq!(dir_entries(&dir), vec!["frames.pdf".to_string()]);

    std::fs::remove_dir_all(&dir).ok();
}
