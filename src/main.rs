use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use frames_pdf_client::config::environment::{parse_timeout_secs, Config};
use frames_pdf_client::create_controller;
use frames_pdf_client::modules::convert::{ConvertForm, SubmissionPhase};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "frames-pdf")]
#[command(about = "Turn a video URL into a PDF of frames via the converter service")]
#[command(version)]
struct Args {
    /// Video URL to convert
    url: String,

    /// Seconds between captured frames (sent as typed)
    #[arg(short, long, default_value = "5")]
    interval: String,

    /// Converter base URL (overrides CONVERTER_URL)
    #[arg(long)]
    server: Option<String>,

    /// Directory receiving frames.pdf (overrides DOWNLOAD_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long, value_parser = parse_timeout_secs)]
    timeout: Option<std::time::Duration>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frames_pdf_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Some(server) = args.server {
        config.converter_url = server;
    }
    if let Some(dir) = args.output_dir {
        config.download_dir = dir;
    }
    if args.timeout.is_some() {
        config.request_timeout = args.timeout;
    }

    tracing::debug!("Using configuration: {:?}", config);

    let form = ConvertForm::new(args.url, args.interval);
    let mut controller = match create_controller(&config, form) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let ui = controller.submit().await;
    tracing::debug!(
        "Settled: class=\"{}\", button=\"{}\"",
        ui.status.class.class_list(),
        ui.button.class_list()
    );

    match ui.phase() {
        SubmissionPhase::Succeeded => {
            println!("{}", ui.status.text);
            if let Some(path) = controller.last_download() {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", ui.status.text);
            ExitCode::FAILURE
        }
    }
}
