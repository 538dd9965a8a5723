use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONVERTER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub converter_url: String,
    pub download_dir: PathBuf,
    pub request_timeout: Option<Duration>, // None: wait as long as the converter takes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            converter_url: DEFAULT_CONVERTER_URL.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, String>
    where
        L: Fn(&str) -> Option<String>,
    {
        let converter_url = lookup("CONVERTER_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONVERTER_URL.to_string());

        let download_dir = lookup("DOWNLOAD_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR));

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout_secs(&raw)?),
            _ => None,
        };

        Ok(Self {
            converter_url,
            download_dir,
            request_timeout,
        })
    }
}

pub fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(format!(
            "REQUEST_TIMEOUT_SECS must be a positive integer, got {:?}",
            raw
        )),
    }
}
