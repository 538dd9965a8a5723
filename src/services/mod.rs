pub mod convert_client;
pub mod download;

pub use convert_client::HttpConvertClient;
pub use download::FileDownloader;
