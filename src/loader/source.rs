//! Input source selection.

use super::file::read_json_file;
use super::http::HttpClient;
use crate::utils::error::LoadError;
use log::info;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Where purchase data is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Local JSON file, relative paths resolved against the working directory
    File(PathBuf),
    /// `http://` or `https://` URL returning a JSON array
    Url(String),
}

impl InputSource {
    /// Classify a CLI argument as a URL or a file path
    pub fn parse(input: &str) -> Self {
        if is_http_url(input) {
            InputSource::Url(input.to_string())
        } else {
            InputSource::File(PathBuf::from(input))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load the raw JSON document for a source
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::NotFound` - File does not exist
/// * `LoadError::Io` / `LoadError::RequestFailed` - Transport failure
/// * `LoadError::JsonError` - Body is not valid JSON
pub fn load_records(source: &InputSource) -> Result<Value, LoadError> {
    info!("Loading JSON data from {}", source);

    match source {
        InputSource::File(path) => read_json_file(path),
        InputSource::Url(url) => HttpClient::new()?.fetch_json(url),
    }
}

/// Whether the input looks like an HTTP(S) URL
pub fn is_http_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
