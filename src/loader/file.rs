//! Local JSON file reader.

use crate::utils::error::LoadError;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Read and decode a JSON file
///
/// **Public** - relative paths resolve against the current working directory
///
/// # Errors
/// * `LoadError::NotFound` - Path does not exist
/// * `LoadError::Io` - Any other read failure
/// * `LoadError::JsonError` - Content is not valid JSON
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();

    debug!("Reading purchase file: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
        _ => LoadError::Io(e),
    })?;

    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
