//! Loading raw purchase data from a local file or an HTTP endpoint.

pub mod file;
pub mod http;
pub mod source;

pub use file::read_json_file;
pub use http::HttpClient;
pub use source::{is_http_url, load_records, InputSource};
