//! The remote progress API: wire types and the blocking HTTP client.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClientConfig, HttpProgressRemote};
pub use protocol::{ProgressResponse, ProgressUpload};
