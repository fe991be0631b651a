//! Process-wide client handle.

use std::sync::OnceLock;

use crate::client::ContentClient;
use crate::error::FetchError;

static CLIENT: OnceLock<ContentClient> = OnceLock::new();

/// Connection settings for the hosted content backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Initialise the process-wide client. Call once at startup, before any
/// component mounts. A second call is ignored.
pub fn init(config: ClientConfig) {
    CLIENT.set(ContentClient::new(config)).ok();
}

/// The process-wide client configured by [`init`].
pub fn shared() -> Result<&'static ContentClient, FetchError> {
    CLIENT.get().ok_or(FetchError::NotConfigured)
}
