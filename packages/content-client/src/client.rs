//! HTTP client for the backend's table API.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Client for the backend's table API. Cheap to clone; all clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ContentClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.config.api_key
    }

    fn rows_url(&self, table: &str) -> String {
        format!(
            "{}/api/v1/tables/{}/rows",
            self.config.base_url.trim_end_matches('/'),
            table
        )
    }

    pub(crate) fn events_url(&self, table: &str, cursor: u64) -> String {
        format!(
            "{}/api/v1/tables/{}/events?cursor={}",
            self.config.base_url.trim_end_matches('/'),
            table,
            cursor
        )
    }

    /// Fetch every row of `table`, decoded as `T`.
    pub async fn fetch_rows<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, FetchError> {
        let response = self
            .http
            .get(self.rows_url(table))
            .header("apikey", self.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(table, %status, %body, "table fetch rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let rows = serde_json::from_str(&body)?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentClient {
        ContentClient::new(ClientConfig {
            base_url: "https://content.mwangiwekesa.co.ke/".to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[test]
    fn rows_url_strips_trailing_slash() {
        assert_eq!(
            client().rows_url("services"),
            "https://content.mwangiwekesa.co.ke/api/v1/tables/services/rows"
        );
    }

    #[test]
    fn events_url_carries_cursor() {
        assert_eq!(
            client().events_url("team_members", 42),
            "https://content.mwangiwekesa.co.ke/api/v1/tables/team_members/events?cursor=42"
        );
    }
}
