//! Change feed: long-polled per-table notifications.
//!
//! The backend holds an events request open until something changes in the
//! table (or its own poll window lapses) and answers with the events seen
//! since the caller's cursor. Transport failures are logged and retried;
//! they never reach the subscriber.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::client::ContentClient;
use crate::error::FetchError;
use crate::source::OnChange;

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Handle for an open change feed.
///
/// Owned by the collection that created it and released exactly once on
/// teardown; extra [`unsubscribe`](Self::unsubscribe) calls are harmless.
/// Dropping the handle also releases the feed.
#[derive(Debug)]
pub struct ChangeSubscription {
    active: Arc<AtomicBool>,
}

impl ChangeSubscription {
    pub(crate) fn new(active: Arc<AtomicBool>) -> Self {
        Self { active }
    }

    /// A subscription that is already closed, for sources with no live
    /// change feed.
    pub fn inert() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn unsubscribe(&mut self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[derive(Debug, Deserialize)]
struct EventBatch {
    events: Vec<serde_json::Value>,
    cursor: u64,
}

impl ContentClient {
    /// Open a change feed for `table`. `on_change` runs once per delivered
    /// event until the returned subscription is released.
    pub async fn subscribe_changes(
        &self,
        table: &str,
        on_change: OnChange,
    ) -> Result<ChangeSubscription, FetchError> {
        let active = Arc::new(AtomicBool::new(true));
        let feed = ChangeFeed {
            client: self.clone(),
            table: table.to_string(),
            active: active.clone(),
        };
        spawn_local(feed.run(on_change));
        Ok(ChangeSubscription::new(active))
    }
}

struct ChangeFeed {
    client: ContentClient,
    table: String,
    active: Arc<AtomicBool>,
}

impl ChangeFeed {
    async fn run(self, mut on_change: OnChange) {
        let mut cursor = 0u64;
        while self.active.load(Ordering::Relaxed) {
            match self.poll(cursor).await {
                Ok(batch) => {
                    cursor = batch.cursor;
                    if !self.active.load(Ordering::Relaxed) {
                        break;
                    }
                    for _event in &batch.events {
                        on_change();
                    }
                }
                Err(err) => {
                    tracing::warn!(table = %self.table, error = %err, "change feed poll failed, retrying");
                    sleep(RETRY_DELAY).await;
                }
            }
        }
        tracing::debug!(table = %self.table, "change feed released");
    }

    async fn poll(&self, cursor: u64) -> Result<EventBatch, FetchError> {
        let response = self
            .client
            .http()
            .get(self.client.events_url(&self.table, cursor))
            .header("apikey", self.client.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_local<F: std::future::Future<Output = ()> + 'static>(fut: F) {
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_local<F: std::future::Future<Output = ()> + 'static>(fut: F) {
    tokio::task::spawn_local(fut);
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribe_is_idempotent() {
        let active = Arc::new(AtomicBool::new(true));
        let mut sub = ChangeSubscription::new(active.clone());
        assert!(sub.is_active());

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!active.load(Ordering::Relaxed));
    }

    #[test]
    fn drop_releases_the_feed() {
        let active = Arc::new(AtomicBool::new(true));
        {
            let _sub = ChangeSubscription::new(active.clone());
        }
        assert!(!active.load(Ordering::Relaxed));
    }

    #[test]
    fn inert_subscription_is_inactive() {
        assert!(!ChangeSubscription::inert().is_active());
    }
}
