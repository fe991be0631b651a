//! The capability set a frontend hook consumes for one content domain.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::ContentClient;
use crate::error::FetchError;
use crate::realtime::ChangeSubscription;

/// Callback invoked by a change feed when the underlying dataset may have
/// changed.
pub type OnChange = Box<dyn FnMut() + 'static>;

/// Fetch-and-subscribe capability for one content domain.
///
/// Implemented by [`TableSource`] for backend tables and by the frontend's
/// blog aggregator for the external publishing feeds.
#[async_trait(?Send)]
pub trait CollectionSource {
    type Item;

    /// Fetch the full dataset. Incremental deltas are not part of the
    /// contract; every fetch replaces the previous items wholesale.
    async fn fetch_all(&self) -> Result<Vec<Self::Item>, FetchError>;

    /// Subscribe to change notifications for the dataset.
    async fn subscribe_changes(&self, on_change: OnChange)
        -> Result<ChangeSubscription, FetchError>;
}

/// A backend table exposed as a [`CollectionSource`].
pub struct TableSource<T> {
    client: Option<ContentClient>,
    table: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TableSource<T> {
    pub fn new(client: ContentClient, table: &'static str) -> Self {
        Self {
            client: Some(client),
            table,
            _marker: PhantomData,
        }
    }

    /// A source over the process-wide client configured by [`crate::init`].
    ///
    /// The client is resolved per call; before `init` every fetch yields
    /// [`FetchError::NotConfigured`], which surfaces as an ordinary error
    /// state (and therefore the fallback dataset) rather than a crash.
    pub fn shared(table: &'static str) -> Self {
        Self {
            client: None,
            table,
            _marker: PhantomData,
        }
    }

    fn client(&self) -> Result<ContentClient, FetchError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => Ok(crate::config::shared()?.clone()),
        }
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned + 'static> CollectionSource for TableSource<T> {
    type Item = T;

    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        self.client()?.fetch_rows(self.table).await
    }

    async fn subscribe_changes(
        &self,
        on_change: OnChange,
    ) -> Result<ChangeSubscription, FetchError> {
        self.client()?.subscribe_changes(self.table, on_change).await
    }
}
