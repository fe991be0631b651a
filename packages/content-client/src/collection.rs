//! The collection engine: one content domain's loading/data/error state.
//!
//! A [`Collection`] is created fresh for every mounted consumer, fetches the
//! full dataset once on start, re-fetches whenever the change feed delivers a
//! notification, and is detached when the consumer unmounts. Fetch attempts
//! carry a monotonic sequence number: a response that arrives after a newer
//! attempt has been applied, or after detach, is discarded instead of
//! clobbering newer state.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc;
use futures::StreamExt;

use crate::error::FetchError;
use crate::realtime::ChangeSubscription;
use crate::source::{CollectionSource, OnChange};

/// Reactive view of one content domain.
///
/// `items` keeps its last successful value across a failed re-fetch; stale
/// data is preferred over no data. `error` is cleared at the start of every
/// attempt and set only when that attempt fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

struct Inner<T> {
    state: ResourceState<T>,
    /// Sequence number handed to the most recently started attempt.
    started: u64,
    /// Sequence number of the most recently applied attempt.
    applied: u64,
    detached: bool,
    subscription: Option<ChangeSubscription>,
}

/// Controller for one content domain's [`ResourceState`].
///
/// State is owned exclusively by this instance; the consumer observes it
/// through the sink passed to [`new`](Self::new), which fires on every
/// transition until [`detach`](Self::detach).
pub struct Collection<S: CollectionSource> {
    source: S,
    sink: Rc<dyn Fn(&ResourceState<S::Item>)>,
    inner: Rc<RefCell<Inner<S::Item>>>,
}

impl<S: CollectionSource> Collection<S>
where
    S::Item: Clone,
{
    pub fn new(source: S, sink: impl Fn(&ResourceState<S::Item>) + 'static) -> Self {
        Self {
            source,
            sink: Rc::new(sink),
            inner: Rc::new(RefCell::new(Inner {
                state: ResourceState::default(),
                started: 0,
                applied: 0,
                detached: false,
                subscription: None,
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState<S::Item> {
        self.inner.borrow().state.clone()
    }

    /// Run one fetch attempt. The outcome is applied only if no newer attempt
    /// has been applied in the meantime and the collection is still attached.
    pub async fn refresh(&self) {
        let Some(seq) = self.begin() else { return };
        let outcome = self.source.fetch_all().await;
        self.finish(seq, outcome);
    }

    /// Drive the collection: initial fetch, then a re-fetch for every change
    /// notification, until [`detach`](Self::detach).
    ///
    /// Notifications travel through a channel and are handled one at a time,
    /// so a burst queues re-fetches rather than racing them.
    pub async fn run(&self) {
        self.refresh().await;

        let (tx, mut rx) = mpsc::unbounded::<()>();
        let notify: OnChange = Box::new(move || {
            let _ = tx.unbounded_send(());
        });
        match self.source.subscribe_changes(notify).await {
            Ok(mut subscription) => {
                let mut inner = self.inner.borrow_mut();
                if inner.detached {
                    drop(inner);
                    subscription.unsubscribe();
                    return;
                }
                inner.subscription = Some(subscription);
            }
            Err(err) => {
                // The initial dataset stands; the page just won't live-update.
                tracing::warn!(error = %err, "change subscription unavailable");
                return;
            }
        }

        while let Some(()) = rx.next().await {
            if self.inner.borrow().detached {
                break;
            }
            self.refresh().await;
        }
    }

    /// Tear down: later fetch completions are discarded, the sink is never
    /// called again, and the change subscription is released.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.detached = true;
        if let Some(mut subscription) = inner.subscription.take() {
            subscription.unsubscribe();
        }
    }

    fn begin(&self) -> Option<u64> {
        let (seq, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            if inner.detached {
                return None;
            }
            inner.started += 1;
            inner.state.loading = true;
            inner.state.error = None;
            (inner.started, inner.state.clone())
        };
        (self.sink)(&snapshot);
        Some(seq)
    }

    fn finish(&self, seq: u64, outcome: Result<Vec<S::Item>, FetchError>) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            if inner.detached || seq <= inner.applied {
                return;
            }
            inner.applied = seq;
            match outcome {
                Ok(items) => {
                    inner.state.items = items;
                    inner.state.error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "collection fetch failed");
                    inner.state.error = Some(err.to_string());
                }
            }
            // A newer attempt may still be in flight; stay loading until it
            // lands.
            inner.state.loading = inner.started > seq;
            inner.state.clone()
        };
        (self.sink)(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use futures::channel::oneshot;

    enum Step {
        Ready(Result<Vec<u32>, FetchError>),
        Gated(oneshot::Receiver<Result<Vec<u32>, FetchError>>),
    }

    #[derive(Clone, Default)]
    struct MockSource {
        steps: Rc<RefCell<VecDeque<Step>>>,
        subscribe_count: Rc<RefCell<usize>>,
        on_change: Rc<RefCell<Option<OnChange>>>,
        feed_active: Rc<RefCell<Option<Arc<AtomicBool>>>>,
    }

    impl MockSource {
        fn push_ready(&self, outcome: Result<Vec<u32>, FetchError>) {
            self.steps.borrow_mut().push_back(Step::Ready(outcome));
        }

        fn push_gated(&self) -> oneshot::Sender<Result<Vec<u32>, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.steps.borrow_mut().push_back(Step::Gated(rx));
            tx
        }

        fn fire_change(&self) {
            if let Some(on_change) = self.on_change.borrow_mut().as_mut() {
                on_change();
            }
        }

        fn drop_callback(&self) {
            self.on_change.borrow_mut().take();
        }

        fn subscription_active(&self) -> bool {
            self.feed_active
                .borrow()
                .as_ref()
                .map(|flag| flag.load(Ordering::Relaxed))
                .unwrap_or(false)
        }
    }

    #[async_trait(?Send)]
    impl CollectionSource for MockSource {
        type Item = u32;

        async fn fetch_all(&self) -> Result<Vec<u32>, FetchError> {
            let step = self
                .steps
                .borrow_mut()
                .pop_front()
                .expect("unexpected fetch");
            match step {
                Step::Ready(outcome) => outcome,
                Step::Gated(rx) => rx.await.expect("gate dropped"),
            }
        }

        async fn subscribe_changes(
            &self,
            on_change: OnChange,
        ) -> Result<ChangeSubscription, FetchError> {
            *self.subscribe_count.borrow_mut() += 1;
            *self.on_change.borrow_mut() = Some(on_change);
            let active = Arc::new(AtomicBool::new(true));
            *self.feed_active.borrow_mut() = Some(active.clone());
            Ok(ChangeSubscription::new(active))
        }
    }

    fn recording_collection(
        source: MockSource,
    ) -> (Collection<MockSource>, Rc<RefCell<Vec<ResourceState<u32>>>>) {
        let emissions: Rc<RefCell<Vec<ResourceState<u32>>>> = Rc::default();
        let sink = {
            let emissions = emissions.clone();
            move |state: &ResourceState<u32>| emissions.borrow_mut().push(state.clone())
        };
        (Collection::new(source, sink), emissions)
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn successful_fetch_yields_items() {
        let source = MockSource::default();
        source.push_ready(Ok(vec![1, 2]));
        let (collection, emissions) = recording_collection(source);

        collection.refresh().await;

        let state = collection.state();
        assert_eq!(state.items, vec![1, 2]);
        assert!(!state.loading);
        assert_eq!(state.error, None);

        // One loading transition, one ready transition.
        let emissions = emissions.borrow();
        assert_eq!(emissions.len(), 2);
        assert!(emissions[0].loading);
        assert!(!emissions[1].loading);
    }

    #[tokio::test]
    async fn first_load_failure_reports_error_with_empty_items() {
        let source = MockSource::default();
        source.push_ready(Err(FetchError::Status { status: 500 }));
        let (collection, _emissions) = recording_collection(source);

        collection.refresh().await;

        let state = collection.state();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("backend rejected the request (HTTP 500)")
        );
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_items() {
        let source = MockSource::default();
        source.push_ready(Ok(vec![7]));
        source.push_ready(Err(FetchError::Status { status: 502 }));
        let (collection, _emissions) = recording_collection(source);

        collection.refresh().await;
        collection.refresh().await;

        let state = collection.state();
        assert_eq!(state.items, vec![7]);
        assert!(state.error.is_some());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn error_is_cleared_by_the_next_successful_fetch() {
        let source = MockSource::default();
        source.push_ready(Err(FetchError::Status { status: 500 }));
        source.push_ready(Ok(vec![3]));
        let (collection, _emissions) = recording_collection(source);

        collection.refresh().await;
        collection.refresh().await;

        let state = collection.state();
        assert_eq!(state.items, vec![3]);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let source = MockSource::default();
        source.push_ready(Ok(vec![]));
        let (collection, _emissions) = recording_collection(source);

        collection.refresh().await;

        let state = collection.state();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn superseded_attempt_is_discarded() {
        let source = MockSource::default();
        let first_gate = source.push_gated();
        let second_gate = source.push_gated();
        let (collection, _emissions) = recording_collection(source);

        let first = collection.refresh();
        let second = collection.refresh();
        let driver = async {
            tokio::task::yield_now().await;
            // The newer attempt resolves first and wins; the older result
            // must not overwrite it.
            second_gate.send(Ok(vec![2])).unwrap();
            tokio::task::yield_now().await;
            first_gate.send(Ok(vec![1])).unwrap();
        };
        tokio::join!(first, second, driver);

        let state = collection.state();
        assert_eq!(state.items, vec![2]);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn detach_discards_inflight_result_and_silences_the_sink() {
        let source = MockSource::default();
        let gate = source.push_gated();
        let (collection, emissions) = recording_collection(source);

        let fetch = collection.refresh();
        let driver = async {
            tokio::task::yield_now().await;
            collection.detach();
            let emitted_before_release = emissions.borrow().len();
            gate.send(Ok(vec![9])).unwrap();
            emitted_before_release
        };
        let ((), emitted_before_release) = tokio::join!(fetch, driver);

        assert!(collection.state().items.is_empty());
        assert_eq!(emissions.borrow().len(), emitted_before_release);
    }

    #[tokio::test]
    async fn refresh_after_detach_is_a_no_op() {
        let source = MockSource::default();
        let (collection, emissions) = recording_collection(source);

        collection.detach();
        // No step was queued: a fetch here would panic the mock.
        collection.refresh().await;

        assert!(emissions.borrow().is_empty());
    }

    #[tokio::test]
    async fn run_subscribes_once_and_refetches_per_notification() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = MockSource::default();
                source.push_ready(Ok(vec![1]));
                source.push_ready(Ok(vec![1, 2]));
                source.push_ready(Ok(vec![1, 2, 3]));
                let (collection, _emissions) = recording_collection(source.clone());
                let collection = Rc::new(collection);

                let driver = tokio::task::spawn_local({
                    let collection = collection.clone();
                    async move { collection.run().await }
                });
                settle().await;

                assert_eq!(*source.subscribe_count.borrow(), 1);
                assert_eq!(collection.state().items, vec![1]);

                source.fire_change();
                settle().await;
                assert_eq!(collection.state().items, vec![1, 2]);

                source.fire_change();
                settle().await;
                assert_eq!(collection.state().items, vec![1, 2, 3]);

                // Still exactly one subscription, however many notifications.
                assert_eq!(*source.subscribe_count.borrow(), 1);
                assert!(source.subscription_active());

                collection.detach();
                assert!(!source.subscription_active());

                // Closing the feed's callback ends the notification channel
                // and lets run() return.
                source.drop_callback();
                tokio::time::timeout(Duration::from_secs(5), driver)
                    .await
                    .expect("run did not return after detach")
                    .unwrap();
            })
            .await;
    }

    #[tokio::test]
    async fn notifications_after_detach_do_not_refetch() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = MockSource::default();
                source.push_ready(Ok(vec![4]));
                let (collection, _emissions) = recording_collection(source.clone());
                let collection = Rc::new(collection);

                let driver = tokio::task::spawn_local({
                    let collection = collection.clone();
                    async move { collection.run().await }
                });
                settle().await;
                assert_eq!(collection.state().items, vec![4]);

                collection.detach();
                // No step queued: a re-fetch here would panic the mock.
                source.fire_change();
                settle().await;

                assert_eq!(collection.state().items, vec![4]);
                tokio::time::timeout(Duration::from_secs(5), driver)
                    .await
                    .expect("run did not return after detach")
                    .unwrap();
            })
            .await;
    }
}
