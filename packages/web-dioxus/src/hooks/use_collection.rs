//! Generic resource hook: loading/data/error state for one content domain.

use std::rc::Rc;

use content_client::{Collection, CollectionSource, ResourceState};
use dioxus::prelude::*;

/// Handle returned by [`use_collection`].
///
/// Copyable, so it moves freely into event handlers.
pub struct UseCollection<T: 'static> {
    state: Signal<ResourceState<T>>,
    reload: Callback<()>,
}

impl<T> UseCollection<T> {
    /// Current resource state. Reading it subscribes the component to
    /// updates.
    pub fn state(&self) -> ResourceState<T>
    where
        T: Clone,
    {
        self.state.read().clone()
    }

    /// User-driven re-fetch, the escape hatch some pages surface as a
    /// "Try again" button.
    pub fn reload(&self) {
        self.reload.call(());
    }
}

impl<T> Clone for UseCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UseCollection<T> {}

/// Mount a [`Collection`] for this component.
///
/// The source is built once per mount; the collection fetches immediately,
/// re-fetches on every change notification, and is detached when the
/// component unmounts. A fetch still in flight at unmount resolves into the
/// void: the detached collection discards it.
pub fn use_collection<S>(make_source: impl FnOnce() -> S) -> UseCollection<S::Item>
where
    S: CollectionSource + 'static,
    S::Item: Clone + 'static,
{
    let state = use_signal(ResourceState::<S::Item>::default);

    let collection = use_hook(move || {
        let collection = Rc::new(Collection::new(
            make_source(),
            move |snapshot: &ResourceState<S::Item>| {
                let mut state = state;
                state.set(snapshot.clone());
            },
        ));
        spawn({
            let collection = collection.clone();
            async move { collection.run().await }
        });
        collection
    });

    use_drop({
        let collection = collection.clone();
        move || collection.detach()
    });

    let reload = {
        let collection = collection.clone();
        use_callback(move |()| {
            let collection = collection.clone();
            spawn(async move { collection.refresh().await });
        })
    };

    UseCollection { state, reload }
}
