//! Application Context
//!
//! Shares the upvote store with components via the Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use reactive_stores::Store;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::debounce::{BrowserTimers, TimerHost};
use crate::models::UpvoteList;
use crate::store::{BrowserStorage, KeyValueStorage, MemoryStorage, UpvoteAction, UpvoteStore};

type AppUpvoteStore<H> = UpvoteStore<Box<dyn KeyValueStorage>, H>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("use_upvotes must be used within an UpvoteContext provider")]
    MissingProvider,
}

/// Reactive mirror of the store, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UpvoteView {
    /// Every list, in insertion order
    pub lists: Vec<UpvoteList>,
    /// Live search term bound to the search box
    pub search: String,
    /// Lists matching the debounced search term
    pub filtered_lists: Vec<UpvoteList>,
}

/// Handle to the upvote store provided via context
pub struct UpvoteContext<H: TimerHost + 'static = BrowserTimers> {
    core: StoredValue<AppUpvoteStore<H>, LocalStorage>,
    view: Store<UpvoteView>,
}

impl<H: TimerHost + 'static> Clone for UpvoteContext<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: TimerHost + 'static> Copy for UpvoteContext<H> {}

impl UpvoteContext {
    /// Open the store over `localStorage` and provide it to all children.
    /// Call once, from the root component.
    pub fn provide(config: StoreConfig) -> Self {
        let storage: Box<dyn KeyValueStorage> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(err) => {
                log::warn!("{}, changes will not survive a reload", err);
                Box::new(MemoryStorage::new())
            }
        };
        Self::provide_with(config, storage, BrowserTimers)
    }
}

impl<H> UpvoteContext<H>
where
    H: TimerHost + 'static,
    H::Handle: 'static,
{
    /// Open the store over `storage` and provide it to all children
    pub fn provide_with(config: StoreConfig, storage: Box<dyn KeyValueStorage>, timers: H) -> Self {
        let core = UpvoteStore::open(config, storage, timers);
        let view = Store::new(UpvoteView {
            lists: core.lists().to_vec(),
            search: core.search().to_string(),
            filtered_lists: core.filtered_lists(),
        });

        let ctx = Self {
            core: StoredValue::new_local(core),
            view,
        };
        ctx.core.update_value(|core| {
            core.on_search_settled(move |term| {
                log::debug!("search settled on {:?}", term);
                ctx.sync_lists();
            })
        });
        on_cleanup(move || {
            ctx.core.try_update_value(|core| core.cancel_search());
        });

        provide_context(ctx);
        ctx
    }

    pub fn search(&self) -> String {
        self.view.search().get()
    }

    pub fn filtered_lists(&self) -> Vec<UpvoteList> {
        self.view.filtered_lists().get()
    }

    /// Apply any action
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn dispatch(&self, action: UpvoteAction) {
        self.core.update_value(|core| core.dispatch(action));
        self.sync_lists();
    }

    pub fn toggle_list(&self, list_id: &str) {
        self.core.update_value(|core| core.toggle_list(list_id));
        self.sync_lists();
    }

    pub fn add_upvote(&self, list_id: &str) {
        self.core.update_value(|core| core.add_upvote(list_id));
        self.sync_lists();
    }

    /// Create a list and return its generated id. `None` once the store is disposed.
    pub fn create_list(&self) -> Option<String> {
        let list_id = self.core.try_update_value(|core| core.create_list());
        self.sync_lists();
        list_id
    }

    pub fn reset_all(&self) {
        self.core.update_value(|core| core.reset_all());
        self.sync_lists();
    }

    pub fn set_search(&self, term: String) {
        self.core.update_value(|core| core.set_search(term.clone()));
        *self.view.search().write() = term;
    }

    fn sync_lists(&self) {
        let Some((lists, filtered)) = self
            .core
            .try_with_value(|core| (core.lists().to_vec(), core.filtered_lists()))
        else {
            return;
        };
        *self.view.lists().write() = lists;
        *self.view.filtered_lists().write() = filtered;
    }
}

/// Get the upvote context, or a typed error outside the provider
pub fn try_use_upvotes() -> Result<UpvoteContext, ContextError> {
    use_context::<UpvoteContext>().ok_or(ContextError::MissingProvider)
}

/// Get the upvote context. Panics outside the provider.
pub fn use_upvotes() -> UpvoteContext {
    match try_use_upvotes() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{}", err),
    }
}
