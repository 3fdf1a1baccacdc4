//! Upvote Store
//!
//! Owns the list state, applies actions through the reducer, persists after
//! every action and derives the filtered view from a debounced search term.

mod defaults;
mod filter;
mod reducer;
mod storage;

pub use filter::filter_lists;
pub use reducer::{reduce, UpvoteAction};
pub use storage::{load_state, save_state, BrowserStorage, KeyValueStorage, MemoryStorage};

use crate::config::StoreConfig;
use crate::debounce::{Debouncer, TimerHost};
use crate::models::{new_id, UpvoteList, UpvoteState};

/// State transition function applied on every dispatch
pub type Reducer = fn(UpvoteState, UpvoteAction) -> UpvoteState;

/// State container for the upvote lists
pub struct UpvoteStore<S: KeyValueStorage, H: TimerHost> {
    config: StoreConfig,
    storage: S,
    reducer: Reducer,
    state: UpvoteState,
    search: Debouncer<String, H>,
}

impl<S: KeyValueStorage, H: TimerHost> UpvoteStore<S, H> {
    /// Load the persisted state, write it back and start with an empty search.
    ///
    /// Writing back keeps a freshly seeded default stable across reloads and
    /// replaces unreadable data with the repaired state.
    pub fn open(config: StoreConfig, storage: S, timers: H) -> Self {
        let state = load_state(&storage, &config.storage_key);
        log::info!("loaded {} lists from `{}`", state.lists.len(), config.storage_key);
        let search = Debouncer::new(String::new(), config.search_debounce_ms, timers);
        let store = Self {
            config,
            storage,
            reducer: reduce,
            state,
            search,
        };
        store.persist();
        store
    }

    /// Replace [`reduce`] with another transition function
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_reducer(mut self, reducer: Reducer) -> Self {
        self.reducer = reducer;
        self
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> &UpvoteState {
        &self.state
    }

    pub fn lists(&self) -> &[UpvoteList] {
        &self.state.lists
    }

    /// Live search term, as typed
    pub fn search(&self) -> &str {
        self.search.input()
    }

    /// Search term the filter currently uses
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn debounced_search(&self) -> String {
        self.search.value()
    }

    pub fn filtered_lists(&self) -> Vec<UpvoteList> {
        filter_lists(&self.state.lists, &self.search.value())
    }

    /// Reduce, then persist. A failed write is logged and the new state kept.
    pub fn dispatch(&mut self, action: UpvoteAction) {
        log::debug!("dispatch {}", action.kind());
        let state = std::mem::take(&mut self.state);
        self.state = (self.reducer)(state, action);
        self.persist();
    }

    pub fn toggle_list(&mut self, list_id: &str) {
        self.dispatch(UpvoteAction::toggle_list(list_id));
    }

    pub fn add_upvote(&mut self, list_id: &str) {
        self.dispatch(UpvoteAction::add_upvote(list_id));
    }

    /// Append a list with a generated id and return that id
    pub fn create_list(&mut self) -> String {
        let list_id = new_id();
        self.dispatch(UpvoteAction::create_list_with_id(Some(list_id.clone())));
        list_id
    }

    pub fn reset_all(&mut self) {
        self.dispatch(UpvoteAction::ResetAll);
    }

    /// Update the live term; the filter follows after the debounce delay
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.set(term.into());
    }

    /// Called with the new term each time the debounced search settles
    pub fn on_search_settled(&mut self, listener: impl Fn(&str) + 'static) {
        self.search.on_settle(move |term: &String| listener(term));
    }

    /// Drop any pending search update
    pub fn cancel_search(&mut self) {
        self.search.cancel();
    }

    fn persist(&self) {
        if let Err(err) = save_state(&self.storage, &self.config.storage_key, &self.state) {
            log::error!("Failed to save upvote state: {}", err);
        }
    }
}
