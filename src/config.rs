//! Application Configuration
//!
//! Constants and tunables for the upvote store.

/// Local storage key holding the serialized state
pub const STORAGE_KEY: &str = "upvote-lists";

/// Delay before the search term is applied to the list filter
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Store configuration
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Key the state is persisted under
    pub storage_key: String,
    /// Search debounce delay in milliseconds
    pub search_debounce_ms: u32,
    /// Maximum level forwarded to the browser console
    pub log_level: log::LevelFilter,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl StoreConfig {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Source repository linked from the header
pub const SOURCE_URL: &str = "https://github.com/m7ez1n/scrawlr-challenge";
