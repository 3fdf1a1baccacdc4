//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh identifier for a list or an upvote
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Opaque upvote token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upvote {
    pub id: String,
}

impl Upvote {
    pub fn new() -> Self {
        Self { id: new_id() }
    }
}

/// A list of upvotes.
///
/// `id` is nullable because `CREATE_LIST` accepts an explicit `null` id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpvoteList {
    pub id: Option<String>,
    pub is_selected: bool,
    pub upvotes: Vec<Upvote>,
}

impl UpvoteList {
    /// Create an empty, unselected list
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            is_selected: false,
            upvotes: Vec::new(),
        }
    }

    /// Create a list with `count` freshly generated upvotes
    pub fn seeded(is_selected: bool, count: usize) -> Self {
        Self {
            id: Some(new_id()),
            is_selected,
            upvotes: (0..count).map(|_| Upvote::new()).collect(),
        }
    }

    /// Strict id equality; a missing id on either side never matches
    pub fn matches(&self, list_id: Option<&str>) -> bool {
        match (self.id.as_deref(), list_id) {
            (Some(own), Some(target)) => own == target,
            _ => false,
        }
    }

    /// Id for display purposes
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

/// Whole persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvoteState {
    pub lists: Vec<UpvoteList>,
}

impl UpvoteState {
    pub fn new(lists: Vec<UpvoteList>) -> Self {
        Self { lists }
    }

    /// State with no lists at all
    pub fn empty() -> Self {
        Self::default()
    }
}
