//! Default Seed State

use crate::models::{UpvoteList, UpvoteState};

/// (is_selected, upvote count) for each seeded list, in order
pub const DEFAULT_LISTS: [(bool, usize); 3] = [(false, 3), (true, 2), (false, 5)];

/// Freshly generated seed lists
pub fn default_lists() -> Vec<UpvoteList> {
    DEFAULT_LISTS
        .iter()
        .map(|&(is_selected, count)| UpvoteList::seeded(is_selected, count))
        .collect()
}

pub fn default_state() -> UpvoteState {
    UpvoteState::new(default_lists())
}
