//! List Filtering

use crate::models::UpvoteList;

/// Case-insensitive substring search on list ids, order preserved.
/// An empty term keeps every list.
pub fn filter_lists(lists: &[UpvoteList], term: &str) -> Vec<UpvoteList> {
    if term.is_empty() {
        return lists.to_vec();
    }
    let needle = term.to_lowercase();
    lists
        .iter()
        .filter(|list| {
            list.id
                .as_deref()
                .is_some_and(|id| id.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
