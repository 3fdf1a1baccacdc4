//! UI Components
//!
//! Leptos components for the upvote lists.

mod empty_state;
mod header;
mod upvote_item;
mod upvote_list;

pub use empty_state::EmptyState;
pub use header::Header;
pub use upvote_item::UpvoteItem;
pub use upvote_list::UpvoteListView;
