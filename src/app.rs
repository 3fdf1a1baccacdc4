//! Upvote Lists App
//!
//! Root component: provides the store and lays out header and list.

use leptos::prelude::*;

use crate::components::{Header, UpvoteListView};
use crate::config::StoreConfig;
use crate::context::UpvoteContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    UpvoteContext::provide(StoreConfig::default());

    view! {
        <Header />

        <main class="container main-content">
            <UpvoteListView />
        </main>
    }
}
