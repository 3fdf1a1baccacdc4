//! Header Component
//!
//! Title bar with the list search box.

use leptos::prelude::*;

use crate::config::SOURCE_URL;
use crate::context::use_upvotes;

/// Page header; the search box is bound to the store's live search term
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_upvotes();

    view! {
        <header class="app-header">
            <div class="container header-row">
                <span class="logo">"Upvotes"</span>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Search list by id"
                    prop:value=move || ctx.search()
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />

                <a
                    href=SOURCE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-outline btn-icon"
                    title="Source"
                >
                    "🔗"
                </a>
            </div>
        </header>
    }
}
