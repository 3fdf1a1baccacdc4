//! Upvote Item Component

use leptos::prelude::*;

/// One upvote token, rendered as a toggle for its list's selection
#[component]
pub fn UpvoteItem(
    is_selected: bool,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=if is_selected { "upvote-btn selected" } else { "upvote-btn" }
            aria-pressed=if is_selected { "true" } else { "false" }
            on:click=move |_| on_toggle.run(())
        >
            "↑"
        </button>
    }
}
