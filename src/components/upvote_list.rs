//! Upvote List Component
//!
//! Card listing every list that matches the current search.

use leptos::prelude::*;

use crate::components::{EmptyState, UpvoteItem};
use crate::context::use_upvotes;
use crate::models::UpvoteList;

/// All filtered lists, or an empty state when nothing matches
#[component]
pub fn UpvoteListView() -> impl IntoView {
    let ctx = use_upvotes();

    let add_list = move |_| {
        if let Some(list_id) = ctx.create_list() {
            log::info!("created list {}", list_id);
        }
    };
    let reset_all = move |_| ctx.reset_all();

    move || {
        let lists = ctx.filtered_lists();
        if lists.is_empty() {
            return view! {
                <EmptyState
                    title="No lists found"
                    description="Try adjusting your search or filter to find what you're looking for."
                    icons=vec!["🔍", "📋", "➕"]
                />
            }
            .into_any();
        }

        view! {
            <section class="card upvote-card">
                <div class="card-header">
                    <h2 class="card-title">"Upvotes list"</h2>
                    <div class="card-actions">
                        <button class="btn btn-default btn-sm" aria-label="Add list" on:click=add_list>
                            "Add list"
                        </button>
                        <button class="btn btn-destructive btn-icon" aria-label="Reset all lists" on:click=reset_all>
                            "⟲"
                        </button>
                    </div>
                </div>

                <div class="card-content">
                    {lists.into_iter().map(|list| view! { <ListSection list=list /> }).collect_view()}
                </div>
            </section>
        }
        .into_any()
    }
}

/// One list: id, quantity, its upvotes and the add button
#[component]
fn ListSection(list: UpvoteList) -> impl IntoView {
    let ctx = use_upvotes();

    let display_id = list.display_id().to_string();
    let count = list.upvotes.len();
    let is_selected = list.is_selected;
    // a null id matches nothing, not even another null id
    let toggle_id = list.id.clone();
    let add_id = list.id.clone();

    let on_toggle = Callback::new(move |_: ()| {
        if let Some(id) = toggle_id.as_deref() {
            ctx.toggle_list(id);
        }
    });
    let on_add = move |_| {
        if let Some(id) = add_id.as_deref() {
            ctx.add_upvote(id);
        }
    };

    let upvotes = if list.upvotes.is_empty() {
        view! {
            <div class="upvotes-empty">
                <span class="hint">"No upvotes yet"</span>
                <span class="separator">"|"</span>
                <span class="hint muted">"Click + to add one"</span>
            </div>
        }
        .into_any()
    } else {
        list.upvotes
            .iter()
            .map(|_| view! { <UpvoteItem is_selected=is_selected on_toggle=on_toggle /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="list-section">
            <div class="list-meta">
                <p class="card-description">"List with id: " <span class="bold">{display_id}</span></p>
                <p class="card-description small">"Quantity: " <span class="bold">{count}</span></p>
            </div>

            <div class="list-row">
                <div class=if is_selected { "upvotes selected" } else { "upvotes" }>{upvotes}</div>
                <button class="btn btn-outline btn-icon" aria-label="Add upvote" on:click=on_add>
                    "+"
                </button>
            </div>
        </div>
    }
}
