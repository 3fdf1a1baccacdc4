//! Empty State Component
//!
//! Placeholder card shown when there is nothing to list.

use leptos::prelude::*;

/// Dashed placeholder with a title, a description and up to three icons.
///
/// Three icons are fanned out; otherwise only the first one is shown.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] icons: Vec<&'static str>,
) -> impl IntoView {
    let icons_view = if icons.len() == 3 {
        icons
            .into_iter()
            .zip(["left", "center", "right"])
            .map(|(icon, position)| {
                view! { <div class=format!("empty-state-icon {}", position)>{icon}</div> }
            })
            .collect_view()
            .into_any()
    } else {
        let icon = icons.first().copied().unwrap_or_default();
        view! { <div class="empty-state-icon">{icon}</div> }.into_any()
    };

    view! {
        <div class="empty-state">
            <div class="empty-state-icons">{icons_view}</div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>
        </div>
    }
}
