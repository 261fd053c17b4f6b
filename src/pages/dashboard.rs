//! Dashboard Page
//!
//! Owner of the shared entry list: fetched once on mount, then passed down
//! to the calendar and trends views as siblings.

use leptos::*;

use crate::api;
use crate::api::ApiError;
use crate::components::{Loading, MoodCalendar, MoodTrends};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let entries = state.entries;
    let loading = state.loading;

    // Fetch the entry list once on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let Some(token) = state.token() else {
                state.end_session();
                return;
            };

            state.loading.set(true);
            match api::fetch_entries(&token).await {
                Ok(list) => {
                    state.entries.set(list);
                }
                Err(ApiError::Unauthorized) => {
                    state.show_error(&ApiError::Unauthorized.to_string());
                    state.end_session();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch journal entries: {:?}", e).into(),
                    );
                    state.show_error(&e.to_string());
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Mood Tracker"</h1>
                <p class="text-gray-500 mt-1">"Your moods at a glance"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-8">
                            // Calendar section
                            <MoodCalendar entries=entries />

                            // Trends section
                            <MoodTrends entries=entries />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
