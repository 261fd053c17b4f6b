//! App Root Component
//!
//! Main application component: global state provider, nav bar, and the
//! named-state view switch between login, register, and dashboard.

use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, LoginPage, RegisterPage};
use crate::state::global::{provide_global_state, AppView, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state (restores any persisted session) to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let view = state.view;

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
            // Navigation header
            <Nav />

            // Active view; plain named-state switching, no history
            <main class="flex-1 container mx-auto px-4 py-8 max-w-5xl">
                {move || match view.get() {
                    AppView::Login => view! { <LoginPage /> }.into_view(),
                    AppView::Register => view! { <RegisterPage /> }.into_view(),
                    AppView::Dashboard => view! { <Dashboard /> }.into_view(),
                }}
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Header navigation bar with brand and session controls
#[component]
fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    let state_for_logout = state.clone();
    let on_logout = move |_| state_for_logout.end_session();

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4 max-w-5xl">
                <div class="flex items-center justify-between h-14">
                    // Logo and brand
                    <div class="flex items-center space-x-2">
                        <span class="text-xl">"🗓️"</span>
                        <span class="text-lg font-bold">"Mood Tracker"</span>
                    </div>

                    // Session controls
                    {move || {
                        session.get().map(|active| {
                            let on_logout = on_logout.clone();
                            view! {
                                <div class="flex items-center space-x-3 text-sm">
                                    {active.user.map(|user| view! {
                                        <span class="text-gray-500">
                                            {user.display_name().to_string()}
                                        </span>
                                    })}
                                    <button
                                        on:click=on_logout
                                        class="px-3 py-1.5 rounded-lg bg-gray-100 \
                                               hover:bg-gray-200 transition-colors"
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            }
                        })
                    }}
                </div>
            </div>
        </nav>
    }
}
