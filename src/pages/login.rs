//! Login Page
//!
//! Collects credentials, exchanges them for a token, and starts the
//! authenticated session.

use leptos::*;

use crate::api;
use crate::state::global::{AppView, GlobalState};
use crate::state::session::Session;

/// Login form page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let username = email.get();
        let pass = password.get();

        let state = state_for_submit.clone();
        spawn_local(async move {
            // The token endpoint treats the email as the username field
            match api::login(&username, &pass).await {
                Ok(response) => {
                    state.show_success(&format!("Welcome, {}!", response.user.display_name()));
                    state.start_session(Session::new(response.access_token, response.user));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Login failed: {:?}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let go_register = move |_| state.view.set(AppView::Register);

    view! {
        <div class="max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 mt-8">
            <h2 class="text-2xl font-bold mb-6">"Login"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full rounded-lg px-3 py-2 border border-gray-300 \
                               focus:border-blue-400 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-1">"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full rounded-lg px-3 py-2 border border-gray-300 \
                               focus:border-blue-400 focus:outline-none"
                    />
                </div>

                // Server detail or connectivity message
                {move || {
                    error.get().map(|msg| view! {
                        <p class="text-red-600 text-sm">{msg}</p>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 \
                           disabled:cursor-not-allowed text-white rounded-lg py-2.5 \
                           font-semibold transition-colors"
                >
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <p class="text-sm text-gray-500 mt-4">
                "No account yet? "
                <button on:click=go_register class="text-blue-600 hover:underline">
                    "Register"
                </button>
            </p>
        </div>
    }
}
