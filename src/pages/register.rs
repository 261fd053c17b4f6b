//! Register Page
//!
//! Creates an account, then hands the user to the login view.

use leptos::*;

use crate::api;
use crate::state::global::{AppView, GlobalState};

/// Registration form page
#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let name = username.get();
        let mail = email.get();
        let pass = password.get();

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::register(&name, &mail, &pass).await {
                Ok(response) => {
                    state.show_success(&format!(
                        "Welcome, {}! Please log in.",
                        response.user.display_name()
                    ));
                    state.view.set(AppView::Login);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Registration failed: {:?}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let go_login = move |_| state.view.set(AppView::Login);

    view! {
        <div class="max-w-md mx-auto bg-white rounded-xl shadow-lg p-6 mt-8">
            <h2 class="text-2xl font-bold mb-6">"Register"</h2>

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
                    <label class="block text-sm text-gray-600 mb-1">"Username"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
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
                    {move || if loading.get() { "Loading..." } else { "Register" }}
                </button>
            </form>

            <p class="text-sm text-gray-500 mt-4">
                "Already registered? "
                <button on:click=go_login class="text-blue-600 hover:underline">
                    "Login"
                </button>
            </p>
        </div>
    }
}
