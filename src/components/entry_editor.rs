//! Entry Editor Component
//!
//! Inline editor for one calendar day: a three-tier emotion drill-down plus
//! a free-text note. Tier options are fetched lazily from the API as the
//! user narrows down; picking a tertiary emotion submits the entry.

use leptos::*;

use crate::api;
use crate::api::ApiError;
use crate::components::loading::Loading;
use crate::state::drilldown::{can_submit, clip_note, Stage, MAX_NOTE_LEN};
use crate::state::global::{Entry, GlobalState};

/// Inline entry editor for a single day
#[component]
pub fn EntryEditor(
    /// `YYYY-MM-DD` of the day being edited
    date_key: String,
    /// Invoked with the created entry after a successful save
    #[prop(into)]
    on_saved: Callback<Entry>,
    /// Invoked when the user dismisses the editor
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let stage = create_rw_signal(Stage::Primary);
    let options = create_rw_signal(Vec::<String>::new());
    let fetching = create_rw_signal(false);
    let (note, set_note) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Load primary categories on open
    let state_for_mount = state.clone();
    create_effect(move |_| {
        load_options(
            state_for_mount.clone(),
            stage,
            options,
            fetching,
            Stage::Primary,
        );
    });

    // Advance one tier and fetch its children
    let state_for_choose = state.clone();
    let choose = move |choice: String| {
        let next = stage.get_untracked().select(&choice);
        stage.set(next.clone());
        load_options(state_for_choose.clone(), stage, options, fetching, next);
    };

    // Step back up one tier
    let state_for_back = state.clone();
    let go_back = move |_| {
        let previous = stage.get_untracked().back();
        stage.set(previous.clone());
        load_options(state_for_back.clone(), stage, options, fetching, previous);
    };

    // Compose the label and submit the entry
    let state_for_submit = state.clone();
    let date_key_for_submit = date_key.clone();
    let submit = move |tertiary: String| {
        let current = stage.get_untracked();
        let note_text = note.get_untracked();
        if !can_submit(&current, &note_text) {
            return;
        }
        let Some(emotion) = current.compose(&tertiary) else {
            return;
        };
        let Some(token) = state_for_submit.token() else {
            state_for_submit.end_session();
            return;
        };

        set_submitting.set(true);

        let state = state_for_submit.clone();
        let date_time = format!("{}T00:00:00", date_key_for_submit);
        spawn_local(async move {
            match api::add_entry(&token, &date_time, &emotion, note_text.trim()).await {
                Ok(entry) => {
                    state.show_success("Entry saved");
                    on_saved.call(entry);
                }
                Err(ApiError::Unauthorized) => {
                    state.show_error(&ApiError::Unauthorized.to_string());
                    state.end_session();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to save entry: {:?}", e).into(),
                    );
                    // Selection state is kept so the user can retry
                    state.show_error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="mt-4 border border-gray-200 rounded-xl p-4 bg-gray-50">
            // Header: day being edited, breadcrumb, close control
            <div class="flex items-center justify-between mb-3">
                <div>
                    <h3 class="font-semibold">{date_key.clone()}</h3>
                    {move || {
                        stage.get().breadcrumb().map(|path| view! {
                            <p class="text-sm text-gray-500">{path}</p>
                        })
                    }}
                </div>
                <button
                    on:click=move |_| on_close.call(())
                    class="text-gray-400 hover:text-gray-700 text-lg"
                >
                    "×"
                </button>
            </div>

            // Tier prompt
            <p class="text-sm text-gray-600 mb-2">
                {move || match stage.get() {
                    Stage::Primary => "How are you feeling?",
                    Stage::Secondary { .. } => "More specifically?",
                    Stage::Tertiary { .. } => "Pick the closest word to save your entry",
                }}
            </p>

            // Category options for the current tier
            {move || {
                if fetching.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let at_tertiary = matches!(stage.get(), Stage::Tertiary { .. });
                    let note_empty = note.get().trim().is_empty();
                    let choose = choose.clone();
                    let submit = submit.clone();

                    view! {
                        <div class="flex flex-wrap gap-2">
                            {options.get().into_iter().map(|option| {
                                let choose = choose.clone();
                                let submit = submit.clone();
                                let label = option.clone();
                                // Tertiary options stay disabled until a note is written
                                let disabled = at_tertiary && (note_empty || submitting.get());

                                view! {
                                    <button
                                        disabled=disabled
                                        title=if at_tertiary && note_empty { "Add a note first" } else { "" }
                                        on:click=move |_| {
                                            if at_tertiary {
                                                submit(option.clone());
                                            } else {
                                                choose(option.clone());
                                            }
                                        }
                                        class="px-3 py-2 rounded-lg text-sm font-medium transition-colors \
                                               bg-white border border-gray-300 hover:border-blue-400 \
                                               hover:bg-blue-50 disabled:opacity-50 disabled:cursor-not-allowed"
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            // Back control for the deeper tiers
            {move || {
                if stage.get() != Stage::Primary {
                    let go_back = go_back.clone();
                    view! {
                        <button
                            on:click=go_back
                            class="mt-3 text-sm text-blue-600 hover:underline"
                        >
                            "‹ Back"
                        </button>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Note field, clipped to the maximum length as typed
            <div class="mt-4">
                <label class="block text-sm text-gray-600 mb-1">"Journal note"</label>
                <textarea
                    placeholder="What happened today?"
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(clip_note(&event_target_value(&ev)))
                    class="w-full bg-white rounded-lg px-3 py-2 text-sm border border-gray-300 \
                           focus:border-blue-400 focus:outline-none"
                    rows="3"
                />
                <div class="text-xs text-gray-400 text-right">
                    {move || format!("{}/{}", note.get().chars().count(), MAX_NOTE_LEN)}
                </div>
            </div>

            {move || {
                if submitting.get() {
                    view! { <p class="text-sm text-gray-500">"Saving..."</p> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Fetch the category list for `target` and apply it only if that stage is
/// still current. A later selection supersedes an in-flight fetch, so stale
/// responses are dropped instead of clobbering the newer tier.
fn load_options(
    state: GlobalState,
    stage: RwSignal<Stage>,
    options: RwSignal<Vec<String>>,
    fetching: RwSignal<bool>,
    target: Stage,
) {
    spawn_local(async move {
        fetching.set(true);
        options.set(Vec::new());

        let result = match &target {
            Stage::Primary => api::fetch_primary_emotions().await,
            Stage::Secondary { primary } => api::fetch_secondary_emotions(primary).await,
            Stage::Tertiary { secondary, .. } => api::fetch_tertiary_emotions(secondary).await,
        };

        if stage.get_untracked() != target {
            return;
        }

        match result {
            Ok(categories) => options.set(categories),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to fetch emotion categories: {:?}", e).into(),
                );
                state.show_error(&e.to_string());
            }
        }
        fetching.set(false);
    });
}
