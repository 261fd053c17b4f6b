//! Calendar Component
//!
//! Month grid with per-day mood markers. Clicking a day toggles the inline
//! entry editor; saving appends to the shared entry list.

use leptos::*;

use crate::components::entry_editor::EntryEditor;
use crate::state::calendar::{toggle_day, MonthView};
use crate::state::global::Entry;

/// Marker colors keyed by primary emotion
pub fn mood_color(primary: &str) -> &'static str {
    match primary.to_lowercase().as_str() {
        "joy" | "happy" => "#FFD700",
        "sadness" | "sad" => "#1E90FF",
        "anger" | "stressed" => "#FF4500",
        "fear" | "anxious" => "#B39DDB",
        "love" => "#FF8A80",
        "calm" => "#98FB98",
        "neutral" => "#B0C4DE",
        _ => "#D3D3D3",
    }
}

/// Month calendar over the shared entry list
#[component]
pub fn MoodCalendar(
    /// Shared entry list owned by the dashboard
    entries: RwSignal<Vec<Entry>>,
) -> impl IntoView {
    let (month, set_month) = create_signal(MonthView::current());
    // At most one expanded day at a time
    let (expanded, set_expanded) = create_signal(None::<u32>);

    let go_prev = move |_| {
        set_month.update(|m| *m = m.prev());
        set_expanded.set(None);
    };
    let go_next = move |_| {
        set_month.update(|m| *m = m.next());
        set_expanded.set(None);
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            // Header with month navigation
            <div class="flex items-center justify-between mb-4">
                <button
                    on:click=go_prev
                    class="px-3 py-1 rounded-lg bg-gray-100 hover:bg-gray-200 text-lg transition-colors"
                >
                    "‹"
                </button>
                <h2 class="text-xl font-semibold">{move || month.get().label()}</h2>
                <button
                    on:click=go_next
                    class="px-3 py-1 rounded-lg bg-gray-100 hover:bg-gray-200 text-lg transition-colors"
                >
                    "›"
                </button>
            </div>

            // Weekday header row
            <div class="grid grid-cols-7 gap-1 text-center text-xs text-gray-500 mb-2">
                <div>"Sun"</div>
                <div>"Mon"</div>
                <div>"Tue"</div>
                <div>"Wed"</div>
                <div>"Thu"</div>
                <div>"Fri"</div>
                <div>"Sat"</div>
            </div>

            // Day grid: leading blanks align day 1 with its weekday
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    let current = month.get();

                    let blanks = (0..current.leading_blanks())
                        .map(|_| view! { <div class="h-14" /> })
                        .collect_view();

                    let days = (1..=current.day_count())
                        .map(|day| {
                            view! {
                                <DayCell
                                    day=day
                                    date_key=current.date_key(day)
                                    entries=entries
                                    expanded=expanded
                                    set_expanded=set_expanded
                                />
                            }
                        })
                        .collect_view();

                    (blanks, days)
                }}
            </div>

            // Inline editor for the expanded day
            {move || {
                expanded.get().map(|day| {
                    let date_key = month.get().date_key(day);
                    view! {
                        <EntryEditor
                            date_key=date_key
                            on_saved=Callback::new(move |entry: Entry| {
                                entries.update(|list| list.push(entry));
                                set_expanded.set(None);
                            })
                            on_close=Callback::new(move |_| set_expanded.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

/// One day cell, marked when an entry exists for that calendar day
#[component]
fn DayCell(
    day: u32,
    date_key: String,
    entries: RwSignal<Vec<Entry>>,
    expanded: ReadSignal<Option<u32>>,
    set_expanded: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let key_for_match = date_key.clone();
    // Match by calendar-day equality, not exact timestamp
    let day_entry = create_memo(move |_| {
        entries.with(|list| {
            list.iter()
                .find(|entry| entry.date_key() == key_for_match)
                .cloned()
        })
    });

    let is_expanded = create_memo(move |_| expanded.get() == Some(day));

    // Clicking the already-expanded day collapses it
    let on_click = move |_| set_expanded.update(|current| *current = toggle_day(*current, day));

    view! {
        <div
            on:click=on_click
            class=move || {
                let base = "h-14 rounded-lg border cursor-pointer select-none text-center pt-1 \
                            transition-colors hover:bg-gray-100";
                if is_expanded.get() {
                    format!("{} border-blue-400 bg-blue-50", base)
                } else {
                    format!("{} border-gray-200", base)
                }
            }
            title=move || {
                day_entry
                    .get()
                    .map(|entry| format!("{}\n{}", entry.emotion, entry.notes))
                    .unwrap_or_else(|| "Click to log your mood".to_string())
            }
        >
            <div class="text-sm">{day}</div>
            {move || {
                day_entry.get().map(|entry| {
                    let color = mood_color(entry.primary_emotion());
                    view! {
                        <div
                            class="w-2.5 h-2.5 rounded-full mx-auto mt-1"
                            style=format!("background-color: {}", color)
                        />
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_color_known_and_default() {
        assert_eq!(mood_color("Joy"), "#FFD700");
        assert_eq!(mood_color("happy"), "#FFD700");
        assert_eq!(mood_color("Sadness"), "#1E90FF");
        assert_eq!(mood_color("uncatalogued"), "#D3D3D3");
    }
}
