//! Trends Component
//!
//! Derived view over the shared entry list: groups entries by primary
//! emotion and renders a bar chart, a donut chart, and per-category summary
//! cards using HTML5 Canvas. No network calls of its own.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::Entry;

/// Chart colors cycled across primary emotions
const MOOD_COLORS: [&str; 5] = [
    "#FF8A80", // Red
    "#82B1FF", // Blue
    "#B39DDB", // Purple
    "#FFCC80", // Orange
    "#A5D6A7", // Green
];

/// Count entries per primary emotion, in first-seen order
pub fn mood_counts(entries: &[Entry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for entry in entries {
        let primary = entry.primary_emotion().to_string();
        match counts.iter_mut().find(|(name, _)| *name == primary) {
            Some((_, count)) => *count += 1,
            None => counts.push((primary, 1)),
        }
    }

    counts
}

/// Trend charts and summary over the shared entry list
#[component]
pub fn MoodTrends(
    /// Shared entry list owned by the dashboard
    entries: RwSignal<Vec<Entry>>,
) -> impl IntoView {
    let bar_ref = create_node_ref::<html::Canvas>();
    let pie_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the entry list changes
    create_effect(move |_| {
        let counts = entries.with(|list| mood_counts(list));

        if let Some(canvas) = bar_ref.get() {
            draw_bar_chart(&canvas, &counts);
        }
        if let Some(canvas) = pie_ref.get() {
            draw_pie_chart(&canvas, &counts);
        }
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            // Mood distribution bar chart
            <div class="bg-white rounded-xl shadow-lg p-6">
                <h3 class="text-lg font-semibold mb-4 text-gray-800">"Mood Distribution"</h3>
                <canvas
                    node_ref=bar_ref
                    width="400"
                    height="260"
                    class="w-full h-64 rounded-lg"
                />
            </div>

            // Mood overview donut chart
            <div class="bg-white rounded-xl shadow-lg p-6">
                <h3 class="text-lg font-semibold mb-4 text-gray-800">"Mood Overview"</h3>
                <canvas
                    node_ref=pie_ref
                    width="400"
                    height="260"
                    class="w-full h-64 rounded-lg"
                />
            </div>

            // Per-category summary cards
            <div class="bg-white rounded-xl shadow-lg p-6 md:col-span-2">
                <h3 class="text-lg font-semibold mb-4 text-gray-800">"Summary"</h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || {
                        let counts = entries.with(|list| mood_counts(list));
                        if counts.is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm col-span-full">
                                    "No entries yet. Pick a day on the calendar to get started."
                                </p>
                            }.into_view()
                        } else {
                            counts.into_iter().enumerate().map(|(idx, (mood, count))| {
                                let color = MOOD_COLORS[idx % MOOD_COLORS.len()];
                                view! {
                                    <div
                                        class="p-4 rounded-lg"
                                        style=format!("background-color: {}15", color)
                                    >
                                        <h4 class="font-medium text-gray-700 capitalize">{mood}</h4>
                                        <p
                                            class="text-2xl font-bold"
                                            style=format!("color: {}", color)
                                        >
                                            {count}
                                        </p>
                                        <p class="text-sm text-gray-600">"entries"</p>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw per-emotion counts as a bar chart
fn draw_bar_chart(canvas: &HtmlCanvasElement, counts: &[(String, usize)]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 36.0;
    let margin_right = 12.0;
    let margin_top = 12.0;
    let margin_bottom = 28.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if counts.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(1) as f64;

    // Horizontal grid lines with count labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_count - (i as f64 / 4.0) * max_count;
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 6.0, y + 4.0);
    }

    // Bars with category labels beneath
    let slot = chart_width / counts.len() as f64;
    let bar_width = (slot * 0.6).min(48.0);

    for (idx, (name, count)) in counts.iter().enumerate() {
        let color = MOOD_COLORS[idx % MOOD_COLORS.len()];
        let bar_height = (*count as f64 / max_count) * chart_height;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#4b5563".into());
        ctx.set_font("11px sans-serif");
        let label_x = margin_left + idx as f64 * slot + slot / 2.0 - name.len() as f64 * 2.5;
        let _ = ctx.fill_text(name, label_x, height - 10.0);
    }
}

/// Draw per-emotion counts as a donut chart
fn draw_pie_chart(canvas: &HtmlCanvasElement, counts: &[(String, usize)]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if counts.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0 - 20.0).max(10.0);

    let mut start_angle = -std::f64::consts::FRAC_PI_2;
    for (idx, (_, count)) in counts.iter().enumerate() {
        let sweep = *count as f64 / total as f64 * std::f64::consts::PI * 2.0;
        let color = MOOD_COLORS[idx % MOOD_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, start_angle + sweep);
        ctx.close_path();
        ctx.fill();

        start_angle += sweep;
    }

    // Punch out the center for the donut look
    ctx.set_fill_style(&"#ffffff".into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    ctx.set_fill_style(&"#4b5563".into());
    ctx.set_font("bold 16px sans-serif");
    let _ = ctx.fill_text(&format!("{}", total), cx - 8.0, cy + 5.0);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("No entries yet", width / 2.0 - 45.0, height / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, emotion: &str) -> Entry {
        Entry {
            id: None,
            date_time: date.to_string(),
            emotion: emotion.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_mood_counts_groups_by_primary() {
        let entries = vec![
            entry("2024-01-15", "happy > content > calm"),
            entry("2024-01-20", "stressed > overwhelmed > tense"),
        ];

        let counts = mood_counts(&entries);
        assert_eq!(
            counts,
            vec![("happy".to_string(), 1), ("stressed".to_string(), 1)]
        );
    }

    #[test]
    fn test_mood_counts_accumulates_and_keeps_order() {
        let entries = vec![
            entry("2024-01-01", "Joy > Happiness > Pleasure"),
            entry("2024-01-02", "Fear > Anxiety > Worry"),
            entry("2024-01-03", "Joy > Contentment > Peace"),
        ];

        let counts = mood_counts(&entries);
        assert_eq!(
            counts,
            vec![("Joy".to_string(), 2), ("Fear".to_string(), 1)]
        );
    }

    #[test]
    fn test_mood_counts_empty() {
        assert!(mood_counts(&[]).is_empty());
    }
}
