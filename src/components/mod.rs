//! UI Components
//!
//! Reusable Leptos components for the mood journal.

pub mod calendar;
pub mod entry_editor;
pub mod loading;
pub mod toast;
pub mod trends;

pub use calendar::MoodCalendar;
pub use entry_editor::EntryEditor;
pub use loading::Loading;
pub use toast::Toast;
pub use trends::MoodTrends;
