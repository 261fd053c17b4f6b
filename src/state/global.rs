//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard owns one
//! shared entry list; the calendar appends to it and the trends view derives
//! aggregates from it.

use leptos::*;

use crate::state::session::Session;

/// Which top-level view is active. Plain named-state switching, no
/// history/back support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Login,
    Register,
    Dashboard,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active top-level view
    pub view: RwSignal<AppView>,
    /// Authenticated session, if any; the single injection point for the
    /// bearer token
    pub session: RwSignal<Option<Session>>,
    /// Shared journal entry list for the authenticated view
    pub entries: RwSignal<Vec<Entry>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One journal entry as served by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Entry {
    #[serde(default)]
    pub id: Option<i64>,
    /// `YYYY-MM-DD` or a full ISO timestamp; day granularity is what matters
    pub date_time: String,
    /// Composite label "primary > secondary > tertiary", or a flat category
    pub emotion: String,
    #[serde(default)]
    pub notes: String,
}

impl Entry {
    /// Calendar-day key (`YYYY-MM-DD`) of this entry. Entries match calendar
    /// cells by day, not exact timestamp.
    pub fn date_key(&self) -> &str {
        self.date_time.get(..10).unwrap_or(&self.date_time)
    }

    /// Primary segment of the emotion label
    pub fn primary_emotion(&self) -> &str {
        self.emotion
            .split(" > ")
            .next()
            .unwrap_or(&self.emotion)
            .trim()
    }
}

/// Provide global state to the component tree, restoring any persisted
/// session so a reload lands on the dashboard.
pub fn provide_global_state() {
    let session = Session::restore();
    let view = if session.is_some() {
        AppView::Dashboard
    } else {
        AppView::Login
    };

    let state = GlobalState {
        view: create_rw_signal(view),
        session: create_rw_signal(session),
        entries: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Current bearer token, if a session is active. Untracked so request
    /// effects do not re-run when the session changes.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Begin an authenticated session and move to the dashboard
    pub fn start_session(&self, session: Session) {
        session.persist();
        self.session.set(Some(session));
        self.view.set(AppView::Dashboard);
    }

    /// End the session (logout or token expiry) and return to login
    pub fn end_session(&self) {
        Session::discard();
        self.session.set(None);
        self.entries.set(Vec::new());
        self.view.set(AppView::Login);
    }

    /// Append a newly saved entry to the shared list
    pub fn add_entry(&self, entry: Entry) {
        self.entries.update(|entries| entries.push(entry));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_date_key_strips_time() {
        let entry = Entry {
            id: Some(1),
            date_time: "2024-01-15T09:30:00".to_string(),
            emotion: "happy > content > calm".to_string(),
            notes: "slow morning".to_string(),
        };
        assert_eq!(entry.date_key(), "2024-01-15");
    }

    #[test]
    fn test_entry_date_key_plain_date() {
        let entry = Entry {
            id: None,
            date_time: "2024-01-15".to_string(),
            emotion: "happy".to_string(),
            notes: String::new(),
        };
        assert_eq!(entry.date_key(), "2024-01-15");
    }

    #[test]
    fn test_primary_emotion_from_composite() {
        let entry = Entry {
            id: None,
            date_time: "2024-01-20".to_string(),
            emotion: "stressed > overwhelmed > tense".to_string(),
            notes: String::new(),
        };
        assert_eq!(entry.primary_emotion(), "stressed");
    }

    #[test]
    fn test_primary_emotion_flat_label() {
        let entry = Entry {
            id: None,
            date_time: "2024-01-20".to_string(),
            emotion: "neutral".to_string(),
            notes: String::new(),
        };
        assert_eq!(entry.primary_emotion(), "neutral");
    }
}
