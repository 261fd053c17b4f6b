//! Session Persistence
//!
//! The bearer token issued at login is kept in browser local storage under a
//! fixed key so the session survives reloads. Components never read storage
//! directly; they go through the session held in [`GlobalState`].
//!
//! [`GlobalState`]: crate::state::global::GlobalState

/// Local storage key for the access token
pub const TOKEN_KEY: &str = "access_token";

/// Minimal user identity returned by the auth endpoints
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

impl User {
    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// An authenticated session: the bearer token plus who it belongs to
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user: Some(user),
        }
    }

    /// Restore a session from local storage, if a token was persisted.
    /// The user identity is not persisted, only the token.
    pub fn restore() -> Option<Self> {
        load_token().map(|token| Self { token, user: None })
    }

    /// Persist the token so the session survives a reload
    pub fn persist(&self) {
        store_token(&self.token);
    }

    /// Drop the persisted token (logout or expiry)
    pub fn discard() {
        clear_token();
    }
}

/// Read the persisted token from local storage
pub fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

/// Write the token to local storage
pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Remove the token from local storage
pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        let user = User {
            username: "sam".to_string(),
            email: "sam@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "sam");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            username: String::new(),
            email: "sam@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "sam@example.com");
    }
}
