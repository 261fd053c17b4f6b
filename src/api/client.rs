//! HTTP API Client
//!
//! Functions for communicating with the mood journal REST API. The server
//! owns authentication and persistence; this client only issues requests
//! and maps failures into [`ApiError`] so the UI can tell a rejected
//! request apart from a connection that never got a response.

use gloo_net::http::Request;

use crate::state::global::Entry;
use crate::state::session::User;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("mood_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// How a request failed, from the UI's point of view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No response received at all (connection refused, DNS, offline)
    Network(String),
    /// Server responded 401; the token is missing or expired
    Unauthorized,
    /// Server responded with an error status; carries the `detail` field
    /// of the body when present, else a generic message
    Server(String),
    /// Response arrived but the body did not match the expected shape
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(_) => {
                write!(f, "Network error, please check your connection.")
            }
            ApiError::Unauthorized => write!(f, "Your session has expired, please log in again."),
            // Server `detail` messages are shown verbatim
            ApiError::Server(detail) => write!(f, "{}", detail),
            ApiError::Parse(_) => write!(f, "Unexpected response from the server."),
        }
    }
}

/// Error body the API may attach to a failed request
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Map a non-2xx response to an [`ApiError`], reading the `detail` field
/// when the server sent one.
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    if response.status() == 401 {
        return ApiError::Unauthorized;
    }
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => None,
    };
    ApiError::Server(detail.unwrap_or_else(|| "An error occurred, please try again.".to_string()))
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
pub struct RegisterResponse {
    pub user: User,
}

// ============ API Functions ============

/// Log in with form-encoded credentials, as the token endpoint expects
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let api_base = get_api_base();
    let body = format!(
        "username={}&password={}",
        urlencode(username),
        urlencode(password)
    );

    let response = Request::post(&format!("{}/login/", api_base))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Register a new account
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct RegisterRequest<'a> {
        username: &'a str,
        email: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register/", api_base))
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the ordered entry list for the authenticated user
pub async fn fetch_entries(token: &str) -> Result<Vec<Entry>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/entries/", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the primary emotion categories
pub async fn fetch_primary_emotions() -> Result<Vec<String>, ApiError> {
    fetch_categories(&format!("{}/primary_emotions/", get_api_base())).await
}

/// Fetch the secondary categories under a primary emotion
pub async fn fetch_secondary_emotions(primary: &str) -> Result<Vec<String>, ApiError> {
    fetch_categories(&format!(
        "{}/secondary_emotions/{}",
        get_api_base(),
        urlencode(primary)
    ))
    .await
}

/// Fetch the tertiary categories under a secondary emotion
pub async fn fetch_tertiary_emotions(secondary: &str) -> Result<Vec<String>, ApiError> {
    fetch_categories(&format!(
        "{}/tertiary_emotions/{}",
        get_api_base(),
        urlencode(secondary)
    ))
    .await
}

async fn fetch_categories(url: &str) -> Result<Vec<String>, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Submit a new journal entry; returns the created entry as stored
pub async fn add_entry(
    token: &str,
    date_time: &str,
    emotion: &str,
    notes: &str,
) -> Result<Entry, ApiError> {
    #[derive(serde::Serialize)]
    struct AddEntryRequest<'a> {
        date_time: &'a str,
        emotion: &'a str,
        notes: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/add_entry/", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&AddEntryRequest {
            date_time,
            emotion,
            notes,
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Percent-encode a string for form bodies and path segments
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_passthrough() {
        assert_eq!(urlencode("Joy"), "Joy");
        assert_eq!(urlencode("self-assurance_1.0~x"), "self-assurance_1.0~x");
    }

    #[test]
    fn test_urlencode_reserved_chars() {
        assert_eq!(urlencode("a b"), "a%20b");
        assert_eq!(urlencode("user@example.com"), "user%40example.com");
        assert_eq!(urlencode("p&q=r"), "p%26q%3Dr");
    }

    #[test]
    fn test_server_detail_displayed_verbatim() {
        let err = ApiError::Server("invalid credentials".to_string());
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_network_error_is_generic_and_distinct() {
        let network = ApiError::Network("connection refused".to_string());
        let server = ApiError::Server("invalid credentials".to_string());
        assert_eq!(
            network.to_string(),
            "Network error, please check your connection."
        );
        assert_ne!(network.to_string(), server.to_string());
    }
}
