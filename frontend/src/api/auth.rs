use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, stored_session_id};
use gloo_net::http::Request;
use js_sys::Date;
use log::debug;
use shared::{ErrorResponse, LoginRequest, LoginResponse, UserDto};
use std::sync::atomic::{AtomicU64, Ordering};

/// Result of checking the current session: success, session expired (401/403),
/// or some other failure (network, 5xx) that must NOT log the user out.
#[derive(Debug)]
pub enum SessionCheckResult {
    Ok(UserDto),
    SessionExpired,
    Other(String),
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    debug!("Attempting login for user: {}", email);

    let login_request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&login_request)
        .map_err(|e| format!("Failed to serialize login request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send login request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Login failed: HTTP {}", response.status()));
        return Err(error);
    }

    let login_response = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse login response: {}", e))?;

    debug!("Login successful for user: {}", login_response.user.email);
    Ok(login_response)
}

pub async fn logout() -> Result<(), String> {
    debug!("Attempting logout");

    if stored_session_id().is_none() {
        // Nothing to invalidate server-side.
        return Ok(());
    }

    let response = authenticated_post(&api_url("/api/auth/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send logout request: {}", e))?;

    if !response.ok() {
        let error = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error occurred".to_string());
        return Err(format!("Logout failed: {}", error));
    }

    debug!("Logout successful");
    Ok(())
}

/// Min ms between any session check (stops request spam from any caller).
const SESSION_CHECK_THROTTLE_MS: u64 = 60_000;
static LAST_SESSION_CHECK_MS: AtomicU64 = AtomicU64::new(0);

/// Reset session-check throttle. Call after login so the next check runs.
pub fn reset_session_check_throttle() {
    LAST_SESSION_CHECK_MS.store(0, Ordering::Relaxed);
}

/// Check the current session. Used by the heartbeat: only `SessionExpired`
/// should trigger a logout. Throttled globally to at most one request per
/// SESSION_CHECK_THROTTLE_MS.
pub async fn get_current_user_result() -> SessionCheckResult {
    let now_ms = Date::now() as u64;
    let last = LAST_SESSION_CHECK_MS.load(Ordering::Relaxed);
    if last != 0 && now_ms.saturating_sub(last) < SESSION_CHECK_THROTTLE_MS {
        return SessionCheckResult::Other("throttled".to_string());
    }
    LAST_SESSION_CHECK_MS.store(now_ms, Ordering::Relaxed);

    debug!("Fetching current user");

    let response = match authenticated_get(&api_url("/api/users/me")).send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("Session check request failed (network): {}", e);
            return SessionCheckResult::Other(format!("Connection error: {}", e));
        }
    };

    if response.status() == 401 || response.status() == 403 {
        return SessionCheckResult::SessionExpired;
    }

    if !response.ok() {
        let msg = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return SessionCheckResult::Other(msg);
    }

    match response.json::<UserDto>().await {
        Ok(user) => {
            debug!("Successfully fetched current user: {}", user.email);
            SessionCheckResult::Ok(user)
        }
        Err(e) => SessionCheckResult::Other(format!("Invalid response: {}", e)),
    }
}

pub async fn get_current_user() -> Result<UserDto, String> {
    match get_current_user_result().await {
        SessionCheckResult::Ok(user) => Ok(user),
        SessionCheckResult::SessionExpired => Err("Session expired".to_string()),
        SessionCheckResult::Other(reason) => Err(reason),
    }
}

#[cfg(test)]
mod tests {
    use shared::{LoginRequest, LoginResponse, UserDto};
    use validator::Validate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn create_test_login_request() -> LoginRequest {
        LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    fn create_test_user() -> UserDto {
        UserDto {
            id: "user/1".to_string(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            email: "test@example.com".to_string(),
            blocked: false,
            last_connected: None,
            roles: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn test_login_request_validation() {
        assert!(create_test_login_request().validate().is_ok());
    }

    #[test]
    fn test_login_request_serialization() {
        let request = create_test_login_request();
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LoginRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.email, deserialized.email);
        assert_eq!(request.password, deserialized.password);
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            user: create_test_user(),
            session_id: "session_123".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.user.id, deserialized.user.id);
        assert_eq!(response.session_id, deserialized.session_id);
    }

    #[test]
    fn test_user_without_roles_is_player() {
        let user = create_test_user();
        assert!(!shared::is_staff(&user));
    }
}
