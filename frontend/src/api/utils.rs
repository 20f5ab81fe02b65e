use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};

/// Local-storage key holding the bearer token for the current session.
pub const SESSION_STORAGE_KEY: &str = "session_id";

/// Current session id, if any. Absent means the user is not logged in and
/// requests go out unauthenticated.
pub fn stored_session_id() -> Option<String> {
    LocalStorage::get::<String>(SESSION_STORAGE_KEY).ok()
}

fn attach_session(mut req: RequestBuilder) -> RequestBuilder {
    if let Some(session_id) = stored_session_id() {
        req = req.header("Authorization", &format!("Bearer {}", session_id));
    }
    req
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> RequestBuilder {
    attach_session(Request::get(url))
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> RequestBuilder {
    attach_session(Request::post(url))
}

/// Creates a PUT request with authentication
pub fn authenticated_put(url: &str) -> RequestBuilder {
    attach_session(Request::put(url))
}

/// Creates a DELETE request with authentication
pub fn authenticated_delete(url: &str) -> RequestBuilder {
    attach_session(Request::delete(url))
}
