use crate::api::auth;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Interval;
use log::error;
use shared::permissions::{self, Permission};
use shared::UserDto;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Local-storage key for the cached user record.
const USER_STORAGE_KEY: &str = "user";

/// How often the session heartbeat re-validates against the backend.
const HEARTBEAT_INTERVAL_MS: u32 = 300_000;

/// Process-wide session state. Created by [`AuthProvider`] at application
/// start and torn down at logout; consumers read it through [`AuthContext`]
/// instead of ambient globals.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub loading: bool,
    pub error: Option<String>,
    pub heartbeat_active: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Staff members see the staff portal; capability checks are delegated
    /// to the pure predicates in `shared::permissions`.
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().map(permissions::is_staff).unwrap_or(false)
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.user
            .as_ref()
            .map(|user| permissions::has_permission(user, permission))
            .unwrap_or(false)
    }

    pub fn session_expired(&self) -> bool {
        self.error
            .as_ref()
            .map(|e| e.contains("Session expired"))
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess { user: UserDto, session_id: String },
    LoginError(String),
    LogoutStarted,
    LogoutFinished,
    HeartbeatSuccess(UserDto),
    SessionExpired,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess { user, session_id } => {
                if let Err(e) = LocalStorage::set(USER_STORAGE_KEY, &user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                if let Err(e) =
                    LocalStorage::set(crate::api::utils::SESSION_STORAGE_KEY, &session_id)
                {
                    error!("Failed to store session_id in local storage: {}", e);
                }

                Rc::new(Self {
                    user: Some(user),
                    loading: false,
                    error: None,
                    heartbeat_active: true,
                })
            }
            AuthAction::LoginError(message) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(message),
                heartbeat_active: false,
            }),
            AuthAction::LogoutStarted => Rc::new(Self {
                loading: true,
                error: None,
                heartbeat_active: false,
                ..(*self).clone()
            }),
            AuthAction::LogoutFinished => {
                let _ = LocalStorage::delete(USER_STORAGE_KEY);
                let _ = LocalStorage::delete(crate::api::utils::SESSION_STORAGE_KEY);
                Rc::new(Self::default())
            }
            AuthAction::HeartbeatSuccess(user) => {
                // Refresh the cached record in case roles or profile changed.
                if let Err(e) = LocalStorage::set(USER_STORAGE_KEY, &user) {
                    error!("Failed to update user in local storage: {}", e);
                }
                Rc::new(Self {
                    user: Some(user),
                    heartbeat_active: true,
                    ..(*self).clone()
                })
            }
            AuthAction::SessionExpired => {
                let _ = LocalStorage::delete(USER_STORAGE_KEY);
                let _ = LocalStorage::delete(crate::api::utils::SESSION_STORAGE_KEY);
                Rc::new(Self {
                    user: None,
                    loading: false,
                    error: Some("Session expired. Please log in again.".to_string()),
                    heartbeat_active: false,
                })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub refresh: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore the session cached by a previous visit, if any.
    let user: Option<UserDto> = LocalStorage::get(USER_STORAGE_KEY).ok();
    let heartbeat_active = user.is_some();
    let auth = use_reducer_eq(move || AuthState {
        user,
        heartbeat_active,
        ..Default::default()
    });

    // Session heartbeat: re-validate periodically while authenticated, and
    // log out only on an authoritative 401/403.
    {
        let auth = auth.clone();
        use_effect_with(auth.heartbeat_active, move |heartbeat_active| {
            if *heartbeat_active {
                let auth = auth.clone();
                let interval = Interval::new(HEARTBEAT_INTERVAL_MS, move || {
                    let auth = auth.clone();
                    spawn_local(async move {
                        match auth::get_current_user_result().await {
                            auth::SessionCheckResult::Ok(user) => {
                                auth.dispatch(AuthAction::HeartbeatSuccess(user));
                            }
                            auth::SessionCheckResult::SessionExpired => {
                                auth.dispatch(AuthAction::SessionExpired);
                            }
                            auth::SessionCheckResult::Other(reason) => {
                                // Transient failure: keep the session.
                                log::debug!("Heartbeat check inconclusive: {}", reason);
                            }
                        }
                    });
                });

                Box::new(move || {
                    interval.cancel();
                }) as Box<dyn FnOnce()>
            } else {
                Box::new(|| {}) as Box<dyn FnOnce()>
            }
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |(email, password): (String, String)| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);

                match auth::login(&email, &password).await {
                    Ok(response) => {
                        auth::reset_session_check_throttle();
                        auth.dispatch(AuthAction::LoginSuccess {
                            user: response.user,
                            session_id: response.session_id,
                        });
                    }
                    Err(e) => {
                        auth.dispatch(AuthAction::LoginError(e));
                    }
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LogoutStarted);

                if let Err(e) = auth::logout().await {
                    // Local teardown happens regardless; the server session
                    // will expire on its own.
                    error!("Logout request failed: {}", e);
                }
                auth.dispatch(AuthAction::LogoutFinished);
            });
        })
    };

    let refresh = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                match auth::get_current_user().await {
                    Ok(user) => auth.dispatch(AuthAction::HeartbeatSuccess(user)),
                    Err(e) => error!("Failed to refresh user data: {}", e),
                }
            });
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        refresh,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::permissions::OWNER_MASK;
    use shared::RoleDto;

    fn user(roles: Vec<RoleDto>) -> UserDto {
        UserDto {
            id: "user/1".to_string(),
            firstname: "Jo".to_string(),
            lastname: "March".to_string(),
            email: "jo@example.com".to_string(),
            blocked: false,
            last_connected: None,
            roles,
            groups: vec![],
        }
    }

    #[test]
    fn test_default_state_is_logged_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_staff());
        assert!(!state.can(Permission::Users));
        assert!(!state.session_expired());
    }

    #[test]
    fn test_staff_detection_follows_roles() {
        let player = AuthState {
            user: Some(user(vec![])),
            ..Default::default()
        };
        assert!(player.is_authenticated());
        assert!(!player.is_staff());

        let owner = AuthState {
            user: Some(user(vec![RoleDto {
                id: "role/owner".to_string(),
                name: "Owner".to_string(),
                permissions: OWNER_MASK,
                scopes: vec![],
            }])),
            ..Default::default()
        };
        assert!(owner.is_staff());
        assert!(owner.can(Permission::Catalogs));
    }

    #[test]
    fn test_login_error_clears_user() {
        let state = Rc::new(AuthState {
            user: Some(user(vec![])),
            heartbeat_active: true,
            ..Default::default()
        });
        let next = state.reduce(AuthAction::LoginError("bad credentials".to_string()));
        assert_eq!(next.user, None);
        assert!(!next.heartbeat_active);
        assert_eq!(next.error.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn test_session_expiry_is_detectable() {
        let state = AuthState {
            error: Some("Session expired. Please log in again.".to_string()),
            ..Default::default()
        };
        assert!(state.session_expired());
        assert!(!state.is_authenticated());
    }
}
