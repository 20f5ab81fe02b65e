use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthContext, AuthProvider};
use crate::components::common::toast::{Toast, ToastContext, ToastProvider, ToastType};
use crate::components::nav::Nav;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages {
    pub mod account;
    pub mod competition_details;
    pub mod competitions;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod puzzle;
    pub mod staff_portal;
}

use pages::{
    account::Account, competition_details::CompetitionDetails, competitions::Competitions,
    home::Home, login::Login, not_found::NotFound, puzzle::PuzzlePage, staff_portal::StaffPortal,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/competitions")]
    Competitions,
    #[at("/competition/:competition_id")]
    CompetitionDetails { competition_id: String },
    #[at("/competition/:competition_id/:difficulty/:puzzle_index")]
    Puzzle {
        competition_id: String,
        difficulty: String,
        puzzle_index: u32,
    },
    #[at("/account")]
    Account,
    #[at("/staff")]
    StaffPortal,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <div class="app-container">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    let is_authenticated = auth.state.is_authenticated();
    let session_expired = auth.state.session_expired();

    // Surface session expiry once, as a toast
    {
        let toast_context = toast_context.clone();
        use_effect_with(session_expired, move |expired| {
            if *expired {
                let toast = Toast::new(
                    "Your session has expired. Please log in again.".to_string(),
                    ToastType::Warning,
                )
                .with_duration(8000);
                toast_context.add_toast.emit(toast);
            }
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(
            (is_authenticated, session_expired),
            move |(is_auth, expired)| {
                if !*is_auth || *expired {
                    navigator.push(&Route::Login);
                }
                || ()
            },
        );
    }

    if is_authenticated && !session_expired {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Competitions => html! {
            <ProtectedRoute>
                <Competitions />
            </ProtectedRoute>
        },
        Route::CompetitionDetails { competition_id } => html! {
            <ProtectedRoute>
                <CompetitionDetails competition_id={competition_id} />
            </ProtectedRoute>
        },
        Route::Puzzle {
            competition_id,
            difficulty,
            puzzle_index,
        } => html! {
            <ProtectedRoute>
                <PuzzlePage
                    competition_id={competition_id}
                    difficulty={difficulty}
                    puzzle_index={puzzle_index}
                />
            </ProtectedRoute>
        },
        Route::Account => html! {
            <ProtectedRoute>
                <Account />
            </ProtectedRoute>
        },
        Route::StaffPortal => html! {
            <ProtectedRoute>
                <StaffPortal />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging and the panic hook before anything renders.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Initializing application");

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
