use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

fn nav_link(current: &Route, target: Route, label: &str) -> Html {
    let active = *current == target;
    html! {
        <Link<Route>
            to={target}
            classes={classes!(
                "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                "transition-colors", "duration-200",
                if active {
                    classes!("bg-white/20", "text-white")
                } else {
                    classes!("text-amber-100", "hover:bg-white/10", "hover:text-white")
                }
            )}
        >
            {label}
        </Link<Route>>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_logout_click = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-40", "bg-gradient-to-r", "from-gray-900", "to-gray-800",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-6")}>
                        <Link<Route> to={Route::Home} classes={classes!("flex", "items-baseline")}>
                            <span class={classes!("text-xl", "font-semibold")}>
                                <span class={classes!("text-amber-500")}>{"Puzzle"}</span>
                                <span>{"Hive"}</span>
                            </span>
                        </Link<Route>>

                        <div class={classes!("hidden", "md:flex", "space-x-2")}>
                            if auth.state.is_authenticated() {
                                {nav_link(&current_route, Route::Competitions, "Competitions")}
                                {nav_link(&current_route, Route::Account, "Account")}
                            }
                            if auth.state.is_staff() {
                                {nav_link(&current_route, Route::StaffPortal, "Staff portal")}
                            }
                        </div>
                    </div>

                    <div class={classes!("flex", "items-center", "space-x-3")}>
                        if let Some(user) = &auth.state.user {
                            <span class={classes!("hidden", "sm:block", "text-sm", "text-amber-100")}>
                                {format!("Welcome, {}", user.firstname)}
                            </span>
                            <button
                                onclick={on_logout_click}
                                class={classes!(
                                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                    "bg-white/10", "hover:bg-white/20", "transition-colors"
                                )}
                            >
                                {"Log out"}
                            </button>
                        } else {
                            {nav_link(&current_route, Route::Login, "Log in")}
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
