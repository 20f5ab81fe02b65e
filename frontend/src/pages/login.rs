use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    // Redirect home if already authenticated
    {
        let navigator = navigator.clone();
        let auth_state = auth.state.clone();
        use_effect_with((), move |_| {
            if auth_state.is_authenticated() {
                debug!("User already authenticated, redirecting home");
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                error.set("Please enter both email and password".to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());
            auth.login.emit((email, password));
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    // Mirror auth-context progress into the local form state
    {
        let loading = loading.clone();
        let error = error.clone();
        let auth_state = auth.state.clone();
        use_effect_with(auth_state, move |state| {
            loading.set(state.loading);
            if let Some(err) = &state.error {
                error.set(err.clone());
            }
            || ()
        });
    }

    // Leave the form once the session exists
    {
        let auth_state = auth.state.clone();
        let navigator = navigator.clone();
        use_effect_with(auth_state.user.clone(), move |user| {
            if user.is_some() {
                debug!("Login successful, redirecting home");
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-950 py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-white">
                        <span class="text-amber-500">{"Puzzle"}</span>{"Hive"}
                    </h2>
                    <p class="mt-2 text-gray-400">{"Sign in to your account"}</p>
                </div>
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div class="space-y-3">
                        <div>
                            <label for="email" class="sr-only">{"Email address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                class="block w-full px-3 py-2 rounded-md bg-gray-900 border border-gray-700 text-white placeholder-gray-500 focus:outline-none focus:border-amber-500"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required=true
                                class="block w-full px-3 py-2 rounded-md bg-gray-900 border border-gray-700 text-white placeholder-gray-500 focus:outline-none focus:border-amber-500"
                                placeholder="Password"
                                onchange={onpasswordchange}
                            />
                        </div>
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-400 text-sm text-center">
                            {error.to_string()}
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full flex justify-center py-2 px-4 rounded-md text-white bg-amber-600 hover:bg-amber-500 font-medium disabled:opacity-50"
                    >
                        if *loading {
                            {"Signing in..."}
                        } else {
                            {"Sign in"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
