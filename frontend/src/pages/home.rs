use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let on_browse = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Competitions);
        })
    };

    let on_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-4xl mx-auto px-4 py-20 text-center">
                <h1 class="text-4xl sm:text-5xl font-bold mb-6">
                    <span class="text-amber-500">{"Puzzle"}</span>{"Hive"}
                </h1>
                <p class="text-lg text-gray-300 mb-10">
                    {"Solve puzzles, climb difficulty tracks and compete with your group."}
                </p>
                if auth.state.is_authenticated() {
                    <button
                        onclick={on_browse}
                        class="px-8 py-3 rounded-lg bg-amber-600 hover:bg-amber-500 font-semibold"
                    >
                        {"Browse competitions"}
                    </button>
                } else {
                    <button
                        onclick={on_login}
                        class="px-8 py-3 rounded-lg bg-amber-600 hover:bg-amber-500 font-semibold"
                    >
                        {"Log in to play"}
                    </button>
                }
            </div>
        </div>
    }
}
