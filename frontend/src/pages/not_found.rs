use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-950 text-white flex flex-col items-center justify-center">
            <h1 class="text-5xl font-bold text-amber-500 mb-4">{"404"}</h1>
            <p class="text-gray-300 mb-8">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="px-6 py-2 rounded-md bg-amber-600 hover:bg-amber-500">
                {"Back home"}
            </Link<Route>>
        </div>
    }
}
