use shared::ScopeDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::scopes;
use crate::components::common::spinner::Spinner;

#[function_component(ScopesPanel)]
pub fn scopes_panel() -> Html {
    let scopes = use_state(Vec::<ScopeDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let scopes = scopes.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match scopes::fetch_scopes().await {
                    Ok(fetched) => scopes.set(fetched),
                    Err(e) => error.set(Some(format!("Failed to load scopes: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            if *loading {
                <Spinner label="Loading scopes..." />
            } else if let Some(message) = &*error {
                <p class="text-red-400">{message}</p>
            } else if scopes.is_empty() {
                <p class="text-gray-400">{"No scopes defined yet."}</p>
            } else {
                <div class="grid gap-4 md:grid-cols-2">
                    {scopes.iter().map(|scope| {
                        html! {
                            <div key={scope.id.clone()} class="p-4 rounded-lg bg-gray-800 border border-gray-700">
                                <h3 class="font-semibold">{&scope.name}</h3>
                                if !scope.description.is_empty() {
                                    <p class="text-sm text-gray-400">{&scope.description}</p>
                                }
                                <div class="mt-2">
                                    {scope.catalogs.iter().map(|catalog| html! {
                                        <span class="inline-block px-2 py-0.5 mr-1 mb-1 rounded bg-gray-700 text-gray-200 text-xs">
                                            {&catalog.name}
                                        </span>
                                    }).collect::<Html>()}
                                </div>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
