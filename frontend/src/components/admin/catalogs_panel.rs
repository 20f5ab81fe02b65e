use shared::CatalogDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::catalogs;
use crate::components::common::spinner::Spinner;

#[function_component(CatalogsPanel)]
pub fn catalogs_panel() -> Html {
    let catalogs = use_state(Vec::<CatalogDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let catalogs = catalogs.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match catalogs::fetch_catalogs().await {
                    Ok(fetched) => catalogs.set(fetched),
                    Err(e) => error.set(Some(format!("Failed to load catalogs: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            if *loading {
                <Spinner label="Loading catalogs..." />
            } else if let Some(message) = &*error {
                <p class="text-red-400">{message}</p>
            } else if catalogs.is_empty() {
                <p class="text-gray-400">{"No catalogs registered."}</p>
            } else {
                <div class="grid gap-4 md:grid-cols-2">
                    {catalogs.iter().map(|catalog| {
                        html! {
                            <div key={catalog.id.clone()} class="p-4 rounded-lg bg-gray-800 border border-gray-700">
                                <h3 class="font-semibold">{&catalog.name}</h3>
                                <p class="text-xs text-gray-500 font-mono">{&catalog.address}</p>
                                if !catalog.description.is_empty() {
                                    <p class="mt-1 text-sm text-gray-400">{&catalog.description}</p>
                                }
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
