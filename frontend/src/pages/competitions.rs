use shared::CompetitionDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::competitions;
use crate::components::common::spinner::Spinner;
use crate::Route;

/// Competitions the current user can enter, as cards linking to their
/// puzzle tracks.
#[function_component(Competitions)]
pub fn competitions() -> Html {
    let competitions = use_state(Vec::<CompetitionDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    {
        let competitions = competitions.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match competitions::fetch_user_competitions().await {
                    Ok(fetched) => {
                        // Staged competitions stay hidden from players.
                        competitions.set(fetched.into_iter().filter(|c| c.show).collect());
                    }
                    Err(e) => error.set(Some(format!("Failed to load competitions: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-5xl mx-auto px-4 py-10">
                <h1 class="text-2xl font-bold mb-6">{"Your competitions"}</h1>

                if *loading {
                    <Spinner label="Loading competitions..." />
                } else if let Some(message) = &*error {
                    <p class="text-red-400">{message}</p>
                } else if competitions.is_empty() {
                    <p class="text-gray-400">
                        {"No competitions are open to your groups right now."}
                    </p>
                } else {
                    <div class="grid gap-4 md:grid-cols-2">
                        {competitions.iter().map(|competition| {
                            let competition_id = competition.id.clone();
                            let navigator = navigator.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                navigator.push(&Route::CompetitionDetails {
                                    competition_id: competition_id.clone(),
                                });
                            });
                            html! {
                                <div
                                    key={competition.id.clone()}
                                    onclick={onclick}
                                    class="p-5 rounded-lg bg-gray-800 border border-gray-700 hover:border-amber-500 cursor-pointer transition-colors"
                                >
                                    <div class="flex items-center justify-between">
                                        <h2 class="text-lg font-semibold">{&competition.title}</h2>
                                        if competition.finished {
                                            <span class="px-2 py-0.5 rounded bg-gray-700 text-xs text-gray-300">
                                                {"Finished"}
                                            </span>
                                        }
                                    </div>
                                    if !competition.description.is_empty() {
                                        <p class="mt-2 text-sm text-gray-400">{&competition.description}</p>
                                    }
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            </div>
        </div>
    }
}
