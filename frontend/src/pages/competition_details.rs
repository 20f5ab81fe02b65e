use shared::{CompetitionDto, Difficulty, PuzzleDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::competitions;
use crate::components::common::spinner::Spinner;
use crate::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct CompetitionDetailsProps {
    pub competition_id: String,
}

/// One competition's puzzle tracks: every puzzle of the theme, grouped by
/// difficulty, each linking to its solving page.
#[function_component(CompetitionDetails)]
pub fn competition_details(props: &CompetitionDetailsProps) -> Html {
    let competition = use_state(|| None::<CompetitionDto>);
    let puzzles = use_state(Vec::<PuzzleDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let competition = competition.clone();
        let puzzles = puzzles.clone();
        let loading = loading.clone();
        let error = error.clone();
        let competition_id = props.competition_id.clone();
        use_effect_with(competition_id, move |competition_id| {
            let competition_id = competition_id.clone();
            spawn_local(async move {
                loading.set(true);
                error.set(None);

                match competitions::fetch_competition_details(&competition_id).await {
                    Ok(details) => competition.set(Some(details)),
                    Err(e) => {
                        error.set(Some(format!("Failed to load competition: {}", e)));
                        loading.set(false);
                        return;
                    }
                }

                match competitions::fetch_competition_puzzles(&competition_id).await {
                    Ok(fetched) => puzzles.set(fetched),
                    Err(e) => error.set(Some(format!("Failed to load puzzles: {}", e))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let track = |difficulty: Difficulty| -> Html {
        let members: Vec<(usize, &PuzzleDto)> = puzzles
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .enumerate()
            .collect();

        html! {
            <div class="mb-8">
                <h2 class="text-lg font-semibold mb-3">{difficulty.label()}</h2>
                if members.is_empty() {
                    <p class="text-sm text-gray-500">{"No puzzles in this track."}</p>
                } else {
                    <div class="grid gap-3 md:grid-cols-3">
                        {members.into_iter().map(|(index, puzzle)| {
                            let route = Route::Puzzle {
                                competition_id: props.competition_id.clone(),
                                difficulty: difficulty.to_string().to_lowercase(),
                                puzzle_index: index as u32,
                            };
                            html! {
                                <Link<Route>
                                    key={puzzle.id.clone()}
                                    to={route}
                                    classes="block p-4 rounded-lg bg-gray-800 border border-gray-700 hover:border-amber-500 transition-colors"
                                >
                                    <span class="text-sm text-gray-400">{format!("#{}", index + 1)}</span>
                                    <p class="font-medium">{&puzzle.name}</p>
                                </Link<Route>>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-5xl mx-auto px-4 py-10">
                if *loading {
                    <Spinner label="Loading competition..." />
                } else if let Some(message) = &*error {
                    <p class="text-red-400">{message}</p>
                } else if let Some(details) = &*competition {
                    <div class="mb-8">
                        <h1 class="text-2xl font-bold">{&details.title}</h1>
                        if !details.description.is_empty() {
                            <p class="mt-2 text-gray-400">{&details.description}</p>
                        }
                        if details.finished {
                            <p class="mt-2 text-sm text-amber-400">
                                {"This competition has finished; answers are no longer accepted."}
                            </p>
                        }
                    </div>
                    {Difficulty::ALL.iter().map(|d| track(*d)).collect::<Html>()}
                }
            </div>
        </div>
    }
}
