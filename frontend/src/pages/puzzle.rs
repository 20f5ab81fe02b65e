use std::str::FromStr;

use shared::{CompetitionDto, Difficulty, PuzzleDto, TryDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::competitions;
use crate::components::common::spinner::Spinner;
use crate::components::puzzle::answer_input::AnswerInput;

#[derive(Properties, Clone, PartialEq)]
pub struct PuzzlePageProps {
    pub competition_id: String,
    /// Difficulty track, as the lowercase route segment.
    pub difficulty: String,
    pub puzzle_index: u32,
}

fn step_solved(tries: &[TryDto], step: u8) -> bool {
    tries.iter().any(|t| t.step == step && t.is_solved())
}

fn attempts_for_step(tries: &[TryDto], step: u8) -> u32 {
    tries
        .iter()
        .filter(|t| t.step == step)
        .map(|t| t.attempts)
        .sum()
}

/// The puzzle-solving screen: the user's input data, attempt history and
/// one answer widget for the step currently being solved. A correct
/// answer signals a refresh, which refetches tries and advances the
/// active step.
#[function_component(PuzzlePage)]
pub fn puzzle_page(props: &PuzzlePageProps) -> Html {
    let difficulty = match Difficulty::from_str(&props.difficulty) {
        Ok(difficulty) => difficulty,
        Err(_) => {
            return html! {
                <div class="min-h-screen bg-gray-950 text-white flex items-center justify-center">
                    <p class="text-red-400">{"Unknown difficulty track."}</p>
                </div>
            }
        }
    };

    let competition = use_state(|| None::<CompetitionDto>);
    let puzzle = use_state(|| None::<PuzzleDto>);
    let input_lines = use_state(Vec::<String>::new);
    let tries = use_state(Vec::<TryDto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Bumped by the answer widget after a correct answer; every bump
    // refetches the puzzle state.
    let refresh_counter = use_state(|| 0u32);

    {
        let competition = competition.clone();
        let puzzle = puzzle.clone();
        let input_lines = input_lines.clone();
        let tries = tries.clone();
        let loading = loading.clone();
        let error = error.clone();
        let competition_id = props.competition_id.clone();
        let puzzle_index = props.puzzle_index;

        use_effect_with(
            (competition_id, puzzle_index, *refresh_counter),
            move |(competition_id, puzzle_index, _)| {
                let competition_id = competition_id.clone();
                let puzzle_index = *puzzle_index;
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

                    let found = match competitions::fetch_competition_puzzles(&competition_id).await
                    {
                        Ok(all) => all
                            .into_iter()
                            .filter(|p| p.difficulty == difficulty)
                            .nth(puzzle_index as usize),
                        Err(e) => {
                            error.set(Some(format!("Failed to load puzzles: {}", e)));
                            loading.set(false);
                            return;
                        }
                    };

                    let Some(found) = found else {
                        error.set(Some("Puzzle not found in this track".to_string()));
                        loading.set(false);
                        return;
                    };

                    match competitions::fetch_puzzle_input(
                        &competition_id,
                        difficulty,
                        &found.id,
                        puzzle_index,
                    )
                    .await
                    {
                        Ok(response) => input_lines.set(response.input_lines),
                        Err(e) => {
                            error.set(Some(format!("Failed to load puzzle input: {}", e)));
                            loading.set(false);
                            return;
                        }
                    }

                    match competitions::fetch_puzzle_tries(&competition_id, &found.id, puzzle_index)
                        .await
                    {
                        Ok(fetched) => tries.set(fetched),
                        Err(e) => {
                            error.set(Some(format!("Failed to load tries: {}", e)));
                            loading.set(false);
                            return;
                        }
                    }

                    puzzle.set(Some(found));
                    loading.set(false);
                });
                || ()
            },
        );
    }

    let on_refresh = {
        let refresh_counter = refresh_counter.clone();
        Callback::from(move |_: ()| {
            refresh_counter.set(*refresh_counter + 1);
        })
    };

    let step_view = |step: u8, active_step: u8, finished: bool, current: &PuzzleDto| -> Html {
        let solved = step_solved(&tries, step);
        let attempts = attempts_for_step(&tries, step);

        html! {
            <div class="mb-6 p-4 rounded-lg bg-gray-800 border border-gray-700">
                <div class="flex items-center justify-between mb-3">
                    <h3 class="font-semibold">{format!("Part {}", step)}</h3>
                    <span class="text-sm text-gray-400">
                        {format!("{} attempt(s)", attempts)}
                    </span>
                </div>
                if solved {
                    <p class="text-emerald-400">{"Solved ✓"}</p>
                } else if step == active_step {
                    <AnswerInput
                        competition_id={props.competition_id.clone()}
                        puzzle_id={current.id.clone()}
                        difficulty={difficulty}
                        puzzle_index={props.puzzle_index}
                        step={step}
                        on_refresh={on_refresh.clone()}
                        disabled={finished}
                    />
                } else {
                    <p class="text-gray-500">{"Locked until the previous part is solved."}</p>
                }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-950 text-white">
            <div class="max-w-4xl mx-auto px-4 py-10">
                if *loading {
                    <Spinner label="Loading puzzle..." />
                } else if let Some(message) = &*error {
                    <p class="text-red-400">{message}</p>
                } else if let Some(current) = &*puzzle {
                    <div class="mb-6">
                        <h1 class="text-2xl font-bold">{&current.name}</h1>
                        <p class="text-sm text-gray-400">
                            {format!("{} track · puzzle #{}", difficulty, props.puzzle_index + 1)}
                        </p>
                    </div>

                    <div class="mb-8 p-4 rounded-lg bg-gray-900 border border-gray-800 font-mono text-sm overflow-x-auto">
                        <h2 class="text-gray-400 mb-2">{"Your puzzle input"}</h2>
                        {input_lines.iter().map(|line| html! {
                            <div>{line}</div>
                        }).collect::<Html>()}
                    </div>

                    {{
                        let finished = competition.as_ref().map(|c| c.finished).unwrap_or(false);
                        let active_step = if step_solved(&tries, 1) { 2 } else { 1 };
                        html! {
                            <>
                                {step_view(1, active_step, finished, current)}
                                {step_view(2, active_step, finished, current)}
                            </>
                        }
                    }}
                }
            </div>
        </div>
    }
}
