use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use shared::{Difficulty, SubmitAnswerRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::competitions::{self, SubmissionOutcome};
use crate::components::common::toast::{Toast, ToastContext};

/// Delay between a correct answer and the refresh signal to the parent
/// view, so the success toast is visible before the page advances.
const REFRESH_DELAY_MS: u32 = 1_000;

/// Cooldown granularity. The server dictates the total wait in whole
/// seconds; the widget counts it down one second at a time.
const COOLDOWN_TICK_MS: u32 = 1_000;

/// Lifecycle of one answer widget. `Cooldown` only ever holds a positive
/// remaining wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Cooldown(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerState {
    pub phase: SubmitPhase,
}

impl Default for AnswerState {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
        }
    }
}

impl AnswerState {
    /// Submission is only permitted when idle: never while an attempt is
    /// in flight, never during a cooldown.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn cooldown_remaining(&self) -> Option<u32> {
        match self.phase {
            SubmitPhase::Cooldown(remaining) => Some(remaining),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnswerAction {
    /// A validated attempt is leaving for the server.
    Begin,
    /// The server (or the transport) produced the attempt's outcome.
    Resolved(SubmissionOutcome),
    /// One second of cooldown elapsed.
    Tick,
}

impl Reducible for AnswerState {
    type Action = AnswerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (self.phase, action) {
            (SubmitPhase::Idle, AnswerAction::Begin) => SubmitPhase::Submitting,
            (SubmitPhase::Submitting, AnswerAction::Resolved(outcome)) => match outcome {
                SubmissionOutcome::RateLimited { wait_seconds } if wait_seconds > 0 => {
                    SubmitPhase::Cooldown(wait_seconds)
                }
                // Correct, Incorrect and Failed all hand the widget back;
                // a rate limit without a positive wait cannot start a
                // cooldown either.
                _ => SubmitPhase::Idle,
            },
            (SubmitPhase::Cooldown(remaining), AnswerAction::Tick) => {
                if remaining > 1 {
                    SubmitPhase::Cooldown(remaining - 1)
                } else {
                    SubmitPhase::Idle
                }
            }
            // Begin while busy, ticks outside a cooldown and stray
            // resolutions are ignored.
            (phase, _) => phase,
        };

        if next == self.phase {
            self
        } else {
            Rc::new(Self { phase: next })
        }
    }
}

/// Renders a server wait as `XmYs` for the cooldown banner.
pub fn format_wait(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[derive(Properties, Clone, PartialEq)]
pub struct AnswerInputProps {
    pub competition_id: String,
    pub puzzle_id: String,
    pub difficulty: Difficulty,
    pub puzzle_index: u32,
    /// 1 or 2: which sub-answer of the puzzle this widget submits.
    pub step: u8,
    /// Fired (after a short delay) when an answer was accepted, so the
    /// parent can refetch the puzzle state.
    pub on_refresh: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(AnswerInput)]
pub fn answer_input(props: &AnswerInputProps) -> Html {
    let state = use_reducer_eq(AnswerState::default);
    let solution = use_state(String::new);
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    // Cooldown timer: one tick per second while cooling down, cancelled
    // when the cooldown ends and when the widget unmounts.
    {
        let state = state.clone();
        let cooling = state.cooldown_remaining().is_some();
        use_effect_with(cooling, move |cooling| {
            if *cooling {
                let interval = Interval::new(COOLDOWN_TICK_MS, move || {
                    state.dispatch(AnswerAction::Tick);
                });
                Box::new(move || {
                    interval.cancel();
                }) as Box<dyn FnOnce()>
            } else {
                Box::new(|| {}) as Box<dyn FnOnce()>
            }
        });
    }

    let oninput = {
        let solution = solution.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            solution.set(input.value());
        })
    };

    let on_submit = {
        let state = state.clone();
        let solution = solution.clone();
        let toast_context = toast_context.clone();
        let competition_id = props.competition_id.clone();
        let puzzle_id = props.puzzle_id.clone();
        let difficulty = props.difficulty;
        let puzzle_index = props.puzzle_index;
        let step = props.step;
        let on_refresh = props.on_refresh.clone();

        Callback::from(move |_: ()| {
            if !state.can_submit() {
                return;
            }

            let value = solution.trim().to_string();
            if value.is_empty() || value.parse::<f64>().is_err() {
                toast_context
                    .add_toast
                    .emit(Toast::error("Enter a numeric answer before submitting"));
                return;
            }

            state.dispatch(AnswerAction::Begin);

            let request = SubmitAnswerRequest {
                competition_id: competition_id.clone(),
                puzzle_difficulty: difficulty,
                puzzle_id: puzzle_id.clone(),
                puzzle_index,
                solution: value,
                puzzle_step: step,
            };

            let state = state.clone();
            let toast_context = toast_context.clone();
            let on_refresh = on_refresh.clone();
            spawn_local(async move {
                let outcome = competitions::submit_puzzle_answer(&request).await;
                state.dispatch(AnswerAction::Resolved(outcome.clone()));

                match outcome {
                    SubmissionOutcome::Correct => {
                        toast_context
                            .add_toast
                            .emit(Toast::success("Correct! Well done."));
                        // Let the toast land before the parent refetches.
                        Timeout::new(REFRESH_DELAY_MS, move || {
                            on_refresh.emit(());
                        })
                        .forget();
                    }
                    SubmissionOutcome::Incorrect => {
                        toast_context
                            .add_toast
                            .emit(Toast::warning("That's not the answer. Try again!"));
                    }
                    SubmissionOutcome::RateLimited { wait_seconds } => {
                        gloo_console::log!("Rate limit exceeded, waiting", wait_seconds);
                        toast_context.add_toast.emit(Toast::warning(format!(
                            "Too many attempts. You can submit again in {}.",
                            format_wait(wait_seconds)
                        )));
                    }
                    SubmissionOutcome::Failed(reason) => {
                        log::error!("Answer submission failed: {}", reason);
                        toast_context
                            .add_toast
                            .emit(Toast::error("Could not submit your answer. Please retry."));
                    }
                }
            });
        })
    };

    let locked = !state.can_submit() || props.disabled;

    let onkeydown = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !locked {
                on_submit.emit(());
            }
        })
    };

    let onclick = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit(());
        })
    };

    html! {
        <div class="answer-input">
            <div class="flex gap-2">
                <input
                    type="number"
                    placeholder="Your answer"
                    class="flex-1 px-3 py-2 rounded-md bg-gray-900 border border-gray-700 text-white focus:outline-none focus:border-amber-500 disabled:opacity-50"
                    value={(*solution).clone()}
                    oninput={oninput}
                    onkeydown={onkeydown}
                    disabled={locked}
                    aria-label="Puzzle answer"
                />
                <button
                    onclick={onclick}
                    disabled={locked}
                    class="px-4 py-2 rounded-md bg-amber-600 hover:bg-amber-500 text-white font-medium disabled:opacity-50"
                >
                    if state.is_submitting() {
                        {"Checking..."}
                    } else {
                        {"Submit"}
                    }
                </button>
            </div>
            if let Some(remaining) = state.cooldown_remaining() {
                <div class="text-amber-400 text-sm mt-2">
                    {format!("Rate limited. Next attempt in {}.", format_wait(remaining))}
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AnswerState, action: AnswerAction) -> AnswerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn idle() -> AnswerState {
        AnswerState::default()
    }

    fn submitting() -> AnswerState {
        reduce(idle(), AnswerAction::Begin)
    }

    #[test]
    fn test_initial_state_accepts_submission() {
        let state = idle();
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.can_submit());
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let state = submitting();
        assert_eq!(state.phase, SubmitPhase::Submitting);
        assert!(!state.can_submit());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_begin_is_ignored_while_submitting() {
        let state = reduce(submitting(), AnswerAction::Begin);
        assert_eq!(state.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_begin_is_ignored_during_cooldown() {
        let cooling = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 3 }),
        );
        let state = reduce(cooling, AnswerAction::Begin);
        assert_eq!(state.phase, SubmitPhase::Cooldown(3));
    }

    #[test]
    fn test_correct_returns_to_idle_immediately() {
        // The refresh signal is delayed; the state change is not.
        let state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::Correct),
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_incorrect_returns_to_idle() {
        let state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::Incorrect),
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_transport_failure_returns_to_idle() {
        let state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::Failed("boom".to_string())),
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.can_submit());
    }

    #[test]
    fn test_rate_limit_starts_cooldown_with_server_wait() {
        let state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 30 }),
        );
        assert_eq!(state.phase, SubmitPhase::Cooldown(30));
        assert_eq!(state.cooldown_remaining(), Some(30));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_zero_wait_rate_limit_does_not_start_cooldown() {
        let state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 0 }),
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_cooldown_counts_down_one_tick_per_second() {
        let mut state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 5 }),
        );

        for _ in 0..3 {
            state = reduce(state, AnswerAction::Tick);
        }
        assert_eq!(state.phase, SubmitPhase::Cooldown(2));

        state = reduce(state, AnswerAction::Tick);
        assert_eq!(state.phase, SubmitPhase::Cooldown(1));

        state = reduce(state, AnswerAction::Tick);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.can_submit());
    }

    #[test]
    fn test_tick_is_ignored_outside_cooldown() {
        assert_eq!(reduce(idle(), AnswerAction::Tick).phase, SubmitPhase::Idle);
        assert_eq!(
            reduce(submitting(), AnswerAction::Tick).phase,
            SubmitPhase::Submitting
        );
    }

    #[test]
    fn test_stray_resolution_is_ignored_when_idle() {
        let state = reduce(
            idle(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 60 }),
        );
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_widget_is_reusable_across_attempts() {
        // Idle -> Submitting -> Cooldown -> Idle -> Submitting again.
        let mut state = reduce(
            submitting(),
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 1 }),
        );
        state = reduce(state, AnswerAction::Tick);
        assert!(state.can_submit());

        state = reduce(state, AnswerAction::Begin);
        assert_eq!(state.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_format_wait_renders_minutes_and_seconds() {
        assert_eq!(format_wait(150), "2m 30s");
        assert_eq!(format_wait(60), "1m 0s");
        assert_eq!(format_wait(5), "0m 5s");
        assert_eq!(format_wait(0), "0m 0s");
    }
}
