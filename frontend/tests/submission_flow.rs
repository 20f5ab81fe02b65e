//! Host-target tests walking the answer submission flow end to end:
//! wire shapes in, state transitions through, countdown out.

#[cfg(test)]
mod submission_flow_tests {
    use std::rc::Rc;

    use serde_json::json;
    use yew::prelude::Reducible;

    use frontend::api::competitions::SubmissionOutcome;
    use frontend::components::puzzle::answer_input::{
        format_wait, AnswerAction, AnswerState, SubmitPhase,
    };
    use shared::{AnswerVerdict, Difficulty, SubmitAnswerRequest};

    fn reduce(state: AnswerState, action: AnswerAction) -> AnswerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_request_wire_shape() {
        let request = SubmitAnswerRequest {
            competition_id: "competition/14".to_string(),
            puzzle_difficulty: Difficulty::Hard,
            puzzle_id: "puzzle/7".to_string(),
            puzzle_index: 3,
            solution: "987654".to_string(),
            puzzle_step: 2,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "competition_id": "competition/14",
                "puzzle_difficulty": "HARD",
                "puzzle_id": "puzzle/7",
                "puzzle_index": 3,
                "solution": "987654",
                "puzzle_step": 2
            })
        );
    }

    #[test]
    fn test_verdict_accepts_both_response_shapes() {
        // Judged shape.
        let judged: AnswerVerdict = serde_json::from_value(json!({"is_correct": false})).unwrap();
        assert_eq!(judged.is_correct, Some(false));
        assert_eq!(judged.wait_time_seconds, None);

        // Rate-limit shape, as sent both in 200-level bodies and 429s.
        let limited: AnswerVerdict = serde_json::from_value(json!({
            "error": "Rate limit exceeded",
            "wait_time_seconds": 45
        }))
        .unwrap();
        assert_eq!(limited.is_correct, None);
        assert_eq!(limited.error.as_deref(), Some("Rate limit exceeded"));
        assert_eq!(limited.wait_time_seconds, Some(45));
    }

    #[test]
    fn test_happy_path_attempt_lifecycle() {
        let mut state = AnswerState::default();
        assert!(state.can_submit());

        state = reduce(state, AnswerAction::Begin);
        assert!(state.is_submitting());

        state = reduce(state, AnswerAction::Resolved(SubmissionOutcome::Correct));
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.can_submit());
    }

    #[test]
    fn test_rate_limited_attempt_counts_down_to_reusable() {
        let mut state = reduce(AnswerState::default(), AnswerAction::Begin);
        state = reduce(
            state,
            AnswerAction::Resolved(SubmissionOutcome::RateLimited { wait_seconds: 3 }),
        );
        assert_eq!(state.cooldown_remaining(), Some(3));

        // While cooling down, nothing can start a new attempt.
        state = reduce(state, AnswerAction::Begin);
        assert_eq!(state.cooldown_remaining(), Some(3));

        state = reduce(state, AnswerAction::Tick);
        state = reduce(state, AnswerAction::Tick);
        assert_eq!(state.cooldown_remaining(), Some(1));

        state = reduce(state, AnswerAction::Tick);
        assert_eq!(state.phase, SubmitPhase::Idle);

        // The widget is reusable after the cooldown expires.
        state = reduce(state, AnswerAction::Begin);
        assert!(state.is_submitting());
    }

    #[test]
    fn test_failed_attempt_leaves_widget_interactive() {
        let mut state = reduce(AnswerState::default(), AnswerAction::Begin);
        state = reduce(
            state,
            AnswerAction::Resolved(SubmissionOutcome::Failed("connection reset".to_string())),
        );
        assert!(state.can_submit());
    }

    #[test]
    fn test_cooldown_banner_formatting() {
        assert_eq!(format_wait(45), "0m 45s");
        assert_eq!(format_wait(90), "1m 30s");
        assert_eq!(format_wait(600), "10m 0s");
    }
}
