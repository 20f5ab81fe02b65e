use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post};
use log::{debug, warn};
use serde::Serialize;
use shared::{
    AnswerVerdict, CompetitionDto, CompetitionStatsDto, Difficulty, PuzzleDto,
    PuzzleInputResponse, SubmitAnswerRequest, TryDto,
};

/// Result of one answer attempt. Exactly one variant is produced per
/// submission, whatever the transport does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Correct,
    Incorrect,
    /// The server refused to judge the attempt and dictated how long to
    /// wait before the next one. The wait is authoritative.
    RateLimited { wait_seconds: u32 },
    Failed(String),
}

/// Maps a submit-answer response body to an outcome.
///
/// The backend signals rate limiting through two channels: a 200-level
/// body carrying an error marker plus `wait_time_seconds`, and an HTTP
/// 429 with the same payload shape. Both converge here so they cannot
/// drift apart.
fn outcome_from_response(status: u16, verdict: AnswerVerdict) -> SubmissionOutcome {
    let rate_limited = status == 429 || verdict.error.is_some();
    if rate_limited {
        return match verdict.wait_time_seconds {
            Some(wait_seconds) if wait_seconds > 0 => SubmissionOutcome::RateLimited { wait_seconds },
            // A rate-limit shaped reply without a usable wait cannot start
            // a cooldown; surface it as a plain failure instead.
            _ => SubmissionOutcome::Failed(
                verdict
                    .error
                    .unwrap_or_else(|| "Rate limited without a wait time".to_string()),
            ),
        };
    }

    match verdict.is_correct {
        Some(true) => SubmissionOutcome::Correct,
        Some(false) => SubmissionOutcome::Incorrect,
        None => SubmissionOutcome::Failed("Malformed answer response".to_string()),
    }
}

/// Submits one answer attempt. Issues exactly one request and never
/// retries; recovering from `Failed` is the caller's (the user's) call.
pub async fn submit_puzzle_answer(request: &SubmitAnswerRequest) -> SubmissionOutcome {
    debug!(
        "Submitting answer for puzzle {} (index {}, step {})",
        request.puzzle_id, request.puzzle_index, request.puzzle_step
    );

    let builder = match authenticated_post(&api_url("/api/competitions/answer_puzzle")).json(request)
    {
        Ok(builder) => builder,
        Err(e) => return SubmissionOutcome::Failed(format!("Failed to serialize answer: {}", e)),
    };

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Answer submission transport failure: {}", e);
            return SubmissionOutcome::Failed(format!("Failed to send answer: {}", e));
        }
    };

    let status = response.status();
    if status != 429 && !response.ok() {
        return SubmissionOutcome::Failed(format!("HTTP {}", status));
    }

    match response.json::<AnswerVerdict>().await {
        Ok(verdict) => outcome_from_response(status, verdict),
        Err(e) => SubmissionOutcome::Failed(format!("Failed to parse answer response: {}", e)),
    }
}

/// Competitions the current user can enter through their groups.
pub async fn fetch_user_competitions() -> Result<Vec<CompetitionDto>, String> {
    debug!("Fetching competitions for current user");

    let response = authenticated_get(&api_url("/api/competitions/user"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch competitions: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<CompetitionDto>>()
        .await
        .map_err(|e| format!("Failed to parse competitions response: {}", e))
}

pub async fn fetch_competition_details(competition_id: &str) -> Result<CompetitionDto, String> {
    debug!("Fetching competition {}", competition_id);

    let url = format!("{}/{}", api_url("/api/competitions"), competition_id);
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch competition: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<CompetitionDto>()
        .await
        .map_err(|e| format!("Failed to parse competition response: {}", e))
}

/// All puzzles of the competition's theme, across difficulty tracks.
pub async fn fetch_competition_puzzles(competition_id: &str) -> Result<Vec<PuzzleDto>, String> {
    debug!("Fetching puzzles for competition {}", competition_id);

    let url = format!("{}/{}/puzzles", api_url("/api/competitions"), competition_id);
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch puzzles: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<PuzzleDto>>()
        .await
        .map_err(|e| format!("Failed to parse puzzles response: {}", e))
}

#[derive(Serialize)]
struct PuzzleInputRequest<'a> {
    competition_id: &'a str,
    puzzle_difficulty: Difficulty,
    puzzle_id: &'a str,
    puzzle_index: u32,
}

/// The user-specific input for one puzzle.
pub async fn fetch_puzzle_input(
    competition_id: &str,
    difficulty: Difficulty,
    puzzle_id: &str,
    puzzle_index: u32,
) -> Result<PuzzleInputResponse, String> {
    debug!(
        "Fetching input for puzzle {} (index {})",
        puzzle_id, puzzle_index
    );

    let request = PuzzleInputRequest {
        competition_id,
        puzzle_difficulty: difficulty,
        puzzle_id,
        puzzle_index,
    };

    let response = authenticated_post(&api_url("/api/competitions/input"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize input request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch puzzle input: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<PuzzleInputResponse>()
        .await
        .map_err(|e| format!("Failed to parse puzzle input: {}", e))
}

/// The current user's attempt history for one puzzle.
pub async fn fetch_puzzle_tries(
    competition_id: &str,
    puzzle_id: &str,
    puzzle_index: u32,
) -> Result<Vec<TryDto>, String> {
    debug!(
        "Fetching tries for puzzle {} in competition {}",
        puzzle_id, competition_id
    );

    let url = format!(
        "{}/{}/puzzles/{}/{}/tries",
        api_url("/api/competitions"),
        competition_id,
        puzzle_id,
        puzzle_index
    );
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch tries: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<TryDto>>()
        .await
        .map_err(|e| format!("Failed to parse tries response: {}", e))
}

pub async fn fetch_competition_stats(competition_id: &str) -> Result<CompetitionStatsDto, String> {
    debug!("Fetching statistics for competition {}", competition_id);

    let url = format!(
        "{}/{}/statistics",
        api_url("/api/competitions"),
        competition_id
    );
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch statistics: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<CompetitionStatsDto>()
        .await
        .map_err(|e| format!("Failed to parse statistics response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn verdict(
        is_correct: Option<bool>,
        error: Option<&str>,
        wait_time_seconds: Option<u32>,
    ) -> AnswerVerdict {
        AnswerVerdict {
            is_correct,
            error: error.map(str::to_string),
            wait_time_seconds,
        }
    }

    #[test]
    fn test_correct_and_incorrect_map_from_judged_body() {
        assert_eq!(
            outcome_from_response(200, verdict(Some(true), None, None)),
            SubmissionOutcome::Correct
        );
        assert_eq!(
            outcome_from_response(200, verdict(Some(false), None, None)),
            SubmissionOutcome::Incorrect
        );
    }

    #[test]
    fn test_marker_body_and_http_429_converge() {
        // Same payload through both rate-limit channels must produce the
        // same outcome.
        let via_marker =
            outcome_from_response(200, verdict(None, Some("Rate limit exceeded"), Some(10)));
        let via_status = outcome_from_response(429, verdict(None, None, Some(10)));
        assert_eq!(via_marker, via_status);
        assert_eq!(
            via_marker,
            SubmissionOutcome::RateLimited { wait_seconds: 10 }
        );
    }

    #[test]
    fn test_error_marker_wins_over_correctness_flag() {
        let outcome = outcome_from_response(
            200,
            verdict(Some(false), Some("Rate limit exceeded"), Some(30)),
        );
        assert_eq!(outcome, SubmissionOutcome::RateLimited { wait_seconds: 30 });
    }

    #[test]
    fn test_rate_limit_without_wait_is_a_failure() {
        // Cooldown(0) is not a state; a zero or missing wait cannot start one.
        assert!(matches!(
            outcome_from_response(429, verdict(None, None, None)),
            SubmissionOutcome::Failed(_)
        ));
        assert!(matches!(
            outcome_from_response(200, verdict(None, Some("Rate limit exceeded"), Some(0))),
            SubmissionOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_empty_body_is_a_failure() {
        assert!(matches!(
            outcome_from_response(200, verdict(None, None, None)),
            SubmissionOutcome::Failed(_)
        ));
    }
}
