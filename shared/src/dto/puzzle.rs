use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Difficulty tier a puzzle belongs to within a catalog theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// One puzzle of a difficulty track. Every puzzle has two answer steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleDto {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
}

/// A user's attempt history for one puzzle step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TryDto {
    pub id: String,
    pub puzzle_id: String,
    pub puzzle_index: u32,
    /// 1 or 2: which sub-answer of the puzzle this try belongs to.
    pub step: u8,
    pub attempts: u32,
    pub score: f64,
    pub start_time: DateTime<FixedOffset>,
    /// Set once the step has been solved.
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl TryDto {
    pub fn is_solved(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Body of the submit-answer call. The solution travels as text even for
/// numeric answers; the backend compares canonical string forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAnswerRequest {
    pub competition_id: String,
    pub puzzle_difficulty: Difficulty,
    pub puzzle_id: String,
    pub puzzle_index: u32,
    pub solution: String,
    pub puzzle_step: u8,
}

/// Response body of the submit-answer call. The backend answers with one
/// of two shapes sharing this envelope: `{is_correct}` for a judged
/// attempt, or `{error, wait_time_seconds}` when the caller is being rate
/// limited. An HTTP 429 carries the same rate-limit payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnswerVerdict {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_seconds: Option<u32>,
}

/// Puzzle input unique to the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleInputResponse {
    pub input_lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difficulty_wire_format_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"MEDIUM\""
        );
        let parsed: Difficulty = serde_json::from_str("\"HARD\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_parses_from_route_segment() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("legendary".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_submit_request_field_names_match_contract() {
        let request = SubmitAnswerRequest {
            competition_id: "competition/9".to_string(),
            puzzle_difficulty: Difficulty::Easy,
            puzzle_id: "puzzle/3".to_string(),
            puzzle_index: 2,
            solution: "12345".to_string(),
            puzzle_step: 1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["competition_id"], "competition/9");
        assert_eq!(value["puzzle_difficulty"], "EASY");
        assert_eq!(value["puzzle_id"], "puzzle/3");
        assert_eq!(value["puzzle_index"], 2);
        assert_eq!(value["solution"], "12345");
        assert_eq!(value["puzzle_step"], 1);
    }

    #[test]
    fn test_verdict_parses_judged_shape() {
        let verdict: AnswerVerdict = serde_json::from_str(r#"{"is_correct": true}"#).unwrap();
        assert_eq!(verdict.is_correct, Some(true));
        assert_eq!(verdict.error, None);
        assert_eq!(verdict.wait_time_seconds, None);
    }

    #[test]
    fn test_verdict_parses_rate_limit_shape() {
        let verdict: AnswerVerdict =
            serde_json::from_str(r#"{"error": "Rate limit exceeded", "wait_time_seconds": 30}"#)
                .unwrap();
        assert_eq!(verdict.is_correct, None);
        assert_eq!(verdict.wait_time_seconds, Some(30));
    }

    #[test]
    fn test_try_solved_iff_end_time_present() {
        let json = r#"{
            "id": "try/1",
            "puzzle_id": "puzzle/3",
            "puzzle_index": 0,
            "step": 1,
            "attempts": 4,
            "score": 50.0,
            "start_time": "2025-12-01T09:00:00+00:00"
        }"#;
        let mut attempt: TryDto = serde_json::from_str(json).unwrap();
        assert!(!attempt.is_solved());
        attempt.end_time = Some(attempt.start_time);
        assert!(attempt.is_solved());
    }
}
