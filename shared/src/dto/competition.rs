use serde::{Deserialize, Serialize};

/// A puzzle competition, backed by one theme of one catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub catalog_id: String,
    pub catalog_theme: String,
    /// Finished competitions accept no further submissions.
    #[serde(default)]
    pub finished: bool,
    /// Hidden competitions are staged and not visible to players.
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_show() -> bool {
    true
}

/// Aggregate participation numbers shown on the staff dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionStatsDto {
    pub competition_id: String,
    pub title: String,
    pub total_users: u64,
    pub active_users: u64,
    pub completion_rate: f64,
    pub average_score: f64,
    pub highest_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults_to_visible() {
        let json = r#"{
            "id": "competition/9",
            "title": "Winter Cup",
            "catalog_id": "catalog/1",
            "catalog_theme": "winter"
        }"#;
        let competition: CompetitionDto = serde_json::from_str(json).unwrap();
        assert!(competition.show);
        assert!(!competition.finished);
    }
}
