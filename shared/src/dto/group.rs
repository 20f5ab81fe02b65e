use serde::{Deserialize, Serialize};

/// A group of players, the unit competitions are opened to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
