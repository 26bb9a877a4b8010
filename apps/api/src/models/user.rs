use serde::{Deserialize, Serialize};

/// The part of a user profile the scorer reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSkills {
    #[serde(default)]
    pub skills: Vec<String>,
}
