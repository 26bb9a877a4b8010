use serde::{Deserialize, Deserializer, Serialize};

/// Job record as served by the job API.
///
/// The backend sends `id`, `_id` and `job_id` side by side, so each is its own
/// field; [`Job::key`] picks one. Provider fields may arrive as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "company_name", deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Backend-computed score. Authoritative when present.
    #[serde(default)]
    pub match_score: Option<u32>,
    #[serde(default)]
    pub matched_skills: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw: JobRaw,
}

/// Untyped provider payload; only the skill lists are read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRaw {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Job {
    /// First non-empty of `job_id`, `_id`, `id`; empty when none is set.
    pub fn key(&self) -> &str {
        [&self.job_id, &self.mongo_id, &self.id]
            .into_iter()
            .filter_map(|id| id.as_deref())
            .find(|id| !id.is_empty())
            .unwrap_or("")
    }

    /// First present of `matched_skills`, `tags`, `raw.skills`, `raw.required_skills`.
    pub fn required_skills(&self) -> &[String] {
        self.matched_skills
            .as_deref()
            .or(self.tags.as_deref())
            .or(self.raw.skills.as_deref())
            .or(self.raw.required_skills.as_deref())
            .unwrap_or(&[])
    }

    /// Case-insensitive search over title, company, required skills and description.
    /// A blank query matches every job; otherwise the query is matched untrimmed.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.company.to_lowercase().contains(&query)
            || self
                .required_skills()
                .iter()
                .any(|s| s.to_lowercase().contains(&query))
            || self.description.to_lowercase().contains(&query)
    }
}
