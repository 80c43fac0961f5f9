use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::catalog::{ContactInfo, ResourceCategory};
use crate::matching::MatchResult;
use crate::profile::UserProfile;

/// Source of supplementary recommendations outside the static catalog.
#[async_trait]
pub trait RemoteRecommender: Send + Sync {
    async fn recommend(&self, profile: &UserProfile) -> Result<Vec<MatchResult>, RecommenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecommenderError {
    #[error("recommender request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("recommender responded with HTTP {status}")]
    Status { status: u16 },
    #[error("recommender returned an unusable payload: {0}")]
    Payload(String),
}

impl RecommenderError {
    /// True when the HTTP client gave up waiting on the endpoint.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// Posts the profile as JSON and reads back an array of resource records.
#[derive(Debug, Clone)]
pub struct HttpRecommender {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecommender {
    /// Client without its own request deadline; callers bound the call.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RecommenderError> {
        Self::build(endpoint.into(), reqwest::Client::builder())
    }

    /// Client that abandons each request after `timeout`.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RecommenderError> {
        Self::build(endpoint.into(), reqwest::Client::builder().timeout(timeout))
    }

    fn build(endpoint: String, builder: reqwest::ClientBuilder) -> Result<Self, RecommenderError> {
        let client = builder.build()?;
        Ok(Self {
            client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteRecommender for HttpRecommender {
    async fn recommend(&self, profile: &UserProfile) -> Result<Vec<MatchResult>, RecommenderError> {
        debug!(endpoint = %self.endpoint, "requesting remote recommendations");

        let response = self.client.post(&self.endpoint).json(profile).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommenderError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| RecommenderError::Payload(err.to_string()))?;

        normalize_records(body, profile)
    }
}

/// Turn a raw response body into resource records.
///
/// The body must be a JSON array. Entries that cannot be used are skipped one by one so a single
/// malformed record does not discard the rest.
pub fn normalize_records(
    body: Value,
    profile: &UserProfile,
) -> Result<Vec<MatchResult>, RecommenderError> {
    let entries = match body {
        Value::Array(entries) => entries,
        other => {
            return Err(RecommenderError::Payload(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RemoteRecord>(entry)
            .map_err(|err| err.to_string())
            .and_then(|record| record.into_match_result(profile));

        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => warn!(index, %reason, "skipping remote recommendation"),
        }
    }

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loosely typed record as produced by the remote service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteRecord {
    id: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    category: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    eligibility: TextList,
    #[serde(default)]
    benefits: String,
    #[serde(default)]
    application_steps: TextList,
    #[serde(default)]
    contact_info: RemoteContact,
    relevance_score: Option<f64>,
    location: Option<String>,
}

impl RemoteRecord {
    fn into_match_result(self, profile: &UserProfile) -> Result<MatchResult, String> {
        let id = required(self.id, "id")?;
        let name = required(self.name, "name")?;
        let category = required(self.category, "type")?
            .parse::<ResourceCategory>()
            .map_err(|err| err.to_string())?;

        let relevance_score = self
            .relevance_score
            .filter(|score| score.is_finite())
            .map(|score| score.clamp(0.0, 100.0).trunc() as u8)
            .unwrap_or(0);

        let location = self
            .location
            .filter(|location| !location.trim().is_empty())
            .unwrap_or_else(|| profile.personal_info.location.clone());

        Ok(MatchResult {
            id,
            name,
            category,
            description: self.description,
            eligibility: self.eligibility.into_vec(),
            benefits: self.benefits,
            application_steps: self.application_steps.into_vec(),
            contact_info: self.contact_info.into_contact_info(),
            relevance_score,
            location,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("missing '{field}'"))
}

/// Either a single string or a list of strings.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum TextList {
    #[default]
    Empty,
    One(String),
    Many(Vec<String>),
}

impl TextList {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(text) => vec![text],
            Self::Many(items) => items,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RemoteContact {
    website: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl RemoteContact {
    fn into_contact_info(self) -> ContactInfo {
        let present = |value: Option<String>| value.filter(|value| !value.trim().is_empty());
        ContactInfo {
            website: present(self.website),
            phone: present(self.phone),
            email: present(self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> UserProfile {
        let mut profile = UserProfile::default();
        profile.personal_info.location = "Springfield".to_string();
        profile
    }

    #[test]
    fn rejects_non_array_bodies() {
        let err = normalize_records(json!({ "results": [] }), &profile()).unwrap_err();
        assert!(matches!(err, RecommenderError::Payload(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn normalizes_loose_records() {
        let body = json!([{
            "id": "peer-mentoring",
            "name": "Peer Mentoring Network",
            "type": "Support",
            "eligibility": "Anyone",
            "applicationSteps": ["Call", "Meet"],
            "contactInfo": { "website": "https://mentors.example", "phone": "", "email": "" },
            "relevanceScore": 104.6
        }]);

        let records = normalize_records(body, &profile()).expect("array body");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.category, ResourceCategory::Support);
        assert_eq!(record.eligibility, vec!["Anyone".to_string()]);
        assert_eq!(record.relevance_score, 100);
        assert_eq!(record.location, "Springfield");
        assert_eq!(record.contact_info.phone, None);
        assert_eq!(
            record.contact_info.website.as_deref(),
            Some("https://mentors.example")
        );
    }

    #[test]
    fn skips_unusable_entries_and_keeps_the_rest() {
        let body = json!([
            { "name": "No id", "type": "job" },
            { "id": "mystery", "name": "Mystery", "type": "lottery" },
            "not an object",
            { "id": "grant", "name": "Small Grant", "type": "funding", "relevanceScore": 61.9, "location": "Remote" }
        ]);

        let records = normalize_records(body, &profile()).expect("array body");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "grant");
        assert_eq!(records[0].relevance_score, 61);
        assert_eq!(records[0].location, "Remote");
    }
}
