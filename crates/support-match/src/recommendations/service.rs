use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::remote::{HttpRecommender, RecommenderError, RemoteRecommender};
use crate::catalog::ResourceCatalog;
use crate::config::RecommenderConfig;
use crate::drafting::{draft_application, ApplicationDraft};
use crate::matching::{MatchResult, MatchingEngine};
use crate::profile::{missing_sections, IntakeError, UserProfile};

/// Outcome of the optional remote round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AugmentationStatus {
    /// No remote recommender configured.
    Disabled,
    Succeeded { count: usize },
    Failed { reason: String },
    TimedOut { timeout_ms: u64 },
}

/// Terminal payload for one profile submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub generated_at: DateTime<Utc>,
    pub catalog_version: String,
    pub catalog_matches: Vec<MatchResult>,
    pub supplementary: Vec<MatchResult>,
    pub augmentation: AugmentationStatus,
}

impl Recommendations {
    /// Catalog matches and supplementary records in one list, best first.
    ///
    /// Supplementary records never replace a catalog entry with the same id, and catalog entries
    /// win ties.
    pub fn ranked(&self) -> Vec<MatchResult> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ranked: Vec<MatchResult> = self
            .catalog_matches
            .iter()
            .chain(self.supplementary.iter())
            .filter(|result| seen.insert(result.id.as_str()))
            .cloned()
            .collect();

        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Incomplete(#[from] IntakeError),
    #[error("no catalog resource with id '{0}'")]
    UnknownResource(String),
    #[error("resource '{0}' does not apply to this profile")]
    NotMatched(String),
}

/// Runs catalog matching and, when configured, a time-bounded remote augmentation.
pub struct RecommendationService {
    engine: MatchingEngine,
    remote: Option<Arc<dyn RemoteRecommender>>,
    timeout: Duration,
}

impl RecommendationService {
    pub fn new(catalog: Arc<ResourceCatalog>) -> Self {
        Self {
            engine: MatchingEngine::new(catalog),
            remote: None,
            timeout: RecommenderConfig::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteRecommender>, timeout: Duration) -> Self {
        self.remote = Some(remote);
        self.timeout = timeout;
        self
    }

    /// Standard catalog plus an HTTP recommender when an endpoint is configured.
    pub fn from_config(config: &RecommenderConfig) -> Result<Self, RecommenderError> {
        let service = Self::new(crate::catalog::shared());
        match &config.url {
            Some(url) => {
                let remote = HttpRecommender::new(url.clone())?;
                info!(
                    endpoint = remote.endpoint(),
                    timeout_ms = millis(config.timeout),
                    "remote recommender enabled"
                );
                Ok(service.with_remote(Arc::new(remote), config.timeout))
            }
            None => Ok(service),
        }
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        self.engine.catalog()
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Reject profiles the intake wizard would not have let through.
    pub fn validate(profile: &UserProfile) -> Result<(), IntakeError> {
        let missing = missing_sections(profile);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IntakeError::Incomplete(missing))
        }
    }

    /// Match a confirmed profile. Remote failures degrade to an empty supplementary list.
    pub async fn recommend(
        &self,
        profile: &UserProfile,
    ) -> Result<Recommendations, RecommendationError> {
        Self::validate(profile)?;

        let catalog_matches = self.engine.match_profile(profile);
        let (supplementary, augmentation) = self.augment(profile).await;

        info!(
            catalog_matches = catalog_matches.len(),
            supplementary = supplementary.len(),
            ?augmentation,
            "recommendations generated"
        );

        Ok(Recommendations {
            generated_at: Utc::now(),
            catalog_version: self.catalog().version().to_string(),
            catalog_matches,
            supplementary,
            augmentation,
        })
    }

    async fn augment(&self, profile: &UserProfile) -> (Vec<MatchResult>, AugmentationStatus) {
        let Some(remote) = &self.remote else {
            return (Vec::new(), AugmentationStatus::Disabled);
        };

        match tokio::time::timeout(self.timeout, remote.recommend(profile)).await {
            Ok(Ok(records)) => {
                let count = records.len();
                (records, AugmentationStatus::Succeeded { count })
            }
            Ok(Err(err)) if err.is_timeout() => {
                let timeout_ms = millis(self.timeout);
                warn!(
                    error = %err,
                    timeout_ms,
                    "remote recommender timed out; continuing with catalog matches"
                );
                (Vec::new(), AugmentationStatus::TimedOut { timeout_ms })
            }
            Ok(Err(err)) => {
                warn!(error = %err, "remote recommender failed; continuing with catalog matches");
                (
                    Vec::new(),
                    AugmentationStatus::Failed {
                        reason: err.to_string(),
                    },
                )
            }
            Err(_) => {
                let timeout_ms = millis(self.timeout);
                warn!(timeout_ms, "remote recommender timed out; continuing with catalog matches");
                (Vec::new(), AugmentationStatus::TimedOut { timeout_ms })
            }
        }
    }

    /// Draft a letter for a catalog resource that applies to `profile`.
    pub fn draft_for(
        &self,
        profile: &UserProfile,
        resource_id: &str,
    ) -> Result<ApplicationDraft, RecommendationError> {
        let template = self
            .catalog()
            .template(resource_id)
            .ok_or_else(|| RecommendationError::UnknownResource(resource_id.to_string()))?;

        if !template.applies_to(profile) {
            return Err(RecommendationError::NotMatched(resource_id.to_string()));
        }

        let resource = MatchResult::from_template(template, profile);
        Ok(draft_application(&resource, profile))
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
