use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::catalog::{ContactInfo, ResourceCategory};
use crate::matching::MatchResult;
use crate::profile::{
    DisabilityType, EducationLevel, FinancialNeed, Priority, SubjectInterest, UserProfile,
    WorkInterest,
};
use crate::recommendations::{
    recommendation_router, RecommendationService, RecommenderError, RemoteRecommender,
};

pub(super) fn complete_profile() -> UserProfile {
    let mut profile = UserProfile::default();
    profile.personal_info.name = "Jordan Lee".to_string();
    profile.personal_info.location = "Springfield".to_string();
    profile.disability.types.insert(DisabilityType::Physical);
    profile.education.level = Some(EducationLevel::HighSchool);
    profile.education.interests.insert(SubjectInterest::Technology);
    profile.employment.interests.insert(WorkInterest::RemoteWork);
    profile.needs.financial.insert(FinancialNeed::DisabilityPension);
    profile.needs.financial.insert(FinancialNeed::AssistiveTechnology);
    profile.needs.priority = Some(Priority::FindingEmployment);
    profile
}

pub(super) fn remote_record(id: &str, score: u8) -> MatchResult {
    MatchResult {
        id: id.to_string(),
        name: format!("Remote {id}"),
        category: ResourceCategory::Support,
        description: "Suggested by the remote recommender".to_string(),
        eligibility: Vec::new(),
        benefits: String::new(),
        application_steps: Vec::new(),
        contact_info: ContactInfo {
            website: Some("https://remote.example".to_string()),
            phone: None,
            email: None,
        },
        relevance_score: score,
        location: "Remote".to_string(),
    }
}

pub(super) struct StaticRecommender {
    records: Vec<MatchResult>,
    calls: AtomicUsize,
}

impl StaticRecommender {
    pub(super) fn new(records: Vec<MatchResult>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteRecommender for StaticRecommender {
    async fn recommend(&self, _profile: &UserProfile) -> Result<Vec<MatchResult>, RecommenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

pub(super) struct FailingRecommender;

#[async_trait]
impl RemoteRecommender for FailingRecommender {
    async fn recommend(&self, _profile: &UserProfile) -> Result<Vec<MatchResult>, RecommenderError> {
        Err(RecommenderError::Status { status: 502 })
    }
}

pub(super) struct SlowRecommender {
    pub(super) delay: Duration,
}

#[async_trait]
impl RemoteRecommender for SlowRecommender {
    async fn recommend(&self, _profile: &UserProfile) -> Result<Vec<MatchResult>, RecommenderError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![remote_record("too-late", 99)])
    }
}

pub(super) fn offline_service() -> RecommendationService {
    RecommendationService::new(crate::catalog::shared())
}

pub(super) fn service_with(remote: Arc<dyn RemoteRecommender>) -> RecommendationService {
    offline_service().with_remote(remote, Duration::from_millis(200))
}

pub(super) fn router_with(service: RecommendationService) -> axum::Router {
    recommendation_router(Arc::new(service))
}

pub(super) fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
