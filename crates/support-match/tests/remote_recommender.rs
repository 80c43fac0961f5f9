use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use support_match::config::RecommenderConfig;
use support_match::profile::{
    DisabilityType, EducationLevel, Priority, UserProfile, WorkInterest,
};
use support_match::recommendations::{
    AugmentationStatus, HttpRecommender, RecommendationService, RecommenderError,
    RemoteRecommender,
};
use support_match::ResourceCategory;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile() -> UserProfile {
    let mut profile = UserProfile::default();
    profile.personal_info.name = "Sam Rivera".to_string();
    profile.personal_info.location = "Hobart".to_string();
    profile.disability.types.insert(DisabilityType::SensoryHearing);
    profile.education.level = Some(EducationLevel::VocationalTraining);
    profile.employment.interests.insert(WorkInterest::PartTime);
    profile.needs.priority = Some(Priority::SupportServices);
    profile
}

fn recommender(server: &MockServer) -> HttpRecommender {
    HttpRecommender::with_timeout(format!("{}/recommend", server.uri()), Duration::from_secs(2))
        .expect("client builds")
}

#[tokio::test]
async fn posts_profile_and_normalizes_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_partial_json(json!({
            "personalInfo": { "location": "Hobart" },
            "needs": { "priority": "Connecting with support services" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "auslan-interpreting",
                "name": "Auslan Interpreting Support",
                "type": "support",
                "description": "Interpreters for interviews and appointments",
                "eligibility": ["Deaf or hard of hearing"],
                "benefits": "Free interpreting",
                "applicationSteps": ["Book online"],
                "contactInfo": { "website": "https://interpreting.example", "phone": "", "email": "" },
                "relevanceScore": 82.5,
                "location": ""
            },
            { "id": "", "name": "Broken", "type": "job" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = recommender(&server)
        .recommend(&profile())
        .await
        .expect("remote call succeeds");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "auslan-interpreting");
    assert_eq!(record.category, ResourceCategory::Support);
    assert_eq!(record.relevance_score, 82);
    assert_eq!(record.location, "Hobart");
    assert!(record.contact_info.phone.is_none());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = recommender(&server).recommend(&profile()).await.unwrap_err();
    assert!(matches!(err, RecommenderError::Status { status: 500 }));
}

#[tokio::test]
async fn object_body_is_a_payload_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "model offline" })))
        .mount(&server)
        .await;

    let err = recommender(&server).recommend(&profile()).await.unwrap_err();
    assert!(matches!(err, RecommenderError::Payload(_)));
}

#[tokio::test]
async fn service_degrades_when_remote_is_slow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let service = RecommendationService::new(support_match::catalog::shared()).with_remote(
        Arc::new(recommender(&server)),
        Duration::from_millis(50),
    );

    let recommendations = service
        .recommend(&profile())
        .await
        .expect("profile is complete");

    assert_eq!(
        recommendations.augmentation,
        AugmentationStatus::TimedOut { timeout_ms: 50 }
    );
    let ids: Vec<&str> = recommendations
        .catalog_matches
        .iter()
        .map(|result| result.id.as_str())
        .collect();
    assert_eq!(ids, vec!["disability-income-support", "employment-services"]);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let recommender =
        HttpRecommender::with_timeout("http://127.0.0.1:9/recommend", Duration::from_millis(500))
            .expect("client builds");

    let err = recommender.recommend(&profile()).await.unwrap_err();
    assert!(matches!(err, RecommenderError::Transport(_)));
}

async fn slow_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(delay),
        )
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn configured_service_reports_slow_remote_as_timed_out() {
    let server = slow_server(Duration::from_millis(800)).await;
    let config = RecommenderConfig {
        url: Some(format!("{}/recommend", server.uri())),
        timeout: Duration::from_millis(100),
    };
    let service = RecommendationService::from_config(&config).expect("service builds");
    assert!(service.remote_enabled());

    for _ in 0..5 {
        let recommendations = service
            .recommend(&profile())
            .await
            .expect("profile is complete");
        assert_eq!(
            recommendations.augmentation,
            AugmentationStatus::TimedOut { timeout_ms: 100 }
        );
        assert!(recommendations.supplementary.is_empty());
    }
}

#[tokio::test]
async fn client_deadline_is_reported_as_timed_out() {
    let server = slow_server(Duration::from_millis(800)).await;
    let remote = HttpRecommender::with_timeout(
        format!("{}/recommend", server.uri()),
        Duration::from_millis(50),
    )
    .expect("client builds");

    let err = remote.recommend(&profile()).await.unwrap_err();
    assert!(err.is_timeout());

    let service = RecommendationService::new(support_match::catalog::shared())
        .with_remote(Arc::new(remote), Duration::from_secs(2));
    let recommendations = service
        .recommend(&profile())
        .await
        .expect("profile is complete");
    assert_eq!(
        recommendations.augmentation,
        AugmentationStatus::TimedOut { timeout_ms: 2000 }
    );
}
