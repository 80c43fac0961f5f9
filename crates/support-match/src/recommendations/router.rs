use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{RecommendationError, RecommendationService};
use crate::catalog::TemplateSummary;
use crate::drafting::draft_application;
use crate::matching::{CategoryCounts, CategoryFilter, MatchResult};
use crate::profile::{IntakeError, UserProfile};

/// Router builder exposing matching, catalog browsing, and draft generation.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/resources", get(resources_handler))
        .route("/api/v1/drafts", post(draft_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoryQuery {
    #[serde(default)]
    pub(crate) category: Option<CategoryFilter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DraftRequest {
    pub(crate) profile: UserProfile,
    #[serde(default)]
    pub(crate) resource_id: Option<String>,
    #[serde(default)]
    pub(crate) resource: Option<MatchResult>,
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    Query(query): Query<CategoryQuery>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response {
    let filter = query.category.unwrap_or_default();

    match service.recommend(&profile).await {
        Ok(recommendations) => {
            let ranked = recommendations.ranked();
            let counts = CategoryCounts::tally(&ranked);
            let payload = json!({
                "generatedAt": recommendations.generated_at,
                "catalogVersion": recommendations.catalog_version,
                "category": filter.to_string(),
                "counts": counts,
                "resources": filter.apply(&ranked),
                "catalogMatches": recommendations.catalog_matches,
                "supplementary": recommendations.supplementary,
                "augmentation": recommendations.augmentation,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn resources_handler(
    State(service): State<Arc<RecommendationService>>,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let filter = query.category.unwrap_or_default();
    let catalog = service.catalog();
    let resources: Vec<TemplateSummary> = catalog
        .all_templates()
        .iter()
        .filter(|template| filter.allows(template.category))
        .map(|template| template.summary())
        .collect();

    let payload = json!({
        "catalogVersion": catalog.version(),
        "category": filter.to_string(),
        "resources": resources,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn draft_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<DraftRequest>,
) -> Response {
    let DraftRequest {
        profile,
        resource_id,
        resource,
    } = request;

    let draft = match (resource_id, resource) {
        (Some(id), _) => service.draft_for(&profile, &id),
        (None, Some(resource)) => Ok(draft_application(&resource, &profile)),
        (None, None) => {
            let payload = json!({
                "error": "either resourceId or resource is required",
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match draft {
        Ok(draft) => (StatusCode::OK, axum::Json(draft)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecommendationError) -> Response {
    match error {
        RecommendationError::Incomplete(IntakeError::Incomplete(missing)) => {
            let message = IntakeError::Incomplete(missing.clone()).to_string();
            let payload = json!({
                "error": message,
                "missingSections": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        RecommendationError::Incomplete(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        RecommendationError::UnknownResource(_) | RecommendationError::NotMatched(_) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
