//! Recommendation pipeline: catalog matching, optional remote augmentation, and the HTTP surface.

pub mod remote;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use remote::{normalize_records, HttpRecommender, RecommenderError, RemoteRecommender};
pub use router::recommendation_router;
pub use service::{
    AugmentationStatus, RecommendationError, RecommendationService, Recommendations,
};
