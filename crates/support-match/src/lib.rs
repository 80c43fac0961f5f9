//! Disability support resource matching.
//!
//! A completed self-assessment [`profile::UserProfile`] is matched against a versioned
//! [`catalog::ResourceCatalog`] of assistance programs, funding sources, and job pathways. The
//! [`recommendations`] layer adds optional remote augmentation and an axum router on top.

pub mod catalog;
pub mod config;
pub mod drafting;
pub mod error;
pub mod matching;
pub mod profile;
pub mod recommendations;
pub mod telemetry;

pub use catalog::{ResourceCatalog, ResourceCategory, ResourceTemplate};
pub use matching::{match_resources, MatchResult, MatchingEngine};
pub use profile::UserProfile;
