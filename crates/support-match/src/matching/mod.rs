//! Profile-to-resource matching and ranking.

pub mod filter;

pub use filter::{find_result, CategoryCounts, CategoryFilter};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{ContactInfo, ResourceCatalog, ResourceCategory, ResourceTemplate};
use crate::profile::UserProfile;

/// Flat resource record handed to renderers and draft generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    pub description: String,
    pub eligibility: Vec<String>,
    pub benefits: String,
    pub application_steps: Vec<String>,
    pub contact_info: ContactInfo,
    pub relevance_score: u8,
    pub location: String,
}

impl MatchResult {
    pub fn from_template(template: &ResourceTemplate, profile: &UserProfile) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            category: template.category,
            description: template.description.to_string(),
            eligibility: template.eligibility.iter().map(|s| s.to_string()).collect(),
            benefits: template.benefits.to_string(),
            application_steps: template
                .application_steps
                .iter()
                .map(|s| s.to_string())
                .collect(),
            contact_info: template.contact.to_contact_info(),
            relevance_score: template.base_relevance_score,
            location: template.location.resolve(profile),
        }
    }
}

/// Evaluate every template against `profile` and rank the matches.
///
/// Each predicate runs exactly once, in catalog order. The sort is stable, so equal scores keep
/// declaration order. An empty result is a valid answer.
pub fn match_resources(profile: &UserProfile, templates: &[ResourceTemplate]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = templates
        .iter()
        .filter(|template| template.applies_to(profile))
        .map(|template| MatchResult::from_template(template, profile))
        .collect();

    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results
}

/// One line of the per-template decision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEvaluation {
    pub id: &'static str,
    pub rule: String,
    pub matched: bool,
    pub base_relevance_score: u8,
}

/// Stateless matcher bound to a shared catalog.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    catalog: Arc<ResourceCatalog>,
}

impl MatchingEngine {
    pub fn new(catalog: Arc<ResourceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(crate::catalog::shared())
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn match_profile(&self, profile: &UserProfile) -> Vec<MatchResult> {
        match_resources(profile, self.catalog.all_templates())
    }

    /// Report how every template's rule resolved for `profile`, in catalog order.
    pub fn audit(&self, profile: &UserProfile) -> Vec<RuleEvaluation> {
        self.catalog
            .all_templates()
            .iter()
            .map(|template| RuleEvaluation {
                id: template.id,
                rule: template.applicability.describe(),
                matched: template.applies_to(profile),
                base_relevance_score: template.base_relevance_score,
            })
            .collect()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
