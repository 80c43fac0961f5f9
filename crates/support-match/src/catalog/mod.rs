//! Versioned catalog of assistance programs, funding sources, and job pathways.

mod domain;
mod rules;
mod standard;

pub use domain::{ContactInfo, LocationPolicy, ResourceCategory, TemplateContact, UnknownCategory};
pub use rules::ApplicabilityRule;

use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use crate::profile::UserProfile;

/// Read-only catalog entry describing one resource and when it applies.
#[derive(Debug, Clone)]
pub struct ResourceTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ResourceCategory,
    pub description: &'static str,
    /// Human-readable criteria shown to the user; never machine-evaluated.
    pub eligibility: Vec<&'static str>,
    pub benefits: &'static str,
    pub application_steps: Vec<&'static str>,
    pub contact: TemplateContact,
    pub base_relevance_score: u8,
    pub applicability: ApplicabilityRule,
    pub location: LocationPolicy,
}

impl ResourceTemplate {
    pub fn applies_to(&self, profile: &UserProfile) -> bool {
        self.applicability.evaluate(profile)
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            name: self.name,
            category: self.category,
            base_relevance_score: self.base_relevance_score,
            applies_when: self.applicability.describe(),
            location: self.location.describe(),
        }
    }
}

/// Catalog listing row for browsing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: ResourceCategory,
    pub base_relevance_score: u8,
    pub applies_when: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate template id '{0}'")]
    DuplicateId(String),
    #[error("template '{id}' has relevance score {score} outside 0-100")]
    ScoreOutOfRange { id: String, score: u8 },
    #[error("template '{0}' has no website, phone, or email")]
    MissingContact(String),
}

#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    version: String,
    templates: Vec<ResourceTemplate>,
}

impl ResourceCatalog {
    /// The built-in catalog.
    pub fn standard() -> Self {
        Self {
            version: standard::STANDARD_CATALOG_VERSION.to_string(),
            templates: standard::standard_templates(),
        }
    }

    /// Build a custom catalog, rejecting duplicate ids, out-of-range scores, and entries with no
    /// way to get in touch.
    pub fn from_templates(
        version: impl Into<String>,
        templates: Vec<ResourceTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id) {
                return Err(CatalogError::DuplicateId(template.id.to_string()));
            }
            if template.base_relevance_score > 100 {
                return Err(CatalogError::ScoreOutOfRange {
                    id: template.id.to_string(),
                    score: template.base_relevance_score,
                });
            }
            if template.contact.is_empty() {
                return Err(CatalogError::MissingContact(template.id.to_string()));
            }
        }

        Ok(Self {
            version: version.into(),
            templates,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every template in declaration order. Same order on every call.
    pub fn all_templates(&self) -> &[ResourceTemplate] {
        &self.templates
    }

    pub fn template(&self, id: &str) -> Option<&ResourceTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn templates_in(&self, category: ResourceCategory) -> Vec<&ResourceTemplate> {
        self.templates
            .iter()
            .filter(|template| template.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Process-wide standard catalog, built on first use and never mutated.
pub fn shared() -> Arc<ResourceCatalog> {
    static CATALOG: OnceLock<Arc<ResourceCatalog>> = OnceLock::new();
    CATALOG
        .get_or_init(|| Arc::new(ResourceCatalog::standard()))
        .clone()
}
