use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Funding,
    Program,
    Job,
    Support,
}

impl ResourceCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Funding, Self::Program, Self::Job, Self::Support]
    }

    /// Wire tag, also accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Funding => "funding",
            Self::Program => "program",
            Self::Job => "job",
            Self::Support => "support",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Funding => "Funding",
            Self::Program => "Program",
            Self::Job => "Job",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource category '{0}' (expected funding, program, job, or support)")]
pub struct UnknownCategory(pub String);

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

/// Independently optional contact channels attached to a resource record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// Contact channels as declared in catalog source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateContact {
    pub website: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl TemplateContact {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.phone.is_none() && self.email.is_none()
    }

    pub fn to_contact_info(self) -> ContactInfo {
        ContactInfo {
            website: self.website.map(str::to_string),
            phone: self.phone.map(str::to_string),
            email: self.email.map(str::to_string),
        }
    }
}

/// How a matched resource reports its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPolicy {
    /// Delivered where the user lives.
    ProfileLocation,
    /// Available at a fixed place regardless of the user, e.g. remote roles.
    Fixed(&'static str),
}

impl LocationPolicy {
    pub fn resolve(self, profile: &UserProfile) -> String {
        match self {
            Self::ProfileLocation => profile.personal_info.location.clone(),
            Self::Fixed(location) => location.to_string(),
        }
    }

    pub fn describe(self) -> String {
        match self {
            Self::ProfileLocation => "profile location".to_string(),
            Self::Fixed(location) => location.to_string(),
        }
    }
}
