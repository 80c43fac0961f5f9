//! The self-assessment profile handed to the matching engine.

pub mod intake;
pub mod tags;
pub mod vocabulary;

pub use intake::{missing_sections, IntakeError, IntakeStep, ProfileIntake, ProfileSection};
pub use tags::TagSet;
pub use vocabulary::{
    CommunicationMode, DisabilityType, EducationLevel, FinancialNeed, Priority, Severity, Skill,
    SubjectInterest, SupportService, TechnologyNeed, UnknownLabel, WorkInterest,
    WorkplaceAccommodation,
};

use serde::{Deserialize, Serialize};
use vocabulary::blank_as_none;

/// Completed self-assessment. Sections are required on the wire; fields inside a section may be
/// left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub personal_info: PersonalInfo,
    pub disability: DisabilityProfile,
    pub education: EducationProfile,
    pub employment: EmploymentProfile,
    pub needs: SupportNeeds,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    /// Free text; the form accepts an age or an age range.
    pub age: String,
    pub location: String,
    pub communication_mode: CommunicationMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabilityProfile {
    #[serde(rename = "type")]
    pub types: TagSet<DisabilityType>,
    pub description: String,
    #[serde(with = "blank_as_none")]
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationProfile {
    #[serde(with = "blank_as_none")]
    pub level: Option<EducationLevel>,
    pub skills: TagSet<Skill>,
    pub interests: TagSet<SubjectInterest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmploymentProfile {
    pub history: String,
    pub interests: TagSet<WorkInterest>,
    pub work_preferences: TagSet<WorkplaceAccommodation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportNeeds {
    pub financial: TagSet<FinancialNeed>,
    pub support: TagSet<SupportService>,
    pub technology: TagSet<TechnologyNeed>,
    #[serde(with = "blank_as_none")]
    pub priority: Option<Priority>,
}
