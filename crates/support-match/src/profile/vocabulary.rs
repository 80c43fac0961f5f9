//! Fixed answer vocabularies offered by the self-assessment form.
//!
//! Every enum serializes to the exact label the form collaborator sends, so a profile payload
//! round-trips without translation and an unknown label is rejected while deserializing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raised when a label is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{label}' is not a recognised {vocabulary}")]
pub struct UnknownLabel {
    pub vocabulary: &'static str,
    pub label: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $noun:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value in declaration (display) order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label() == trimmed)
                    .ok_or_else(|| UnknownLabel {
                        vocabulary: $noun,
                        label: raw.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// Preferred format for correspondence with the user.
    CommunicationMode as "communication mode" {
        Text => "text",
        Audio => "audio",
        EasyRead => "easy-read",
        SignLanguage => "sign-language",
    }
}

impl Default for CommunicationMode {
    fn default() -> Self {
        Self::Text
    }
}

vocabulary! {
    DisabilityType as "disability type" {
        Physical => "Physical disability",
        Cognitive => "Cognitive disability",
        SensoryVision => "Sensory disability (vision)",
        SensoryHearing => "Sensory disability (hearing)",
        MentalHealth => "Mental health condition",
        ChronicIllness => "Chronic illness",
        Learning => "Learning disability",
        Multiple => "Multiple disabilities",
        PreferNotToSpecify => "Prefer not to specify",
    }
}

vocabulary! {
    /// Self-reported impact on daily activities.
    Severity as "severity" {
        Minimal => "minimal",
        Moderate => "moderate",
        Significant => "significant",
        Varies => "varies",
    }
}

vocabulary! {
    /// Highest education reached, listed in the order the form presents it.
    EducationLevel as "education level" {
        CurrentlyInSchool => "Currently in school",
        HighSchool => "High school or equivalent",
        VocationalTraining => "Vocational training",
        SomeCollege => "Some college",
        Bachelors => "Bachelor's degree",
        Graduate => "Graduate degree",
        SelfTaught => "Self-taught/Other",
    }
}

vocabulary! {
    Skill as "skill" {
        Communication => "Communication",
        ComputerSkills => "Computer skills",
        ArtAndCreativity => "Art & creativity",
        ProblemSolving => "Problem solving",
        CustomerService => "Customer service",
        Organization => "Organization",
        Teaching => "Teaching",
        TechnicalSkills => "Technical skills",
        Writing => "Writing",
        Languages => "Languages",
        Mathematics => "Mathematics",
        Research => "Research",
    }
}

vocabulary! {
    SubjectInterest as "subject interest" {
        Technology => "Technology",
        Healthcare => "Healthcare",
        Education => "Education",
        ArtsAndMedia => "Arts & Media",
        Business => "Business",
        SocialServices => "Social Services",
        Environment => "Environment",
        SportsAndRecreation => "Sports & Recreation",
        FoodAndHospitality => "Food & Hospitality",
        Manufacturing => "Manufacturing",
        Transportation => "Transportation",
        Agriculture => "Agriculture",
    }
}

vocabulary! {
    WorkInterest as "work interest" {
        FullTime => "Full-time employment",
        PartTime => "Part-time employment",
        FreelanceContract => "Freelance/Contract work",
        RemoteWork => "Remote work",
        SupportedEmployment => "Supported employment",
        Entrepreneurship => "Entrepreneurship",
        Volunteering => "Volunteer opportunities",
        SkillsTraining => "Skills training programs",
    }
}

vocabulary! {
    WorkplaceAccommodation as "workplace accommodation" {
        FlexibleHours => "Flexible hours",
        RemoteWorkOptions => "Remote work options",
        AccessibleWorkspace => "Accessible workspace",
        AssistiveTechnology => "Assistive technology",
        ModifiedDuties => "Modified duties",
        JobCoaching => "Job coaching",
        QuietEnvironment => "Quiet environment",
        RegularBreaks => "Regular breaks",
    }
}

vocabulary! {
    FinancialNeed as "financial need" {
        DisabilityPension => "Disability pension",
        TrainingFunding => "Training/Education funding",
        AssistiveTechnology => "Assistive technology",
        HealthcareExpenses => "Healthcare expenses",
        TransportationSupport => "Transportation support",
        HousingAssistance => "Housing assistance",
        EquipmentFunding => "Equipment funding",
        JobTrainingPrograms => "Job training programs",
    }
}

vocabulary! {
    SupportService as "support service" {
        CaseManagement => "Case management",
        CareerCounseling => "Career counseling",
        SkillsAssessment => "Skills assessment",
        JobPlacement => "Job placement",
        PeerSupport => "Peer support",
        FamilySupport => "Family support",
        Transportation => "Transportation",
        PersonalCare => "Personal care assistance",
    }
}

vocabulary! {
    TechnologyNeed as "technology need" {
        ScreenReader => "Screen reader software",
        SpeechRecognition => "Speech recognition software",
        AlternativeInput => "Alternative keyboard or mouse",
        HearingAssistance => "Hearing assistance devices",
        CommunicationDevice => "Communication devices",
        MobilityEquipment => "Mobility equipment",
    }
}

vocabulary! {
    /// The single goal the user wants help with first.
    Priority as "priority" {
        FindingEmployment => "Finding employment",
        FinancialSupport => "Getting financial support",
        TrainingEducation => "Accessing training/education",
        AssistiveTechnology => "Obtaining assistive technology",
        HealthcareSupport => "Getting healthcare support",
        HousingAssistance => "Finding housing assistance",
        SupportServices => "Connecting with support services",
    }
}

/// Serde adapter for single-choice answers the form leaves as `""` until the user picks one.
pub(crate) mod blank_as_none {
    use super::*;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
