use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserProfile;

/// The five steps of the self-assessment wizard, in presentation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    #[default]
    PersonalInfo,
    Disability,
    Education,
    Employment,
    Needs,
}

impl ProfileSection {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PersonalInfo,
            Self::Disability,
            Self::Education,
            Self::Employment,
            Self::Needs,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Disability => "Disability Profile",
            Self::Education => "Education & Skills",
            Self::Employment => "Employment Goals",
            Self::Needs => "Support Needs",
        }
    }

    /// What the user must answer before leaving the section.
    pub const fn requirement(self) -> &'static str {
        match self {
            Self::PersonalInfo => "name and location are required",
            Self::Disability => "select at least one disability type",
            Self::Education => "select an education level",
            Self::Employment => "select at least one type of work",
            Self::Needs => "select a top priority",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::Disability => 1,
            Self::Education => 2,
            Self::Employment => 3,
            Self::Needs => 4,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ordered().get(self.position() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.position()
            .checked_sub(1)
            .and_then(|index| Self::ordered().get(index).copied())
    }

    pub fn is_complete(self, profile: &UserProfile) -> bool {
        match self {
            Self::PersonalInfo => {
                !profile.personal_info.name.trim().is_empty()
                    && !profile.personal_info.location.trim().is_empty()
            }
            Self::Disability => !profile.disability.types.is_empty(),
            Self::Education => profile.education.level.is_some(),
            Self::Employment => !profile.employment.interests.is_empty(),
            Self::Needs => profile.needs.priority.is_some(),
        }
    }
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sections of `profile` that would block the wizard, in presentation order.
pub fn missing_sections(profile: &UserProfile) -> Vec<ProfileSection> {
    ProfileSection::ordered()
        .into_iter()
        .filter(|section| !section.is_complete(profile))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{section} is incomplete: {}", .section.requirement())]
    SectionIncomplete { section: ProfileSection },
    #[error("profile is incomplete: {}", join_labels(.0))]
    Incomplete(Vec<ProfileSection>),
    #[error("already at the first section")]
    AtFirstSection,
}

fn join_labels(sections: &[ProfileSection]) -> String {
    sections
        .iter()
        .map(|section| section.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where the wizard stands after a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Section(ProfileSection),
    ReadyToConfirm,
}

/// Wizard state: a profile under construction plus the section currently on screen.
///
/// Every section stays editable through [`ProfileIntake::profile_mut`] until [`ProfileIntake::confirm`]
/// hands back the finished snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProfileIntake {
    profile: UserProfile,
    current: ProfileSection,
}

impl ProfileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing a saved draft from its first section.
    pub fn resume(profile: UserProfile) -> Self {
        Self {
            profile,
            current: ProfileSection::PersonalInfo,
        }
    }

    pub fn current_section(&self) -> ProfileSection {
        self.current
    }

    /// One-based step number and total step count for progress indicators.
    pub fn progress(&self) -> (usize, usize) {
        (self.current.position() + 1, ProfileSection::ordered().len())
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub fn can_proceed(&self) -> bool {
        self.current.is_complete(&self.profile)
    }

    pub fn advance(&mut self) -> Result<IntakeStep, IntakeError> {
        if !self.can_proceed() {
            return Err(IntakeError::SectionIncomplete {
                section: self.current,
            });
        }

        match self.current.next() {
            Some(next) => {
                self.current = next;
                Ok(IntakeStep::Section(next))
            }
            None => Ok(IntakeStep::ReadyToConfirm),
        }
    }

    pub fn back(&mut self) -> Result<ProfileSection, IntakeError> {
        let previous = self.current.previous().ok_or(IntakeError::AtFirstSection)?;
        self.current = previous;
        Ok(previous)
    }

    /// Validate every section and release the immutable profile for matching.
    pub fn confirm(self) -> Result<UserProfile, IntakeError> {
        let missing = missing_sections(&self.profile);
        if missing.is_empty() {
            Ok(self.profile)
        } else {
            Err(IntakeError::Incomplete(missing))
        }
    }
}
