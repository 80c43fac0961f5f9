//! Draft application letters for a matched resource.

use serde::Serialize;

use crate::catalog::ResourceCategory;
use crate::matching::MatchResult;
use crate::profile::UserProfile;

const NOT_SPECIFIED: &str = "Not specified";
const DEFAULT_GOAL: &str = "greater independence";
const DEFAULT_HISTORY: &str = "various relevant activities";
const DEFAULT_SITUATION: &str =
    "I am seeking support to improve my independence and quality of life.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftKind {
    JobApplication,
    SupportApplication,
}

impl DraftKind {
    pub fn for_category(category: ResourceCategory) -> Self {
        match category {
            ResourceCategory::Job => Self::JobApplication,
            ResourceCategory::Funding | ResourceCategory::Program | ResourceCategory::Support => {
                Self::SupportApplication
            }
        }
    }
}

/// Editable letter the user copies into an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub resource_id: String,
    pub kind: DraftKind,
    pub subject: String,
    /// Full letter text, subject line included.
    pub letter: String,
}

pub fn draft_application(resource: &MatchResult, profile: &UserProfile) -> ApplicationDraft {
    let kind = DraftKind::for_category(resource.category);
    let subject = format!("Application for {}", resource.name);
    let body = match kind {
        DraftKind::JobApplication => job_letter(resource, profile),
        DraftKind::SupportApplication => support_letter(resource, profile),
    };

    ApplicationDraft {
        resource_id: resource.id.clone(),
        kind,
        letter: format!("Subject: {subject}\n\n{body}"),
        subject,
    }
}

fn job_letter(resource: &MatchResult, profile: &UserProfile) -> String {
    let name = &profile.personal_info.name;
    let location = &profile.personal_info.location;
    let resource_name = &resource.name;
    let education = profile
        .education
        .level
        .map(|level| level.label())
        .unwrap_or(NOT_SPECIFIED);
    let skills = joined(profile.education.skills.first(5).iter().map(|s| s.label()));
    let interests = joined(profile.education.interests.first(3).iter().map(|s| s.label()));
    let accommodations = joined(
        profile
            .employment
            .work_preferences
            .first(3)
            .iter()
            .map(|s| s.label()),
    );
    let history = non_blank(&profile.employment.history).unwrap_or(DEFAULT_HISTORY);
    let goal = goal_phrase(profile);

    format!(
        "Dear Hiring Manager,

I am writing to express my interest in the {resource_name} opportunity. Based on my profile assessment, I believe I would be a strong fit for this role.

About me:
• Name: {name}
• Location: {location}
• Educational Background: {education}
• Key Skills: {skills}
• Areas of Interest: {interests}

I am particularly interested in this opportunity because it aligns with my goal of {goal}. I have experience with {history} and am eager to contribute to your team.

I would appreciate workplace accommodations including: {accommodations}.

I am available for an interview at your convenience and look forward to hearing from you.

Best regards,
{name}"
    )
}

fn support_letter(resource: &MatchResult, profile: &UserProfile) -> String {
    let name = &profile.personal_info.name;
    let location = &profile.personal_info.location;
    let resource_name = &resource.name;
    let disability_types = joined(profile.disability.types.iter().map(|t| t.label()));
    let priority = profile
        .needs
        .priority
        .map(|priority| priority.label())
        .unwrap_or(NOT_SPECIFIED);
    let situation = non_blank(&profile.disability.description).unwrap_or(DEFAULT_SITUATION);
    let needs = joined_with(
        profile.needs.financial.first(3).iter().map(|n| n.label()),
        "\n• ",
    );
    let goal = goal_phrase(profile);

    format!(
        "Dear Application Review Team,

I am writing to apply for support through the {resource_name}. I believe I meet the eligibility criteria and would greatly benefit from this program.

Personal Details:
• Name: {name}
• Location: {location}
• Disability Type: {disability_types}
• Current Priority: {priority}

My situation:
{situation}

Specific needs:
• {needs}

This support would help me achieve my goal of {goal} and improve my overall independence.

I have attached all required documentation and am available to provide additional information as needed.

Thank you for your consideration.

Sincerely,
{name}"
    )
}

fn goal_phrase(profile: &UserProfile) -> String {
    profile
        .needs
        .priority
        .map(|priority| priority.label().to_lowercase())
        .unwrap_or_else(|| DEFAULT_GOAL.to_string())
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn joined<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    joined_with(labels, ", ")
}

fn joined_with<'a>(labels: impl Iterator<Item = &'a str>, separator: &str) -> String {
    let labels: Vec<&str> = labels.collect();
    if labels.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        labels.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchingEngine;
    use crate::profile::{
        DisabilityType, EducationLevel, FinancialNeed, Priority, Skill, SubjectInterest,
        WorkInterest, WorkplaceAccommodation,
    };

    fn profile() -> UserProfile {
        let mut profile = UserProfile::default();
        profile.personal_info.name = "Avery Quinn".to_string();
        profile.personal_info.location = "Springfield".to_string();
        profile.disability.types.insert(DisabilityType::Physical);
        profile.education.level = Some(EducationLevel::Bachelors);
        for skill in [
            Skill::Writing,
            Skill::Research,
            Skill::Teaching,
            Skill::Languages,
            Skill::Mathematics,
            Skill::Organization,
        ] {
            profile.education.skills.insert(skill);
        }
        profile.education.interests.insert(SubjectInterest::Technology);
        profile.employment.interests.insert(WorkInterest::RemoteWork);
        profile
            .employment
            .work_preferences
            .insert(WorkplaceAccommodation::FlexibleHours);
        profile.needs.financial.insert(FinancialNeed::DisabilityPension);
        profile.needs.financial.insert(FinancialNeed::AssistiveTechnology);
        profile.needs.priority = Some(Priority::FindingEmployment);
        profile
    }

    fn result(id: &str, profile: &UserProfile) -> MatchResult {
        MatchingEngine::standard()
            .match_profile(profile)
            .into_iter()
            .find(|result| result.id == id)
            .expect("resource matched")
    }

    #[test]
    fn job_resources_get_hiring_manager_letter() {
        let profile = profile();
        let draft = draft_application(&result("inclusive-tech-jobs", &profile), &profile);

        assert_eq!(draft.kind, DraftKind::JobApplication);
        assert_eq!(draft.subject, "Application for Inclusive Tech Careers Program");
        assert!(draft
            .letter
            .starts_with("Subject: Application for Inclusive Tech Careers Program\n\nDear Hiring Manager,"));
        assert!(draft
            .letter
            .contains("• Key Skills: Writing, Research, Teaching, Languages, Mathematics\n"));
        assert!(draft.letter.contains("my goal of finding employment."));
        assert!(draft.letter.contains("experience with various relevant activities"));
        assert!(draft.letter.ends_with("Best regards,\nAvery Quinn"));
    }

    #[test]
    fn other_categories_get_review_team_letter() {
        let profile = profile();
        let draft = draft_application(&result("income-support-pension", &profile), &profile);

        assert_eq!(draft.kind, DraftKind::SupportApplication);
        assert!(draft.letter.contains("Dear Application Review Team,"));
        assert!(draft.letter.contains("• Disability Type: Physical disability\n"));
        assert!(draft.letter.contains(DEFAULT_SITUATION));
        assert!(draft
            .letter
            .contains("Specific needs:\n• Disability pension\n• Assistive technology\n"));
        assert!(draft.letter.ends_with("Sincerely,\nAvery Quinn"));
    }

    #[test]
    fn unset_answers_fall_back_to_placeholders() {
        let mut profile = profile();
        profile.needs.priority = None;
        profile.disability.description = "I use a wheelchair.".to_string();

        let draft = draft_application(&result("disability-income-support", &profile), &profile);
        assert!(draft.letter.contains("• Current Priority: Not specified\n"));
        assert!(draft.letter.contains("my goal of greater independence and"));
        assert!(draft.letter.contains("My situation:\nI use a wheelchair.\n"));
    }
}
