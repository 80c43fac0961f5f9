use crate::profile::{
    DisabilityType, FinancialNeed, Priority, SubjectInterest, SupportService, TechnologyNeed,
    UserProfile, WorkInterest,
};

/// Declarative applicability predicate attached to a catalog entry.
///
/// Rules only read the profile; evaluating one never depends on any other template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicabilityRule {
    AnyDisabilityType,
    DisabilityType(DisabilityType),
    AnyWorkInterest,
    WorkInterest(WorkInterest),
    FinancialNeed(FinancialNeed),
    SubjectInterest(SubjectInterest),
    SupportService(SupportService),
    TechnologyNeed(TechnologyNeed),
    Priority(Priority),
    /// True when every inner rule holds (vacuously true when empty).
    AllOf(Vec<ApplicabilityRule>),
    /// True when at least one inner rule holds (false when empty).
    AnyOf(Vec<ApplicabilityRule>),
}

impl ApplicabilityRule {
    pub fn evaluate(&self, profile: &UserProfile) -> bool {
        match self {
            Self::AnyDisabilityType => !profile.disability.types.is_empty(),
            Self::DisabilityType(kind) => profile.disability.types.contains(kind),
            Self::AnyWorkInterest => !profile.employment.interests.is_empty(),
            Self::WorkInterest(interest) => profile.employment.interests.contains(interest),
            Self::FinancialNeed(need) => profile.needs.financial.contains(need),
            Self::SubjectInterest(interest) => profile.education.interests.contains(interest),
            Self::SupportService(service) => profile.needs.support.contains(service),
            Self::TechnologyNeed(need) => profile.needs.technology.contains(need),
            Self::Priority(priority) => profile.needs.priority == Some(*priority),
            Self::AllOf(rules) => rules.iter().all(|rule| rule.evaluate(profile)),
            Self::AnyOf(rules) => rules.iter().any(|rule| rule.evaluate(profile)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::AnyDisabilityType => "any disability type selected".to_string(),
            Self::DisabilityType(kind) => format!("disability types include \"{kind}\""),
            Self::AnyWorkInterest => "any type of work selected".to_string(),
            Self::WorkInterest(interest) => format!("work interests include \"{interest}\""),
            Self::FinancialNeed(need) => format!("financial needs include \"{need}\""),
            Self::SubjectInterest(interest) => {
                format!("subject interests include \"{interest}\"")
            }
            Self::SupportService(service) => format!("support services include \"{service}\""),
            Self::TechnologyNeed(need) => format!("technology needs include \"{need}\""),
            Self::Priority(priority) => format!("priority is \"{priority}\""),
            Self::AllOf(rules) => format!("all of ({})", describe_each(rules)),
            Self::AnyOf(rules) => format!("any of ({})", describe_each(rules)),
        }
    }
}

fn describe_each(rules: &[ApplicabilityRule]) -> String {
    rules
        .iter()
        .map(ApplicabilityRule::describe)
        .collect::<Vec<_>>()
        .join("; ")
}
