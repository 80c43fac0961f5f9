use super::domain::{LocationPolicy, ResourceCategory, TemplateContact};
use super::rules::ApplicabilityRule;
use super::ResourceTemplate;
use crate::profile::{FinancialNeed, SubjectInterest};

pub(super) const STANDARD_CATALOG_VERSION: &str = "2025.1";

/// Declaration order doubles as the tie-break order for equal scores.
pub(super) fn standard_templates() -> Vec<ResourceTemplate> {
    vec![
        ResourceTemplate {
            id: "disability-income-support",
            name: "National Disability Insurance Scheme (NDIS)",
            category: ResourceCategory::Program,
            description: "Provides funding and support for people with permanent and significant disabilities",
            eligibility: vec!["Under 65", "Australian resident", "Permanent disability"],
            benefits: "Funding for supports, assistive technology, and capacity building",
            application_steps: vec![
                "Check eligibility criteria",
                "Gather medical evidence",
                "Complete application form",
                "Submit to NDIS office",
                "Attend planning meeting",
            ],
            contact: TemplateContact {
                website: Some("https://www.ndis.gov.au"),
                phone: Some("1800 800 110"),
                email: None,
            },
            base_relevance_score: 95,
            applicability: ApplicabilityRule::AnyDisabilityType,
            location: LocationPolicy::ProfileLocation,
        },
        ResourceTemplate {
            id: "employment-services",
            name: "Disability Employment Services (DES)",
            category: ResourceCategory::Program,
            description: "Helps people with disabilities find and keep a job",
            eligibility: vec![
                "Have a disability",
                "Registered with Centrelink",
                "Looking for work",
            ],
            benefits: "Job matching, workplace modifications, ongoing support",
            application_steps: vec![
                "Register with Centrelink",
                "Get medical evidence",
                "Find a DES provider",
                "Attend assessment",
                "Start job search support",
            ],
            contact: TemplateContact {
                website: Some("https://www.dese.gov.au/disability-employment-services"),
                phone: Some("132 850"),
                email: None,
            },
            base_relevance_score: 90,
            applicability: ApplicabilityRule::AnyWorkInterest,
            location: LocationPolicy::ProfileLocation,
        },
        ResourceTemplate {
            id: "income-support-pension",
            name: "Disability Support Pension",
            category: ResourceCategory::Funding,
            description: "Financial support for people who cannot work due to disability",
            eligibility: vec![
                "Permanent disability",
                "Unable to work",
                "Meet income/asset tests",
            ],
            benefits: "Fortnightly payments, health care card, rental assistance",
            application_steps: vec![
                "Check eligibility online",
                "Gather medical evidence",
                "Complete claim form",
                "Submit to Centrelink",
                "Attend medical assessment if required",
            ],
            contact: TemplateContact {
                website: Some("https://www.servicesaustralia.gov.au/disability-support-pension"),
                phone: Some("132 717"),
                email: None,
            },
            base_relevance_score: 85,
            applicability: ApplicabilityRule::FinancialNeed(FinancialNeed::DisabilityPension),
            location: LocationPolicy::ProfileLocation,
        },
        ResourceTemplate {
            id: "assistive-tech-grant",
            name: "Equipment and Technology Grants",
            category: ResourceCategory::Funding,
            description: "Funding for assistive technology and equipment",
            eligibility: vec![
                "Have a disability",
                "Technology improves independence",
                "Australian resident",
            ],
            benefits: "Up to $10,000 for assistive technology",
            application_steps: vec![
                "Get assessment from OT or specialist",
                "Obtain quotes for equipment",
                "Complete application form",
                "Submit supporting documents",
                "Wait for approval",
            ],
            contact: TemplateContact {
                website: Some("https://www.icannetwork.com.au/grants"),
                phone: Some("1800 422 622"),
                email: None,
            },
            base_relevance_score: 80,
            applicability: ApplicabilityRule::FinancialNeed(FinancialNeed::AssistiveTechnology),
            location: LocationPolicy::ProfileLocation,
        },
        ResourceTemplate {
            id: "inclusive-tech-jobs",
            name: "Inclusive Tech Careers Program",
            category: ResourceCategory::Job,
            description: "Technology roles with accessibility-focused companies",
            eligibility: vec![
                "Interest in technology",
                "Basic computer skills",
                "Willingness to learn",
            ],
            benefits: "Remote work options, assistive technology provided, career progression",
            application_steps: vec![
                "Complete skills assessment",
                "Update resume",
                "Apply online",
                "Attend virtual interview",
                "Complete skills training if offered",
            ],
            contact: TemplateContact {
                website: Some("https://www.example-inclusive-tech.com"),
                phone: None,
                email: Some("careers@inclusive-tech.com"),
            },
            base_relevance_score: 75,
            applicability: ApplicabilityRule::SubjectInterest(SubjectInterest::Technology),
            location: LocationPolicy::Fixed("Remote/Australia-wide"),
        },
        ResourceTemplate {
            id: "vocational-training-funding",
            name: "Vocational Rehabilitation Program",
            category: ResourceCategory::Program,
            description: "Funding for training and education to improve job prospects",
            eligibility: vec![
                "Have a disability",
                "Want to work or return to work",
                "Training improves employment prospects",
            ],
            benefits: "Course fees, materials, travel allowance, income support",
            application_steps: vec![
                "Contact rehabilitation counselor",
                "Develop rehabilitation plan",
                "Choose approved course",
                "Apply for funding",
                "Start training",
            ],
            contact: TemplateContact {
                website: Some("https://www.jobaccess.gov.au"),
                phone: Some("1800 464 800"),
                email: None,
            },
            base_relevance_score: 70,
            applicability: ApplicabilityRule::FinancialNeed(FinancialNeed::TrainingFunding),
            location: LocationPolicy::ProfileLocation,
        },
    ]
}
