use crate::commands::{render_draft, render_recommendations};
use clap::Args;
use support_match::catalog;
use support_match::error::AppError;
use support_match::matching::{CategoryCounts, CategoryFilter};
use support_match::profile::{
    CommunicationMode, DisabilityType, EducationLevel, FinancialNeed, IntakeStep, Priority,
    ProfileIntake, ProfileSection, Skill, SubjectInterest, SupportService, UserProfile,
    WorkInterest, WorkplaceAccommodation,
};
use support_match::recommendations::RecommendationService;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show only one category of matches (all, funding, program, job, support)
    #[arg(long, default_value = "all")]
    pub(crate) category: CategoryFilter,
    /// Skip drafting an application for the top match.
    #[arg(long)]
    pub(crate) skip_draft: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("=== Self-assessment ===");
    let profile = walk_intake()?;

    println!("\n=== Matching (offline catalog) ===");
    let service = RecommendationService::new(catalog::shared());
    let recommendations = service.recommend(&profile).await?;
    let ranked = recommendations.ranked();
    let shown = args.category.apply(&ranked);
    render_recommendations(
        &recommendations,
        &shown,
        CategoryCounts::tally(&ranked),
        args.category,
    );

    if args.skip_draft {
        return Ok(());
    }

    match ranked.first() {
        Some(top) => {
            println!("\n=== Application draft ===");
            render_draft(&service.draft_for(&profile, &top.id)?);
        }
        None => println!("\nNo match to draft an application for."),
    }

    Ok(())
}

/// Fill the sample profile one section at a time, the way the wizard would.
fn walk_intake() -> Result<UserProfile, AppError> {
    let mut intake = ProfileIntake::new();

    if let Err(err) = intake.advance() {
        println!("blocked: {err}");
    }

    loop {
        let section = intake.current_section();
        fill_section(intake.profile_mut(), section);
        let (step, total) = intake.progress();
        println!("[{step}/{total}] {} complete", section.label());

        if intake.advance()? == IntakeStep::ReadyToConfirm {
            break;
        }
    }

    Ok(intake.confirm()?)
}

fn fill_section(profile: &mut UserProfile, section: ProfileSection) {
    match section {
        ProfileSection::PersonalInfo => {
            let info = &mut profile.personal_info;
            info.name = "Alex Morgan".to_string();
            info.age = "29".to_string();
            info.location = "Brisbane".to_string();
            info.communication_mode = CommunicationMode::Text;
        }
        ProfileSection::Disability => {
            profile.disability.types.insert(DisabilityType::SensoryVision);
            profile.disability.description =
                "Low vision, I use a screen reader for most computer work.".to_string();
        }
        ProfileSection::Education => {
            let education = &mut profile.education;
            education.level = Some(EducationLevel::VocationalTraining);
            education.skills.insert(Skill::CustomerService);
            education.skills.insert(Skill::ComputerSkills);
            education.interests.insert(SubjectInterest::Technology);
        }
        ProfileSection::Employment => {
            let employment = &mut profile.employment;
            employment.history = "three years on a customer support help desk".to_string();
            employment.interests.insert(WorkInterest::PartTime);
            employment.interests.insert(WorkInterest::RemoteWork);
            employment
                .work_preferences
                .insert(WorkplaceAccommodation::AssistiveTechnology);
        }
        ProfileSection::Needs => {
            let needs = &mut profile.needs;
            needs.financial.insert(FinancialNeed::AssistiveTechnology);
            needs.financial.insert(FinancialNeed::TrainingFunding);
            needs.support.insert(SupportService::CareerCounseling);
            needs.priority = Some(Priority::FindingEmployment);
        }
    }
}
