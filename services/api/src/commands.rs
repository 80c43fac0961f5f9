use crate::infra::load_profile;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use support_match::catalog::{self, TemplateSummary};
use support_match::config::AppConfig;
use support_match::drafting::ApplicationDraft;
use support_match::error::AppError;
use support_match::matching::{CategoryCounts, CategoryFilter, MatchResult};
use support_match::recommendations::{
    AugmentationStatus, RecommendationService, Recommendations,
};

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Path to a completed profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Show only one category (all, funding, program, job, support)
    #[arg(long, default_value = "all")]
    pub(crate) category: CategoryFilter,
    /// Skip the remote recommender even when RECOMMENDER_URL is set
    #[arg(long)]
    pub(crate) offline: bool,
    /// Print the full result as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DraftArgs {
    /// Path to a completed profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Catalog resource id to draft an application for
    #[arg(long)]
    pub(crate) resource: String,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Show only one category (all, funding, program, job, support)
    #[arg(long, default_value = "all")]
    pub(crate) category: CategoryFilter,
}

pub(crate) async fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        profile,
        category,
        offline,
        json,
    } = args;

    let profile = load_profile(&profile)?;
    let service = if offline {
        RecommendationService::new(catalog::shared())
    } else {
        let config = AppConfig::load()?;
        RecommendationService::from_config(&config.recommender)?
    };

    let recommendations = service.recommend(&profile).await?;
    let ranked = recommendations.ranked();
    let counts = CategoryCounts::tally(&ranked);
    let shown = category.apply(&ranked);

    if json {
        let payload = json!({
            "generatedAt": recommendations.generated_at,
            "catalogVersion": recommendations.catalog_version,
            "category": category.to_string(),
            "counts": counts,
            "resources": shown,
            "augmentation": recommendations.augmentation,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_recommendations(&recommendations, &shown, counts, category);
    }

    Ok(())
}

pub(crate) fn run_draft(args: DraftArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let service = RecommendationService::new(catalog::shared());
    let draft = service.draft_for(&profile, &args.resource)?;
    render_draft(&draft);
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = catalog::shared();
    let rows: Vec<TemplateSummary> = catalog
        .all_templates()
        .iter()
        .filter(|template| args.category.allows(template.category))
        .map(|template| template.summary())
        .collect();

    println!(
        "Resource catalog v{} ({} of {} templates, filter: {})",
        catalog.version(),
        rows.len(),
        catalog.len(),
        args.category
    );
    for row in rows {
        println!(
            "- [{:>3}] {} ({}, {})",
            row.base_relevance_score,
            row.name,
            row.category.label(),
            row.id
        );
        println!("    applies when {}", row.applies_when);
        println!("    location: {}", row.location);
    }

    Ok(())
}

pub(crate) fn render_recommendations(
    recommendations: &Recommendations,
    shown: &[MatchResult],
    counts: CategoryCounts,
    category: CategoryFilter,
) {
    println!(
        "Recommendations generated {} (catalog v{})",
        recommendations.generated_at.format("%Y-%m-%d %H:%M UTC"),
        recommendations.catalog_version
    );
    println!(
        "Totals: {} all | {} funding | {} program | {} job | {} support",
        counts.all, counts.funding, counts.program, counts.job, counts.support
    );
    println!("Remote augmentation: {}", describe_augmentation(&recommendations.augmentation));

    if shown.is_empty() {
        println!("\nNo resources matched (filter: {category}).");
        return;
    }

    println!("\nShowing {} ({}):", category, shown.len());
    for resource in shown {
        render_resource(resource);
    }
}

fn render_resource(resource: &MatchResult) {
    println!(
        "- [{:>3}] {} ({}) | {}",
        resource.relevance_score,
        resource.name,
        resource.category.label(),
        resource.location
    );
    if !resource.description.is_empty() {
        println!("    {}", resource.description);
    }
    if !resource.benefits.is_empty() {
        println!("    benefits: {}", resource.benefits);
    }
    let contact = &resource.contact_info;
    if let Some(website) = &contact.website {
        println!("    website: {website}");
    }
    if let Some(phone) = &contact.phone {
        println!("    phone: {phone}");
    }
    if let Some(email) = &contact.email {
        println!("    email: {email}");
    }
}

pub(crate) fn render_draft(draft: &ApplicationDraft) {
    println!("--- draft for {} ---", draft.resource_id);
    println!("{}", draft.letter);
    println!("--- end draft ---");
}

fn describe_augmentation(status: &AugmentationStatus) -> String {
    match status {
        AugmentationStatus::Disabled => "disabled".to_string(),
        AugmentationStatus::Succeeded { count } => format!("{count} supplementary result(s)"),
        AugmentationStatus::Failed { reason } => format!("failed ({reason})"),
        AugmentationStatus::TimedOut { timeout_ms } => format!("timed out after {timeout_ms} ms"),
    }
}
