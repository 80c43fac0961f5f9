//! Invariants of catalog matching over arbitrary profiles.
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use std::sync::Arc;
use support_match::profile::{
    DisabilityType, FinancialNeed, SubjectInterest, TagSet, UserProfile, WorkInterest,
};
use support_match::{MatchingEngine, ResourceCatalog, ResourceTemplate};

fn tags<T: Copy + PartialEq + std::fmt::Debug + 'static>(
    all: &'static [T],
) -> impl Strategy<Value = TagSet<T>> {
    subsequence(all.to_vec(), 0..=all.len()).prop_map(TagSet::from)
}

prop_compose! {
    fn arb_profile()(
        location in "[A-Za-z ]{0,16}",
        disability in tags(DisabilityType::ALL),
        work in tags(WorkInterest::ALL),
        financial in tags(FinancialNeed::ALL),
        subjects in tags(SubjectInterest::ALL),
    ) -> UserProfile {
        let mut profile = UserProfile::default();
        profile.personal_info.location = location;
        profile.disability.types = disability;
        profile.employment.interests = work;
        profile.needs.financial = financial;
        profile.education.interests = subjects;
        profile
    }
}

proptest! {
    #[test]
    fn matching_is_deterministic(profile in arb_profile()) {
        let engine = MatchingEngine::standard();
        prop_assert_eq!(engine.match_profile(&profile), engine.match_profile(&profile));
    }

    #[test]
    fn scores_never_increase(profile in arb_profile()) {
        let results = MatchingEngine::standard().match_profile(&profile);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn results_are_exactly_the_applicable_templates(profile in arb_profile()) {
        let engine = MatchingEngine::standard();
        let results = engine.match_profile(&profile);

        for template in engine.catalog().all_templates() {
            let emitted = results.iter().filter(|result| result.id == template.id).count();
            let expected = usize::from(template.applies_to(&profile));
            prop_assert_eq!(emitted, expected, "template {}", template.id);
        }
    }

    #[test]
    fn locations_follow_template_policy(profile in arb_profile()) {
        let engine = MatchingEngine::standard();
        for result in engine.match_profile(&profile) {
            let expected = if result.id == "inclusive-tech-jobs" {
                "Remote/Australia-wide"
            } else {
                profile.personal_info.location.as_str()
            };
            prop_assert_eq!(result.location.as_str(), expected, "resource {}", result.id);
        }
    }

    #[test]
    fn equal_scores_keep_catalog_order(
        profile in arb_profile(),
        scores in vec(select(vec![70u8, 80, 90]), 6),
    ) {
        let templates: Vec<ResourceTemplate> = ResourceCatalog::standard()
            .all_templates()
            .iter()
            .zip(scores)
            .map(|(template, score)| ResourceTemplate {
                base_relevance_score: score,
                ..template.clone()
            })
            .collect();
        let order: Vec<&'static str> = templates.iter().map(|template| template.id).collect();
        let catalog = ResourceCatalog::from_templates("ties", templates).expect("valid catalog");
        let results = MatchingEngine::new(Arc::new(catalog)).match_profile(&profile);

        let position = |id: &str| order.iter().position(|candidate| *candidate == id);
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
            if pair[0].relevance_score == pair[1].relevance_score {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }
}
