use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MatchResult;
use crate::catalog::{ResourceCategory, UnknownCategory};

/// Browsing filter over a ranked result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ResourceCategory),
}

impl CategoryFilter {
    pub fn allows(self, category: ResourceCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Keep matching results, preserving their order.
    pub fn apply(self, results: &[MatchResult]) -> Vec<MatchResult> {
        results
            .iter()
            .filter(|result| self.allows(result.category))
            .cloned()
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Only)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Result totals per category, shown on the filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub funding: usize,
    pub program: usize,
    pub job: usize,
    pub support: usize,
}

impl CategoryCounts {
    pub fn tally(results: &[MatchResult]) -> Self {
        results.iter().fold(Self::default(), |mut counts, result| {
            counts.all += 1;
            match result.category {
                ResourceCategory::Funding => counts.funding += 1,
                ResourceCategory::Program => counts.program += 1,
                ResourceCategory::Job => counts.job += 1,
                ResourceCategory::Support => counts.support += 1,
            }
            counts
        })
    }

    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(ResourceCategory::Funding) => self.funding,
            CategoryFilter::Only(ResourceCategory::Program) => self.program,
            CategoryFilter::Only(ResourceCategory::Job) => self.job,
            CategoryFilter::Only(ResourceCategory::Support) => self.support,
        }
    }
}

/// Detail-view lookup.
pub fn find_result<'a>(results: &'a [MatchResult], id: &str) -> Option<&'a MatchResult> {
    results.iter().find(|result| result.id == id)
}
