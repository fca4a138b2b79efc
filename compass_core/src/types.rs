//! Core data structures for the career guidance session.
//!
//! A `Profile` is the normalized student input collected by the onboarding
//! form; a `CareerRecommendation` is one scored, justified suggestion
//! produced by the recommender. Both are plain values owned by the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Interest tags offered by the onboarding form.
///
/// The recommender tolerates arbitrary tag strings; this list only bounds
/// what the form presents for selection.
pub const INTEREST_TAGS: &[&str] = &[
    "Coding", "Design", "Business", "Science", "Arts", "Robotics", "Content",
];

/// Region the student lives in, used for localized guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Metro,
    Tier2,
    Rural,
}

impl Region {
    pub const ALL: &'static [Region] = &[Region::Metro, Region::Tier2, Region::Rural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Metro => "metro",
            Region::Tier2 => "tier2",
            Region::Rural => "rural",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Metro => "Metro",
            Region::Tier2 => "Tier 2",
            Region::Rural => "Rural",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region '{0}' (expected metro, tier2, or rural)")]
pub struct RegionParseError(pub String);

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metro" => Ok(Region::Metro),
            "tier2" => Ok(Region::Tier2),
            "rural" => Ok(Region::Rural),
            other => Err(RegionParseError(other.to_string())),
        }
    }
}

/// A student's self-reported profile, built up by the onboarding form and
/// consumed whole by the recommender.
///
/// Invariant: `skills` never contains empty or whitespace-only strings
/// (enforced by [`crate::profile::parse_skills`], the only producer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Free-text education level, e.g. "12th Grade" or "B.Tech CSE".
    pub grade: String,
    /// Selected interest tags in display order.
    pub interests: Vec<String>,
    /// Free-text skills, input order preserved, duplicates allowed.
    pub skills: Vec<String>,
    pub region: Option<Region>,
    /// Reserved for localization; not consulted by matching.
    pub language: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            grade: String::new(),
            interests: Vec::new(),
            skills: Vec::new(),
            region: None,
            language: "English".to_string(),
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One scored career suggestion.
///
/// `id` is a stable short identifier ("ds", "ux", ...) that never changes
/// for the same logical career; roadmap progress is keyed off it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    /// Static match score in [0, 100] assigned by the rule that produced
    /// this entry; not a computed probability.
    pub confidence: u8,
    /// Short rationale strings explaining the match.
    pub bullets: Vec<String>,
}
