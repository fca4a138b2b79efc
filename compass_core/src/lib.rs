//! CareerCompass core: profile model, rule-based career recommendation
//! engine, roadmap progress tracking, and in-memory session state for a
//! single guidance run.

pub mod profile;
pub mod recommender;
pub mod roadmap;
pub mod session;
pub mod timeline;
pub mod types;

pub use profile::{parse_skills, toggle_interest};
pub use recommender::recommend;
pub use roadmap::{Milestone, RoadmapProgress, MILESTONES};
pub use session::{RecommendationSet, Route, Session, SessionError};
pub use timeline::{SessionEvent, SessionEventKind, SessionTimeline};
pub use types::{CareerRecommendation, Profile, Region, RegionParseError, INTEREST_TAGS};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
