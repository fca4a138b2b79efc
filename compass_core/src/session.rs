//! Session state for one guidance run.
//!
//! The session is the single owner of all mutable state: current route,
//! the profile under edit, the latest recommendation list, the selected
//! career, and roadmap progress. The presentation layer holds a `Session`
//! value and drives it through the operations below; the recommender
//! itself stays stateless.

use crate::recommender;
use crate::roadmap::RoadmapProgress;
use crate::timeline::{SessionEvent, SessionEventKind, SessionTimeline};
use crate::types::{CareerRecommendation, Profile};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Top-level views of the application, in the order a first-time user
/// walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Onboarding,
    Dashboard,
    Roadmap,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no career with id '{id}' in the current recommendations")]
    UnknownCareer { id: String },
    #[error("no roadmap is active; select a career first")]
    NoActiveRoadmap,
    #[error("unknown milestone '{key}'")]
    UnknownMilestone { key: String },
}

/// One engine run's output, stamped with when it was produced. Replaced
/// wholesale on every submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub generated_at: DateTime<Utc>,
    pub careers: Vec<CareerRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub route: Route,
    pub profile: Profile,
    pub recommendations: Option<RecommendationSet>,
    pub selected: Option<CareerRecommendation>,
    pub progress: Option<RoadmapProgress>,
    pub timeline: SessionTimeline,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            route: Route::Home,
            profile: Profile::default(),
            recommendations: None,
            selected: None,
            progress: None,
            timeline: SessionTimeline::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with an already-shaped profile (e.g. loaded from
    /// a JSON file on the command line).
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Runs the recommender once over the current profile, atomically
    /// replacing any previous recommendation list, and moves to the
    /// dashboard. Returns the number of matched career paths.
    pub fn submit_profile(&mut self) -> usize {
        let careers = recommender::recommend(&self.profile);
        let count = careers.len();
        info!("profile submitted, {} career path(s) matched", count);

        // Stale selection and progress refer to the replaced list.
        self.selected = None;
        self.progress = None;
        self.recommendations = Some(RecommendationSet {
            generated_at: Utc::now(),
            careers,
        });
        self.route = Route::Dashboard;
        self.timeline.record(SessionEvent::new(
            SessionEventKind::ProfileSubmitted,
            &format!("Matched {} career path(s)", count),
        ));
        count
    }

    pub fn careers(&self) -> &[CareerRecommendation] {
        self.recommendations
            .as_ref()
            .map(|set| set.careers.as_slice())
            .unwrap_or(&[])
    }

    /// Selects a career from the current recommendation list, starting a
    /// fresh all-false roadmap for it, and moves to the roadmap view.
    pub fn select_career(&mut self, id: &str) -> Result<CareerRecommendation, SessionError> {
        let career = self
            .careers()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownCareer { id: id.to_string() })?;

        info!("career '{}' selected, roadmap initialized", career.id);
        self.progress = Some(RoadmapProgress::for_career(&career));
        self.selected = Some(career.clone());
        self.route = Route::Roadmap;
        self.timeline.record(
            SessionEvent::new(
                SessionEventKind::CareerSelected,
                &format!("Selected {}", career.title),
            )
            .with_metadata(json!({ "career_id": career.id })),
        );
        Ok(career)
    }

    /// Flips one milestone on the active roadmap and returns its new
    /// completion state.
    pub fn toggle_milestone(&mut self, key: &str) -> Result<bool, SessionError> {
        let progress = self.progress.as_mut().ok_or(SessionError::NoActiveRoadmap)?;
        let now_done = progress
            .toggle(key)
            .ok_or_else(|| SessionError::UnknownMilestone {
                key: key.to_string(),
            })?;

        let kind = if now_done {
            SessionEventKind::MilestoneCompleted
        } else {
            SessionEventKind::MilestoneReopened
        };
        let verb = if now_done { "Completed" } else { "Reopened" };
        self.timeline
            .record(SessionEvent::new(kind, &format!("{} {}", verb, key)));
        Ok(now_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coding_session() -> Session {
        let mut session = Session::new();
        session.profile = Profile {
            name: "Asha".to_string(),
            interests: vec!["Coding".to_string()],
            ..Profile::default()
        };
        session
    }

    #[test]
    fn test_submit_routes_to_dashboard_and_records_event() {
        let mut session = coding_session();
        let count = session.submit_profile();

        assert_eq!(count, 2);
        assert_eq!(session.route, Route::Dashboard);
        assert_eq!(session.careers().len(), 2);
        assert_eq!(
            session
                .timeline
                .events_of_kind(SessionEventKind::ProfileSubmitted)
                .len(),
            1
        );
    }

    #[test]
    fn test_submit_replaces_previous_list() {
        let mut session = coding_session();
        session.submit_profile();
        session.select_career("ds").unwrap();

        session.profile.interests = vec!["Business".to_string()];
        let count = session.submit_profile();

        assert_eq!(count, 1);
        assert_eq!(session.careers()[0].id, "pm");
        assert!(session.selected.is_none());
        assert!(session.progress.is_none());
    }

    #[test]
    fn test_submit_is_total_for_default_profile() {
        let mut session = Session::new();
        let count = session.submit_profile();
        assert_eq!(count, 1);
        assert_eq!(session.careers()[0].id, "ba");
    }

    #[test]
    fn test_select_career_initializes_roadmap() {
        let mut session = coding_session();
        session.submit_profile();

        let career = session.select_career("ds").unwrap();
        assert_eq!(career.title, "Data Scientist");
        assert_eq!(session.route, Route::Roadmap);

        let progress = session.progress.as_ref().unwrap();
        assert_eq!(progress.career_id, "ds");
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn test_select_unknown_career_errors_and_leaves_state() {
        let mut session = coding_session();
        session.submit_profile();

        let err = session.select_career("ux").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownCareer {
                id: "ux".to_string()
            }
        );
        assert_eq!(session.route, Route::Dashboard);
        assert!(session.selected.is_none());
        assert!(session.progress.is_none());
    }

    #[test]
    fn test_toggle_milestone_reports_new_state() {
        let mut session = coding_session();
        session.submit_profile();
        session.select_career("fe").unwrap();

        assert_eq!(session.toggle_milestone("Foundations"), Ok(true));
        assert_eq!(session.toggle_milestone("Foundations"), Ok(false));
        assert_eq!(
            session
                .timeline
                .events_of_kind(SessionEventKind::MilestoneCompleted)
                .len(),
            1
        );
        assert_eq!(
            session
                .timeline
                .events_of_kind(SessionEventKind::MilestoneReopened)
                .len(),
            1
        );
    }

    #[test]
    fn test_toggle_without_roadmap_errors() {
        let mut session = Session::new();
        assert_eq!(
            session.toggle_milestone("Foundations"),
            Err(SessionError::NoActiveRoadmap)
        );
    }

    #[test]
    fn test_toggle_unknown_milestone_errors() {
        let mut session = coding_session();
        session.submit_profile();
        session.select_career("ds").unwrap();
        assert_eq!(
            session.toggle_milestone("Internship"),
            Err(SessionError::UnknownMilestone {
                key: "Internship".to_string()
            })
        );
    }

    #[test]
    fn test_one_timeline_event_per_operation() {
        let mut session = coding_session();
        session.submit_profile();
        session.select_career("ds").unwrap();
        session.toggle_milestone("Foundations").unwrap();
        assert_eq!(session.timeline.len(), 3);
    }
}
