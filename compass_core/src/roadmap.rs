//! Roadmap progress tracking for a selected career path.
//!
//! Every selection starts from the same fixed milestone set, all unchecked.
//! Progress is a plain in-memory value: it is rebuilt from scratch whenever
//! a career is selected and discarded with the session.

use crate::types::CareerRecommendation;
use serde::{Deserialize, Serialize};

/// Fixed milestone set, in display order: key, description, suggested
/// duration in months.
pub const MILESTONES: &[(&str, &str, u8)] = &[
    ("Foundations", "Build core knowledge and understanding", 1),
    ("Core Project", "Apply skills in a real-world project", 2),
    ("Deploy Portfolio", "Showcase your work and skills", 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub key: String,
    pub description: String,
    pub suggested_months: u8,
    pub completed: bool,
}

/// Per-milestone completion state for one selected career.
///
/// Entries keep a fixed order so display and serialization stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapProgress {
    pub career_id: String,
    pub career_title: String,
    pub milestones: Vec<Milestone>,
}

impl RoadmapProgress {
    /// Initializes all-false progress for the given career.
    pub fn for_career(career: &CareerRecommendation) -> Self {
        Self {
            career_id: career.id.clone(),
            career_title: career.title.clone(),
            milestones: MILESTONES
                .iter()
                .map(|(key, description, months)| Milestone {
                    key: key.to_string(),
                    description: description.to_string(),
                    suggested_months: *months,
                    completed: false,
                })
                .collect(),
        }
    }

    /// Flips exactly one milestone and returns its new completion state,
    /// or `None` when the key is unknown.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let entry = self.milestones.iter_mut().find(|m| m.key == key)?;
        entry.completed = !entry.completed;
        Some(entry.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    pub fn total(&self) -> usize {
        self.milestones.len()
    }

    /// Overall completion in percent, 0 to 100.
    pub fn percent_complete(&self) -> u16 {
        if self.milestones.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.total()) as u16
    }

    pub fn is_complete(&self) -> bool {
        !self.milestones.is_empty() && self.completed_count() == self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_career() -> CareerRecommendation {
        CareerRecommendation {
            id: "ds".to_string(),
            title: "Data Scientist".to_string(),
            confidence: 91,
            bullets: vec!["Strong analytical thinking".to_string()],
        }
    }

    #[test]
    fn test_initializes_fixed_milestones_all_false() {
        let progress = RoadmapProgress::for_career(&sample_career());
        let keys: Vec<&str> = progress.milestones.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["Foundations", "Core Project", "Deploy Portfolio"]);
        assert!(progress.milestones.iter().all(|m| !m.completed));
        assert_eq!(progress.career_id, "ds");
    }

    #[test]
    fn test_toggle_flips_single_entry() {
        let mut progress = RoadmapProgress::for_career(&sample_career());
        assert_eq!(progress.toggle("Core Project"), Some(true));
        assert_eq!(progress.completed_count(), 1);
        assert!(!progress.milestones[0].completed);
        assert!(progress.milestones[1].completed);
        assert!(!progress.milestones[2].completed);
    }

    #[test]
    fn test_toggle_twice_restores_all_false() {
        let mut progress = RoadmapProgress::for_career(&sample_career());
        progress.toggle("Foundations");
        progress.toggle("Foundations");
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_key_is_none() {
        let mut progress = RoadmapProgress::for_career(&sample_career());
        assert_eq!(progress.toggle("Internship"), None);
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn test_percent_and_completion() {
        let mut progress = RoadmapProgress::for_career(&sample_career());
        assert_eq!(progress.percent_complete(), 0);
        progress.toggle("Foundations");
        assert_eq!(progress.percent_complete(), 33);
        progress.toggle("Core Project");
        progress.toggle("Deploy Portfolio");
        assert_eq!(progress.percent_complete(), 100);
        assert!(progress.is_complete());
    }
}
