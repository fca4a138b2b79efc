//! Profile shaping operations consumed by the form layer.
//!
//! The form never mutates a `Profile` in place; every edit produces a new
//! value via the `with_*` helpers, mirroring how the onboarding surface
//! replaces the whole profile on each change.

use crate::types::Profile;

/// Toggles an interest tag: removed if present, appended otherwise.
///
/// Returns a new list; relative order of the remaining tags is preserved
/// and no duplicates are introduced.
pub fn toggle_interest(interests: &[String], tag: &str) -> Vec<String> {
    if interests.iter().any(|i| i == tag) {
        interests
            .iter()
            .filter(|i| i.as_str() != tag)
            .cloned()
            .collect()
    } else {
        let mut next = interests.to_vec();
        next.push(tag.to_string());
        next
    }
}

/// Parses a raw comma-separated skills string into trimmed, non-empty
/// entries. Input order is preserved and duplicates pass through; the
/// recommender only needs contains-style matching.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Profile {
    /// Returns a copy of the profile with the given interest tag toggled.
    pub fn with_interest_toggled(&self, tag: &str) -> Profile {
        Profile {
            interests: toggle_interest(&self.interests, tag),
            ..self.clone()
        }
    }

    /// Returns a copy of the profile with skills replaced from raw
    /// comma-separated input.
    pub fn with_skills_raw(&self, raw: &str) -> Profile {
        Profile {
            skills: parse_skills(raw),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_adds_missing_tag() {
        let interests = tags(&["Coding"]);
        let next = toggle_interest(&interests, "Design");
        assert_eq!(next, tags(&["Coding", "Design"]));
    }

    #[test]
    fn test_toggle_removes_present_tag() {
        let interests = tags(&["Coding", "Design", "Arts"]);
        let next = toggle_interest(&interests, "Design");
        assert_eq!(next, tags(&["Coding", "Arts"]));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let interests = tags(&["Coding", "Business"]);
        let once = toggle_interest(&interests, "Science");
        let twice = toggle_interest(&once, "Science");
        assert_eq!(twice, interests);
    }

    #[test]
    fn test_parse_skills_trims_and_drops_empty() {
        let skills = parse_skills("Python,  Figma ,, Communication");
        assert_eq!(skills, tags(&["Python", "Figma", "Communication"]));
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("  , ,  ").is_empty());
    }

    #[test]
    fn test_parse_skills_keeps_duplicates_and_order() {
        let skills = parse_skills("SQL, Python, SQL");
        assert_eq!(skills, tags(&["SQL", "Python", "SQL"]));
    }

    #[test]
    fn test_profile_with_interest_toggled_leaves_original() {
        let profile = Profile {
            interests: tags(&["Coding"]),
            ..Profile::default()
        };
        let next = profile.with_interest_toggled("Coding");
        assert!(next.interests.is_empty());
        assert_eq!(profile.interests, tags(&["Coding"]));
    }

    #[test]
    fn test_profile_with_skills_raw() {
        let profile = Profile::default().with_skills_raw("Python, Excel");
        assert_eq!(profile.skills, tags(&["Python", "Excel"]));
    }
}
