//! Rule-based career recommendation engine.
//!
//! The engine is a pure function from a `Profile` to an ordered list of
//! `CareerRecommendation`s. Rules live in a fixed-order table; each rule is
//! an independent predicate that emits zero or more careers, and the output
//! order is rule order, never a sort by confidence. The list is recomputed
//! fresh on every call and is never empty: when no rule fires, a single
//! fallback entry is emitted.

use crate::types::{CareerRecommendation, Profile};
use log::debug;

/// A fixed career emitted by a matching rule. Scores and rationale bullets
/// are part of the rule definition itself, not derived from the profile.
struct CareerTemplate {
    id: &'static str,
    title: &'static str,
    confidence: u8,
    bullets: &'static [&'static str],
}

impl CareerTemplate {
    fn instantiate(&self) -> CareerRecommendation {
        CareerRecommendation {
            id: self.id.to_string(),
            title: self.title.to_string(),
            confidence: self.confidence,
            bullets: self.bullets.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// One entry in the ordered rule table.
///
/// A rule fires when the profile carries the exact interest tag, or when
/// any skill contains the keyword case-insensitively. Either trigger may
/// be absent; an absent trigger never matches.
struct MatchRule {
    name: &'static str,
    interest: Option<&'static str>,
    skill_keyword: Option<&'static str>,
    emits: &'static [CareerTemplate],
}

impl MatchRule {
    fn matches(&self, profile: &Profile) -> bool {
        let interest_hit = self
            .interest
            .is_some_and(|tag| profile.interests.iter().any(|i| i == tag));

        let skill_hit = self.skill_keyword.is_some_and(|keyword| {
            profile
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(keyword))
        });

        interest_hit || skill_hit
    }
}

/// Rule priority is product-defined: evaluation order here is the order
/// recommendations appear in, regardless of confidence.
const RULES: &[MatchRule] = &[
    MatchRule {
        name: "coding",
        interest: Some("Coding"),
        skill_keyword: Some("python"),
        emits: &[
            CareerTemplate {
                id: "ds",
                title: "Data Scientist",
                confidence: 91,
                bullets: &[
                    "Strong analytical thinking",
                    "Coding-friendly background",
                    "Project-based learning approach",
                ],
            },
            CareerTemplate {
                id: "fe",
                title: "Full-stack Developer",
                confidence: 85,
                bullets: &[
                    "Problem-solving mindset",
                    "Web development fundamentals",
                    "Technical versatility",
                ],
            },
        ],
    },
    MatchRule {
        name: "design",
        interest: Some("Design"),
        skill_keyword: Some("figma"),
        emits: &[CareerTemplate {
            id: "ux",
            title: "UI/UX Designer",
            confidence: 89,
            bullets: &[
                "Visual thinking abilities",
                "User empathy",
                "Creative problem solving",
            ],
        }],
    },
    MatchRule {
        name: "business",
        interest: Some("Business"),
        skill_keyword: None,
        emits: &[CareerTemplate {
            id: "pm",
            title: "Product Manager",
            confidence: 87,
            bullets: &[
                "Strategic thinking",
                "Communication skills",
                "Cross-functional collaboration",
            ],
        }],
    },
];

/// Emitted only when the table above produced nothing.
const FALLBACK: CareerTemplate = CareerTemplate {
    id: "ba",
    title: "Business Analyst",
    confidence: 75,
    bullets: &[
        "Analytical mindset",
        "Communication skills",
        "Process improvement focus",
    ],
};

/// Maps a profile to a ranked list of career recommendations.
///
/// Total over every well-formed profile, including the all-empty default.
/// The input is never mutated and the result is never empty; ids are
/// unique within one call.
pub fn recommend(profile: &Profile) -> Vec<CareerRecommendation> {
    let mut result = Vec::new();

    for rule in RULES {
        if rule.matches(profile) {
            debug!(
                "rule '{}' matched, emitting {} career(s)",
                rule.name,
                rule.emits.len()
            );
            result.extend(rule.emits.iter().map(CareerTemplate::instantiate));
        }
    }

    if result.is_empty() {
        debug!("no rule matched, falling back to '{}'", FALLBACK.id);
        result.push(FALLBACK.instantiate());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile_with(interests: &[&str], skills: &[&str]) -> Profile {
        Profile {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Profile::default()
        }
    }

    fn ids(recs: &[CareerRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_profile_falls_back_to_business_analyst() {
        let recs = recommend(&Profile::default());
        assert_eq!(ids(&recs), vec!["ba"]);
        assert_eq!(recs[0].confidence, 75);
        assert_eq!(recs[0].title, "Business Analyst");
    }

    #[test]
    fn test_coding_interest_emits_ds_then_fe() {
        let recs = recommend(&profile_with(&["Coding"], &[]));
        assert_eq!(ids(&recs), vec!["ds", "fe"]);
        assert_eq!(recs[0].confidence, 91);
        assert_eq!(recs[1].confidence, 85);
    }

    #[test]
    fn test_python_skill_matches_case_insensitively() {
        let upper = recommend(&profile_with(&[], &["PYTHON"]));
        let embedded = recommend(&profile_with(&[], &["python scripting"]));
        assert_eq!(ids(&upper), vec!["ds", "fe"]);
        assert_eq!(ids(&upper), ids(&embedded));
    }

    #[test]
    fn test_figma_skill_triggers_designer() {
        let recs = recommend(&profile_with(&[], &["Figma prototyping"]));
        assert_eq!(ids(&recs), vec!["ux"]);
        assert_eq!(recs[0].confidence, 89);
    }

    #[test]
    fn test_all_rules_fire_in_table_order() {
        let recs = recommend(&profile_with(&["Coding", "Design", "Business"], &[]));
        assert_eq!(ids(&recs), vec!["ds", "fe", "ux", "pm"]);
        let confidences: Vec<u8> = recs.iter().map(|r| r.confidence).collect();
        assert_eq!(confidences, vec![91, 85, 89, 87]);
    }

    #[test]
    fn test_fallback_never_combines_with_rule_output() {
        let recs = recommend(&profile_with(&["Business"], &[]));
        assert_eq!(ids(&recs), vec!["pm"]);
        assert!(!recs.iter().any(|r| r.id == "ba"));
    }

    #[test]
    fn test_unknown_interest_tags_are_tolerated() {
        let recs = recommend(&profile_with(&["Astrology", ""], &["  "]));
        assert_eq!(ids(&recs), vec!["ba"]);
    }

    #[test]
    fn test_ids_unique_per_invocation() {
        let recs = recommend(&profile_with(
            &["Coding", "Design", "Business"],
            &["python", "figma"],
        ));
        let unique: HashSet<&str> = ids(&recs).into_iter().collect();
        assert_eq!(unique.len(), recs.len());
    }

    #[test]
    fn test_input_profile_is_untouched() {
        let profile = profile_with(&["Design"], &["Figma"]);
        let before = profile.clone();
        let _ = recommend(&profile);
        assert_eq!(profile, before);
    }

    #[test]
    fn test_every_recommendation_carries_rationale() {
        for recs in [
            recommend(&Profile::default()),
            recommend(&profile_with(&["Coding", "Design", "Business"], &[])),
        ] {
            for rec in recs {
                assert!((2..=3).contains(&rec.bullets.len()), "id {}", rec.id);
                assert!(rec.confidence <= 100);
            }
        }
    }
}
