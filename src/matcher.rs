//! Skill-to-course matching.
//!
//! A course scores by how many of its required skill tokens are covered by at
//! least one input skill, where "covered" is substring containment in either
//! direction after lowercasing. The best course is the one with the highest
//! covered fraction; ties go to the earlier catalog entry.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{CourseDefinition, VideoResource};

pub const NO_COURSE_AVAILABLE: &str = "No course available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecommendation {
    pub course_name: String,
    pub duration: String,
}

impl CourseRecommendation {
    pub fn none() -> Self {
        Self {
            course_name: NO_COURSE_AVAILABLE.to_string(),
            duration: NO_COURSE_AVAILABLE.to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.course_name != NO_COURSE_AVAILABLE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    #[serde(flatten)]
    pub recommendation: CourseRecommendation,
    pub videos: Vec<VideoResource>,
}

#[derive(Debug, Clone, Copy)]
pub struct CourseMatch<'a> {
    pub course: &'a CourseDefinition,
    pub matched: usize,
}

impl CourseMatch<'_> {
    pub fn match_fraction(&self) -> f64 {
        if self.course.required_skills.is_empty() {
            return 0.0;
        }
        self.matched as f64 / self.course.required_skills.len() as f64
    }

    // Exact fraction comparison: a/b vs c/d as a*d vs c*b.
    fn cmp_fraction(&self, other: &CourseMatch<'_>) -> Ordering {
        let lhs = self.matched * other.course.required_skills.len();
        let rhs = other.matched * self.course.required_skills.len();
        lhs.cmp(&rhs)
    }
}

/// Lowercases only. A blank input stays in and, being a substring of every
/// token, satisfies every course skill.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills.iter().map(|skill| skill.to_lowercase()).collect()
}

/// Number of distinct course skills covered by any of the normalized inputs.
pub fn matched_count(normalized: &[String], course: &CourseDefinition) -> usize {
    course
        .required_skills
        .iter()
        .filter(|course_skill| {
            normalized.iter().any(|input| {
                input.contains(course_skill.as_str()) || course_skill.contains(input.as_str())
            })
        })
        .count()
}

/// Scores every catalog entry, in catalog order.
pub fn score_catalog<'a>(skills: &[String], catalog: &'a [CourseDefinition]) -> Vec<CourseMatch<'a>> {
    let normalized = normalize_skills(skills);
    catalog
        .iter()
        .map(|course| CourseMatch {
            course,
            matched: matched_count(&normalized, course),
        })
        .collect()
}

pub fn best_match<'a>(skills: &[String], catalog: &'a [CourseDefinition]) -> Option<CourseMatch<'a>> {
    let mut best: Option<CourseMatch<'a>> = None;

    for candidate in score_catalog(skills, catalog) {
        if candidate.matched == 0 {
            continue;
        }
        best = match best {
            Some(current) if candidate.cmp_fraction(&current) != Ordering::Greater => Some(current),
            _ => Some(candidate),
        };
    }

    if let Some(found) = &best {
        debug!(
            course = %found.course.name,
            matched = found.matched,
            required = found.course.required_skills.len(),
            "course match selected"
        );
    }
    best
}

pub fn recommend(skills: &[String], catalog: &[CourseDefinition]) -> CourseRecommendation {
    match best_match(skills, catalog) {
        Some(found) => CourseRecommendation {
            course_name: found.course.name.clone(),
            duration: found.course.duration.clone(),
        },
        None => CourseRecommendation::none(),
    }
}

pub fn recommended_course_name(skills: &[String], catalog: &[CourseDefinition]) -> String {
    recommend(skills, catalog).course_name
}

pub fn recommend_with_resources(skills: &[String], catalog: &[CourseDefinition]) -> RecommendationBundle {
    match best_match(skills, catalog) {
        Some(found) => RecommendationBundle {
            recommendation: CourseRecommendation {
                course_name: found.course.name.clone(),
                duration: found.course.duration.clone(),
            },
            videos: found.course.video_resources.clone(),
        },
        None => RecommendationBundle {
            recommendation: CourseRecommendation::none(),
            videos: Vec::new(),
        },
    }
}
