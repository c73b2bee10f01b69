use serde::Serialize;

use crate::performance::{Insight, Tier};

/// One trainee as seen by the scoring core, after boundary coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FresherRecord {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub skills: Vec<String>,
    pub quiz_score: i64,
    pub coding_score: i64,
    /// Leading integer of the `assignments` field (`"10/10"` reads as 10).
    pub assignment_score: i64,
    /// `completed/total` of the `assignments` field as a percentage.
    pub assignment_completion: f64,
    pub certification_score: i64,
    pub overall_progress: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAggregate {
    pub department: String,
    pub total_freshers: usize,
    pub avg_quiz_score: i64,
    pub avg_assignment_score: i64,
    pub avg_coding_score: i64,
    pub overall_score: i64,
    pub tier: Tier,
    pub insight: Insight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationSummary {
    pub department: String,
    pub total_freshers: usize,
    pub completed: usize,
    pub not_completed: usize,
    pub completion_rate: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreArea {
    Quiz,
    Coding,
    Assignment,
    Certification,
}

impl ScoreArea {
    pub fn label(self) -> &'static str {
        match self {
            ScoreArea::Quiz => "Quiz Performance",
            ScoreArea::Coding => "Coding Skills",
            ScoreArea::Assignment => "Assignment Completion",
            ScoreArea::Certification => "Certification Progress",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCount {
    pub tier: Tier,
    pub count: usize,
}
