//! Coaching feedback built from all four category scores.
//!
//! The overall score here is the plain mean of quiz, coding, assignment and
//! certification, classified with the individual table (85/70/50). Per-category
//! notes use their own two cut-offs (85 and 70).

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::models::{FresherRecord, ScoreArea};
use crate::performance::{classify_individual_tier, Tier};

pub const MAX_FEEDBACK_RECOMMENDATIONS: usize = 5;

pub const MAINTAIN_PERFORMANCE: &str = "Maintain current performance level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAnalysis {
    pub area: ScoreArea,
    pub score: i64,
    pub status: AnalysisStatus,
    pub message: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedAnalysis {
    pub quiz: CategoryAnalysis,
    pub coding: CategoryAnalysis,
    pub assignment: CategoryAnalysis,
    pub certification: CategoryAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiFeedback {
    pub name: String,
    /// Mean of the four scores to one decimal place, ties to even.
    pub overall_score: f64,
    pub performance_level: Tier,
    pub performance_color: &'static str,
    pub performance_insight: &'static str,
    pub recommendations: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub motivational_message: &'static str,
    pub generated_at: NaiveDateTime,
    pub detailed_analysis: DetailedAnalysis,
}

struct CategoryNotes {
    area: ScoreArea,
    excellent: (&'static str, &'static str),
    good: (&'static str, &'static str),
    needs_improvement: (&'static str, &'static str),
}

impl CategoryNotes {
    fn analyze(&self, score: i64) -> CategoryAnalysis {
        let (status, (message, suggestion)) = if score >= 85 {
            (AnalysisStatus::Excellent, self.excellent)
        } else if score >= 70 {
            (AnalysisStatus::Good, self.good)
        } else {
            (AnalysisStatus::NeedsImprovement, self.needs_improvement)
        };
        CategoryAnalysis {
            area: self.area,
            score,
            status,
            message,
            suggestion,
        }
    }
}

const QUIZ_NOTES: CategoryNotes = CategoryNotes {
    area: ScoreArea::Quiz,
    excellent: ("Outstanding quiz performance!", "Consider helping others with quiz preparation"),
    good: ("Good quiz performance!", "Focus on areas where you scored lower"),
    needs_improvement: (
        "Quiz performance needs improvement",
        "Review fundamental concepts and practice regularly",
    ),
};

const CODING_NOTES: CategoryNotes = CategoryNotes {
    area: ScoreArea::Coding,
    excellent: ("Excellent coding skills!", "Take on more complex coding challenges"),
    good: ("Good coding foundation!", "Practice more coding problems"),
    needs_improvement: (
        "Coding skills need development",
        "Start with basic problems and gradually increase difficulty",
    ),
};

const ASSIGNMENT_NOTES: CategoryNotes = CategoryNotes {
    area: ScoreArea::Assignment,
    excellent: ("Outstanding assignment work!", "Consider mentoring others in assignments"),
    good: ("Good assignment completion!", "Focus on quality and attention to detail"),
    needs_improvement: (
        "Assignment completion needs improvement",
        "Improve time management and planning",
    ),
};

const CERTIFICATION_NOTES: CategoryNotes = CategoryNotes {
    area: ScoreArea::Certification,
    excellent: ("Excellent certification progress!", "Consider advanced certifications"),
    good: ("Good certification progress!", "Complete remaining certification modules"),
    needs_improvement: (
        "Certification progress needs attention",
        "Focus on completing certification requirements",
    ),
};

pub fn four_category_overall(record: &FresherRecord) -> f64 {
    let sum = record.quiz_score as f64
        + record.coding_score as f64
        + record.assignment_score as f64
        + record.certification_score as f64;
    sum / 4.0
}

pub fn level_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "#10B981",
        Tier::Good => "#3B82F6",
        Tier::Average => "#F59E0B",
        Tier::NeedsImprovement => "#EF4444",
    }
}

fn performance_insight(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Outstanding performance! You're demonstrating excellent understanding and application of concepts.",
        Tier::Good => "Good progress! You're on the right track with solid foundational knowledge.",
        Tier::Average => "Steady progress! Focus on strengthening core concepts and practice regularly.",
        Tier::NeedsImprovement => "Keep pushing forward! Every challenge is an opportunity to grow and improve.",
    }
}

fn motivational_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "🌟 You're absolutely crushing it! Your dedication and hard work are paying off. Keep inspiring others!",
        Tier::Good => "🚀 Great job! You're building a strong foundation. Keep up the excellent work!",
        Tier::Average => "💪 You're making steady progress! Remember, every expert was once a beginner. Keep going!",
        Tier::NeedsImprovement => "🔥 Every challenge is an opportunity to grow! You have the potential to achieve great things. Stay focused!",
    }
}

fn coaching_recommendations(record: &FresherRecord, overall: f64) -> Vec<String> {
    let mut recommendations = Vec::new();
    if overall < 80.0 {
        recommendations.extend([
            "Participate in additional practice sessions",
            "Seek mentorship from high-performing peers",
            "Attend extra training workshops",
        ]);
    }
    if overall >= 90.0 {
        recommendations.extend([
            "Consider taking on leadership roles",
            "Mentor other freshers",
            "Explore advanced training opportunities",
        ]);
    }
    if record.quiz_score < 80 {
        recommendations.extend([
            "Focus on improving quiz preparation strategies",
            "Review fundamental concepts regularly",
            "Practice with sample quiz questions",
        ]);
    }
    if record.assignment_score < 80 {
        recommendations.extend([
            "Improve time management for assignments",
            "Seek clarification on assignment requirements",
            "Break down complex assignments into smaller tasks",
        ]);
    }
    if record.coding_score < 80 {
        recommendations.extend([
            "Practice coding problems daily",
            "Participate in coding challenges",
            "Review coding best practices",
        ]);
    }
    if record.certification_score < 80 {
        recommendations.extend([
            "Focus on completing certification modules",
            "Practice hands-on exercises",
            "Review certification study materials",
        ]);
    }

    recommendations
        .into_iter()
        .take(MAX_FEEDBACK_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

fn improvement_areas(record: &FresherRecord) -> Vec<String> {
    let mut areas: Vec<String> = [
        (ScoreArea::Quiz, record.quiz_score),
        (ScoreArea::Coding, record.coding_score),
        (ScoreArea::Assignment, record.assignment_score),
        (ScoreArea::Certification, record.certification_score),
    ]
    .into_iter()
    .filter(|(_, score)| *score < 70)
    .map(|(area, _)| area.label().to_string())
    .collect();

    if areas.is_empty() {
        areas.push(MAINTAIN_PERFORMANCE.to_string());
    }
    areas
}

pub fn generate_ai_feedback(record: &FresherRecord, generated_at: NaiveDateTime) -> AiFeedback {
    let overall = four_category_overall(record);
    let level = classify_individual_tier(overall);

    debug!(fresher = %record.name, overall, level = %level, "coaching feedback generated");

    AiFeedback {
        name: record.name.clone(),
        overall_score: (overall * 10.0).round_ties_even() / 10.0,
        performance_level: level,
        performance_color: level_color(level),
        performance_insight: performance_insight(level),
        recommendations: coaching_recommendations(record, overall),
        improvement_areas: improvement_areas(record),
        motivational_message: motivational_message(level),
        generated_at,
        detailed_analysis: DetailedAnalysis {
            quiz: QUIZ_NOTES.analyze(record.quiz_score),
            coding: CODING_NOTES.analyze(record.coding_score),
            assignment: ASSIGNMENT_NOTES.analyze(record.assignment_score),
            certification: CERTIFICATION_NOTES.analyze(record.certification_score),
        },
    }
}
