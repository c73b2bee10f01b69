use serde::Serialize;

use crate::models::{FresherRecord, ScoreArea};
use crate::performance::{classify_individual_tier, round_half_up, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DevelopmentPotential {
    High,
    Medium,
    HighPriority,
}

impl DevelopmentPotential {
    pub fn from_score(overall_score: i64) -> Self {
        if overall_score > 70 {
            DevelopmentPotential::High
        } else if overall_score > 50 {
            DevelopmentPotential::Medium
        } else {
            DevelopmentPotential::HighPriority
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DevelopmentPotential::High => "High",
            DevelopmentPotential::Medium => "Medium",
            DevelopmentPotential::HighPriority => "High priority",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndividualAnalysis {
    pub name: String,
    pub email: String,
    pub department: String,
    pub overall_score: i64,
    pub tier: Tier,
    pub strongest_area: ScoreArea,
    pub weakest_area: ScoreArea,
    pub potential: DevelopmentPotential,
    pub recommendations: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortAnalysis {
    pub total_freshers: usize,
    pub average_quiz_score: i64,
    pub average_coding_score: i64,
    pub average_assignment_score: i64,
    pub average_overall_score: i64,
    /// Share of freshers with a quiz score above 70, as a rounded percentage.
    pub training_completion_rate: i64,
    pub individuals: Vec<IndividualAnalysis>,
    pub top_performers: Vec<String>,
    pub needs_attention: Vec<String>,
}

/// Mean of quiz, coding and assignment, rounded.
pub fn individual_overall(record: &FresherRecord) -> i64 {
    let sum = record.quiz_score as f64 + record.coding_score as f64 + record.assignment_score as f64;
    round_half_up(sum / 3.0)
}

pub fn strongest_area(record: &FresherRecord) -> ScoreArea {
    let (quiz, coding, assignment) = (record.quiz_score, record.coding_score, record.assignment_score);
    if quiz > coding && quiz > assignment {
        ScoreArea::Quiz
    } else if coding > assignment {
        ScoreArea::Coding
    } else {
        ScoreArea::Assignment
    }
}

pub fn weakest_area(record: &FresherRecord) -> ScoreArea {
    let (quiz, coding, assignment) = (record.quiz_score, record.coding_score, record.assignment_score);
    if quiz < coding && quiz < assignment {
        ScoreArea::Quiz
    } else if coding < assignment {
        ScoreArea::Coding
    } else {
        ScoreArea::Assignment
    }
}

fn individual_recommendations(record: &FresherRecord, overall_score: i64) -> Vec<String> {
    let mut recommendations = Vec::new();
    if record.quiz_score < 60 {
        recommendations.push("Focus on improving quiz performance through additional study sessions");
    }
    if record.coding_score < 60 {
        recommendations.push("Enhance coding skills through practice exercises and mentorship");
    }
    if record.assignment_score < 60 {
        recommendations.push("Improve assignment completion rates with better time management");
    }
    if overall_score >= 80 {
        recommendations.push("Consider advanced training modules to further develop skills");
    }
    if recommendations.is_empty() {
        recommendations.push("Maintain current performance level and continue skill development");
    }
    recommendations.into_iter().map(str::to_string).collect()
}

pub fn analyze_fresher(record: &FresherRecord) -> IndividualAnalysis {
    let overall_score = individual_overall(record);
    let strongest = strongest_area(record);
    let weakest = weakest_area(record);
    let potential = DevelopmentPotential::from_score(overall_score);

    let insights = vec![
        format!("Overall performance score: {overall_score}%"),
        format!("Strongest area: {}", strongest.label()),
        format!("Area needing attention: {}", weakest.label()),
        format!("Department: {}", record.department),
        format!("Skill development potential: {}", potential.label()),
    ];

    IndividualAnalysis {
        name: record.name.clone(),
        email: record.email.clone(),
        department: record.department.clone(),
        overall_score,
        tier: classify_individual_tier(overall_score as f64),
        strongest_area: strongest,
        weakest_area: weakest,
        potential,
        recommendations: individual_recommendations(record, overall_score),
        insights,
    }
}

fn mean_rounded(values: impl Iterator<Item = i64>, count: usize) -> i64 {
    let total: f64 = values.map(|value| value as f64).sum();
    round_half_up(total / count.max(1) as f64)
}

pub fn analyze_cohort(records: &[FresherRecord]) -> CohortAnalysis {
    let individuals: Vec<IndividualAnalysis> = records.iter().map(analyze_fresher).collect();
    let total = records.len();
    let passed_quiz = records.iter().filter(|record| record.quiz_score > 70).count();

    CohortAnalysis {
        total_freshers: total,
        average_quiz_score: mean_rounded(records.iter().map(|r| r.quiz_score), total),
        average_coding_score: mean_rounded(records.iter().map(|r| r.coding_score), total),
        average_assignment_score: mean_rounded(records.iter().map(|r| r.assignment_score), total),
        average_overall_score: mean_rounded(individuals.iter().map(|a| a.overall_score), total),
        training_completion_rate: round_half_up(passed_quiz as f64 / total.max(1) as f64 * 100.0),
        top_performers: individuals
            .iter()
            .filter(|analysis| analysis.overall_score > 80)
            .take(5)
            .map(|analysis| analysis.name.clone())
            .collect(),
        needs_attention: individuals
            .iter()
            .filter(|analysis| analysis.overall_score < 50)
            .take(5)
            .map(|analysis| analysis.name.clone())
            .collect(),
        individuals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::tests::fresher;

    #[test]
    fn overall_is_rounded_mean_of_three() {
        let record = fresher("Eng", 80, 71, 60, 100);
        // 211 / 3 = 70.33
        assert_eq!(individual_overall(&record), 70);
        assert_eq!(analyze_fresher(&record).tier, Tier::Good);
    }

    #[test]
    fn individual_tier_differs_from_assessment_table() {
        let analysis = analyze_fresher(&fresher("Eng", 45, 45, 45, 0));
        assert_eq!(analysis.overall_score, 45);
        assert_eq!(analysis.tier, Tier::NeedsImprovement);
    }

    #[test]
    fn strongest_and_weakest_follow_tie_rules() {
        let record = fresher("Eng", 90, 60, 70, 0);
        assert_eq!(strongest_area(&record), ScoreArea::Quiz);
        assert_eq!(weakest_area(&record), ScoreArea::Coding);

        let tied = fresher("Eng", 50, 50, 50, 0);
        assert_eq!(strongest_area(&tied), ScoreArea::Assignment);
        assert_eq!(weakest_area(&tied), ScoreArea::Assignment);
    }

    #[test]
    fn weak_categories_get_targeted_lines() {
        let analysis = analyze_fresher(&fresher("Eng", 40, 90, 55, 0));
        assert_eq!(
            analysis.recommendations,
            vec![
                "Focus on improving quiz performance through additional study sessions",
                "Improve assignment completion rates with better time management",
            ]
        );
    }

    #[test]
    fn strong_fresher_gets_advanced_modules_only() {
        let analysis = analyze_fresher(&fresher("Eng", 85, 85, 85, 0));
        assert_eq!(
            analysis.recommendations,
            vec!["Consider advanced training modules to further develop skills"]
        );
        assert_eq!(analysis.potential, DevelopmentPotential::High);
    }

    #[test]
    fn middling_fresher_gets_maintenance_line() {
        let analysis = analyze_fresher(&fresher("Eng", 70, 70, 70, 0));
        assert_eq!(
            analysis.recommendations,
            vec!["Maintain current performance level and continue skill development"]
        );
        assert_eq!(analysis.potential, DevelopmentPotential::Medium);
        assert_eq!(analysis.insights.len(), 5);
        assert_eq!(analysis.insights[0], "Overall performance score: 70%");
    }

    #[test]
    fn huge_scores_saturate_instead_of_overflowing() {
        let record = fresher("Eng", i64::MAX, i64::MAX, i64::MAX, 0);
        assert_eq!(individual_overall(&record), i64::MAX);

        let cohort = analyze_cohort(&[record.clone(), record]);
        assert_eq!(cohort.average_quiz_score, i64::MAX);
        assert_eq!(cohort.average_overall_score, i64::MAX);
        assert_eq!(cohort.top_performers.len(), 2);
    }

    #[test]
    fn cohort_summary_handles_empty_input() {
        let cohort = analyze_cohort(&[]);
        assert_eq!(cohort.total_freshers, 0);
        assert_eq!(cohort.average_overall_score, 0);
        assert_eq!(cohort.training_completion_rate, 0);
        assert!(cohort.individuals.is_empty());
    }

    #[test]
    fn cohort_lists_top_and_struggling_freshers() {
        let mut strong = fresher("Eng", 95, 90, 88, 100);
        strong.name = "Asha".to_string();
        let mut weak = fresher("Ops", 20, 30, 10, 0);
        weak.name = "Ravi".to_string();
        let cohort = analyze_cohort(&[strong, weak]);
        assert_eq!(cohort.top_performers, vec!["Asha"]);
        assert_eq!(cohort.needs_attention, vec!["Ravi"]);
        assert_eq!(cohort.training_completion_rate, 50);
        assert_eq!(cohort.average_quiz_score, 58);
    }
}
