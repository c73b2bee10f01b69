//! Department and per-fresher performance scoring.
//!
//! Three threshold tables coexist and are selected by the call site, never
//! merged: the assessment-scores view (90/70/40), the individual analysis
//! (85/70/50) and the downloadable report (90/80/70).

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::models::{CertificationSummary, DepartmentAggregate, FresherRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    NeedsImprovement,
    Average,
    Good,
    Excellent,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Average,
        Tier::NeedsImprovement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Average => "Average",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) for the three upper tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl TierThresholds {
    pub fn classify(&self, score: f64) -> Tier {
        if score >= self.excellent {
            Tier::Excellent
        } else if score >= self.good {
            Tier::Good
        } else if score >= self.average {
            Tier::Average
        } else {
            Tier::NeedsImprovement
        }
    }
}

pub const ASSESSMENT_THRESHOLDS: TierThresholds = TierThresholds {
    excellent: 90.0,
    good: 70.0,
    average: 40.0,
};

pub const INDIVIDUAL_THRESHOLDS: TierThresholds = TierThresholds {
    excellent: 85.0,
    good: 70.0,
    average: 50.0,
};

pub const REPORT_THRESHOLDS: TierThresholds = TierThresholds {
    excellent: 90.0,
    good: 80.0,
    average: 70.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierContext {
    Assessment,
    Individual,
    Report,
}

impl TierContext {
    pub fn thresholds(self) -> TierThresholds {
        match self {
            TierContext::Assessment => ASSESSMENT_THRESHOLDS,
            TierContext::Individual => INDIVIDUAL_THRESHOLDS,
            TierContext::Report => REPORT_THRESHOLDS,
        }
    }
}

pub fn classify(score: f64, context: TierContext) -> Tier {
    context.thresholds().classify(score)
}

pub fn classify_assessment_tier(score: f64) -> Tier {
    ASSESSMENT_THRESHOLDS.classify(score)
}

pub fn classify_individual_tier(score: f64) -> Tier {
    INDIVIDUAL_THRESHOLDS.classify(score)
}

pub fn classify_report_tier(score: f64) -> Tier {
    REPORT_THRESHOLDS.classify(score)
}

/// Rounds halves toward positive infinity, so 74.5 -> 75 and -0.5 -> 0.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub subject: String,
    pub tier: Tier,
    pub text: &'static str,
}

pub fn insight_text(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "Outstanding performance across all metrics",
        Tier::Good => "Good performance with room for improvement",
        Tier::Average => "Requires focused attention and support",
        Tier::NeedsImprovement => "Requires immediate attention and support",
    }
}

pub fn generate_insight(tier: Tier, subject: &str) -> Insight {
    Insight {
        subject: subject.to_string(),
        tier,
        text: insight_text(tier),
    }
}

#[derive(Default)]
struct DepartmentTotals {
    count: usize,
    quiz: f64,
    assignment: f64,
    coding: f64,
    certified: usize,
}

/// Groups records by their verbatim department label, keeping first-seen order.
/// Scores are summed as `f64` so unclamped values near `i64::MAX` cannot overflow.
fn group_by_department(records: &[FresherRecord]) -> Vec<(String, DepartmentTotals)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, DepartmentTotals)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            groups.push((record.department.clone(), DepartmentTotals::default()));
            groups.len() - 1
        });
        let totals = &mut groups[slot].1;
        totals.count += 1;
        totals.quiz += record.quiz_score as f64;
        totals.assignment += record.assignment_score as f64;
        totals.coding += record.coding_score as f64;
        if record.certification_score >= 100 {
            totals.certified += 1;
        }
    }

    groups
}

pub fn aggregate_by_department(records: &[FresherRecord]) -> Vec<DepartmentAggregate> {
    group_by_department(records)
        .into_iter()
        .map(|(department, totals)| {
            // Groups are only created with a member, so count >= 1.
            let count = totals.count as f64;
            let avg_quiz = totals.quiz / count;
            let avg_assignment = totals.assignment / count;
            let avg_coding = totals.coding / count;
            let overall_score = round_half_up((avg_quiz + avg_assignment) / 2.0);
            let tier = classify_assessment_tier(overall_score as f64);

            debug!(department = %department, freshers = totals.count, overall_score, tier = %tier, "department aggregated");

            DepartmentAggregate {
                insight: generate_insight(tier, &department),
                department,
                total_freshers: totals.count,
                avg_quiz_score: round_half_up(avg_quiz),
                avg_assignment_score: round_half_up(avg_assignment),
                avg_coding_score: round_half_up(avg_coding),
                overall_score,
                tier,
            }
        })
        .collect()
}

pub fn certification_summary(records: &[FresherRecord]) -> Vec<CertificationSummary> {
    group_by_department(records)
        .into_iter()
        .map(|(department, totals)| CertificationSummary {
            department,
            total_freshers: totals.count,
            completed: totals.certified,
            not_completed: totals.count - totals.certified,
            completion_rate: round_half_up(totals.certified as f64 / totals.count as f64 * 100.0),
        })
        .collect()
}

struct CategoryLadder {
    exceptional: &'static str,
    solid: &'static str,
    started: &'static str,
    not_started: &'static str,
}

impl CategoryLadder {
    fn line(&self, score: i64) -> &'static str {
        if score >= 90 {
            self.exceptional
        } else if score >= 70 {
            self.solid
        } else if score > 0 {
            self.started
        } else {
            self.not_started
        }
    }
}

const QUIZ_LADDER: CategoryLadder = CategoryLadder {
    exceptional: "Your quiz performance is exceptional! You're a quick learner.",
    solid: "Your quiz scores are good! Try reviewing the material more thoroughly.",
    started: "Focus on understanding the core concepts. Practice makes perfect!",
    not_started: "Start with the basics. Every expert was once a beginner!",
};

const CODING_LADDER: CategoryLadder = CategoryLadder {
    exceptional: "Your coding skills are impressive! You're a natural problem solver.",
    solid: "Your coding is solid! Try tackling more complex challenges.",
    started: "Practice coding daily. Small improvements lead to big results!",
    not_started: "Start with simple coding exercises. Build your confidence step by step!",
};

const ASSIGNMENT_LADDER: CategoryLadder = CategoryLadder {
    exceptional: "Your assignments are top-notch! You have excellent attention to detail.",
    solid: "Your assignment work is good! Focus on quality over speed.",
    started: "Take your time with assignments. Quality work pays off!",
    not_started: "Start with smaller tasks. Every completed assignment is progress!",
};

const CERTIFICATION_LADDER: CategoryLadder = CategoryLadder {
    exceptional: "Your certification progress is outstanding! You're a dedicated learner.",
    solid: "Your certification journey is going well! Keep up the momentum.",
    started: "Focus on one certification at a time. You'll get there!",
    not_started: "Set small certification goals. Every step forward is progress!",
};

/// One line per category, always quiz, coding, assignment, certification.
pub fn generate_recommendations(record: &FresherRecord) -> Vec<String> {
    [
        QUIZ_LADDER.line(record.quiz_score),
        CODING_LADDER.line(record.coding_score),
        ASSIGNMENT_LADDER.line(record.assignment_score),
        CERTIFICATION_LADDER.line(record.certification_score),
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "Remember: Success is not final, failure is not fatal. It's the courage to continue that counts!",
    "The only way to do great work is to love what you do. Keep pushing your boundaries!",
    "Your potential is limitless. Believe in yourself and keep growing!",
    "Every expert was once a beginner. You're on the right path!",
    "Success is the sum of small efforts repeated day in and day out. Keep going!",
];

/// Uniform pick from [`MOTIVATIONAL_QUOTES`]; the only non-deterministic output.
pub fn motivational_quote<R: Rng>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES[rng.random_range(0..MOTIVATIONAL_QUOTES.len())]
}

#[derive(Debug, Clone, Serialize)]
pub struct FresherFeedback {
    pub headline: &'static str,
    pub motivation: &'static str,
    pub overall_progress: i64,
    pub suggestions: Vec<String>,
    pub quote: &'static str,
}

pub fn progress_message(overall_progress: i64) -> (&'static str, &'static str) {
    match overall_progress {
        p if p >= 90 => (
            "Outstanding Performance! You're absolutely crushing it!",
            "You're in the top tier of performers. Keep this momentum going!",
        ),
        p if p >= 80 => (
            "Excellent Work! You're doing really well!",
            "You're showing great potential. A few more pushes and you'll be at the top!",
        ),
        p if p >= 70 => (
            "Good Progress! You're on the right track!",
            "You're making solid progress. Focus on your weaker areas to excel!",
        ),
        p if p >= 50 => (
            "Steady Progress! Keep pushing forward!",
            "You're building a strong foundation. Every improvement counts!",
        ),
        _ => (
            "Getting Started! Every journey begins with a single step!",
            "Don't worry about where you are now, focus on where you're going!",
        ),
    }
}

pub fn generate_feedback<R: Rng>(record: &FresherRecord, rng: &mut R) -> FresherFeedback {
    let (headline, motivation) = progress_message(record.overall_progress);
    FresherFeedback {
        headline,
        motivation,
        overall_progress: record.overall_progress,
        suggestions: generate_recommendations(record),
        quote: motivational_quote(rng),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(crate) fn fresher(department: &str, quiz: i64, coding: i64, assignment: i64, certification: i64) -> FresherRecord {
        FresherRecord {
            id: None,
            name: format!("{department} fresher"),
            email: format!("{}@maverick.test", department.to_lowercase()),
            department: department.to_string(),
            skills: Vec::new(),
            quiz_score: quiz,
            coding_score: coding,
            assignment_score: assignment,
            assignment_completion: assignment as f64,
            certification_score: certification,
            overall_progress: 0,
        }
    }

    #[test]
    fn assessment_tier_boundaries_are_inclusive() {
        assert_eq!(classify_assessment_tier(90.0), Tier::Excellent);
        assert_eq!(classify_assessment_tier(89.0), Tier::Good);
        assert_eq!(classify_assessment_tier(70.0), Tier::Good);
        assert_eq!(classify_assessment_tier(69.0), Tier::Average);
        assert_eq!(classify_assessment_tier(40.0), Tier::Average);
        assert_eq!(classify_assessment_tier(39.0), Tier::NeedsImprovement);
    }

    #[test]
    fn individual_tier_uses_its_own_table() {
        assert_eq!(classify_individual_tier(85.0), Tier::Excellent);
        assert_eq!(classify_individual_tier(84.0), Tier::Good);
        assert_eq!(classify_individual_tier(50.0), Tier::Average);
        assert_eq!(classify_individual_tier(45.0), Tier::NeedsImprovement);
        assert_eq!(classify_assessment_tier(45.0), Tier::Average);
    }

    #[test]
    fn context_selects_thresholds() {
        assert_eq!(classify(86.0, TierContext::Individual), Tier::Excellent);
        assert_eq!(classify(86.0, TierContext::Assessment), Tier::Good);
        assert_eq!(classify(86.0, TierContext::Report), Tier::Good);
        assert_eq!(classify(75.0, TierContext::Report), Tier::Average);
        assert_eq!(classify_report_tier(69.9), Tier::NeedsImprovement);
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        assert_eq!(classify_assessment_tier(-20.0), Tier::NeedsImprovement);
        assert_eq!(classify_assessment_tier(150.0), Tier::Excellent);
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(74.5), 75);
        assert_eq!(round_half_up(74.49), 74);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
    }

    #[test]
    fn departments_keep_first_seen_order() {
        let records = vec![
            fresher("Ops", 50, 0, 50, 0),
            fresher("Eng", 90, 0, 90, 0),
            fresher("Ops", 70, 0, 70, 0),
            fresher("QA", 10, 0, 10, 0),
        ];
        let aggregates = aggregate_by_department(&records);
        let names: Vec<&str> = aggregates.iter().map(|agg| agg.department.as_str()).collect();
        assert_eq!(names, vec!["Ops", "Eng", "QA"]);
        let total: usize = aggregates.iter().map(|agg| agg.total_freshers).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn department_labels_are_not_canonicalized() {
        let records = vec![fresher("Eng", 80, 0, 80, 0), fresher("eng", 80, 0, 80, 0)];
        assert_eq!(aggregate_by_department(&records).len(), 2);
    }

    #[test]
    fn department_averages_and_overall() {
        let records = vec![fresher("Eng", 100, 60, 10, 0), fresher("Eng", 50, 71, 5, 0)];
        let aggregates = aggregate_by_department(&records);
        assert_eq!(aggregates.len(), 1);
        let eng = &aggregates[0];
        assert_eq!(eng.total_freshers, 2);
        assert_eq!(eng.avg_quiz_score, 75);
        assert_eq!(eng.avg_assignment_score, 8);
        assert_eq!(eng.avg_coding_score, 66);
        // (75 + 7.5) / 2 = 41.25
        assert_eq!(eng.overall_score, 41);
        assert_eq!(eng.tier, Tier::Average);
        assert_eq!(eng.insight.text, "Requires focused attention and support");
        assert_eq!(eng.insight.subject, "Eng");
    }

    #[test]
    fn empty_input_produces_no_groups() {
        assert!(aggregate_by_department(&[]).is_empty());
        assert!(certification_summary(&[]).is_empty());
    }

    #[test]
    fn huge_scores_in_one_department_do_not_overflow() {
        let raw = serde_json::json!({ "department": "Eng", "quizzes": "9223372036854775807" });
        let records = vec![
            crate::parse::parse_fresher_record(&raw),
            crate::parse::parse_fresher_record(&raw),
        ];
        assert_eq!(records[0].quiz_score, i64::MAX);

        let aggregates = aggregate_by_department(&records);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].total_freshers, 2);
        assert_eq!(aggregates[0].avg_quiz_score, i64::MAX);
        assert!(aggregates[0].overall_score > 0);
        assert_eq!(aggregates[0].tier, Tier::Excellent);
    }

    #[test]
    fn all_zero_record_lands_in_lowest_tier() {
        let aggregates = aggregate_by_department(&[fresher("Eng", 0, 0, 0, 0)]);
        assert_eq!(aggregates[0].overall_score, 0);
        assert_eq!(aggregates[0].tier, Tier::NeedsImprovement);
        assert_eq!(aggregates[0].insight.text, "Requires immediate attention and support");
    }

    #[test]
    fn insight_depends_only_on_tier() {
        let a = generate_insight(Tier::Excellent, "Eng");
        let b = generate_insight(Tier::Excellent, "Ops");
        assert_eq!(a.text, b.text);
        assert_eq!(a.text, "Outstanding performance across all metrics");
        for tier in Tier::ALL {
            assert!(!insight_text(tier).is_empty());
        }
    }

    #[test]
    fn certification_counts_completed_at_one_hundred() {
        let records = vec![
            fresher("Eng", 0, 0, 0, 100),
            fresher("Eng", 0, 0, 0, 99),
            fresher("Eng", 0, 0, 0, 120),
        ];
        let summary = certification_summary(&records);
        assert_eq!(summary[0].completed, 2);
        assert_eq!(summary[0].not_completed, 1);
        assert_eq!(summary[0].completion_rate, 67);
    }

    #[test]
    fn recommendations_always_have_four_lines_in_order() {
        let lines = generate_recommendations(&fresher("Eng", 95, 75, 10, 0));
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| !line.is_empty()));
        assert_eq!(lines[0], QUIZ_LADDER.exceptional);
        assert_eq!(lines[1], CODING_LADDER.solid);
        assert_eq!(lines[2], ASSIGNMENT_LADDER.started);
        assert_eq!(lines[3], CERTIFICATION_LADDER.not_started);
    }

    #[test]
    fn negative_scores_fall_to_not_started() {
        let lines = generate_recommendations(&fresher("Eng", -3, 0, 0, 0));
        assert_eq!(lines[0], QUIZ_LADDER.not_started);
    }

    #[test]
    fn feedback_quote_comes_from_fixed_list() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut record = fresher("Eng", 80, 80, 80, 80);
        record.overall_progress = 82;
        for _ in 0..20 {
            let feedback = generate_feedback(&record, &mut rng);
            assert!(MOTIVATIONAL_QUOTES.contains(&feedback.quote));
            assert_eq!(feedback.headline, "Excellent Work! You're doing really well!");
            assert_eq!(feedback.suggestions.len(), 4);
        }
    }

    #[test]
    fn progress_ladder_boundaries() {
        assert_eq!(progress_message(90).0, "Outstanding Performance! You're absolutely crushing it!");
        assert_eq!(progress_message(50).0, "Steady Progress! Keep pushing forward!");
        assert_eq!(progress_message(49).0, "Getting Started! Every journey begins with a single step!");
    }
}
