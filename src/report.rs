use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{FresherRecord, TierCount};
use crate::performance::{classify_report_tier, round_half_up, Tier};

pub const REPORT_TITLE: &str = "AI-Powered Training Performance Report";

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentPerformance {
    pub department: String,
    pub performance: i64,
    pub count: usize,
    pub avg_quiz_score: i64,
    pub avg_assignment_score: i64,
    pub tier: Tier,
    pub insight: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FresherReportEntry {
    pub name: String,
    pub department: String,
    pub skills: Vec<String>,
    pub quiz_score: i64,
    pub assignment_score: f64,
    pub coding_score: i64,
    pub overall_score: f64,
    pub tier: Tier,
    pub insight: String,
    pub recommendations: Vec<String>,
    pub improvement_areas: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_freshers: usize,
    pub total_departments: usize,
    pub average_performance: i64,
    pub top_department: String,
    pub overall_trend: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub title: String,
    pub generated_at: NaiveDateTime,
    pub summary: ReportSummary,
    pub key_findings: Vec<String>,
    pub tier_mix: Vec<TierCount>,
    pub departments: Vec<DepartmentPerformance>,
    pub freshers: Vec<FresherReportEntry>,
}

/// Report weighting for a single fresher: quiz 40%, assignment 40%, coding 20%.
pub fn weighted_overall(record: &FresherRecord) -> f64 {
    record.quiz_score as f64 * 0.4 + record.assignment_completion * 0.4 + record.coding_score as f64 * 0.2
}

/// Report weighting for a department member: quiz 60%, assignment 40%.
pub fn department_blend(record: &FresherRecord) -> f64 {
    record.quiz_score as f64 * 0.6 + record.assignment_completion * 0.4
}

fn department_insight(department: &str, score: f64) -> String {
    if score >= 90.0 {
        format!("{department} demonstrates outstanding performance with strong technical skills and consistent achievement.")
    } else if score >= 80.0 {
        format!("{department} shows good performance with room for targeted improvement in specific areas.")
    } else if score >= 70.0 {
        format!("{department} has moderate performance requiring focused training and support initiatives.")
    } else {
        format!("{department} needs immediate attention and comprehensive support to improve performance metrics.")
    }
}

fn department_recommendations(score: f64, avg_quiz: f64, avg_assignment: f64) -> Vec<String> {
    let mut recommendations = Vec::new();
    if score < 80.0 {
        recommendations.push("Implement intensive training programs");
        recommendations.push("Assign dedicated mentors");
        recommendations.push("Increase practice sessions");
    }
    if avg_quiz < 80.0 {
        recommendations.push("Enhance quiz preparation materials");
        recommendations.push("Provide additional study resources");
    }
    if avg_assignment < 80.0 {
        recommendations.push("Improve assignment guidance");
        recommendations.push("Add more hands-on projects");
    }
    recommendations.into_iter().map(str::to_string).collect()
}

pub fn summarize_departments(records: &[FresherRecord]) -> Vec<DepartmentPerformance> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, usize, f64, f64, f64)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            totals.push((record.department.as_str(), 0, 0.0, 0.0, 0.0));
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.1 += 1;
        entry.2 += department_blend(record);
        entry.3 += record.quiz_score as f64;
        entry.4 += record.assignment_completion;
    }

    let mut departments: Vec<DepartmentPerformance> = totals
        .into_iter()
        .map(|(department, count, blend, quiz, assignment)| {
            let n = count as f64;
            let score = blend / n;
            let avg_quiz = quiz / n;
            let avg_assignment = assignment / n;
            DepartmentPerformance {
                department: department.to_string(),
                performance: round_half_up(score),
                count,
                avg_quiz_score: round_half_up(avg_quiz),
                avg_assignment_score: round_half_up(avg_assignment),
                tier: classify_report_tier(score),
                insight: department_insight(department, score),
                recommendations: department_recommendations(score, avg_quiz, avg_assignment),
            }
        })
        .collect();

    departments.sort_by(|a, b| b.performance.cmp(&a.performance));
    departments
}

fn fresher_insight(name: &str, score: f64) -> String {
    if score >= 90.0 {
        format!("{name} demonstrates exceptional performance across all metrics with strong technical skills and consistent achievement.")
    } else if score >= 80.0 {
        format!("{name} shows strong performance with excellent potential for growth and leadership opportunities.")
    } else if score >= 70.0 {
        format!("{name} has good foundational skills with room for improvement in specific areas.")
    } else if score >= 60.0 {
        format!("{name} needs focused attention and additional support to improve performance metrics.")
    } else {
        format!("{name} requires immediate intervention and comprehensive training to meet performance standards.")
    }
}

fn fresher_recommendations(record: &FresherRecord, overall: f64) -> Vec<String> {
    let quiz = record.quiz_score as f64;
    let assignment = record.assignment_completion;
    let coding = record.coding_score as f64;
    let mut recommendations = Vec::new();

    if overall < 80.0 {
        recommendations.push("Participate in additional practice sessions");
        recommendations.push("Seek mentorship from high-performing peers");
        recommendations.push("Attend extra training workshops");
    }
    if overall >= 90.0 {
        recommendations.push("Consider taking on leadership roles");
        recommendations.push("Mentor other freshers");
        recommendations.push("Explore advanced training opportunities");
    }
    if quiz < 80.0 {
        recommendations.push("Focus on improving quiz preparation strategies");
        recommendations.push("Review fundamental concepts regularly");
        recommendations.push("Practice with sample quiz questions");
    }
    if assignment < 80.0 {
        recommendations.push("Improve time management for assignments");
        recommendations.push("Seek clarification on assignment requirements");
        recommendations.push("Break down complex assignments into smaller tasks");
    }
    if coding < 80.0 {
        recommendations.push("Practice coding problems daily");
        recommendations.push("Participate in coding challenges");
        recommendations.push("Review coding best practices");
    }

    let skills = record.skills.join(", ").to_lowercase();
    if skills.contains("javascript") && coding < 85.0 {
        recommendations.push("Focus on JavaScript fundamentals and ES6+ features");
    }
    if skills.contains("python") && coding < 85.0 {
        recommendations.push("Practice Python data structures and algorithms");
    }
    if skills.contains("react") && assignment < 85.0 {
        recommendations.push("Build more React projects for hands-on experience");
    }

    recommendations.truncate(5);
    recommendations.into_iter().map(str::to_string).collect()
}

fn improvement_areas(record: &FresherRecord, overall: f64) -> Vec<String> {
    let quiz = record.quiz_score as f64;
    let assignment = record.assignment_completion;
    let mut areas = Vec::new();

    if quiz < 75.0 {
        areas.push("Quiz Performance");
    }
    if assignment < 75.0 {
        areas.push("Assignment Completion");
    }
    if (record.coding_score as f64) < 75.0 {
        areas.push("Coding Skills");
    }
    if overall < 70.0 {
        areas.push("Overall Performance");
    }
    if quiz < 80.0 && assignment < 80.0 {
        areas.push("Time Management");
    }
    areas.into_iter().map(str::to_string).collect()
}

pub fn analyze_freshers(records: &[FresherRecord]) -> Vec<FresherReportEntry> {
    let mut entries: Vec<FresherReportEntry> = records
        .iter()
        .map(|record| {
            let overall = weighted_overall(record);
            FresherReportEntry {
                name: record.name.clone(),
                department: record.department.clone(),
                skills: record.skills.clone(),
                quiz_score: record.quiz_score,
                assignment_score: record.assignment_completion,
                coding_score: record.coding_score,
                overall_score: overall,
                tier: classify_report_tier(overall),
                insight: fresher_insight(&record.name, overall),
                recommendations: fresher_recommendations(record, overall),
                improvement_areas: improvement_areas(record, overall),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}

pub fn overall_trend(average_performance: f64) -> &'static str {
    if average_performance >= 85.0 {
        "Strong upward trend"
    } else if average_performance >= 75.0 {
        "Moderate improvement"
    } else if average_performance >= 65.0 {
        "Stable performance"
    } else {
        "Needs attention"
    }
}

pub fn summarize_by_tier(entries: &[FresherReportEntry]) -> Vec<TierCount> {
    Tier::ALL
        .into_iter()
        .map(|tier| TierCount {
            tier,
            count: entries.iter().filter(|entry| entry.tier == tier).count(),
        })
        .filter(|summary| summary.count > 0)
        .collect()
}

fn key_findings(departments: &[DepartmentPerformance], average: i64, total_freshers: usize) -> Vec<String> {
    let (Some(top), Some(bottom)) = (departments.first(), departments.last()) else {
        return vec!["No department data available for this report.".to_string()];
    };

    vec![
        format!("Top performing department: {} with {}%", top.department, top.performance),
        format!("Average performance across all departments: {average}%"),
        format!("Total freshers analyzed: {total_freshers}"),
        format!(
            "Performance gap between highest and lowest: {}%",
            top.performance - bottom.performance
        ),
    ]
}

pub fn build_report(records: &[FresherRecord], generated_at: NaiveDateTime) -> TrainingReport {
    let departments = summarize_departments(records);
    let freshers = analyze_freshers(records);

    let mean_performance = if departments.is_empty() {
        0.0
    } else {
        departments.iter().map(|dept| dept.performance as f64).sum::<f64>() / departments.len() as f64
    };
    let average_performance = round_half_up(mean_performance);

    let summary = ReportSummary {
        total_freshers: records.len(),
        total_departments: departments.len(),
        average_performance,
        top_department: departments
            .first()
            .map(|dept| dept.department.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        overall_trend: overall_trend(mean_performance),
    };

    TrainingReport {
        title: REPORT_TITLE.to_string(),
        generated_at,
        key_findings: key_findings(&departments, average_performance, records.len()),
        tier_mix: summarize_by_tier(&freshers),
        summary,
        departments,
        freshers,
    }
}

pub fn render_markdown(report: &TrainingReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}", report.title);
    let _ = writeln!(output, "Generated at {}", report.generated_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");
    let _ = writeln!(output, "- Total freshers: {}", report.summary.total_freshers);
    let _ = writeln!(output, "- Departments: {}", report.summary.total_departments);
    let _ = writeln!(output, "- Average performance: {}%", report.summary.average_performance);
    let _ = writeln!(output, "- Top department: {}", report.summary.top_department);
    let _ = writeln!(output, "- Overall trend: {}", report.summary.overall_trend);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Key Findings");
    for finding in &report.key_findings {
        let _ = writeln!(output, "- {finding}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Tier Mix");
    if report.tier_mix.is_empty() {
        let _ = writeln!(output, "No freshers recorded.");
    } else {
        for summary in &report.tier_mix {
            let _ = writeln!(output, "- {}: {}", summary.tier, summary.count);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Department Analysis");
    if report.departments.is_empty() {
        let _ = writeln!(output, "No departments recorded.");
    }
    for dept in &report.departments {
        let _ = writeln!(output, "### {}", dept.department);
        let _ = writeln!(
            output,
            "- Performance {}% ({}) across {} freshers",
            dept.performance, dept.tier, dept.count
        );
        let _ = writeln!(
            output,
            "- Quiz average {}%, assignment average {}%",
            dept.avg_quiz_score, dept.avg_assignment_score
        );
        let _ = writeln!(output, "- {}", dept.insight);
        for recommendation in &dept.recommendations {
            let _ = writeln!(output, "  - {recommendation}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Fresher Analysis");
    if report.freshers.is_empty() {
        let _ = writeln!(output, "No freshers recorded.");
    }
    for (rank, entry) in report.freshers.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} ({}) overall {:.1}% ({})",
            rank + 1,
            entry.name,
            entry.department,
            entry.overall_score,
            entry.tier
        );
        let _ = writeln!(
            output,
            "   - Quiz {}%, assignment {:.0}%, coding {}%",
            entry.quiz_score, entry.assignment_score, entry.coding_score
        );
        let _ = writeln!(output, "   - {}", entry.insight);
        if !entry.improvement_areas.is_empty() {
            let _ = writeln!(output, "   - Improvement areas: {}", entry.improvement_areas.join(", "));
        }
        for recommendation in &entry.recommendations {
            let _ = writeln!(output, "   - {recommendation}");
        }
    }

    output
}

pub fn render_json(report: &TrainingReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
