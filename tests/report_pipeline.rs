use chrono::NaiveDate;
use serde_json::json;

use maverick_forge_insights::performance::certification_summary;
use maverick_forge_insights::report::{build_report, render_markdown};
use maverick_forge_insights::source::records_from_json;
use maverick_forge_insights::{
    aggregate_by_department, default_catalog, generate_recommendations, recommend, Tier,
};

fn backend_payload() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Asha Rao",
            "email": "asha@maverick.test",
            "department": "Eng",
            "skills": "[\"Python\", \"Flask\"]",
            "quizzes": "100",
            "coding": "92",
            "assignments": "10/10",
            "certifications": "100"
        },
        {
            "id": 2,
            "name": "Ravi Menon",
            "email": "ravi@maverick.test",
            "department": "Eng",
            "skills": "JavaScript, React",
            "quizzes": "50",
            "coding": "61",
            "assignments": "5/10",
            "certifications": "40"
        },
        {
            "id": 3,
            "name": "Meera Iyer",
            "email": "meera@maverick.test",
            "department": "Ops",
            "skills": null,
            "quizzes": "N/A",
            "coding": "",
            "assignments": null
        }
    ])
}

#[test]
fn department_scenario_from_backend_payload() {
    let records = records_from_json(&backend_payload()).expect("payload parses");
    let aggregates = aggregate_by_department(&records);

    assert_eq!(aggregates.len(), 2);
    let eng = &aggregates[0];
    assert_eq!(eng.department, "Eng");
    assert_eq!(eng.total_freshers, 2);
    assert_eq!(eng.avg_quiz_score, 75);

    let ops = &aggregates[1];
    assert_eq!(ops.overall_score, 0);
    assert_eq!(ops.tier, Tier::NeedsImprovement);

    let total: usize = aggregates.iter().map(|agg| agg.total_freshers).sum();
    assert_eq!(total, records.len());
}

#[test]
fn parsed_skills_drive_course_choice() {
    let records = records_from_json(&backend_payload()).expect("payload parses");
    let catalog = default_catalog();

    assert_eq!(recommend(&records[0].skills, &catalog).course_name, "Python Developer");
    assert_eq!(recommend(&records[1].skills, &catalog).course_name, "MERN Stack");
    assert_eq!(recommend(&records[2].skills, &catalog).course_name, "No course available");
}

#[test]
fn every_fresher_gets_four_recommendation_lines() {
    let records = records_from_json(&backend_payload()).expect("payload parses");
    for record in &records {
        let lines = generate_recommendations(record);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }
}

#[test]
fn certification_and_report_views_share_the_records() {
    let records = records_from_json(&backend_payload()).expect("payload parses");

    let certifications = certification_summary(&records);
    assert_eq!(certifications[0].department, "Eng");
    assert_eq!(certifications[0].completed, 1);
    assert_eq!(certifications[0].completion_rate, 50);

    let generated_at = NaiveDate::from_ymd_opt(2026, 1, 15)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid timestamp");
    let report = build_report(&records, generated_at);
    assert_eq!(report.summary.total_freshers, 3);
    assert_eq!(report.summary.total_departments, 2);
    assert_eq!(report.summary.top_department, "Eng");
    assert_eq!(report.freshers[0].name, "Asha Rao");

    let markdown = render_markdown(&report);
    assert!(markdown.contains("### Eng"));
    assert!(markdown.contains("### Ops"));
}
