//! Input boundary for backend payloads.
//!
//! Every defensive coercion lives here: scores arrive as text (`"85"`, `"85%"`,
//! `"N/A"`, `null`), skills arrive as a JSON array, a JSON-encoded string or a
//! comma separated list. Nothing in here fails; bad values become zero or empty.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::FresherRecord;

pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

static NULL: Value = Value::Null;

pub fn parse_fresher_record(raw: &Value) -> FresherRecord {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);
    let field = |key: &str| fields.get(key).unwrap_or(&NULL);

    let name = text_field(field("name"));
    let department = match text_field(field("department")) {
        dept if dept.is_empty() => UNKNOWN_DEPARTMENT.to_string(),
        dept => dept,
    };

    let record = FresherRecord {
        id: parse_id(field("id")),
        email: text_field(field("email")),
        department,
        skills: parse_skills(field("skills")),
        quiz_score: parse_score(field("quizzes")),
        coding_score: parse_score(field("coding")),
        assignment_score: parse_score(field("assignments")),
        assignment_completion: parse_completion(field("assignments")),
        certification_score: parse_score(field("certifications")),
        overall_progress: parse_score(
            fields
                .get("overallProgress")
                .or_else(|| fields.get("overall_progress"))
                .unwrap_or(&NULL),
        ),
        name,
    };

    for key in ["quizzes", "coding", "assignments", "certifications"] {
        if let Value::String(text) = field(key) {
            if !text.trim().is_empty() && leading_integer(text).is_none() {
                warn!(fresher = %record.name, field = key, value = %text, "non-numeric score read as 0");
            }
        }
    }

    record
}

/// `parseInt`-style read: leading whitespace, optional sign, then digits.
/// Anything without a numeric prefix is 0.
pub fn parse_score(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64))
            .unwrap_or(0),
        Value::String(text) => leading_integer(text).unwrap_or(0),
        _ => 0,
    }
}

/// Reads `completed/total` as a percentage. A missing or zero total counts as 1;
/// a value with no `/` is taken as a percentage already.
pub fn parse_completion(value: &Value) -> f64 {
    let text = match value {
        Value::String(text) => text.as_str(),
        other => return parse_score(other) as f64,
    };

    match text.split_once('/') {
        Some((completed, total)) => {
            let completed = leading_integer(completed).unwrap_or(0);
            let total = match leading_integer(total) {
                Some(0) | None => 1,
                Some(total) => total,
            };
            completed as f64 / total as f64 * 100.0
        }
        None => leading_integer(text).unwrap_or(0) as f64,
    }
}

pub fn parse_skills(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => skill_list(items),
        Value::String(text) => {
            let raw = text.trim();
            if raw.is_empty() {
                return Vec::new();
            }
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
                return skill_list(&items);
            }
            let raw = raw.strip_prefix('[').unwrap_or(raw);
            let raw = raw.strip_suffix(']').unwrap_or(raw);
            raw.replace('"', "")
                .split(',')
                .map(str::trim)
                .filter(|skill| !skill.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

const RESUME_KEYWORDS: [&str; 31] = [
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "Git",
    "HTML",
    "CSS",
    "TypeScript",
    "Angular",
    "Vue.js",
    "Express.js",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Docker",
    "AWS",
    "Azure",
    "Problem Solving",
    "Teamwork",
    "Communication",
    "Leadership",
    "Project Management",
    "Agile",
    "Scrum",
    "REST API",
    "GraphQL",
    "Machine Learning",
    "Data Analysis",
    "UI/UX Design",
];

const RESUME_PATTERNS: [(&[&str], &str); 4] = [
    (&["programming", "coding"], "Programming"),
    (&["database", "db"], "Database Management"),
    (&["web", "frontend", "backend"], "Web Development"),
    (&["mobile", "app"], "Mobile Development"),
];

/// Keyword scan of free resume text, used when no structured skill list exists.
/// Matching is plain case-insensitive substring search, so `"JavaScript"` also
/// yields `"Java"`. Text with no hits yields a generic pair.
pub fn extract_skills_fallback(resume_text: &str) -> Vec<String> {
    let text = resume_text.to_lowercase();
    let mut skills: Vec<String> = RESUME_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect();

    for (cues, skill) in RESUME_PATTERNS {
        if cues.iter().any(|cue| text.contains(cue)) {
            skills.push(skill.to_string());
        }
    }

    if skills.is_empty() {
        return vec!["General Programming".to_string(), "Problem Solving".to_string()];
    }
    skills
}

fn skill_list(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => text.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .filter(|skill| !skill.is_empty())
        .collect()
}

fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
