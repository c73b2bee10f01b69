use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use sqlx::{MySqlPool, Row};
use tracing::info;

use crate::error::SourceError;
use crate::models::FresherRecord;
use crate::parse::parse_fresher_record;

/// Accepts the fresher listing (a bare array) or the admin dashboard
/// aggregate (an object carrying `freshers` or `freshersData`).
pub fn records_from_json(payload: &Value) -> Result<Vec<FresherRecord>, SourceError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(fields) => fields
            .get("freshers")
            .or_else(|| fields.get("freshersData"))
            .and_then(Value::as_array)
            .ok_or(SourceError::UnsupportedPayload)?,
        _ => return Err(SourceError::UnsupportedPayload),
    };

    Ok(items.iter().map(parse_fresher_record).collect())
}

pub fn load_json(path: &Path) -> Result<Vec<FresherRecord>, SourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: Value = serde_json::from_str(&raw)?;
    let records = records_from_json(&payload)?;
    info!(path = %path.display(), freshers = records.len(), "loaded JSON export");
    Ok(records)
}

pub fn records_from_csv<R: std::io::Read>(reader: R) -> Result<Vec<FresherRecord>, SourceError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in reader.deserialize::<HashMap<String, String>>() {
        let row = result?;
        let fields: Map<String, Value> = row
            .into_iter()
            .map(|(key, value)| (key.trim().to_string(), Value::String(value)))
            .collect();
        records.push(parse_fresher_record(&Value::Object(fields)));
    }

    Ok(records)
}

pub fn load_csv(path: &Path) -> Result<Vec<FresherRecord>, SourceError> {
    let file = std::fs::File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = records_from_csv(file)?;
    info!(path = %path.display(), freshers = records.len(), "loaded CSV import");
    Ok(records)
}

/// Read-only pull from the backend's `freshers` table.
pub async fn fetch_freshers(pool: &MySqlPool) -> Result<Vec<FresherRecord>, SourceError> {
    let rows = sqlx::query(
        r#"
        SELECT CAST(id AS SIGNED) AS id,
               CAST(name AS CHAR) AS name,
               CAST(email AS CHAR) AS email,
               CAST(department AS CHAR) AS department,
               CAST(skills AS CHAR) AS skills,
               CAST(quizzes AS CHAR) AS quizzes,
               CAST(coding AS CHAR) AS coding,
               CAST(assignments AS CHAR) AS assignments,
               CAST(certifications AS CHAR) AS certifications
        FROM freshers
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut fields = Map::new();
        let id: Option<i64> = row.try_get("id")?;
        fields.insert("id".to_string(), id.map(Value::from).unwrap_or(Value::Null));

        for column in [
            "name",
            "email",
            "department",
            "skills",
            "quizzes",
            "coding",
            "assignments",
            "certifications",
        ] {
            let value: Option<String> = row.try_get(column)?;
            fields.insert(column.to_string(), value.map(Value::String).unwrap_or(Value::Null));
        }

        records.push(parse_fresher_record(&Value::Object(fields)));
    }

    info!(freshers = records.len(), "loaded freshers from database");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_accepted() {
        let payload = json!([
            { "name": "Asha", "department": "Eng", "quizzes": "88" },
            { "name": "Ravi", "department": "Ops", "quizzes": "N/A" }
        ]);
        let records = records_from_json(&payload).expect("array payload parses");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quiz_score, 88);
        assert_eq!(records[1].quiz_score, 0);
    }

    #[test]
    fn dashboard_aggregate_is_accepted() {
        let payload = json!({ "totalFreshers": 1, "freshersData": [{ "name": "Asha" }] });
        let records = records_from_json(&payload).expect("dashboard payload parses");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(matches!(
            records_from_json(&json!({ "rows": [] })),
            Err(SourceError::UnsupportedPayload)
        ));
        assert!(matches!(
            records_from_json(&json!("freshers")),
            Err(SourceError::UnsupportedPayload)
        ));
    }

    #[test]
    fn csv_rows_go_through_the_same_coercions() {
        let input = "name,email,department,skills,quizzes,coding,assignments,certifications\n\
                     Asha,asha@maverick.test,Eng,\"React, Node.js\",90%,75,8/10,100\n\
                     Ravi,ravi@maverick.test,Ops,,N/A,,,\n";
        let records = records_from_csv(input.as_bytes()).expect("csv parses");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].skills, vec!["React", "Node.js"]);
        assert_eq!(records[0].quiz_score, 90);
        assert_eq!(records[0].assignment_score, 8);
        assert_eq!(records[0].assignment_completion, 80.0);
        assert_eq!(records[1].quiz_score, 0);
        assert!(records[1].skills.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_json(Path::new("/nonexistent/freshers.json")).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/freshers.json"));
    }
}
