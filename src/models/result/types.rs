use serde::{Deserialize, Serialize};

use crate::grade::{self, Status};
use crate::models::Keyed;

/// Marks for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMarks {
    pub total_marks: u64,
    pub obtained_marks: u64,
}

/// A published result. Course, part and board names are stored alongside their ids
/// so a card renders without consulting the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub part_id: String,
    #[serde(default)]
    pub part_name: String,
    #[serde(default)]
    pub board_id: String,
    #[serde(default)]
    pub board_name: String,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub verification_number: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub subjects: Keyed<SubjectMarks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_controller_signature: Option<String>,
}

/// Body of `POST /api/results/check`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub course_id: String,
    pub part_id: String,
    pub academic_year: String,
    pub board_id: String,
    pub roll_number: String,
}

/// Reply of `POST /api/results/check`; `result` is null or absent when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub result: Option<ResultRecord>,
}

/// `GET /api/admin/results` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct ResultList {
    #[serde(default)]
    pub results: Keyed<ResultRecord>,
}

/// Row on the results panel. Percentage and status are derived from the stored
/// marks on every render.
#[derive(Debug, Clone)]
pub struct ResultListItem {
    pub id: String,
    pub roll_number: String,
    pub student_name: String,
    pub course_name: String,
    pub academic_year: String,
    pub percentage: String,
    pub status: Status,
}

impl ResultListItem {
    pub fn delete_href(&self) -> String {
        format!("/admin/results/{}/delete", urlencoding::encode(&self.id))
    }

    pub fn from_entry(id: &str, record: &ResultRecord) -> Self {
        let summary = grade::summarize(record.subjects.values());
        Self {
            id: id.to_string(),
            roll_number: record.roll_number.clone(),
            student_name: or_na(&record.student_name),
            course_name: record.course_name.clone(),
            academic_year: record.academic_year.clone(),
            percentage: summary.percentage_display(),
            status: summary.status,
        }
    }
}

/// Display placeholder for blank optional text.
pub fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}
