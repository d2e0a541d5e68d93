use crate::grade;
use super::types::{or_na, ResultRecord};

/// One line of the subject-wise marks table.
#[derive(Debug, Clone)]
pub struct SubjectRow {
    pub name: String,
    pub total_marks: u64,
    pub obtained_marks: u64,
    pub percentage: String,
    pub grade: String,
}

/// Everything the result card shows, already formatted.
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub student_name: String,
    pub father_name: String,
    pub roll_number: String,
    pub course_name: String,
    pub part_name: String,
    pub academic_year: String,
    pub board_name: String,
    pub verification_number: String,
    pub rows: Vec<SubjectRow>,
    pub total_marks: u64,
    pub obtained_marks: u64,
    pub percentage: String,
    pub grade: String,
    pub status: String,
    pub passed: bool,
    pub remarks: Option<String>,
    pub principal_signature: Option<String>,
    pub exam_controller_signature: Option<String>,
    pub issue_date: String,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl ResultCard {
    /// `today` stands in for a missing issue date.
    pub fn build(record: &ResultRecord, today: &str) -> Self {
        let rows = record
            .subjects
            .iter()
            .map(|(name, marks)| {
                let s = grade::subject_summary(marks);
                SubjectRow {
                    name: name.to_string(),
                    total_marks: marks.total_marks,
                    obtained_marks: marks.obtained_marks,
                    percentage: s.percentage_display(),
                    grade: s.grade.label(),
                }
            })
            .collect();

        let summary = grade::summarize(record.subjects.values());
        let issue_date = if record.issue_date.trim().is_empty() {
            today.to_string()
        } else {
            record.issue_date.clone()
        };

        Self {
            student_name: or_na(&record.student_name),
            father_name: or_na(&record.father_name),
            roll_number: record.roll_number.clone(),
            course_name: record.course_name.clone(),
            part_name: record.part_name.clone(),
            academic_year: record.academic_year.clone(),
            board_name: record.board_name.clone(),
            verification_number: or_na(&record.verification_number),
            rows,
            total_marks: summary.total_marks,
            obtained_marks: summary.obtained_marks,
            percentage: summary.percentage_display(),
            grade: summary.grade.label(),
            status: summary.status.as_str().to_string(),
            passed: summary.status.is_pass(),
            remarks: non_blank(&record.remarks),
            principal_signature: non_blank(&record.principal_signature),
            exam_controller_signature: non_blank(&record.exam_controller_signature),
            issue_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::SubjectMarks;

    #[test]
    fn card_totals_and_rows() {
        let mut record = ResultRecord {
            student_name: "Ali".into(),
            roll_number: "R001".into(),
            ..Default::default()
        };
        record.subjects.push("Physics", SubjectMarks { total_marks: 100, obtained_marks: 85 });
        record.subjects.push("Chemistry", SubjectMarks { total_marks: 100, obtained_marks: 40 });

        let card = ResultCard::build(&record, "2025-06-01");
        assert_eq!(card.total_marks, 200);
        assert_eq!(card.obtained_marks, 125);
        assert_eq!(card.percentage, "62.50");
        assert_eq!(card.grade, "C (Satisfactory)");
        assert_eq!(card.status, "PASS");
        assert!(card.passed);
        assert_eq!(card.rows[0].grade, "A (Very Good)");
        assert_eq!(card.rows[1].percentage, "40.00");
        assert_eq!(card.rows[1].grade, "F (Fail)");
        assert_eq!(card.father_name, "N/A");
        assert_eq!(card.issue_date, "2025-06-01");
    }

    #[test]
    fn blank_optional_fields_are_hidden() {
        let record = ResultRecord {
            remarks: Some("  ".into()),
            principal_signature: Some("https://cdn.example/p.png".into()),
            issue_date: "2024-12-31".into(),
            ..Default::default()
        };
        let card = ResultCard::build(&record, "2025-06-01");
        assert!(card.remarks.is_none());
        assert_eq!(card.principal_signature.as_deref(), Some("https://cdn.example/p.png"));
        assert!(card.exam_controller_signature.is_none());
        assert_eq!(card.issue_date, "2024-12-31");
    }
}
