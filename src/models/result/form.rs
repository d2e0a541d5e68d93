use std::collections::HashMap;

use crate::forms::{get_field, get_prefixed};
use crate::models::catalog::Catalog;
use crate::models::Keyed;
use super::types::{ResultRecord, SubjectMarks};

pub const TOTAL_PREFIX: &str = "total:";
pub const OBTAINED_PREFIX: &str = "obtained:";

/// Raw total/obtained input pair for one subject of the selected part.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRow {
    pub subject: String,
    pub total: String,
    pub obtained: String,
}

/// Publish-result editor state as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultForm {
    pub student_name: String,
    pub father_name: String,
    pub course_id: String,
    pub part_id: String,
    pub board_id: String,
    pub academic_year: String,
    pub roll_number: String,
    pub verification_number: String,
    pub remarks: String,
    pub principal_signature: String,
    pub exam_controller_signature: String,
    /// Subject name → (total, obtained) as typed.
    pub marks: HashMap<String, (String, String)>,
}

fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

impl ResultForm {
    pub fn from_pairs(params: &[(String, String)]) -> Self {
        let mut marks: HashMap<String, (String, String)> = HashMap::new();
        for (subject, value) in get_prefixed(params, TOTAL_PREFIX) {
            marks.entry(subject.to_string()).or_default().0 = value.to_string();
        }
        for (subject, value) in get_prefixed(params, OBTAINED_PREFIX) {
            marks.entry(subject.to_string()).or_default().1 = value.to_string();
        }

        Self {
            student_name: get_field(params, "student_name").to_string(),
            father_name: get_field(params, "father_name").to_string(),
            course_id: get_field(params, "course_id").to_string(),
            part_id: get_field(params, "part_id").to_string(),
            board_id: get_field(params, "board_id").to_string(),
            academic_year: get_field(params, "academic_year").to_string(),
            roll_number: get_field(params, "roll_number").to_string(),
            verification_number: get_field(params, "verification_number").to_string(),
            remarks: get_field(params, "remarks").to_string(),
            principal_signature: get_field(params, "principal_signature").to_string(),
            exam_controller_signature: get_field(params, "exam_controller_signature").to_string(),
            marks,
        }
    }

    /// Drop a part selection that no longer belongs to the chosen course.
    pub fn normalize(&mut self, catalog: &Catalog) {
        self.part_id = catalog.valid_part_id(&self.course_id, &self.part_id);
    }

    /// One input pair per subject of the selected part, prefilled with what was typed.
    /// A subject the catalog lists twice gets a single row.
    pub fn mark_rows(&self, catalog: &Catalog) -> Vec<MarkRow> {
        let mut rows: Vec<MarkRow> = Vec::new();
        for subject in catalog.subjects_of(&self.course_id, &self.part_id) {
            if rows.iter().any(|r| &r.subject == subject) {
                continue;
            }
            let (total, obtained) = self.marks.get(subject).cloned().unwrap_or_default();
            rows.push(MarkRow { subject: subject.clone(), total, obtained });
        }
        rows
    }

    /// Validate and assemble the publish payload. The first failing check wins and
    /// nothing is sent.
    pub fn to_record(&self, catalog: &Catalog, issue_date: &str) -> Result<ResultRecord, String> {
        let required = [
            &self.student_name,
            &self.father_name,
            &self.course_id,
            &self.part_id,
            &self.board_id,
            &self.academic_year,
            &self.roll_number,
            &self.verification_number,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err("Please fill all required fields".to_string());
        }

        let (course, part, board) = match (
            catalog.course(&self.course_id),
            catalog.part(&self.course_id, &self.part_id),
            catalog.board(&self.board_id),
        ) {
            (Some(c), Some(p), Some(b)) => (c, p, b),
            _ => return Err("Please fill all required fields".to_string()),
        };

        let mut subjects = Keyed::default();
        let mut grand_total: u64 = 0;
        for row in self.mark_rows(catalog) {
            let (total, obtained) = match (row.total.trim().parse::<u64>(), row.obtained.trim().parse::<u64>()) {
                (Ok(t), Ok(o)) => (t, o),
                _ => return Err("Please fill all subject marks correctly".to_string()),
            };
            if obtained > total {
                return Err(format!("Obtained marks cannot exceed total marks for {}", row.subject));
            }
            // Obtained never exceeds total, so bounding the totals bounds both sums.
            grand_total = match grand_total.checked_add(total) {
                Some(sum) => sum,
                None => return Err("Please fill all subject marks correctly".to_string()),
            };
            subjects.push(row.subject, SubjectMarks { total_marks: total, obtained_marks: obtained });
        }
        if subjects.is_empty() {
            return Err("Please fill all subject marks correctly".to_string());
        }

        Ok(ResultRecord {
            student_name: self.student_name.trim().to_string(),
            father_name: self.father_name.trim().to_string(),
            course_id: self.course_id.clone(),
            course_name: course.course_name.clone(),
            part_id: self.part_id.clone(),
            part_name: part.name.clone(),
            board_id: self.board_id.clone(),
            board_name: board.name.clone(),
            academic_year: self.academic_year.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            verification_number: self.verification_number.trim().to_string(),
            issue_date: issue_date.to_string(),
            subjects,
            remarks: optional(&self.remarks),
            principal_signature: optional(&self.principal_signature),
            exam_controller_signature: optional(&self.exam_controller_signature),
        })
    }
}
