use crate::forms::{get_all, get_field};
use crate::models::Keyed;
use super::types::{NewCourse, Part};

/// One part row as typed into the course editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDraft {
    pub name: String,
    pub subjects: String,
}

/// Course editor state, rebuilt from the submitted form on every round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub course_name: String,
    pub parts: Vec<PartDraft>,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            parts: vec![PartDraft::default()],
        }
    }
}

/// Split a comma-separated subject list, trimming entries and dropping empty ones.
/// A repeated subject keeps only its first position.
pub fn split_subjects(text: &str) -> Vec<String> {
    let mut subjects: Vec<String> = Vec::new();
    for subject in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !subjects.iter().any(|s| s == subject) {
            subjects.push(subject.to_string());
        }
    }
    subjects
}

impl CourseForm {
    /// Rows pair up `part_name` and `part_subjects` fields by position.
    pub fn from_pairs(params: &[(String, String)]) -> Self {
        let names = get_all(params, "part_name");
        let subjects = get_all(params, "part_subjects");
        let rows = names.len().max(subjects.len());
        let parts = (0..rows)
            .map(|i| PartDraft {
                name: names.get(i).copied().unwrap_or_default().to_string(),
                subjects: subjects.get(i).copied().unwrap_or_default().to_string(),
            })
            .collect::<Vec<_>>();
        let mut form = Self {
            course_name: get_field(params, "course_name").to_string(),
            parts,
        };
        if form.parts.is_empty() {
            form.add_part();
        }
        form
    }

    pub fn add_part(&mut self) {
        self.parts.push(PartDraft::default());
    }

    /// Drop the row at `index`; the editor always keeps at least one row.
    pub fn remove_part(&mut self, index: usize) {
        if self.parts.len() > 1 && index < self.parts.len() {
            self.parts.remove(index);
        }
    }

    /// Build the creation payload. Part ids follow row position (`part1`, `part2`, ...),
    /// so a skipped row leaves a gap in the numbering.
    pub fn to_new_course(&self) -> Result<NewCourse, String> {
        let course_name = self.course_name.trim();
        if course_name.is_empty() {
            return Err("Please enter course name".to_string());
        }

        let mut parts = Keyed::default();
        for (index, draft) in self.parts.iter().enumerate() {
            let name = draft.name.trim();
            let subjects = split_subjects(&draft.subjects);
            if name.is_empty() || subjects.is_empty() {
                continue;
            }
            parts.push(format!("part{}", index + 1), Part { name: name.to_string(), subjects });
        }

        if parts.is_empty() {
            return Err("Please add at least one part with subjects".to_string());
        }

        Ok(NewCourse { course_name: course_name.to_string(), parts })
    }
}
