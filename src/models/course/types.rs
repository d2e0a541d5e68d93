use serde::{Deserialize, Serialize};

use crate::models::Keyed;

/// One part/year/semester of a course with its ordered subject names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// A course as stored by the API. The identifier is the key it is listed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub parts: Keyed<Part>,
}

/// `GET /api/courses` envelope.
#[derive(Debug, Default, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub courses: Keyed<Course>,
}

/// Payload for `POST /api/admin/courses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_name: String,
    pub parts: Keyed<Part>,
}

/// Row on the courses panel.
#[derive(Debug, Clone)]
pub struct CourseListItem {
    pub id: String,
    pub name: String,
    pub part_count: usize,
}

impl CourseListItem {
    pub fn delete_href(&self) -> String {
        format!("/admin/courses/{}/delete", urlencoding::encode(&self.id))
    }

    pub fn from_entry(id: &str, course: &Course) -> Self {
        Self {
            id: id.to_string(),
            name: course.course_name.clone(),
            part_count: course.parts.len(),
        }
    }
}
