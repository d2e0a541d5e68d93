//! Course and board catalog used to populate selection controls.
//!
//! The catalog doubles as the lookup table for cascading selects: once loaded,
//! parts of a course and subjects of a part are answered from memory.

use crate::api::{ApiClient, ApiError};
use crate::models::board::{self, Board};
use crate::models::course::{self, Course, Part};
use crate::models::Keyed;

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub courses: Keyed<Course>,
    pub boards: Keyed<Board>,
}

/// Fetch courses for a selection control. Failures are logged and yield an empty list.
pub async fn load_courses(api: &ApiClient) -> Keyed<Course> {
    course::find_all(api).await.unwrap_or_else(|e| {
        log::error!("Error loading courses: {e}");
        Keyed::default()
    })
}

/// Fetch boards for a selection control. Failures are logged and yield an empty list.
pub async fn load_boards(api: &ApiClient) -> Keyed<Board> {
    board::find_all(api).await.unwrap_or_else(|e| {
        log::error!("Error loading boards: {e}");
        Keyed::default()
    })
}

impl Catalog {
    /// Best-effort load for public pages; each half falls back to empty on its own.
    pub async fn load_public(api: &ApiClient) -> Self {
        Self {
            courses: load_courses(api).await,
            boards: load_boards(api).await,
        }
    }

    /// Strict load for admin editors; any failure is returned to the caller.
    pub async fn load(api: &ApiClient) -> Result<Self, ApiError> {
        let courses = course::find_all(api).await?;
        let boards = board::find_all(api).await?;
        Ok(Self { courses, boards })
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    pub fn part(&self, course_id: &str, part_id: &str) -> Option<&Part> {
        self.course(course_id).and_then(|c| c.parts.get(part_id))
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.get(board_id)
    }

    /// Parts of a course in API order; empty for no or unknown course.
    pub fn parts_of(&self, course_id: &str) -> impl Iterator<Item = (&str, &Part)> {
        self.course(course_id).into_iter().flat_map(|c| c.parts.iter())
    }

    /// Subjects of a part in entry order; empty when either id is unknown.
    pub fn subjects_of(&self, course_id: &str, part_id: &str) -> &[String] {
        self.part(course_id, part_id)
            .map(|p| p.subjects.as_slice())
            .unwrap_or(&[])
    }

    /// `part_id` if it belongs to `course_id`, otherwise empty. Used to reset the
    /// dependent control after the course changes.
    pub fn valid_part_id(&self, course_id: &str, part_id: &str) -> String {
        if self.part(course_id, part_id).is_some() {
            part_id.to_string()
        } else {
            String::new()
        }
    }

    pub fn course_options(&self, selected: &str) -> Vec<SelectOption> {
        self.courses
            .iter()
            .map(|(id, c)| SelectOption {
                value: id.to_string(),
                label: c.course_name.clone(),
                selected: id == selected,
            })
            .collect()
    }

    pub fn part_options(&self, course_id: &str, selected: &str) -> Vec<SelectOption> {
        self.parts_of(course_id)
            .map(|(id, p)| SelectOption {
                value: id.to_string(),
                label: p.name.clone(),
                selected: id == selected,
            })
            .collect()
    }

    pub fn board_options(&self, selected: &str) -> Vec<SelectOption> {
        self.boards
            .iter()
            .map(|(id, b)| SelectOption {
                value: id.to_string(),
                label: b.name.clone(),
                selected: id == selected,
            })
            .collect()
    }
}
