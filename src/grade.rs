//! Percentage, grade band and pass/fail derivation for result cards.
//!
//! The same rounding and banding rule is used for a whole result and for a
//! single subject row, so both go through [`summarize`].

use crate::models::result::SubjectMarks;

/// Minimum percentage that counts as a pass.
pub const PASS_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Highest band whose inclusive lower bound `percentage` reaches.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else if percentage >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent",
            Grade::A => "Very Good",
            Grade::B => "Good",
            Grade::C => "Satisfactory",
            Grade::D => "Pass",
            Grade::F => "Fail",
        }
    }

    /// Card label, e.g. `A+ (Excellent)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.as_str(), self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= PASS_THRESHOLD {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }

    /// Title-case form used by the admin results table.
    pub fn title(&self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Status::Pass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_marks: u64,
    pub obtained_marks: u64,
    pub percentage: f64,
    pub grade: Grade,
    pub status: Status,
}

impl Summary {
    /// Percentage with exactly two decimals, as shown on cards and tables.
    pub fn percentage_display(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `obtained / total * 100` rounded to two decimals; 0 when `total` is 0.
pub fn percentage(obtained: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(obtained as f64 / total as f64 * 100.0)
}

/// Aggregate any number of subject marks into a summary.
pub fn summarize<'a, I>(marks: I) -> Summary
where
    I: IntoIterator<Item = &'a SubjectMarks>,
{
    let (total_marks, obtained_marks) = marks
        .into_iter()
        .fold((0u64, 0u64), |(t, o), m| {
            (t.saturating_add(m.total_marks), o.saturating_add(m.obtained_marks))
        });
    let percentage = percentage(obtained_marks, total_marks);
    Summary {
        total_marks,
        obtained_marks,
        percentage,
        grade: Grade::from_percentage(percentage),
        status: Status::from_percentage(percentage),
    }
}

/// Summary of a single subject row.
pub fn subject_summary(marks: &SubjectMarks) -> Summary {
    summarize(std::iter::once(marks))
}
