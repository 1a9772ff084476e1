//! # School Record
//!
//! A flat `[course | student | teacher | subject]` tuple.
//!
//! - All four fields are set at construction
//! - Any text is accepted, including empty strings
//! - No relationships between records are modeled
//!
//! The description format is fixed:
//!
//! ```text
//! School(course='10th Grade', student='John Doe', teacher='Jane Smith', subject='Mathematics')
//! ```

use crate::primitives::{DEMO_COURSE, DEMO_STUDENT, DEMO_SUBJECT, DEMO_TEACHER};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// SCHOOL RECORD
// =============================================================================

/// One course/student/teacher/subject tuple.
///
/// Fields are public; the type exposes no mutators of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// The course or grade level.
    pub course: String,
    /// Full name of the student.
    pub student: String,
    /// Full name of the teacher.
    pub teacher: String,
    /// Name of the subject being taught.
    pub subject: String,
}

impl SchoolRecord {
    /// Create a new record. Never fails.
    #[must_use]
    pub fn new(
        course: impl Into<String>,
        student: impl Into<String>,
        teacher: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            course: course.into(),
            student: student.into(),
            teacher: teacher.into(),
            subject: subject.into(),
        }
    }

    /// The fixed demonstration record.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_COURSE, DEMO_STUDENT, DEMO_TEACHER, DEMO_SUBJECT)
    }

    /// The course or grade level.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Full name of the student.
    #[must_use]
    pub fn student(&self) -> &str {
        &self.student
    }

    /// Full name of the teacher.
    #[must_use]
    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    /// Name of the subject being taught.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Render the record in its fixed label format.
    ///
    /// Values are embedded verbatim (no quote escaping). Same as `to_string()`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SchoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "School(course='{}', student='{}', teacher='{}', subject='{}')",
            self.course, self.student, self.teacher, self.subject
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
