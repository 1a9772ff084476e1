//! # Demonstration Primitives
//!
//! Fixed values used by the demonstration record.
//!
//! These are compiled into the binary and never change at runtime.
//! `SchoolRecord::demo()` and the `school` binary's default command
//! both read from here.

/// Course of the demonstration record.
pub const DEMO_COURSE: &str = "10th Grade";

/// Student of the demonstration record.
pub const DEMO_STUDENT: &str = "John Doe";

/// Teacher of the demonstration record.
pub const DEMO_TEACHER: &str = "Jane Smith";

/// Subject of the demonstration record.
pub const DEMO_SUBJECT: &str = "Mathematics";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_values_are_not_empty() {
        for value in [DEMO_COURSE, DEMO_STUDENT, DEMO_TEACHER, DEMO_SUBJECT] {
            assert!(!value.is_empty());
        }
    }
}
