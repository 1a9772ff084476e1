//! # Property-Based Tests
//!
//! Field identity and description determinism over arbitrary text.

use proptest::prelude::*;
use school_core::{Motorcycle, RecordError, SchoolRecord};

// =============================================================================
// SCHOOL RECORD PROPERTIES
// =============================================================================

proptest! {
    /// Every field reads back exactly as supplied.
    #[test]
    fn fields_read_back_unchanged(
        course in any::<String>(),
        student in any::<String>(),
        teacher in any::<String>(),
        subject in any::<String>()
    ) {
        let record = SchoolRecord::new(
            course.clone(),
            student.clone(),
            teacher.clone(),
            subject.clone(),
        );

        prop_assert_eq!(record.course(), course.as_str());
        prop_assert_eq!(record.student(), student.as_str());
        prop_assert_eq!(record.teacher(), teacher.as_str());
        prop_assert_eq!(record.subject(), subject.as_str());
    }

    /// Describing the same record twice yields the same text.
    #[test]
    fn description_is_deterministic(
        course in ".*",
        student in ".*",
        teacher in ".*",
        subject in ".*"
    ) {
        let record = SchoolRecord::new(course, student, teacher, subject);
        prop_assert_eq!(record.describe(), record.describe());
    }

    /// Distinct instances with equal fields describe identically.
    #[test]
    fn equal_fields_describe_identically(
        course in ".*",
        student in ".*",
        teacher in ".*",
        subject in ".*"
    ) {
        let first = SchoolRecord::new(
            course.as_str(),
            student.as_str(),
            teacher.as_str(),
            subject.as_str(),
        );
        let second = SchoolRecord::new(course, student, teacher, subject);
        prop_assert_eq!(first.describe(), second.describe());
    }

    /// The description is the label format with values embedded verbatim.
    #[test]
    fn description_embeds_values_verbatim(
        course in "[a-zA-Z0-9 ]{0,20}",
        student in "[a-zA-Z0-9 ]{0,20}",
        teacher in "[a-zA-Z0-9 ]{0,20}",
        subject in "[a-zA-Z0-9 ]{0,20}"
    ) {
        let expected = format!(
            "School(course='{course}', student='{student}', teacher='{teacher}', subject='{subject}')"
        );
        let record = SchoolRecord::new(course, student, teacher, subject);
        prop_assert_eq!(record.describe(), expected);
    }
}

// =============================================================================
// MOTORCYCLE PROPERTIES
// =============================================================================

proptest! {
    /// Stored values are the trimmed inputs.
    #[test]
    fn motorcycle_stores_trimmed_values(
        plate in "[A-Z0-9]{1,8}",
        color in "[a-z]{1,10}",
        brand in "[A-Za-z]{1,10}",
        pad in " {0,3}"
    ) {
        let moto = Motorcycle::new(
            &format!("{pad}{plate}{pad}"),
            &format!("{pad}{color}"),
            &format!("{brand}{pad}"),
        )
        .expect("valid");

        prop_assert_eq!(moto.license_plate(), plate.as_str());
        prop_assert_eq!(moto.color(), color.as_str());
        prop_assert_eq!(moto.brand(), brand.as_str());
    }

    /// Whitespace-only plates are always rejected.
    #[test]
    fn blank_plate_rejected(blank in "[ \t\n]{0,5}") {
        let result = Motorcycle::new(&blank, "red", "Ducati");
        prop_assert_eq!(
            result.err(),
            Some(RecordError::EmptyField { field: "license plate" })
        );
    }

    /// Equality ignores color and brand.
    #[test]
    fn motorcycle_equality_follows_plate(
        plate in "[A-Z0-9]{1,8}",
        color_a in "[a-z]{1,10}",
        color_b in "[a-z]{1,10}"
    ) {
        let a = Motorcycle::new(&plate, &color_a, "Ducati").expect("valid");
        let b = Motorcycle::new(&plate, &color_b, "Honda").expect("valid");
        prop_assert_eq!(a, b);
    }
}
