//! # CLI Command Implementations
//!
//! Each command builds its record, renders it, and prints the result.
//! Rendering is kept separate so it can be tested without stdout.

use school_core::{Motorcycle, RecordError, SchoolRecord};
use serde::Serialize;

// =============================================================================
// RENDERING
// =============================================================================

/// Pretty JSON for any serializable record.
fn to_json<T: Serialize>(value: &T) -> Result<String, RecordError> {
    serde_json::to_string_pretty(value).map_err(|e| RecordError::Serialization(e.to_string()))
}

/// Render a school record as its description, or as JSON in json mode.
pub fn render_record(record: &SchoolRecord, json_mode: bool) -> Result<String, RecordError> {
    if json_mode {
        return to_json(record);
    }
    Ok(record.describe())
}

/// Render a motorcycle as its display form, or as JSON in json mode.
pub fn render_moto(moto: &Motorcycle, json_mode: bool) -> Result<String, RecordError> {
    if json_mode {
        return to_json(moto);
    }
    Ok(moto.to_string())
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Print the demonstration record.
pub fn cmd_demo(json_mode: bool) -> Result<(), RecordError> {
    tracing::debug!("rendering demo record");
    println!("{}", render_record(&SchoolRecord::demo(), json_mode)?);
    Ok(())
}

// =============================================================================
// RECORD COMMAND
// =============================================================================

/// Print a school record built from the given values. Never rejects input.
pub fn cmd_record(
    json_mode: bool,
    course: String,
    student: String,
    teacher: String,
    subject: String,
) -> Result<(), RecordError> {
    let record = SchoolRecord::new(course, student, teacher, subject);
    tracing::debug!(course = %record.course, subject = %record.subject, "rendering record");
    println!("{}", render_record(&record, json_mode)?);
    Ok(())
}

// =============================================================================
// MOTO COMMAND
// =============================================================================

/// Build a motorcycle from untrimmed flags.
///
/// Split out of `cmd_moto` so validation failures are observable in tests.
pub fn build_moto(plate: &str, color: &str, brand: &str) -> Result<Motorcycle, RecordError> {
    let moto = Motorcycle::new(plate, color, brand)?;
    tracing::debug!(plate = moto.license_plate(), "motorcycle validated");
    Ok(moto)
}

/// Validate and print a motorcycle.
pub fn cmd_moto(json_mode: bool, plate: &str, color: &str, brand: &str) -> Result<(), RecordError> {
    let moto = build_moto(plate, color, brand)?;
    println!("{}", render_moto(&moto, json_mode)?);
    Ok(())
}
