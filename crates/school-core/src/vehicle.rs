//! # Motorcycle Record
//!
//! A validated `[license plate | color | brand]` record.
//!
//! Unlike `SchoolRecord`, construction is fallible:
//! - Each value is trimmed of spaces and ASCII control characters before it
//!   is stored
//! - A value that is empty after trimming is rejected
//! - Identity is the license plate; color and brand do not take part in
//!   equality or hashing

use crate::RecordError;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A motorcycle identified by its license plate.
#[derive(Debug, Clone, Serialize)]
pub struct Motorcycle {
    license_plate: String,
    color: String,
    brand: String,
}

impl Motorcycle {
    /// Create a motorcycle from untrimmed input.
    ///
    /// Fields are checked in order (license plate, color, brand) and the
    /// first empty one is reported.
    pub fn new(license_plate: &str, color: &str, brand: &str) -> Result<Self, RecordError> {
        Ok(Self {
            license_plate: required(license_plate, "license plate")?,
            color: required(color, "color")?,
            brand: required(brand, "brand")?,
        })
    }

    /// The trimmed license plate.
    #[must_use]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// The trimmed color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The trimmed brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }
}

/// Strip leading and trailing code points up to U+0020 (spaces and ASCII
/// control characters). Other Unicode whitespace such as U+00A0 is kept.
fn required(raw: &str, field: &'static str) -> Result<String, RecordError> {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return Err(RecordError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

impl fmt::Display for Motorcycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moto{{licensePlate='{}', color='{}', brand='{}'}}",
            self.license_plate, self.color, self.brand
        )
    }
}

impl PartialEq for Motorcycle {
    fn eq(&self, other: &Self) -> bool {
        self.license_plate == other.license_plate
    }
}

impl Eq for Motorcycle {}

impl Hash for Motorcycle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.license_plate.hash(state);
    }
}

// =============================================================================
// TESTS
// =============================================================================
