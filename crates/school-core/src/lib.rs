//! # school-core
//!
//! Plain value types for the school workspace.
//!
//! - `record`: [`SchoolRecord`], a flat course/student/teacher/subject tuple
//!   with a fixed-format description. Construction never fails.
//! - `vehicle`: [`Motorcycle`], a validated license plate/color/brand record
//!   whose identity is its license plate.
//! - `types`: [`RecordError`].
//! - `primitives`: demonstration constants.
//!
//! ## Architectural Constraints
//!
//! - No I/O, no logging, no async
//! - Every type is a plain owned value (`Send + Sync`)

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod record;
pub mod types;
pub mod vehicle;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use record::SchoolRecord;
pub use types::RecordError;
pub use vehicle::Motorcycle;
