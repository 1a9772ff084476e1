//! # school
//!
//! Library half of the `school` binary, exposed so the CLI can be
//! exercised from integration tests.

pub mod cli;
