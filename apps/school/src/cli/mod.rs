//! # School CLI Module
//!
//! This module implements the CLI interface for the `school` binary.
//!
//! ## Available Commands
//!
//! - `demo` - Print the demonstration record (default)
//! - `record` - Print a school record built from flags
//! - `moto` - Validate and print a motorcycle

mod commands;

use clap::{Parser, Subcommand};
use school_core::RecordError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// School - record printer
///
/// Builds a school record or a motorcycle and prints its description.
#[derive(Parser, Debug)]
#[command(name = "school")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the demonstration record
    Demo,

    /// Print a school record built from the given values
    Record {
        /// Course or grade level
        #[arg(long)]
        course: String,

        /// Student's full name
        #[arg(long)]
        student: String,

        /// Teacher's full name
        #[arg(long)]
        teacher: String,

        /// Subject being taught
        #[arg(long)]
        subject: String,
    },

    /// Validate and print a motorcycle
    Moto {
        /// License plate (must not be blank)
        #[arg(short, long)]
        plate: String,

        /// Color (must not be blank)
        #[arg(short, long)]
        color: String,

        /// Brand (must not be blank)
        #[arg(short, long)]
        brand: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), RecordError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Demo) => cmd_demo(json_mode),
        Some(Commands::Record {
            course,
            student,
            teacher,
            subject,
        }) => cmd_record(json_mode, course, student, teacher, subject),
        Some(Commands::Moto {
            plate,
            color,
            brand,
        }) => cmd_moto(json_mode, &plate, &color, &brand),
        None => {
            // No subcommand - print the demo record
            cmd_demo(json_mode)
        }
    }
}
