//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `hatch` - Hatch a rectangle given on the command line (the default)
//! - `job` - Run a hatch described by a YAML/JSON job file

pub mod common;
pub mod hatch;
pub mod job;
pub mod output;
pub mod preview;

pub use hatch::cmd_hatch;
pub use job::cmd_job;
