//! Command-line interface for abxref.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CoverageArgs, DoseArgs, EmpiricArgs, LintArgs, ListArgs, RangesArgs, ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
