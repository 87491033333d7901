//! Command implementations.
//!
//! Each CLI subcommand lives in its own module and implements the
//! [`Command`] trait; [`CommandDispatcher`] routes parsed arguments
//! to them.

pub mod completions;
pub mod coverage;
pub mod dispatcher;
pub mod dose;
pub mod empiric;
pub mod lint;
pub mod list;
pub mod lookups;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
