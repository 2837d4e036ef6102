//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! [`LaunchContext`](crate::context::LaunchContext) once and routes CLI
//! subcommands to their implementations. Commands that start programs
//! borrow the dispatcher's spawner.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod install;
pub mod launch;
pub mod menu;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
