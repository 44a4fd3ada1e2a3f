//! Postenv - command line front end
//!
//! Exposes the argument parser and run loop so the binary stays a thin
//! wrapper and tests can drive the CLI without spawning a process.

pub mod cli;

pub use cli::{Cli, init_tracing};
