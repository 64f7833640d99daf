//! gridscribe CLI library.
//!
//! This crate provides the command implementations and argument
//! definitions for the `gridscribe` binary; integration tests drive the
//! commands through this library.

pub mod cli_args;
pub mod commands;
pub mod resolve;
