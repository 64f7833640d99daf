//! CLI command implementations

pub mod mark;
pub mod preview;
