//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod project;
pub mod simulate;
