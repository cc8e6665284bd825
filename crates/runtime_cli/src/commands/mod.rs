//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod classify;
pub mod convert;
pub mod holiday;
