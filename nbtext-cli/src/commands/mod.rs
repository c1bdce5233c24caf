//! Command implementations for the nbtext CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod ask;
pub mod completions;
pub mod decode;
pub mod encode;
