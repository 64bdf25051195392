//! Command implementations for the travel CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod interactive;
pub mod matrix;
pub mod nodes;
pub mod prompt;
pub mod routes;
