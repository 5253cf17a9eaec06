//! Command implementations for the mediacheck CLI
//!
//! Each command is organized into its own module.

pub mod check;
pub mod config;
pub mod version;
