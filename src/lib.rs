//! # Mediacheck - Media File Validation
//!
//! A small, fast CLI that inspects image and video files and reports their
//! type, a human-readable size, and an accept/reject verdict against
//! configurable size limits.
//!
//! ## Features
//!
//! - **Content-aware**: MIME types come from magic-number sniffing with an
//!   extension-based fallback
//! - **Fixed verdicts**: images and videos are checked against per-kind byte
//!   limits; anything else is never accepted
//! - **Zero-config**: sensible defaults (5 MiB images, 20 MiB videos),
//!   overridable per project via `mediacheck.yml`
//! - **Scriptable**: text or JSON output, nonzero exit when a file is rejected
//!
//! ## Quick Start
//!
//! ```bash
//! # Check a single file
//! mediacheck check photo.png
//!
//! # Check every media file under a directory
//! mediacheck check ./uploads --stats
//! ```

pub mod cli;
pub mod config;
pub mod inspector;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::MediaCheckConfig;

/// Result type alias for mediacheck operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
