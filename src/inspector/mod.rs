//! Media inspection: metadata queries, MIME resolution, and verdicts.
//!
//! The pure pieces (classification, limits, report rendering) live in
//! [`types`]; [`core`] wires them to the filesystem; [`walk`] discovers media
//! candidates inside directories.

pub mod core;
pub mod types;
pub mod walk;

pub use core::Inspector;
pub use types::{
    FileReport, InspectResult, InspectStats, InspectorConfig, MediaKind, SizeLimits, Verdict,
    Warning,
};
