//! Directory walking filtered to media candidates.
//!
//! When the user hands us a directory instead of individual files, only
//! entries whose extension maps to an `image/*` or `video/*` type are
//! surfaced, the same filter a media picker would apply.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use super::types::Warning;

/// Whether a path looks like a media candidate by extension.
pub fn is_media_candidate(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.type_() == mime_guess::mime::IMAGE || m.type_() == mime_guess::mime::VIDEO)
        .unwrap_or(false)
}

/// Collect media candidate files under `root`, sorted for stable output.
/// Walk errors are reported as warnings, not failures.
pub fn collect_media_files(
    root: &Path,
    follow_symlinks: bool,
    warnings: &mut Vec<Warning>,
) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root).follow_links(follow_symlinks).build();
    let mut files = Vec::new();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && is_media_candidate(entry.path())
                {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                warnings.push(Warning {
                    message: format!("Walk error: {}", e),
                });
            }
        }
    }

    files.sort();
    files
}
