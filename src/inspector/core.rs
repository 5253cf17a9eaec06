use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use super::types::{
    FileReport, InspectResult, InspectStats, InspectorConfig, SizeLimits, Warning,
};
use super::walk;
use crate::config::MediaCheckConfig;

/// Leading bytes read for content-based MIME sniffing. Every magic number
/// `infer` matches sits well inside this window.
const SNIFF_LEN: usize = 8192;

/// Main inspector struct - resolves file metadata into media reports
#[derive(Clone)]
pub struct Inspector {
    pub(crate) config: InspectorConfig,
}

impl Inspector {
    pub fn new(config: &MediaCheckConfig) -> Self {
        Self {
            config: InspectorConfig {
                limits: SizeLimits {
                    image_max_bytes: config.limits.image_max_bytes,
                    video_max_bytes: config.limits.video_max_bytes,
                },
                sniff_content: config.detection.sniff_content,
                follow_symlinks: config.detection.follow_symlinks,
            },
        }
    }

    pub fn with_config(config: InspectorConfig) -> Self {
        Self { config }
    }

    /// Inspect a single file: one metadata query and one MIME resolution,
    /// then pure classification and verdict.
    pub fn inspect_file(&self, path: &Path) -> Result<FileReport> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

        if !metadata.is_file() {
            anyhow::bail!("Not a regular file: {}", path.display());
        }

        let size_bytes = metadata.len();
        let mime_type = self.resolve_mime(path)?;
        debug!(path = %path.display(), ?mime_type, size_bytes, "resolved file metadata");

        Ok(FileReport::new(
            path.display().to_string(),
            mime_type,
            size_bytes,
            &self.config.limits,
        ))
    }

    /// Inspect a set of paths.
    ///
    /// Files are inspected directly; directories are walked and filtered to
    /// media candidates. Unreadable or missing entries become warnings rather
    /// than aborting the run.
    pub fn inspect_paths(&self, paths: &[PathBuf]) -> Result<InspectResult> {
        let start = Instant::now();
        let mut reports = Vec::new();
        let mut warnings = Vec::new();
        let mut files_skipped = 0usize;

        for path in paths {
            if path.is_file() {
                self.inspect_into(path, &mut reports, &mut warnings, &mut files_skipped);
            } else if path.is_dir() {
                let candidates =
                    walk::collect_media_files(path, self.config.follow_symlinks, &mut warnings);
                for candidate in &candidates {
                    self.inspect_into(candidate, &mut reports, &mut warnings, &mut files_skipped);
                }
            } else {
                files_skipped += 1;
                warnings.push(Warning {
                    message: format!("Path not found: {}", path.display()),
                });
            }
        }

        let accepted = reports.iter().filter(|r| r.verdict.is_accepted()).count();
        let stats = InspectStats {
            files_inspected: reports.len(),
            files_skipped,
            accepted,
            rejected: reports.len() - accepted,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        Ok(InspectResult {
            reports,
            stats,
            warnings,
        })
    }

    fn inspect_into(
        &self,
        path: &Path,
        reports: &mut Vec<FileReport>,
        warnings: &mut Vec<Warning>,
        files_skipped: &mut usize,
    ) {
        match self.inspect_file(path) {
            Ok(report) => reports.push(report),
            Err(e) => {
                *files_skipped += 1;
                warnings.push(Warning {
                    message: format!("{e:#}"),
                });
            }
        }
    }

    /// Resolve the MIME type: content sniffing first, extension lookup as a
    /// fallback. Returns `None` when neither layer recognizes the file.
    fn resolve_mime(&self, path: &Path) -> Result<Option<String>> {
        if self.config.sniff_content {
            // The handle is scoped to this single head read and released
            // before classification runs.
            let head = {
                let mut file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                let mut buf = vec![0u8; SNIFF_LEN];
                let n = file
                    .read(&mut buf)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                buf.truncate(n);
                buf
            };

            if let Some(kind) = infer::get(&head) {
                return Ok(Some(kind.mime_type().to_string()));
            }
        }

        Ok(mime_guess::from_path(path).first().map(|m| m.to_string()))
    }
}
