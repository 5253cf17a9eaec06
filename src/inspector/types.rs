use serde::Serialize;
use std::fmt;

use crate::utils::format_file_size;

/// Media classification derived from a MIME type prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    Image,
    Video,
    Unknown,
}

impl MediaKind {
    /// Classify from an optional MIME type string.
    ///
    /// A `"image…"` prefix is an image, `"video…"` a video; anything else,
    /// including an absent MIME type, is unknown.
    pub fn from_mime(mime: Option<&str>) -> Self {
        match mime {
            Some(m) if m.starts_with("image") => MediaKind::Image,
            Some(m) if m.starts_with("video") => MediaKind::Video,
            _ => MediaKind::Unknown,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "Image"),
            MediaKind::Video => write!(f, "Video"),
            MediaKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Accept/reject verdict against the configured size limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Accepted,
    TooLarge,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::TooLarge => write!(f, "Too Large"),
        }
    }
}

/// Size limits in bytes per media kind
#[derive(Debug, Clone, Copy)]
pub struct SizeLimits {
    pub image_max_bytes: u64,
    pub video_max_bytes: u64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            image_max_bytes: 5 * 1024 * 1024,
            video_max_bytes: 20 * 1024 * 1024,
        }
    }
}

impl SizeLimits {
    /// Accepted iff the kind is known and the size is within its limit
    /// (inclusive). Unknown files are never accepted.
    pub fn verdict(&self, kind: MediaKind, size_bytes: u64) -> Verdict {
        match kind {
            MediaKind::Image if size_bytes <= self.image_max_bytes => Verdict::Accepted,
            MediaKind::Video if size_bytes <= self.video_max_bytes => Verdict::Accepted,
            _ => Verdict::TooLarge,
        }
    }
}

/// Report for one inspected file.
///
/// Transient: lives for the duration of one check run, is not persisted, and
/// has no identity beyond the path it describes.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub mime_type: Option<String>,
    pub kind: MediaKind,
    pub size_bytes: u64,
    pub size_display: String,
    pub verdict: Verdict,
}

impl FileReport {
    /// Build a report from resolved metadata; classification, size display,
    /// and verdict all derive from `(mime_type, size_bytes)`.
    pub fn new(path: String, mime_type: Option<String>, size_bytes: u64, limits: &SizeLimits) -> Self {
        let kind = MediaKind::from_mime(mime_type.as_deref());
        let verdict = limits.verdict(kind, size_bytes);
        Self {
            path,
            mime_type,
            kind,
            size_bytes,
            size_display: format_file_size(size_bytes),
            verdict,
        }
    }

    /// The three-line selection summary shown for each file:
    /// kind, formatted size, and verdict.
    pub fn summary(&self) -> String {
        format!(
            "{} selected\nSize: {}\nStatus: {}",
            self.kind, self.size_display, self.verdict
        )
    }
}

/// Configuration for the inspector
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub limits: SizeLimits,
    pub sniff_content: bool,
    pub follow_symlinks: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            limits: SizeLimits::default(),
            sniff_content: true,
            follow_symlinks: false,
        }
    }
}

/// Statistics from an inspection run
#[derive(Debug, Default, Serialize)]
pub struct InspectStats {
    pub files_inspected: usize,
    pub files_skipped: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub duration_ms: u64,
}

/// Warning generated during inspection
#[derive(Debug)]
pub struct Warning {
    pub message: String,
}

/// Result of an inspection run
#[derive(Debug)]
pub struct InspectResult {
    pub reports: Vec<FileReport>,
    pub stats: InspectStats,
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_classification_from_mime_prefix() {
        assert_eq!(MediaKind::from_mime(Some("image/png")), MediaKind::Image);
        assert_eq!(MediaKind::from_mime(Some("image/jpeg")), MediaKind::Image);
        assert_eq!(MediaKind::from_mime(Some("video/mp4")), MediaKind::Video);
        assert_eq!(MediaKind::from_mime(Some("audio/mp3")), MediaKind::Unknown);
        assert_eq!(
            MediaKind::from_mime(Some("application/pdf")),
            MediaKind::Unknown
        );
        assert_eq!(MediaKind::from_mime(None), MediaKind::Unknown);
    }

    #[test]
    fn test_image_limit_is_inclusive() {
        let limits = SizeLimits::default();
        assert_eq!(limits.verdict(MediaKind::Image, 5 * MB), Verdict::Accepted);
        assert_eq!(
            limits.verdict(MediaKind::Image, 5 * MB + 1),
            Verdict::TooLarge
        );
    }

    #[test]
    fn test_video_limit_is_inclusive() {
        let limits = SizeLimits::default();
        assert_eq!(limits.verdict(MediaKind::Video, 20 * MB), Verdict::Accepted);
        assert_eq!(
            limits.verdict(MediaKind::Video, 20 * MB + 1),
            Verdict::TooLarge
        );
    }

    #[test]
    fn test_unknown_is_never_accepted() {
        let limits = SizeLimits::default();
        assert_eq!(limits.verdict(MediaKind::Unknown, 0), Verdict::TooLarge);
        assert_eq!(limits.verdict(MediaKind::Unknown, 1), Verdict::TooLarge);
    }

    #[test]
    fn test_video_within_image_budget_uses_video_limit() {
        let limits = SizeLimits::default();
        // 10 MiB video is over the image limit but well under the video one
        assert_eq!(limits.verdict(MediaKind::Video, 10 * MB), Verdict::Accepted);
    }

    #[test]
    fn test_report_summary_format() {
        let limits = SizeLimits::default();
        let report = FileReport::new(
            "photo.png".to_string(),
            Some("image/png".to_string()),
            5 * MB,
            &limits,
        );
        assert_eq!(report.summary(), "Image selected\nSize: 5 MB\nStatus: Accepted");

        let report = FileReport::new(
            "clip.mp4".to_string(),
            Some("video/mp4".to_string()),
            20 * MB + 1,
            &limits,
        );
        assert_eq!(
            report.summary(),
            "Video selected\nSize: 20 MB\nStatus: Too Large"
        );
    }

    #[test]
    fn test_report_with_absent_mime() {
        let limits = SizeLimits::default();
        let report = FileReport::new("mystery".to_string(), None, 1, &limits);
        assert_eq!(report.kind, MediaKind::Unknown);
        assert_eq!(report.verdict, Verdict::TooLarge);
    }
}
