use super::*;
use tempfile::TempDir;

#[test]
fn test_default_limits_match_constants() {
    let config = MediaCheckConfig::default();
    assert_eq!(config.limits.image_max_bytes, 5 * 1024 * 1024);
    assert_eq!(config.limits.video_max_bytes, 20 * 1024 * 1024);
    assert!(config.detection.sniff_content);
    assert!(!config.detection.follow_symlinks);
}

#[test]
fn test_empty_yaml_yields_defaults() {
    let config: MediaCheckConfig = serde_yml::from_str("{}").unwrap();
    assert_eq!(config.limits.image_max_bytes, 5 * 1024 * 1024);
    assert_eq!(config.limits.video_max_bytes, 20 * 1024 * 1024);
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let config: MediaCheckConfig = serde_yml::from_str(
        r#"
limits:
  image_max_bytes: 1000
"#,
    )
    .unwrap();
    assert_eq!(config.limits.image_max_bytes, 1000);
    assert_eq!(config.limits.video_max_bytes, 20 * 1024 * 1024);
    assert!(config.detection.sniff_content);
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mediacheck.yml");

    let mut config = MediaCheckConfig::default();
    config.limits.image_max_bytes = 123;
    config.detection.follow_symlinks = true;
    config.save_to_file(&path).unwrap();

    let loaded = MediaCheckConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.limits.image_max_bytes, 123);
    assert!(loaded.detection.follow_symlinks);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yml");
    assert!(MediaCheckConfig::load_from_file(&path).is_err());
}

#[test]
fn test_load_invalid_yaml_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    std::fs::write(&path, "limits: [not, a, map]").unwrap();
    assert!(MediaCheckConfig::load_from_file(&path).is_err());
}

#[test]
fn test_validate_rejects_zero_limits() {
    let mut config = MediaCheckConfig::default();
    assert!(config.validate().is_ok());

    config.limits.image_max_bytes = 0;
    assert!(config.validate().is_err());

    config.limits.image_max_bytes = 1;
    config.limits.video_max_bytes = 0;
    assert!(config.validate().is_err());
}
