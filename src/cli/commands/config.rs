//! Configuration command implementations
//!
//! Commands for managing mediacheck configuration.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::cli::ConfigCommands;
use crate::cli::Output;
use crate::config::MediaCheckConfig;
use crate::utils::{format_file_size, get_current_dir};

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output).await,
        ConfigCommands::Validate => validate(config_path, output).await,
        ConfigCommands::Show => show(config_path, output).await,
    }
}

async fn init(output: &Output) -> Result<()> {
    output.header("🔧 Initializing Configuration");

    let current_dir = get_current_dir()?;
    let config_path = current_dir.join("mediacheck.yml");

    // Check if config already exists
    if config_path.exists() {
        output.warning("Configuration file already exists");
        if !output.confirm("Do you want to overwrite it?") {
            output.info("Configuration initialization cancelled");
            return Ok(());
        }
    }

    let config = MediaCheckConfig::default();
    config.save_to_file(&config_path)?;

    output.success("Configuration file created successfully");
    output.table_row("Config file", &config_path.display().to_string());
    output.info("Edit mediacheck.yml to customize the size limits");

    Ok(())
}

async fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("✅ Validating Configuration");

    let Some(config_path) = resolve_config_path(config_path) else {
        output.error("Configuration file not found");
        output.indent("Run 'mediacheck config init' to create a configuration file");
        return Ok(());
    };

    match MediaCheckConfig::load_from_file(&config_path).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => {
            output.success("Configuration is valid");
            output.blank_line();

            output.table_row("Config file", &config_path.display().to_string());
            output.table_row(
                "Image limit",
                &format_file_size(config.limits.image_max_bytes),
            );
            output.table_row(
                "Video limit",
                &format_file_size(config.limits.video_max_bytes),
            );
            output.table_row(
                "Content sniffing",
                &config.detection.sniff_content.to_string(),
            );
            output.table_row(
                "Follow symlinks",
                &config.detection.follow_symlinks.to_string(),
            );
        }
        Err(err) => {
            output.error("Configuration file is invalid");
            output.indent(&format!("Error: {}", err));
        }
    }

    Ok(())
}

async fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("📄 Current Configuration");

    let Some(config_path) = resolve_config_path(config_path) else {
        output.error("Configuration file not found");
        output.indent("Run 'mediacheck config init' to create a configuration file");
        return Ok(());
    };

    match fs::read_to_string(&config_path) {
        Ok(content) => {
            output.blank_line();
            output.separator();
            println!("{}", content);
            output.separator();
            output.blank_line();
            output.table_row("Config file", &config_path.display().to_string());
        }
        Err(err) => {
            output.error("Failed to read configuration file");
            output.indent(&format!("Error: {}", err));
        }
    }

    Ok(())
}

/// An explicit --config path wins; otherwise discover the project file.
fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    match config_path {
        Some(p) => Some(PathBuf::from(p)),
        None => MediaCheckConfig::find_config_file(),
    }
}
