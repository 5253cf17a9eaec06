use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::MediaCheckConfig;
use crate::inspector::{InspectResult, Inspector};

#[derive(Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Maximum accepted image size in bytes (overrides config)
    #[arg(long, value_name = "BYTES")]
    pub max_image_size: Option<u64>,

    /// Maximum accepted video size in bytes (overrides config)
    #[arg(long, value_name = "BYTES")]
    pub max_video_size: Option<u64>,

    /// Skip content sniffing and classify by extension only
    #[arg(long)]
    pub no_sniff: bool,

    /// Follow symbolic links when walking directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Show statistics after checking
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

pub async fn execute(args: CheckArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let mut config = MediaCheckConfig::load(config_path)?;

    // Apply CLI overrides
    if let Some(limit) = args.max_image_size {
        config.limits.image_max_bytes = limit;
    }
    if let Some(limit) = args.max_video_size {
        config.limits.video_max_bytes = limit;
    }
    if args.no_sniff {
        config.detection.sniff_content = false;
    }
    if args.follow_symlinks {
        config.detection.follow_symlinks = true;
    }

    config.validate()?;

    let inspector = Inspector::new(&config);
    let result = inspector.inspect_paths(&args.paths)?;

    match args.format {
        OutputFormat::Json => print_json_results(&result)?,
        OutputFormat::Text => print_text_results(&result, &args, output),
    }

    // A rejected file fails the whole run
    if result.stats.rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text_results(result: &InspectResult, args: &CheckArgs, output: &Output) {
    for report in &result.reports {
        println!("{}", console::style(&report.path).cyan().bold());
        for line in report.summary().lines() {
            println!("  {}", line);
        }

        if output.is_verbose() {
            let mime = report.mime_type.as_deref().unwrap_or("(none)");
            output.verbose(&format!("MIME type: {} ({} bytes)", mime, report.size_bytes));
        }

        if !report.verdict.is_accepted() {
            output.warning("File too large!");
        }
        println!();
    }

    for warning in &result.warnings {
        output.warning(&warning.message);
    }

    if args.stats {
        println!();
        println!(
            "{} {}",
            console::style("📊").green().bold(),
            console::style("Check Statistics").green().bold()
        );
        println!(
            "  Files inspected: {}",
            console::style(result.stats.files_inspected).cyan()
        );
        if result.stats.files_skipped > 0 {
            println!(
                "  Files skipped: {}",
                console::style(result.stats.files_skipped).cyan()
            );
        }
        println!("  Accepted: {}", console::style(result.stats.accepted).cyan());
        println!("  Rejected: {}", console::style(result.stats.rejected).cyan());
        println!(
            "  Check time: {}ms",
            console::style(result.stats.duration_ms).cyan()
        );
        if !result.warnings.is_empty() {
            println!(
                "  Warnings: {}",
                console::style(result.warnings.len()).yellow()
            );
        }
    }
}

fn print_json_results(result: &InspectResult) -> Result<()> {
    let payload = json!({
        "results": result.reports.iter().map(|r| json!({
            "path": r.path,
            "mime_type": r.mime_type,
            "kind": r.kind,
            "size_bytes": r.size_bytes,
            "size": r.size_display,
            "verdict": r.verdict,
        })).collect::<Vec<_>>(),
        "warnings": result.warnings.iter().map(|w| w.message.clone()).collect::<Vec<_>>(),
        "statistics": {
            "files_inspected": result.stats.files_inspected,
            "files_skipped": result.stats.files_skipped,
            "accepted": result.stats.accepted,
            "rejected": result.stats.rejected,
            "duration_ms": result.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
