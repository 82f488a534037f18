//! `shipkit detect` — report the detected stack without generating anything.

use std::path::PathBuf;

use tracing::{debug, instrument};

use shipkit_adapters::LocalFilesystem;
use shipkit_core::error::ShipkitError;

use crate::{
    cli::{DetectArgs, DetectFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `shipkit detect` command.
#[instrument(skip_all)]
pub fn execute(
    args: DetectArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let filesystem = LocalFilesystem::new();

    if !project_dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", project_dir.display()),
            source: None,
        });
    }

    let profile = super::detector_from(&config).detect(&filesystem, &project_dir)?;
    debug!(%profile, "detection finished");

    match args.format {
        DetectFormat::Json => {
            let json = serde_json::json!({
                "archetype": profile.archetype().as_str(),
                "language_version": profile.language_version(),
            });
            let rendered = serde_json::to_string_pretty(&json).map_err(|e| {
                CliError::Core(ShipkitError::Internal {
                    message: format!("failed to serialise profile: {e}"),
                })
            })?;
            // JSON goes straight to stdout, bypassing quiet mode — it is the
            // command's whole payload, not progress chatter.
            println!("{rendered}");
        }
        DetectFormat::Human => {
            output.header("Detected project")?;
            output.print(&format!(
                "  Archetype: {}",
                profile.archetype().display_name()
            ))?;
            output.print(&format!("  Version:   {}", profile.language_version()))?;
        }
    }

    Ok(())
}
