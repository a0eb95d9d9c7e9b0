//! doctrans - command-line client for the document translation service.
//!
//! This is the main entry point for the doctrans client, which wires the
//! CLI to the backend's upload, text, and format-preserving translation
//! endpoints with localized output and a progress bar.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use doctrans::cli::{Args, Commands};
use doctrans::config::Config;
use doctrans::error::DoctransError;
use doctrans::i18n::{I18n, Locale, LocalePreference};
use doctrans::session::Session;
use doctrans::validate::DocumentKind;
use doctrans::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Setup logging to both console and file
    setup_logging(args.verbose, &config.client.data_dir)?;

    // An explicit override wins over anything the resolver would pick.
    if let Some(url) = args.api_url {
        config.api.base_url = Some(url);
    } else if let Ok(url) = std::env::var("DOCTRANS_API_URL") {
        if !url.is_empty() {
            config.api.base_url = Some(url);
        }
    }

    // Best-effort refinement; the synchronous default stays usable.
    config.refine_from_env_resource().await;

    info!("Using API base URL: {}", config.api.resolve_base_url());
    if let Some(env) = &config.api.app_env {
        info!("Backend environment: {}", env);
    }

    let preference = LocalePreference::new(&config.client.data_dir);
    let mut i18n = I18n::from_preference(preference);

    // Locale management needs no workflow; handle it before building one.
    if let Commands::Lang { code } = &args.command {
        match code {
            None => println!("{}", i18n.locale().code()),
            Some(code) => {
                let locale = Locale::from_code(code).ok_or_else(|| {
                    DoctransError::Config(format!(
                        "Unsupported locale '{}'. Valid codes: zh, en",
                        code
                    ))
                })?;
                if i18n.switch_locale(locale) {
                    println!("{}", i18n.t("locale_switched"));
                } else {
                    println!("{}", i18n.locale().code());
                }
            }
        }
        return Ok(());
    }

    let workflow = Workflow::new(&config, i18n)?;
    let mut session = Session::new();

    // Execute command
    match args.command {
        Commands::File {
            input,
            source,
            target,
            output,
        } => {
            info!("Translating document: {}", input.display());
            let output = output.unwrap_or_else(|| default_artifact_name(&input, &target));
            workflow
                .translate_document(&mut session, &input, &source, &target, Some(&output))
                .await?;
        }
        Commands::Text {
            text,
            source,
            target,
            summary,
            save,
        } => {
            let text = match text {
                Some(text) => text,
                None => {
                    use std::io::Read;
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let save_path = save.then(Workflow::default_text_output_name);
            workflow
                .translate_text(
                    &mut session,
                    &text,
                    &source,
                    &target,
                    summary,
                    save_path.as_deref(),
                )
                .await?;
        }
        Commands::Pdf {
            input,
            source,
            target,
            summary,
            output,
        } => {
            info!("Translating PDF with layout preserved: {}", input.display());
            let output = output.unwrap_or_else(|| default_artifact_name(&input, &target));
            workflow
                .translate_formatted(
                    &mut session,
                    DocumentKind::Pdf,
                    &input,
                    &source,
                    &target,
                    summary,
                    Some(&output),
                )
                .await?;
        }
        Commands::Image {
            input,
            source,
            target,
            summary,
            output,
        } => {
            info!("Translating image: {}", input.display());
            let output = output.unwrap_or_else(|| default_artifact_name(&input, &target));
            workflow
                .translate_formatted(
                    &mut session,
                    DocumentKind::Image,
                    &input,
                    &source,
                    &target,
                    summary,
                    Some(&output),
                )
                .await?;
        }
        Commands::Ppt {
            input,
            source,
            target,
            summary,
            output,
        } => {
            info!("Translating presentation: {}", input.display());
            let output = output.unwrap_or_else(|| default_artifact_name(&input, &target));
            workflow
                .translate_formatted(
                    &mut session,
                    DocumentKind::Ppt,
                    &input,
                    &source,
                    &target,
                    summary,
                    Some(&output),
                )
                .await?;
        }
        Commands::Health => {
            if workflow.check_health().await {
                println!("{}", workflow.i18n().t("system_ok"));
            } else {
                println!("{}", workflow.i18n().t("system_error"));
                std::process::exit(1);
            }
        }
        // Handled before the workflow was built.
        Commands::Lang { .. } => {}
    }

    Ok(())
}

/// Default output path for a translated artifact, next to the input:
/// `report.pdf` translated to `en` becomes `report_en.pdf`.
fn default_artifact_name(input: &Path, target: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "translated".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{}_{}.{}", stem, target, ext.to_string_lossy()),
        None => format!("{}_{}", stem, target),
    };
    input.with_file_name(name)
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool, data_dir: &str) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(data_dir).join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "doctrans.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console layer stays quiet enough to leave room for the panels.
    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_artifact_name_keeps_extension() {
        let name = default_artifact_name(Path::new("/tmp/report.pdf"), "en");
        assert_eq!(name, Path::new("/tmp/report_en.pdf"));
    }

    #[test]
    fn test_default_artifact_name_without_extension() {
        let name = default_artifact_name(Path::new("notes"), "zh");
        assert_eq!(name, Path::new("notes_zh"));
    }
}
