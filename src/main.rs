mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, RunOptions, CONFIG_FILENAME};
use mac_compat::adapters::outbound::console::StderrProgressReporter;
use mac_compat::adapters::outbound::formatters::CsvFormatter;
use mac_compat::adapters::outbound::network::{AddigyClient, SofaClient};
use mac_compat::application::factories::PresenterFactory;
use mac_compat::application::use_cases::GenerateReportUseCase;
use mac_compat::ports::outbound::ReportFormatter;
use mac_compat::shared::error::{CompatError, ExitCode};
use mac_compat::shared::{logging, Result};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

const API_KEY_ENV: &str = "ADDIGY_API_KEY";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();
    logging::init(args.debug);

    let api_key = api_key_from(std::env::var(API_KEY_ENV).ok())?;

    let config = load_config(&args)?;
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let options = RunOptions::resolve(&args, config, home.as_deref())?;

    // Create adapters (Dependency Injection)
    let fleet_repository = match options.api_base_url.as_deref() {
        Some(base_url) => AddigyClient::with_base_url(&api_key, base_url)?,
        None => AddigyClient::new(&api_key)?,
    };
    let support_feed = match options.feed_url.as_deref() {
        Some(feed_url) => SofaClient::with_feed_url(feed_url)?,
        None => SofaClient::new()?,
    };
    let progress_reporter = if args.debug {
        StderrProgressReporter::without_progress_bar()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateReportUseCase::new(fleet_repository, support_feed, progress_reporter);
    let response = use_case.execute(options.request).await?;

    let destination = options.presenter.describe();
    eprintln!("📝 Writing CSV report to {}...", destination);
    let output = CsvFormatter::new().format(&response.devices)?;
    PresenterFactory::create(options.presenter).present(&output)?;

    info!(
        fetched = response.fetched_count,
        written = response.devices.len(),
        policy_errors = response.policy_error_count,
        "report written to {}",
        destination
    );
    Ok(())
}

/// The API key must be present and non-blank
fn api_key_from(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(CompatError::MissingApiKey {
            env_var: API_KEY_ENV,
        }
        .into()),
    }
}

/// Explicit `--config` path, else `mac-compat.config.yml` in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        let config = load_config_from_path(Path::new(path))?;
        info!("Loaded config from: {}", path);
        return Ok(config);
    }

    let cwd = std::env::current_dir()?;
    match discover_config(&cwd)? {
        Some(config) => {
            info!("Auto-discovered config file: {}", cwd.join(CONFIG_FILENAME).display());
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}
