//! GasWatch - CLI entry point
//!
//! One invocation is one run. Run failures are reported through the webhook,
//! so the process exits successfully once reporting is done.

use chrono::Utc;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use gaswatch::cli::Cli;
use gaswatch::config::Config;
use gaswatch::domain::RunResult;
use gaswatch::github::GithubClient;
use gaswatch::notify::WebhookNotifier;
use gaswatch::runner::{RunSettings, execute};

fn parse_level(level_str: Option<&str>) -> tracing::Level {
    match level_str.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (INFO)
    let level = parse_level(cli_log_level.or(config_log_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "gaswatch starting: {}/{} (last {}h)",
        config.github.owner, config.github.repo, config.github.lookback_hours
    );

    let source = GithubClient::from_config(&config.github).context("Failed to create GitHub client")?;
    let notifier = WebhookNotifier::from_config(&config.notify).context("Failed to create webhook notifier")?;
    let settings = RunSettings::from_config(&config);

    match execute(Utc::now(), &source, &notifier, &settings).await {
        RunResult::Success(matches) if matches.is_empty() => {
            println!("{} No gas price changes", "✓".green());
        }
        RunResult::Success(matches) => {
            println!("{} {} gas price change(s) reported", "✓".green(), matches.len());
            for m in matches {
                println!("  {} {}", m.entity_name.cyan(), m.commit_id.dimmed());
            }
        }
        RunResult::Failure(description) => {
            println!("{} Run failed: {}", "✗".red(), description);
        }
    }

    Ok(())
}
