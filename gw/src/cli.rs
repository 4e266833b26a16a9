//! CLI argument parsing for gaswatch

use clap::Parser;
use std::path::PathBuf;

/// GasWatch - report gas price edits in the chain registry
///
/// Runs once and exits; meant to be triggered by a scheduler.
#[derive(Parser, Debug)]
#[command(name = "gw")]
#[command(author, version, about = "Report gas price edits in the chain registry", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["gw"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_config_and_log_level() {
        let cli = Cli::try_parse_from(["gw", "-c", "/etc/gaswatch.yml", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/gaswatch.yml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gw", "extra"]).is_err());
    }
}
