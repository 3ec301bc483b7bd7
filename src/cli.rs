use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "car-import", version, about = "Vehicle import cost estimator")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "config.toml", global = true, env = "CAR_IMPORT_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the API server (default)
    Start,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Call every upstream provider once and report which ones answer
    Probe,

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_start() {
        let cli = Cli::parse_from(["car-import"]);
        assert_eq!(cli.get_command(), Commands::Start);
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::parse_from(["car-import", "config", "validate", "--config", "prod.toml"]);
        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                action: ConfigCommands::Validate
            }
        );
    }

    #[test]
    fn test_probe_command() {
        let cli = Cli::parse_from(["car-import", "probe"]);
        assert_eq!(cli.get_command(), Commands::Probe);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
