//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Send command arguments.
///
/// Omitted fields are submitted empty and reported by validation.
#[derive(Debug, Args)]
pub struct SendCommand {
    /// Your name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Your email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Subject line
    #[arg(short, long, default_value = "")]
    pub subject: String,

    /// Message body ("-" reads it from stdin)
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Email check arguments.
#[derive(Debug, Args)]
pub struct CheckEmailCommand {
    /// The address to check
    pub address: String,
}

/// Info command arguments.
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to configuration file (uses default if not specified)
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        config: ConfigCommand,
    }

    #[derive(Debug, Parser)]
    struct SendCli {
        #[command(flatten)]
        send: SendCommand,
    }

    #[test]
    fn test_send_defaults_to_empty_fields() {
        let cli = SendCli::try_parse_from(["test", "--name", "Sam"]).unwrap();
        assert_eq!(cli.send.name, "Sam");
        assert!(cli.send.email.is_empty());
        assert!(cli.send.subject.is_empty());
        assert!(cli.send.message.is_empty());
    }

    #[test]
    fn test_send_short_flags() {
        let cli = SendCli::try_parse_from([
            "test", "-n", "Sam", "-e", "sam@x.com", "-s", "Hi", "-m", "Test",
        ])
        .unwrap();
        assert_eq!(cli.send.email, "sam@x.com");
        assert_eq!(cli.send.message, "Test");
    }

    #[test]
    fn test_config_show() {
        let cli = TestCli::try_parse_from(["test", "show", "--json"]).unwrap();
        assert!(matches!(cli.config, ConfigCommand::Show { json: true }));
    }

    #[test]
    fn test_config_path() {
        let cli = TestCli::try_parse_from(["test", "path"]).unwrap();
        assert!(matches!(cli.config, ConfigCommand::Path));
    }

    #[test]
    fn test_config_validate_with_file() {
        let cli = TestCli::try_parse_from(["test", "validate", "/tmp/config.toml"]).unwrap();
        if let ConfigCommand::Validate { file } = cli.config {
            assert_eq!(file, Some(PathBuf::from("/tmp/config.toml")));
        } else {
            panic!("Expected Validate command");
        }
    }
}
