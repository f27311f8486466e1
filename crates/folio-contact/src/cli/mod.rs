//! Command-line interface for folio-contact.
//!
//! This module provides the CLI structure for the `folio` binary, a terminal
//! front end for the contact form.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CheckEmailCommand, ConfigCommand, InfoCommand, SendCommand};

/// folio - Get in touch from the terminal
///
/// Fills in the portfolio contact form, validates it, and forwards it to the
/// configured email delivery service.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a message through the contact form
    Send(SendCommand),

    /// Check whether an email address would be accepted
    CheckEmail(CheckEmailCommand),

    /// Show direct contact details and social links
    Info(InfoCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Check whether this command reads the loaded configuration.
    ///
    /// `config validate` loads its own target, so a broken file is reported
    /// rather than aborting startup.
    #[must_use]
    pub fn needs_config(&self) -> bool {
        match self {
            Self::Send(_) | Self::Info(_) => true,
            Self::CheckEmail(_) => false,
            Self::Config(cmd) => matches!(cmd, ConfigCommand::Show { .. }),
        }
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Info(InfoCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "folio");
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(2, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "folio",
            "send",
            "--name",
            "Sam",
            "--email",
            "sam@x.com",
            "--subject",
            "Hi",
            "--message",
            "Test",
        ])
        .unwrap();
        match cli.command {
            Command::Send(send) => {
                assert_eq!(send.name, "Sam");
                assert_eq!(send.subject, "Hi");
            }
            other => panic!("Expected Send command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_email() {
        let cli = Cli::try_parse_from(["folio", "check-email", "a@b.com"]).unwrap();
        assert!(matches!(cli.command, Command::CheckEmail(_)));
    }

    #[test]
    fn test_parse_info_json() {
        let cli = Cli::try_parse_from(["folio", "info", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Info(InfoCommand { json: true })));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["folio", "-c", "/custom/config.toml", "info"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_needs_config() {
        let needs = |args: &[&str]| Cli::try_parse_from(args).unwrap().command.needs_config();

        assert!(needs(&["folio", "send", "-n", "Sam"]));
        assert!(needs(&["folio", "info"]));
        assert!(needs(&["folio", "config", "show"]));
        assert!(!needs(&["folio", "check-email", "a@b.com"]));
        assert!(!needs(&["folio", "config", "path"]));
        assert!(!needs(&["folio", "config", "validate"]));
    }

    #[test]
    fn test_parse_with_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "config", "path", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
