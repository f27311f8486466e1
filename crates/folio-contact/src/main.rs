//! `folio` - CLI for folio-contact
//!
//! This binary is a terminal front end for the portfolio contact form.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use folio_contact::cli::{Cli, Command, ConfigCommand, SendCommand};
use folio_contact::{
    init_logging, is_valid_email, Config, ContactFormController, ContactProfile, FormField,
    TerminalNotifier,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration only for commands that read it
    let config = if cli.command.needs_config() {
        load_config(cli.config.clone())?
    } else {
        Config::default()
    };

    match cli.command {
        Command::Send(send_cmd) => handle_send(&config, send_cmd).await,
        Command::CheckEmail(cmd) => Ok(handle_check_email(&cmd.address)),
        Command::Info(info_cmd) => {
            handle_info(&config, info_cmd.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config(config_cmd) => handle_config(&config, cli.config, config_cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> folio_contact::Result<Config> {
    match path {
        Some(path) => Config::load_existing(path),
        None => Config::load(),
    }
}

async fn handle_send(config: &Config, cmd: SendCommand) -> anyhow::Result<ExitCode> {
    let delivery = config
        .require_delivery()
        .context("cannot send without delivery settings")?;
    let controller = ContactFormController::with_emailjs(delivery, TerminalNotifier)?;

    let message = if cmd.message == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read message from stdin")?;
        body
    } else {
        cmd.message
    };

    controller.update_field(FormField::Name, cmd.name);
    controller.update_field(FormField::Email, cmd.email);
    controller.update_field(FormField::Subject, cmd.subject);
    controller.update_field(FormField::Message, message);

    let signal = controller.submit().await;
    Ok(if signal.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_check_email(address: &str) -> ExitCode {
    if is_valid_email(address) {
        println!("valid: {address}");
        ExitCode::SUCCESS
    } else {
        println!("invalid: {address}");
        ExitCode::FAILURE
    }
}

fn handle_info(config: &Config, json: bool) -> anyhow::Result<()> {
    let profile = ContactProfile::from(&config.profile);
    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        println!("Get in Touch");
        println!("------------");
        print!("{}", profile.render());
        if profile.is_empty() {
            println!();
        }
    }
    Ok(())
}

fn handle_config(
    config: &Config,
    config_path: Option<PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                let mut shown = config.clone();
                if shown.delivery.private_key.is_some() {
                    shown.delivery.private_key = Some("********".to_string());
                }
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                let delivery = &config.delivery;
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Delivery]");
                println!("  Endpoint:     {}", delivery.endpoint);
                println!("  Service ID:   {}", or_unset(&delivery.service_id));
                println!("  Template ID:  {}", or_unset(&delivery.template_id));
                println!("  Public key:   {}", or_unset(&delivery.public_key));
                println!(
                    "  Private key:  {}",
                    if delivery.private_key.is_some() {
                        "(set)"
                    } else {
                        "(unset)"
                    }
                );
                match delivery.timeout() {
                    Some(timeout) => println!("  Timeout:      {}s", timeout.as_secs()),
                    None => println!("  Timeout:      none"),
                }
                println!();
                println!("[Profile]");
                println!(
                    "  Email:        {}",
                    config.profile.email.as_deref().unwrap_or("(unset)")
                );
                println!("  Links:        {}", config.profile.links.len());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            let result = Config::load_existing(path).and_then(|config| {
                config.require_delivery()?;
                Ok(())
            });
            match result {
                Ok(()) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}
