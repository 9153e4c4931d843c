//! secretenv - AWS Secrets Manager for your shell.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretenv::cli::output;
use secretenv::cli::{execute, Cli};
use secretenv::core::constants::LOG_ENV;
use secretenv::error::{Error, SourceError, ValidationError, VaultError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretenv=debug")
        } else {
            EnvFilter::new("secretenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.endpoint_url) {
        let suggestion = match &e {
            Error::Vault(VaultError::Access(_)) => {
                Some("check your AWS credentials, or pass --profile / --region")
            }
            Error::Validation(ValidationError::ConfirmationRequired) => Some("re-run with --yes"),
            Error::Validation(ValidationError::NoCommand) => {
                Some("pass a program after --, or --output <file>")
            }
            Error::Source(SourceError::NoStdin) => Some("pipe the value: printf %s \"$VALUE\" | secretenv ..."),
            Error::FileExists { .. } => Some("remove the file or choose another --output path"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
