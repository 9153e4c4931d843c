//! Command-line interface.

pub mod completions;
pub mod inject;
pub mod output;
pub mod secret;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::output::OutputFormat;
use crate::core::constants::ENDPOINT_ENV;
use crate::core::scope::{resolve_scope, AwsScope};
use crate::error::Result;

/// secretenv - AWS Secrets Manager for your shell.
#[derive(Parser)]
#[command(
    name = "secretenv",
    about = "Inject AWS Secrets Manager secrets into processes and manage them",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Override the vault endpoint (e.g. http://localhost:4566 for LocalStack)
    #[arg(long, global = true, env = ENDPOINT_ENV, hide_env_values = true)]
    pub endpoint_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a program with a secret's keys as env vars, write them to a file, or manage secrets
    Aws(AwsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Profile and region flags, accepted at every level.
#[derive(Args, Clone, Debug, Default)]
pub struct ScopeArgs {
    /// AWS region
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// AWS profile
    #[arg(short = 'p', long)]
    pub profile: Option<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> AwsScope {
        AwsScope::new(self.profile.clone(), self.region.clone())
    }
}

/// Scope plus output format, shared by `secret` and its actions.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Output format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// `aws` command.
#[derive(Args)]
#[command(subcommand_negates_reqs = true)]
pub struct AwsArgs {
    #[command(subcommand)]
    pub command: Option<AwsCommand>,

    /// Secret whose JSON key/value pairs are injected
    #[arg(short = 's', long = "secret-name", required = true)]
    pub secret_name: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Write the secrets to this file instead of running a program
    #[arg(short = 'o', long = "output", conflicts_with = "program")]
    pub output_file: Option<PathBuf>,

    /// Program and arguments to run, after `--`
    #[arg(last = true)]
    pub program: Vec<String>,
}

/// `aws` subcommands.
#[derive(Subcommand)]
pub enum AwsCommand {
    /// Manage secrets in AWS Secrets Manager
    Secret(SecretArgs),
}

/// `aws secret` command.
#[derive(Args)]
pub struct SecretArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub action: SecretAction,
}

/// `aws secret` actions.
#[derive(Subcommand)]
pub enum SecretAction {
    /// Create a secret
    Create(secret::create::CreateArgs),

    /// Update a secret's value, description or KMS key
    Update(secret::update::UpdateArgs),

    /// Create or update one secret per entry of an env file
    #[command(alias = "import")]
    Upsert(secret::upsert::UpsertArgs),

    /// List secrets, filtered by name prefix and tags
    List(secret::list::ListArgs),

    /// Show a secret's metadata (never its value)
    Get(secret::get::GetArgs),

    /// Delete a secret
    Delete(secret::delete::DeleteArgs),
}

/// Settings inherited from outer command levels.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub scope: AwsScope,
    pub output: Option<OutputFormat>,
    pub endpoint: Option<String>,
}

impl Context {
    /// Apply an inner level's flags over this context.
    pub fn narrow(&self, common: &CommonArgs) -> Self {
        Self {
            scope: resolve_scope(&common.scope.scope(), &self.scope),
            output: common.output.or(self.output),
            endpoint: self.endpoint.clone(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

/// Execute a command.
pub fn execute(command: Command, endpoint: Option<String>) -> Result<()> {
    match command {
        Command::Aws(args) => {
            let ctx = Context {
                scope: args.scope.scope(),
                output: None,
                endpoint,
            };
            match args.command {
                Some(AwsCommand::Secret(secret_args)) => {
                    let ctx = ctx.narrow(&secret_args.common);
                    secret::execute(secret_args.action, &ctx)
                }
                None => inject::execute(
                    args.secret_name.as_deref().unwrap_or_default(),
                    args.output_file.as_deref(),
                    &args.program,
                    &ctx,
                ),
            }
        }
        Command::Completions { shell } => completions::execute(shell),
    }
}
