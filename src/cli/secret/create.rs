//! Create command.

use std::path::PathBuf;

use clap::Args;
use zeroize::Zeroizing;

use crate::cli::output::{self, Column};
use crate::cli::{CommonArgs, Context};
use crate::core::secrets::{self, CreateOptions};
use crate::core::source::SecretSource;
use crate::core::validation::parse_tags;
use crate::error::{Result, SourceError};

pub(crate) const WRITE_COLUMNS: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("versionId", "Version"),
    Column::new("arn", "ARN"),
];

#[derive(Args)]
pub struct CreateArgs {
    /// Secret name (e.g. app/dev/api-key)
    #[arg(short = 'n', long)]
    pub name: String,

    /// Secret value
    #[arg(short = 'v', long)]
    pub value: Option<String>,

    /// Read the value from stdin
    #[arg(long)]
    pub value_stdin: bool,

    /// Read the value from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// KMS key used to encrypt the secret
    #[arg(short = 'k', long)]
    pub kms_key_id: Option<String>,

    /// Tag as key=value (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Create a secret and print the result.
pub fn execute(args: CreateArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let tags = parse_tags(&args.tags)?;
    let value: Zeroizing<String> = SecretSource::from_flags(args.value, args.value_stdin, args.file)?
        .ok_or(SourceError::MissingSource)?
        .resolve()?;

    let vault = super::connect(&ctx)?;
    let result = secrets::create(
        &vault,
        CreateOptions {
            name: args.name,
            value,
            description: args.description,
            kms_key_id: args.kms_key_id,
            tags,
        },
    )?;

    output::print_records(ctx.format(), WRITE_COLUMNS, &[result])
}
