//! Update command.

use std::path::PathBuf;

use clap::Args;

use crate::cli::output;
use crate::cli::{CommonArgs, Context};
use crate::core::secrets::{self, UpdateOptions};
use crate::core::source::resolve_secret_value;
use crate::error::Result;

use super::create::WRITE_COLUMNS;

#[derive(Args)]
pub struct UpdateArgs {
    /// Secret name
    #[arg(short = 'n', long)]
    pub name: String,

    /// New secret value
    #[arg(short = 'v', long)]
    pub value: Option<String>,

    /// Read the new value from stdin
    #[arg(long)]
    pub value_stdin: bool,

    /// Read the new value from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// New description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// New KMS key
    #[arg(short = 'k', long)]
    pub kms_key_id: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Update a secret and print the result.
pub fn execute(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let value = resolve_secret_value(args.value, args.value_stdin, args.file)?;

    let vault = super::connect(&ctx)?;
    let result = secrets::update(
        &vault,
        UpdateOptions {
            name: args.name,
            value,
            description: args.description,
            kms_key_id: args.kms_key_id,
        },
    )?;

    output::print_records(ctx.format(), WRITE_COLUMNS, &[result])
}
