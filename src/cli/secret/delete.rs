//! Delete command.

use clap::Args;

use crate::cli::output::{self, Column};
use crate::cli::{CommonArgs, Context};
use crate::core::secrets::{self, DeleteOptions};
use crate::error::Result;

const COLUMNS: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("deletionDate", "Deletion Date"),
    Column::new("arn", "ARN"),
];

#[derive(Args)]
pub struct DeleteArgs {
    /// Secret name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Days before the secret is purged (7-30)
    #[arg(long)]
    pub recovery_days: Option<String>,

    /// Purge immediately, with no recovery window
    #[arg(long)]
    pub force_delete_without_recovery: bool,

    /// Confirm the deletion
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Delete a secret.
pub fn execute(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let options = DeleteOptions {
        name: args.name,
        recovery_days: args.recovery_days,
        force_without_recovery: args.force_delete_without_recovery,
        confirmed: args.yes,
    };
    options.validate()?;

    let vault = super::connect(&ctx)?;
    let deleted = secrets::delete(&vault, &options)?;

    output::print_records(ctx.format(), COLUMNS, &[deleted])
}
