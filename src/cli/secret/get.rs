//! Get command.

use clap::Args;

use crate::cli::output::{self, Column};
use crate::cli::{CommonArgs, Context};
use crate::core::secrets;
use crate::error::Result;

const COLUMNS: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("description", "Description"),
    Column::new("createdDate", "Created"),
    Column::new("lastChangedDate", "Last Changed"),
    Column::new("tags", "Tags"),
    Column::new("arn", "ARN"),
];

#[derive(Args)]
pub struct GetArgs {
    /// Secret name
    #[arg(short = 'n', long)]
    pub name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print a secret's metadata.
pub fn execute(args: GetArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let vault = super::connect(&ctx)?;
    let metadata = secrets::get(&vault, &args.name)?;

    output::print_records(ctx.format(), COLUMNS, &[metadata])
}
