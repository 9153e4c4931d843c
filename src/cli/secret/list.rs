//! List command.

use clap::Args;

use crate::cli::output::{self, Column};
use crate::cli::{CommonArgs, Context};
use crate::core::secrets;
use crate::core::validation::parse_tags;
use crate::error::Result;

const COLUMNS: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("description", "Description"),
    Column::new("lastChangedDate", "Last Changed"),
    Column::new("tags", "Tags"),
];

#[derive(Args)]
pub struct ListArgs {
    /// Only secrets whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Only secrets carrying this key=value tag (repeatable, all must match)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// List matching secrets.
pub fn execute(args: ListArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let tags = parse_tags(&args.tags)?;

    let vault = super::connect(&ctx)?;
    let found = secrets::list(&vault, args.prefix.as_deref(), &tags)?;

    output::print_records(ctx.format(), COLUMNS, &found)
}
