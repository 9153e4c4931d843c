//! Upsert (import) command.

use std::path::PathBuf;

use clap::Args;

use crate::cli::output::{self, Column};
use crate::cli::{CommonArgs, Context};
use crate::core::secrets;
use crate::error::Result;

const COLUMNS: &[Column] = &[
    Column::new("key", "Key"),
    Column::new("name", "Name"),
    Column::new("action", "Action"),
    Column::new("versionId", "Version"),
];

#[derive(Args)]
pub struct UpsertArgs {
    /// Env file with KEY=value lines
    #[arg(long)]
    pub file: PathBuf,

    /// Name prefix; each key is stored as <prefix>/<KEY>
    #[arg(long)]
    pub prefix: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Import an env file and print one row per secret written.
pub fn execute(args: UpsertArgs, ctx: &Context) -> Result<()> {
    let ctx = ctx.narrow(&args.common);
    let vault = super::connect(&ctx)?;
    let imported = secrets::upsert(&vault, &args.file, &args.prefix)?;

    output::print_records(ctx.format(), COLUMNS, &imported)
}
