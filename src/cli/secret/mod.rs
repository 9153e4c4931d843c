//! Secret management commands.
//!
//! One module per action. Each parses its flags, validates them, then
//! connects to the vault and prints the result.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod upsert;

use crate::cli::{Context, SecretAction};
use crate::core::vault::AwsVault;
use crate::error::Result;

/// Run a `secret` action.
pub fn execute(action: SecretAction, ctx: &Context) -> Result<()> {
    match action {
        SecretAction::Create(args) => create::execute(args, ctx),
        SecretAction::Update(args) => update::execute(args, ctx),
        SecretAction::Upsert(args) => upsert::execute(args, ctx),
        SecretAction::List(args) => list::execute(args, ctx),
        SecretAction::Get(args) => get::execute(args, ctx),
        SecretAction::Delete(args) => delete::execute(args, ctx),
    }
}

/// Open the vault for a resolved context.
fn connect(ctx: &Context) -> Result<AwsVault> {
    AwsVault::connect(&ctx.scope, ctx.endpoint.as_deref())
}
