//! Inject command.
//!
//! Fetches one secret and either runs a program with its keys in the
//! environment or writes them to a new file.

use std::path::Path;

use tracing::info;

use crate::cli::{output, Context};
use crate::core::launcher;
use crate::core::secrets;
use crate::core::validation::validate_secret_name;
use crate::core::vault::AwsVault;
use crate::error::{Error, Result, ValidationError};

/// Fetch `secret_name` and deliver it to a file or a program.
///
/// In program mode the process exits with the program's exit code.
pub fn execute(secret_name: &str, output_file: Option<&Path>, program: &[String], ctx: &Context) -> Result<()> {
    validate_secret_name(secret_name)?;

    if let Some(path) = output_file {
        if path.exists() {
            return Err(Error::FileExists {
                path: path.display().to_string(),
            });
        }
    } else if program.is_empty() {
        return Err(ValidationError::NoCommand.into());
    }

    let vault = AwsVault::connect(&ctx.scope, ctx.endpoint.as_deref())?;
    let env = secrets::fetch_env(&vault, secret_name)?;
    info!(secret = secret_name, keys = env.len(), "resolved secret keys");

    if let Some(path) = output_file {
        launcher::write_env_file(path, &env)?;
        output::success(&format!(
            "wrote {} secrets to {}",
            env.len(),
            output::name(&path.display().to_string())
        ));
        return Ok(());
    }

    let base = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    let merged = launcher::merge_env(base, &env);
    drop(env);
    let exit_code = launcher::launch(program, &merged)?;
    drop(merged);
    std::process::exit(exit_code);
}
