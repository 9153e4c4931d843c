//! Secret delivery: child processes and env files.
//!
//! The environment handed to a child is built explicitly as
//! `base + overrides`; the parent's own environment is never modified.

use std::collections::BTreeMap;
#[cfg(unix)]
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result, ValidationError};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Merge `overrides` over `base` into a new map. Overrides win.
///
/// Every value is held in `Zeroizing`, so the map handed to the child is
/// wiped when dropped.
pub fn merge_env<I, K, V>(base: I, overrides: &BTreeMap<String, Zeroizing<String>>) -> BTreeMap<String, Zeroizing<String>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut merged: BTreeMap<String, Zeroizing<String>> = base
        .into_iter()
        .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
        .collect();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Render secrets as `KEY=value` lines.
pub fn to_env_lines(secrets: &BTreeMap<String, Zeroizing<String>>) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::new());
    for (key, value) in secrets {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str(LINE_ENDING);
    }
    out
}

/// Write secrets to a new file readable only by its owner.
///
/// # Errors
///
/// Returns `Error::FileExists` if `path` already exists; the file is left
/// untouched.
pub fn write_env_file(path: &Path, secrets: &BTreeMap<String, Zeroizing<String>>) -> Result<()> {
    if path.exists() {
        return Err(Error::FileExists {
            path: path.display().to_string(),
        });
    }

    let content = to_env_lines(secrets);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o400)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::FileExists {
                    path: path.display().to_string(),
                },
                _ => e.into(),
            })?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content.as_bytes())?;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(path, perms)?;
    }

    debug!(path = %path.display(), count = secrets.len(), "wrote secrets file");
    Ok(())
}

/// Run `command` with exactly the environment `env`.
///
/// Stdio is inherited. Returns the child's exit code, or 1 when it was
/// terminated by a signal.
pub fn launch(command: &[String], env: &BTreeMap<String, Zeroizing<String>>) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(ValidationError::NoCommand)?;

    debug!(program = %program, args = args.len(), env = env.len(), "launching child process");
    let status = Command::new(program)
        .args(args)
        .env_clear()
        .envs(env.iter().map(|(k, v)| (k, v.as_str())))
        .status()?;

    Ok(status.code().unwrap_or(1))
}
