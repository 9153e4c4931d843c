//! Secret value sources.
//!
//! A value comes from exactly one of `--value`, `--value-stdin` or `--file`.
//! The flags are checked once and turned into a [`SecretSource`].

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, SourceError};

/// Where a secret value is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl SecretSource {
    /// Build a source from the raw flags.
    ///
    /// Returns `Ok(None)` when no source was given. An empty `--value`
    /// counts as not given.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MultipleSources` if more than one flag is set.
    pub fn from_flags(
        value: Option<String>,
        use_stdin: bool,
        file: Option<PathBuf>,
    ) -> Result<Option<Self>> {
        let value = value.filter(|v| !v.is_empty());
        let given = [value.is_some(), use_stdin, file.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if given > 1 {
            return Err(SourceError::MultipleSources.into());
        }

        Ok(match (value, use_stdin, file) {
            (Some(v), _, _) => Some(Self::Inline(v)),
            (_, true, _) => Some(Self::Stdin),
            (_, _, Some(path)) => Some(Self::File(path)),
            _ => None,
        })
    }

    /// Read the value using the process stdin.
    pub fn resolve(self) -> Result<Zeroizing<String>> {
        let stdin_is_tty = std::io::stdin().is_terminal();
        self.resolve_with(std::io::stdin(), stdin_is_tty)
    }

    /// Read the value, taking stdin from `input`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NoStdin` when stdin is requested but `input`
    /// is a terminal, or an io error if reading fails.
    pub fn resolve_with(self, mut input: impl Read, input_is_tty: bool) -> Result<Zeroizing<String>> {
        match self {
            Self::Inline(value) => Ok(Zeroizing::new(value)),
            Self::Stdin => {
                if input_is_tty {
                    return Err(SourceError::NoStdin.into());
                }
                let mut buf = Zeroizing::new(String::new());
                input.read_to_string(&mut buf)?;
                debug!(len = buf.len(), "read secret value from stdin");
                Ok(Zeroizing::new(strip_trailing_newline(&buf).to_string()))
            }
            Self::File(path) => {
                let content = Zeroizing::new(std::fs::read_to_string(&path)?);
                debug!(path = %path.display(), "read secret value from file");
                Ok(Zeroizing::new(strip_trailing_newline(&content).to_string()))
            }
        }
    }
}

/// Resolve a secret value from the three mutually exclusive flags.
///
/// With no source given the result is `None`.
pub fn resolve_secret_value(
    value: Option<String>,
    use_stdin: bool,
    file: Option<PathBuf>,
) -> Result<Option<Zeroizing<String>>> {
    SecretSource::from_flags(value, use_stdin, file)?
        .map(SecretSource::resolve)
        .transpose()
}

/// Remove at most one trailing newline.
fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
