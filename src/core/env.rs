//! Env-line parsing.
//!
//! Turns `KEY=value` / `export KEY=value` text into ordered secret entries.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::core::constants::DUPLICATE_KEY;
use crate::error::{Result, ValidationError};

/// One parsed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretEntry {
    pub key: String,
    pub value: String,
    /// 1-based source line
    pub line: usize,
}

/// An assignment that was not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub key: String,
    pub line: usize,
    pub reason: String,
}

/// Output of a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub entries: Vec<SecretEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl ParseResult {
    /// Entries as `(key, value)` pairs in source order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }
}

/// Parse env-style text.
///
/// Blank lines and `#` comments are ignored, a leading `export ` is
/// stripped, and the first `=` splits key from value. The first occurrence
/// of a key wins; later ones land in `skipped`.
///
/// # Errors
///
/// Returns `ValidationError::MalformedLine` for a line without `=` or with
/// an empty key.
pub fn parse(content: &str) -> Result<ParseResult> {
    let mut result = ParseResult::default();
    let mut seen = HashSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let assignment = strip_export(line);
        let (key, value) = match assignment.split_once('=') {
            Some((k, v)) if !k.trim().is_empty() => (k.trim(), v.trim()),
            _ => {
                return Err(ValidationError::MalformedLine {
                    line: line_no,
                    content: raw.to_string(),
                }
                .into())
            }
        };

        if !seen.insert(key.to_string()) {
            result.skipped.push(SkippedEntry {
                key: key.to_string(),
                line: line_no,
                reason: DUPLICATE_KEY.to_string(),
            });
            continue;
        }

        result.entries.push(SecretEntry {
            key: key.to_string(),
            value: value.to_string(),
            line: line_no,
        });
    }

    Ok(result)
}

/// Read and parse an env file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseResult> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}
