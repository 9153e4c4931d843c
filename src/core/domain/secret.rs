//! Secret records.
//!
//! Read-only projections of what the vault returns. None of them carry a
//! secret value.

use std::collections::BTreeMap;

use serde::Serialize;

/// A `key=value` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// One row of `list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretSummary {
    pub name: String,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub created_date: Option<String>,
    pub last_changed_date: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl SecretSummary {
    /// Whether every requested tag is present with an equal value.
    pub fn has_tags(&self, wanted: &[Tag]) -> bool {
        wanted
            .iter()
            .all(|t| self.tags.get(&t.key).is_some_and(|v| *v == t.value))
    }
}

/// Descriptive metadata returned by `get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretMetadata {
    pub name: String,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub kms_key_id: Option<String>,
    pub rotation_enabled: Option<bool>,
    pub created_date: Option<String>,
    pub last_changed_date: Option<String>,
    pub last_accessed_date: Option<String>,
    pub deleted_date: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub version_ids_to_stages: BTreeMap<String, Vec<String>>,
}

/// Result of `create` and `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretWriteResult {
    pub name: String,
    pub arn: Option<String>,
    pub version_id: Option<String>,
}

/// What `upsert` did with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportAction {
    Created,
    Updated,
}

/// One entry written by `upsert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedSecret {
    pub key: String,
    pub name: String,
    pub action: ImportAction,
    pub version_id: Option<String>,
}

/// Result of `delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedSecret {
    pub name: String,
    pub arn: Option<String>,
    pub deletion_date: Option<String>,
}
