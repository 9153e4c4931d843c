//! Secret operations (inject, create, update, upsert, list, get, delete).
//!
//! Every operation validates its input, then checks the caller identity,
//! then talks to the vault. Administrative operations propagate vault
//! errors; [`fetch_env`] degrades them to an empty map.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::domain::{
    DeletedSecret, ImportAction, ImportedSecret, SecretMetadata, SecretSummary,
    SecretWriteResult, Tag,
};
use crate::core::env;
use crate::core::validation::{validate_recovery_days, validate_secret_name};
use crate::core::vault::{CreateRequest, DeleteRequest, ListPages, SecretsVault, UpdateRequest};
use crate::error::{Error, Result, ValidationError, VaultError};

/// Options for [`create`].
pub struct CreateOptions {
    pub name: String,
    pub value: Zeroizing<String>,
    pub description: Option<String>,
    pub kms_key_id: Option<String>,
    pub tags: Vec<Tag>,
}

/// Options for [`update`].
pub struct UpdateOptions {
    pub name: String,
    pub value: Option<Zeroizing<String>>,
    pub description: Option<String>,
    pub kms_key_id: Option<String>,
}

/// Options for [`delete`], as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    pub name: String,
    pub recovery_days: Option<String>,
    pub force_without_recovery: bool,
    pub confirmed: bool,
}

impl DeleteOptions {
    /// Check the flags and build the vault request.
    ///
    /// Confirmation is checked before anything else.
    pub fn validate(&self) -> Result<DeleteRequest> {
        if !self.confirmed {
            return Err(ValidationError::ConfirmationRequired.into());
        }
        validate_secret_name(&self.name)?;
        if self.recovery_days.is_some() && self.force_without_recovery {
            return Err(ValidationError::RecoveryConflict.into());
        }
        let recovery_window_days = self
            .recovery_days
            .as_deref()
            .map(validate_recovery_days)
            .transpose()?;

        Ok(DeleteRequest {
            name: self.name.clone(),
            recovery_window_days,
            force_without_recovery: self.force_without_recovery,
        })
    }
}

/// Fetch a secret as environment variables.
///
/// The secret must hold a JSON object; string values are used as is and
/// other values as their JSON text. Vault failures are logged and yield an
/// empty map so the caller can still run its program.
///
/// # Errors
///
/// Returns `ValidationError` for a bad name or a secret that is not a JSON
/// object.
pub fn fetch_env(vault: &dyn SecretsVault, name: &str) -> Result<BTreeMap<String, Zeroizing<String>>> {
    validate_secret_name(name)?;

    let raw = match vault.verify_identity().and_then(|_| vault.get_secret_string(name)) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            warn!(name, "secret has no string value, nothing to inject");
            return Ok(BTreeMap::new());
        }
        Err(Error::Vault(e)) => {
            warn!(name, error = %e, "could not fetch secret, continuing without it");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(e),
    };

    let parsed: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|_| ValidationError::NotKeyValueJson(name.to_string()))?;
    let object = match parsed {
        serde_json::Value::Object(map) => map,
        _ => return Err(ValidationError::NotKeyValueJson(name.to_string()).into()),
    };

    let env: BTreeMap<String, Zeroizing<String>> = object
        .into_iter()
        .map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (k, Zeroizing::new(value))
        })
        .collect();

    debug!(name, keys = env.len(), "fetched secret keys");
    Ok(env)
}

/// Create a secret.
pub fn create(vault: &dyn SecretsVault, options: CreateOptions) -> Result<SecretWriteResult> {
    validate_secret_name(&options.name)?;
    vault.verify_identity()?;

    let result = vault.create_secret(&CreateRequest {
        name: options.name,
        value: options.value,
        description: options.description,
        kms_key_id: options.kms_key_id,
        tags: options.tags,
    })?;
    info!(name = %result.name, "created secret");
    Ok(result)
}

/// Update a secret's value, description or KMS key.
pub fn update(vault: &dyn SecretsVault, options: UpdateOptions) -> Result<SecretWriteResult> {
    validate_secret_name(&options.name)?;
    if options.value.is_none() && options.description.is_none() && options.kms_key_id.is_none() {
        return Err(ValidationError::NothingToUpdate.into());
    }
    vault.verify_identity()?;

    let result = vault.update_secret(&UpdateRequest {
        name: options.name,
        value: options.value,
        description: options.description,
        kms_key_id: options.kms_key_id,
    })?;
    info!(name = %result.name, "updated secret");
    Ok(result)
}

/// Create or update one secret per entry of an env file.
///
/// Each key becomes `<prefix>/<key>`. All names are validated before the
/// first request, so a bad key leaves the vault untouched.
pub fn upsert(vault: &dyn SecretsVault, path: &Path, prefix: &str) -> Result<Vec<ImportedSecret>> {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return Err(ValidationError::EmptyPrefix.into());
    }

    let parsed = env::parse_file(path)?;
    for skipped in &parsed.skipped {
        warn!(key = %skipped.key, line = skipped.line, reason = %skipped.reason, "skipping entry");
    }

    let planned: Vec<(String, String, Zeroizing<String>)> = parsed
        .entries
        .into_iter()
        .map(|e| (format!("{}/{}", prefix, e.key), e.key, Zeroizing::new(e.value)))
        .collect();
    for (name, _, _) in &planned {
        validate_secret_name(name)?;
    }

    vault.verify_identity()?;

    let mut imported = Vec::with_capacity(planned.len());
    for (name, key, value) in planned {
        let created = vault.create_secret(&CreateRequest {
            name: name.clone(),
            value: value.clone(),
            description: None,
            kms_key_id: None,
            tags: Vec::new(),
        });

        let (action, result) = match created {
            Ok(result) => (ImportAction::Created, result),
            Err(Error::Vault(VaultError::Conflict(_))) => {
                debug!(name = %name, "secret exists, updating value");
                let result = vault.update_secret(&UpdateRequest {
                    name: name.clone(),
                    value: Some(value),
                    description: None,
                    kms_key_id: None,
                })?;
                (ImportAction::Updated, result)
            }
            Err(e) => return Err(e),
        };

        imported.push(ImportedSecret {
            key,
            name: result.name,
            action,
            version_id: result.version_id,
        });
    }

    info!(count = imported.len(), prefix, "imported secrets");
    Ok(imported)
}

/// List secrets whose name starts with `prefix` and that carry every tag.
pub fn list(vault: &dyn SecretsVault, prefix: Option<&str>, tags: &[Tag]) -> Result<Vec<SecretSummary>> {
    vault.verify_identity()?;

    let mut matched = Vec::new();
    for page in ListPages::new(vault) {
        matched.extend(page?.into_iter().filter(|s| {
            prefix.map_or(true, |p| s.name.starts_with(p)) && s.has_tags(tags)
        }));
    }

    debug!(count = matched.len(), "listed secrets");
    Ok(matched)
}

/// Describe a secret. The value is never fetched.
pub fn get(vault: &dyn SecretsVault, name: &str) -> Result<SecretMetadata> {
    validate_secret_name(name)?;
    vault.verify_identity()?;
    vault.describe_secret(name)
}

/// Delete a secret.
pub fn delete(vault: &dyn SecretsVault, options: &DeleteOptions) -> Result<DeletedSecret> {
    let request = options.validate()?;
    vault.verify_identity()?;

    let deleted = vault.delete_secret(&request)?;
    info!(name = %deleted.name, "deleted secret");
    Ok(deleted)
}
