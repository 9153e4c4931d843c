//! In-memory vault for tests.
//!
//! Mirrors the error behavior of Secrets Manager closely enough to exercise
//! the operations in `core::secrets` without a network.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use zeroize::Zeroizing;

use super::{CreateRequest, DeleteRequest, SecretPage, SecretsVault, UpdateRequest};
use crate::core::domain::{CallerIdentity, DeletedSecret, SecretMetadata, SecretSummary, SecretWriteResult};
use crate::error::{Result, VaultError};

#[derive(Debug, Clone, Default)]
struct Stored {
    value: String,
    description: Option<String>,
    kms_key_id: Option<String>,
    tags: BTreeMap<String, String>,
    version: u32,
}

/// Mock vault backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct MockVault {
    secrets: RefCell<BTreeMap<String, Stored>>,
    page_size: usize,
    deny_identity: bool,
    fail_list: bool,
    /// Number of calls made to `list_page`
    pub list_calls: Cell<usize>,
    /// Number of calls made to `verify_identity`
    pub identity_calls: Cell<usize>,
}

impl MockVault {
    pub fn new() -> Self {
        Self {
            page_size: 100,
            ..Default::default()
        }
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Make `verify_identity` fail with an access error.
    pub fn denying_identity(mut self) -> Self {
        self.deny_identity = true;
        self
    }

    /// Make `list_page` fail.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn insert(&self, name: &str, value: &str) {
        self.secrets.borrow_mut().insert(
            name.to_string(),
            Stored {
                value: value.to_string(),
                version: 1,
                ..Default::default()
            },
        );
    }

    pub fn insert_tagged(&self, name: &str, tags: &[(&str, &str)]) {
        self.secrets.borrow_mut().insert(
            name.to_string(),
            Stored {
                value: "{}".to_string(),
                tags: tags
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                version: 1,
                ..Default::default()
            },
        );
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.secrets.borrow().get(name).map(|s| s.value.clone())
    }

    pub fn description(&self, name: &str) -> Option<String> {
        self.secrets
            .borrow()
            .get(name)
            .and_then(|s| s.description.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.secrets.borrow().contains_key(name)
    }

    fn arn(name: &str) -> String {
        format!("arn:aws:secretsmanager:us-east-1:000000000000:secret:{}", name)
    }
}

impl SecretsVault for MockVault {
    fn verify_identity(&self) -> Result<CallerIdentity> {
        self.identity_calls.set(self.identity_calls.get() + 1);
        if self.deny_identity {
            return Err(VaultError::Access("The security token included in the request is invalid".into()).into());
        }
        Ok(CallerIdentity {
            account: Some("000000000000".into()),
            arn: Some("arn:aws:iam::000000000000:user/test".into()),
            user_id: Some("AIDATEST".into()),
        })
    }

    fn get_secret_string(&self, name: &str) -> Result<Option<Zeroizing<String>>> {
        self.secrets
            .borrow()
            .get(name)
            .map(|s| Some(Zeroizing::new(s.value.clone())))
            .ok_or_else(|| VaultError::NotFound(name.to_string()).into())
    }

    fn create_secret(&self, request: &CreateRequest) -> Result<SecretWriteResult> {
        let mut secrets = self.secrets.borrow_mut();
        if secrets.contains_key(&request.name) {
            return Err(VaultError::Conflict(request.name.clone()).into());
        }
        secrets.insert(
            request.name.clone(),
            Stored {
                value: request.value.to_string(),
                description: request.description.clone(),
                kms_key_id: request.kms_key_id.clone(),
                tags: request
                    .tags
                    .iter()
                    .map(|t| (t.key.clone(), t.value.clone()))
                    .collect(),
                version: 1,
            },
        );
        Ok(SecretWriteResult {
            name: request.name.clone(),
            arn: Some(Self::arn(&request.name)),
            version_id: Some("v1".into()),
        })
    }

    fn update_secret(&self, request: &UpdateRequest) -> Result<SecretWriteResult> {
        let mut secrets = self.secrets.borrow_mut();
        let stored = secrets
            .get_mut(&request.name)
            .ok_or_else(|| VaultError::NotFound(request.name.clone()))?;

        if let Some(value) = &request.value {
            stored.value = value.to_string();
            stored.version += 1;
        }
        if let Some(description) = &request.description {
            stored.description = Some(description.clone());
        }
        if let Some(kms) = &request.kms_key_id {
            stored.kms_key_id = Some(kms.clone());
        }

        Ok(SecretWriteResult {
            name: request.name.clone(),
            arn: Some(Self::arn(&request.name)),
            version_id: request
                .value
                .as_ref()
                .map(|_| format!("v{}", stored.version)),
        })
    }

    fn list_page(&self, next_token: Option<&str>) -> Result<SecretPage> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list {
            return Err(VaultError::Generic("Rate exceeded".into()).into());
        }

        let start: usize = next_token.and_then(|t| t.parse().ok()).unwrap_or(0);
        let secrets = self.secrets.borrow();
        let page: Vec<SecretSummary> = secrets
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|(name, s)| SecretSummary {
                name: name.clone(),
                arn: Some(Self::arn(name)),
                description: s.description.clone(),
                tags: s.tags.clone(),
                ..Default::default()
            })
            .collect();

        let end = start + page.len();
        let next_token = (end < secrets.len()).then(|| end.to_string());
        Ok(SecretPage {
            secrets: page,
            next_token,
        })
    }

    fn describe_secret(&self, name: &str) -> Result<SecretMetadata> {
        let secrets = self.secrets.borrow();
        let stored = secrets
            .get(name)
            .ok_or_else(|| VaultError::NotFound(name.to_string()))?;
        Ok(SecretMetadata {
            name: name.to_string(),
            arn: Some(Self::arn(name)),
            description: stored.description.clone(),
            kms_key_id: stored.kms_key_id.clone(),
            tags: stored.tags.clone(),
            version_ids_to_stages: BTreeMap::from([(
                format!("v{}", stored.version),
                vec!["AWSCURRENT".to_string()],
            )]),
            ..Default::default()
        })
    }

    fn delete_secret(&self, request: &DeleteRequest) -> Result<DeletedSecret> {
        self.secrets
            .borrow_mut()
            .remove(&request.name)
            .ok_or_else(|| VaultError::NotFound(request.name.clone()))?;
        Ok(DeletedSecret {
            name: request.name.clone(),
            arn: Some(Self::arn(&request.name)),
            deletion_date: Some("2026-01-01T00:00:00Z".into()),
        })
    }
}
