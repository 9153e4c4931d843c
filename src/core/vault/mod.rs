//! Vault backends.
//!
//! [`SecretsVault`] is the seam between secret operations and the service
//! that stores them. [`aws::AwsVault`] talks to AWS Secrets Manager; tests
//! use an in-memory mock.

pub mod aws;
#[cfg(test)]
pub mod mock;

use zeroize::Zeroizing;

use crate::core::domain::{CallerIdentity, DeletedSecret, SecretMetadata, SecretSummary, SecretWriteResult, Tag};
use crate::error::Result;

pub use aws::AwsVault;

/// Parameters for creating a secret.
pub struct CreateRequest {
    pub name: String,
    pub value: Zeroizing<String>,
    pub description: Option<String>,
    pub kms_key_id: Option<String>,
    pub tags: Vec<Tag>,
}

/// Parameters for updating a secret. `None` fields are left unchanged.
pub struct UpdateRequest {
    pub name: String,
    pub value: Option<Zeroizing<String>>,
    pub description: Option<String>,
    pub kms_key_id: Option<String>,
}

/// Parameters for deleting a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub name: String,
    pub recovery_window_days: Option<i64>,
    pub force_without_recovery: bool,
}

/// One page of `ListSecrets`.
#[derive(Debug, Clone, Default)]
pub struct SecretPage {
    pub secrets: Vec<SecretSummary>,
    pub next_token: Option<String>,
}

/// Operations a secret store provides.
///
/// Implementations translate their native failures into `VaultError`.
pub trait SecretsVault {
    /// Check credentials and connectivity.
    fn verify_identity(&self) -> Result<CallerIdentity>;

    /// Current string value of a secret, `None` for binary secrets.
    fn get_secret_string(&self, name: &str) -> Result<Option<Zeroizing<String>>>;

    fn create_secret(&self, request: &CreateRequest) -> Result<SecretWriteResult>;

    fn update_secret(&self, request: &UpdateRequest) -> Result<SecretWriteResult>;

    /// Fetch one page, starting at `next_token`.
    fn list_page(&self, next_token: Option<&str>) -> Result<SecretPage>;

    /// Metadata for a secret, without its value.
    fn describe_secret(&self, name: &str) -> Result<SecretMetadata>;

    fn delete_secret(&self, request: &DeleteRequest) -> Result<DeletedSecret>;
}

/// Iterator over every page of a listing.
///
/// Follows continuation tokens until the vault stops returning one. Stops
/// after the first error.
pub struct ListPages<'a> {
    vault: &'a dyn SecretsVault,
    next_token: Option<String>,
    done: bool,
}

impl<'a> ListPages<'a> {
    pub fn new(vault: &'a dyn SecretsVault) -> Self {
        Self {
            vault,
            next_token: None,
            done: false,
        }
    }
}

impl Iterator for ListPages<'_> {
    type Item = Result<Vec<SecretSummary>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.vault.list_page(self.next_token.as_deref()) {
            Ok(page) => {
                self.next_token = page.next_token.filter(|t| !t.is_empty());
                self.done = self.next_token.is_none();
                Some(Ok(page.secrets))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
