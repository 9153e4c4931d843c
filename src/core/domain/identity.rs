//! Caller identity.

use serde::Serialize;

/// Who the vault credentials belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallerIdentity {
    pub account: Option<String>,
    pub arn: Option<String>,
    pub user_id: Option<String>,
}

impl std::fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.arn, &self.account) {
            (Some(arn), _) => write!(f, "{}", arn),
            (None, Some(account)) => write!(f, "account {}", account),
            (None, None) => write!(f, "unknown caller"),
        }
    }
}
