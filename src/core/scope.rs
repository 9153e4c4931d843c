//! AWS scope resolution.
//!
//! Commands accept `--profile`/`--region` at several levels; the innermost
//! level wins field by field.

/// Profile and region a command targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsScope {
    pub profile: Option<String>,
    pub region: Option<String>,
}

impl AwsScope {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self { profile, region }
    }
}

/// Merge local over global, independently per field.
pub fn resolve_scope(local: &AwsScope, global: &AwsScope) -> AwsScope {
    AwsScope {
        profile: local.profile.clone().or_else(|| global.profile.clone()),
        region: local.region.clone().or_else(|| global.region.clone()),
    }
}
