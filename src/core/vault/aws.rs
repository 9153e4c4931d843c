//! AWS Secrets Manager backend.
//!
//! Uses credentials from the environment (AWS_ACCESS_KEY_ID, etc.) or the
//! default credential provider chain. Profile and region come from the
//! resolved [`AwsScope`]; `SECRETENV_AWS_ENDPOINT` points both clients at an
//! emulator such as LocalStack.

use std::collections::BTreeMap;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::primitives::DateTime;
use aws_sdk_secretsmanager::types::Tag as AwsTag;
use aws_sdk_secretsmanager::Client;
use chrono::SecondsFormat;
use tokio::runtime::Runtime;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{CreateRequest, DeleteRequest, SecretPage, SecretsVault, UpdateRequest};
use crate::core::constants::LIST_PAGE_SIZE;
use crate::core::domain::{
    CallerIdentity, DeletedSecret, SecretMetadata, SecretSummary, SecretWriteResult,
};
use crate::core::scope::AwsScope;
use crate::error::{Result, VaultError};

/// Secrets Manager client plus the runtime that drives it.
///
/// The SDK is async; every call is run to completion on a private
/// current-thread runtime.
pub struct AwsVault {
    runtime: Runtime,
    client: Client,
    sts: aws_sdk_sts::Client,
}

impl AwsVault {
    /// Build clients for the given scope.
    ///
    /// No request is sent until an operation is called.
    pub fn connect(scope: &AwsScope, endpoint: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        debug!(
            profile = scope.profile.as_deref().unwrap_or("<default>"),
            region = scope.region.as_deref().unwrap_or("<default>"),
            endpoint = endpoint.unwrap_or("<default>"),
            "loading AWS config"
        );

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(profile) = &scope.profile {
                loader = loader.profile_name(profile);
            }
            if let Some(region) = &scope.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(url) = endpoint {
                loader = loader.endpoint_url(url);
            }
            loader.load().await
        });

        Ok(Self {
            runtime,
            client: Client::new(&config),
            sts: aws_sdk_sts::Client::new(&config),
        })
    }
}

impl SecretsVault for AwsVault {
    fn verify_identity(&self) -> Result<CallerIdentity> {
        let output = self
            .runtime
            .block_on(self.sts.get_caller_identity().send())
            .map_err(|e| VaultError::Access(DisplayErrorContext(&e).to_string()))?;

        let identity = CallerIdentity {
            account: output.account().map(String::from),
            arn: output.arn().map(String::from),
            user_id: output.user_id().map(String::from),
        };
        debug!(caller = %identity, "verified AWS identity");
        Ok(identity)
    }

    fn get_secret_string(&self, name: &str) -> Result<Option<Zeroizing<String>>> {
        trace!(name, "GetSecretValue");
        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(name).send())
            .map_err(|e| translate(e, name))?;

        Ok(output.secret_string().map(|s| Zeroizing::new(s.to_string())))
    }

    fn create_secret(&self, request: &CreateRequest) -> Result<SecretWriteResult> {
        trace!(name = %request.name, tags = request.tags.len(), "CreateSecret");
        let tags: Vec<AwsTag> = request
            .tags
            .iter()
            .map(|t| AwsTag::builder().key(&t.key).value(&t.value).build())
            .collect();

        let call = self
            .client
            .create_secret()
            .name(&request.name)
            .secret_string(request.value.as_str())
            .set_description(request.description.clone())
            .set_kms_key_id(request.kms_key_id.clone())
            .set_tags((!tags.is_empty()).then_some(tags));

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| translate(e, &request.name))?;

        Ok(SecretWriteResult {
            name: output.name().unwrap_or(&request.name).to_string(),
            arn: output.arn().map(String::from),
            version_id: output.version_id().map(String::from),
        })
    }

    fn update_secret(&self, request: &UpdateRequest) -> Result<SecretWriteResult> {
        trace!(name = %request.name, has_value = request.value.is_some(), "UpdateSecret");
        let call = self
            .client
            .update_secret()
            .secret_id(&request.name)
            .set_secret_string(request.value.as_ref().map(|v| v.to_string()))
            .set_description(request.description.clone())
            .set_kms_key_id(request.kms_key_id.clone());

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| translate(e, &request.name))?;

        Ok(SecretWriteResult {
            name: output.name().unwrap_or(&request.name).to_string(),
            arn: output.arn().map(String::from),
            version_id: output.version_id().map(String::from),
        })
    }

    fn list_page(&self, next_token: Option<&str>) -> Result<SecretPage> {
        trace!(continued = next_token.is_some(), "ListSecrets");
        let call = self
            .client
            .list_secrets()
            .max_results(LIST_PAGE_SIZE)
            .set_next_token(next_token.map(String::from));

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| translate(e, "list"))?;

        let secrets = output
            .secret_list()
            .iter()
            .map(|entry| SecretSummary {
                name: entry.name().unwrap_or_default().to_string(),
                arn: entry.arn().map(String::from),
                description: entry.description().map(String::from),
                created_date: entry.created_date().and_then(format_date),
                last_changed_date: entry.last_changed_date().and_then(format_date),
                tags: tag_map(entry.tags()),
            })
            .collect();

        Ok(SecretPage {
            secrets,
            next_token: output.next_token().map(String::from),
        })
    }

    fn describe_secret(&self, name: &str) -> Result<SecretMetadata> {
        trace!(name, "DescribeSecret");
        let output = self
            .runtime
            .block_on(self.client.describe_secret().secret_id(name).send())
            .map_err(|e| translate(e, name))?;

        let version_ids_to_stages = output
            .version_ids_to_stages()
            .map(|m| {
                m.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<BTreeMap<_, _>>()
            })
            .unwrap_or_default();

        Ok(SecretMetadata {
            name: output.name().unwrap_or(name).to_string(),
            arn: output.arn().map(String::from),
            description: output.description().map(String::from),
            kms_key_id: output.kms_key_id().map(String::from),
            rotation_enabled: output.rotation_enabled(),
            created_date: output.created_date().and_then(format_date),
            last_changed_date: output.last_changed_date().and_then(format_date),
            last_accessed_date: output.last_accessed_date().and_then(format_date),
            deleted_date: output.deleted_date().and_then(format_date),
            tags: tag_map(output.tags()),
            version_ids_to_stages,
        })
    }

    fn delete_secret(&self, request: &DeleteRequest) -> Result<DeletedSecret> {
        trace!(
            name = %request.name,
            recovery_days = ?request.recovery_window_days,
            force = request.force_without_recovery,
            "DeleteSecret"
        );
        let call = self
            .client
            .delete_secret()
            .secret_id(&request.name)
            .set_recovery_window_in_days(request.recovery_window_days)
            .set_force_delete_without_recovery(request.force_without_recovery.then_some(true));

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| translate(e, &request.name))?;

        Ok(DeletedSecret {
            name: output.name().unwrap_or(&request.name).to_string(),
            arn: output.arn().map(String::from),
            deletion_date: output.deletion_date().and_then(format_date),
        })
    }
}

/// Map an SDK failure onto a `VaultError`.
///
/// Service errors are classified by their error code. Anything that never
/// reached the service (no credentials, no region, connection refused) is
/// reported with its full context.
fn translate<E, R>(err: SdkError<E, R>, subject: &str) -> VaultError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let Some(service) = err.as_service_error() {
        let code = service.code();
        let message = service.message().or(code).unwrap_or("unknown vault error");
        debug!(code = code.unwrap_or("<none>"), subject, "vault service error");
        return VaultError::from_code(code, subject, message);
    }

    let message = DisplayErrorContext(&err).to_string();
    if message.contains("credentials") {
        VaultError::Access(message)
    } else {
        VaultError::Generic(message)
    }
}

fn tag_map(tags: &[AwsTag]) -> BTreeMap<String, String> {
    tags.iter()
        .filter_map(|t| Some((t.key()?.to_string(), t.value().unwrap_or_default().to_string())))
        .collect()
}

fn format_date(date: &DateTime) -> Option<String> {
    chrono::DateTime::from_timestamp(date.secs(), date.subsec_nanos())
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
}
