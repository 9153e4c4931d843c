//! Error types.
//!
//! Every fallible operation returns [`Result`]. Validation and source errors
//! are raised before any network call; vault errors come from the adapter.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error("{path} already exists, refusing to overwrite")]
    FileExists { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bad flags or malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("invalid secret name '{0}': only letters, digits and /_+=.@- are allowed (max 512 characters)")]
    InvalidName(String),

    #[error("invalid tag '{0}': expected key=value")]
    InvalidTag(String),

    #[error("invalid recovery window '{0}': must be an integer between 7 and 30")]
    RecoveryDays(String),

    #[error("--recovery-days and --force-delete-without-recovery cannot be used together")]
    RecoveryConflict,

    #[error("deleting a secret requires confirmation: pass --yes")]
    ConfirmationRequired,

    #[error("nothing to update: provide a new value, --description or --kms-key-id")]
    NothingToUpdate,

    #[error("no command specified")]
    NoCommand,

    #[error("prefix cannot be empty")]
    EmptyPrefix,

    #[error("secret '{0}' is not a JSON object of key/value pairs")]
    NotKeyValueJson(String),
}

/// Problems choosing where a secret value comes from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Use only one secret value source: --value, --value-stdin, or --file.")]
    MultipleSources,

    #[error("a secret value is required: use --value, --value-stdin, or --file")]
    MissingSource,

    #[error("--value-stdin was given but no input is piped to stdin")]
    NoStdin,
}

/// Failures reported by the vault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("secret already exists: {0}")]
    Conflict(String),

    #[error("access denied: {0}")]
    Access(String),

    #[error("{0}")]
    Generic(String),
}

impl VaultError {
    /// Map a vault error code to a variant.
    ///
    /// `subject` names the secret for not-found and conflict errors;
    /// `message` carries the vault's own text for the rest.
    pub fn from_code(code: Option<&str>, subject: &str, message: &str) -> Self {
        match code {
            Some("ResourceExistsException") => Self::Conflict(subject.to_string()),
            Some("ResourceNotFoundException") => Self::NotFound(subject.to_string()),
            Some(
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "InvalidClientTokenId"
                | "ExpiredTokenException"
                | "InvalidSignatureException",
            ) => Self::Access(message.to_string()),
            _ => Self::Generic(message.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
