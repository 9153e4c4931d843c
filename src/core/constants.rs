//! Constants used throughout secretenv.
//!
//! Centralizes magic strings and vault limits.

/// Skip reason recorded for repeated keys.
pub const DUPLICATE_KEY: &str = "duplicate key";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SECRETENV_LOG";

/// Environment variable overriding the vault endpoint (e.g. LocalStack).
pub const ENDPOINT_ENV: &str = "SECRETENV_AWS_ENDPOINT";

/// Longest secret name Secrets Manager accepts.
pub const MAX_NAME_LEN: usize = 512;

/// Characters allowed in a secret name besides ASCII letters and digits.
pub const NAME_SPECIAL_CHARS: &str = "/_+=.@-";

/// Shortest recovery window, in days.
pub const MIN_RECOVERY_DAYS: i64 = 7;

/// Longest recovery window, in days.
pub const MAX_RECOVERY_DAYS: i64 = 30;

/// Page size requested from `ListSecrets`.
pub const LIST_PAGE_SIZE: i32 = 100;

/// Rendered by the table formatter when there are no rows.
pub const NO_RESULTS: &str = "No results.";
