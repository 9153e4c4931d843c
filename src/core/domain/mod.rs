//! Domain types.

mod identity;
mod secret;

pub use identity::CallerIdentity;
pub use secret::{
    DeletedSecret, ImportAction, ImportedSecret, SecretMetadata, SecretSummary,
    SecretWriteResult, Tag,
};
